//! vecsim demo - replays the worked examples for each metric
//!
//! Set `RUST_LOG=vecsim=trace` to see dimension checks as they reject input.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vecsim::{
    cosine_similarity, cosine_similarity_2d, dot_product, dot_product_2d, euclidean_distance,
    euclidean_distance_2d, MetricConfig,
};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vecsim=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "running vecsim demo");
    dot_product_examples()?;
    euclidean_examples()?;
    cosine_examples()?;
    error_examples();
    config_example()?;
    Ok(())
}

fn dot_product_examples() -> Result<()> {
    println!("--- Dot product ---");

    let (a, b) = ([1.0, 2.0], [3.0, 4.0]);
    println!("2D {:?} . {:?} = {}", a, b, dot_product_2d(&a, &b)?);

    let pairs = [
        (vec![1.0, 2.0], vec![3.0, 4.0]),
        (vec![1.0, 2.0, 3.0], vec![4.0, -1.0, 0.0]),
        (vec![1.0, 0.0, -1.0, 2.0], vec![3.0, 2.0, 0.0, -1.0]),
    ];
    for (a, b) in pairs {
        println!("{}D {:?} . {:?} = {}", a.len(), a, b, dot_product(&a, &b)?);
    }
    Ok(())
}

fn euclidean_examples() -> Result<()> {
    println!("\n--- Euclidean distance ---");

    let (a, b) = ([1.0, 2.0], [4.0, 6.0]);
    println!("2D {:?} <-> {:?} = {:.4}", a, b, euclidean_distance_2d(&a, &b)?);

    let a = [10.0, 20.0, 30.0, 40.0, 50.0];
    let b = [11.0, 22.0, 29.0, 41.0, 53.0];
    println!("5D {:?} <-> {:?} = {:.4}", a, b, euclidean_distance(&a, &b)?);
    Ok(())
}

fn cosine_examples() -> Result<()> {
    println!("\n--- Cosine similarity (2D) ---");
    let a = [1.0, 1.0];
    let others: [(&str, [f64; 2]); 4] = [
        ("same direction", [2.0, 2.0]),
        ("45 degrees", [1.0, 0.0]),
        ("opposite", [-1.0, -1.0]),
        ("zero vector", [0.0, 0.0]),
    ];
    for (label, b) in others {
        println!("{:?} vs {:?} ({}): {:.4}", a, b, label, cosine_similarity_2d(&a, &b)?);
    }

    println!("\n--- Cosine similarity (N-D) ---");
    let x = [1.0, 2.0, 3.0, 4.0];
    let others: [(&str, [f64; 4]); 3] = [
        ("similar", [5.0, 6.0, 7.0, 8.0]),
        ("opposite", [-1.0, -2.0, -3.0, -4.0]),
        ("zero vector", [0.0, 0.0, 0.0, 0.0]),
    ];
    for (label, b) in others {
        println!("{:?} vs {:?} ({}): {:.4}", x, b, label, cosine_similarity(&x, &b)?);
    }
    let (p, q) = ([1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]);
    println!("{:?} vs {:?} (orthogonal): {:.4}", p, q, cosine_similarity(&p, &q)?);
    Ok(())
}

fn error_examples() {
    println!("\n--- Dimension errors ---");

    let cases: [(&str, Result<f64, vecsim::MetricError>); 4] = [
        ("dot_product([1, 2, 3], [4, 5])", dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0])),
        ("dot_product([1], [4, 5])", dot_product(&[1.0], &[4.0, 5.0])),
        (
            "cosine_similarity_2d([1, 2, 3], [4, 5])",
            cosine_similarity_2d(&[1.0, 2.0, 3.0], &[4.0, 5.0]),
        ),
        (
            "cosine_similarity([1, 2, 3], [4, 5])",
            cosine_similarity(&[1.0, 2.0, 3.0], &[4.0, 5.0]),
        ),
    ];
    for (call, result) in cases {
        match result {
            Ok(value) => println!("{} = {} (unexpected)", call, value),
            Err(e) => println!("{} -> {}", call, e),
        }
    }
}

fn config_example() -> Result<()> {
    println!("\n--- Configured metric ---");

    let config = MetricConfig::from_json_str(r#"{"kind": "euclidean", "dimension": {"exactly": 2}}"#)?;
    let metric = config.build()?;
    let (a, b) = ([0.0, 0.0], [3.0, 4.0]);
    println!(
        "{} ({}) {:?} <-> {:?} = {:.4}",
        metric.name(),
        config.dimension,
        a,
        b,
        metric.compute(&a, &b)?
    );
    Ok(())
}

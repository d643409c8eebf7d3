//! Gap clustering and vertex aggregation on a small hand-made event.
//!
//! Run with `RUST_LOG=debug` to see the per-cluster diagnostics.

use tracing_subscriber::EnvFilter;
use zvertex::{find_vertices, GapConfig, Track};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Three interaction points: near -4.9, near 3.0, and a lone track at 10.
    let tracks = vec![
        Track::new(-5.0, 0.10),
        Track::new(3.05, 0.20),
        Track::new(-4.9, 0.05),
        Track::new(10.0, 0.30),
        Track::new(-4.8, 0.10),
        Track::new(3.0, 0.15),
    ];

    let config = GapConfig::new(0.5).with_verbose(true);
    let vertices = match find_vertices(&tracks, &config) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("vertex finding failed: {err}");
            std::process::exit(1);
        }
    };

    println!("=== Gap vertices (zSeparation = {}) ===", config.z_separation);
    for (i, v) in vertices.iter().enumerate() {
        let members: Vec<String> = v.tracks().iter().map(|t| format!("{:.2}", t.z)).collect();
        println!(
            "  vertex {i}: z = {:7.3} +/- {:.4}  tracks [{}]",
            v.position(),
            v.uncertainty(),
            members.join(", ")
        );
    }

    // Conflicting exact measurements are reported, not resolved.
    let conflicting = vec![Track::new(0.0, 0.0), Track::new(0.1, 0.0)];
    if let Err(err) = find_vertices(&conflicting, &config) {
        println!("\n  rejected: {err}");
    }
}

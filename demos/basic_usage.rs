// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the treecfg crate.
//!
//! This example demonstrates:
//! - Bootstrapping a missing configuration file
//! - Reading values with defaults
//! - Shallow and deep writes
//! - Writing the document back to disk
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- /tmp/demo-config.json
//! ```

use std::path::PathBuf;
use treecfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== treecfg: Basic Usage ===\n");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("treecfg-demo.json"));

    let mut config = JsonConfigReader::new(&path);
    config.read()?;
    println!("Loaded {}", config.path().display());

    // Example 1: Reading with defaults
    println!("\n--- Example 1: Defaults ---");
    let host = config.get_or_default("127.0.0.1".to_string(), ["server", "host"]);
    let port = config.get_or_default(8080_u16, ["server", "port"]);
    println!("server = {}:{}", host, port);

    // Example 2: Shallow writes need their parent object
    println!("\n--- Example 2: Shallow vs Deep ---");
    match config.set(true, ["features", "metrics"]) {
        Ok(()) => println!("✓ features.metrics set"),
        Err(e) => println!("✗ shallow set failed: {}", e),
    }
    config.set_deep(true, ["features", "metrics"])?;
    println!("✓ features.metrics set with set_deep");

    // Example 3: Collections
    println!("\n--- Example 3: Collections ---");
    let mut levels = config.get_or_default(Vec::<String>::new(), ["logging", "levels"]);
    if levels.is_empty() {
        levels = vec!["info".to_string(), "warn".to_string()];
    }
    config.set_deep(&levels[..], ["logging", "levels"])?;
    println!("logging.levels = {:?}", levels);

    config.set_deep(host, ["server", "host"])?;
    config.set_deep(port, ["server", "port"])?;
    config.write(4)?;
    println!("\nWrote {}", config.path().display());

    Ok(())
}

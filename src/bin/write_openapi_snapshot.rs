// src/bin/write_openapi_snapshot.rs
use account_service::{config::AppConfig, presentation::http::openapi::write_openapi_snapshot};
use anyhow::Result;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let output_path = config.openapi_snapshot_path();
    write_openapi_snapshot(output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}

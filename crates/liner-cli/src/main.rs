use std::path::Path;

use anyhow::Result;
use liner_import::{ImportConfig, ImportManager};
use tracing_subscriber::EnvFilter;

/// Configuración opcional en el directorio de trabajo; sin flags ni más
/// superficie de CLI: ejecutar es convertir.
const CONFIG_FILE: &str = "liner.toml";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = if Path::new(CONFIG_FILE).exists() {
        ImportConfig::from_file(CONFIG_FILE)?
    } else {
        ImportConfig::default()
    };

    let report = ImportManager::new(config).run()?;
    println!("Done! {} albums -> {}", report.albums, report.output.display());

    Ok(())
}

pub mod codegen;
pub mod error;
pub mod import_config;
pub mod scanning;

use std::fs;
use std::path::PathBuf;

use tracing::info;

pub use liner_core::{Album, format_album_id};

pub use crate::error::ImportError;
pub use crate::import_config::{ImportConfig, ImportConfigBuilder};
pub use crate::scanning::Scanner;

/// Resumen de una conversión completada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub albums: usize,
    pub output: PathBuf,
}

/// Orquesta la conversión completa: lectura del listado, clasificación y
/// escritura del módulo generado. Una pasada, sin estado entre ejecuciones:
/// la misma entrada produce byte a byte la misma salida.
pub struct ImportManager {
    config: ImportConfig,
}

impl ImportManager {
    pub fn new(config: ImportConfig) -> Self {
        ImportManager { config }
    }

    pub fn run(&self) -> Result<ImportReport, ImportError> {
        info!("Reading listing from {}", self.config.source_path.display());
        let raw = fs::read_to_string(&self.config.source_path).map_err(|source| {
            ImportError::Source {
                path: self.config.source_path.clone(),
                source,
            }
        })?;

        let albums = Scanner::new(&self.config).scan(&raw);
        info!("Classified {} albums", albums.len());

        codegen::write_module(&self.config.output_path, &albums)?;
        info!("Wrote {}", self.config.output_path.display());

        Ok(ImportReport {
            albums: albums.len(),
            output: self.config.output_path.clone(),
        })
    }
}

use serde::{Deserialize, Serialize};

/// Registro de un álbum tal y como se publica en el módulo generado.
///
/// Se construye incrementalmente durante el escaneo y se vuelve inmutable
/// al finalizarse; después de eso solo se serializa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Ordinal denso con relleno de ceros: `a001`, `a002`, …
    pub id: String,
    pub artist: String,
    /// Puede quedar vacío cuando la entrada no llevaba separador explícito.
    pub title: String,
    /// Heredado del último encabezado de género visto; `"Unknown"` si no hubo.
    pub genre: String,
    /// Líneas de reseña unidas por `\n`; `None` cuando no hubo reseña.
    pub review: Option<String>,
}

/// Formatea el ordinal 1-based de un registro como id estable.
pub fn format_album_id(ordinal: usize) -> String {
    format!("a{ordinal:03}")
}

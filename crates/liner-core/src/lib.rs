//! Crate `liner_core`: el modelo de datos del listado de álbumes.

mod album;

pub use album::{Album, format_album_id};

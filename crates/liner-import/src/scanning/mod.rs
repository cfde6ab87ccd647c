mod heuristics;

use liner_core::{Album, format_album_id};
use tracing::{debug, warn};

use crate::import_config::ImportConfig;

pub use heuristics::{MAX_ENTRY_CHARS, MAX_ENTRY_WORDS, SEPARATORS, looks_like_entry, split_entry};

/// Contexto de una pasada de escaneo. Todo el estado mutable del recorrido
/// (género vigente, registro pendiente, contador de ids, acumulador de
/// salida) vive aquí; no hay estado ambiente.
#[derive(Debug)]
pub struct Scanner {
    genres: Vec<String>,
    prose_openers: Vec<String>,

    genre: String,
    artist: Option<String>,
    title: String,
    review_buf: Vec<String>,
    next_id: usize,
    albums: Vec<Album>,
}

impl Scanner {
    pub fn new(config: &ImportConfig) -> Self {
        Scanner {
            genres: config.genres.clone(),
            prose_openers: config.prose_openers.clone(),
            genre: "Unknown".to_string(),
            artist: None,
            title: String::new(),
            review_buf: Vec::new(),
            next_id: 1,
            albums: Vec::new(),
        }
    }

    /// Recorre el texto completo línea a línea y devuelve los registros
    /// finalizados en orden de entrada. Una sola pasada, síncrona.
    pub fn scan(mut self, text: &str) -> Vec<Album> {
        for raw in text.lines() {
            self.feed(raw);
        }
        self.finalize();
        self.albums
    }

    /// Clasifica una línea. El orden de los pasos es el contrato:
    /// encabezado de género, línea en blanco, entrada con separador,
    /// entrada sin separador, continuación de reseña.
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if self.genres.iter().any(|g| g == line) {
            self.finalize();
            debug!(genre = line, "genre heading");
            self.genre = line.to_string();
            return;
        }

        if line.is_empty() {
            return;
        }

        if let Some((artist, title)) = split_entry(line) {
            self.finalize();
            debug!(%artist, %title, "entry with separator");
            self.artist = Some(artist);
            self.title = title;
            return;
        }

        if looks_like_entry(line, &self.prose_openers) {
            self.finalize();
            debug!(artist = line, "bare entry");
            self.artist = Some(line.to_string());
            self.title = String::new();
            return;
        }

        if self.artist.is_some() {
            self.review_buf.push(line.to_string());
        } else {
            // Prosa antes de la primera entrada: no hay registro al que unirla.
            warn!(%line, "orphan review line dropped");
        }
    }

    /// Cierra el registro pendiente: solo se emite (y consume un id) si el
    /// artista recortado no queda vacío. El estado pendiente se reinicia
    /// siempre, se haya emitido o no.
    fn finalize(&mut self) {
        if let Some(artist) = self.artist.take() {
            let artist = artist.trim().to_string();
            if !artist.is_empty() {
                let joined = self.review_buf.join("\n");
                let review = match joined.trim() {
                    "" => None,
                    r => Some(r.to_string()),
                };
                self.albums.push(Album {
                    id: format_album_id(self.next_id),
                    artist,
                    title: self.title.trim().to_string(),
                    genre: self.genre.trim().to_string(),
                    review,
                });
                self.next_id += 1;
            }
        }
        self.title.clear();
        self.review_buf.clear();
    }
}

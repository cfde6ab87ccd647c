use once_cell::sync::Lazy;
use regex::Regex;

/// Separadores "Artista - Título" habituales, en orden de prioridad.
/// Todos exigen espacio a ambos lados: un guion pegado ("Synth-Pop",
/// "Jay-Z") nunca parte la línea.
pub const SEPARATORS: &[&str] = &[" - ", " -- ", " – ", " — "];

/// Glifos de apertura de cita: una línea que empieza citando a alguien es
/// prosa de reseña, no un artista.
const QUOTE_GLYPHS: &[char] = &['"', '«', '“'];

/// Límites de forma de una entrada sin separador. Son constantes del
/// algoritmo, no configuración: la lista de aperturas varía por idioma,
/// la forma de un nombre de artista no.
pub const MAX_ENTRY_CHARS: usize = 80;
pub const MAX_ENTRY_WORDS: usize = 12;

/// Anotación final del título: desde el primer `(` o `[` hasta el final,
/// incluido el espacio que la precede ("Graduation (2007)" → "Graduation").
static TRAILING_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[(\[].*$").unwrap());

fn strip_trailing_annotation(title: &str) -> String {
    TRAILING_ANNOTATION.replace(title, "").into_owned()
}

/// Intenta partir una línea recortada en (artista, título).
///
/// Se prueba cada separador en orden de prioridad y gana el primero presente
/// en la línea cuyo único corte deja dos mitades no vacías tras recortar;
/// así los guiones incidentales de la prosa casi nunca producen entradas
/// falsas. El título devuelto ya viene sin su anotación final.
pub fn split_entry(line: &str) -> Option<(String, String)> {
    for sep in SEPARATORS {
        if let Some((left, right)) = line.split_once(sep) {
            let artist = left.trim();
            let title = right.trim();
            if !artist.is_empty() && !title.is_empty() {
                return Some((artist.to_string(), strip_trailing_annotation(title)));
            }
        }
    }
    None
}

/// Heurística de inicio de entrada sin separador: ¿es plausible que esta
/// línea sea solo un nombre de artista y no continuación de una reseña?
///
/// Se rechaza por longitud (en puntos de código, el listado es cirílico),
/// por abrir con una cita, por exceso de palabras o por empezar con una
/// apertura de prosa conocida (comparación sin mayúsculas). Todo lo demás
/// se acepta: la heurística siempre clasifica, nunca falla.
pub fn looks_like_entry(line: &str, prose_openers: &[String]) -> bool {
    if line.is_empty() {
        return false;
    }
    if line.chars().count() > MAX_ENTRY_CHARS {
        return false;
    }
    if line.starts_with(QUOTE_GLYPHS) {
        return false;
    }
    if line.split_whitespace().count() > MAX_ENTRY_WORDS {
        return false;
    }

    let lowered = line.to_lowercase();
    !prose_openers.iter().any(|p| lowered.starts_with(p.as_str()))
}

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;
use liner_core::Album;
use tracing::{Level, instrument};

use crate::error::ImportError;

/// Escapa un texto para incrustarlo en un template literal de TypeScript.
/// El orden importa: la barra invertida va primero para no re-escapar lo
/// ya escapado.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Renderiza el módulo `albums.ts` completo en memoria, en orden de entrada.
pub fn render_module(albums: &[Album]) -> String {
    let mut out = String::from(indoc! {"
        export type Album = {
          id: string;
          artist: string;
          title: string;
          genre: string;
          review: string | null;
        };

        export const albums: Album[] = [
    "});

    for album in albums {
        let review = match &album.review {
            Some(r) => format!("`{}`", escape_template_literal(r)),
            None => "null".to_string(),
        };
        out.push_str(&format!(
            "  {{ id: \"{}\", artist: `{}`, title: `{}`, genre: `{}`, review: {} }},\n",
            album.id,
            escape_template_literal(&album.artist),
            escape_template_literal(&album.title),
            escape_template_literal(&album.genre),
            review,
        ));
    }

    out.push_str("];\n");
    out
}

fn sibling_tmp(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("albums.ts"))
        .to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Escribe el módulo generado con semántica todo-o-nada: se renderiza
/// completo en memoria, se vuelca a un fichero temporal junto al destino y
/// se renombra. Si algo falla, el destino no queda a medias.
#[instrument(level = Level::DEBUG, skip(albums), err)]
pub fn write_module(path: &Path, albums: &[Album]) -> Result<(), ImportError> {
    let rendered = render_module(albums);

    let output_err = |source| ImportError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(output_err)?;
        }
    }

    let tmp = sibling_tmp(path);
    fs::write(&tmp, rendered).map_err(output_err)?;
    fs::rename(&tmp, path).map_err(output_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(id: &str, artist: &str, title: &str, review: Option<&str>) -> Album {
        Album {
            id: id.to_string(),
            artist: artist.to_string(),
            title: title.to_string(),
            genre: "Hip-Hop".to_string(),
            review: review.map(str::to_string),
        }
    }

    #[test]
    fn escapes_backslash_before_the_rest() {
        assert_eq!(escape_template_literal(r"a\b"), r"a\\b");
        assert_eq!(escape_template_literal("`${"), "\\`\\${");
        // Una barra seguida de `${` no debe colapsar en un solo escape.
        assert_eq!(escape_template_literal("\\${"), "\\\\\\${");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_template_literal("Кино"), "Кино");
        assert_eq!(escape_template_literal(""), "");
    }

    #[test]
    fn renders_null_review_as_literal_null() {
        let rendered = render_module(&[album("a001", "Suede", "Dog Man Star", None)]);
        assert!(rendered.contains("review: null }"));
        assert!(!rendered.contains("review: `` }"));
    }

    #[test]
    fn renders_a_complete_module() {
        let rendered = render_module(&[
            album("a001", "Kanye West", "Graduation", Some("На века.")),
            album("a002", "Radiohead", "", None),
        ]);

        assert!(rendered.starts_with("export type Album = {\n  id: string;\n"));
        assert!(rendered.contains(
            "  { id: \"a001\", artist: `Kanye West`, title: `Graduation`, genre: `Hip-Hop`, review: `На века.` },\n"
        ));
        assert!(rendered.contains(
            "  { id: \"a002\", artist: `Radiohead`, title: ``, genre: `Hip-Hop`, review: null },\n"
        ));
        assert!(rendered.ends_with("];\n"));
    }

    #[test]
    fn embedded_backtick_and_interpolation_are_escaped() {
        let rendered = render_module(&[album("a001", "весна` и ${осень}", "", None)]);
        assert!(rendered.contains("artist: `весна\\` и \\${осень}`"));
    }

    #[test]
    fn write_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("data").join("albums.ts");

        write_module(&out, &[album("a001", "Кино", "Группа крови", None)]).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("artist: `Кино`"));
        // El temporal no sobrevive al rename.
        assert!(!sibling_tmp(&out).exists());
    }
}

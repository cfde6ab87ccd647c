use config::{Config, File, FileFormat};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ImportError;

/// Encabezados de género del listado incluido. La comparación es por
/// igualdad exacta tras recortar la línea, nunca parcial.
const GENRE_HEADINGS: &[&str] = &[
    "Hip-Hop",
    "Indie / Twee / Jangle pop",
    "Post-Punk / Rock / Experimental",
    "Classic Rock / Metal",
    "Electronic / Ambient /",
    "Mainstream / Pop",
    "Russian",
];

/// Prefijos (en minúsculas) con los que suele abrir la prosa de reseña del
/// listado incluido. Es solo un dato de configuración: se puede sustituir por
/// otra lista para otro idioma sin tocar la clasificación.
const PROSE_OPENERS: &[&str] = &[
    "помните",
    "удивительно",
    "для ",
    "по большому",
    "это ",
    "если ",
    "то, ",
    "три ",
    "конечно",
    "серьезно",
    "примерно",
    "можно ",
    "каким",
    "один ",
    "отличн",
    "суть ",
    "холодный",
    "итак",
    "многие",
    "думаю",
    "альбом",
    "ребята",
    "группа",
    "пост-",
    "сейчас",
    "игги",
    "независимо",
    "гитары",
    "превосходное",
    "этот ",
    "как по",
    "кульминац",
    "есть ",
    "совершенно",
    "проект",
    "прежде",
    "чрезвычайно",
    "на самом",
    "ретро",
    "have fun",
    "темнее",
    "сокровище",
    "погруженный",
    "начиная",
    "симбиоз",
    "предустановленные",
    "слишком",
    "он интенсивный",
    "нельзя",
    "отлично годится",
    "длительность",
    "одноименный",
    "в любом",
    "такой вот",
    "давайте",
    "итого",
    "на дебютном",
    "нет ни",
    "песни,",
    "ты чувствуешь",
    "он затрагивает",
    "дело не",
    "форма ",
    "музыка часто",
    "как и любовь",
    "вневременные",
    "некоторые",
    "немножко",
    "открывающая",
    "сердце",
    "используя",
    "захватывающий",
    "умирать",
    "его единственный",
    "одна из",
    "но выше",
    "с темами",
    "когда я",
    "я не могу",
    "вы не встретите",
    "способность",
    "каждая ",
    "пожалуйста",
    "черт возьми",
    "royal blood",
    "с момента",
    "так что",
    "еще раз",
    "интурист",
];

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct ImportConfig {
    /// Listado de entrada, leído completo antes de escanear.
    pub source_path: PathBuf,
    /// Módulo TypeScript generado.
    pub output_path: PathBuf,
    /// Conjunto fijo de encabezados de género.
    pub genres: Vec<String>,
    /// Lista de exclusión de aperturas de prosa para la heurística de entrada.
    pub prose_openers: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            source_path: PathBuf::from("top440.txt"),
            output_path: PathBuf::from("src/data/albums.ts"),
            genres: to_owned_list(GENRE_HEADINGS),
            prose_openers: to_owned_list(PROSE_OPENERS),
        }
    }
}

impl ImportConfig {
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ImportError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()
            .map_err(ImportError::Config)?;
        let ic = cfg
            .try_deserialize::<ImportConfig>()
            .map_err(ImportError::Config)?;
        Ok(ic)
    }
}

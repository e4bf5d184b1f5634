//! Modelo de datos: entradas de la galería y sus archivos

use crate::preview::Preview;
use crate::utils::default_title;
use std::path::{Path, PathBuf};

/// Identificador opaco de una entrada. Único dentro del almacén
/// e inmutable durante toda la vida de la entrada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severidad de un hallazgo de validación
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueLevel {
    /// El archivo no cumple lo esperado (p. ej. no es una imagen)
    Bad,
    /// Aviso informativo (p. ej. tamaño excesivo)
    Warn,
}

/// Hallazgo de validación adjunto a una entrada. Siempre consultivo:
/// nunca bloquea el alta ni el reemplazo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub level: IssueLevel,
    pub text: String,
}

impl Issue {
    pub fn bad(text: impl Into<String>) -> Self {
        Self { level: IssueLevel::Bad, text: text.into() }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self { level: IssueLevel::Warn, text: text.into() }
    }
}

/// Referencia al archivo seleccionado: ruta en disco más los metadatos
/// que declara (nombre, tipo MIME, tamaño).
#[derive(Clone, Debug)]
pub struct FileRef {
    /// Ruta completa del archivo en disco
    pub path: PathBuf,
    /// Nombre para mostrar
    pub name: String,
    /// Tipo MIME declarado según la extensión; None = desconocido
    pub mime: Option<&'static str>,
    pub size: u64,
}

impl FileRef {
    /// Crea la referencia leyendo los metadatos del disco
    pub fn new(path: PathBuf) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(&path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "desconocido".to_string());
        let mime = mime_from_path(&path);

        Ok(Self {
            path,
            name,
            mime,
            size: metadata.len(),
        })
    }

    /// Tipo MIME para mostrar ("desconocido" si no se reconoce)
    pub fn mime_display(&self) -> &str {
        self.mime.unwrap_or("desconocido")
    }

    /// ¿El tipo declarado es de imagen?
    pub fn is_image(&self) -> bool {
        self.mime.map(|m| m.starts_with("image/")).unwrap_or(false)
    }
}

/// Tipo MIME declarado a partir de la extensión del archivo.
/// Sólo los tipos que la aplicación reconoce; el resto es desconocido.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "tif" | "tiff" => Some("image/tiff"),
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "zip" => Some("application/zip"),
        _ => None,
    }
}

/// Una entrada de la galería: archivo, miniatura, título editable
/// y hallazgos de validación.
#[derive(Debug)]
pub struct Item {
    pub id: ItemId,
    pub file: FileRef,
    /// Miniatura previsualizable; su textura se libera al soltarla
    pub preview: Preview,
    /// Se incrementa en cada reemplazo: los resultados de carga con una
    /// generación vieja se descartan
    pub generation: u64,
    pub title: String,
    /// Hallazgos de la validación del archivo actual, en orden
    pub issues: Vec<Issue>,
}

impl Item {
    /// Crea una entrada nueva para un archivo recién seleccionado
    pub fn new(id: ItemId, file: FileRef) -> Self {
        let title = default_title(&file.name);
        let issues = crate::validation::validate_file(&file);
        Self {
            id,
            file,
            preview: Preview::Loading,
            generation: 0,
            title,
            issues,
        }
    }
}

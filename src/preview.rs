//! Miniaturas: decodificación y ciclo de vida de la textura

use crate::item::ItemId;
use std::path::Path;

/// Lado máximo de una miniatura en píxeles
pub const THUMB_MAX_DIM: u32 = 512;

/// Estado de la miniatura de una entrada.
///
/// `Ready` es el único dueño de su textura: al soltar el valor (reemplazo,
/// borrado o limpieza) la textura se libera exactamente una vez.
pub enum Preview {
    /// Carga en curso en un hilo de trabajo
    Loading,
    /// Textura lista para dibujar
    Ready(egui::TextureHandle),
    /// La decodificación falló (p. ej. el archivo no es una imagen)
    Failed(String),
}

impl Preview {
    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        match self {
            Preview::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Preview::Loading)
    }
}

impl std::fmt::Debug for Preview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preview::Loading => write!(f, "Loading"),
            Preview::Ready(handle) => write!(f, "Ready({:?})", handle.id()),
            Preview::Failed(err) => write!(f, "Failed({:?})", err),
        }
    }
}

/// Resultado de un hilo de carga de miniaturas. La generación permite
/// descartar resultados de un archivo ya reemplazado.
pub struct PreviewEvent {
    pub id: ItemId,
    pub generation: u64,
    pub result: Result<egui::TextureHandle, String>,
}

/// Decodifica un archivo de imagen y lo reduce a tamaño de miniatura.
pub fn decode_preview(path: &Path) -> Result<egui::ColorImage, String> {
    let img = image::open(path).map_err(|e| e.to_string())?;
    let thumb = img.thumbnail(THUMB_MAX_DIM, THUMB_MAX_DIM);
    let rgba = thumb.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

/// Decodifica y sube la miniatura como textura. Pensada para ejecutarse
/// en un hilo de trabajo; el contexto de egui admite asignar texturas
/// desde cualquier hilo.
pub fn load_preview(
    ctx: &egui::Context,
    id: ItemId,
    path: &Path,
) -> Result<egui::TextureHandle, String> {
    let image = match decode_preview(path) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("miniatura {} falló: {}", path.display(), e);
            return Err(e);
        }
    };
    Ok(ctx.load_texture(
        format!("miniatura-{}", id),
        image,
        egui::TextureOptions::LINEAR,
    ))
}

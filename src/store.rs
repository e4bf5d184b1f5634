//! Almacén de entradas: alta, reemplazo, borrado y limpieza

use crate::item::{FileRef, Item, ItemId};
use crate::preview::Preview;
use crate::utils::default_title;
use crate::validation::validate_file;

/// Almacén en memoria de las entradas de la galería.
///
/// Dueño exclusivo de la lista y de la miniatura de cada entrada: toda
/// textura asignada se libera exactamente una vez, al sobrescribirla en un
/// reemplazo, al borrar su entrada o al vaciar la lista. Ninguna operación
/// falla; un id inexistente es un no-op.
#[derive(Default)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    /// Añade una entrada por archivo, al final y en el orden recibido.
    /// Ningún archivo se rechaza: los problemas quedan como hallazgos de
    /// la entrada. Devuelve los ids creados.
    pub fn add_files(&mut self, files: Vec<FileRef>) -> Vec<ItemId> {
        let mut ids = Vec::with_capacity(files.len());
        for file in files {
            let id = ItemId(self.next_id);
            self.next_id += 1;
            self.items.push(Item::new(id, file));
            ids.push(id);
        }
        ids
    }

    /// Borra la entrada con ese id (primera coincidencia). Soltar la
    /// entrada libera su miniatura. Devuelve false si el id no existe.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|it| it.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Reemplaza el archivo de una entrada conservando su id. La miniatura
    /// anterior se libera al sobrescribirla, antes de encargar la nueva.
    /// Un título vacío se rellena con el título por defecto del archivo
    /// nuevo; un título editado por el usuario se conserva.
    ///
    /// Devuelve la generación nueva para encargar la carga de miniatura,
    /// o None si el id no existe.
    pub fn replace_item(&mut self, id: ItemId, new_file: FileRef) -> Option<u64> {
        let item = self.items.iter_mut().find(|it| it.id == id)?;

        item.preview = Preview::Loading;
        item.issues = validate_file(&new_file);
        if item.title.is_empty() {
            item.title = default_title(&new_file.name);
        }
        item.file = new_file;
        item.generation += 1;
        Some(item.generation)
    }

    /// Vacía la lista; cada miniatura se libera al soltar su entrada.
    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Fija el título de la entrada al texto recortado. Sin validación
    /// del contenido; id inexistente: sin efecto.
    pub fn set_title(&mut self, id: ItemId, text: &str) {
        if let Some(item) = self.items.iter_mut().find(|it| it.id == id) {
            item.title = text.trim().to_string();
        }
    }

    /// Escritura directa del título mientras el campo de edición tiene el
    /// foco; el recorte se aplica al confirmar con `set_title`.
    pub fn edit_title(&mut self, id: ItemId, text: &str) {
        if let Some(item) = self.items.iter_mut().find(|it| it.id == id) {
            item.title = text.to_string();
        }
    }

    /// Adjunta el resultado de un hilo de carga de miniaturas. Si la
    /// entrada ya no existe o fue reemplazada (generación distinta), el
    /// resultado se descarta y su textura se libera aquí mismo.
    pub fn attach_preview(
        &mut self,
        id: ItemId,
        generation: u64,
        result: Result<egui::TextureHandle, String>,
    ) {
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            return;
        };
        if item.generation != generation {
            // Resultado obsoleto: se suelta al salir
            return;
        }
        item.preview = match result {
            Ok(handle) => Preview::Ready(handle),
            Err(e) => Preview::Failed(e),
        };
    }
}

//! Acciones de la aplicación

use super::state::{App, DialogResult};
use cargador_imagenes::item::{FileRef, ItemId};
use cargador_imagenes::preview::{self, PreviewEvent};
use cargador_imagenes::utils::format_size;
use std::path::PathBuf;

/// Extensiones ofrecidas en el filtro "Imágenes" de los diálogos
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

impl App {
    // === Diálogos de archivos (asíncronos) ===

    /// Elegir archivos para añadir a la galería
    pub fn pick_files_dialog(&mut self) {
        let tx = self.dialog_tx.clone();
        std::thread::spawn(move || {
            if let Some(paths) = rfd::FileDialog::new()
                .set_title("Seleccionar archivos")
                .add_filter("Imágenes", &IMAGE_EXTENSIONS)
                .add_filter("Todos los archivos", &["*"])
                .pick_files()
            {
                let _ = tx.send(DialogResult::AddFiles(paths));
            }
        });
    }

    /// Elegir el archivo que reemplaza a una entrada
    pub fn pick_replacement_dialog(&mut self, id: ItemId) {
        let tx = self.dialog_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Reemplazar imagen")
                .add_filter("Imágenes", &IMAGE_EXTENSIONS)
                .add_filter("Todos los archivos", &["*"])
                .pick_file()
            {
                let _ = tx.send(DialogResult::ReplaceFile(id, path));
            }
        });
    }

    /// Elegir el destino donde guardar una copia del archivo
    pub fn pick_save_dialog(&mut self, id: ItemId) {
        let Some(item) = self.store.get(id) else { return };
        let file_name = item.file.name.clone();
        let tx = self.dialog_tx.clone();

        std::thread::spawn(move || {
            let mut dialog = rfd::FileDialog::new()
                .set_title("Guardar copia")
                .set_file_name(&file_name);
            if let Some(dir) = dirs::download_dir() {
                dialog = dialog.set_directory(dir);
            }
            if let Some(dest) = dialog.save_file() {
                let _ = tx.send(DialogResult::SaveCopy(id, dest));
            }
        });
    }

    /// Procesar los resultados de los diálogos de archivos
    pub fn process_dialog_results(&mut self) {
        // Recogemos primero todos los resultados para liberar el borrow
        let results: Vec<DialogResult> = {
            let mut res = Vec::new();
            while let Ok(result) = self.dialog_rx.try_recv() {
                res.push(result);
            }
            res
        };

        for result in results {
            match result {
                DialogResult::AddFiles(paths) => self.add_files(paths),
                DialogResult::ReplaceFile(id, path) => self.replace_item(id, path),
                DialogResult::SaveCopy(id, dest) => self.save_copy(id, dest),
            }
        }
    }

    // === Operaciones sobre la galería ===

    /// Añadir archivos a la galería. Un archivo ilegible se anota en el
    /// registro; el resto se añade igualmente.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match FileRef::new(path.clone()) {
                Ok(file) => files.push(file),
                Err(e) => self.log(format!("❌ No se pudo leer {}: {}", path.display(), e)),
            }
        }
        if files.is_empty() {
            return;
        }

        let count = files.len();
        let ids = self.store.add_files(files);
        for id in ids {
            if let Some(item) = self.store.get(id) {
                self.spawn_preview_load(id, item.generation, item.file.path.clone());
            }
        }

        self.status_message = format!("{} archivo(s) añadido(s)", count);
        self.log(format!("➕ Añadidos {} archivo(s)", count));
    }

    /// Reemplazar el archivo de una entrada conservando su id
    pub fn replace_item(&mut self, id: ItemId, path: PathBuf) {
        let file = match FileRef::new(path) {
            Ok(file) => file,
            Err(e) => {
                self.log(format!("❌ No se pudo leer el reemplazo: {}", e));
                return;
            }
        };
        let name = file.name.clone();

        match self.store.replace_item(id, file) {
            Some(generation) => {
                if let Some(item) = self.store.get(id) {
                    self.spawn_preview_load(id, generation, item.file.path.clone());
                }
                self.log(format!("✏ Entrada {} reemplazada por '{}'", id, name));
            }
            None => self.log(format!("La entrada {} ya no existe", id)),
        }
    }

    /// Borrar una entrada
    pub fn remove_item(&mut self, id: ItemId) {
        if self.store.remove_item(id) {
            self.log(format!("🗑 Entrada {} borrada", id));
        }
    }

    /// Vaciar la galería
    pub fn clear_all(&mut self) {
        let count = self.store.len();
        self.store.clear_all();
        self.status_message = "No se seleccionaron archivos".to_string();
        self.log(format!("🧹 Galería vaciada ({} entrada(s))", count));
    }

    /// Guardar una copia del archivo de una entrada en el destino elegido
    fn save_copy(&mut self, id: ItemId, dest: PathBuf) {
        let Some(item) = self.store.get(id) else { return };
        let source = item.file.path.clone();

        match std::fs::copy(&source, &dest) {
            Ok(bytes) => self.log(format!(
                "💾 Guardado {} ({})",
                dest.display(),
                format_size(bytes)
            )),
            Err(e) => self.log(format!("❌ Error al guardar {}: {}", dest.display(), e)),
        }
    }

    // === Miniaturas ===

    /// Encargar la carga de una miniatura a un hilo de trabajo. El
    /// resultado vuelve por el canal de eventos con la generación que
    /// tenía la entrada al encargarlo.
    fn spawn_preview_load(&self, id: ItemId, generation: u64, path: PathBuf) {
        let ctx = self.egui_ctx.clone();
        let tx = self.preview_tx.clone();
        std::thread::spawn(move || {
            let result = preview::load_preview(&ctx, id, &path);
            let _ = tx.send(PreviewEvent { id, generation, result });
            ctx.request_repaint();
        });
    }
}

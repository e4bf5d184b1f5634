//! Estado de la aplicación

use cargador_imagenes::item::ItemId;
use cargador_imagenes::preview::PreviewEvent;
use cargador_imagenes::store::ItemStore;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Tipo de resultado de un diálogo de archivos
pub enum DialogResult {
    /// Archivos elegidos para añadir a la galería
    AddFiles(Vec<PathBuf>),
    /// Archivo elegido para reemplazar una entrada
    ReplaceFile(ItemId, PathBuf),
    /// Destino elegido para guardar una copia
    SaveCopy(ItemId, PathBuf),
}

/// Estructura principal de la aplicación
pub struct App {
    // === Galería ===
    /// Almacén de entradas; dueño de la lista y de las miniaturas
    pub store: ItemStore,

    // === Estado general ===
    pub status_message: String,
    pub log_messages: Vec<String>,

    // === Drag & Drop ===
    pub dropped_files: Vec<PathBuf>,

    // === Canales y contexto ===
    /// Contexto de egui; los hilos de carga lo usan para subir texturas
    pub egui_ctx: egui::Context,
    pub preview_tx: mpsc::UnboundedSender<PreviewEvent>,
    pub preview_rx: mpsc::UnboundedReceiver<PreviewEvent>,
    pub dialog_tx: mpsc::UnboundedSender<DialogResult>,
    pub dialog_rx: mpsc::UnboundedReceiver<DialogResult>,
}

impl App {
    pub fn new(ctx: &egui::Context) -> Self {
        let (preview_tx, preview_rx) = mpsc::unbounded_channel();
        let (dialog_tx, dialog_rx) = mpsc::unbounded_channel();

        Self {
            store: ItemStore::new(),
            status_message: String::new(),
            log_messages: Vec::new(),
            dropped_files: Vec::new(),
            egui_ctx: ctx.clone(),
            preview_tx,
            preview_rx,
            dialog_tx,
            dialog_rx,
        }
    }

    /// Añadir un mensaje al registro
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_messages.push(message.into());
    }
}

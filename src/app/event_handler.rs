//! Gestión de eventos de los hilos de carga

use super::state::App;
use cargador_imagenes::preview::PreviewEvent;
use std::path::PathBuf;

impl App {
    /// Procesar todos los eventos pendientes
    pub fn process_events(&mut self) {
        // Archivos soltados en la ventana
        self.process_dropped_files();

        // Recogemos los eventos en un vector para liberar el borrow
        let events: Vec<PreviewEvent> = {
            let mut events = Vec::new();
            while let Ok(event) = self.preview_rx.try_recv() {
                events.push(event);
            }
            events
        };

        for event in events {
            self.handle_event(event);
        }
    }

    /// Procesar archivos soltados (Drag & Drop)
    fn process_dropped_files(&mut self) {
        if self.dropped_files.is_empty() {
            return;
        }

        let paths = std::mem::take(&mut self.dropped_files);
        let files: Vec<PathBuf> = paths.into_iter().filter(|p| p.is_file()).collect();
        if !files.is_empty() {
            self.add_files(files);
        }
    }

    /// Adjuntar el resultado de un hilo de carga a su entrada. El almacén
    /// descarta los resultados de generaciones viejas.
    fn handle_event(&mut self, event: PreviewEvent) {
        let PreviewEvent { id, generation, result } = event;

        if let Err(e) = &result {
            self.log(format!("🖼 Sin miniatura para la entrada {}: {}", id, e));
        }
        self.store.attach_preview(id, generation, result);
    }
}

//! Vista de la galería de tarjetas

use super::widgets;
use crate::app::App;
use cargador_imagenes::item::ItemId;
use eframe::egui;

/// Acción pedida desde una tarjeta. Se recogen durante el recorrido de la
/// lista y se aplican después, para no mutar el almacén mientras se dibuja.
pub enum CardAction {
    /// El campo de título cambió (texto sin recortar, con el foco puesto)
    TitleEdit(ItemId, String),
    /// El campo de título perdió el foco: confirmar y recortar
    TitleCommit(ItemId, String),
    Replace(ItemId),
    Delete(ItemId),
    Save(ItemId),
}

impl App {
    pub fn render_gallery(&mut self, ui: &mut egui::Ui) {
        if self.store.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.colored_label(egui::Color32::GRAY, "No se seleccionaron archivos");
            });
            return;
        }

        let mut actions: Vec<CardAction> = Vec::new();

        egui::ScrollArea::vertical()
            .id_salt("gallery_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for item in self.store.items() {
                        widgets::item_card(ui, item, &mut actions);
                    }
                });
            });

        for action in actions {
            self.apply_card_action(action);
        }
    }

    fn apply_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::TitleEdit(id, text) => self.store.edit_title(id, &text),
            CardAction::TitleCommit(id, text) => self.store.set_title(id, &text),
            CardAction::Replace(id) => self.pick_replacement_dialog(id),
            CardAction::Delete(id) => self.remove_item(id),
            CardAction::Save(id) => self.pick_save_dialog(id),
        }
    }
}

//! Tarjetas y widgets de la galería

use super::gallery_view::CardAction;
use cargador_imagenes::item::{IssueLevel, Item};
use cargador_imagenes::preview::Preview;
use cargador_imagenes::utils::{format_size, truncate_string};
use eframe::egui;

/// Ancho de una tarjeta
const CARD_WIDTH: f32 = 240.0;
/// Lado del recuadro de la miniatura
const THUMB_SIDE: f32 = 200.0;

/// Dibuja la tarjeta de una entrada y anota las acciones pedidas.
pub fn item_card(ui: &mut egui::Ui, item: &Item, actions: &mut Vec<CardAction>) {
    egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                thumbnail(ui, item);

                // Título editable; el recorte se aplica al perder el foco
                let mut title = item.title.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut title)
                        .hint_text("Título (editable)")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    actions.push(CardAction::TitleEdit(item.id, title.clone()));
                }
                if response.lost_focus() {
                    actions.push(CardAction::TitleCommit(item.id, title));
                }

                // Metadatos
                ui.label(egui::RichText::new(truncate_string(&item.file.name, 28)).strong())
                    .on_hover_text(&item.file.name);
                ui.label(format!("Tipo: {}", item.file.mime_display()));
                ui.label(format!("Tamaño: {}", format_size(item.file.size)));

                // Hallazgos de validación
                for issue in &item.issues {
                    let color = match issue.level {
                        IssueLevel::Bad => egui::Color32::RED,
                        IssueLevel::Warn => egui::Color32::from_rgb(230, 160, 0),
                    };
                    ui.colored_label(color, format!("• {}", issue.text));
                }

                ui.add_space(4.0);

                // Botones de acción
                ui.horizontal_wrapped(|ui| {
                    if ui.button("✏ Editar (reemplazar)").clicked() {
                        actions.push(CardAction::Replace(item.id));
                    }
                    if ui.button("🗑 Borrar").clicked() {
                        actions.push(CardAction::Delete(item.id));
                    }
                    if ui.button("💾 Descargar").clicked() {
                        actions.push(CardAction::Save(item.id));
                    }
                });
            });
        });
}

/// Miniatura, indicador de carga o marcador según el estado
fn thumbnail(ui: &mut egui::Ui, item: &Item) {
    let size = egui::vec2(THUMB_SIDE, THUMB_SIDE);
    match &item.preview {
        Preview::Ready(handle) => {
            ui.add_sized(size, egui::Image::new(handle).max_size(size));
        }
        Preview::Loading => {
            ui.add_sized(size, egui::Spinner::new());
        }
        Preview::Failed(_) => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🖼",
                egui::FontId::proportional(48.0),
                egui::Color32::GRAY,
            );
        }
    }
}

//! Módulo de la interfaz de usuario

mod gallery_view;
mod widgets;

use crate::app::App;
use eframe::egui;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Eventos de los hilos de carga de miniaturas
        self.process_events();

        // Resultados de los diálogos de archivos
        self.process_dialog_results();

        // Drag & Drop
        self.handle_drag_drop(ctx);

        // Panel superior con las acciones globales
        self.render_top_panel(ctx);

        // Panel inferior con el registro (altura fija)
        self.render_log_panel(ctx);

        // Galería (ocupa el resto)
        self.render_main_panel(ctx);
    }
}

impl App {
    fn handle_drag_drop(&mut self, ctx: &egui::Context) {
        // Archivos ya soltados
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                for dropped in &i.raw.dropped_files {
                    if let Some(path) = &dropped.path {
                        self.dropped_files.push(path.clone());
                    }
                }
            }
        });

        // Indicador visual durante el arrastre
        if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("drag_drop_overlay"),
            ));

            let screen_rect = ctx.screen_rect();
            painter.rect_filled(
                screen_rect,
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 200, 100),
            );
            painter.text(
                screen_rect.center(),
                egui::Align2::CENTER_CENTER,
                "🖼 Suelta aquí las imágenes",
                egui::FontId::proportional(24.0),
                egui::Color32::WHITE,
            );
        }
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("actions_panel").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.button("📂 Seleccionar archivos").clicked() {
                    self.pick_files_dialog();
                }

                if ui
                    .add_enabled(!self.store.is_empty(), egui::Button::new("🧹 Limpiar todo"))
                    .clicked()
                {
                    self.clear_all();
                }

                ui.separator();
                ui.label(format!("{} imagen(es)", self.store.len()));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(egui::Color32::GRAY, "o arrastra archivos a la ventana");
                });
            });
            ui.add_space(5.0);
        });
    }

    fn render_log_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(50.0)
            .default_height(90.0)
            .max_height(300.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Registro");
                    if !self.status_message.is_empty() {
                        ui.separator();
                        ui.label(&self.status_message);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Vaciar").clicked() {
                            self.log_messages.clear();
                        }
                    });
                });

                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_messages {
                            ui.label(msg);
                        }
                        if self.log_messages.is_empty() {
                            ui.colored_label(egui::Color32::GRAY, "Registro vacío");
                        }
                    });
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_gallery(ui);
        });
    }
}

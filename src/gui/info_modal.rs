use eframe::egui;

use crate::gui::theme::Theme;

/// About box.
pub struct InfoModal {
    open: bool,
}

impl InfoModal {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("info_modal")).show(ctx, |ui| {
            ui.set_width(300.0);

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(theme.title(ui.ctx(), "Honeymoon"));
                ui.add_space(4.0);
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(10.0);
                ui.label(egui::RichText::new("A card deck of honeymoon destinations.").italics());
                ui.label("Swipe through the catalog until one feels right.");
                ui.add_space(14.0);

                if ui.button("Close").clicked() {
                    ui.close();
                }

                ui.add_space(6.0);
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for InfoModal {
    fn default() -> Self {
        Self::new()
    }
}

use eframe::egui;

use crate::gui::theme::Theme;

/// Static walkthrough of the swipe gestures.
pub struct GuideModal {
    open: bool,
}

impl GuideModal {
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

        let modal = egui::Modal::new(egui::Id::new("guide_modal")).show(ctx, |ui| {
            ui.set_width(320.0);

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(theme.title(ui.ctx(), "Get Started!"));
                ui.add_space(4.0);
                ui.label("Discover and pick the perfect destination for your romantic Honeymoon!");
            });

            ui.add_space(14.0);

            let rows = [
                ("♥", "Drag the card to the right, release, and the place is a keeper."),
                ("✖", "Drag the card to the left to pass on a destination."),
                ("★", "Press Book Destination when you have found the one."),
            ];

            for (icon, text) in rows {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(icon).size(22.0).color(theme.accent(ui.ctx())),
                    );
                    ui.add_space(6.0);
                    ui.label(text);
                });
                ui.add_space(6.0);
            }

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Continue").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for GuideModal {
    fn default() -> Self {
        Self::new()
    }
}

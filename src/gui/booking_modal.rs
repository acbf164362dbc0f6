use eframe::egui;

use crate::gui::theme::Theme;

/// One-time acknowledgment shown after the booking action. Pure presentation:
/// it neither reads nor mutates deck state.
pub struct BookingModal {
    open: bool,
}

impl BookingModal {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("booking_modal")).show(ctx, |ui| {
            ui.set_width(300.0);

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(theme.title(ui.ctx(), "SUCCESS"));
                ui.add_space(10.0);
                ui.label(
                    "Wishing a lovely and most precious of the times together \
                     for the amazing couple.",
                );
                ui.add_space(14.0);

                if ui.button(theme.heading(ui.ctx(), "Happy Honeymoon!")).clicked() {
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

impl Default for BookingModal {
    fn default() -> Self {
        Self::new()
    }
}

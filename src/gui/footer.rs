use eframe::egui;

use crate::gui::theme::Theme;

pub enum FooterAction {
    BookDestination,
}

/// Bottom chrome with the booking call-to-action. Hidden while dragging.
pub struct FooterBar;

impl FooterBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, dragging: bool) -> Option<FooterAction> {
        let mut action = None;

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.set_opacity(if dragging { 0.0 } else { 1.0 });

            ui.add_enabled_ui(!dragging, |ui| {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("♥").size(20.0).color(theme.accent(ui.ctx())),
                    );
                    ui.add_space(4.0);

                    let book = egui::Button::new(
                        egui::RichText::new("Book Destination")
                            .size(17.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(theme.accent(ui.ctx()))
                    .corner_radius(egui::CornerRadius::same(20))
                    .min_size(egui::vec2(220.0, 36.0));

                    if ui.add(book).clicked() {
                        action = Some(FooterAction::BookDestination);
                    }
                });
                ui.add_space(12.0);
            });
        });

        action
    }
}

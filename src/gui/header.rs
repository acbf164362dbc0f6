use eframe::egui;

use crate::gui::theme::Theme;

pub enum HeaderAction {
    ShowGuide,
    ShowInfo,
    ToggleSound,
    ThemeChanged(bool),
}

/// Title row with the guide/info shortcuts and the ambient toggles. Fades out
/// entirely while a card is being dragged, like the rest of the chrome.
pub struct HeaderBar;

impl HeaderBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        dragging: bool,
        sound_enabled: bool,
    ) -> Option<HeaderAction> {
        let mut action = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.set_opacity(if dragging { 0.0 } else { 1.0 });

            ui.add_enabled_ui(!dragging, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("ℹ").size(18.0))
                        .on_hover_text("About this app")
                        .clicked()
                    {
                        action = Some(HeaderAction::ShowInfo);
                    }

                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if ui
                                .button(egui::RichText::new("?").size(18.0))
                                .on_hover_text("How swiping works")
                                .clicked()
                            {
                                action = Some(HeaderAction::ShowGuide);
                            }

                            let sound_icon = if sound_enabled { "🔊" } else { "🔇" };
                            if ui
                                .button(egui::RichText::new(sound_icon).size(16.0))
                                .on_hover_text("Toggle the swipe sound")
                                .clicked()
                            {
                                action = Some(HeaderAction::ToggleSound);
                            }

                            let before = ui.ctx().theme();
                            egui::widgets::global_theme_preference_switch(ui);
                            let after = ui.ctx().theme();
                            if before != after {
                                action = Some(HeaderAction::ThemeChanged(
                                    after == egui::Theme::Dark,
                                ));
                            }

                            // Center the title in what is left between the
                            // button clusters.
                            ui.with_layout(
                                egui::Layout::centered_and_justified(
                                    egui::Direction::LeftToRight,
                                ),
                                |ui| {
                                    ui.label(theme.title(ui.ctx(), "HONEYMOON."));
                                },
                            );
                        },
                    );
                });
                ui.add_space(6.0);
            });
        });

        action
    }
}

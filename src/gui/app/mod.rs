mod modals;

use eframe::egui;
use modals::Modals;

use super::{
    card_stack::CardStack,
    footer::{
        FooterAction,
        FooterBar,
    },
    header::{
        HeaderAction,
        HeaderBar,
    },
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        Catalog,
        Deck,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    player::{
        Sound,
        SoundPlayer,
    },
};

pub struct HoneymoonApp {
    // Core state
    deck: Deck,
    card_stack: CardStack,

    // Configuration
    settings_data: SettingsData,

    // UI state
    theme: Theme,

    // Modals
    modals: Modals,

    // External services
    player: SoundPlayer,
}

impl HoneymoonApp {
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let theme = Theme::blossom();
        set_theme(&cc.egui_ctx, &theme);

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        let player = SoundPlayer::new(settings_data.sound_enabled);

        Self {
            deck: Deck::new(catalog),
            card_stack: CardStack::new(),
            settings_data,
            theme,
            modals: Modals::default(),
            player,
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("[Settings] Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for HoneymoonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dragging = self.card_stack.is_dragging();

        if let Some(action) =
            HeaderBar::show(ctx, &self.theme, dragging, self.player.is_enabled())
        {
            match action {
                HeaderAction::ShowGuide => self.modals.guide.open_modal(),
                HeaderAction::ShowInfo => self.modals.info.open_modal(),
                HeaderAction::ToggleSound => {
                    let enabled = !self.player.is_enabled();
                    self.player.set_enabled(enabled);
                    self.settings_data.sound_enabled = enabled;
                    self.save_settings();
                }
                HeaderAction::ThemeChanged(dark_mode) => {
                    self.settings_data.dark_mode = dark_mode;
                    self.save_settings();
                }
            }
        }

        if let Some(FooterAction::BookDestination) =
            FooterBar::show(ctx, &self.theme, dragging)
        {
            self.modals.booking.open_modal();
        }

        if let Some(direction) = self.card_stack.show(ctx, &mut self.deck, &self.theme) {
            println!(
                "[Deck] Dismissed toward {:?}; now showing {}",
                direction,
                self.deck.top_card().destination.place
            );
            self.player.play(Sound::Rise);
        }

        self.modals.booking.show(ctx, &self.theme);
        self.modals.guide.show(ctx, &self.theme);
        self.modals.info.show(ctx, &self.theme);
    }
}

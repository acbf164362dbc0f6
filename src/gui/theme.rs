use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// App palette, one variant per egui theme. The accent is the blossom pink
/// the whole app is branded with; `like`/`reject` color the swipe overlays.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub like: Color32,
    pub reject: Color32,
}

impl Theme {
    pub fn blossom() -> Self {
        Theme {
            dark: Palette {
                background: Color32::from_rgb(24, 21, 26),
                panel: Color32::from_rgb(32, 28, 35),
                card: Color32::from_rgb(44, 39, 48),
                foreground: Color32::from_rgb(238, 233, 236),
                muted: Color32::from_rgb(150, 140, 152),
                accent: Color32::from_rgb(236, 104, 149),
                like: Color32::from_rgb(101, 199, 134),
                reject: Color32::from_rgb(226, 91, 91),
            },
            light: Palette {
                background: Color32::from_rgb(250, 246, 248),
                panel: Color32::from_rgb(255, 252, 253),
                card: Color32::from_rgb(255, 255, 255),
                foreground: Color32::from_rgb(48, 42, 48),
                muted: Color32::from_rgb(134, 124, 133),
                accent: Color32::from_rgb(214, 72, 122),
                like: Color32::from_rgb(56, 158, 92),
                reject: Color32::from_rgb(198, 62, 62),
            },
        }
    }

    pub fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn like(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).like
    }

    pub fn reject(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).reject
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn title(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.accent(ctx)).size(26.0).strong()
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.accent(ctx)).strong()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::blossom()
    }
}

/// Linear blend between two colors, `t` in 0..=1. The card stack uses this to
/// fade chrome and overlays with drag progress.
pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut widgets = default.widgets.clone();
    widgets.noninteractive.bg_fill = palette.panel;
    widgets.noninteractive.fg_stroke = Stroke { color: palette.foreground, ..widgets.noninteractive.fg_stroke };
    widgets.inactive.bg_fill = palette.card;
    widgets.inactive.fg_stroke = Stroke { color: palette.foreground, ..widgets.inactive.fg_stroke };
    widgets.hovered.bg_stroke = Stroke { color: palette.accent, ..widgets.hovered.bg_stroke };
    widgets.active.bg_stroke = Stroke { color: palette.accent, ..widgets.active.bg_stroke };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets,
            hyperlink_color: palette.accent,
            window_fill: palette.panel,
            panel_fill: palette.background,
            error_fg_color: palette.reject,
            warn_fg_color: palette.accent,
            ..default
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);

        assert_eq!(blend_colors(a, b, 0.0), Color32::from_rgba_unmultiplied(0, 0, 0, 255));
        assert_eq!(blend_colors(a, b, 1.0), Color32::from_rgba_unmultiplied(200, 100, 50, 255));

        let mid = blend_colors(a, b, 0.5);
        assert_eq!(mid.r(), 100);
        assert_eq!(mid.g(), 50);
        assert_eq!(mid.b(), 25);
    }
}

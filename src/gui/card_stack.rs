use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    Color32,
    Pos2,
    Rect,
    Sense,
    Stroke,
    Vec2,
};

use crate::{
    core::{
        drag::{
            DragGesture,
            DragOutcome,
            DragState,
            Translation,
            DRAG_AREA_THRESHOLD,
        },
        models::{
            Card,
            SwipeDirection,
        },
        Deck,
    },
    gui::theme::{
        blend_colors,
        Theme,
    },
};

const CARD_SIZE: Vec2 = Vec2::new(320.0, 440.0);
const CAPTION_HEIGHT: f32 = 74.0;

/// Degrees of tilt per logical point of horizontal drag.
const ROTATION_DIVISOR: f32 = 12.0;
const DRAG_SCALE: f32 = 0.85;

const REMOVAL_ANIM: Duration = Duration::from_millis(280);
const SETTLE_ANIM: Duration = Duration::from_millis(180);

/// Where the top card sits this frame, derived from the drag state alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset: Translation,
    pub scale: f32,
    pub rotation_degrees: f32,
}

pub fn card_transform(state: DragState) -> CardTransform {
    let translation = state.translation();
    CardTransform {
        offset: translation,
        scale: if state.is_dragging() { DRAG_SCALE } else { 1.0 },
        rotation_degrees: translation.x / ROTATION_DIVISOR,
    }
}

/// A dismissed card flying off toward the decided side. View-layer only: the
/// deck has already advanced when one of these exists.
struct LeavingCard {
    card: Card,
    direction: SwipeDirection,
    from: Translation,
    started: Instant,
}

/// A released card animating back to rest after an under-threshold drag.
struct SettleAnim {
    from: Translation,
    started: Instant,
}

/// The deck area: both visible cards, the drag binding on the top one, the
/// accept/reject overlays, and the two transient animations.
pub struct CardStack {
    gesture: DragGesture,
    leaving: Option<LeavingCard>,
    settle: Option<SettleAnim>,
}

impl CardStack {
    pub fn new() -> Self {
        Self { gesture: DragGesture::new(), leaving: None, settle: None }
    }

    /// Chrome (header/footer) reads this to fade out during a drag.
    pub fn is_dragging(&self) -> bool {
        self.gesture.state().is_dragging()
    }

    /// Draws the deck and runs the gesture machine for this frame. Returns
    /// the swipe direction when a drag committed to a dismiss; the caller
    /// plays the swipe sound.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        deck: &mut Deck,
        theme: &Theme,
    ) -> Option<SwipeDirection> {
        let mut dismissed = None;
        let now = Instant::now();

        egui::CentralPanel::default().show(ctx, |ui| {
            let base_rect =
                Rect::from_center_size(ui.available_rect_before_wrap().center(), CARD_SIZE);

            // Back-to-front: every card that is not the top one is drawn at
            // rest. Normally that is just the pre-rendered second card.
            for card in deck.cards().iter().rev() {
                if !deck.is_top_card(card.id) {
                    draw_card(ui, theme, card, base_rect, 0.0, 1.0);
                }
            }

            dismissed = self.show_top_card(ui, deck, theme, base_rect, now);
            self.show_leaving_card(ui, theme, base_rect, now);

            if !self.gesture.is_idle() || self.settle.is_some() || self.leaving.is_some() {
                ui.ctx().request_repaint();
            }
        });

        dismissed
    }

    fn show_top_card(
        &mut self,
        ui: &mut egui::Ui,
        deck: &mut Deck,
        theme: &Theme,
        base_rect: Rect,
        now: Instant,
    ) -> Option<SwipeDirection> {
        // A settle animation yields as soon as a new interaction starts.
        if !self.gesture.is_idle() {
            self.settle = None;
        }

        // Hit-test where the card was drawn last frame.
        let interact_rect = transformed_rect(base_rect, self.current_transform(now));
        let response =
            ui.interact(interact_rect, ui.id().with(deck.top_card().id), Sense::click_and_drag());

        let mut dismissed = None;
        if self.gesture.is_idle() {
            if response.is_pointer_button_down_on() {
                self.gesture.press_started(now);
            }
        } else {
            self.gesture.press_held(now);

            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                self.gesture.drag_by(delta.x, delta.y);
            }

            if response.drag_stopped() {
                let from = self.gesture.state().translation();
                match self.gesture.release() {
                    DragOutcome::Dismiss(direction) => {
                        let card = deck.top_card().clone();
                        deck.advance();
                        self.leaving = Some(LeavingCard { card, direction, from, started: now });
                        dismissed = Some(direction);
                    }
                    DragOutcome::Rest => {
                        if from != Translation::ZERO {
                            self.settle = Some(SettleAnim { from, started: now });
                        }
                    }
                }
            } else if !response.is_pointer_button_down_on() && !response.dragged() {
                // The interaction evaporated without an orderly stop (a plain
                // tap, or the pointer was lost). Nothing commits.
                self.gesture.cancel();
            }
        }

        // Draw from post-event state: after a dismiss this is already the
        // replacement card, at rest, beneath the leaving one.
        let transform = self.current_transform(now);
        let draw_rect = transformed_rect(base_rect, transform);
        draw_card(
            ui,
            theme,
            deck.top_card(),
            draw_rect,
            transform.rotation_degrees.to_radians(),
            1.0,
        );
        self.draw_threshold_overlay(ui, theme, draw_rect);

        dismissed
    }

    /// The top card's transform this frame: the settle animation while one is
    /// running, the live drag state otherwise.
    fn current_transform(&mut self, now: Instant) -> CardTransform {
        if let Some(settle) = self.settle.take() {
            let progress = anim_progress(settle.started, now, SETTLE_ANIM);
            if progress < 1.0 {
                let eased = ease_out_cubic(progress);
                let offset = Translation::new(
                    lerp(settle.from.x, 0.0, eased),
                    lerp(settle.from.y, 0.0, eased),
                );
                self.settle = Some(settle);
                return CardTransform {
                    offset,
                    scale: 1.0,
                    rotation_degrees: offset.x / ROTATION_DIVISOR,
                };
            }
        }

        card_transform(self.gesture.state())
    }

    /// The ✖ / ♥ badge over the top card once the live drag sits past the
    /// threshold.
    fn draw_threshold_overlay(&self, ui: &egui::Ui, theme: &Theme, card_rect: Rect) {
        let translation = self.gesture.state().translation();

        let (glyph, color) = if translation.x < -DRAG_AREA_THRESHOLD {
            ("✖", theme.reject(ui.ctx()))
        } else if translation.x > DRAG_AREA_THRESHOLD {
            ("♥", theme.like(ui.ctx()))
        } else {
            return;
        };

        let painter = ui.painter();
        let center = card_rect.center();
        painter.circle_stroke(center, 46.0, Stroke::new(5.0, color));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(56.0),
            color,
        );
    }

    fn show_leaving_card(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        base_rect: Rect,
        now: Instant,
    ) {
        let Some(leaving) = self.leaving.take() else {
            return;
        };

        let progress = anim_progress(leaving.started, now, REMOVAL_ANIM);
        if progress >= 1.0 {
            return;
        }

        let target_x = match leaving.direction {
            SwipeDirection::Left => -(base_rect.width() * 1.6),
            SwipeDirection::Right => base_rect.width() * 1.6,
        };
        let target = Translation::new(target_x, leaving.from.y + 140.0);

        let eased = ease_out_cubic(progress);
        let offset = Translation::new(
            lerp(leaving.from.x, target.x, eased),
            lerp(leaving.from.y, target.y, eased),
        );
        let transform = CardTransform {
            offset,
            scale: DRAG_SCALE,
            rotation_degrees: offset.x / ROTATION_DIVISOR,
        };

        let rect = transformed_rect(base_rect, transform);
        draw_card(
            ui,
            theme,
            &leaving.card,
            rect,
            transform.rotation_degrees.to_radians(),
            1.0 - progress,
        );

        self.leaving = Some(leaving);
    }
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}

fn transformed_rect(base: Rect, transform: CardTransform) -> Rect {
    let center = base.center() + Vec2::new(transform.offset.x, transform.offset.y);
    Rect::from_center_size(center, base.size() * transform.scale)
}

/// Paints one destination card: photo area, caption band, rounded frame. The
/// whole card tilts by `rotation` radians around its center.
fn draw_card(ui: &egui::Ui, theme: &Theme, card: &Card, rect: Rect, rotation: f32, alpha: f32) {
    let painter = ui.painter();
    let palette = theme.palette(ui.ctx());
    let center = rect.center();

    let rotated = |r: Rect| -> Vec<Pos2> {
        [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom()]
            .iter()
            .map(|p| rotate_point(*p, center, rotation))
            .collect()
    };

    painter.add(egui::Shape::convex_polygon(
        rotated(rect),
        palette.card.gamma_multiply(alpha),
        Stroke::new(1.0, palette.muted.gamma_multiply(alpha * 0.6)),
    ));

    // Photo area, with a tinted placeholder underneath for unresolved images.
    let photo_rect = Rect::from_min_max(
        rect.min + Vec2::splat(10.0),
        Pos2::new(rect.max.x - 10.0, rect.max.y - CAPTION_HEIGHT),
    );
    let placeholder = blend_colors(palette.accent, palette.card, 0.7);
    painter.add(egui::Shape::convex_polygon(
        rotated(photo_rect),
        placeholder.gamma_multiply(alpha),
        Stroke::NONE,
    ));

    // Pivot expressed in the photo's own uv space so it turns with the card
    // frame, not around its own center.
    let pivot = Vec2::new(
        (center.x - photo_rect.min.x) / photo_rect.width(),
        (center.y - photo_rect.min.y) / photo_rect.height(),
    );
    egui::Image::from_uri(format!("file://assets/images/{}.jpg", card.destination.image))
        .tint(Color32::WHITE.gamma_multiply(alpha))
        .rotate(rotation, pivot)
        .paint_at(ui, photo_rect);

    // Caption band: place over country.
    let place_galley = painter.layout_no_wrap(
        card.destination.place.clone(),
        egui::FontId::proportional(24.0),
        palette.foreground.gamma_multiply(alpha),
    );
    let country_galley = painter.layout_no_wrap(
        card.destination.country.to_uppercase(),
        egui::FontId::proportional(14.0),
        palette.muted.gamma_multiply(alpha),
    );

    let caption_top = rect.max.y - CAPTION_HEIGHT + 12.0;
    let place_pos = Pos2::new(center.x - place_galley.size().x / 2.0, caption_top);
    let country_pos = Pos2::new(
        center.x - country_galley.size().x / 2.0,
        caption_top + place_galley.size().y + 2.0,
    );

    painter.add(
        egui::epaint::TextShape::new(
            rotate_point(place_pos, center, rotation),
            place_galley,
            palette.foreground.gamma_multiply(alpha),
        )
        .with_angle(rotation),
    );
    painter.add(
        egui::epaint::TextShape::new(
            rotate_point(country_pos, center, rotation),
            country_galley,
            palette.muted.gamma_multiply(alpha),
        )
        .with_angle(rotation),
    );
}

fn rotate_point(point: Pos2, around: Pos2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    let v = point - around;
    around + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

fn anim_progress(started: Instant, now: Instant, duration: Duration) -> f32 {
    (now.duration_since(started).as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_at_rest_is_identity() {
        let transform = card_transform(DragState::Inactive);

        assert_eq!(transform.offset, Translation::ZERO);
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.rotation_degrees, 0.0);

        // Pressing without movement renders exactly like rest.
        assert_eq!(card_transform(DragState::Pressing), transform);
    }

    #[test]
    fn transform_follows_drag() {
        let state = DragState::Dragging { translation: Translation::new(120.0, -30.0) };
        let transform = card_transform(state);

        assert_eq!(transform.offset, Translation::new(120.0, -30.0));
        assert_eq!(transform.scale, DRAG_SCALE);
        assert_eq!(transform.rotation_degrees, 10.0);
    }

    #[test]
    fn rotate_point_quarter_turn() {
        let around = Pos2::new(10.0, 10.0);
        let point = Pos2::new(20.0, 10.0);

        let turned = rotate_point(point, around, std::f32::consts::FRAC_PI_2);
        assert!((turned.x - 10.0).abs() < 1e-4);
        assert!((turned.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn easing_is_clamped_and_monotonic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.75));
    }

    #[test]
    fn transformed_rect_translates_and_scales_around_center() {
        let base = Rect::from_center_size(Pos2::new(100.0, 100.0), Vec2::new(40.0, 60.0));
        let transform = CardTransform {
            offset: Translation::new(10.0, -20.0),
            scale: 0.5,
            rotation_degrees: 0.0,
        };

        let moved = transformed_rect(base, transform);
        assert_eq!(moved.center(), Pos2::new(110.0, 80.0));
        assert_eq!(moved.size(), Vec2::new(20.0, 30.0));
    }
}

use std::time::{
    Duration,
    Instant,
};

use crate::core::models::SwipeDirection;

/// Horizontal distance (logical points) a drag must cover before release
/// commits to a dismiss instead of springing back.
pub const DRAG_AREA_THRESHOLD: f32 = 65.0;

/// Hold time before a press registers, debouncing accidental taps.
pub const MIN_PRESS_DURATION: Duration = Duration::from_millis(10);

/// Cumulative pointer translation from the interaction origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Translation = Translation { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle of the active pointer interaction. Transient: collapses back to
/// `Inactive` whenever the interaction ends, whatever the outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Inactive,
    Pressing,
    Dragging { translation: Translation },
}

impl DragState {
    /// Zero until the interaction is actually dragging.
    pub fn translation(&self) -> Translation {
        match self {
            DragState::Inactive | DragState::Pressing => Translation::ZERO,
            DragState::Dragging { translation } => *translation,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// True from the moment the press registers, through the whole drag.
    pub fn is_pressing(&self) -> bool {
        matches!(self, DragState::Pressing | DragState::Dragging { .. })
    }
}

/// What a release decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Below threshold: the card springs back, no state changed.
    Rest,
    /// Past threshold: the top card is dismissed toward the given side.
    Dismiss(SwipeDirection),
}

/// State machine for one card's drag interaction. All transitions happen
/// synchronously on the UI thread in response to pointer callbacks; the
/// machine itself never blocks or spawns work.
pub struct DragGesture {
    state: DragState,
    removal_direction: SwipeDirection,
    pressed_at: Option<Instant>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            state: DragState::Inactive,
            removal_direction: SwipeDirection::default(),
            pressed_at: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The last direction a drag decided. Survives interactions that end
    /// below threshold; the removal animation reads it on dismiss.
    pub fn removal_direction(&self) -> SwipeDirection {
        self.removal_direction
    }

    /// No interaction in flight at all, not even an unregistered press.
    pub fn is_idle(&self) -> bool {
        self.pressed_at.is_none() && self.state == DragState::Inactive
    }

    /// Pointer went down on the top card. The press only registers once it
    /// has been held for [`MIN_PRESS_DURATION`]; see [`Self::press_held`].
    pub fn press_started(&mut self, now: Instant) {
        if self.is_idle() {
            self.pressed_at = Some(now);
        }
    }

    /// Called every frame while the pointer stays down. Promotes
    /// `Inactive -> Pressing` once the hold debounce has elapsed.
    pub fn press_held(&mut self, now: Instant) {
        if self.state != DragState::Inactive {
            return;
        }

        if let Some(pressed_at) = self.pressed_at {
            if now.duration_since(pressed_at) >= MIN_PRESS_DURATION {
                self.state = DragState::Pressing;
            }
        }
    }

    /// Pointer moved while pressed. Accumulates onto the translation from the
    /// interaction origin and, past the threshold, re-decides the removal
    /// direction. Movement before the press registers is ignored.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        let translation = match self.state {
            DragState::Inactive => return,
            DragState::Pressing => Translation::new(dx, dy),
            DragState::Dragging { translation } => {
                Translation::new(translation.x + dx, translation.y + dy)
            }
        };

        if translation.x < -DRAG_AREA_THRESHOLD {
            self.removal_direction = SwipeDirection::Left;
        } else if translation.x > DRAG_AREA_THRESHOLD {
            self.removal_direction = SwipeDirection::Right;
        }

        self.state = DragState::Dragging { translation };
    }

    /// Pointer up. Collapses to `Inactive` and reports whether the drag
    /// crossed the threshold. One-shot: a second release without a new
    /// interaction is a `Rest`.
    pub fn release(&mut self) -> DragOutcome {
        let translation = self.state.translation();
        self.reset();

        if translation.x < -DRAG_AREA_THRESHOLD {
            self.removal_direction = SwipeDirection::Left;
            DragOutcome::Dismiss(SwipeDirection::Left)
        } else if translation.x > DRAG_AREA_THRESHOLD {
            self.removal_direction = SwipeDirection::Right;
            DragOutcome::Dismiss(SwipeDirection::Right)
        } else {
            DragOutcome::Rest
        }
    }

    /// Pointer lost without an orderly release. Nothing commits.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = DragState::Inactive;
        self.pressed_at = None;
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a full registered press so the machine is ready to drag.
    fn pressed_gesture() -> DragGesture {
        let mut gesture = DragGesture::new();
        let t0 = Instant::now();
        gesture.press_started(t0);
        gesture.press_held(t0 + MIN_PRESS_DURATION);
        assert_eq!(gesture.state(), DragState::Pressing);
        gesture
    }

    #[test]
    fn press_does_not_register_before_debounce() {
        let mut gesture = DragGesture::new();
        let t0 = Instant::now();

        gesture.press_started(t0);
        gesture.press_held(t0);
        assert_eq!(gesture.state(), DragState::Inactive);
        assert!(!gesture.state().is_pressing());

        // Movement before the press registers goes nowhere.
        gesture.drag_by(40.0, 0.0);
        assert_eq!(gesture.state(), DragState::Inactive);

        gesture.press_held(t0 + MIN_PRESS_DURATION);
        assert!(gesture.state().is_pressing());
        assert!(!gesture.state().is_dragging());
    }

    #[test]
    fn translation_is_zero_until_dragging() {
        let mut gesture = pressed_gesture();
        assert_eq!(gesture.state().translation(), Translation::ZERO);

        gesture.drag_by(10.0, -4.0);
        gesture.drag_by(5.0, 1.0);

        assert!(gesture.state().is_dragging());
        assert!(gesture.state().is_pressing());
        assert_eq!(gesture.state().translation(), Translation::new(15.0, -3.0));
    }

    #[test]
    fn release_below_threshold_rests_and_keeps_direction() {
        let mut gesture = pressed_gesture();
        gesture.drag_by(-70.0, 0.0); // cross left, direction decided
        gesture.drag_by(30.0, 0.0); // back inside the threshold

        assert_eq!(gesture.removal_direction(), SwipeDirection::Left);
        assert_eq!(gesture.release(), DragOutcome::Rest);

        // Last-decided direction survives a rest release.
        assert_eq!(gesture.removal_direction(), SwipeDirection::Left);
        assert_eq!(gesture.state(), DragState::Inactive);
    }

    #[test]
    fn release_past_left_threshold_dismisses_left() {
        let mut gesture = pressed_gesture();
        gesture.drag_by(-70.0, 12.0);

        assert_eq!(gesture.removal_direction(), SwipeDirection::Left);
        assert_eq!(gesture.release(), DragOutcome::Dismiss(SwipeDirection::Left));
        assert_eq!(gesture.state(), DragState::Inactive);
    }

    #[test]
    fn release_past_right_threshold_dismisses_right() {
        let mut gesture = pressed_gesture();
        gesture.drag_by(80.0, -6.0);

        assert_eq!(gesture.removal_direction(), SwipeDirection::Right);
        assert_eq!(gesture.release(), DragOutcome::Dismiss(SwipeDirection::Right));
    }

    #[test]
    fn exact_threshold_is_not_a_dismiss() {
        let mut gesture = pressed_gesture();
        gesture.drag_by(DRAG_AREA_THRESHOLD, 0.0);

        // Direction only flips strictly past the threshold, and release at
        // exactly the threshold rests.
        assert_eq!(gesture.removal_direction(), SwipeDirection::default());
        assert_eq!(gesture.release(), DragOutcome::Rest);
    }

    #[test]
    fn release_is_one_shot() {
        let mut gesture = pressed_gesture();
        gesture.drag_by(100.0, 0.0);

        assert_eq!(gesture.release(), DragOutcome::Dismiss(SwipeDirection::Right));
        assert_eq!(gesture.release(), DragOutcome::Rest);
    }

    #[test]
    fn cancel_collapses_without_committing() {
        let mut gesture = pressed_gesture();
        gesture.drag_by(200.0, 0.0);

        gesture.cancel();
        assert_eq!(gesture.state(), DragState::Inactive);
        assert!(gesture.is_idle());

        // The machine is reusable after a cancel.
        let t1 = Instant::now();
        gesture.press_started(t1);
        gesture.press_held(t1 + MIN_PRESS_DURATION);
        assert!(gesture.state().is_pressing());
    }

    #[test]
    fn direction_tracks_latest_threshold_crossing() {
        let mut gesture = pressed_gesture();

        gesture.drag_by(70.0, 0.0);
        assert_eq!(gesture.removal_direction(), SwipeDirection::Right);

        gesture.drag_by(-140.0, 0.0);
        assert_eq!(gesture.removal_direction(), SwipeDirection::Left);
    }
}

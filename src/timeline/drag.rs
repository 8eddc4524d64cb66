//! Drag gesture tracking for the playback ruler
//!
//! Two states: Idle and Dragging. A press snapshots the pointer position and
//! the current offset; every move while dragging recomputes the offset from
//! that baseline. Releasing (or the pointer leaving the view) freezes the
//! offset where it is, with no momentum.

/// Pointer input relevant to the ruler, already converted to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Mouse down or touch start at x
    Press(f64),
    /// Mouse or touch move to x
    Move(f64),
    /// Mouse up or touch end
    Release,
    /// Pointer left the view (or the terminal lost focus)
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { start_x: f64, baseline: f64 },
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    offset: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl DragController {
    pub fn new(offset: f64) -> Self {
        Self {
            state: DragState::Idle,
            offset,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one pointer event; returns true if the offset changed
    pub fn handle(&mut self, input: PointerInput) -> bool {
        match input {
            PointerInput::Press(x) => {
                self.state = DragState::Dragging {
                    start_x: x,
                    baseline: self.offset,
                };
                false
            }
            PointerInput::Move(x) => match self.state {
                DragState::Dragging { start_x, baseline } => {
                    let next = baseline + (x - start_x);
                    let changed = next != self.offset;
                    self.offset = next;
                    changed
                }
                DragState::Idle => false,
            },
            PointerInput::Release | PointerInput::Leave => {
                self.state = DragState::Idle;
                false
            }
        }
    }

    /// Jump straight to an offset (seek), ending any drag in progress
    pub fn jump_to(&mut self, offset: f64) {
        self.state = DragState::Idle;
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_tracks_pointer_from_baseline() {
        let mut drag = DragController::new(0.0);
        drag.handle(PointerInput::Press(200.0));
        assert!(drag.is_dragging());

        assert!(drag.handle(PointerInput::Move(250.0)));
        assert_eq!(drag.offset(), 50.0);
        assert!(drag.handle(PointerInput::Move(300.0)));
        assert_eq!(drag.offset(), 100.0);

        drag.handle(PointerInput::Release);
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset(), 100.0);
    }

    #[test]
    fn second_drag_starts_from_frozen_offset() {
        let mut drag = DragController::new(0.0);
        drag.handle(PointerInput::Press(10.0));
        drag.handle(PointerInput::Move(40.0));
        drag.handle(PointerInput::Leave);

        drag.handle(PointerInput::Press(500.0));
        drag.handle(PointerInput::Move(480.0));
        assert_eq!(drag.offset(), 10.0);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut drag = DragController::new(12.5);
        assert!(!drag.handle(PointerInput::Move(999.0)));
        assert_eq!(drag.offset(), 12.5);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn no_bounds_in_either_direction() {
        let mut drag = DragController::new(0.0);
        drag.handle(PointerInput::Press(0.0));
        drag.handle(PointerInput::Move(-10_000.0));
        assert_eq!(drag.offset(), -10_000.0);
        drag.handle(PointerInput::Move(1e6));
        assert_eq!(drag.offset(), 1e6);
    }

    #[test]
    fn jump_cancels_active_drag() {
        let mut drag = DragController::new(0.0);
        drag.handle(PointerInput::Press(0.0));
        drag.jump_to(245.0);
        assert!(!drag.is_dragging());
        assert!(!drag.handle(PointerInput::Move(50.0)));
        assert_eq!(drag.offset(), 245.0);
    }
}

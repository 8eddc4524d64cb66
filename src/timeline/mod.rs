// Timeline module - playback scrubber logic
//
// The scrubber pairs a drag controller (owns the offset) with a time mapper
// (derives the clock reading). Only the offset is ever stored; the displayed
// time is always computed from it.

pub mod drag;
pub mod mapper;

pub use drag::{DragController, PointerInput};
pub use mapper::{ClockTime, TimeMapper};

/// Offset plus its derived clock reading
#[derive(Debug, Clone, Default)]
pub struct Scrubber {
    mapper: TimeMapper,
    drag: DragController,
}

impl Scrubber {
    pub fn new(mapper: TimeMapper) -> Self {
        Self {
            mapper,
            drag: DragController::default(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.drag.offset()
    }

    pub fn time(&self) -> ClockTime {
        self.mapper.display_time(self.drag.offset())
    }

    pub fn mapper(&self) -> &TimeMapper {
        &self.mapper
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer(&mut self, input: PointerInput) -> bool {
        self.drag.handle(input)
    }

    /// Keyboard scrubbing: a complete press, move and release of `delta` pixels
    pub fn step(&mut self, delta: f64) {
        self.drag.handle(PointerInput::Press(0.0));
        self.drag.handle(PointerInput::Move(delta));
        self.drag.handle(PointerInput::Release);
    }

    /// Seek to an event label; returns false (and stays put) for relative labels
    pub fn seek_label(&mut self, label: &str) -> bool {
        match self.mapper.offset_for_label(label) {
            Some(offset) => {
                self.drag.jump_to(offset);
                true
            }
            None => {
                tracing::debug!("Timestamp '{}' is not a clock time, not seeking", label);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_by_100px_is_one_hour_earlier() {
        let mut scrubber = Scrubber::default();
        scrubber.pointer(PointerInput::Press(300.0));
        scrubber.pointer(PointerInput::Move(400.0));
        scrubber.pointer(PointerInput::Release);

        assert_eq!(scrubber.offset(), 100.0);
        assert_eq!(scrubber.time().to_string(), "13:42:00");
    }

    #[test]
    fn seek_then_drag_continues_from_seek() {
        let mut scrubber = Scrubber::default();
        assert!(scrubber.seek_label("12:42"));
        assert_eq!(scrubber.time().to_string(), "12:42:00");

        scrubber.pointer(PointerInput::Press(0.0));
        scrubber.pointer(PointerInput::Move(-200.0));
        // Dragging right-to-left moves forward in time
        assert_eq!(scrubber.time().to_string(), "14:42:00");
    }

    #[test]
    fn relative_label_leaves_offset() {
        let mut scrubber = Scrubber::default();
        assert!(!scrubber.seek_label("Yesterday"));
        assert_eq!(scrubber.offset(), 0.0);
    }

    #[test]
    fn step_is_a_whole_drag() {
        let mut scrubber = Scrubber::default();
        scrubber.step(25.0);
        assert_eq!(scrubber.time().to_string(), "14:27:00");
        scrubber.step(-50.0);
        assert_eq!(scrubber.time().to_string(), "14:57:00");
        assert!(!scrubber.is_dragging());
    }
}

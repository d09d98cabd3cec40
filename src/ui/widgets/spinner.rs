use crate::state::State;

/// Braille spinner animation frames, advanced on each tick while a request
/// is in flight.
///
pub const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠇"];

/// Return the spinner frame for the current state.
///
pub fn frame(state: &State) -> &'static str {
    FRAMES[*state.get_spinner_index() % FRAMES.len()]
}

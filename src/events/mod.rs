//! Event handling modules.
//!
//! Terminal events (key input and ticks) are handled on the main thread;
//! network events are drained by a dedicated thread running the async
//! request handler.

pub mod network;
pub mod terminal;

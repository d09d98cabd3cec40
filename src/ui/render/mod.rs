mod all;
mod confirm;
mod create_horse;
mod edit_horse;
mod footer;
mod form;
mod list;
mod loader;
mod log;
mod toast;

use super::*;

pub use all::all as render;

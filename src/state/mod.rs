//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (`Route`, `EditState`)
//! - Form editing types (`HorseForm`, `FormField`, `AvailabilityFilter`)
//! - Notification types (`Toast`, `ToastKind`)
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;
mod toast;

pub use error::StateError;
pub use form::{AvailabilityFilter, FormField, HorseForm};
pub use navigation::{EditState, Route};
pub use state_impl::State;
pub use toast::{Toast, ToastKind, TOAST_DURATION};

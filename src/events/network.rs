use crate::stable::{Horse, Stable};
use crate::state::{AvailabilityFilter, Route, State, ToastKind};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Toast shown after a successful save or delete.
pub(crate) const SAVED_MESSAGE: &str = "Poprawnie zapisano zmiany";
/// Toast shown after a failed save or delete.
pub(crate) const ERROR_MESSAGE: &str = "Wystąpił błąd";
/// Edit screen message when the server gives no error detail.
pub(crate) const NOT_FOUND_MESSAGE: &str = "Nie znaleziono konia";
/// Inline form message when a failed save carries no error detail.
pub(crate) const SAVE_FAILED_MESSAGE: &str = "Błąd zapisu";

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadHorses { filter: AvailabilityFilter },
    LoadHorse { id: u64 },
    CreateHorse { horse: Horse },
    UpdateHorse { id: u64, horse: Horse },
    DeleteHorse { id: u64 },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    stable: &'a mut Stable,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, stable: &'a mut Stable) -> Self {
        Handler { state, stable }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadHorses { filter } => self.load_horses(filter).await,
            Event::LoadHorse { id } => self.load_horse(id).await,
            Event::CreateHorse { horse } => self.save_horse(None, horse).await,
            Event::UpdateHorse { id, horse } => self.save_horse(Some(id), horse).await,
            Event::DeleteHorse { id } => self.delete_horse(id).await,
        }
    }

    /// Update state with the horses matching the filter. Failures keep the
    /// previous list and are logged only; the user is not notified.
    ///
    async fn load_horses(&mut self, filter: AvailabilityFilter) -> Result<()> {
        info!("Fetching horses (filter: {:?})...", filter);
        self.set_busy(true).await;
        let result = self.stable.horses(filter.as_query()).await;
        let mut state = self.state.lock().await;
        state.set_busy(false);
        match result {
            Ok(horses) => {
                info!("Received {} horses.", horses.len());
                state.set_horses(horses);
            }
            Err(e) => error!("Failed to fetch horses: {}", e),
        }
        Ok(())
    }

    /// Update state with the horse to edit, or mark the edit screen as not
    /// found with the server's error detail when it carries one.
    ///
    async fn load_horse(&mut self, id: u64) -> Result<()> {
        info!("Fetching horse {}...", id);
        self.set_busy(true).await;
        let result = self.stable.horse(id).await;
        let mut state = self.state.lock().await;
        state.set_busy(false);
        match result {
            Ok(horse) => state.set_edit_horse(horse),
            Err(e) => {
                error!("Failed to fetch horse {}: {}", id, e);
                let message = e.detail().unwrap_or(NOT_FOUND_MESSAGE).to_owned();
                state.set_edit_not_found(message);
            }
        }
        Ok(())
    }

    /// Save the horse: PUT when an id is given, POST otherwise. Success
    /// notifies and navigates back to the list; failure notifies, attaches
    /// the inline message, and stays on the form.
    ///
    async fn save_horse(&mut self, id: Option<u64>, horse: Horse) -> Result<()> {
        self.set_busy(true).await;
        let result = match id {
            Some(id) => {
                info!("Updating horse {}...", id);
                self.stable.update_horse(id, &horse).await
            }
            None => {
                info!("Creating new horse...");
                self.stable.create_horse(&horse).await
            }
        };
        let mut state = self.state.lock().await;
        state.set_busy(false);
        match result {
            Ok(_) => {
                info!("Horse saved.");
                state.show_toast(SAVED_MESSAGE, ToastKind::Success);
                state.navigate(Route::List);
            }
            Err(e) => {
                error!("Failed to save horse: {}", e);
                state.set_form_error(e.detail().unwrap_or(SAVE_FAILED_MESSAGE).to_owned());
                state.show_toast(ERROR_MESSAGE, ToastKind::Error);
            }
        }
        Ok(())
    }

    /// Delete the horse. Success notifies and reloads the list with the
    /// filter active at the time; failure notifies and leaves the list
    /// untouched.
    ///
    async fn delete_horse(&mut self, id: u64) -> Result<()> {
        info!("Deleting horse {}...", id);
        self.set_busy(true).await;
        let result = self.stable.delete_horse(id).await;
        let filter;
        {
            let mut state = self.state.lock().await;
            state.set_busy(false);
            if let Err(e) = result {
                error!("Failed to delete horse {}: {}", id, e);
                state.show_toast(ERROR_MESSAGE, ToastKind::Error);
                return Ok(());
            }
            info!("Horse {} deleted.", id);
            state.show_toast(SAVED_MESSAGE, ToastKind::Success);
            filter = state.get_filter();
        }
        self.load_horses(filter).await
    }

    async fn set_busy(&mut self, busy: bool) {
        self.state.lock().await.set_busy(busy);
    }
}

use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::stable::Horse;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use super::form::{AvailabilityFilter, HorseForm};
use super::navigation::{EditState, Route};
use super::toast::{Toast, ToastKind};
use std::time::Instant;

/// Cap on retained log entries for the in-TUI log view.
const MAX_LOG_ENTRIES: usize = 200;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    route: Route,
    horses: Vec<Horse>,
    horses_list_state: ListState,
    filter: AvailabilityFilter,
    busy: bool,
    toast: Option<Toast>,
    delete_confirmation: Option<u64>,
    edit_state: EditState,
    form: Option<HorseForm>,
    debug_mode: bool,
    log_entries: Vec<String>,
    terminal_size: Rect,
    spinner_index: usize,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            route: Route::List,
            horses: vec![],
            horses_list_state: ListState::default(),
            filter: AvailabilityFilter::All,
            busy: false,
            toast: None,
            delete_confirmation: None,
            edit_state: EditState::Loading,
            form: None,
            debug_mode: false,
            log_entries: vec![],
            terminal_size: Rect::default(),
            spinner_index: 0,
        }
    }
}

impl State {
    /// Return new instance with the given network event sender.
    ///
    pub fn new(net_sender: NetworkEventSender) -> State {
        State {
            net_sender: Some(net_sender),
            ..State::default()
        }
    }

    /// Return the current route.
    ///
    pub fn current_route(&self) -> &Route {
        &self.route
    }

    /// Switch to the given route, discarding per-screen state of the screen
    /// being left and issuing the screen's entry request. Entering the list
    /// resets the filter and reloads; entering the edit screen starts its
    /// loading state machine; the create screen starts from a fresh record
    /// and issues no request.
    ///
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to {:?}...", route);
        self.delete_confirmation = None;
        self.form = None;
        self.edit_state = EditState::Loading;
        match route {
            Route::List => {
                self.filter = AvailabilityFilter::All;
                self.horses_list_state.select(None);
                self.send_network_event(NetworkEvent::LoadHorses {
                    filter: self.filter,
                });
            }
            Route::Add => {
                self.form = Some(HorseForm::default());
            }
            Route::Edit(id) => {
                self.send_network_event(NetworkEvent::LoadHorse { id });
            }
        }
        self.route = route;
    }

    /// Replace the horse list, clamping the selection to the new bounds.
    ///
    pub fn set_horses(&mut self, horses: Vec<Horse>) {
        if horses.is_empty() {
            self.horses_list_state.select(None);
        } else {
            let selected = self.horses_list_state.selected().unwrap_or(0);
            self.horses_list_state
                .select(Some(selected.min(horses.len() - 1)));
        }
        self.horses = horses;
    }

    /// Return the horse list.
    ///
    pub fn get_horses(&self) -> &Vec<Horse> {
        &self.horses
    }

    /// Return the list selection state for stateful rendering.
    ///
    pub fn get_horses_list_state(&mut self) -> &mut ListState {
        &mut self.horses_list_state
    }

    /// Return the currently selected horse, if any.
    ///
    pub fn selected_horse(&self) -> Option<&Horse> {
        self.horses_list_state
            .selected()
            .and_then(|index| self.horses.get(index))
    }

    /// Move the list selection down, wrapping around.
    ///
    pub fn next_horse(&mut self) {
        if self.horses.is_empty() {
            return;
        }
        let next = match self.horses_list_state.selected() {
            Some(index) if index + 1 < self.horses.len() => index + 1,
            Some(_) => 0,
            None => 0,
        };
        self.horses_list_state.select(Some(next));
    }

    /// Move the list selection up, wrapping around.
    ///
    pub fn previous_horse(&mut self) {
        if self.horses.is_empty() {
            return;
        }
        let previous = match self.horses_list_state.selected() {
            Some(0) | None => self.horses.len() - 1,
            Some(index) => index - 1,
        };
        self.horses_list_state.select(Some(previous));
    }

    /// Return the active availability filter.
    ///
    pub fn get_filter(&self) -> AvailabilityFilter {
        self.filter
    }

    /// Set the active filter and immediately reload the list with it.
    ///
    pub fn change_filter(&mut self, filter: AvailabilityFilter) {
        self.filter = filter;
        self.send_network_event(NetworkEvent::LoadHorses { filter });
    }

    /// Advance the filter to the next value and reload the list.
    ///
    pub fn cycle_filter(&mut self) {
        self.change_filter(self.filter.next());
    }

    /// Reload the list with the active filter.
    ///
    pub fn reload(&mut self) {
        self.send_network_event(NetworkEvent::LoadHorses {
            filter: self.filter,
        });
    }

    /// Ask for confirmation before deleting the selected horse. No request
    /// is sent until the confirmation is given.
    ///
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_horse().and_then(|horse| horse.id) {
            self.delete_confirmation = Some(id);
        }
    }

    /// Confirm the pending deletion and issue the delete request.
    ///
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.delete_confirmation.take() {
            self.send_network_event(NetworkEvent::DeleteHorse { id });
        }
    }

    /// Dismiss the pending deletion without sending anything.
    ///
    pub fn cancel_delete(&mut self) {
        self.delete_confirmation = None;
    }

    /// Return the id of the horse pending delete confirmation, if any.
    ///
    pub fn get_delete_confirmation(&self) -> Option<u64> {
        self.delete_confirmation
    }

    /// Set whether a request is in flight.
    ///
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Whether a request is in flight.
    ///
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Show a notification, replacing any currently visible one and
    /// restarting its timer.
    ///
    pub fn show_toast(&mut self, message: &str, kind: ToastKind) {
        self.toast = Some(Toast::new(message, kind));
    }

    /// Return the currently visible notification, if any.
    ///
    pub fn get_toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Return the edit screen state machine.
    ///
    pub fn get_edit_state(&self) -> &EditState {
        &self.edit_state
    }

    /// Bind the fetched horse to the edit form. Responses arriving for a
    /// screen the user already left are dropped.
    ///
    pub fn set_edit_horse(&mut self, horse: Horse) {
        if self.route.horse_id() != horse.id {
            debug!("Dropping horse response for a screen no longer shown.");
            return;
        }
        self.form = Some(HorseForm::from_horse(&horse));
        self.edit_state = EditState::Ready;
    }

    /// Mark the edit screen as not found with a user-facing message.
    ///
    pub fn set_edit_not_found(&mut self, message: String) {
        if !matches!(self.route, Route::Edit(_)) {
            return;
        }
        self.edit_state = EditState::NotFound(message);
    }

    /// Attach a persistent inline error message to the active form.
    ///
    pub fn set_form_error(&mut self, message: String) {
        if let Some(form) = &mut self.form {
            form.error = Some(message);
        }
    }

    /// Return the active form, if the current screen has one.
    ///
    pub fn form(&self) -> Option<&HorseForm> {
        self.form.as_ref()
    }

    /// Return the active form mutably.
    ///
    pub fn form_mut(&mut self) -> Option<&mut HorseForm> {
        self.form.as_mut()
    }

    /// Submit the active form: PUT for the edit screen, POST for the create
    /// screen. Does nothing when no form is active.
    ///
    pub fn save(&mut self) {
        let horse = match &self.form {
            Some(form) => form.to_horse(self.route.horse_id()),
            None => return,
        };
        match self.route {
            Route::Add => self.send_network_event(NetworkEvent::CreateHorse { horse }),
            Route::Edit(id) => self.send_network_event(NetworkEvent::UpdateHorse { id, horse }),
            Route::List => (),
        }
    }

    /// Toggle the in-TUI log view.
    ///
    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }

    /// Whether the in-TUI log view is shown.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Append a formatted log entry, discarding the oldest past the cap.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            self.log_entries.remove(0);
        }
    }

    /// Return the retained log entries.
    ///
    pub fn get_log_entries(&self) -> &Vec<String> {
        &self.log_entries
    }

    /// Expire the visible notification and animate the spinner. Driven by
    /// the terminal tick.
    ///
    pub fn tick(&mut self) {
        if self.busy {
            self.advance_spinner_index();
        }
        let now = Instant::now();
        if self
            .toast
            .as_ref()
            .map_or(false, |toast| toast.is_expired_at(now))
        {
            self.toast = None;
        }
    }

    /// Set the known terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Send an event to the network thread. Absent or closed channels are
    /// logged and otherwise ignored; the user can retry the action.
    ///
    fn send_network_event(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to send network event: {}", e);
            }
        }
    }
}

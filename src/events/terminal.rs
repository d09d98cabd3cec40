use crate::state::{Route, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => (),
                Err(_) => break,
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    debug!("Processing exit terminal event '{:?}'...", key);
                    return Ok(false);
                }
                // The delete confirmation modal captures all input while open.
                if state.get_delete_confirmation().is_some() {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('t') | KeyCode::Enter => {
                            state.confirm_delete()
                        }
                        KeyCode::Char('n') | KeyCode::Esc => state.cancel_delete(),
                        _ => (),
                    }
                    return Ok(true);
                }
                if state.is_debug_mode() {
                    if matches!(
                        key.code,
                        KeyCode::Esc | KeyCode::Char('D') | KeyCode::Char('q')
                    ) {
                        state.toggle_debug_mode();
                    }
                    return Ok(true);
                }
                match *state.current_route() {
                    Route::List => return Self::handle_list_key(key, state),
                    Route::Add | Route::Edit(_) => Self::handle_form_key(key, state),
                }
            }
            Event::Tick => state.tick(),
        }
        Ok(true)
    }

    /// Handle a key press on the list screen.
    ///
    fn handle_list_key(key: KeyEvent, state: &mut State) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return Ok(false);
            }
            KeyCode::Char('j') | KeyCode::Down => state.next_horse(),
            KeyCode::Char('k') | KeyCode::Up => state.previous_horse(),
            KeyCode::Char('f') => state.cycle_filter(),
            KeyCode::Char('r') => state.reload(),
            KeyCode::Char('a') => state.navigate(Route::Add),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = state.selected_horse().and_then(|horse| horse.id) {
                    state.navigate(Route::Edit(id));
                }
            }
            KeyCode::Char('d') => state.request_delete(),
            KeyCode::Char('D') => state.toggle_debug_mode(),
            _ => (),
        }
        Ok(true)
    }

    /// Handle a key press on the create or edit screen. While the edit
    /// screen is loading or not found there is no form; only dismissal keys
    /// apply.
    ///
    fn handle_form_key(key: KeyEvent, state: &mut State) {
        if state.form().is_none() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                state.navigate(Route::List);
            }
            return;
        }
        match key.code {
            KeyCode::Esc => state.navigate(Route::List),
            KeyCode::Enter => state.save(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = state.form_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = state.form_mut() {
                    form.previous_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = state.form_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = state.form_mut() {
                    form.push_char(c);
                }
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::stable::Horse;
    use crate::state::FormField;
    use std::sync::mpsc::{channel, Receiver};

    fn test_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        (State::new(tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let (mut state, rx) = test_state();
        state.set_horses(vec![Horse {
            id: Some(2),
            breed: "Hucuł".to_string(),
            age: 3,
            available_for_riding: true,
        }]);
        Handler::handle_list_key(press(KeyCode::Char('d')), &mut state).unwrap();
        assert_eq!(state.get_delete_confirmation(), Some(2));
        // The modal is open; 'n' declines without issuing a request.
        state.cancel_delete();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn form_keys_route_to_focused_field() {
        let (mut state, _rx) = test_state();
        state.navigate(Route::Add);
        Handler::handle_form_key(press(KeyCode::Char('A')), &mut state);
        Handler::handle_form_key(press(KeyCode::Char('r')), &mut state);
        assert_eq!(state.form().unwrap().breed, "Ar");
        Handler::handle_form_key(press(KeyCode::Tab), &mut state);
        Handler::handle_form_key(press(KeyCode::Char('5')), &mut state);
        let form = state.form().unwrap();
        assert_eq!(form.field, FormField::Age);
        assert_eq!(form.age, "5");
    }

    #[test]
    fn enter_submits_active_form() {
        let (mut state, rx) = test_state();
        state.navigate(Route::Add);
        Handler::handle_form_key(press(KeyCode::Enter), &mut state);
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::CreateHorse { .. }
        ));
    }

    #[test]
    fn escape_leaves_form_without_saving() {
        let (mut state, rx) = test_state();
        state.navigate(Route::Add);
        Handler::handle_form_key(press(KeyCode::Esc), &mut state);
        assert_eq!(*state.current_route(), Route::List);
        // Only the list reload is queued, never a save.
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::LoadHorses { .. }
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn not_found_edit_screen_only_dismisses() {
        let (mut state, rx) = test_state();
        state.navigate(Route::Edit(9));
        while rx.try_recv().is_ok() {}
        state.set_edit_not_found("X".to_string());
        Handler::handle_form_key(press(KeyCode::Char('x')), &mut state);
        assert_eq!(*state.current_route(), Route::Edit(9));
        Handler::handle_form_key(press(KeyCode::Esc), &mut state);
        assert_eq!(*state.current_route(), Route::List);
    }
}

//! Navigation-related state types.
//!
//! This module contains the route type resolved from navigation paths and
//! the edit screen's state machine.

/// Specifying the different screens addressable by a navigation path.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Route {
    List,
    Add,
    Edit(u64),
}

impl Route {
    /// Resolve a navigation path to exactly one screen:
    /// `/edit/{id}` opens the edit screen for the trailing id segment,
    /// `/add` opens the create screen, and anything else falls back to
    /// the list screen.
    ///
    pub fn parse(path: &str) -> Route {
        if let Some(rest) = path.strip_prefix("/edit/") {
            let segment = rest.split('/').next().unwrap_or("");
            if let Ok(id) = segment.parse::<u64>() {
                return Route::Edit(id);
            }
            return Route::List;
        }
        if path == "/add" {
            return Route::Add;
        }
        Route::List
    }

    /// Return the id of the horse being edited, if any.
    ///
    pub fn horse_id(&self) -> Option<u64> {
        match self {
            Route::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

/// Specifying the edit screen state machine: the screen starts loading,
/// then either holds a fetched horse or reports that it was not found.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EditState {
    Loading,
    Ready,
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root_is_list() {
        assert_eq!(Route::parse("/"), Route::List);
    }

    #[test]
    fn parse_add() {
        assert_eq!(Route::parse("/add"), Route::Add);
    }

    #[test]
    fn parse_edit_with_id() {
        assert_eq!(Route::parse("/edit/3"), Route::Edit(3));
    }

    #[test]
    fn parse_edit_ignores_extra_segments() {
        assert_eq!(Route::parse("/edit/3/extra"), Route::Edit(3));
    }

    #[test]
    fn parse_edit_with_invalid_id_falls_back_to_list() {
        assert_eq!(Route::parse("/edit/abc"), Route::List);
        assert_eq!(Route::parse("/edit/"), Route::List);
    }

    #[test]
    fn parse_unknown_falls_back_to_list() {
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/konie"), Route::List);
        assert_eq!(Route::parse("/add/extra"), Route::List);
    }

    #[test]
    fn horse_id() {
        assert_eq!(Route::List.horse_id(), None);
        assert_eq!(Route::Add.horse_id(), None);
        assert_eq!(Route::Edit(9).horse_id(), Some(9));
    }

    #[test]
    fn edit_state() {
        assert_eq!(EditState::Loading, EditState::Loading);
        assert_ne!(EditState::Loading, EditState::Ready);
        assert_eq!(
            EditState::NotFound("X".to_string()),
            EditState::NotFound("X".to_string())
        );
    }
}

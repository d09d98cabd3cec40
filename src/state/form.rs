//! Form editing state types.
//!
//! This module contains the horse form used by the create and edit screens
//! and the availability filter used by the list screen.

use crate::stable::Horse;

/// Specifying the availability filter options for the list screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AvailabilityFilter {
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    /// Return the query value for the filter, or `None` when no query
    /// parameter should be sent at all.
    ///
    pub fn as_query(&self) -> Option<bool> {
        match self {
            AvailabilityFilter::All => None,
            AvailabilityFilter::Available => Some(true),
            AvailabilityFilter::Unavailable => Some(false),
        }
    }

    /// Return the next filter in the cycle order.
    ///
    pub fn next(&self) -> AvailabilityFilter {
        match self {
            AvailabilityFilter::All => AvailabilityFilter::Available,
            AvailabilityFilter::Available => AvailabilityFilter::Unavailable,
            AvailabilityFilter::Unavailable => AvailabilityFilter::All,
        }
    }

    /// Return the user-facing label for the filter.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "Wszystkie",
            AvailabilityFilter::Available => "Tylko dostępne",
            AvailabilityFilter::Unavailable => "Tylko niedostępne",
        }
    }
}

/// Specifying the form fields in focus order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Breed,
    Age,
    Available,
}

/// Houses the in-memory horse copy bound to the create and edit forms.
/// Field edits mutate only this copy; nothing is sent before an explicit
/// save.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HorseForm {
    pub breed: String,
    pub age: String,
    pub available_for_riding: bool,
    pub field: FormField,
    pub error: Option<String>,
}

impl Default for HorseForm {
    /// Defines the fresh record used by the create screen: empty breed,
    /// age zero, available for riding.
    ///
    fn default() -> HorseForm {
        HorseForm {
            breed: String::new(),
            age: "0".to_string(),
            available_for_riding: true,
            field: FormField::Breed,
            error: None,
        }
    }
}

impl HorseForm {
    /// Return a form pre-filled from a fetched horse.
    ///
    pub fn from_horse(horse: &Horse) -> HorseForm {
        HorseForm {
            breed: horse.breed.clone(),
            age: horse.age.to_string(),
            available_for_riding: horse.available_for_riding,
            field: FormField::Breed,
            error: None,
        }
    }

    /// Return the horse represented by the current field values. An empty
    /// age field counts as zero.
    ///
    pub fn to_horse(&self, id: Option<u64>) -> Horse {
        Horse {
            id,
            breed: self.breed.clone(),
            age: self.age.parse().unwrap_or(0),
            available_for_riding: self.available_for_riding,
        }
    }

    /// Move focus to the next field, wrapping around.
    ///
    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Breed => FormField::Age,
            FormField::Age => FormField::Available,
            FormField::Available => FormField::Breed,
        };
    }

    /// Move focus to the previous field, wrapping around.
    ///
    pub fn previous_field(&mut self) {
        self.field = match self.field {
            FormField::Breed => FormField::Available,
            FormField::Age => FormField::Breed,
            FormField::Available => FormField::Age,
        };
    }

    /// Route a typed character to the focused field. The age field accepts
    /// digits only; space toggles availability when that field is focused.
    ///
    pub fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Breed => self.breed.push(c),
            FormField::Age => {
                if c.is_ascii_digit() && self.age.len() < 3 {
                    if self.age == "0" {
                        self.age.clear();
                    }
                    self.age.push(c);
                }
            }
            FormField::Available => {
                if c == ' ' {
                    self.toggle_available();
                }
            }
        }
    }

    /// Remove the last character from the focused text field.
    ///
    pub fn backspace(&mut self) {
        match self.field {
            FormField::Breed => {
                self.breed.pop();
            }
            FormField::Age => {
                self.age.pop();
            }
            FormField::Available => (),
        }
    }

    /// Flip the availability flag.
    ///
    pub fn toggle_available(&mut self) {
        self.available_for_riding = !self.available_for_riding;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_values() {
        assert_eq!(AvailabilityFilter::All.as_query(), None);
        assert_eq!(AvailabilityFilter::Available.as_query(), Some(true));
        assert_eq!(AvailabilityFilter::Unavailable.as_query(), Some(false));
    }

    #[test]
    fn filter_cycles_through_all_values() {
        let filter = AvailabilityFilter::All;
        assert_eq!(filter.next(), AvailabilityFilter::Available);
        assert_eq!(filter.next().next(), AvailabilityFilter::Unavailable);
        assert_eq!(filter.next().next().next(), AvailabilityFilter::All);
    }

    #[test]
    fn default_form_is_fresh_record() {
        let form = HorseForm::default();
        assert_eq!(form.breed, "");
        assert_eq!(form.age, "0");
        assert!(form.available_for_riding);
        assert_eq!(form.field, FormField::Breed);
        assert!(form.error.is_none());
    }

    #[test]
    fn from_horse_copies_fields() {
        let horse = Horse {
            id: Some(4),
            breed: "Fiord".to_string(),
            age: 11,
            available_for_riding: false,
        };
        let form = HorseForm::from_horse(&horse);
        assert_eq!(form.breed, "Fiord");
        assert_eq!(form.age, "11");
        assert!(!form.available_for_riding);
    }

    #[test]
    fn to_horse_parses_age() {
        let mut form = HorseForm::default();
        form.breed = "Arab".to_string();
        form.age = "12".to_string();
        let horse = form.to_horse(Some(2));
        assert_eq!(horse.id, Some(2));
        assert_eq!(horse.age, 12);

        form.age.clear();
        assert_eq!(form.to_horse(None).age, 0);
    }

    #[test]
    fn age_field_accepts_digits_only() {
        let mut form = HorseForm::default();
        form.field = FormField::Age;
        form.push_char('x');
        assert_eq!(form.age, "0");
        form.push_char('7');
        assert_eq!(form.age, "7");
        form.push_char('2');
        assert_eq!(form.age, "72");
    }

    #[test]
    fn space_toggles_availability_when_focused() {
        let mut form = HorseForm::default();
        form.field = FormField::Available;
        form.push_char(' ');
        assert!(!form.available_for_riding);
        form.push_char(' ');
        assert!(form.available_for_riding);
    }

    #[test]
    fn field_focus_wraps_both_ways() {
        let mut form = HorseForm::default();
        form.next_field();
        assert_eq!(form.field, FormField::Age);
        form.next_field();
        assert_eq!(form.field, FormField::Available);
        form.next_field();
        assert_eq!(form.field, FormField::Breed);
        form.previous_field();
        assert_eq!(form.field, FormField::Available);
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut form = HorseForm::default();
        form.breed = "Ar".to_string();
        form.backspace();
        assert_eq!(form.breed, "A");
        form.field = FormField::Available;
        form.backspace();
        assert_eq!(form.breed, "A");
    }
}

//! Submission gate: validation of the four reservation fields.
//!
//! [`validate`] is a pure function of a [`FormSnapshot`]; [`SubmitGate`] turns
//! its outcome into the enabled/disabled state of the add action.

use super::catalog::Catalog;
use super::error::{Field, ValidationError};
use super::input::{self, IdMask};

/// Borrowed view of the form fields at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSnapshot<'a> {
    pub name: &'a str,
    pub national_id: &'a str,
    pub category: Option<&'a str>,
    pub movie: Option<&'a str>,
}

/// Check every field, collecting all failures in form order.
pub fn validate(
    snapshot: &FormSnapshot<'_>,
    catalog: &Catalog,
    mask: &IdMask,
) -> Result<(), ValidationError> {
    let mut failed = Vec::new();

    if !input::is_valid_name(snapshot.name) {
        failed.push(Field::Name);
    }

    if !mask.is_complete(snapshot.national_id) {
        failed.push(Field::NationalId);
    }

    match snapshot.category {
        Some(category) if catalog.has_category(category) => {
            let movie_ok = snapshot
                .movie
                .map(|movie| catalog.contains(category, movie))
                .unwrap_or(false);
            if !movie_ok {
                failed.push(Field::Movie);
            }
        }
        _ => {
            failed.push(Field::Category);
            // A movie cannot be valid without a category to belong to.
            failed.push(Field::Movie);
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(failed))
    }
}

/// State of the add-reservation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Disabled,
    Enabled,
}

impl SubmitState {
    pub fn is_enabled(self) -> bool {
        self == SubmitState::Enabled
    }
}

/// Two-state machine driven by the validation outcome.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    state: SubmitState,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Feed the latest "all fields valid" result.
    ///
    /// Returns the new state only when it differs from the previous one.
    pub fn update(&mut self, all_valid: bool) -> Option<SubmitState> {
        let next = if all_valid {
            SubmitState::Enabled
        } else {
            SubmitState::Disabled
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    /// Force the disabled state, as after the form is cleared.
    pub fn reset(&mut self) {
        self.state = SubmitState::Disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid() -> FormSnapshot<'static> {
        FormSnapshot {
            name: "Ana",
            national_id: "12345678-9",
            category: Some("Acción"),
            movie: Some("Mad Max"),
        }
    }

    fn check(snapshot: FormSnapshot<'_>) -> Result<(), ValidationError> {
        let catalog = Catalog::builtin().unwrap();
        validate(&snapshot, catalog, &IdMask::dui())
    }

    #[test]
    fn test_all_fields_valid() {
        assert_eq!(check(valid()), Ok(()));
    }

    #[test]
    fn test_each_field_failure_is_reported() {
        let err = check(FormSnapshot { name: "  ", ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::Name]);

        let err = check(FormSnapshot { national_id: "1234____-_", ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::NationalId]);

        let err = check(FormSnapshot { national_id: "", ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::NationalId]);

        let err = check(FormSnapshot { movie: None, ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::Movie]);

        let err = check(FormSnapshot { category: None, ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::Category, Field::Movie]);
    }

    #[test]
    fn test_movie_must_belong_to_selected_category() {
        let err = check(FormSnapshot { movie: Some("Superbad"), ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::Movie]);

        let err = check(FormSnapshot { category: Some("Terror"), ..valid() }).unwrap_err();
        assert!(err.fields.contains(&Field::Category));
    }

    #[test]
    fn test_name_with_digits_is_rejected() {
        let err = check(FormSnapshot { name: "Ana2", ..valid() }).unwrap_err();
        assert_eq!(err.fields, vec![Field::Name]);
    }

    #[test]
    fn test_gate_transitions() {
        let mut gate = SubmitGate::new();
        assert_eq!(gate.state(), SubmitState::Disabled);
        assert_eq!(gate.update(false), None);
        assert_eq!(gate.update(true), Some(SubmitState::Enabled));
        assert_eq!(gate.update(true), None);
        assert_eq!(gate.update(false), Some(SubmitState::Disabled));
        gate.update(true);
        gate.reset();
        assert!(!gate.state().is_enabled());
    }

    proptest! {
        #[test]
        fn prop_submittable_iff_every_field_valid(
            name in "[a-zA-Z0-9 ]{0,8}",
            digits in "[0-9]{0,9}",
            category_idx in 0usize..6,
            movie_idx in 0usize..4,
        ) {
            let catalog = Catalog::builtin().unwrap();
            let mask = IdMask::dui();
            let categories: Vec<&str> = catalog.categories().collect();
            let category = categories.get(category_idx).copied();
            let movie = category
                .and_then(|c| catalog.movies(c))
                .and_then(|m| m.get(movie_idx))
                .map(String::as_str);
            let national_id = mask.render(&digits);

            let snapshot = FormSnapshot {
                name: &name,
                national_id: &national_id,
                category,
                movie,
            };

            let expected = !name.trim().is_empty()
                && name.chars().all(|c| c.is_alphabetic() || c == ' ')
                && digits.len() == 9
                && category.is_some()
                && movie.is_some();

            prop_assert_eq!(validate(&snapshot, catalog, &mask).is_ok(), expected);
        }
    }
}

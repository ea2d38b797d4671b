//! Reservation form state and the add-reservation action.
//!
//! Every field setter re-runs validation and feeds the result to the
//! [`SubmitGate`], so the enabled state of the add action always reflects the
//! current field contents.

use super::catalog::Catalog;
use super::error::{ReservationError, ValidationError};
use super::input::{self, IdMask, MaskedInput};
use super::reservation::{Reservation, ReservationBook};
use super::validation::{self, FormSnapshot, SubmitGate, SubmitState};
use tracing::{debug, info, warn};

/// Input fields of the reservation form plus the derived submit state.
#[derive(Debug, Clone)]
pub struct ReservationForm {
    catalog: Catalog,
    name: String,
    national_id: MaskedInput,
    category: Option<String>,
    movie: Option<String>,
    movie_options: Vec<String>,
    gate: SubmitGate,
}

impl ReservationForm {
    pub fn new(catalog: Catalog, mask: IdMask) -> Self {
        Self {
            catalog,
            name: String::new(),
            national_id: MaskedInput::new(mask),
            category: None,
            movie: None,
            movie_options: Vec::new(),
            gate: SubmitGate::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // Field access

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name text. Characters that are not letters or spaces are dropped.
    pub fn set_name(&mut self, raw: &str) {
        self.name = input::filter_name_input(raw);
        self.refresh_gate();
    }

    /// The national ID as displayed, literals and prompts included.
    pub fn national_id(&self) -> String {
        self.national_id.text()
    }

    /// Only the digits typed into the national ID so far.
    pub fn national_id_digits(&self) -> &str {
        self.national_id.digits()
    }

    pub fn id_mask(&self) -> &IdMask {
        self.national_id.mask()
    }

    /// Replace the national ID with an edited rendering of the mask.
    pub fn set_national_id(&mut self, edited: &str) {
        self.national_id.accept_edit(edited);
        self.refresh_gate();
    }

    /// Type a single character into the national ID. Returns false when rejected.
    pub fn type_national_id_char(&mut self, c: char) -> bool {
        let accepted = self.national_id.insert(c);
        if accepted {
            self.refresh_gate();
        }
        accepted
    }

    pub fn national_id_backspace(&mut self) {
        self.national_id.backspace();
        self.refresh_gate();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Select a category, or unset it with `None`.
    ///
    /// The movie selection is always reset and the movie list repopulated from
    /// the catalog. Names missing from the catalog leave the category unset.
    pub fn select_category(&mut self, category: Option<&str>) {
        self.movie = None;
        self.movie_options.clear();
        self.category = None;

        if let Some(name) = category {
            match self.catalog.movies(name) {
                Some(movies) => {
                    self.movie_options = movies.to_vec();
                    self.category = Some(name.to_string());
                    debug!(category = name, movies = movies.len(), "category selected");
                }
                None => warn!(category = name, "ignoring category missing from catalog"),
            }
        }

        self.refresh_gate();
    }

    pub fn movie(&self) -> Option<&str> {
        self.movie.as_deref()
    }

    /// Movies offered for the selected category, in catalog order.
    pub fn movie_options(&self) -> &[String] {
        &self.movie_options
    }

    /// Select a movie from the current options, or unset it with `None`.
    pub fn select_movie(&mut self, movie: Option<&str>) {
        self.movie = movie
            .filter(|m| self.movie_options.iter().any(|option| option == m))
            .map(str::to_string);
        self.refresh_gate();
    }

    // Gate

    pub fn submit_state(&self) -> SubmitState {
        self.gate.state()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_state().is_enabled()
    }

    /// Validate the current fields without touching the gate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let national_id = self.national_id.text();
        let snapshot = FormSnapshot {
            name: &self.name,
            national_id: &national_id,
            category: self.category.as_deref(),
            movie: self.movie.as_deref(),
        };
        validation::validate(&snapshot, &self.catalog, self.national_id.mask())
    }

    fn refresh_gate(&mut self) {
        let valid = self.validate().is_ok();
        if let Some(state) = self.gate.update(valid) {
            debug!(?state, "submit gate changed");
        }
    }

    // Actions

    /// Add a reservation built from the current fields.
    ///
    /// All fields are checked first; on failure nothing is appended and the
    /// fields keep their contents. On success the row is appended to `book` and
    /// the form is cleared.
    pub fn submit(&mut self, book: &mut ReservationBook) -> Result<Reservation, ReservationError> {
        if let Err(err) = self.validate() {
            warn!(%err, "reservation rejected");
            return Err(err.into());
        }

        let reservation = Reservation {
            name: self.name.trim().to_string(),
            national_id: self.national_id.text(),
            category: self.category.clone().unwrap_or_default(),
            movie: self.movie.clone().unwrap_or_default(),
        };

        let row = book.push(reservation.clone());
        info!(
            row,
            category = %reservation.category,
            movie = %reservation.movie,
            "reservation added"
        );

        self.clear();
        Ok(reservation)
    }

    /// Reset every field to its empty or unselected state.
    pub fn clear(&mut self) {
        self.name.clear();
        self.national_id.clear();
        self.category = None;
        self.movie = None;
        self.movie_options.clear();
        self.gate.reset();
        debug!("form cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Field;
    use proptest::prelude::*;

    fn form() -> ReservationForm {
        ReservationForm::new(Catalog::builtin().unwrap().clone(), IdMask::dui())
    }

    fn filled_form() -> ReservationForm {
        let mut form = form();
        form.select_category(Some("Acción"));
        form.select_movie(Some("Mad Max"));
        form.set_name("Ana");
        form.set_national_id("12345678-9");
        form
    }

    #[test]
    fn test_initial_state_is_disabled_and_empty() {
        let form = form();
        assert_eq!(form.submit_state(), SubmitState::Disabled);
        assert_eq!(form.name(), "");
        assert_eq!(form.national_id(), "");
        assert!(form.category().is_none());
        assert!(form.movie().is_none());
        assert!(form.movie_options().is_empty());
    }

    #[test]
    fn test_every_category_populates_its_movies_in_order() {
        let mut form = form();
        let catalog = form.catalog().clone();
        for category in catalog.categories() {
            form.select_category(Some(category));
            assert_eq!(form.movie_options(), catalog.movies(category).unwrap());
            assert!(form.movie().is_none());
        }
    }

    #[test]
    fn test_category_change_resets_movie() {
        let mut form = filled_form();
        assert!(form.is_submit_enabled());

        form.select_category(Some("Drama"));
        assert!(form.movie().is_none());
        assert_eq!(
            form.movie_options(),
            &["The Shawshank Redemption", "Forrest Gump", "The Godfather"]
        );
        assert!(!form.is_submit_enabled());
    }

    #[test]
    fn test_unset_category_clears_movies() {
        let mut form = filled_form();
        form.select_category(None);
        assert!(form.category().is_none());
        assert!(form.movie().is_none());
        assert!(form.movie_options().is_empty());
        assert!(!form.is_submit_enabled());
    }

    #[test]
    fn test_unknown_category_is_left_unset() {
        let mut form = form();
        form.select_category(Some("Terror"));
        assert!(form.category().is_none());
        assert!(form.movie_options().is_empty());
    }

    #[test]
    fn test_movie_outside_options_is_not_selected() {
        let mut form = form();
        form.select_category(Some("Comedia"));
        form.select_movie(Some("Mad Max"));
        assert!(form.movie().is_none());
        form.select_movie(Some("Superbad"));
        assert_eq!(form.movie(), Some("Superbad"));
        form.select_movie(None);
        assert!(form.movie().is_none());
    }

    #[test]
    fn test_gate_follows_each_field() {
        let mut form = form();
        form.select_category(Some("Acción"));
        assert!(!form.is_submit_enabled());
        form.select_movie(Some("Mad Max"));
        assert!(!form.is_submit_enabled());
        form.set_name("Ana");
        assert!(!form.is_submit_enabled());

        for c in "12345678".chars() {
            assert!(form.type_national_id_char(c));
        }
        assert_eq!(form.national_id(), "12345678-_");
        assert!(!form.is_submit_enabled());

        assert!(!form.type_national_id_char('x'));
        assert!(form.type_national_id_char('9'));
        assert!(form.is_submit_enabled());

        form.national_id_backspace();
        assert!(!form.is_submit_enabled());
    }

    #[test]
    fn test_name_filter_applies_on_set() {
        let mut form = form();
        form.set_name("An4a");
        assert_eq!(form.name(), "Ana");
    }

    #[test]
    fn test_submit_valid_appends_and_clears() {
        let mut form = filled_form();
        form.set_name("  Ana  ");
        assert_eq!(form.submit_state(), SubmitState::Enabled);

        let mut book = ReservationBook::new();
        let reservation = form.submit(&mut book).unwrap();

        assert_eq!(
            reservation,
            Reservation {
                name: "Ana".to_string(),
                national_id: "12345678-9".to_string(),
                category: "Acción".to_string(),
                movie: "Mad Max".to_string(),
            }
        );
        assert_eq!(book.rows(), &[reservation]);

        assert_eq!(form.name(), "");
        assert_eq!(form.national_id(), "");
        assert!(form.category().is_none());
        assert!(form.movie().is_none());
        assert!(form.movie_options().is_empty());
        assert_eq!(form.submit_state(), SubmitState::Disabled);
    }

    #[test]
    fn test_submit_invalid_changes_nothing() {
        let mut form = filled_form();
        form.set_national_id("1234");
        let before = (
            form.name().to_string(),
            form.national_id(),
            form.category().map(str::to_string),
            form.movie().map(str::to_string),
        );

        let mut book = ReservationBook::new();
        let err = form.submit(&mut book).unwrap_err();

        assert!(matches!(err, ReservationError::Incomplete(ref v) if v.fields == vec![Field::NationalId]));
        assert!(book.is_empty());
        let after = (
            form.name().to_string(),
            form.national_id(),
            form.category().map(str::to_string),
            form.movie().map(str::to_string),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_repeated_submissions_are_independent_appends() {
        let mut book = ReservationBook::new();
        for _ in 0..2 {
            let mut form = filled_form();
            form.submit(&mut book).unwrap();
        }
        assert_eq!(book.len(), 2);
        assert_eq!(book.rows()[0], book.rows()[1]);
    }

    proptest! {
        #[test]
        fn prop_invalid_submit_appends_nothing(name in "[0-9 ]{0,6}", digits in "[0-9]{0,9}") {
            let mut form = form();
            form.select_category(Some("Drama"));
            form.select_movie(Some("Forrest Gump"));
            form.set_name(&name);
            form.set_national_id(&digits);

            let mut book = ReservationBook::new();
            let result = form.submit(&mut book);

            // Digits and spaces filter down to a blank name, which never validates.
            prop_assert!(result.is_err());
            prop_assert!(book.is_empty());
            prop_assert_eq!(form.category(), Some("Drama"));
            prop_assert_eq!(form.movie(), Some("Forrest Gump"));
        }
    }
}

//! Reservation records and the in-memory list they are appended to.

/// One registered reservation, as shown in a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub national_id: String,
    pub category: String,
    pub movie: String,
}

impl Reservation {
    /// Cell values in column order: name, ID, category, movie.
    pub fn cells(&self) -> [&str; 4] {
        [&self.name, &self.national_id, &self.category, &self.movie]
    }
}

/// Append-only list of the reservations registered in this session.
#[derive(Debug, Clone, Default)]
pub struct ReservationBook {
    rows: Vec<Reservation>,
}

impl ReservationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reservation and return its zero-based row index.
    pub fn push(&mut self, reservation: Reservation) -> usize {
        self.rows.push(reservation);
        self.rows.len() - 1
    }

    pub fn rows(&self) -> &[Reservation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! Core reservation logic: catalog, input handling, validation and the form.

pub mod catalog;
pub mod error;
pub mod form;
pub mod input;
pub mod reservation;
pub mod validation;

//! Static category to movie lookup table.
//!
//! The catalog is an ordered list of categories, each holding an ordered list of
//! movie titles. It is built once at startup and never mutated afterwards.

use super::error::CatalogError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

static BUILTIN_CATALOG: Lazy<Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::from_json(BUILTIN_CATALOG_JSON));

/// A category and the movies listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    pub movies: Vec<String>,
}

/// Immutable, ordered mapping from category name to movie titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CategoryEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty, blank or duplicated entries.
    pub fn new(entries: Vec<CategoryEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.category.trim().is_empty() {
                return Err(CatalogError::BlankCategory(index));
            }
            if !seen.insert(entry.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(entry.category.clone()));
            }
            if entry.movies.is_empty() {
                return Err(CatalogError::NoMovies(entry.category.clone()));
            }
            if entry.movies.iter().any(|m| m.trim().is_empty()) {
                return Err(CatalogError::BlankMovie(entry.category.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Parse a catalog from a JSON array of `{category, movies}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CategoryEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The catalog shipped with the application, parsed on first use.
    pub fn builtin() -> Result<&'static Catalog, &'static CatalogError> {
        BUILTIN_CATALOG.as_ref()
    }

    /// Category names in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Movies for a category in catalog order, or `None` for an unknown category.
    pub fn movies(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.movies.as_slice())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.movies(category).is_some()
    }

    /// True when `movie` is listed under `category`.
    pub fn contains(&self, category: &str, movie: &str) -> bool {
        self.movies(category)
            .map(|movies| movies.iter().any(|m| m == movie))
            .unwrap_or(false)
    }
}

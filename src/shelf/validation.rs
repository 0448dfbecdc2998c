//! Field rules applied when a new book enters the store.
//!
//! Books loaded from disk are trusted as-is; only `add_book` runs these checks.

use crate::error::{Result, ShelfError};
use chrono::{Datelike, Local};

pub const MIN_YEAR: i32 = 1800;

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Title and author must contain something other than whitespace.
pub fn validate_names(title: &str, author: &str) -> Result<()> {
    if title.trim().is_empty() || author.trim().is_empty() {
        return Err(ShelfError::InvalidInput(
            "Title and author must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Year must fall in `[MIN_YEAR, max_year]`.
pub fn validate_year(year: i32, max_year: i32) -> Result<()> {
    if !(MIN_YEAR..=max_year).contains(&year) {
        return Err(ShelfError::InvalidInput(format!(
            "Year must be between {} and {}",
            MIN_YEAR, max_year
        )));
    }
    Ok(())
}

pub fn validate_new_book(title: &str, author: &str, year: i32) -> Result<()> {
    validate_names(title, author)?;
    validate_year(year, current_year())
}

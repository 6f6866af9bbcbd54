//! Field checks shared by the `Record::validate` implementations.
use uuid::Uuid;

use crate::errors::ModelError;

pub(crate) fn required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} required")));
    }
    Ok(())
}

pub(crate) fn required_id(field: &str, value: Uuid) -> Result<(), ModelError> {
    if value.is_nil() {
        return Err(ModelError::validation(format!("{field} required")));
    }
    Ok(())
}

/// Empty is allowed; anything else needs an `@`.
pub(crate) fn email(value: &str) -> Result<(), ModelError> {
    if !value.is_empty() && !value.contains('@') {
        return Err(ModelError::validation("invalid email"));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<(), ModelError> {
    if !(value >= 0.0) {
        return Err(ModelError::validation(format!("{field} must be >= 0")));
    }
    Ok(())
}

pub(crate) fn percentage(field: &str, value: f64) -> Result<(), ModelError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ModelError::validation(format!("{field} must be in 0..=100")));
    }
    Ok(())
}

pub(crate) fn positive(field: &str, value: i32) -> Result<(), ModelError> {
    if value <= 0 {
        return Err(ModelError::validation(format!("{field} must be > 0")));
    }
    Ok(())
}

/// Column widths are counted in characters, as Postgres `VARCHAR(n)` does.
pub(crate) fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

/// `max_len` over `(field, value, max)` triples, first violation wins.
pub(crate) fn max_lens(fields: &[(&str, &str, usize)]) -> Result<(), ModelError> {
    fields.iter().try_for_each(|&(field, value, max)| max_len(field, value, max))
}

pub(crate) fn ordered<T: PartialOrd>(start: Option<&T>, end: Option<&T>) -> Result<(), ModelError> {
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            return Err(ModelError::validation("end date must not precede start date"));
        }
    }
    Ok(())
}

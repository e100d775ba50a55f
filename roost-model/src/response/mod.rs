//! API response models.

pub mod friends;

use serde_json::{Map, Value};

use crate::{DecodeError, request::friends::CURSOR_END};

/// One page of a cursored response, kept as the raw JSON object.
pub type Page = Map<String, Value>;

/// Checks that a response body is a JSON object.
pub fn decode_page(value: Value) -> Result<Page, DecodeError> {
    match value {
        Value::Object(page) => Ok(page),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Reads the continuation cursor of a page.
///
/// Returns `None` when the stream has ended: the field is absent, is not a
/// string, or is the `"0"` sentinel.
pub fn next_cursor(page: &Page) -> Option<&str> {
    page.get("next_cursor_str")
        .and_then(Value::as_str)
        .filter(|cursor| *cursor != CURSOR_END)
}

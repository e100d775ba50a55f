//! Roost data representations.

use derive_more::{Deref, Display, From, Into};

use serde::{Deserialize, Serialize};

pub mod error;
pub mod request;
pub mod response;
pub mod user;
pub mod user_list;

pub use error::{ApiError, DecodeError, ErrorCode};
pub use user::{User, UserRef};

/// A canonical user identifier.
///
/// Older API generations hand out numeric ids that do not survive a round
/// trip through floating-point JSON parsers, so ids are always carried as
/// their decimal string form.
#[derive(
    Clone, Debug, Display, Deref, From, Into, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_owned())
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId(value.to_string())
    }
}

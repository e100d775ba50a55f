//! Friends list responses.

use serde::Deserialize;
use serde_json::Value;

use crate::{DecodeError, User, UserId, response::Page};

/// A page of `GET friends/list`.
#[derive(Clone, Debug, Deserialize)]
pub struct FriendsPage {
    pub users: Vec<RawUser>,
}

impl FriendsPage {
    /// Decodes a raw page.
    pub fn decode(page: &Page) -> Result<FriendsPage, DecodeError> {
        serde_json::from_value(Value::Object(page.clone())).map_err(DecodeError::Page)
    }

    /// Converts every record into a [`User`].
    ///
    /// Fails on the first record without an id.
    pub fn into_users(self) -> Result<Vec<User>, DecodeError> {
        self.users.into_iter().map(User::try_from).collect()
    }
}

/// A user record as the API sends it.
///
/// Carries both id generations; [`User::try_from`] settles on one.
#[derive(Clone, Debug, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub id_str: Option<String>,
    pub screen_name: String,
    pub name: String,
}

/// A legacy `id`, which older endpoints send as a number and some as a
/// string.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    String(String),
}

impl From<RawId> for UserId {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Number(id) => UserId::from(id),
            RawId::String(id) => UserId::from(id),
        }
    }
}

impl TryFrom<RawUser> for User {
    type Error = DecodeError;

    fn try_from(value: RawUser) -> Result<Self, Self::Error> {
        let id = match (value.id_str, value.id) {
            (Some(id), _) => UserId::from(id),
            (None, Some(id)) => UserId::from(id),
            (None, None) => {
                return Err(DecodeError::MissingId {
                    screen_name: value.screen_name,
                });
            }
        };

        Ok(User {
            id,
            screen_name: value.screen_name,
            name: value.name,
        })
    }
}

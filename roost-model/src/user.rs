//! User models.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A single user.
///
/// Two users are the same account when their [`UserId`]s match; the other
/// fields are display information and may collide.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize, Hash)]
pub struct User {
    /// The unique ID of the user.
    #[serde(rename = "id_str")]
    pub id: UserId,
    /// The user's handle, without the leading `@`.
    pub screen_name: String,
    /// The display name of the user.
    pub name: String,
}

/// The minimum needed to address a user on a mutation endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRef {
    /// Addresses a user by id.
    Id(UserId),
    /// Addresses a user by handle.
    ScreenName(String),
}

impl UserRef {
    /// Picks a reference from whichever parts are known.
    ///
    /// The id wins when both are present. Returns `None` if neither is.
    pub fn from_parts(id: Option<UserId>, screen_name: Option<String>) -> Option<UserRef> {
        match (id, screen_name) {
            (Some(id), _) => Some(UserRef::Id(id)),
            (None, Some(screen_name)) => Some(UserRef::ScreenName(screen_name)),
            (None, None) => None,
        }
    }
}

impl From<&User> for UserRef {
    fn from(value: &User) -> Self {
        UserRef::Id(value.id.clone())
    }
}

impl From<UserId> for UserRef {
    fn from(value: UserId) -> Self {
        UserRef::Id(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_takes_priority() {
        let id = UserId::from("123");

        assert_eq!(
            UserRef::from_parts(Some(id.clone()), Some("abc".into())),
            Some(UserRef::Id(id.clone()))
        );
        assert_eq!(
            UserRef::from_parts(None, Some("abc".into())),
            Some(UserRef::ScreenName("abc".into()))
        );
        assert_eq!(UserRef::from_parts(None, None), None);
    }

    #[test]
    fn user_serializes_string_id() {
        let user = User {
            id: UserId::from("42"),
            screen_name: "abcdef".into(),
            name: "Lord Abc of Def".into(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id_str": "42",
                "screen_name": "abcdef",
                "name": "Lord Abc of Def",
            })
        );
    }
}

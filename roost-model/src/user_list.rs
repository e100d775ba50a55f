//! The user list file format.
//!
//! A user list is a JSON object with two format discriminators:
//!
//! ```json
//! {"type":"user-list","version":1,"users":[...]}
//! ```
//!
//! Both discriminators must match exactly; there is no forward
//! compatibility.

use derive_more::{Display, Error};

use serde::Serialize;
use serde_json::Value;

use crate::User;

/// The `type` discriminator of a user list.
pub const USER_LIST_TYPE: &str = "user-list";

/// The only supported `version`.
pub const USER_LIST_VERSION: u64 = 1;

#[derive(Serialize)]
struct UserListRef<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u64,
    users: &'a [User],
}

/// Encodes a user list.
pub fn encode(users: &[User]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&UserListRef {
        kind: USER_LIST_TYPE,
        version: USER_LIST_VERSION,
        users,
    })
}

/// Decodes a user list.
///
/// Every user record is checked, the same as records from the API.
pub fn decode(raw: &str) -> Result<Vec<User>, UserListError> {
    let parsed: Value = serde_json::from_str(raw).map_err(UserListError::NotJson)?;

    let Value::Object(mut file) = parsed else {
        return Err(UserListError::InvalidFormat);
    };

    if file.get("type").and_then(Value::as_str) != Some(USER_LIST_TYPE) {
        return Err(UserListError::InvalidFormat);
    }

    if file.get("version").and_then(Value::as_u64) != Some(USER_LIST_VERSION) {
        return Err(UserListError::UnsupportedVersion);
    }

    let users = file.remove("users").unwrap_or(Value::Null);
    serde_json::from_value(users).map_err(UserListError::InvalidUsers)
}

/// A user list failed to decode.
#[derive(Debug, Display, Error)]
pub enum UserListError {
    #[display("File was not JSON")]
    NotJson(#[error(source)] serde_json::Error),
    #[display("Invalid file format")]
    InvalidFormat,
    #[display("Unsupported version")]
    UnsupportedVersion,
    #[display("Invalid user record: {_0}")]
    InvalidUsers(#[error(source)] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::UserId;

    fn users() -> Vec<User> {
        vec![
            User {
                id: UserId::from("123456789"),
                screen_name: "abcdef".into(),
                name: "Lord Abc of Def".into(),
            },
            User {
                id: UserId::from("234567891"),
                screen_name: "bcdefa".into(),
                name: "Lord Bcd of Efa".into(),
            },
        ]
    }

    #[test]
    fn writes_type_and_version() {
        let encoded: Value = serde_json::from_str(&encode(&users()).unwrap()).unwrap();

        assert_eq!(encoded["type"], "user-list");
        assert_eq!(encoded["version"], 1);
        assert_eq!(encoded["users"], serde_json::to_value(users()).unwrap());
    }

    #[test]
    fn returns_the_user_list() {
        let raw = json!({ "type": "user-list", "version": 1, "users": users() }).to_string();

        assert_eq!(decode(&raw).unwrap(), users());
    }

    #[test]
    fn rejects_non_json() {
        let err = decode("not valid JSON").unwrap_err();

        assert!(matches!(err, UserListError::NotJson(_)));
        assert_eq!(err.to_string(), "File was not JSON");
    }

    #[test]
    fn rejects_wrong_format() {
        let cases = [
            json!(1),
            json!([]),
            json!({}),
            json!({ "type": 1, "version": 1 }),
            json!({ "type": "not-user-list", "version": 1 }),
        ];

        for case in cases {
            let err = decode(&case.to_string()).unwrap_err();
            assert!(matches!(err, UserListError::InvalidFormat), "{}", case);
            assert_eq!(err.to_string(), "Invalid file format");
        }
    }

    #[test]
    fn rejects_other_versions() {
        let cases = [
            json!({ "type": "user-list" }),
            json!({ "type": "user-list", "version": "1" }),
            json!({ "type": "user-list", "version": 2 }),
        ];

        for case in cases {
            let err = decode(&case.to_string()).unwrap_err();
            assert!(matches!(err, UserListError::UnsupportedVersion), "{}", case);
            assert_eq!(err.to_string(), "Unsupported version");
        }
    }

    #[test]
    fn rejects_malformed_users() {
        let cases = [
            json!({ "type": "user-list", "version": 1 }),
            json!({ "type": "user-list", "version": 1, "users": [{}] }),
            json!({ "type": "user-list", "version": 1, "users": [{ "id_str": 1, "screen_name": "a", "name": "b" }] }),
        ];

        for case in cases {
            assert!(matches!(
                decode(&case.to_string()),
                Err(UserListError::InvalidUsers(_))
            ));
        }
    }
}

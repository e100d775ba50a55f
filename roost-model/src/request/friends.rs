//! Friends list request models.

use serde::{Deserialize, Serialize};

/// The friends list endpoint.
pub const FRIENDS_LIST: &str = "friends/list";

/// The page size requested from every cursored endpoint.
pub const PAGE_SIZE: u32 = 200;

/// The cursor that requests the first page.
pub const CURSOR_START: &str = "-1";

/// The cursor that marks the end of the stream.
pub const CURSOR_END: &str = "0";

/// Query for `GET friends/list`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FriendsListQuery {
    /// Whose friends to list. The authenticated user if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
}

/// Cursor parameters appended to every page request.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PageQuery {
    /// How many results should be returned.
    pub count: u32,
    /// The opaque cursor of the requested page.
    pub cursor: String,
}

impl PageQuery {
    /// The query for the first page.
    pub fn first() -> PageQuery {
        PageQuery {
            count: PAGE_SIZE,
            cursor: CURSOR_START.to_owned(),
        }
    }

    /// The query for the page at `cursor`.
    pub fn at(cursor: impl Into<String>) -> PageQuery {
        PageQuery {
            count: PAGE_SIZE,
            cursor: cursor.into(),
        }
    }
}

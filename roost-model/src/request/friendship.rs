//! Friendship mutation request models.

use serde::{Deserialize, Serialize};

use crate::{UserId, UserRef};

/// The follow endpoint.
pub const CREATE_FRIENDSHIP: &str = "friendships/create";

/// The friendship settings endpoint.
pub const UPDATE_FRIENDSHIP: &str = "friendships/update";

/// Query for `POST friendships/create`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateFriendshipQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    /// Enables notifications for the followed user.
    pub follow: bool,
}

impl From<UserRef> for CreateFriendshipQuery {
    fn from(value: UserRef) -> Self {
        let (user_id, screen_name) = match value {
            UserRef::Id(id) => (Some(id), None),
            UserRef::ScreenName(screen_name) => (None, Some(screen_name)),
        };

        CreateFriendshipQuery {
            user_id,
            screen_name,
            follow: true,
        }
    }
}

/// Query for `POST friendships/update`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateFriendshipQuery {
    pub user_id: UserId,
    /// Whether retweets from the user show up in the timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweets: Option<bool>,
}

//! Friendship mutations.

use anyhow::Error;

use futures_util::future::BoxFuture;

use roost_model::{
    UserId, UserRef,
    request::{
        friendship::{CREATE_FRIENDSHIP, CreateFriendshipQuery, UPDATE_FRIENDSHIP, UpdateFriendshipQuery},
        to_params,
    },
};

use crate::http::{ApiClient, Transport};

/// Follows a user.
///
/// Notifications for the followed user are switched on as well.
#[derive(Debug)]
pub struct Follow<T> {
    client: ApiClient<T>,
    user: UserRef,
}

impl<T> Follow<T> {
    /// Creates a new `Follow`.
    pub fn new(client: ApiClient<T>, user: UserRef) -> Follow<T> {
        Follow { client, user }
    }
}

impl<T> IntoFuture for Follow<T>
where
    T: Transport + 'static,
{
    type Output = Result<(), Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            tracing::info!(user = ?self.user, "following user");

            let params = to_params(&CreateFriendshipQuery::from(self.user))?;

            self.client.post(CREATE_FRIENDSHIP, params).await
        })
    }
}

/// Hides a followed user's retweets.
#[derive(Debug)]
pub struct DisableRetweets<T> {
    client: ApiClient<T>,
    user_id: UserId,
}

impl<T> DisableRetweets<T> {
    /// Creates a new `DisableRetweets`.
    pub fn new(client: ApiClient<T>, user_id: UserId) -> DisableRetweets<T> {
        DisableRetweets { client, user_id }
    }
}

impl<T> IntoFuture for DisableRetweets<T>
where
    T: Transport + 'static,
{
    type Output = Result<(), Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            tracing::debug!(user_id = %self.user_id, "updating friendship");

            let params = to_params(&UpdateFriendshipQuery {
                user_id: self.user_id,
                retweets: Some(false),
            })?;

            self.client.post(UPDATE_FRIENDSHIP, params).await
        })
    }
}

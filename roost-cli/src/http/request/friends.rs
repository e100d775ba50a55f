//! Friends listing.

use anyhow::Error;

use futures_util::future::BoxFuture;

use roost_model::{
    User,
    request::{
        friends::{FRIENDS_LIST, FriendsListQuery},
        to_params,
    },
    response::friends::FriendsPage,
};

use crate::http::{ApiClient, Transport};

/// Lists everyone a user follows.
///
/// Resolves to the users of every page, in the order the API returned them.
#[derive(Debug)]
pub struct ListFriends<T> {
    client: ApiClient<T>,
    screen_name: Option<String>,
}

impl<T> ListFriends<T> {
    /// Creates a new `ListFriends` for the authenticated user.
    pub fn new(client: ApiClient<T>) -> ListFriends<T> {
        ListFriends {
            client,
            screen_name: None,
        }
    }

    /// Lists the friends of `screen_name` instead.
    pub fn user(self, screen_name: impl Into<String>) -> ListFriends<T> {
        ListFriends {
            screen_name: Some(screen_name.into()),
            ..self
        }
    }
}

impl<T> IntoFuture for ListFriends<T>
where
    T: Transport + 'static,
{
    type Output = Result<Vec<User>, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let params = to_params(&FriendsListQuery {
                screen_name: self.screen_name,
            })?;

            let pages = self.client.paginated(FRIENDS_LIST, params).await?;

            let mut users = Vec::new();
            for page in &pages {
                users.extend(FriendsPage::decode(page)?.into_users()?);
            }

            tracing::debug!(count = users.len(), pages = pages.len(), "listed friends");

            Ok(users)
        })
    }
}

//! Follow graph API client.

use std::sync::Arc;

use anyhow::Error;

use derive_more::{Display, Error};

use futures_util::future::BoxFuture;

use roost_model::{
    User, UserRef,
    request::{Params, friends::PageQuery, to_params},
    response::{Page, decode_page, next_cursor},
};

use super::request::{
    friends::ListFriends,
    friendship::{DisableRetweets, Follow},
};
use super::transport::Transport;
use crate::graph::FollowGraph;

/// A client used to access the follow graph.
///
/// Cheaply cloneable, as it uses an `Arc` to share the transport.
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: Arc<T>,
    max_pages: Option<u32>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        ApiClient {
            transport: self.transport.clone(),
            max_pages: self.max_pages,
        }
    }
}

impl<T> ApiClient<T>
where
    T: Transport + 'static,
{
    /// Creates a new client with no page limit.
    pub fn new(transport: T) -> ApiClient<T> {
        ApiClient {
            transport: Arc::new(transport),
            max_pages: None,
        }
    }

    /// Limits how many pages a single listing may fetch.
    ///
    /// Listings that would go past the limit fail with
    /// [`PaginationLimitExceeded`] instead of returning a partial list. A
    /// limit of `0` is the same as no limit.
    pub fn max_pages(self, max_pages: Option<u32>) -> ApiClient<T> {
        ApiClient {
            max_pages: max_pages.filter(|max_pages| *max_pages > 0),
            ..self
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists a user's friends.
    pub fn list_friends(&self) -> ListFriends<T> {
        ListFriends::new(self.clone())
    }

    /// Follows a user.
    pub fn follow(&self, user: impl Into<UserRef>) -> Follow<T> {
        Follow::new(self.clone(), user.into())
    }

    /// Turns off retweets from a followed user.
    pub fn disable_retweets(&self, user: &User) -> DisableRetweets<T> {
        DisableRetweets::new(self.clone(), user.id.clone())
    }

    /// Fetches every page of a cursored endpoint.
    ///
    /// Pages are returned in the order they were fetched. A failure on any
    /// page fails the whole listing.
    pub async fn paginated(&self, endpoint: &str, params: Params) -> Result<Vec<Page>, Error> {
        let mut pages = Vec::new();
        let mut query = PageQuery::first();

        loop {
            if let Some(max_pages) = self.max_pages {
                if pages.len() >= max_pages as usize {
                    return Err(PaginationLimitExceeded {
                        endpoint: endpoint.to_owned(),
                        max_pages,
                    }
                    .into());
                }
            }

            let mut page_params = params.clone();
            page_params.extend(to_params(&query)?);

            let page = decode_page(self.transport.get(endpoint, &page_params).await?)?;

            tracing::debug!(endpoint, cursor = %query.cursor, page = pages.len(), "fetched page");

            let next = next_cursor(&page).map(str::to_owned);
            pages.push(page);

            match next {
                Some(cursor) => query = PageQuery::at(cursor),
                None => break,
            }
        }

        Ok(pages)
    }

    /// Makes a mutation request.
    pub(super) async fn post(&self, endpoint: &str, params: Params) -> Result<(), Error> {
        self.transport.post(endpoint, &params).await
    }
}

impl<T> FollowGraph for ApiClient<T>
where
    T: Transport + 'static,
{
    fn get_friends<'a>(&'a self, user: Option<&'a str>) -> BoxFuture<'a, Result<Vec<User>, Error>> {
        let mut request = self.list_friends();
        if let Some(user) = user {
            request = request.user(user);
        }

        request.into_future()
    }

    fn follow(&self, user: UserRef) -> BoxFuture<'_, Result<(), Error>> {
        ApiClient::follow(self, user).into_future()
    }

    fn disable_retweets<'a>(&'a self, user: &'a User) -> BoxFuture<'a, Result<(), Error>> {
        ApiClient::disable_retweets(self, user).into_future()
    }
}

/// A listing ran past the configured page limit.
#[derive(Debug, Display, Error)]
#[display("`{endpoint}` returned more than {max_pages} pages")]
pub struct PaginationLimitExceeded {
    pub endpoint: String,
    pub max_pages: u32,
}

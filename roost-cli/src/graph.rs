//! The follow graph as modules see it.

use anyhow::Error;

use futures_util::future::BoxFuture;

use roost_model::{User, UserRef};

/// Read and write access to the follow graph.
///
/// [`ApiClient`](crate::http::ApiClient) is the real implementation; modules
/// only ever hold this trait.
pub trait FollowGraph: Send + Sync {
    /// Lists everyone `user` follows, or the authenticated user if `None`.
    fn get_friends<'a>(&'a self, user: Option<&'a str>) -> BoxFuture<'a, Result<Vec<User>, Error>>;

    /// Follows a user.
    fn follow(&self, user: UserRef) -> BoxFuture<'_, Result<(), Error>>;

    /// Hides a followed user's retweets from the timeline.
    fn disable_retweets<'a>(&'a self, user: &'a User) -> BoxFuture<'a, Result<(), Error>>;
}

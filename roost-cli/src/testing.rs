//! Fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Error;

use futures_util::future::BoxFuture;

use rand::{Rng as _, distr::Alphanumeric};

use roost_model::{User, UserId, UserRef};

use crate::graph::FollowGraph;
use crate::output::Output;

/// A random alphanumeric string.
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A random user with a numeric id and a screen name starting with `prefix`.
pub fn random_user(prefix: &str) -> User {
    let id = rand::rng().random_range(1..1_000_000_000_000u64);

    User {
        id: UserId::from(id),
        screen_name: format!("{}{}", prefix, random_string(12)),
        name: random_string(24),
    }
}

/// An in-memory follow graph.
///
/// `None` is the authenticated user. Listing an unknown user fails.
#[derive(Default)]
pub struct FakeGraph {
    friends: HashMap<Option<String>, Vec<User>>,
    listed: Mutex<Vec<Option<String>>>,
    muted: Mutex<Vec<UserId>>,
    rejected: Vec<UserId>,
}

impl FakeGraph {
    pub fn with_friends(mut self, user: Option<&str>, friends: Vec<User>) -> FakeGraph {
        self.friends.insert(user.map(str::to_owned), friends);
        self
    }

    /// Makes every mutation targeting `user` fail.
    pub fn reject_mutations_for(mut self, user: &User) -> FakeGraph {
        self.rejected.push(user.id.clone());
        self
    }

    /// Every `get_friends` call, in order.
    pub fn listed(&self) -> Vec<Option<String>> {
        self.listed.lock().unwrap().clone()
    }

    pub fn muted(&self) -> Vec<UserId> {
        self.muted.lock().unwrap().clone()
    }
}

impl FollowGraph for FakeGraph {
    fn get_friends<'a>(&'a self, user: Option<&'a str>) -> BoxFuture<'a, Result<Vec<User>, Error>> {
        self.listed.lock().unwrap().push(user.map(str::to_owned));
        let friends = self
            .friends
            .get(&user.map(str::to_owned))
            .cloned()
            .ok_or_else(|| Error::msg(format!("no such user: {:?}", user)));

        Box::pin(async move { friends })
    }

    fn follow(&self, _user: UserRef) -> BoxFuture<'_, Result<(), Error>> {
        Box::pin(async move { Ok(()) })
    }

    fn disable_retweets<'a>(&'a self, user: &'a User) -> BoxFuture<'a, Result<(), Error>> {
        let result = if self.rejected.contains(&user.id) {
            Err(Error::msg(format!("cannot update {}", user.screen_name)))
        } else {
            self.muted.lock().unwrap().push(user.id.clone());
            Ok(())
        };

        Box::pin(async move { result })
    }
}

/// An output sink that keeps everything written to it.
#[derive(Default)]
pub struct CapturedOutput {
    lines: Mutex<Vec<String>>,
}

impl CapturedOutput {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Parses everything written so far as a single JSON document.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.lines().join("\n")).unwrap()
    }
}

impl Output for CapturedOutput {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        self.lines.lock().unwrap().push(line.to_owned());
        Ok(())
    }
}

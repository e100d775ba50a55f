//! Compares who two users follow.

use std::sync::Arc;

use anyhow::Error;

use futures_util::future::BoxFuture;

use roost_model::User;

use super::{
    Module, ModuleParams,
    validate::{Validator as _, ValidatorExt as _, field},
};
use crate::diff::{Diff, diff_by};
use crate::graph::FollowGraph;
use crate::output::{Output, write_json};

/// `following-diff --userA <name> --userB <name>`
///
/// Prints who only `userA` follows, who both follow and who only `userB`
/// follows.
pub struct FollowingDiff {
    graph: Arc<dyn FollowGraph>,
    output: Arc<dyn Output>,
}

impl FollowingDiff {
    pub fn new(graph: Arc<dyn FollowGraph>, output: Arc<dyn Output>) -> FollowingDiff {
        FollowingDiff { graph, output }
    }
}

impl Module for FollowingDiff {
    fn run<'a>(&'a self, params: &'a ModuleParams) -> BoxFuture<'a, Result<(), Error>> {
        Box::pin(async move {
            let user_a = field(params, "userA").string().required().validate()?;
            let user_b = field(params, "userB").string().required().validate()?;

            let diff = get_diff(&*self.graph, &user_a, &user_b).await?;

            write_json(&*self.output, &diff)
        })
    }
}

/// Diffs the friends of two users by user id.
pub async fn get_diff(graph: &dyn FollowGraph, user_a: &str, user_b: &str) -> Result<Diff<User>, Error> {
    let a = graph.get_friends(Some(user_a)).await?;
    let b = graph.get_friends(Some(user_b)).await?;

    Ok(diff_by(&a, &b, |user| user.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    use crate::module::validate::ParamError;
    use crate::testing::{CapturedOutput, FakeGraph, random_user};

    fn params(value: Value) -> ModuleParams {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn prints_three_way_diff() {
        let only_a = random_user("a");
        let both = random_user("both");
        let only_b = random_user("b");

        let graph = Arc::new(
            FakeGraph::default()
                .with_friends(Some("alice"), vec![only_a.clone(), both.clone()])
                .with_friends(Some("bob"), vec![both.clone(), only_b.clone()]),
        );
        let output = Arc::new(CapturedOutput::default());

        FollowingDiff::new(graph.clone(), output.clone())
            .run(&params(json!({ "userA": "alice", "userB": "bob" })))
            .await
            .unwrap();

        assert_eq!(
            graph.listed(),
            [Some("alice".to_owned()), Some("bob".to_owned())]
        );
        assert_eq!(
            output.json(),
            json!({
                "left": [only_a],
                "middle": [both],
                "right": [only_b],
            })
        );
    }

    #[tokio::test]
    async fn requires_both_users() {
        for (raw, missing) in [
            (json!({ "userB": "bob" }), "userA"),
            (json!({ "userA": "alice" }), "userB"),
        ] {
            let graph = Arc::new(FakeGraph::default());
            let output = Arc::new(CapturedOutput::default());

            let err = FollowingDiff::new(graph.clone(), output)
                .run(&params(raw))
                .await
                .unwrap_err();

            assert_eq!(err.downcast_ref::<ParamError>(), Some(&ParamError::Missing(missing)));
            assert!(graph.listed().is_empty());
        }
    }

    #[tokio::test]
    async fn same_user_has_everything_in_middle() {
        let friends = vec![random_user(""), random_user(""), random_user("")];
        let graph = Arc::new(FakeGraph::default().with_friends(Some("alice"), friends.clone()));

        let diff = get_diff(&*graph, "alice", "alice").await.unwrap();

        assert!(diff.left.is_empty());
        assert_eq!(diff.middle, friends);
        assert!(diff.right.is_empty());
    }
}

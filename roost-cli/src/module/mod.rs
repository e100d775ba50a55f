//! Named operations the command line can run.

use std::sync::Arc;

use anyhow::Error;

use derive_more::{Display, Error};

use futures_util::future::BoxFuture;

use serde_json::{Map, Value};

use crate::graph::FollowGraph;
use crate::output::Output;

pub mod following;
pub mod following_diff;
pub mod following_intersection;
pub mod mute_retweets;
pub mod validate;

pub use following::Following;
pub use following_diff::FollowingDiff;
pub use following_intersection::FollowingIntersection;
pub use mute_retweets::MuteRetweets;

/// Raw module parameters.
pub type ModuleParams = Map<String, Value>;

/// Every module name, in the order they are listed in help output.
pub const MODULES: &[&str] = &[
    "following",
    "following-diff",
    "following-intersection",
    "mute-retweets",
];

/// A runnable module.
pub trait Module: Send + Sync {
    /// Runs the module.
    ///
    /// Parameters are validated before anything touches the network.
    fn run<'a>(&'a self, params: &'a ModuleParams) -> BoxFuture<'a, Result<(), Error>>;
}

/// Looks up a module by name.
pub fn module(
    name: &str,
    graph: Arc<dyn FollowGraph>,
    output: Arc<dyn Output>,
) -> Option<Box<dyn Module>> {
    let module: Box<dyn Module> = match name {
        "following" => Box::new(Following::new(graph, output)),
        "following-diff" => Box::new(FollowingDiff::new(graph, output)),
        "following-intersection" => Box::new(FollowingIntersection::new(graph, output)),
        "mute-retweets" => Box::new(MuteRetweets::new(graph, output)),
        _ => return None,
    };

    Some(module)
}

/// Runs a module by name.
pub async fn run_command(
    name: &str,
    graph: Arc<dyn FollowGraph>,
    output: Arc<dyn Output>,
    params: &ModuleParams,
) -> Result<(), Error> {
    let Some(module) = module(name, graph, output) else {
        return Err(NoSuchCommand(name.to_owned()).into());
    };

    tracing::debug!(module = name, "running module");

    module.run(params).await
}

/// The requested module does not exist.
#[derive(Debug, Display, Error)]
#[display("no such command: {_0}")]
pub struct NoSuchCommand(#[error(not(source))] pub String);

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{CapturedOutput, FakeGraph};

    #[test]
    fn every_listed_module_exists() {
        for name in MODULES {
            let graph = Arc::new(FakeGraph::default());
            let output = Arc::new(CapturedOutput::default());

            assert!(module(name, graph, output).is_some(), "{}", name);
        }
    }

    #[tokio::test]
    async fn unknown_module() {
        let graph = Arc::new(FakeGraph::default());
        let output = Arc::new(CapturedOutput::default());

        let err = run_command("followers", graph.clone(), output, &ModuleParams::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "no such command: followers");
        assert!(graph.listed().is_empty());
    }
}

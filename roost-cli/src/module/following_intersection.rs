//! Finds who two users both follow.

use std::sync::Arc;

use anyhow::Error;

use futures_util::future::BoxFuture;

use super::{
    Module, ModuleParams,
    validate::{Validator as _, ValidatorExt as _, field},
};
use crate::diff::intersect_by;
use crate::graph::FollowGraph;
use crate::output::{Output, write_json};

/// `following-intersection --userA <name> --userB <name>`
pub struct FollowingIntersection {
    graph: Arc<dyn FollowGraph>,
    output: Arc<dyn Output>,
}

impl FollowingIntersection {
    pub fn new(graph: Arc<dyn FollowGraph>, output: Arc<dyn Output>) -> FollowingIntersection {
        FollowingIntersection { graph, output }
    }
}

impl Module for FollowingIntersection {
    fn run<'a>(&'a self, params: &'a ModuleParams) -> BoxFuture<'a, Result<(), Error>> {
        Box::pin(async move {
            let user_a = field(params, "userA").string().required().validate()?;
            let user_b = field(params, "userB").string().required().validate()?;

            let a = self.graph.get_friends(Some(user_a.as_str())).await?;
            let b = self.graph.get_friends(Some(user_b.as_str())).await?;

            let common = intersect_by(&a, &b, |user| user.id.clone());
            tracing::debug!(count = common.len(), "intersected friends");

            write_json(&*self.output, &common)
        })
    }
}

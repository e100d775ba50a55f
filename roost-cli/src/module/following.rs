//! Lists who a user follows.

use std::sync::Arc;

use anyhow::Error;

use futures_util::future::BoxFuture;

use super::{
    Module, ModuleParams,
    validate::{Validator as _, ValidatorExt as _, field},
};
use crate::graph::FollowGraph;
use crate::output::{Output, write_json};
use crate::user_list;

/// `following --user <name> [--out <path>]`
///
/// Prints the friends of `user`, or writes them to a user list file at `out`.
pub struct Following {
    graph: Arc<dyn FollowGraph>,
    output: Arc<dyn Output>,
}

impl Following {
    pub fn new(graph: Arc<dyn FollowGraph>, output: Arc<dyn Output>) -> Following {
        Following { graph, output }
    }
}

impl Module for Following {
    fn run<'a>(&'a self, params: &'a ModuleParams) -> BoxFuture<'a, Result<(), Error>> {
        Box::pin(async move {
            let user = field(params, "user").string().required().validate()?;
            let out = field(params, "out").string().validate()?;

            let friends = self.graph.get_friends(Some(user.as_str())).await?;

            match out {
                Some(path) => user_list::dump(path, &friends).await,
                None => write_json(&*self.output, &friends),
            }
        })
    }
}

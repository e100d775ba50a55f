//! Hides retweets from everyone the authenticated user follows.

use std::sync::Arc;

use anyhow::Error;

use futures_util::future::BoxFuture;

use super::{Module, ModuleParams};
use crate::graph::FollowGraph;
use crate::output::Output;

/// `mute-retweets`
pub struct MuteRetweets {
    graph: Arc<dyn FollowGraph>,
    output: Arc<dyn Output>,
}

impl MuteRetweets {
    pub fn new(graph: Arc<dyn FollowGraph>, output: Arc<dyn Output>) -> MuteRetweets {
        MuteRetweets { graph, output }
    }
}

impl Module for MuteRetweets {
    fn run<'a>(&'a self, _params: &'a ModuleParams) -> BoxFuture<'a, Result<(), Error>> {
        Box::pin(async move {
            let friends = self.graph.get_friends(None).await?;

            for friend in &friends {
                self.graph.disable_retweets(friend).await?;

                tracing::info!(user_id = %friend.id, screen_name = %friend.screen_name, "disabled retweets");
                self.output
                    .write_line(&format!("Disabling retweets for user {}", friend.screen_name))?;
            }

            Ok(())
        })
    }
}

//! Follow graph queries and bulk operations.

pub mod cli;
pub mod config;
pub mod diff;
pub mod graph;
pub mod http;
pub mod module;
pub mod output;
pub mod user_list;

#[cfg(test)]
mod testing;

//! Roost command-line interface.

use std::path::PathBuf;

use clap::Parser;

use serde_json::Value;

use crate::module::ModuleParams;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// The module to run: following, following-diff, following-intersection
    /// or mute-retweets.
    pub module: String,
    /// Module parameters, as `--key value` pairs or bare `--flag`s.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,
}

/// Turns raw `--key value` tokens into module parameters.
///
/// A key not followed by a value is `true`. Tokens that are neither keys nor
/// values are ignored. A repeated key keeps its last value.
pub fn parse_params(tokens: &[String]) -> ModuleParams {
    let mut params = ModuleParams::new();
    let mut tokens = tokens.iter().peekable();

    while let Some(token) = tokens.next() {
        let Some(key) = token.strip_prefix("--").filter(|key| !key.is_empty()) else {
            continue;
        };

        let value = match tokens.next_if(|next| !next.starts_with("--")) {
            Some(value) => Value::String(value.to_owned()),
            None => Value::Bool(true),
        };

        params.insert(key.to_owned(), value);
    }

    params
}

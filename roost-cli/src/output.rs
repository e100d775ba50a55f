//! Where module results go.

use std::io::{self, Write as _};

use anyhow::Error;

use serde::Serialize;

/// An output sink.
pub trait Output: Send + Sync {
    /// Writes one chunk of output, followed by a newline.
    fn write_line(&self, line: &str) -> Result<(), Error>;
}

/// Writes to the process's standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl Output for Stdout {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush().map_err(From::from)
    }
}

/// Writes a value as pretty-printed JSON.
pub fn write_json<T>(output: &dyn Output, value: &T) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    output.write_line(&serde_json::to_string_pretty(value)?)
}

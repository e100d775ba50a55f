//! User list persistence.
//!
//! See [`roost_model::user_list`] for the format itself.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Error};

use roost_model::{User, user_list};

/// Writes `users` to a user list file at `path`.
///
/// The list is written next to `path` first and moved into place once
/// complete, so readers never observe a half-written file.
pub async fn dump(path: impl AsRef<Path>, users: &[User]) -> Result<(), Error> {
    let path = path.as_ref();
    let data = user_list::encode(users)?;

    let staging = staging_path(path);
    let written = match tokio::fs::write(&staging, data).await {
        Ok(()) => tokio::fs::rename(&staging, path)
            .await
            .with_context(|| format!("failed to write `{}`", path.display())),
        Err(err) => {
            Err(Error::from(err).context(format!("failed to write `{}`", staging.display())))
        }
    };

    if let Err(err) = written {
        // staging file may be missing or partial
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            tracing::debug!(path = %staging.display(), %cleanup, "staging file not removed");
        }

        return Err(err);
    }

    tracing::debug!(path = %path.display(), count = users.len(), "dumped user list");

    Ok(())
}

/// Reads a user list file.
pub async fn load(path: impl AsRef<Path>) -> Result<Vec<User>, Error> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    user_list::decode(&raw).map_err(Error::from)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("user-list"));
    name.push(".tmp");
    path.with_file_name(name)
}

//! Infrastructure layer for external integrations.
//!
//! Implements the port traits defined in [`crate::domain::ports`].
//!
//! # Modules
//!
//! - [`email`] - EmailJS REST sender
//! - [`github`] - GitHub statistics over HTTP
//! - [`terminal`] - Terminal page surface used by the CLI

pub mod email;
pub mod github;
pub mod terminal;

use url::Url;

/// `base` with a trailing slash, so relative joins append below its path
/// instead of replacing the last segment.
pub(crate) fn base_directory(base: &Url) -> Url {
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let path = format!("{}/", dir.path());
        dir.set_path(&path);
    }
    dir
}

//! Strict environment configuration and fixed layout constants.
//!
//! Every variable listed here is required at the workflow step that reads it;
//! absence aborts the run ([`ConfigError::MissingEnv`]). Lookups deliberately
//! happen late, at the step that needs the value, so that a missing publish
//! credential fails the run during the publish step rather than up front.

use std::env;

use crate::error::ConfigError;

/// Name of the hash marker file at the package repository root.
pub const HASH_MARKER_FILE: &str = "hash.txt";

/// Resource directory for icon assets, relative to the package repository root.
pub const RESOURCE_DIR: &str = "src/Resources";

/// Subdirectory of the upstream clone that holds the icon files.
pub const UPSTREAM_ICONS_DIR: &str = "icons";

/// Extension of the icon files that get synchronized.
pub const ICON_EXTENSION: &str = "svg";

/// Commit message used when the hash marker changes.
pub const COMMIT_MESSAGE: &str = "Updates hash for new version";

/// Version string used when packing the library.
pub const BUILD_VERSION: &str = "BUILD_VERSION";

/// Registry publish credential.
pub const NUGET_TOKEN: &str = "NUGET__TOKEN";

/// Commit author name.
pub const GIT_NAME: &str = "GIT__NAME";

/// Commit author email.
pub const GIT_EMAIL: &str = "GIT__EMAIL";

/// Push username.
pub const GH_USERNAME: &str = "GH__USERNAME";

/// Push token.
pub const GH_TOKEN: &str = "GH__TOKEN";

/// Read a required environment variable.
///
/// Unset and empty values are both treated as fatal misconfiguration.
pub fn var_strict(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}

/// Version string for the packed artifact.
pub fn build_version() -> Result<String, ConfigError> {
    var_strict(BUILD_VERSION)
}

/// API key for the package registry.
pub fn nuget_token() -> Result<String, ConfigError> {
    var_strict(NUGET_TOKEN)
}

/// Commit author identity: `(name, email)`.
pub fn commit_author() -> Result<(String, String), ConfigError> {
    Ok((var_strict(GIT_NAME)?, var_strict(GIT_EMAIL)?))
}

/// Push credentials: `(username, token)`.
pub fn push_credentials() -> Result<(String, String), ConfigError> {
    Ok((var_strict(GH_USERNAME)?, var_strict(GH_TOKEN)?))
}

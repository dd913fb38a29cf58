//! Bootstrap file model for the `apply` command.
//!
//! A TOML file describing everything to materialize in one pass: an optional
//! `[cluster]` section and any number of `[[client]]` tables.
//!
//! ```toml
//! [cluster]
//! monitors = "10.0.0.1:6789,10.0.0.2:6789"
//!
//! [[client]]
//! user = "volumes"
//! key = "AQB..."
//! path = "/volumes/v1"
//! pool = "cephfs_data"
//! ```

use serde::Deserialize;

#[derive(Clone, Default, Deserialize)]
pub struct BootstrapFile {
    #[serde(default)]
    pub cluster: Option<ClusterSection>,
    #[serde(default, rename = "client")]
    pub clients: Vec<ClientSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSection {
    /// Comma/space-joined monitor host:port list.
    pub monitors: String,
}

// No Debug derive: `key` must not end up in error output.
#[derive(Clone, Deserialize)]
pub struct ClientSection {
    pub user: String,
    pub key: String,
    /// Filesystem path the restricted keyring is scoped to.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    /// Emit an unrestricted keyring instead of a scoped one.
    #[serde(default)]
    pub full_caps: bool,
    /// Also write the bare `.secret` file for this client.
    #[serde(default = "default_true")]
    pub secret_file: bool,
}

fn default_true() -> bool {
    true
}

//! Centralized constants for paths, filename patterns, and permissions.

/// Default directory Ceph client tooling reads configuration from.
pub const DEFAULT_CONFIG_ROOT: &str = "/etc/ceph";

/// Environment variable overriding the config root.
pub const ROOT_ENV_VAR: &str = "CEPH_BOOTSTRAP_ROOT";

/// Fixed name of the cluster configuration file.
pub const CONF_FILE_NAME: &str = "ceph.conf";

/// Permission mode for the config root directory.
pub const CONFIG_DIR_MODE: u32 = 0o755;

/// Permission mode for ceph.conf.
pub const CONF_FILE_MODE: u32 = 0o640;

/// Permission mode for keyring files.
pub const KEYRING_FILE_MODE: u32 = 0o600;

/// Permission mode for secret files.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Keyring filename for a client identity.
pub fn keyring_file_name(user_id: &str) -> String {
    format!("ceph.client.{}.keyring", user_id)
}

/// Secret filename for a client identity.
pub fn secret_file_name(user_id: &str) -> String {
    format!("ceph.client.{}.secret", user_id)
}

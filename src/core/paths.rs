//! Config root resolution and fixed file locations.

use crate::constants;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CephPaths {
    pub root: PathBuf,
}

impl CephPaths {
    /// Resolve the config root from an explicit override or the fixed
    /// default. The CLI maps `CEPH_BOOTSTRAP_ROOT` onto the override before
    /// this runs, so the env var is consulted exactly once.
    pub fn resolve(root_arg: Option<PathBuf>) -> Self {
        match root_arg {
            Some(root) => Self::from_root(root),
            None => Self::from_root(PathBuf::from(constants::DEFAULT_CONFIG_ROOT)),
        }
    }

    pub fn from_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Whether this points at the system-wide `/etc/ceph` root.
    pub fn is_system_root(&self) -> bool {
        self.root == Path::new(constants::DEFAULT_CONFIG_ROOT)
    }

    /// Absolute path of the cluster config file. Pure join, no I/O.
    pub fn conf_path(&self) -> PathBuf {
        self.root.join(constants::CONF_FILE_NAME)
    }

    /// Absolute path of a client's keyring file. Pure join, no I/O.
    pub fn keyring_path(&self, user_id: &str) -> PathBuf {
        self.root.join(constants::keyring_file_name(user_id))
    }

    /// Absolute path of a client's secret file. Pure join, no I/O.
    pub fn secret_path(&self, user_id: &str) -> PathBuf {
        self.root.join(constants::secret_file_name(user_id))
    }
}

impl std::fmt::Display for CephPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ceph-config@{}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_join_root() {
        let paths = CephPaths::from_root(PathBuf::from("/test"));
        assert_eq!(paths.conf_path(), PathBuf::from("/test/ceph.conf"));
        assert_eq!(
            paths.keyring_path("bob"),
            PathBuf::from("/test/ceph.client.bob.keyring")
        );
        assert_eq!(
            paths.secret_path("bob"),
            PathBuf::from("/test/ceph.client.bob.secret")
        );
    }

    #[test]
    fn test_resolve_prefers_arg() {
        let paths = CephPaths::resolve(Some(PathBuf::from("/tmp/ceph-test")));
        assert_eq!(paths.root, PathBuf::from("/tmp/ceph-test"));
    }

    #[test]
    fn test_resolve_defaults_to_etc_ceph() {
        let paths = CephPaths::resolve(None);
        assert_eq!(paths.root, PathBuf::from("/etc/ceph"));
    }

    #[test]
    fn test_is_system_root() {
        assert!(CephPaths::from_root(PathBuf::from("/etc/ceph")).is_system_root());
        assert!(!CephPaths::from_root(PathBuf::from("/tmp/x")).is_system_root());
    }
}

//! Data records rendered into the bootstrap files.
//!
//! Each record is a transient, caller-owned value handed to a single
//! materialize call; nothing is retained afterwards. Records holding key
//! material are wiped on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Cluster config: the monitor list substituted into `ceph.conf`.
#[derive(Debug, Clone)]
pub struct ConfData {
    /// Comma/space-joined monitor `host:port` list, passed through verbatim.
    pub monitors: String,
}

/// Restricted-capability keyring for one client identity.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyringData {
    pub user_id: String,
    pub key: String,
    /// Filesystem path the mds capability is scoped to.
    pub root_path: String,
    /// Optional osd pool restriction; emitted only when non-empty.
    pub pool: Option<String>,
    /// Optional osd namespace restriction; emitted only when non-empty.
    pub namespace: Option<String>,
}

/// Unrestricted keyring: all capabilities, no path/pool scoping.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FullCapsKeyringData {
    pub user_id: String,
    pub key: String,
}

/// Bare secret file: raw key material for low-level mount tooling.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretData {
    pub user_id: String,
    pub key: String,
}

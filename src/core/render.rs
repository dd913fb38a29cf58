//! Template rendering for the bootstrap files (pure functions).
//!
//! Each renderer is a plain string builder over a fixed template; identical
//! input produces byte-identical output.

use crate::models::record::{ConfData, FullCapsKeyringData, KeyringData, SecretData};

/// Render `ceph.conf`: a `[global]` section with the monitor list, cephx
/// auth requirements, and the ceph-fuse group workaround.
pub fn conf(data: &ConfData) -> String {
    format!(
        "[global]\n\
         mon_host = {}\n\
         auth_cluster_required = cephx\n\
         auth_service_required = cephx\n\
         auth_client_required = cephx\n\
         \n\
         # Workaround for http://tracker.ceph.com/issues/23446\n\
         fuse_set_user_groups = false\n",
        data.monitors
    )
}

/// Render a restricted keyring: mds scoped to the root path, read-only mon,
/// osd optionally restricted to a pool and/or namespace.
pub fn keyring(data: &KeyringData) -> String {
    let mut osd = String::from("allow rw");
    if let Some(pool) = non_empty(&data.pool) {
        osd.push_str(&format!(" pool={}", pool));
    }
    if let Some(namespace) = non_empty(&data.namespace) {
        osd.push_str(&format!(" namespace={}", namespace));
    }

    let mut out = String::new();
    out.push_str(&format!("[client.{}]\n", data.user_id));
    out.push_str(&format!("key = {}\n", data.key));
    out.push_str(&format!("caps mds = \"allow rw path={}\"\n", data.root_path));
    out.push_str("caps mon = \"allow r\"\n");
    out.push_str(&format!("caps osd = \"{}\"\n", osd));
    out
}

/// Render an unrestricted keyring.
pub fn full_caps_keyring(data: &FullCapsKeyringData) -> String {
    format!(
        "[client.{}]\n\
         key = {}\n\
         caps mds = \"allow\"\n\
         caps mon = \"allow *\"\n\
         caps osd = \"allow *\"\n",
        data.user_id, data.key
    )
}

/// Render a secret file: the raw key and a trailing newline, nothing else.
pub fn secret(data: &SecretData) -> String {
    format!("{}\n", data.key)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

//! Materialize a whole bootstrap description in one pass.

use crate::cli::{self, CliContext};
use crate::core::materialize::{self, Outcome};
use crate::core::paths::CephPaths;
use crate::models::bootstrap::BootstrapFile;
use crate::models::record::{ConfData, FullCapsKeyringData, KeyringData, SecretData};
use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Bootstrap TOML file ([cluster] section plus [[client]] tables)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyStats {
    pub created: usize,
    pub skipped: usize,
}

impl ApplyStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::AlreadyExists => self.skipped += 1,
        }
    }
}

pub fn run(ctx: &CliContext, args: ApplyArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("read bootstrap file {}", args.file.display()))?;
    let file: BootstrapFile = toml::from_str(&raw)
        .with_context(|| format!("parse bootstrap file {}", args.file.display()))?;

    let stats = apply(&ctx.paths, &file)?;
    println!(
        "{}: {} file(s) written, {} already present",
        ctx.paths, stats.created, stats.skipped
    );
    Ok(())
}

/// Apply a parsed bootstrap file against a config root.
pub fn apply(paths: &CephPaths, file: &BootstrapFile) -> Result<ApplyStats> {
    let mut stats = ApplyStats::default();

    if let Some(cluster) = &file.cluster {
        let data = ConfData {
            monitors: cluster.monitors.clone(),
        };
        stats.record(materialize::write_conf(paths, &data)?);
    }

    for client in &file.clients {
        // Same identity rules the keyring/secret subcommands enforce; the
        // user lands in a filename, so traversal must not reach the writers.
        cli::parse_user_id(&client.user)
            .map_err(|e| anyhow!("client '{}': {}", client.user, e))?;

        let outcome = if client.full_caps {
            if client.path.is_some() || client.pool.is_some() || client.namespace.is_some() {
                bail!(
                    "client '{}': full_caps conflicts with path/pool/namespace",
                    client.user
                );
            }
            let data = FullCapsKeyringData {
                user_id: client.user.clone(),
                key: client.key.clone(),
            };
            materialize::write_full_caps_keyring(paths, &data)?
        } else {
            let Some(root_path) = client.path.clone() else {
                bail!("client '{}': path is required unless full_caps is set", client.user);
            };
            let data = KeyringData {
                user_id: client.user.clone(),
                key: client.key.clone(),
                root_path,
                pool: client.pool.clone(),
                namespace: client.namespace.clone(),
            };
            materialize::write_keyring(paths, &data)?
        };
        stats.record(outcome);

        if client.secret_file {
            let data = SecretData {
                user_id: client.user.clone(),
                key: client.key.clone(),
            };
            stats.record(materialize::write_secret(paths, &data)?);
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(s: &str) -> BootstrapFile {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn test_apply_writes_all_files() {
        let tmp = TempDir::new().unwrap();
        let paths = CephPaths::from_root(tmp.path().to_path_buf());
        let file = parse(
            r#"
            [cluster]
            monitors = "10.0.0.1:6789"

            [[client]]
            user = "volumes"
            key = "AQA=="
            path = "/volumes/v1"
            "#,
        );

        let stats = apply(&paths, &file).unwrap();
        assert_eq!(stats, ApplyStats { created: 3, skipped: 0 });
        assert!(paths.conf_path().is_file());
        assert!(paths.keyring_path("volumes").is_file());
        assert!(paths.secret_path("volumes").is_file());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let paths = CephPaths::from_root(tmp.path().to_path_buf());
        let file = parse(
            r#"
            [[client]]
            user = "admin"
            key = "AQA=="
            full_caps = true
            "#,
        );

        let first = apply(&paths, &file).unwrap();
        let second = apply(&paths, &file).unwrap();
        assert_eq!(first, ApplyStats { created: 2, skipped: 0 });
        assert_eq!(second, ApplyStats { created: 0, skipped: 2 });
    }

    #[test]
    fn test_apply_requires_path_for_restricted_client() {
        let paths = CephPaths::from_root(PathBuf::from("/nonexistent"));
        let file = parse(
            r#"
            [[client]]
            user = "admin"
            key = "AQA=="
            "#,
        );
        assert!(apply(&paths, &file).is_err());
    }

    #[test]
    fn test_apply_rejects_traversal_user() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("root");
        let paths = CephPaths::from_root(root.clone());
        let file = parse(
            r#"
            [[client]]
            user = "d/../../../outside"
            key = "AQA=="
            path = "/volumes/v1"
            "#,
        );

        assert!(apply(&paths, &file).is_err());
        // Nothing may be written, inside the root or above it.
        assert!(!root.exists());
        assert!(!tmp.path().join("outside.keyring").exists());
    }

    #[test]
    fn test_apply_rejects_scoped_full_caps() {
        let paths = CephPaths::from_root(PathBuf::from("/nonexistent"));
        let file = parse(
            r#"
            [[client]]
            user = "admin"
            key = "AQA=="
            full_caps = true
            pool = "data"
            "#,
        );
        assert!(apply(&paths, &file).is_err());
    }
}

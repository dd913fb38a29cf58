//! CLI routing and command dispatch.

use crate::constants;
use crate::core::paths::CephPaths;
use crate::util::privilege;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use zeroize::Zeroizing;

pub mod apply;
pub mod conf;
pub mod keyring;
pub mod paths;
pub mod secret;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub paths: CephPaths,
}

#[derive(Parser, Debug)]
#[command(
    name = "ceph-bootstrap",
    version,
    about = "Materialize Ceph client config and credential files"
)]
pub struct Cli {
    /// Config root directory (default: /etc/ceph)
    #[arg(long, global = true, value_name = "PATH", env = constants::ROOT_ENV_VAR)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let paths = CephPaths::resolve(self.root);

        // Only the system-wide root needs privileges; a redirected root
        // (tests, staging) does not.
        if self.command.requires_root() && paths.is_system_root() {
            privilege::require_root(self.command.name())?;
        }

        let ctx = CliContext { paths };

        match self.command {
            Commands::Conf(args) => conf::run(&ctx, args),
            Commands::Keyring(args) => keyring::run(&ctx, args),
            Commands::Secret(args) => secret::run(&ctx, args),
            Commands::Apply(args) => apply::run(&ctx, args),
            Commands::Paths(args) => paths::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the cluster config file (ceph.conf)
    Conf(conf::ConfArgs),
    /// Write a client keyring (restricted or full-caps)
    Keyring(keyring::KeyringArgs),
    /// Write a client secret file (bare key material)
    Secret(secret::SecretArgs),
    /// Materialize everything described by a bootstrap TOML file
    Apply(apply::ApplyArgs),
    /// Print resolved file paths (read-only)
    Paths(paths::PathsArgs),
}

impl Commands {
    /// Whether this command writes under the config root.
    pub fn requires_root(&self) -> bool {
        !matches!(self, Commands::Paths(_))
    }

    /// Command name for error messages.
    pub fn name(&self) -> &str {
        match self {
            Commands::Conf(_) => "conf",
            Commands::Keyring(_) => "keyring",
            Commands::Secret(_) => "secret",
            Commands::Apply(_) => "apply",
            Commands::Paths(_) => "paths",
        }
    }
}

/// Validate a client identity used in filenames.
pub(crate) fn parse_user_id(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("user id cannot be empty".into());
    }
    if s.contains("..") {
        return Err("path traversal not allowed".into());
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
    {
        return Err("only [a-zA-Z0-9._-] allowed".into());
    }
    Ok(s.to_string())
}

/// Obtain key material from `--key` or stdin, never echoing it back.
pub(crate) fn read_key(
    key: Option<String>,
    from_stdin: bool,
    user: &str,
) -> Result<Zeroizing<String>> {
    if from_stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        let key = Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string());
        if key.is_empty() {
            bail!("empty key on stdin for client '{}'", user);
        }
        return Ok(key);
    }
    match key {
        Some(k) => Ok(Zeroizing::new(k)),
        None => bail!("provide --key or --key-from-stdin for client '{}'", user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_valid() {
        assert_eq!(parse_user_id("admin").unwrap(), "admin");
        assert_eq!(parse_user_id("k8s.volumes-1").unwrap(), "k8s.volumes-1");
    }

    #[test]
    fn test_parse_user_id_rejects_traversal() {
        assert!(parse_user_id("../etc").is_err());
        assert!(parse_user_id("a/b").is_err());
        assert!(parse_user_id("").is_err());
    }

    #[test]
    fn test_read_key_requires_source() {
        assert!(read_key(None, false, "admin").is_err());
        assert_eq!(*read_key(Some("AQA==".into()), false, "admin").unwrap(), "AQA==");
    }
}

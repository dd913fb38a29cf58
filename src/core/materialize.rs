//! Render-and-write-once materialization of the bootstrap files.
//!
//! Every writer follows the same routine: ensure the config root exists,
//! create the target file exclusively with its fixed mode, stream the
//! rendered body into it. A file that already exists is left untouched and
//! reported as [`Outcome::AlreadyExists`].

use crate::constants;
use crate::core::paths::CephPaths;
use crate::core::render;
use crate::models::record::{ConfData, FullCapsKeyringData, KeyringData, SecretData};
use crate::util::fs as bootstrap_fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a write call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    /// The file was already present and was not touched.
    AlreadyExists,
}

pub fn write_conf(paths: &CephPaths, data: &ConfData) -> Result<Outcome, MaterializeError> {
    write_once(
        paths,
        constants::CONF_FILE_NAME,
        constants::CONF_FILE_MODE,
        &render::conf(data),
    )
}

pub fn write_keyring(paths: &CephPaths, data: &KeyringData) -> Result<Outcome, MaterializeError> {
    write_once(
        paths,
        &constants::keyring_file_name(&data.user_id),
        constants::KEYRING_FILE_MODE,
        &render::keyring(data),
    )
}

pub fn write_full_caps_keyring(
    paths: &CephPaths,
    data: &FullCapsKeyringData,
) -> Result<Outcome, MaterializeError> {
    write_once(
        paths,
        &constants::keyring_file_name(&data.user_id),
        constants::KEYRING_FILE_MODE,
        &render::full_caps_keyring(data),
    )
}

pub fn write_secret(paths: &CephPaths, data: &SecretData) -> Result<Outcome, MaterializeError> {
    write_once(
        paths,
        &constants::secret_file_name(&data.user_id),
        constants::SECRET_FILE_MODE,
        &render::secret(data),
    )
}

/// Shared create-exclusive write. Exclusive creation serializes concurrent
/// writers on the same path; the loser sees `AlreadyExists` and no-ops.
fn write_once(
    paths: &CephPaths,
    file_name: &str,
    mode: u32,
    content: &str,
) -> Result<Outcome, MaterializeError> {
    bootstrap_fs::ensure_dir(&paths.root, constants::CONFIG_DIR_MODE).map_err(|source| {
        MaterializeError::CreateDir {
            path: paths.root.clone(),
            source,
        }
    })?;

    let path = paths.root.join(file_name);
    let mut file = match bootstrap_fs::create_exclusive(&path, mode) {
        Ok(Some(file)) => file,
        Ok(None) => return Ok(Outcome::AlreadyExists),
        Err(source) => return Err(MaterializeError::CreateFile { path, source }),
    };

    // A failed write leaves the partial file in place; there is no cleanup.
    file.write_all(content.as_bytes())
        .map_err(|source| MaterializeError::WriteFile { path, source })?;

    Ok(Outcome::Created)
}

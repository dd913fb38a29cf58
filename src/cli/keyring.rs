use crate::cli::{self, CliContext};
use crate::core::materialize::{self, Outcome};
use crate::models::record::{FullCapsKeyringData, KeyringData};
use anyhow::{bail, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct KeyringArgs {
    /// Client identity (the <user> in ceph.client.<user>.keyring)
    #[arg(value_parser = cli::parse_user_id)]
    pub user: String,

    /// Key material (prefer --key-from-stdin to keep it out of process lists)
    #[arg(long, conflicts_with = "key_from_stdin")]
    pub key: Option<String>,

    /// Read key material from stdin
    #[arg(long)]
    pub key_from_stdin: bool,

    /// Filesystem path the mds capability is scoped to
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Restrict the osd capability to this pool
    #[arg(long)]
    pub pool: Option<String>,

    /// Restrict the osd capability to this namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Emit an unrestricted keyring (conflicts with scoping flags)
    #[arg(long, conflicts_with_all = ["path", "pool", "namespace"])]
    pub full_caps: bool,
}

pub fn run(ctx: &CliContext, args: KeyringArgs) -> Result<()> {
    let key = cli::read_key(args.key, args.key_from_stdin, &args.user)?;
    let path = ctx.paths.keyring_path(&args.user);

    let outcome = if args.full_caps {
        let data = FullCapsKeyringData {
            user_id: args.user,
            key: key.to_string(),
        };
        materialize::write_full_caps_keyring(&ctx.paths, &data)?
    } else {
        let Some(root_path) = args.path else {
            bail!("--path is required unless --full-caps is set");
        };
        let data = KeyringData {
            user_id: args.user,
            key: key.to_string(),
            root_path,
            pool: args.pool,
            namespace: args.namespace,
        };
        materialize::write_keyring(&ctx.paths, &data)?
    };

    match outcome {
        Outcome::Created => println!("wrote {}", path.display()),
        Outcome::AlreadyExists => println!("{} already exists, left untouched", path.display()),
    }
    Ok(())
}

use crate::cli::{self, CliContext};
use crate::core::materialize::{self, Outcome};
use crate::models::record::SecretData;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct SecretArgs {
    /// Client identity (the <user> in ceph.client.<user>.secret)
    #[arg(value_parser = cli::parse_user_id)]
    pub user: String,

    /// Key material (prefer --key-from-stdin to keep it out of process lists)
    #[arg(long, conflicts_with = "key_from_stdin")]
    pub key: Option<String>,

    /// Read key material from stdin
    #[arg(long)]
    pub key_from_stdin: bool,
}

pub fn run(ctx: &CliContext, args: SecretArgs) -> Result<()> {
    let key = cli::read_key(args.key, args.key_from_stdin, &args.user)?;
    let path = ctx.paths.secret_path(&args.user);

    let data = SecretData {
        user_id: args.user,
        key: key.to_string(),
    };
    match materialize::write_secret(&ctx.paths, &data)? {
        Outcome::Created => println!("wrote {}", path.display()),
        Outcome::AlreadyExists => println!("{} already exists, left untouched", path.display()),
    }
    Ok(())
}

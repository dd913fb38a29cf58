use crate::cli::{self, CliContext};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Also print the keyring/secret paths for this client identity
    #[arg(value_parser = cli::parse_user_id)]
    pub user: Option<String>,
}

pub fn run(ctx: &CliContext, args: PathsArgs) -> Result<()> {
    println!("conf:    {}", ctx.paths.conf_path().display());
    if let Some(user) = args.user {
        println!("keyring: {}", ctx.paths.keyring_path(&user).display());
        println!("secret:  {}", ctx.paths.secret_path(&user).display());
    }
    Ok(())
}

use crate::cli::CliContext;
use crate::core::materialize::{self, Outcome};
use crate::models::record::ConfData;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct ConfArgs {
    /// Comma-separated monitor host:port list (substituted verbatim)
    #[arg(long, value_name = "CSV")]
    pub monitors: String,
}

pub fn run(ctx: &CliContext, args: ConfArgs) -> Result<()> {
    let data = ConfData {
        monitors: args.monitors,
    };
    let path = ctx.paths.conf_path();
    match materialize::write_conf(&ctx.paths, &data)? {
        Outcome::Created => println!("wrote {}", path.display()),
        Outcome::AlreadyExists => println!("{} already exists, left untouched", path.display()),
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = ceph_bootstrap::cli::Cli::parse();
    cli.run()
}

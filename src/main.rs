use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(name = "repair-bay")]
#[command(version, about = "Damaged-system diagnostic game server")]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Port to serve on (defaults to $PORT, then 3000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (defaults to all interfaces)
    #[arg(long)]
    pub host: Option<IpAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // A missing .env is fine; PORT and RUST_LOG may come from the real environment.
    dotenvy::dotenv().ok();
    repair_bay::logging::init_tracing(cli.verbose);

    cmd::cmd_serve(cli.host, cli.port).await?;

    Ok(())
}

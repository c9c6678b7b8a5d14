// CLI module for tarjama

use clap::Parser;

/// tarjama - English/Arabic machine translation inference service
#[derive(Parser, Debug)]
#[command(name = "tarjama", version, about, long_about = None)]
pub struct Args {
    /// Bind address, overriding the configured host
    #[arg(long, env = "TARJAMA_SERVER_HOST")]
    pub host: Option<String>,

    /// Port, overriding the configured port
    #[arg(long, env = "TARJAMA_SERVER_PORT")]
    pub port: Option<u16>,

    /// Load both translation models at startup instead of on first request
    #[arg(long)]
    pub preload: bool,
}

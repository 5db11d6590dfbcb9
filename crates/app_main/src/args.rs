use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "image_renamer")]
#[command(about = "Batch-rename the images of a folder to a numbered sequence", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: per-user config directory)
    #[arg(long, env = "IMAGE_RENAMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(long)]
    pub port: Option<u16>,

    /// Do not open the page in a browser
    #[arg(long)]
    pub no_browser: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub save_config: bool,
}

use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "linkscan")]
#[clap(about = "AI-powered URL threat scanner", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

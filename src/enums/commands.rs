use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file and API key
    Validate,
    /// Scan one or more URLs, one at a time
    Scan {
        #[clap(required = true)]
        urls: Vec<String>,
        /// Print the result as JSON instead of a report
        #[clap(short, long)]
        json: bool,
        /// Skip the minimum display delay
        #[clap(long)]
        no_delay: bool,
        /// Give up on the model after this many seconds (0 disables)
        #[clap(short, long)]
        timeout: Option<u64>,
        /// Override the configured model
        #[clap(short, long)]
        model: Option<String>,
    },
}

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for mistakes
    Validate,
    /// Classify a captured image (file path or data URI)
    Classify {
        image: String,
        #[clap(long)]
        json: bool,
        #[clap(long)]
        model_url: Option<String>,
        #[clap(long)]
        timeout: Option<u64>,
    },
    /// Print the active keyword table
    Rules,
    /// Ask the screening assistant a question
    Ask {
        question: String,
        #[clap(short, long)]
        context: Option<String>,
    },
}

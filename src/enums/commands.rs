use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
    /// Run the HTTP API
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Ask the agent about one contributor and print the report
    Analyze {
        #[clap(short, long)]
        project: String,
        #[clap(short, long)]
        author: String,
        #[clap(short, long)]
        owner: Option<String>,
    },
    /// Normalize a saved agent reply (file, or stdin when omitted) into a report
    Parse {
        file: Option<PathBuf>,
    },
}

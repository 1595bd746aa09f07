mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "md2pdf",
    version,
    about = "Pick a Markdown file from a directory tree and convert it to PDF through Gotenberg"
)]
pub(crate) struct Cli {
    /// Directory to scan for Markdown files (defaults to current directory)
    #[arg(long)]
    pub(crate) cwd: Option<PathBuf>,

    /// File-name suffix that marks a candidate
    #[arg(long, default_value = mdpdf_engine::DEFAULT_SUFFIX)]
    pub(crate) suffix: String,

    /// Log file (defaults to md2pdf.log next to the config file)
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match platform::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

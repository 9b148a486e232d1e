//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::extract::{extract_sample_data, ExtractOptions};
use crate::metadata::read_metadata_file;

/// Revio Metadata Converter - Extract sample names from run metadata.
#[derive(Parser)]
#[command(name = "revio-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Revio run metadata from an XML file to sample names.
    ///
    /// By default prints one comma-joined line of sample names per
    /// collection. With --resultsFolder each sample is paired with its
    /// results folder; with --fileNames the demultiplexed HiFi BAM paths are
    /// generated instead.
    Convert {
        /// Input XML metadata file
        #[arg(short, long)]
        input: PathBuf,

        /// Include the results folder in the output
        #[arg(long = "resultsFolder")]
        results_folder: bool,

        /// Generate filenames based on the XML metadata
        #[arg(long = "fileNames")]
        file_names: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            results_folder,
            file_names,
        } => convert_command(
            &input,
            ExtractOptions {
                include_results_folder: results_folder,
                include_file_names: file_names,
            },
        ),
    }
}

/// Execute the convert command.
fn convert_command(input: &Path, options: ExtractOptions) -> Result<()> {
    let data = read_metadata_file(input)?;
    let output = extract_sample_data(&data, options)?;

    println!("{}", output.join("\n"));

    Ok(())
}

pub mod classify;
pub mod match_title;
pub mod rules;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Classify product titles against keyword rules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Classify product titles and write an annotated workbook")]
    Classify {
        #[arg(help = "Input workbook (.xlsx)")]
        workbook: PathBuf,

        #[arg(long, short = 'o', help = "Output workbook path")]
        output: Option<PathBuf>,

        #[arg(long, help = "Product sheet name")]
        product_sheet: Option<String>,

        #[arg(long, help = "Rules sheet name")]
        rules_sheet: Option<String>,

        #[arg(long, help = "Overwrite an existing output file without asking")]
        force: bool,

        #[arg(long, help = "Print the run summary as JSON")]
        json: bool,
    },

    #[command(about = "Show the compiled rule set")]
    Rules {
        #[arg(help = "Input workbook (.xlsx)")]
        workbook: PathBuf,

        #[arg(long, help = "Rules sheet name")]
        rules_sheet: Option<String>,
    },

    #[command(about = "Evaluate a single title against the rules")]
    Match {
        #[arg(help = "Input workbook (.xlsx)")]
        workbook: PathBuf,

        #[arg(help = "Title to evaluate")]
        title: String,

        #[arg(long, help = "Rules sheet name")]
        rules_sheet: Option<String>,
    },
}

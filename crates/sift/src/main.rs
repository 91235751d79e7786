mod cli;

use clap::Parser;
use sift_lib::{Config, Result};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = Config::load(cli.config.clone())?;

    match cli.command {
        cli::Commands::Classify {
            workbook,
            output,
            product_sheet,
            rules_sheet,
            force,
            json,
        } => cli::classify::handle_classify_command(
            &workbook,
            output,
            product_sheet,
            rules_sheet,
            force,
            json,
            config,
            cli.verbose,
        ),

        cli::Commands::Rules {
            workbook,
            rules_sheet,
        } => cli::rules::handle_rules_command(&workbook, rules_sheet, config),

        cli::Commands::Match {
            workbook,
            title,
            rules_sheet,
        } => cli::match_title::handle_match_command(&workbook, &title, rules_sheet, config),
    }
}

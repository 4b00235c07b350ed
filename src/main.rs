use anyhow::Result;
use clap::Parser;

use widgetconv::cli::logging::{init_logging, LogConfig};
use widgetconv::cli::{execute, handle_error, Args, CliUtils, Commands};

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    init_logging(&LogConfig::from_flags(args.verbose, args.quiet));

    match execute(&args) {
        Ok(output) => {
            println!("{}", output);
            let command = match args.command {
                Commands::Clean(_) => "Cleaned",
                Commands::Render(_) => "Rendered",
                Commands::Record { .. } => "Cleaned record",
            };
            CliUtils::show_success(command, args.quiet);
            Ok(())
        }
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use std::process;

use pdfstitch::cli::Cli;
use pdfstitch::logging;

fn main() {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    };

    logging::init(config.verbosity);

    if let Err(err) = pdfstitch::run(&config, std::io::stdout().lock()) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

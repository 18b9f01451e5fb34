use clap::Parser;
use vocab_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = vocab_cli::logging::init_logging(cli.verbose) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if let Err(error) = vocab_cli::run(cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

#![forbid(unsafe_code)]

//! mocscan — CLI entry point.

use clap::Parser;

use mocscan::core::errors::EXIT_FAILURE;

mod cli_app;

fn main() {
    let args = match cli_app::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and go to stdout.
            let code = if err.use_stderr() { EXIT_FAILURE } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = cli_app::run(&args) {
        eprintln!("mocscan: {e}");
        std::process::exit(e.exit_code());
    }
}

use clap::Parser;
use flight_distance::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments; exit code 2 is reserved for an empty result
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // --help and --version print to stdout and succeed
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            process::exit(code);
        }
    };

    match commands::run(args) {
        Ok(_summary) => {
            // Success - summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with the error's code
            eprintln!("Error: {:#}", error);
            process::exit(error.exit_code());
        }
    }
}

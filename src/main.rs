use clap::Parser;
use std::process::ExitCode;

use toolkit_manager::cli::Cli;
use toolkit_manager::utils::report_error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        // An interrupt is a normal way to leave the menu.
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;
use xavier::{cli, infra::logging};

fn main() -> ExitCode {
    logging::init_logging();

    // Parse command line arguments and process the command
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

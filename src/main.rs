//! `td` - Todo list kept in a JSON file.

use std::process::ExitCode;

use todo_rust::format::exit_codes;
use todo_rust::run;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

use std::process::ExitCode;

fn main() -> ExitCode {
    match mobius_strip::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

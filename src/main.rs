use std::process::ExitCode;

fn main() -> ExitCode {
    htdocs_keeper_lib::run()
}

use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = copyforge_cli::cli().get_matches();
    let json_logs = matches
        .get_one::<String>("log-format")
        .is_some_and(|f| f == "json");
    copyforge_cli::init_tracing(json_logs);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    match copyforge_cli::run(&matches, &mut stdout, &mut stderr) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

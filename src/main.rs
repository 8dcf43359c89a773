//! `loopcmd` 바이너리 진입점.

use loopcmd::interface::cli::{AppComposition, Cli, CliAction, run_loop};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.loop_config_usecase().inspect() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Loop(options) => match run_loop(&composition, options) {
            Ok(status) => std::process::exit(status.code()),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
    }
}

use std::io;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use personctl::cli::args::Args;
use personctl::cli::commands::{self, Outcome};
use personctl::config::{Config, Settings};
use personctl::core::transport::HttpTransport;
use personctl::{constants, logging, ClientError};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(report) => {
            eprintln!("Error: {report:?}");
            let code = report
                .downcast_ref::<ClientError>()
                .map_or(constants::EXIT_CONFIG, ClientError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> color_eyre::Result<Outcome> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()?;

    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(config, args.overrides())?;

    let subscriber = logging::file_subscriber(&settings.log_file, &settings.log_level)
        .wrap_err_with(|| format!("Failed to open log file {}", settings.log_file.display()))?;

    let fields = args.request_fields();
    let outcome = tracing::subscriber::with_default(subscriber, || {
        let transport = HttpTransport::new(settings.timeout)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        commands::execute(
            &transport,
            &settings.url,
            args.method,
            &fields,
            args.raw,
            &mut out,
        )
    })?;

    Ok(outcome)
}

//! docli CLI Binary
//!
//! Command-line interface for the DigitalOcean REST API.

use clap::Parser;
use docli::cli::{map_error, Cli, RunContext};
use docli::config::{ConfigLoader, DocliConfig};
use docli::display::RenderOptions;
use docli::logging::init_logging;
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Output mode from flags alone, for errors raised before config resolves
    let fallback = RenderOptions::new(
        cli.json,
        !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal(),
    );

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e, &fallback),
    };
    let options = config.render_options();

    if let Err(e) = init_logging(&config.logging) {
        fail(&e, &options);
    }

    info!("docli starting");

    let context = match RunContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing client: {}", e);
            fail(&e, &options);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => fail(&e.into(), &options),
    };

    match runtime.block_on(context.execute(&cli.command)) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            fail(&e, &options);
        }
    }
}

fn fail(e: &docli::error::ApiError, options: &RenderOptions) -> ! {
    eprintln!("{}", map_error(e, options));
    process::exit(1);
}

/// Resolve configuration from files and environment, then apply CLI flags.
/// Precedence: CLI flags override environment override config file override defaults.
fn build_config(cli: &Cli) -> Result<DocliConfig, docli::error::ApiError> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, cli);
    apply_terminal_color(&mut config, std::io::stdout().is_terminal());

    config.validate().map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        docli::error::ApiError::ConfigError(format!(
            "Configuration validation failed:\n{}",
            error_msgs.join("\n")
        ))
    })?;
    Ok(config)
}

fn apply_cli_overrides(config: &mut DocliConfig, cli: &Cli) {
    if cli.json {
        config.output.json = true;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(ref token) = cli.token {
        config.api.token = Some(token.clone());
    }

    let logging = &mut config.logging;
    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }
    logging.color = logging.color && config.output.color;
}

/// Colors only make sense on a terminal; piped output stays plain.
fn apply_terminal_color(config: &mut DocliConfig, stdout_is_terminal: bool) {
    if !stdout_is_terminal {
        config.output.color = false;
    }
}

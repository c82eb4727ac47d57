use anyhow::Context;
use emitter::constants::{MISSING_INPUT_EXIT_CODE, OUTPUT_FILE};
use emitter::{ConfigEmitter, EmitError, SystemEnvironment};
use repoclient_config::{logger, settings};

fn main() -> anyhow::Result<()> {
    let app_config = settings::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load logging settings: {e}");
        eprintln!("Continuing with default logging.");
        settings::AppConfig::default()
    });
    logger::setup_logger(app_config.logging()).context("Failed to initialize logging")?;

    let emitter = ConfigEmitter::new(SystemEnvironment);
    match emitter.emit_to(OUTPUT_FILE) {
        Ok(_) => Ok(()),
        Err(EmitError::MissingInput(e)) => {
            log::debug!("Aborting before writing {OUTPUT_FILE}: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(MISSING_INPUT_EXIT_CODE);
        }
        Err(e) => Err(e.into()),
    }
}

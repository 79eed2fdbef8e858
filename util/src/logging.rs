use env_logger::LogBuilder;
use error_chain::ChainedError;
use errors::*;
use std::env;

// Per-dimension record and group counts are logged at debug.
const DEFAULT_LOG_CONFIG: &str = "info";
const VERBOSE_LOG_CONFIG: &str = "debug";

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_config(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_CONFIG
    } else {
        DEFAULT_LOG_CONFIG
    }
}

/// Initialises `env_logger`. `RUST_LOG` always takes precedence over `verbose`.
pub fn init_logger(verbose: bool) -> Result<()> {
    let builder = &mut LogBuilder::new();
    let builder = {
        match env::var("RUST_LOG") {
            Ok(log_config) => builder.parse(&log_config),
            Err(_) => builder.parse(default_log_config(verbose)),
        }
    };

    builder.init().chain_err(|| "Failed to build env_logger")?;
    Ok(())
}

/// Logs `err` followed by every error in its chain and the backtrace, if one was captured.
pub fn output_error<E: ChainedError>(err: &E) {
    error!("{}", err);

    for e in err.iter().skip(1) {
        error!("caused by: {}", e);
    }

    if let Some(backtrace) = err.backtrace() {
        error!("backtrace: {:?}", backtrace);
    }
}

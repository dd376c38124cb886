//! Emit command
//!
//! Usage: logwrapper emit [--config FILE] [OVERRIDES] [--at LEVEL] [--json] <MESSAGE>

use clap::{Args, ValueEnum};
use logwrapper_core::errors::LogWrapperError;
use logwrapper_core::{Config, LogWrapper, LoggerContext};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// TOML file with logger settings; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum level name (trace, debug, info, warn, error, fatal, panic, disabled)
    #[arg(long)]
    pub level: Option<String>,

    /// Enable the console sink
    #[arg(long, conflicts_with = "no_console")]
    pub console: bool,

    /// Disable the console sink even if the config enables it
    #[arg(long)]
    pub no_console: bool,

    /// Enable the file sink with this file name
    #[arg(long)]
    pub file_name: Option<String>,

    /// Directory of the file sink
    #[arg(long)]
    pub file_path: Option<String>,

    /// strftime pattern for the timestamp
    #[arg(long)]
    pub time_format: Option<String>,

    /// Severity of the emitted record
    #[arg(long, value_enum, default_value_t = Severity::Info)]
    pub at: Severity,

    /// Parse MESSAGE as JSON and emit it through the structured variant
    #[arg(long)]
    pub json: bool,

    /// Message to emit
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Severity {
    Print,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;

    let ctx = LoggerContext::new();
    ctx.configure(&config)?;
    let log = ctx.wrapper();

    if args.json {
        let value: serde_json::Value = serde_json::from_str(&args.message)?;
        emit_json(&log, args.at, &value);
    } else {
        emit_text(&log, args.at, &args.message);
    }

    Ok(())
}

/// Load the config file, if any, then apply flag overrides
fn resolve_config(args: &EmitArgs) -> Result<Config, LogWrapperError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    if let Some(level) = &args.level {
        config.level = level.clone();
    }
    if args.console {
        config.console = true;
    }
    if args.no_console {
        config.console = false;
    }
    if let Some(file_name) = &args.file_name {
        config.file = true;
        config.file_name = file_name.clone();
    }
    if let Some(file_path) = &args.file_path {
        config.file_path = file_path.clone();
    }
    if let Some(time_format) = &args.time_format {
        config.time_field_format = time_format.clone();
    }

    Ok(config)
}

fn load_config(path: &Path) -> Result<Config, LogWrapperError> {
    let text = std::fs::read_to_string(path).map_err(|e| LogWrapperError::InvalidConfig {
        reason: format!("cannot read {}: {}", path.display(), e),
    })?;
    toml::from_str(&text).map_err(|e| LogWrapperError::InvalidConfig {
        reason: format!("cannot parse {}: {}", path.display(), e),
    })
}

fn emit_text(log: &LogWrapper, at: Severity, message: &str) {
    match at {
        Severity::Print => log.print(message),
        Severity::Debug => log.debug(message),
        Severity::Info => log.info(message),
        Severity::Warn => log.warn(message),
        Severity::Error => log.error(message),
        Severity::Fatal => log.fatal(message),
        Severity::Panic => log.panic(message),
    }
}

fn emit_json(log: &LogWrapper, at: Severity, value: &serde_json::Value) {
    match at {
        Severity::Print => log.printj(value),
        Severity::Debug => log.debugj(value),
        Severity::Info => log.infoj(value),
        Severity::Warn => log.warnj(value),
        Severity::Error => log.errorj(value),
        Severity::Fatal => log.fatalj(value),
        Severity::Panic => log.panicj(value),
    }
}

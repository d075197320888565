//! Structured logging configuration for HyprMotion

use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration for HyprMotion
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: LogLevel,
    /// Log format (json, pretty, compact)
    pub format: LogFormat,
    /// Output destination (stderr, file)
    pub output: LogOutput,
    /// File path for file output
    pub file_path: Option<String>,
    /// Include source file and line numbers
    pub include_source: bool,
    /// Trace every line the parser looks at
    pub parser_tracing: bool,
}

/// Log levels supported by HyprMotion
#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log output formats
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable format for development
    Pretty,
    /// Single-line format
    Compact,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Log output destinations. Stdout is reserved for command output.
#[derive(Debug, Clone, PartialEq)]
pub enum LogOutput {
    Stderr,
    File,
}

impl FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stderr" => Ok(LogOutput::Stderr),
            "file" => Ok(LogOutput::File),
            _ => Err(format!("Invalid log output: {}", s)),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            output: LogOutput::Stderr,
            file_path: None,
            include_source: false,
            parser_tracing: false,
        }
    }
}

impl LogConfig {
    /// Verbose configuration used by `--verbose`
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            output: LogOutput::Stderr,
            file_path: None,
            include_source: true,
            parser_tracing: true,
        }
    }

    /// Apply `HYPRMOTION_LOG_*` environment variables on top of `self`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("HYPRMOTION_LOG_LEVEL") {
            if let Ok(parsed_level) = LogLevel::from_str(&level) {
                self.level = parsed_level;
            }
        }

        if let Ok(format) = std::env::var("HYPRMOTION_LOG_FORMAT") {
            if let Ok(parsed_format) = LogFormat::from_str(&format) {
                self.format = parsed_format;
            }
        }

        if let Ok(output) = std::env::var("HYPRMOTION_LOG_OUTPUT") {
            if let Ok(parsed_output) = LogOutput::from_str(&output) {
                self.output = parsed_output;
            }
        }

        if let Ok(file_path) = std::env::var("HYPRMOTION_LOG_FILE") {
            self.file_path = Some(file_path);
        }

        if let Ok(include_source) = std::env::var("HYPRMOTION_LOG_SOURCE") {
            self.include_source = include_source.to_lowercase() == "true";
        }

        self
    }
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Initialize the global tracing subscriber with the given configuration
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = create_filter(config)?;

    let layer = match (&config.output, &config.file_path) {
        (LogOutput::Stderr, _) => create_stderr_layer(config),
        (LogOutput::File, Some(file_path)) => create_file_layer(config, file_path)?,
        (LogOutput::File, None) => {
            return Err("File path required for file output".into());
        }
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()?;

    info!("Logging initialized with config: {:?}", config);
    Ok(())
}

/// Create an environment filter based on the configuration
fn create_filter(config: &LogConfig) -> Result<EnvFilter, Box<dyn std::error::Error>> {
    let mut filter_str = format!("hyprmotion={}", config.level.as_str());

    if config.parser_tracing {
        filter_str.push_str(",hyprmotion::config::parser=trace");
        filter_str.push_str(",hyprmotion::config::section=trace");
    }

    // Allow environment override
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_str)?,
    };

    Ok(filter)
}

fn create_stderr_layer(config: &LogConfig) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_file(config.include_source)
        .with_line_number(config.include_source);

    match config.format {
        LogFormat::Pretty => Box::new(layer.pretty()),
        LogFormat::Compact => Box::new(layer.compact()),
        LogFormat::Json => Box::new(layer.json()),
    }
}

fn create_file_layer(
    config: &LogConfig,
    file_path: &str,
) -> Result<BoxedLayer, Box<dyn std::error::Error>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)?;

    let layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_file(config.include_source)
        .with_line_number(config.include_source);

    match config.format {
        LogFormat::Pretty => Ok(Box::new(layer.pretty())),
        LogFormat::Compact => Ok(Box::new(layer.compact())),
        LogFormat::Json => Ok(Box::new(layer.json())),
    }
}

/// Performance tracing macro for timing a block
#[macro_export]
macro_rules! trace_performance {
    ($name:expr, $block:block) => {{
        let span = tracing::info_span!("performance", operation = $name);
        let _enter = span.enter();
        let start = std::time::Instant::now();

        let result = $block;

        let duration = start.elapsed();
        tracing::info!(
            operation = $name,
            duration_us = duration.as_micros() as u64,
            "Performance trace"
        );

        result
    }};
}

/// Initialize logging for testing environments
#[cfg(test)]
pub fn init_test_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let config = LogConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
            output: LogOutput::Stderr,
            file_path: None,
            include_source: true,
            parser_tracing: true,
        };

        if let Err(e) = init_logging(&config) {
            eprintln!("Failed to initialize test logging: {}", e);
        }
    });
}

//! Logging setup
//!
//! Parsers and translators only emit `tracing` events: warnings for input
//! they had to skip, debug counts per pass, trace lines for ignored syntax.
//! Binaries decide how those are filtered by calling [`init_logging`] once;
//! events are written to stderr so stdout stays free for generated output.
//!
//! ```rust,no_run
//! use umlbridge::core::logging::init_logging;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Java visitor details, everything else at warn
//! init_logging(Some("warn,umlbridge::plugins::java=trace"), Some("pretty"))?;
//! # Ok(())
//! # }
//! ```
//!
//! Without arguments the level comes from `UMLBRIDGE_LOG_LEVEL`, then
//! `RUST_LOG`, then `info`; the format from `UMLBRIDGE_LOG_FORMAT`, then
//! `compact`. On wasm32 events go to the browser console unfiltered.

use std::fmt;
use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

/// Environment variable holding a level or filter directive
pub const LEVEL_ENV: &str = "UMLBRIDGE_LOG_LEVEL";

/// Environment variable holding a [`LogFormat`] name
pub const FORMAT_ENV: &str = "UMLBRIDGE_LOG_FORMAT";

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event, no target or source location
    #[default]
    Compact,
    /// Multi-line with targets, source locations and span activity
    Pretty,
    /// Newline-delimited JSON objects
    Json,
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }

    /// Explicit name, else [`FORMAT_ENV`], else compact
    fn resolve(explicit: Option<&str>) -> Result<Self, String> {
        match explicit.map(str::to_string).or_else(|| std::env::var(FORMAT_ENV).ok()) {
            Some(name) => name.parse(),
            None => Ok(LogFormat::default()),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .zip([LogFormat::Compact, LogFormat::Pretty, LogFormat::Json])
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, format)| format)
            .ok_or_else(|| {
                format!(
                    "Unknown log format: {} (expected one of {})",
                    s,
                    Self::variants().join(", ")
                )
            })
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install the global subscriber.
///
/// `level` accepts a bare level (`debug`) or any `EnvFilter` directive list.
/// Fails on an unknown format name or when a global subscriber is already
/// installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(tracing_wasm::WASMLayerConfig::default());
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let format = LogFormat::resolve(format).map_err(|e| format!("Invalid log format: {}", e))?;

        Registry::default()
            .with(fmt_layer(format))
            .with(build_filter(level))
            .try_init()?;

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true);

    match format {
        LogFormat::Compact => layer
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .boxed(),
        LogFormat::Pretty => layer
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::ACTIVE)
            .pretty()
            .boxed(),
        LogFormat::Json => layer
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::ACTIVE)
            .json()
            .boxed(),
    }
}

/// Explicit directive, else [`LEVEL_ENV`], else `RUST_LOG`, else `info`.
///
/// Unparseable directives fall back to `info`.
#[cfg(not(target_arch = "wasm32"))]
fn build_filter(level: Option<&str>) -> EnvFilter {
    let directive = level
        .map(str::to_string)
        .or_else(|| std::env::var(LEVEL_ENV).ok());

    match directive {
        Some(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

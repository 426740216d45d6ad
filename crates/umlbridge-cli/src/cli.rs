//! Command-line interface for the umlbridge utility
//!
//! Converts class diagrams to Java stubs or proto3 schemas, and Java source
//! trees back to class diagrams.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use umlbridge::core::logging::init_logging;
use umlbridge::plugins::Pipeline;
use umlbridge::core::TranslateError;
use umlbridge::Structure;

/// umlbridge - Translate between UML class diagrams, Java and Protobuf
#[derive(Parser)]
#[command(name = "umlbridge")]
#[command(about = "Translate PlantUML-style class diagrams to Java or Protobuf, and Java back to UML")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [default: warn]
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Java stubs from a class diagram
    UmlToJava {
        /// Input diagram file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory receiving one `<Name>.java` per entity; prints to stdout when absent
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Generate a proto3 schema from a class diagram
    UmlToProto {
        /// Input diagram file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Value of the `java_package` option
        #[arg(long)]
        package: Option<String>,
    },

    /// Build a class diagram from Java files and directories
    JavaToUml {
        /// Java files or directories searched recursively for `.java` files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize the entities found in a class diagram
    Inspect {
        /// Input diagram file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Dump the whole structure as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
pub struct UmlBridgeApp {
    pipeline: Pipeline,
}

impl UmlBridgeApp {
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(self, cli: Cli) -> Result<()> {
        let env_directive = std::env::var("UMLBRIDGE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok());
        let log_level_str = log_directive(cli.log_level, env_directive);

        let log_format_str = std::env::var("UMLBRIDGE_LOG_FORMAT")
            .unwrap_or_else(|_| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("umlbridge v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::UmlToJava { input, out_dir } => self.uml_to_java_command(input, out_dir, cli.verbose),
            Commands::UmlToProto {
                input,
                output,
                package,
            } => self.uml_to_proto_command(input, output, package),
            Commands::JavaToUml { paths, output } => self.java_to_uml_command(&paths, output, cli.verbose),
            Commands::Inspect { input, json } => self.inspect_command(input, json),
        }
    }

    fn uml_to_java_command(&self, input: Option<PathBuf>, out_dir: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = read_input(input)?;
        let files = self.pipeline.uml_to_java(&content);

        match out_dir {
            Some(dir) => {
                fs::create_dir_all(&dir)
                    .map_err(TranslateError::from)
                    .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;
                for file in &files {
                    let path = dir.join(file.file_name());
                    fs::write(&path, &file.body)
                        .map_err(TranslateError::from)
                        .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
                    debug!(path = %path.display(), "Wrote Java file");
                }
                if verbose {
                    eprintln!("Wrote {} file(s) to {}", files.len(), dir.display());
                }
            }
            None => {
                let listing = files
                    .iter()
                    .map(|file| format!("// {}\n{}", file.file_name(), file.body))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                write_output(None, &listing)?;
            }
        }

        Ok(())
    }

    fn uml_to_proto_command(&self, input: Option<PathBuf>, output: Option<PathBuf>, package: Option<String>) -> Result<()> {
        let content = read_input(input)?;
        let proto = match package {
            Some(package) => Pipeline::new().with_package(package).uml_to_proto(&content)?,
            None => self.pipeline.uml_to_proto(&content)?,
        };
        write_output(output, &proto)
    }

    fn java_to_uml_command(&self, paths: &[PathBuf], output: Option<PathBuf>, verbose: bool) -> Result<()> {
        let sources = collect_java_sources(paths);
        if verbose {
            eprintln!("Found {} Java file(s)", sources.len());
        }

        let uml = self.pipeline.java_to_uml(sources)?;
        write_output(output, &uml)
    }

    fn inspect_command(&self, input: Option<PathBuf>, json: bool) -> Result<()> {
        let content = read_input(input)?;
        let structure = self.pipeline.parse_uml(&content);

        if json {
            println!("{}", serde_json::to_string_pretty(&structure)?);
        } else {
            print!("{}", summarize(&structure));
        }
        Ok(())
    }
}

impl Default for UmlBridgeApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable entity listing
pub fn summarize(structure: &Structure) -> String {
    let mut out = String::new();

    out.push_str(&format!("Classes: {}\n", structure.class_count()));
    for class in structure.classes() {
        out.push_str(&format!(
            "  {} ({} attributes, {} methods)\n",
            class.name,
            class.attributes.len(),
            class.methods.len()
        ));
    }

    out.push_str(&format!("Interfaces: {}\n", structure.interface_count()));
    for interface in structure.interfaces() {
        out.push_str(&format!("  {} ({} methods)\n", interface.name, interface.methods.len()));
    }

    out.push_str(&format!("Enums: {}\n", structure.enum_count()));
    for enumeration in structure.enums() {
        out.push_str(&format!("  {} ({} values)\n", enumeration.name, enumeration.properties.len()));
    }

    out.push_str(&format!("Associations: {}\n", structure.association_count()));
    for association in structure.associations() {
        out.push_str(&format!(
            "  {} {} {}\n",
            association.left_class, association.separator, association.right_class
        ));
    }

    out
}

fn is_java_file(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "java")
}

/// Read every `.java` file under `paths` as `(path, text)` pairs.
///
/// Directories are walked recursively in file-name order. Unreadable entries
/// are reported and skipped.
pub fn collect_java_sources(paths: &[PathBuf]) -> Vec<(String, String)> {
    let mut sources = Vec::new();

    for root in paths {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(path = %root.display(), error = %e, "Cannot read path");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_java_file(entry.path()) {
                continue;
            }

            match fs::read_to_string(entry.path()) {
                Ok(text) => sources.push((entry.path().display().to_string(), text)),
                Err(e) => warn!(path = %entry.path().display(), error = %e, "Cannot read Java file"),
            }
        }
    }

    if sources.is_empty() {
        warn!("0 java files found");
    } else {
        info!(file_count = sources.len(), "Collected Java files");
    }
    sources
}

/// Level directive handed to the subscriber.
///
/// `UMLBRIDGE_LOG_LEVEL`/`RUST_LOG` directives apply first; an explicit
/// `--log-level` is appended so it replaces their default level while their
/// per-target directives still hold. Without either the level is `warn`.
fn log_directive(flag: Option<LogLevel>, env: Option<String>) -> String {
    match (env, flag) {
        (Some(env), Some(level)) => format!("{},{}", env, level.as_str()),
        (Some(env), None) => env,
        (None, Some(level)) => level.as_str().to_string(),
        (None, None) => LogLevel::Warn.as_str().to_string(),
    }
}

/// Read input from file or stdin
pub fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
            .map_err(TranslateError::from)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(TranslateError::from)
                .context("Failed to read standard input")?;
            Ok(content)
        }
    }
}

/// Write output to file or stdout
pub fn write_output(output: Option<PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) if path.to_string_lossy() != "-" => {
            fs::write(&path, content)
                .map_err(TranslateError::from)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
        }
        _ => {
            let mut stdout = io::stdout();
            if content.is_empty() || content.ends_with('\n') {
                write!(stdout, "{}", content)?;
            } else {
                writeln!(stdout, "{}", content)?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

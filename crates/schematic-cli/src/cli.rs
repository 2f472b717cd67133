//! Command-line interface for the schematic utility
//!
//! Reads prose from a file or stdin, extracts diagrams from it and writes
//! Mermaid markup or the augmented document.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use schematic::core::logging::init_logging;
use schematic::{
    Category, ContentAnalyzer, DiagramBundle, DiagramKind, DiagramRenderer, DocumentComposer,
    DocumentOptions,
};

/// Schematic - Extract diagrams from technical prose
#[derive(Parser)]
#[command(name = "schematic")]
#[command(about = "Extract architecture, workflow, state and class diagrams from technical prose")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
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
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
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
    /// List the diagram categories found in a document
    Analyze {
        /// Input file containing prose (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the extracted descriptions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one diagram kind extracted from a document
    Render {
        /// Diagram kind (component|flowchart|state|class)
        #[arg(short, long)]
        kind: String,

        /// Input file containing prose (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the Mermaid block (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append diagram sections to a document
    Embed {
        /// Input file containing prose (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave the document unchanged when nothing is recognized
        #[arg(long)]
        no_fallback: bool,

        /// Markdown heading level for diagram sections
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=6))]
        heading_level: u8,
    },

    /// Show supported diagram kinds
    Kinds {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct KindInfo {
    name: &'static str,
    declaration: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct KindList {
    supported_kinds: Vec<KindInfo>,
    total: usize,
}

/// Main CLI application
pub struct SchematicApp {
    analyzer: ContentAnalyzer,
    renderer: DiagramRenderer,
}

impl SchematicApp {
    pub fn new() -> Self {
        Self {
            analyzer: ContentAnalyzer::new(),
            renderer: DiagramRenderer::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var("SCHEMATIC_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format = std::env::var("SCHEMATIC_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Schematic v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Analyze { input, json } => {
                let content = self.read_input(input, cli.verbose)?;
                let report = self.analyze(&content, json)?;
                self.write_output(None, &report)
            }
            Commands::Render {
                kind,
                input,
                output,
            } => {
                let content = self.read_input(input, cli.verbose)?;
                let block = self.render(&content, &kind)?;
                self.write_output(output, &block)
            }
            Commands::Embed {
                input,
                output,
                no_fallback,
                heading_level,
            } => {
                let content = self.read_input(input, cli.verbose)?;
                let options = DocumentOptions::default()
                    .with_fallback(!no_fallback)
                    .with_heading_level(heading_level);
                let document = self.embed(&content, options);
                self.write_output(output, &document)
            }
            Commands::Kinds { json } => {
                let listing = self.kinds(json)?;
                self.write_output(None, &listing)
            }
        }
    }

    /// Summarize the categories found in `content`
    pub fn analyze(&self, content: &str, json: bool) -> Result<String> {
        let bundle = self.analyzer.extract(content);
        if json {
            return serde_json::to_string_pretty(&bundle).context("Failed to serialize bundle");
        }
        Ok(Self::summary(&bundle))
    }

    fn summary(bundle: &DiagramBundle) -> String {
        let mut report = String::new();
        if bundle.is_fallback() {
            report.push_str("No structure found, showing example diagrams\n");
        }
        report.push_str(&format!("Diagram categories: {}\n", bundle.len()));
        for (category, _) in bundle.iter() {
            report.push_str(&format!("  {:<14}({})\n", category.as_str(), category.kind()));
        }
        report
    }

    /// Extract `content` and render the category drawn as `kind`
    pub fn render(&self, content: &str, kind: &str) -> Result<String> {
        let kind: DiagramKind = kind.parse()?;
        let category = Category::ALL
            .into_iter()
            .find(|category| category.kind() == kind)
            .ok_or_else(|| anyhow!("No category is drawn as {}", kind))?;

        let bundle = self.analyzer.extract(content);
        let description = bundle
            .get(category)
            .ok_or_else(|| anyhow!("No {} diagram found in input", category.title()))?;

        debug!(%kind, %category, "Rendering category");
        Ok(self.renderer.render(kind.as_str(), description)?)
    }

    /// Append diagram sections for `content` to itself
    pub fn embed(&self, content: &str, options: DocumentOptions) -> String {
        let bundle = self.analyzer.extract(content);
        info!(
            categories = bundle.len(),
            fallback = bundle.is_fallback(),
            "Embedding diagrams"
        );
        DocumentComposer::new(options).compose(content, &bundle)
    }

    /// List supported kinds
    pub fn kinds(&self, json: bool) -> Result<String> {
        if json {
            let list = KindList {
                supported_kinds: DiagramKind::ALL
                    .iter()
                    .map(|kind| KindInfo {
                        name: kind.as_str(),
                        declaration: kind.declaration(),
                        description: kind.description(),
                    })
                    .collect(),
                total: DiagramKind::ALL.len(),
            };
            return serde_json::to_string_pretty(&list).context("Failed to serialize kinds");
        }

        let mut listing = String::from("Supported diagram kinds:\n");
        for kind in DiagramKind::ALL {
            listing.push_str(&format!("  {:<10} - {}\n", kind.as_str(), kind.description()));
        }
        listing.push_str(&format!("\nTotal: {} diagram kinds supported\n", DiagramKind::ALL.len()));
        Ok(listing)
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>, verbose: bool) -> Result<String> {
        let content = match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?,
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read stdin")?;
                content
            }
        };

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        Ok(content)
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content)
                    .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                if !content.is_empty() && !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for SchematicApp {
    fn default() -> Self {
        Self::new()
    }
}

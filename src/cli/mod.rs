//! Command-line interface for HyprMotion
//!
//! Reads a Hyprland configuration, runs it through the parser and prints the
//! extracted beziers and animations as text or JSON.

use crate::config::{
    parse_source, source_for_path, OutputFormat, ParseError, ParseReport, Settings,
};
use crate::models::{AnimationEntry, AnimationGroup, AnimationState, BaseStyle, Bezier};
use crate::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{debug, info};

/// HyprMotion command-line interface
#[derive(Parser, Debug)]
#[command(name = "hyprmotion")]
#[command(about = "Inspect and validate Hyprland animation and bezier declarations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct HyprMotionCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file path
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable JSON output for machine-readable results
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a config and show its beziers and animations
    Parse {
        /// Config file path, `-` for stdin (defaults to the Hyprland config)
        file: Option<PathBuf>,

        /// Skip malformed lines instead of failing
        #[arg(short, long)]
        lenient: bool,
    },

    /// List declared bezier curves
    Beziers {
        /// Config file path, `-` for stdin
        file: Option<PathBuf>,
    },

    /// List declared animations
    Animations {
        /// Config file path, `-` for stdin
        file: Option<PathBuf>,

        /// Only show animations of one style group
        /// (windows, layers, workspaces, borderangle, no-style)
        #[arg(short, long)]
        group: Option<AnimationGroup>,
    },

    /// Validate a config, failing on the first malformed line
    Check {
        /// Config file path, `-` for stdin
        file: Option<PathBuf>,
    },

    /// Show which styles each animation accepts
    Styles,
}

/// CLI command executor
pub struct HyprMotionCliExecutor {
    settings: Settings,
    output: OutputFormat,
}

impl HyprMotionCliExecutor {
    /// Create a new CLI executor; `json` overrides the settings' output format
    pub fn new(settings: Settings, json: bool) -> Self {
        let output = if json {
            OutputFormat::Json
        } else {
            settings.output
        };

        Self { settings, output }
    }

    /// Execute a CLI command
    pub fn execute(&self, command: Commands) -> Result<()> {
        let output = self.render(command)?;
        println!("{}", output);
        Ok(())
    }

    /// Run a command and return what it would print
    pub fn render(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Parse { file, lenient } => {
                let report = self.load(file, lenient || self.settings.lenient)?;
                Ok(self.render_report(&report))
            }
            Commands::Beziers { file } => {
                let report = self.load(file, self.settings.lenient)?;
                Ok(self.render_beziers(&report.result.beziers))
            }
            Commands::Animations { file, group } => {
                let report = self.load(file, self.settings.lenient)?;
                let animations: Vec<_> = report
                    .result
                    .animations
                    .into_iter()
                    .filter(|entry| group.map_or(true, |group| entry.name.group() == group))
                    .collect();
                Ok(self.render_animations(&animations))
            }
            Commands::Check { file } => {
                let report = self.load(file, false)?;
                Ok(self.render_check(&report))
            }
            Commands::Styles => Ok(self.render_styles()),
        }
    }

    fn load(&self, file: Option<PathBuf>, lenient: bool) -> Result<ParseReport> {
        let path = file.unwrap_or_else(|| self.settings.hyprland_config.clone());
        let source = source_for_path(&path);
        info!("Reading configuration from {}", source.describe());
        parse_source(source.as_ref(), lenient)
    }

    fn render_report(&self, report: &ParseReport) -> String {
        match self.output {
            OutputFormat::Json => pretty_json(json!({
                "beziers": report.result.beziers,
                "animations": report.result.animations,
                "errors": report.errors.iter().map(error_json).collect::<Vec<_>>(),
            })),
            OutputFormat::Text => {
                let mut out = String::new();
                out.push_str(&self.render_beziers(&report.result.beziers));
                out.push('\n');
                out.push_str(&self.render_animations(&report.result.animations));

                if !report.errors.is_empty() {
                    let _ = write!(out, "\nSkipped lines ({}):", report.errors.len());
                    for error in &report.errors {
                        let _ = write!(out, "\n  {}", error);
                    }
                }
                out
            }
        }
    }

    fn render_beziers(&self, beziers: &[Bezier]) -> String {
        if self.output == OutputFormat::Json {
            return pretty_json(json!(beziers));
        }

        let mut out = format!("Beziers ({}):", beziers.len());
        for bezier in beziers {
            let _ = write!(
                out,
                "\n  {:<20} {} {} {} {}",
                bezier.name, bezier.x0, bezier.y0, bezier.x1, bezier.y1
            );
        }
        out
    }

    fn render_animations(&self, animations: &[AnimationEntry]) -> String {
        if self.output == OutputFormat::Json {
            return pretty_json(json!(animations));
        }

        let mut out = format!("Animations ({}):", animations.len());
        for entry in animations {
            match &entry.state {
                AnimationState::Disabled => {
                    let _ = write!(out, "\n  {:<20} off", entry.name);
                }
                AnimationState::Enabled { speed, curve, style } => {
                    let _ = write!(
                        out,
                        "\n  {:<20} on  {:>4}ds  {:<16}",
                        entry.name,
                        speed,
                        curve.name()
                    );
                    if let Some(style) = style {
                        let _ = write!(out, " {}", style);
                    }
                }
            }
        }
        out
    }

    fn render_check(&self, report: &ParseReport) -> String {
        let beziers = report.result.beziers.len();
        let animations = report.result.animations.len();
        debug!(beziers, animations, "Configuration is valid");

        match self.output {
            OutputFormat::Json => pretty_json(json!({
                "valid": true,
                "beziers": beziers,
                "animations": animations,
            })),
            OutputFormat::Text => format!("OK: {} beziers, {} animations", beziers, animations),
        }
    }

    fn render_styles(&self) -> String {
        if self.output == OutputFormat::Json {
            let groups: Vec<_> = AnimationGroup::ALL
                .iter()
                .map(|group| {
                    json!({
                        "group": group,
                        "animations": group.members().map(|name| name.as_str()).collect::<Vec<_>>(),
                        "styles": group.allowed_styles(),
                    })
                })
                .collect();
            return pretty_json(json!(groups));
        }

        let mut out = String::from("Styles by animation group:");
        for group in AnimationGroup::ALL {
            let members: Vec<_> = group.members().map(|name| name.as_str()).collect();
            let styles: Vec<_> = group
                .allowed_styles()
                .iter()
                .map(|style| style_usage(*style))
                .collect();

            let _ = write!(out, "\n\n  {}: {}", group, members.join(", "));
            if styles.is_empty() {
                out.push_str("\n    (no styles)");
            } else {
                let _ = write!(out, "\n    {}", styles.join(", "));
            }
        }
        out
    }
}

fn style_usage(style: BaseStyle) -> String {
    match style {
        _ if !style.takes_parameter() => style.to_string(),
        BaseStyle::Slide => "slide [left|right|top|bottom]".to_string(),
        other => format!("{} [0-100%]", other),
    }
}

fn error_json(error: &ParseError) -> serde_json::Value {
    json!({
        "line_number": error.line_number,
        "line": error.line,
        "message": error.kind.to_string(),
    })
}

fn pretty_json(value: serde_json::Value) -> String {
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

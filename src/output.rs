//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::ImportReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `copy-properties` run
#[derive(Debug, Serialize)]
pub struct CopyResult {
    /// Per-BOM counts
    pub report: ImportReport,
    /// The project property map after the import
    pub properties: BTreeMap<String, String>,
    /// Where the properties were written, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

/// Properties declared by a single BOM
#[derive(Debug, Serialize)]
pub struct BomListing {
    /// `groupId:artifactId:version`
    pub bom: String,
    /// Number of properties declared before filtering
    pub declared: usize,
    /// Properties that passed the filter
    pub properties: BTreeMap<String, String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl CopyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.report.is_empty() {
            println!("No BOMs configured.");
            return;
        }

        for bom in &self.report.boms {
            println!(
                "  {} {} ({} properties with prefix '{}')",
                "imported".green(),
                bom.bom,
                bom.count,
                bom.prefix
            );
        }
        println!();

        for (key, value) in &self.properties {
            println!("{}={value}", key.bold());
        }

        if let Some(path) = &self.output_file {
            println!("\nWrote {} properties to {path}", self.properties.len());
        }
    }
}

impl BomListing {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "{} ({} of {} properties)\n",
            self.bom.bold(),
            self.properties.len(),
            self.declared
        );
        if self.properties.is_empty() {
            println!("No properties match.");
            return;
        }
        for (key, value) in &self.properties {
            println!("  {key} = {value}");
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

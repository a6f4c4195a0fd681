//! CLI for the mimegen registry code generator.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::codegen;
use crate::fetch::{self, DEFAULT_REGISTRY_URL};
use crate::registry::MimeMap;

/// Top-level CLI. A bare invocation fetches the Apache registry and prints
/// the generated Rust table to stdout.
#[derive(Debug, Parser)]
#[command(name = "mimegen")]
#[command(about = "Generate a static extension-to-MIME-type table as Rust source", long_about = None)]
pub struct Cli {
    /// Registry URL to fetch.
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY_URL, conflicts_with = "input")]
    pub url: String,

    /// Read registry text from a local file instead of fetching.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the generated fragment to a file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Fetch (or read), parse, render, write. One pass, no state.
    pub fn run(&self) -> Result<()> {
        let text = match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                tracing::info!("fetching registry from {}", self.url);
                fetch::fetch(&self.url)?
            }
        };

        let map = MimeMap::parse(&text);
        tracing::info!("parsed {} extension mappings", map.len());

        let fragment = codegen::render(&map);
        match &self.output {
            Some(path) => fs::write(path, &fragment)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => print!("{}", fragment),
        }
        Ok(())
    }
}

//! CLI module for Touchline
//!
//! Provides the `serve` subcommand that runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// Touchline - football team and championship management API
#[derive(Parser)]
#[command(name = "touchline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}

//! Command line interface.
//!
//! Without a subcommand the binary runs the Discord bot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "packdrop", version, about = "Daily and weekly pack drops for Discord")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Write every pack resource to a JSON file and exit
    ExportResources {
        /// Destination file
        path: PathBuf,
    },
}

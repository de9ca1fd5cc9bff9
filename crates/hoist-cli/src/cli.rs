//! CLI argument definitions for hoist.
//!
//! Uses `clap` derive macros to define the full command surface. Each
//! command corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hoist",
    version,
    about = "Upload build artifacts to a Maven-style repository manager",
    long_about = "hoist stages files against a repository manager and commits them under an \
                  artifact coordinate (repository, group, artifact, version, packaging), \
                  with optional classifiers and project-descriptor handling."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Named server from ~/.hoist/config.toml
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Server base URL (takes precedence over --server and config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Username for the server
    #[arg(long, global = true, env = "HOIST_USERNAME")]
    pub username: Option<String>,

    /// Password or token for the server
    #[arg(long, global = true, env = "HOIST_PASSWORD")]
    pub password: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload one or more files under a single artifact coordinate
    Upload {
        /// Files to upload, each as PATH or PATH:CLASSIFIER (e.g. lib.jar:sources)
        files: Vec<String>,
        /// Target repository id on the server
        #[arg(short, long)]
        repository: Option<String>,
        /// Group id (e.g. com.example)
        #[arg(short, long)]
        group: Option<String>,
        /// Artifact id
        #[arg(short, long)]
        artifact: Option<String>,
        /// Artifact version
        #[arg(long)]
        version: Option<String>,
        /// Packaging, also the stored file extension
        #[arg(short, long, default_value = "jar")]
        packaging: String,
        /// Project descriptor file (POM) to upload alongside the payloads
        #[arg(long)]
        descriptor: Option<String>,
        /// Ask the server to generate a project descriptor
        #[arg(long)]
        generate_descriptor: bool,
    },

    /// List the repositories you may upload into
    Repos,

    /// Drop any files left in the server-side staging area
    Clear,
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

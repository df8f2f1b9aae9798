use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// themegen — generates the JavaScript module that applies a theme's global CSS.
#[derive(Parser, Debug)]
#[command(name = "themegen", version, about)]
pub struct Args {
    /// Log level override (debug, info, warn, error or an EnvFilter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate `<name>.js` for one theme folder, or for every configured theme.
    Generate(GenerateArgs),
    /// Show the stylesheets and identifiers found in a theme folder.
    List(ListArgs),
    /// Generate every configured theme, then regenerate when stylesheets change.
    Watch(WatchArgs),
    /// Write a documented default `themegen.toml`.
    Init {
        /// Where to create the file.
        #[arg(default_value = "themegen.toml")]
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Theme folder. Omit to generate every theme in the config.
    #[arg(requires = "name")]
    pub folder: Option<PathBuf>,

    /// Theme name used in the guard flag and the default output name.
    pub name: Option<String>,

    /// Output file (default: `<folder>/<name>.js`).
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the module instead of writing it.
    #[arg(long)]
    pub stdout: bool,

    /// Fail when a stylesheet name cannot be imported cleanly.
    #[arg(long)]
    pub strict: bool,

    /// Config file path override.
    #[arg(long, conflicts_with = "folder")]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Theme folder to scan.
    pub folder: PathBuf,

    /// Theme name (default: the folder's name).
    pub name: Option<String>,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct WatchArgs {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail when a stylesheet name cannot be imported cleanly.
    #[arg(long)]
    pub strict: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

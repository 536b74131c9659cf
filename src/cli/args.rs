//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Build named trees from slash-separated paths and inspect them
#[derive(Parser, Debug)]
#[command(name = "nodetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .nodetree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the indented listing of the tree
    Render(TreeArgs),

    /// Print the tree with box-drawing branches
    Tree(TreeArgs),

    /// Resolve a path in the tree and print the node found
    Lookup {
        /// Path to resolve, e.g. menu/file/open
        query: String,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where the tree's paths come from
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Paths to insert, e.g. menu/file/open
    pub paths: Vec<String>,

    /// File with one path per line
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Name of the root node (overrides config)
    #[arg(long)]
    pub root_name: Option<String>,
}

//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::load_tree;
use crate::cli::args::{Cli, Commands, TreeArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Node, TreeBuilder};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render(args)) => render(args, settings),
        Some(Commands::Tree(args)) => tree(args, settings),
        Some(Commands::Lookup { query, tree }) => lookup(query, tree, settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "nodetree", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn build(args: &TreeArgs, settings: &Settings) -> CliResult<(TreeBuilder, Node)> {
    if args.paths.is_empty() && args.file.is_none() {
        return Err(CliError::InvalidArgs(
            "no paths given (pass PATH arguments or --file)".into(),
        ));
    }
    let root_name = args
        .root_name
        .clone()
        .unwrap_or_else(|| settings.root_name.clone());
    let builder = TreeBuilder::new(root_name);
    let root = load_tree(&builder, &args.paths, args.file.as_deref())?;
    debug!(nodes = root.tree_len(), depth = root.depth(), "tree loaded");
    Ok((builder, root))
}

#[instrument(skip(settings))]
fn render(args: &TreeArgs, settings: &Settings) -> CliResult<()> {
    let (_, root) = build(args, settings)?;
    output::info(&settings.render.render(&root));
    Ok(())
}

#[instrument(skip(settings))]
fn tree(args: &TreeArgs, settings: &Settings) -> CliResult<()> {
    let (_, root) = build(args, settings)?;
    output::info(&root.to_tree_string());
    Ok(())
}

#[instrument(skip(settings))]
fn lookup(query: &str, args: &TreeArgs, settings: &Settings) -> CliResult<()> {
    let (builder, root) = build(args, settings)?;
    let node = root.path_child(builder.segments(query))?;

    output::success(&format!("found '{}'", node.name()));
    output::detail(&format!("depth below: {}", node.depth() - 1));
    for leaf in node.leaf_names() {
        output::detail(&format!("leaf: {}", leaf));
    }
    Ok(())
}

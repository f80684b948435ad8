use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::repl::run_repl;
use crate::config::{global_config_path, Settings};
use crate::domain::{infix_to_postfix, render_tokens, ExpressionTree, TreeConvert};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Repl) => _repl(settings),
        Some(Commands::Show { expression }) => _show(expression, settings),
        Some(Commands::Eval { expression }) => _eval(expression),
        Some(Commands::Postfix { expression }) => _postfix(expression),
        Some(Commands::Levels { expression }) => _levels(expression),
        Some(Commands::Tree { expression }) => _tree(expression),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument(skip_all)]
fn _repl(settings: &Settings) -> CliResult<()> {
    let stdin = io::stdin();
    run_repl(stdin.lock(), io::stdout().lock(), settings)
}

#[instrument(skip(settings))]
fn _show(expression: &str, settings: &Settings) -> CliResult<()> {
    let style = settings.render.diagram_style()?;
    let tree = ExpressionTree::new(expression)?;
    let mut stdout = io::stdout().lock();
    output::report(&mut stdout, &tree, &style)?;
    stdout.flush()?;
    Ok(())
}

#[instrument]
fn _eval(expression: &str) -> CliResult<()> {
    let tree = ExpressionTree::new(expression)?;
    let value = tree.evaluate();
    if !value.is_finite() {
        output::warning(&format!("{} does not have a finite value", tree.infix()));
    }
    output::info(&format!("{value:?}"));
    Ok(())
}

#[instrument]
fn _postfix(expression: &str) -> CliResult<()> {
    let postfix = infix_to_postfix(expression)?;
    debug!("{} tokens", postfix.len());
    output::info(&render_tokens(&postfix));
    Ok(())
}

#[instrument]
fn _levels(expression: &str) -> CliResult<()> {
    let tree = ExpressionTree::new(expression)?;
    output::info(tree.binary_tree());
    Ok(())
}

#[instrument]
fn _tree(expression: &str) -> CliResult<()> {
    let tree = ExpressionTree::new(expression)?;
    output::header(&tree.infix());
    // termtree's Display ends with a newline
    print!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => print!("{}", settings.to_toml()?),
        ConfigCommands::Template => print!("{}", Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory, global config disabled"),
        },
    }
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

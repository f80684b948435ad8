//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Infix arithmetic expression trees: parse, traverse, evaluate and draw
#[derive(Parser, Debug)]
#[command(name = "exprtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Additional config file (overrides the global config)
    #[arg(short, long, global = true, env = "EXPRTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read expressions interactively (default)
    Repl,

    /// Diagram, notations, value and height of an expression
    Show {
        /// Infix expression, e.g. "2+3*4"
        expression: String,
    },

    /// Evaluate an expression
    Eval {
        /// Infix expression
        expression: String,
    },

    /// Convert an expression to postfix notation
    Postfix {
        /// Infix expression
        expression: String,
    },

    /// Show every tree level, absent slots included
    Levels {
        /// Infix expression
        expression: String,
    },

    /// Show the expression as an indented tree
    Tree {
        /// Infix expression
        expression: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config path
    Path,
}

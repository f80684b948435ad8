//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Reports go through [`report`] uncolored so they can be captured.

use std::io::{self, Write};

use colored::Colorize;

use crate::domain::{DiagramStyle, ExpressionTree};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Write the full expression report: diagram, notations, value and height.
///
/// The value keeps its decimal point (`3.0`, `inf`, `NaN`).
pub fn report<W: Write>(out: &mut W, tree: &ExpressionTree, style: &DiagramStyle) -> io::Result<()> {
    writeln!(out, "GRAPH")?;
    writeln!(out, "{}", tree.render_with(style))?;
    writeln!(out, "Infix: {}", tree.infix())?;
    writeln!(out, "Prefix: {}", tree.prefix())?;
    writeln!(out, "Postfix: {}", tree.postfix())?;
    writeln!(out, "Value: {:?}", tree.evaluate())?;
    writeln!(out, "Height: {}", tree.height())
}

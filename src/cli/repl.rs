//! Interactive loop: one expression per line until the quit sentinel or EOF.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::ExpressionTree;

/// Printed when a line cannot be turned into a tree.
pub const INVALID_NOTICE: &str = "Invalid Expression.";

#[instrument(level = "debug", skip_all)]
pub fn run_repl<R: BufRead, W: Write>(mut input: R, mut out: W, settings: &Settings) -> CliResult<()> {
    let style = settings.render.diagram_style()?;
    let quit = settings.repl.quit.trim();

    writeln!(out, "Expression Tree Program")?;
    writeln!(out, "Type {quit} to Quit")?;

    let mut line = String::new();
    loop {
        writeln!(out)?;
        write!(out, "{} ", settings.repl.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(out)?;
            break;
        }
        let expression = line.trim_end_matches(&['\r', '\n'][..]);
        if expression.trim().eq_ignore_ascii_case(quit) {
            info!("quit sentinel received");
            break;
        }

        match ExpressionTree::new(expression) {
            Ok(tree) => output::report(&mut out, &tree, &style)?,
            Err(e) => {
                debug!("rejected {:?}: {}", expression, e);
                writeln!(out, "{INVALID_NOTICE}")?;
            }
        }
    }
    Ok(())
}

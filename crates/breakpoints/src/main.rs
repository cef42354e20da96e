//! Command-line front end for named breakpoint presets.
//!
//! Renders a preset's `@media` rule around a style block, prints its bare condition,
//! or lists the presets in a table.

use anyhow::{Context as _, Result, anyhow};
use breakpoints::BreakpointTable;
use log::info;
use std::env;
use std::fs::read_to_string;
use std::io::{Read, Write, read_to_string as read_all, stderr, stdin, stdout};
use std::path::PathBuf;

/// Value following `flag` in `args`, if any.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .cloned()
}

/// Load the table named by the required `--presets` flag.
///
/// # Errors
/// Returns an error if the flag is missing or the table cannot be loaded.
fn load_table(args: &[String]) -> Result<BreakpointTable> {
    let path = flag_value(args, "--presets").ok_or_else(|| anyhow!("--presets is required"))?;
    BreakpointTable::load(&PathBuf::from(path))
}

/// Drop the single line ending a file or pipe usually ends with; nothing else.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Read the style block from `--block <FILE>`, or from `input` when absent.
///
/// # Errors
/// Returns an error if the block cannot be read.
fn read_block(args: &[String], input: impl Read) -> Result<String> {
    let text = match flag_value(args, "--block") {
        Some(path) => read_to_string(&path)
            .with_context(|| format!("failed to read style block from {path}"))?,
        None => read_all(input).context("failed to read style block from stdin")?,
    };
    Ok(strip_final_newline(text))
}

/// Wrap a style block in the `@media` rule of a preset.
///
/// # Errors
/// Returns an error if the preset is unknown or any input cannot be read.
fn cmd_render(args: &[String], input: impl Read, out: &mut impl Write) -> Result<()> {
    let table = load_table(args)?;
    let name = flag_value(args, "--name").ok_or_else(|| anyhow!("--name is required"))?;
    let block = read_block(args, input)?;
    let rule = table.render(&name, &block)?;
    info!(target: "breakpoints", "rendered preset '{name}'");
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Print the compiled condition of a preset (an empty line when unconstrained).
///
/// # Errors
/// Returns an error if the preset is unknown or the table cannot be loaded.
fn cmd_condition(args: &[String], out: &mut impl Write) -> Result<()> {
    let table = load_table(args)?;
    let name = flag_value(args, "--name").ok_or_else(|| anyhow!("--name is required"))?;
    writeln!(out, "{}", table.condition(&name)?)?;
    Ok(())
}

/// Print every preset name with its condition, tab separated.
///
/// # Errors
/// Returns an error if the table cannot be loaded.
fn cmd_list(args: &[String], out: &mut impl Write) -> Result<()> {
    let table = load_table(args)?;
    for name in table.names() {
        writeln!(out, "{name}\t{}", table.condition(name)?)?;
    }
    Ok(())
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  breakpoints render --presets <FILE> --name <PRESET> [--block <FILE>]\n  breakpoints condition --presets <FILE> --name <PRESET>\n  breakpoints list --presets <FILE>"
    ));
}

/// Main entry point for the breakpoints CLI tool.
///
/// # Errors
/// Returns an error if command parsing or execution fails.
fn main() -> Result<()> {
    env_logger::init();
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return Err(anyhow!("missing command"));
    }
    let cmd = args.remove(0);
    let mut out = stdout().lock();
    match cmd.as_str() {
        "render" => cmd_render(&args, stdin(), &mut out),
        "condition" => cmd_condition(&args, &mut out),
        "list" => cmd_list(&args, &mut out),
        _ => {
            print_usage();
            Err(anyhow!("unknown command '{cmd}'"))
        }
    }
}

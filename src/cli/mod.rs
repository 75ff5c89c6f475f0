// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions and the driver for the catalan command-line interface.
//!
//! Run with no arguments, the binary prints `C(1)..=C(100)` mod 1,000,000,007
//! on one line. Every flag is optional and only widens what gets computed or
//! how it is rendered; the modulus itself is fixed at compile time.

pub mod display;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use crate::catalan::{checked_limit, generate_with, Method};
use crate::types::CatalanTable;
use crate::verify::check_methods_agree;

/// Upper bound used when `--limit` is not given.
pub const DEFAULT_LIMIT: i64 = 100;

#[derive(Parser, Debug)]
#[command(
    name = "catalan",
    about = "Print Catalan numbers modulo 1,000,000,007",
    version
)]
pub struct Cli {
    /// Largest index to compute
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Also print C(0), which is computed but omitted by default
    #[arg(long)]
    pub include_zero: bool,

    /// Evaluation strategy
    #[arg(long, value_enum, default_value_t = MethodArg::Recurrence)]
    pub method: MethodArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Recompute with the other method and validate the table before printing
    #[arg(long)]
    pub verify: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            include_zero: false,
            method: MethodArg::Recurrence,
            format: OutputFormat::Text,
            verify: false,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodArg {
    /// O(n²) convolution recurrence
    Recurrence,
    /// O(n log p) ratio of consecutive terms
    ClosedForm,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Recurrence => Method::Recurrence,
            MethodArg::ClosedForm => Method::ClosedForm,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Space-separated values on one line
    Text,
    /// JSON report with modulus, limit and terms
    Json,
}

/// Compute the table described by `cli` and write it to `out`.
///
/// Nothing is written until the table is complete (and verified, with
/// `--verify`), so a failing run leaves `out` untouched.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let limit = checked_limit(cli.limit).context("rejected --limit")?;
    let method = Method::from(cli.method);
    info!(limit, ?method, "generating Catalan table");

    let table = generate_with(method, limit)
        .with_context(|| format!("failed to generate table with {:?}", method))?;

    if cli.verify {
        verify_table(&table, method)?;
    }

    let rendered = match cli.format {
        OutputFormat::Text => display::render_text(&table, cli.include_zero),
        OutputFormat::Json => display::render_json(&table, cli.include_zero)?,
    };
    out.write_all(rendered.as_bytes())
        .context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Cross-check a table against the other method and the validating constructor.
fn verify_table(table: &CatalanTable, method: Method) -> Result<()> {
    let other = method.alternate();
    let reference = generate_with(other, table.limit())
        .with_context(|| format!("failed to generate reference table with {:?}", other))?;

    let (recurrence, closed_form) = match method {
        Method::Recurrence => (table, &reference),
        Method::ClosedForm => (&reference, table),
    };
    check_methods_agree(recurrence.as_slice(), closed_form.as_slice())
        .context("verification failed")?;
    CatalanTable::from_values(table.as_slice().to_vec()).context("verification failed")?;

    debug!(terms = table.len(), "table verified");
    Ok(())
}

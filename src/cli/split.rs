//! Split CLI commands
//!
//! `settle` and `balances` both load a group file, recompute, and print
//! either the full plan or just the balances.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_balance_table, format_settlement_table, format_summary};
use crate::error::{SplitterError, SplitterResult};
use crate::export::{
    export_balances_csv, export_report_json, export_report_yaml, export_settlements_csv,
    SplitReport,
};
use crate::models::SettlementPolicy;
use crate::services::{GroupFile, Ledger, SplitOutcome};

/// Output format for split commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

/// Which part of the result a command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitView {
    Balances,
    Settlements,
}

/// Arguments shared by `settle` and `balances`
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Group file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the settle threshold from the config file
    #[arg(long, env = "BILLSPLIT_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Override the currency symbol from the config file
    #[arg(long)]
    pub currency: Option<String>,
}

impl SplitArgs {
    /// Settings with command-line overrides applied
    pub fn effective_settings(&self, base: &Settings) -> SplitterResult<Settings> {
        let mut settings = base.clone();
        if let Some(threshold) = self.threshold {
            settings.settle_threshold = threshold;
        }
        if let Some(currency) = &self.currency {
            settings.currency_symbol = currency.clone();
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Handle `settle` or `balances`
pub fn handle_split_command(base: &Settings, args: SplitArgs, view: SplitView) -> SplitterResult<()> {
    let settings = args.effective_settings(base)?;
    let policy = SettlementPolicy::from_settings(&settings)?;

    let group = GroupFile::load(&args.file)?;
    let mut ledger = group.build_ledger(policy)?;
    let outcome = ledger.recompute_results()?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            SplitterError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => write_tables(
            &mut writer,
            &ledger,
            &outcome,
            group.name.as_deref(),
            &settings,
            view,
        )?,
        OutputFormat::Json => {
            let report = SplitReport::from_ledger(&ledger, group.name.clone(), &settings.currency_symbol)?;
            export_report_json(&report, &mut writer)?;
        }
        OutputFormat::Yaml => {
            let report = SplitReport::from_ledger(&ledger, group.name.clone(), &settings.currency_symbol)?;
            export_report_yaml(&report, &mut writer)?;
        }
        OutputFormat::Csv => match view {
            SplitView::Balances => {
                export_balances_csv(&outcome.balances, settings.decimal_places, &mut writer)?
            }
            SplitView::Settlements => {
                export_settlements_csv(&outcome.settlements, settings.decimal_places, &mut writer)?
            }
        },
    }

    writer.flush()?;
    Ok(())
}

fn write_tables<W: Write>(
    writer: &mut W,
    ledger: &Ledger,
    outcome: &SplitOutcome,
    group_name: Option<&str>,
    settings: &Settings,
    view: SplitView,
) -> SplitterResult<()> {
    if let Some(name) = group_name {
        writeln!(writer, "{}", name)?;
    }
    writeln!(
        writer,
        "{}",
        format_summary(
            ledger.participants().len(),
            ledger.expenses().len(),
            ledger.total_expenses(),
            settings,
        )
    )?;
    writeln!(writer)?;

    writeln!(writer, "Balances:")?;
    writeln!(writer, "{}", format_balance_table(&outcome.balances, settings))?;

    if view == SplitView::Settlements {
        writeln!(writer)?;
        writeln!(writer, "Settlement plan:")?;
        writeln!(writer, "{}", format_settlement_table(&outcome.settlements, settings))?;
    }

    Ok(())
}

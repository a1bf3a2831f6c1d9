use std::io::{self, Write};

use clap::ValueEnum;
use log::warn;

use crate::dispatch::read_package;
use crate::errors::{ReportError, WorkoutError};
use crate::message::InfoMessage;
use crate::metrics::Metrics;
use crate::packages::{parse_packages, Package};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// "Training type: ...; Duration: ..." (én linje per pakke)
    #[default]
    Text,
    /// Én JSON-serialisert InfoMessage per linje
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Stopp på første ugyldige pakke i stedet for å hoppe over den.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    pub written: usize,
    pub skipped: usize,
}

/// Pakke → økt → oppsummering.
pub fn summarize_package(package: &Package) -> Result<InfoMessage, WorkoutError> {
    read_package(&package.code, &package.data).map(|w| w.summarize())
}

/// Skriver én linje per pakke, i input-rekkefølge.
///
/// Ugyldige pakker logges og hoppes over, med mindre `strict` er satt.
/// Alle varianter av `Workout` har en kalorimodell, så `read_package` gir
/// bare inndatafeil her.
pub fn write_report<W: Write>(
    out: &mut W,
    packages: &[Package],
    opts: &ReportOptions,
    metrics: &Metrics,
) -> Result<ReportOutcome, ReportError> {
    let mut outcome = ReportOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        let info = match summarize_package(package) {
            Ok(info) => info,
            Err(source) => {
                metrics.record_rejected(&source);
                if opts.strict {
                    return Err(ReportError::Package {
                        index,
                        code: package.code.clone(),
                        source,
                    });
                }
                warn!("skipping package #{} ({}): {}", index, package.code, source);
                outcome.skipped += 1;
                continue;
            }
        };

        match opts.format {
            OutputFormat::Text => writeln!(out, "{}", info)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&info)?)?,
        }
        metrics.record_summary(&info.training_type);
        outcome.written += 1;
    }

    Ok(outcome)
}

/// `write_report` mot stdout.
pub fn print_report(
    packages: &[Package],
    opts: &ReportOptions,
    metrics: &Metrics,
) -> Result<ReportOutcome, ReportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = write_report(&mut out, packages, opts, metrics)?;
    out.flush()?;
    Ok(outcome)
}

/// JSON-liste med pakker → JSON-liste med InfoMessage-objekter.
///
/// Første ugyldige pakke avbryter (samme som `strict`).
pub fn summarize_json(json_in: &str) -> Result<String, ReportError> {
    let packages = parse_packages(json_in)?;

    let infos = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            summarize_package(package).map_err(|source| ReportError::Package {
                index,
                code: package.code.clone(),
                source,
            })
        })
        .collect::<Result<Vec<InfoMessage>, _>>()?;

    Ok(serde_json::to_string(&infos)?)
}

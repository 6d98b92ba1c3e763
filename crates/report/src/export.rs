use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use classifier::ThreadHead;
use common::{AppError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BugNumberRow {
    number: i64,
}

#[derive(Debug, Serialize)]
struct LinkedPullRequestRow<'a> {
    number: i64,
    url: &'a str,
}

/// Writes the bug-issue numbers as a single-column CSV for manual
/// cross-reference.
pub fn write_bug_numbers<W: Write>(writer: W, numbers: &[i64]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for &number in numbers {
        csv_writer
            .serialize(BugNumberRow { number })
            .map_err(AppError::export)?;
    }
    csv_writer.flush().map_err(AppError::export)?;
    Ok(())
}

/// Writes the linked pull requests, one per row, for manual follow-up.
pub fn write_linked_pull_requests<W: Write>(
    writer: W,
    pull_requests: &[ThreadHead],
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for pull_request in pull_requests {
        csv_writer
            .serialize(LinkedPullRequestRow {
                number: pull_request.number,
                url: &pull_request.url,
            })
            .map_err(AppError::export)?;
    }
    csv_writer.flush().map_err(AppError::export)?;
    Ok(())
}

pub fn write_bug_numbers_file<P: AsRef<Path>>(path: P, numbers: &[i64]) -> Result<()> {
    write_bug_numbers(create_export_file(path.as_ref())?, numbers)
}

pub fn write_linked_pull_requests_file<P: AsRef<Path>>(
    path: P,
    pull_requests: &[ThreadHead],
) -> Result<()> {
    write_linked_pull_requests(create_export_file(path.as_ref())?, pull_requests)
}

fn create_export_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating export directory {}", parent.display()))
                .map_err(AppError::Export)?;
        }
    }
    fs::File::create(path)
        .with_context(|| format!("creating export file {}", path.display()))
        .map_err(AppError::Export)
}

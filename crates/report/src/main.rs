use anyhow::Result;
use common::{config::AppConfig, logging};
use report::{export, pipeline, reader};
use tracing::info;

fn main() -> Result<()> {
    logging::init_logging("info");
    let config = AppConfig::load()?;

    let records = reader::load_records(&config.input.path)?;
    info!(path = %config.input.path, rows = records.len(), "loaded issue export");

    let report = pipeline::run(&records, &config.analysis.bug_label)?;
    info!(
        issues = report.classified.issues.len(),
        issue_comments = report.classified.issue_comments.len(),
        pull_requests = report.classified.pull_requests.len(),
        pull_request_comments = report.classified.pull_request_comments.len(),
        "classified closed records"
    );
    info!(
        bug_issues = report.bug_numbers.len(),
        linked_pull_requests = report.linked_pull_requests.len(),
        "bug linkage computed"
    );
    for stat in &report.label_stats {
        info!(
            label = %stat.name,
            count = stat.count,
            proportion = stat.proportion,
            "label on bug issues"
        );
    }

    export::write_bug_numbers_file(&config.export.bug_numbers_path, &report.bug_numbers)?;
    info!(path = %config.export.bug_numbers_path, "bug issue numbers written");

    export::write_linked_pull_requests_file(
        &config.export.linked_pull_requests_path,
        &report.linked_pull_requests,
    )?;
    info!(path = %config.export.linked_pull_requests_path, "linked pull requests written");
    Ok(())
}

use super::{ReportableRepo, common};
use crate::Result;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(repo: &ReportableRepo, writer: &mut W) -> Result<()> {
    let info = &repo.info;
    let report = &repo.report;

    let output = json!({
        "repository": {
            "name": repo.name(),
            "url": repo.spec.url().as_str(),
            "description": info.description,
            "stars": info.stargazers_count,
            "forks": info.forks_count,
            "watchers": info.watchers_count,
            "pushedAt": info.pushed_at,
        },
        "evaluatedAt": repo.evaluated_at,
        "overall": report.overall,
        "grade": common::format_grade(report.grade()),
        "categories": report.categories,
        "recommendations": report.recommendations,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

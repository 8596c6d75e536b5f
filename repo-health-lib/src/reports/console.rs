use super::{ReportableRepo, common};
use crate::Result;
use crate::appraisal::{Grade, Priority};
use crate::metrics::{CATEGORY_DEFINITIONS, CategoryDef};
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const NO_RECOMMENDATIONS: &str = "Excellent work! This repository is in great shape. Keep up the good work!";

/// Width of the bracketed priority label, e.g. `[MEDIUM]`.
const PRIORITY_LABEL_WIDTH: usize = 8;

pub fn generate<W: Write>(repo: &ReportableRepo, use_colors: bool, writer: &mut W) -> Result<()> {
    generate_with_width(repo, use_colors, get_terminal_width(), writer)
}

fn generate_with_width<W: Write>(repo: &ReportableRepo, use_colors: bool, term_width: usize, writer: &mut W) -> Result<()> {
    let name = repo.name();
    if use_colors {
        writeln!(writer, "{}", name.bold())?;
    } else {
        writeln!(writer, "{name}")?;
    }
    writeln!(writer, "{}", repo.spec.url())?;

    if let Some(description) = repo.info.description.as_deref().filter(|d| !d.is_empty()) {
        for line in wrap_text(description, term_width, 0) {
            writeln!(writer, "{line}")?;
        }
    }

    let mut stats = format!(
        "{} stars · {} forks · {} watchers",
        common::format_count(repo.info.stargazers_count.unwrap_or(0)),
        common::format_count(repo.info.forks_count.unwrap_or(0)),
        common::format_count(repo.info.watchers_count.unwrap_or(0)),
    );
    if let Some(pushed_at) = repo.info.pushed_at {
        write!(stats, " · Updated {}", common::format_date(pushed_at))?;
    }
    writeln!(writer, "{stats}")?;

    let overall = repo.report.overall;
    let grade = repo.report.grade();
    writeln!(writer)?;
    writeln!(
        writer,
        "Overall Health Score: {} ({})",
        paint(&overall.to_string(), grade, use_colors),
        paint(common::format_grade(grade), grade, use_colors)
    )?;

    writeln!(writer)?;
    heading(writer, "Category Breakdown", use_colors)?;
    let max_title_len = CATEGORY_DEFINITIONS.iter().map(|def| def.title.len()).max().unwrap_or(0);
    for def in CATEGORY_DEFINITIONS {
        write_category(writer, def, repo.report.categories.get(def.category), max_title_len, use_colors)?;
    }

    writeln!(writer)?;
    if repo.report.recommendations.is_empty() {
        heading(writer, "Recommendations", use_colors)?;
        writeln!(writer, "  {NO_RECOMMENDATIONS}")?;
        return Ok(());
    }

    heading(writer, "Recommendations for Improvement", use_colors)?;

    // "  " (2) + label + " " (1)
    let message_indent = 2 + PRIORITY_LABEL_WIDTH + 1;
    for recommendation in &repo.report.recommendations {
        let label = format!("[{}]", common::format_priority(recommendation.priority));
        let label = format!("{label:<PRIORITY_LABEL_WIDTH$}");
        let label = if use_colors {
            match recommendation.priority {
                Priority::High => label.red().bold().to_string(),
                Priority::Medium => label.yellow().to_string(),
                Priority::Low => label.dimmed().to_string(),
            }
        } else {
            label
        };

        let wrapped_lines = wrap_text(&recommendation.message, term_width.saturating_sub(message_indent), 0);
        if let Some(first_line) = wrapped_lines.first() {
            writeln!(writer, "  {label} {first_line}")?;
            for line in wrapped_lines.iter().skip(1) {
                writeln!(writer, "{:message_indent$}{line}", "")?;
            }
        }
    }

    Ok(())
}

fn write_category<W: Write>(writer: &mut W, def: &CategoryDef, score: u8, title_width: usize, use_colors: bool) -> Result<()> {
    let grade = Grade::from_score(score);
    let bar = common::score_bar(score);

    writeln!(
        writer,
        "  {:<title_width$} {:>3} {}  {}",
        def.title,
        score,
        paint(&bar, grade, use_colors),
        def.description
    )?;

    Ok(())
}

fn heading<W: Write>(writer: &mut W, text: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", text.bold())?;
    } else {
        writeln!(writer, "{text}")?;
    }

    Ok(())
}

fn paint(text: &str, grade: Grade, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }

    match grade {
        Grade::Excellent => text.green().bold().to_string(),
        Grade::Good => text.cyan().bold().to_string(),
        Grade::Fair => text.yellow().bold().to_string(),
        Grade::NeedsImprovement => text.red().bold().to_string(),
    }
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Word-wrap text to fit within a given width, with indentation for continuation lines
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        // Not enough space, return single line
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut is_first_line = true;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        let separator_len = usize::from(!current_line.is_empty());
        let line_width = if is_first_line {
            current_line.chars().count()
        } else {
            indent + current_line.chars().count()
        };

        if !current_line.is_empty() && line_width + separator_len + word_len > width {
            if is_first_line {
                lines.push(current_line);
                is_first_line = false;
            } else {
                lines.push(format!("{:indent$}{}", "", current_line, indent = indent));
            }
            current_line = word.to_string();
        } else {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() {
        if is_first_line {
            lines.push(current_line);
        } else {
            lines.push(format!("{:indent$}{}", "", current_line, indent = indent));
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

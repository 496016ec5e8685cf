// src/report.rs
// =============================================================================
// Output for the `list` subcommand.
//
// Prints the same data the dashboard shows (filtered list + top-N chart
// data), either as a human-readable table or as JSON for scripts.
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use crate::dashboard::{DashboardView, LanguageFilter};

// Longest repository name shown in the table before truncating
const NAME_WIDTH: usize = 40;

/// JSON shape of `list --json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub user: &'a str,
    pub query: &'a str,
    pub language: &'a str,
    #[serde(flatten)]
    pub view: &'a DashboardView,
}

// Prints the results either as a table or JSON
pub fn print_results(
    user: &str,
    query: &str,
    language: &LanguageFilter,
    view: &DashboardView,
    json: bool,
) -> Result<()> {
    if json {
        let report = Report {
            user,
            query,
            language: language.label(),
            view,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(view));
    }
    Ok(())
}

/// Human-readable table: the chart as text bars, then the list
pub fn render_table(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "📊 {} chart (top {} repositories)\n",
        view.chart.series_label,
        view.top.len()
    ));
    if view.chart.is_empty() {
        out.push_str("   (no repositories)\n");
    } else {
        let max = view.chart.values.iter().copied().max().unwrap_or(0);
        for (label, value) in view.chart.bars() {
            out.push_str(&format!(
                "   {:<width$} {} {}\n",
                truncate_name(label),
                text_bar(value, max, 30),
                value,
                width = NAME_WIDTH
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!("{:<width$} {:<15} {:>8}\n", "NAME", "LANGUAGE", "STARS", width = NAME_WIDTH));
    out.push_str(&format!("{}\n", "=".repeat(NAME_WIDTH + 25)));
    for repo in &view.filtered {
        out.push_str(&format!(
            "{:<width$} {:<15} {:>8}\n",
            truncate_name(&repo.name),
            repo.language.as_deref().unwrap_or("-"),
            repo.stargazers_count,
            width = NAME_WIDTH
        ));
    }
    out.push_str(&format!("\n📋 Matching repositories: {}\n", view.filtered.len()));

    out
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let cut: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

// A bar of '█' proportional to value/max, at least one block for non-zero values
fn text_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(len.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{derive, TOP_N};
    use crate::github::repo;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(50, 50, 10).chars().count(), 10);
        assert_eq!(text_bar(10, 50, 10).chars().count(), 2);
        assert_eq!(text_bar(1, 1000, 10).chars().count(), 1);
        assert!(text_bar(0, 50, 10).is_empty());
    }

    #[test]
    fn test_truncate_name() {
        let long = "x".repeat(60);
        let cut = truncate_name(&long);
        assert_eq!(cut.chars().count(), NAME_WIDTH);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_table_lists_filtered_repos() {
        let repos = vec![
            repo(1, "alpha", Some("JavaScript"), 10),
            repo(2, "beta", None, 50),
        ];
        let view = derive(&repos, "", &LanguageFilter::All, TOP_N);
        let table = render_table(&view);

        assert!(table.contains("alpha"));
        assert!(table.contains("JavaScript"));
        assert!(table.contains("Matching repositories: 2"));
        // beta comes first in the chart section
        assert!(table.find("beta").unwrap() < table.find("alpha").unwrap());
    }

    #[test]
    fn test_table_empty() {
        let view = derive(&[], "", &LanguageFilter::All, TOP_N);
        let table = render_table(&view);
        assert!(table.contains("(no repositories)"));
        assert!(table.contains("Matching repositories: 0"));
    }

    #[test]
    fn test_json_report_shape() {
        let repos = vec![repo(1, "alpha", Some("JavaScript"), 10)];
        let view = derive(&repos, "al", &LanguageFilter::All, TOP_N);
        let report = Report {
            user: "facebook",
            query: "al",
            language: "All",
            view: &view,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["user"], "facebook");
        assert_eq!(value["language"], "All");
        assert_eq!(value["filtered"][0]["name"], "alpha");
        assert_eq!(value["chart"]["labels"][0], "alpha");
        assert_eq!(value["chart"]["values"][0], 10);
        assert_eq!(value["chart"]["series_label"], "Stars");
    }
}

//! Output formatters - console, JSON, Markdown and HTML rendering of reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeInsightError};
use crate::report::AnalysisReport;
use askama::Template;
use colored::Colorize;
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter;

/// HTML formatter with inline styling
pub struct HtmlFormatter;

/// Askama template for HTML output
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Strength Report</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; color: #333; }
        .overall { font-size: 2.5em; font-weight: bold; }
        .score-excellent { color: #28a745; }
        .score-good { color: #17a2b8; }
        .score-fair { color: #ffc107; }
        .score-poor { color: #dc3545; }
        table { border-collapse: collapse; margin: 20px 0; }
        td, th { border: 1px solid #dee2e6; padding: 8px 16px; text-align: left; }
        .preview { background: #f8f9fa; padding: 12px; border-radius: 6px; white-space: pre-wrap; }
    </style>
</head>
<body>
    <h1>Resume Strength Report</h1>
    <p>Report <code>{{ report.id }}</code> for <strong>{{ report.user_id }}</strong>, generated {{ report.created_at }}</p>
    <p class="overall {{ overall_class }}">{{ report.scores.overall }}/100</p>
    <table>
        <tr><th>Dimension</th><th>Score</th></tr>
        <tr><td>Skills coverage</td><td>{{ report.scores.skills_coverage }}</td></tr>
        <tr><td>Experience relevance</td><td>{{ report.scores.experience_relevance }}</td></tr>
        <tr><td>ATS readiness</td><td>{{ report.scores.ats_readiness }}</td></tr>
        <tr><td>Impact</td><td>{{ report.scores.impact }}</td></tr>
    </table>
    {% if report.missing_skills.len() > 0 %}
    <h2>Missing skills</h2>
    <ul>
    {% for skill in report.missing_skills %}
        <li>{{ skill }}</li>
    {% endfor %}
    </ul>
    {% endif %}
    {% if report.recommendations.len() > 0 %}
    <h2>Recommendations</h2>
    <ul>
    {% for recommendation in report.recommendations %}
        <li>{{ recommendation }}</li>
    {% endfor %}
    </ul>
    {% endif %}
    {% if let Some(preview) = report.text_preview %}
    <h2>Text preview</h2>
    <div class="preview">{{ preview }}</div>
    {% endif %}
</body>
</html>
"#,
    ext = "html"
)]
struct HtmlReportTemplate<'a> {
    report: &'a AnalysisReport,
    overall_class: &'static str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn score_line(&self, label: &str, value: u8) -> String {
        let filled = (usize::from(value) + 5) / 10;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
        let bar = if self.use_colors {
            match value {
                80..=100 => bar.green().to_string(),
                60..=79 => bar.cyan().to_string(),
                40..=59 => bar.yellow().to_string(),
                _ => bar.red().to_string(),
            }
        } else {
            bar
        };
        format!("  {:<24} {} {:>3}/100", label, bar, value)
    }

    fn verdict(overall: u8) -> &'static str {
        match overall {
            90..=100 => "Excellent resume - ready to send",
            80..=89 => "Very strong resume - minor polish could help",
            70..=79 => "Good resume - some targeted improvements recommended",
            60..=69 => "Fair resume - several improvements needed",
            50..=59 => "Below average - significant improvements required",
            _ => "Weak resume - major revisions needed",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        let title = format!("Resume Strength Report ({})", report.id);
        if self.use_colors {
            out.push_str(&format!("{}\n", title.bold()));
        } else {
            out.push_str(&format!("{}\n", title));
        }
        out.push_str(&format!(
            "User: {}   Created: {}\n\n",
            report.user_id,
            report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str(&self.score_line("Overall", report.scores.overall));
        out.push('\n');
        out.push_str(&self.score_line("Skills coverage", report.scores.skills_coverage));
        out.push('\n');
        out.push_str(&self.score_line("Experience relevance", report.scores.experience_relevance));
        out.push('\n');
        out.push_str(&self.score_line("ATS readiness", report.scores.ats_readiness));
        out.push('\n');
        out.push_str(&self.score_line("Impact", report.scores.impact));
        out.push('\n');

        out.push_str(&format!("\n{}\n", Self::verdict(report.scores.overall)));

        if !report.missing_skills.is_empty() {
            out.push_str("\nMissing skills:\n");
            for skill in &report.missing_skills {
                out.push_str(&format!("  • {}\n", skill));
            }
        }

        if !report.recommendations.is_empty() {
            out.push_str("\nRecommendations:\n");
            for recommendation in &report.recommendations {
                out.push_str(&format!("  → {}\n", recommendation));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Strength Report\n\n");
        out.push_str(&format!(
            "Report `{}` for **{}**, generated {}\n\n",
            report.id,
            report.user_id,
            report.created_at.format("%Y-%m-%d %H:%M UTC")
        ));

        out.push_str("| Dimension | Score |\n|---|---|\n");
        out.push_str(&format!("| Overall | **{}** |\n", report.scores.overall));
        out.push_str(&format!("| Skills coverage | {} |\n", report.scores.skills_coverage));
        out.push_str(&format!(
            "| Experience relevance | {} |\n",
            report.scores.experience_relevance
        ));
        out.push_str(&format!("| ATS readiness | {} |\n", report.scores.ats_readiness));
        out.push_str(&format!("| Impact | {} |\n", report.scores.impact));

        if !report.missing_skills.is_empty() {
            out.push_str("\n## Missing skills\n\n");
            for skill in &report.missing_skills {
                out.push_str(&format!("- {}\n", skill));
            }
        }

        if !report.recommendations.is_empty() {
            out.push_str("\n## Recommendations\n\n");
            for recommendation in &report.recommendations {
                out.push_str(&format!("- {}\n", recommendation));
            }
        }

        if let Some(preview) = &report.text_preview {
            out.push_str("\n## Text preview\n\n");
            out.push_str(&format!("> {}\n", preview.replace('\n', "\n> ")));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    fn overall_class(overall: u8) -> &'static str {
        match overall {
            80..=100 => "score-excellent",
            65..=79 => "score-good",
            45..=64 => "score-fair",
            _ => "score-poor",
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template = HtmlReportTemplate {
            report,
            overall_class: Self::overall_class(report.scores.overall),
        };
        template
            .render()
            .map_err(|e| ResumeInsightError::OutputFormatting(format!("HTML rendering failed: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

/// Coordinates the individual formatters and handles saving to files
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

impl ReportGenerator {
    pub fn new(color_output: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(color_output),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter,
        }
    }

    pub fn format(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::ResumeScorer;
    use chrono::Utc;

    fn sample_report() -> AnalysisReport {
        let analysis = ResumeScorer::new().analyze("python docker led improved summary skills");
        AnalysisReport::new(
            "report-1".to_string(),
            "alice".to_string(),
            Utc::now(),
            analysis,
            Some("python docker".to_string()),
        )
    }

    #[test]
    fn test_console_output_contains_scores_and_verdict() {
        let formatter = ConsoleFormatter::new(false);
        let out = formatter.format_report(&sample_report()).unwrap();

        assert!(out.contains("Overall"));
        assert!(out.contains("Skills coverage"));
        assert!(out.contains("/100"));
        assert!(out.contains("resume"));
    }

    #[test]
    fn test_json_output_is_valid_and_camel_case() {
        let formatter = JsonFormatter::new(true);
        let out = formatter.format_report(&sample_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["scores"]["skillsCoverage"].is_number());
        assert_eq!(value["userId"], "alice");
    }

    #[test]
    fn test_markdown_output_has_table_and_sections() {
        let out = MarkdownFormatter.format_report(&sample_report()).unwrap();

        assert!(out.starts_with("# Resume Strength Report"));
        assert!(out.contains("| Dimension | Score |"));
        assert!(out.contains("## Missing skills"));
    }

    #[test]
    fn test_html_output_renders() {
        let out = HtmlFormatter.format_report(&sample_report()).unwrap();

        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains("Resume Strength Report"));
        assert!(out.contains("alice"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false);
        let report = sample_report();

        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
        ] {
            let out = generator.format(&report, &format).unwrap();
            assert!(!out.is_empty());
        }
    }
}

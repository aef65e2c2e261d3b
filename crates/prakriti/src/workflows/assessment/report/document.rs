use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::super::domain::{AssessmentError, Dosha};
use super::super::profile::UserProfile;
use super::summary::AssessmentReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    #[default]
    Text,
    Html,
}

impl DocumentFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
        }
    }
}

/// Downloadable rendering of a report.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub file_name: String,
    pub content_type: String,
    pub body: String,
}

const FOOTER: &str = "This report is based on traditional Ayurvedic principles.";

pub fn render_document(
    report: &AssessmentReport,
    format: DocumentFormat,
) -> Result<ReportDocument, AssessmentError> {
    let profile = report
        .profile
        .as_ref()
        .ok_or(AssessmentError::ProfileRequired)?;

    let file_name = document_file_name(profile, format);
    let content_type = mime_guess::from_path(&file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    let body = match format {
        DocumentFormat::Text => render_text(report, profile),
        DocumentFormat::Html => render_html(report, profile),
    };

    Ok(ReportDocument {
        file_name,
        content_type,
        body,
    })
}

pub fn document_file_name(profile: &UserProfile, format: DocumentFormat) -> String {
    format!(
        "prakriti-report-{}-{}.{}",
        slug(&profile.first_name),
        slug(&profile.last_name),
        format.extension()
    )
}

fn render_text(report: &AssessmentReport, profile: &UserProfile) -> String {
    let mut text = String::new();
    let guidance = &report.guidance;

    writeln!(text, "Your Dosha Report based on the information shared:").expect("write heading");
    writeln!(text, "Generated {}", report.generated_on.format("%B %d, %Y")).expect("write date");
    text.push('\n');

    writeln!(text, "Personal Information").expect("write profile heading");
    writeln!(text, "Name: {}", profile.full_name()).expect("write name");
    writeln!(text, "Email: {}", profile.email).expect("write email");
    writeln!(text, "Age: {} years", profile.age).expect("write age");
    writeln!(text, "Gender: {}", profile.gender.label()).expect("write gender");
    writeln!(text, "Location: {}", profile.location).expect("write location");
    text.push('\n');

    writeln!(text, "Your Prakriti: {}", guidance.title()).expect("write title");
    writeln!(
        text,
        "Primary dosha: {} | Secondary dosha: {}",
        report.constitution.primary.label(),
        report.constitution.secondary.label()
    )
    .expect("write constitution");
    for dosha in Dosha::ordered() {
        writeln!(
            text,
            "  {}: {}%",
            dosha.label(),
            report.distribution.get(dosha)
        )
        .expect("write distribution");
    }
    text.push('\n');
    writeln!(text, "{}", guidance.description).expect("write description");
    text.push('\n');

    writeln!(text, "How to Maintain Balance:").expect("write balance heading");
    for (index, practice) in guidance.balance_practices.iter().enumerate() {
        writeln!(text, "{}. {}", index + 1, practice).expect("write practice");
    }
    text.push('\n');

    writeln!(text, "Detailed Lifestyle Recommendations").expect("write section heading");
    for (heading, items) in guidance.recommendations.sections() {
        text.push('\n');
        writeln!(text, "{heading}").expect("write recommendation heading");
        for item in items {
            writeln!(text, "• {item}").expect("write recommendation");
        }
    }
    text.push('\n');

    writeln!(
        text,
        "© {} Prakriti Assessment. {FOOTER}",
        report.generated_on.format("%Y")
    )
    .expect("write footer");

    text
}

fn render_html(report: &AssessmentReport, profile: &UserProfile) -> String {
    let mut html = String::new();
    let guidance = &report.guidance;

    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    writeln!(
        html,
        "<title>Prakriti Report for {}</title></head><body>",
        escape_html(&profile.full_name())
    )
    .expect("write title");
    writeln!(html, "<h1>Your Dosha Report based on the information shared:</h1>")
        .expect("write heading");

    html.push_str("<h2>Personal Information</h2><ul>");
    for (label, value) in [
        ("Name", profile.full_name()),
        ("Email", profile.email.clone()),
        ("Age", format!("{} years", profile.age)),
        ("Gender", profile.gender.label().to_string()),
        ("Location", profile.location.clone()),
    ] {
        writeln!(html, "<li><strong>{label}:</strong> {}</li>", escape_html(&value))
            .expect("write profile item");
    }
    html.push_str("</ul>");

    writeln!(html, "<h2>Your Prakriti: {}</h2>", escape_html(&guidance.title()))
        .expect("write prakriti heading");
    html.push_str("<ul>");
    for dosha in report.distribution.ranked() {
        writeln!(
            html,
            "<li>{}: {}%</li>",
            dosha.label(),
            report.distribution.get(dosha)
        )
        .expect("write distribution");
    }
    html.push_str("</ul>");
    writeln!(html, "<p>{}</p>", escape_html(guidance.description)).expect("write description");

    html.push_str("<h2>How to Maintain Balance:</h2><ol>");
    for practice in &guidance.balance_practices {
        writeln!(html, "<li>{}</li>", escape_html(practice)).expect("write practice");
    }
    html.push_str("</ol>");

    html.push_str("<h2>Detailed Lifestyle Recommendations</h2>");
    for (heading, items) in guidance.recommendations.sections() {
        writeln!(html, "<h3>{heading}</h3><ul>").expect("write recommendation heading");
        for item in items {
            writeln!(html, "<li>{}</li>", escape_html(item)).expect("write recommendation");
        }
        html.push_str("</ul>");
    }

    writeln!(
        html,
        "<footer>&copy; {} Prakriti Assessment. {FOOTER}</footer></body></html>",
        report.generated_on.format("%Y")
    )
    .expect("write footer");

    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// File-name fragment limited to ASCII letters, digits, `-` and `_` so the
/// name is safe inside a quoted `Content-Disposition` header.
fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "guest".to_string()
    } else {
        slug.to_string()
    }
}

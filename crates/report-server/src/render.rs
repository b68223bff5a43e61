//! HTML page rendering.
//!
//! Templates are embedded at compile time and filled in a single pass over
//! `{{ name }}` placeholders, so substituted text is never re-scanned. All
//! user-provided text is escaped before substitution.

use axum::response::Html;
use report_storage::Report;

use crate::forms::TOKEN_FIELD;
use crate::schema::pages::{FormErrors, ReportForm};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const SUCCESS_TEMPLATE: &str = include_str!("../templates/success.html");
const ALL_REPORTS_TEMPLATE: &str = include_str!("../templates/all_reports.html");
const BY_NAME_TEMPLATE: &str = include_str!("../templates/reports_by_name.html");

/// The submission form, pre-filled with `form`'s values and `errors`.
pub fn form_page(form: &ReportForm, errors: &FormErrors, token: &str) -> Html<String> {
    let form_errors = errors
        .token
        .as_ref()
        .map(|err| error_list(&err.to_string()))
        .unwrap_or_default();
    Html(fill(
        INDEX_TEMPLATE,
        &[
            ("form_errors", form_errors.as_str()),
            ("token_field", TOKEN_FIELD),
            ("csrf_token", escape_html(token).as_str()),
            ("full_name", escape_html(&form.full_name).as_str()),
            ("report_text", escape_html(&form.report_text).as_str()),
            ("full_name_errors", field_errors(errors.full_name).as_str()),
            ("report_text_errors", field_errors(errors.report_text).as_str()),
        ],
    ))
}

pub fn success_page() -> Html<&'static str> {
    Html(SUCCESS_TEMPLATE)
}

pub fn all_reports_page(reports: &[Report]) -> Html<String> {
    Html(fill(
        ALL_REPORTS_TEMPLATE,
        &[("reports", report_list(reports).as_str())],
    ))
}

pub fn reports_by_name_page(name: &str, reports: &[Report]) -> Html<String> {
    Html(fill(
        BY_NAME_TEMPLATE,
        &[
            ("name", escape_html(name).as_str()),
            ("reports", report_list(reports).as_str()),
        ],
    ))
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn report_list(reports: &[Report]) -> String {
    if reports.is_empty() {
        return "<p>No reports found.</p>".to_string();
    }
    let mut out = String::from("<ul class=\"reports\">\n");
    for report in reports {
        out.push_str(&format!(
            "    <li id=\"report-{}\"><strong>{}</strong><pre>{}</pre></li>\n",
            report.id.0,
            escape_html(&report.full_name),
            escape_html(&report.report_text),
        ));
    }
    out.push_str("  </ul>");
    out
}

fn field_errors(message: Option<&'static str>) -> String {
    message.map(error_list).unwrap_or_default()
}

fn error_list(message: &str) -> String {
    format!("<ul class=\"errors\"><li>{}</li></ul>", escape_html(message))
}

/// Replaces each `{{ key }}` in `template` with its value. Unknown keys are
/// left in place.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = after[..end].trim();
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

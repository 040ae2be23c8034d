//! CSV prospect import.
//!
//! Parsing is deliberately forgiving: header names are matched against a
//! small alias table, cells are trimmed and unquoted, and rows without an
//! email are skipped. Records break only on newlines outside double quotes,
//! so a quoted cell may span several lines. Validation then checks each row's email and URL fields
//! and reports failures per row without rejecting the whole file.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ProspectInput;
use crate::errors::CoreError;

const EMAIL_HEADERS: &[&str] = &["email", "email address", "e-mail"];
const NAME_HEADERS: &[&str] = &["name", "full name", "fullname"];
const COMPANY_HEADERS: &[&str] = &["company", "company name", "organization"];
const TITLE_HEADERS: &[&str] = &["title", "job title", "position"];
const PHONE_HEADERS: &[&str] = &["phone", "telephone", "mobile"];
const LINKEDIN_HEADERS: &[&str] = &["linkedin", "linkedin url", "linkedin_url"];
const WEBSITE_HEADERS: &[&str] = &["website", "url", "company url"];
const NOTES_HEADERS: &[&str] = &["notes", "note", "comments"];

/// Outcome counts for a bulk import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportReport {
    pub success: usize,
    pub failed: usize,
    /// One `"<email>: <reason>"` line per failed row.
    pub errors: Vec<String>,
}

impl ImportReport {
    pub const fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_failure(&mut self, email: &str, reason: impl std::fmt::Display) {
        self.failed += 1;
        self.errors.push(format!("{email}: {reason}"));
    }
}

/// Parse CSV text into prospect rows.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the text has no data rows or no
/// recognizable email column.
pub fn parse_csv(text: &str) -> Result<Vec<ProspectInput>, CoreError> {
    let lines: Vec<&str> = split_records(text)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(CoreError::validation(
            "CSV file must contain headers and at least one data row",
        ));
    }

    let headers: Vec<String> = split_row(lines[0])
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();
    let find = |aliases: &[&str]| headers.iter().position(|h| aliases.contains(&h.as_str()));

    let email_idx =
        find(EMAIL_HEADERS).ok_or_else(|| CoreError::validation("CSV must contain an \"email\" column"))?;
    let name_idx = find(NAME_HEADERS);
    let company_idx = find(COMPANY_HEADERS);
    let title_idx = find(TITLE_HEADERS);
    let phone_idx = find(PHONE_HEADERS);
    let linkedin_idx = find(LINKEDIN_HEADERS);
    let website_idx = find(WEBSITE_HEADERS);
    let notes_idx = find(NOTES_HEADERS);

    let rows = lines[1..]
        .iter()
        .filter_map(|line| {
            let cells = split_row(line);
            let cell = |idx: Option<usize>| {
                idx.and_then(|i| cells.get(i))
                    .filter(|v| !v.is_empty())
                    .cloned()
            };
            let email = cell(Some(email_idx))?;
            Some(ProspectInput {
                email,
                name: cell(name_idx),
                company: cell(company_idx),
                title: cell(title_idx),
                phone: cell(phone_idx),
                linkedin_url: cell(linkedin_idx),
                website: cell(website_idx),
                notes: cell(notes_idx),
            })
        })
        .collect();
    Ok(rows)
}

/// Split text into records on line breaks outside double quotes. A `\r`
/// before the break is dropped.
fn split_records(text: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                let record = &text[start..idx];
                records.push(record.strip_suffix('\r').unwrap_or(record));
                start = idx + 1;
            }
            _ => {}
        }
    }
    if start < text.len() {
        let record = &text[start..];
        records.push(record.strip_suffix('\r').unwrap_or(record));
    }
    records
}

/// Split one CSV record on commas outside double quotes, trimming each cell and
/// stripping surrounding quotes.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
        .into_iter()
        .map(|cell| {
            let trimmed = cell.trim();
            let unquoted = trimmed
                .strip_prefix('"')
                .and_then(|c| c.strip_suffix('"'))
                .unwrap_or(trimmed);
            unquoted.replace("\"\"", "\"")
        })
        .collect()
}

/// Split rows into importable ones and a report of the rejected ones.
#[must_use]
pub fn validate_import(rows: Vec<ProspectInput>) -> (Vec<ProspectInput>, ImportReport) {
    let mut report = ImportReport::default();
    let mut valid = Vec::with_capacity(rows.len());
    for row in rows {
        match validate_row(&row) {
            Ok(()) => valid.push(row),
            Err(reason) => report.record_failure(&row.email, reason),
        }
    }
    (valid, report)
}

fn validate_row(row: &ProspectInput) -> Result<(), String> {
    if !is_valid_email(&row.email) {
        return Err("invalid email".into());
    }
    for (field, value) in [("linkedin_url", &row.linkedin_url), ("website", &row.website)] {
        let bad = value
            .as_deref()
            .filter(|v| !v.is_empty())
            .is_some_and(|v| url::Url::parse(v).is_err());
        if bad {
            return Err(format!("invalid {field} URL"));
        }
    }
    Ok(())
}

/// Minimal syntactic check: `local@domain.tld` with no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

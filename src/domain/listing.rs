// src/domain/listing.rs

//! Filtering, searching and display helpers for the appraisal list.
//!
//! Records arrive already scoped to the caller; everything here runs in memory
//! after the fetch.

use crate::domain::appraisal::{Appraisal, AppraisalStatus};
use crate::domain::document;
use crate::domain::form::compose_address;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Draft,
    Completed,
}

impl StatusFilter {
    /// Unrecognised values show everything.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => StatusFilter::Draft,
            "COMPLETED" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Draft => "DRAFT",
            StatusFilter::Completed => "COMPLETED",
        }
    }

    fn admits(self, status: AppraisalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Draft => status == AppraisalStatus::Draft,
            StatusFilter::Completed => status == AppraisalStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl ListQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            status: params
                .get("status")
                .map(|s| StatusFilter::parse(s))
                .unwrap_or_default(),
            search: params.get("q").cloned().unwrap_or_default(),
        }
    }
}

/// Column value, or the same field inside the stored document when the column is empty.
fn column_or_data<'a>(column: &'a str, record: &'a Appraisal, data_key: &str) -> &'a str {
    if column.is_empty() {
        document::content_str(&record.data, data_key).unwrap_or("")
    } else {
        column
    }
}

pub fn title_of(record: &Appraisal) -> &str {
    column_or_data(&record.title, record, "appraisalTitle")
}

pub fn address_of(record: &Appraisal) -> &str {
    column_or_data(&record.address, record, "streetAddress")
}

pub fn suburb_of(record: &Appraisal) -> &str {
    column_or_data(&record.suburb, record, "suburb")
}

pub fn postcode_of(record: &Appraisal) -> &str {
    column_or_data(&record.postcode, record, "postcode")
}

pub fn state_of(record: &Appraisal) -> &str {
    column_or_data(&record.state, record, "state")
}

pub fn display_title(record: &Appraisal) -> String {
    match title_of(record) {
        "" => format!("Appraisal #{}", record.id),
        title => title.to_string(),
    }
}

pub fn display_address(record: &Appraisal) -> String {
    compose_address(
        address_of(record),
        suburb_of(record),
        postcode_of(record),
        state_of(record),
    )
}

fn matches_search(record: &Appraisal, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        title_of(record),
        address_of(record),
        suburb_of(record),
        postcode_of(record),
    ]
    .iter()
    .any(|hay| hay.to_lowercase().contains(needle))
}

/// Most recently touched first, then status filter, then search.
pub fn apply(mut records: Vec<Appraisal>, query: &ListQuery) -> Vec<Appraisal> {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));

    let needle = query.search.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| query.status.admits(r.status))
        .filter(|r| matches_search(r, &needle))
        .collect()
}

/// `19 Oct 2026`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

/// Same format for a stored `YYYY-MM-DD` or RFC 3339 string; `—` when unparseable.
pub fn format_date_str(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => format_date(&at.with_timezone(&Utc)),
        Err(_) => "—".to_string(),
    }
}

//! Types for the HTML page surface: the submission form, its validation
//! result, and the listing route parameters.

use std::str::FromStr;

use report_storage::NewReport;
use serde::Deserialize;

use crate::error::ApiError;
use crate::forms::{FormTokens, TokenError};

/// Message shown under a required field left blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Fields posted by the submission form. Absent fields deserialize as empty.
/// `csrf_token` is posted under [`TOKEN_FIELD`](crate::forms::TOKEN_FIELD).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub report_text: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Per-field validation failures for a submitted [`ReportForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub full_name: Option<&'static str>,
    pub report_text: Option<&'static str>,
    pub token: Option<TokenError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.report_text.is_none() && self.token.is_none()
    }
}

impl ReportForm {
    /// Checks that both text fields hold something other than whitespace
    /// and that the form token is genuine and fresh.
    pub fn validate(&self, tokens: &FormTokens) -> FormErrors {
        FormErrors {
            full_name: required(&self.full_name),
            report_text: required(&self.report_text),
            token: tokens.verify(&self.csrf_token).err(),
        }
    }

    /// Converts into a store input. Values are kept exactly as submitted.
    pub fn into_new_report(self) -> NewReport {
        NewReport::new(self.full_name, self.report_text)
    }
}

fn required(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(REQUIRED_MESSAGE)
}

/// Listing mode selected by the `/reports/{criteria}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCriteria {
    All,
    ByName,
}

impl FromStr for ListCriteria {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ListCriteria::All),
            "by_name" => Ok(ListCriteria::ByName),
            _ => Err(ApiError::InvalidCriteria),
        }
    }
}

/// Query string for `/reports/by_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByNameQuery {
    pub name: Option<String>,
}

impl ByNameQuery {
    /// Takes the first `name` among decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);
        ByNameQuery { name }
    }
}

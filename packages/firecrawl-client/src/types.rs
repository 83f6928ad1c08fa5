use serde::{Deserialize, Serialize};

use crate::error::{FirecrawlError, Result};
use crate::schema::{ExtractOptions, COMPANY_DESCRIPTION, PRODUCT_SUMMARY};

/// Body of `POST /v1/scrape`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: &'static [&'static str],
    pub extract: &'a ExtractOptions,
}

impl<'a> ScrapeRequest<'a> {
    pub fn new(url: &'a str, extract: &'a ExtractOptions) -> Self {
        Self {
            url,
            formats: &["extract"],
            extract,
        }
    }
}

/// Raw scrape response envelope.
///
/// Only `success` is decoded strictly. Everything else stays untyped until the
/// envelope says the scrape succeeded, so a denial is never masked by an
/// unexpected body shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Reason given by the service when `success` is false; a string or an object
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub warning: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default)]
    pub extract: Option<ExtractedFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "sourceURL", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Structured output as returned by the service; any field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedFields {
    pub company_description: Option<String>,
    pub product_summary: Option<String>,
}

/// Validated extraction: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub company_description: String,
    pub product_summary: String,
}

/// Successful result of [`crate::FirecrawlClient::extract`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyExtraction {
    pub metadata: Option<DocumentMetadata>,
    pub profile: CompanyProfile,
}

impl ScrapeResponse {
    /// Enforce the response contract.
    ///
    /// `success: false` is always a denial, whatever else the body holds.
    /// `success: true` without `data`, without `data.extract`, or with an empty
    /// required field is an incomplete extraction; `data` of the wrong shape is a
    /// decode error.
    pub fn into_extraction(self, status: u16) -> Result<CompanyExtraction> {
        if !self.success {
            return Err(FirecrawlError::ExtractionDenied {
                status,
                message: self.error.as_ref().and_then(render_message),
            });
        }

        let data = match self.data {
            None | Some(serde_json::Value::Null) => {
                return Err(FirecrawlError::IncompleteExtraction { field: "data" })
            }
            Some(data) => serde_json::from_value::<ResponseData>(data)
                .map_err(|source| FirecrawlError::Decode { status, source })?,
        };
        let extract = data
            .extract
            .ok_or(FirecrawlError::IncompleteExtraction { field: "extract" })?;

        let profile = CompanyProfile {
            company_description: require(extract.company_description, COMPANY_DESCRIPTION)?,
            product_summary: require(extract.product_summary, PRODUCT_SUMMARY)?,
        };

        Ok(CompanyExtraction {
            metadata: data.metadata,
            profile,
        })
    }
}

/// Render a loosely typed `error`/`warning` value for logs and error messages.
pub(crate) fn render_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FirecrawlError::IncompleteExtraction { field }),
    }
}

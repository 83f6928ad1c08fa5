//! The extraction contract sent with every scrape request.
//!
//! The prompt and JSON schema are fixed. Both `properties` and `required` are
//! derived from [`EXTRACTED_FIELDS`], and [`crate::types::ExtractedFields`] /
//! [`crate::types::CompanyProfile`] decode the same names. Adding a field means
//! touching all three.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const EXTRACTION_PROMPT: &str =
    "Extract a company description and summary of its products from this page.";

pub const COMPANY_DESCRIPTION: &str = "company_description";
pub const PRODUCT_SUMMARY: &str = "product_summary";

/// Every field the service must return, all of them required strings.
pub const EXTRACTED_FIELDS: [&str; 2] = [COMPANY_DESCRIPTION, PRODUCT_SUMMARY];

/// The `extract` block of a scrape request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractOptions {
    pub prompt: String,
    pub schema: ExtractSchema,
}

/// JSON schema describing the structured output we ask for.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: String,
}

impl PropertySchema {
    pub fn string() -> Self {
        Self {
            property_type: "string".to_string(),
        }
    }
}

impl ExtractSchema {
    /// Object schema whose properties are all required strings.
    pub fn required_strings(fields: &[&str]) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: fields
                .iter()
                .map(|f| (f.to_string(), PropertySchema::string()))
                .collect(),
            required: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// `required` must name exactly the keys of `properties`, each once.
    pub fn is_consistent(&self) -> bool {
        let mut required: Vec<&str> = self.required.iter().map(String::as_str).collect();
        required.sort_unstable();
        required.dedup();

        required.len() == self.required.len()
            && required.iter().copied().eq(self.properties.keys().map(String::as_str))
    }
}

static CONTRACT: LazyLock<ExtractOptions> = LazyLock::new(|| {
    let options = ExtractOptions {
        prompt: EXTRACTION_PROMPT.to_string(),
        schema: ExtractSchema::required_strings(&EXTRACTED_FIELDS),
    };
    debug_assert!(
        options.schema.is_consistent(),
        "extraction schema required list out of sync with properties"
    );
    options
});

/// The fixed contract embedded unchanged in every request.
pub fn extraction_contract() -> &'static ExtractOptions {
    &CONTRACT
}

//! Transport payload types
//!
//! These structs are the wire form of a submission. `None` fields are left
//! out of the serialized body entirely, for JSON and multipart encodings
//! alike.

use serde::Serialize;

/// Validated, trimmed, type-coerced species record ready for transport.
///
/// Produced by [`validate_and_normalize`](crate::validate_and_normalize);
/// construct it through the validator rather than by hand so the field
/// invariants hold.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizedPayload {
    pub common_name: String,
    pub scientific_name: String,
    /// Canonical snake_case status key
    pub conservation_status: String,
    pub population_estimate: i64,
    pub height_cm: f64,
    pub weight_g: f64,
    pub longevity_years: i64,
    /// Decimal form of the parsed year
    pub year_of_discovery: String,
    pub summary: String,
    /// `None` whenever a binary image accompanies the submission; the file
    /// takes precedence over the URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt_text: Option<String>,
    pub taxonomy: TaxonomyFields,
    pub author: AuthorFields,
}

/// The seven taxonomic rank fields of a submission
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaxonomyFields {
    pub taxonomy_kingdom: String,
    pub taxonomy_phylum: String,
    pub taxonomy_class: String,
    pub taxonomy_order: String,
    pub taxonomy_suborder: String,
    pub taxonomy_family: String,
    pub taxonomy_genus: String,
}

/// Contributor details attached to a submission
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthorFields {
    pub author_name: String,
    pub author_email: String,
    pub author_role: String,
}

/// Partial update body that appends an image to an existing record.
///
/// Sent through the update operation, optionally alongside a binary upload;
/// leave `image_url` unset when the binary carries the image.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ImageAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt_text: Option<String>,
}

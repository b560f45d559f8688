//! Data types for species API responses
//!
//! These structs mirror the API's serialized form. Fields the server may
//! leave null are `Option`s; no client-side schema validation beyond that.

use serde::Deserialize;

/// A species record as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    /// Server-assigned identifier
    pub species_id: String,
    pub common_name: String,
    pub scientific_name: Option<String>,
    /// Canonical snake_case status key
    pub conservation_status: Option<String>,
    pub population_estimate: Option<i64>,
    pub height_cm: Option<f64>,
    pub weight_g: Option<f64>,
    pub longevity_years: Option<i64>,
    /// ISO date string; reduce to a display year with
    /// [`ornitho_records::format_year`]
    pub year_of_discovery: Option<String>,
    pub summary: Option<String>,
    /// Server-assigned creation timestamp
    pub created_at: Option<String>,
    pub taxonomy: Option<TaxonomyRecord>,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

impl SpeciesRecord {
    /// First image on the record, the one the catalog views feature
    pub fn primary_image(&self) -> Option<&ImageRecord> {
        self.images.first()
    }

    /// Case-insensitive search against common and scientific names.
    /// A blank term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.common_name.to_lowercase().contains(&term)
            || self
                .scientific_name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&term))
    }
}

/// Taxonomic classification attached to a species record
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyRecord {
    pub taxonomy_id: Option<String>,
    pub taxonomy_kingdom: Option<String>,
    pub taxonomy_phylum: Option<String>,
    pub taxonomy_class: Option<String>,
    pub taxonomy_order: Option<String>,
    pub taxonomy_suborder: Option<String>,
    pub taxonomy_family: Option<String>,
    pub taxonomy_genus: Option<String>,
}

/// Contributor attached to an image
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRecord {
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_role: Option<String>,
}

/// An image attached to a species record
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub image_id: String,
    /// Absolute URL, or a server-relative `/uploads/...` path
    pub image_url: Option<String>,
    pub image_alt_text: Option<String>,
    pub created_at: Option<String>,
    pub author: Option<AuthorRecord>,
}

impl ImageRecord {
    /// Absolute URL for this image. Server-relative upload paths are
    /// resolved against the API base; absolute URLs pass through.
    pub fn resolved_url(&self, base_url: &str) -> Option<String> {
        let url = self.image_url.as_deref()?;
        if url.starts_with('/') {
            Some(format!("{}{}", base_url.trim_end_matches('/'), url))
        } else {
            Some(url.to_string())
        }
    }
}

/// Welcome/status document from the API root
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

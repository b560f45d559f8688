//! Strict validation and normalization of species drafts

use std::fmt;

use crate::draft::SpeciesDraft;
use crate::payload::{AuthorFields, NormalizedPayload, TaxonomyFields};
use crate::status::normalize_status_key;

/// A violated submission rule. `Display` renders the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequiredField,
    MissingImage,
    PopulationNotInteger,
    YearNotInteger,
    HeightNotNumber,
    WeightNotNumber,
    LongevityNotInteger,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingRequiredField => "All fields are required.",
            Self::MissingImage => "Provide an image URL or upload a file.",
            Self::PopulationNotInteger => "Population estimate must be an integer.",
            Self::YearNotInteger => "Year of discovery must be an integer.",
            Self::HeightNotNumber => "Height must be a number.",
            Self::WeightNotNumber => "Weight must be a number.",
            Self::LongevityNotInteger => "Longevity must be an integer.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a draft under the strict policy and produce its transport form.
///
/// Rules apply in a fixed order and the first violation wins: required-field
/// presence, image presence, then the numeric fields one by one. On success
/// every text field is trimmed, the numeric fields carry their parsed
/// values, the year is re-rendered as a decimal string, and the
/// conservation status is reduced to its canonical key.
///
/// `has_image_file` tells the validator a binary upload accompanies the
/// submission; the upload itself stays with the caller. When set, the
/// normalized payload omits `image_url` so the file takes precedence.
pub fn validate_and_normalize(
    draft: &SpeciesDraft,
    has_image_file: bool,
) -> Result<NormalizedPayload, ValidationError> {
    if draft
        .required_fields()
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ValidationError::MissingRequiredField);
    }

    if !has_image_file && draft.image_url.trim().is_empty() {
        return Err(ValidationError::MissingImage);
    }

    let population_estimate =
        parse_integer(&draft.population_estimate).ok_or(ValidationError::PopulationNotInteger)?;
    let year_of_discovery =
        parse_integer(&draft.year_of_discovery).ok_or(ValidationError::YearNotInteger)?;
    let height_cm = parse_number(&draft.height_cm).ok_or(ValidationError::HeightNotNumber)?;
    let weight_g = parse_number(&draft.weight_g).ok_or(ValidationError::WeightNotNumber)?;
    let longevity_years =
        parse_integer(&draft.longevity_years).ok_or(ValidationError::LongevityNotInteger)?;

    let image_url = if has_image_file {
        None
    } else {
        Some(draft.image_url.trim().to_string())
    };

    Ok(NormalizedPayload {
        common_name: draft.common_name.trim().to_string(),
        scientific_name: draft.scientific_name.trim().to_string(),
        conservation_status: normalize_status_key(&draft.conservation_status),
        population_estimate,
        height_cm,
        weight_g,
        longevity_years,
        year_of_discovery: year_of_discovery.to_string(),
        summary: draft.summary.trim().to_string(),
        image_url,
        image_alt_text: Some(draft.image_alt_text.trim().to_string()),
        taxonomy: TaxonomyFields {
            taxonomy_kingdom: draft.taxonomy_kingdom.trim().to_string(),
            taxonomy_phylum: draft.taxonomy_phylum.trim().to_string(),
            taxonomy_class: draft.taxonomy_class.trim().to_string(),
            taxonomy_order: draft.taxonomy_order.trim().to_string(),
            taxonomy_suborder: draft.taxonomy_suborder.trim().to_string(),
            taxonomy_family: draft.taxonomy_family.trim().to_string(),
            taxonomy_genus: draft.taxonomy_genus.trim().to_string(),
        },
        author: AuthorFields {
            author_name: draft.author_name.trim().to_string(),
            author_email: draft.author_email.trim().to_string(),
            author_role: draft.author_role.trim().to_string(),
        },
    })
}

fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse().ok().filter(|n: &f64| n.is_finite())
}

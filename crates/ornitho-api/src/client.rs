//! Species API HTTP client

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use ornitho_records::{ImageAttachment, NormalizedPayload};

use crate::error::{ApiError, Result};
use crate::params::ListParams;
use crate::types::{ApiStatus, SpeciesRecord};

/// Multipart field name the server expects the binary under
const IMAGE_PART: &str = "image";

/// Configuration for [`SpeciesClient`], injected at startup
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Environment variable consulted by [`from_env`](Self::from_env)
    pub const BASE_URL_ENV: &'static str = "SPECIES_API_BASE_URL";

    /// Read the base URL from the environment, falling back to the local
    /// development server.
    pub fn from_env() -> Self {
        let base_url = std::env::var(Self::BASE_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| SpeciesClient::DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: SpeciesClient::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// An image binary passed through verbatim as the upload part
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub mime_type: Option<String>,
}

/// Client for the Ornithological Species API
///
/// One outstanding request per call; no retries, no caching. Failed
/// requests surface once to the caller, who may resubmit.
pub struct SpeciesClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpeciesClient {
    /// Base URL of a local development server
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";

    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List species, optionally sorted and filtered.
    ///
    /// Sort and filter parameters pass through to the server unmodified;
    /// unset ones are omitted from the request.
    pub async fn list_species(&self, params: &ListParams) -> Result<Vec<SpeciesRecord>> {
        let url = format!("{}/api/species{}", self.base_url, params.to_query_string());
        debug!(%url, "listing species");
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// Fetch a single species by id.
    ///
    /// An unknown id surfaces as the generic request failure; there is no
    /// distinct not-found error kind.
    pub async fn get_species(&self, id: &str) -> Result<SpeciesRecord> {
        let url = format!(
            "{}/api/species/{}",
            self.base_url,
            urlencoding::encode(id)
        );
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// Create a species record.
    ///
    /// Encoded as multipart when an image binary is attached, JSON
    /// otherwise.
    pub async fn create_species(
        &self,
        payload: &NormalizedPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SpeciesRecord> {
        let url = format!("{}/api/species", self.base_url);
        debug!(%url, multipart = image.is_some(), "creating species");
        let request = self.http.post(&url);
        let response = match image {
            Some(upload) => {
                request
                    .multipart(multipart_form(payload, upload)?)
                    .send()
                    .await?
            }
            None => request.json(payload).send().await?,
        };
        read_json(response).await
    }

    /// Update a species record in place, with the same encoding rule as
    /// create. `payload` may be a full [`NormalizedPayload`] or a partial
    /// body such as [`ImageAttachment`].
    pub async fn update_species<T: Serialize>(
        &self,
        id: &str,
        payload: &T,
        image: Option<&ImageUpload>,
    ) -> Result<SpeciesRecord> {
        let url = format!(
            "{}/api/species/{}",
            self.base_url,
            urlencoding::encode(id)
        );
        debug!(%url, multipart = image.is_some(), "updating species");
        let request = self.http.put(&url);
        let response = match image {
            Some(upload) => {
                request
                    .multipart(multipart_form(payload, upload)?)
                    .send()
                    .await?
            }
            None => request.json(payload).send().await?,
        };
        read_json(response).await
    }

    /// Append an image to an existing record through the update operation
    pub async fn attach_image(
        &self,
        id: &str,
        attachment: &ImageAttachment,
        image: Option<&ImageUpload>,
    ) -> Result<SpeciesRecord> {
        self.update_species(id, attachment, image).await
    }

    /// Welcome/status document from the API root
    pub async fn api_status(&self) -> Result<ApiStatus> {
        let url = format!("{}/", self.base_url);
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }
}

impl Default for SpeciesClient {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

/// Unwrap a response: non-success statuses carry the body text as the
/// failure message, success bodies are parsed as JSON and returned as-is.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!(%status, "species API request failed");
        let message = if body.trim().is_empty() {
            "Request failed".to_string()
        } else {
            body
        };
        return Err(ApiError::Api(message));
    }
    serde_json::from_str(&body).map_err(ApiError::Json)
}

/// Build the multipart body for a payload plus an image binary: every
/// scalar payload field becomes a text part, the binary goes last under the
/// fixed part name.
fn multipart_form<T: Serialize>(
    payload: &T,
    upload: &ImageUpload,
) -> Result<reqwest::multipart::Form> {
    let value = serde_json::to_value(payload)?;
    let mut form = reqwest::multipart::Form::new();
    for (name, text) in scalar_fields(&value) {
        form = form.text(name, text);
    }

    let mut part = reqwest::multipart::Part::bytes(upload.content.clone())
        .file_name(upload.file_name.clone());
    if let Some(mime) = upload.mime_type.as_deref() {
        part = part.mime_str(mime)?;
    }
    Ok(form.part(IMAGE_PART, part))
}

/// Scalar fields of a serialized payload. Nested objects, arrays, nulls,
/// and empty strings do not belong in a multipart body.
fn scalar_fields(value: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = value else {
        return Vec::new();
    };
    let mut fields = Vec::new();
    for (name, entry) in map {
        match entry {
            Value::String(text) if !text.is_empty() => {
                fields.push((name.clone(), text.clone()));
            }
            Value::Number(number) => fields.push((name.clone(), number.to_string())),
            Value::Bool(flag) => fields.push((name.clone(), flag.to_string())),
            _ => {}
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_fields_keep_scalars_only() {
        let value = json!({
            "common_name": "Kea",
            "population_estimate": 7000,
            "height_cm": 48.5,
            "taxonomy": {"taxonomy_genus": "Nestor"},
            "images": [],
            "summary": "",
            "image_url": null,
            "featured": true
        });
        let mut fields = scalar_fields(&value);
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("common_name".to_string(), "Kea".to_string()),
                ("featured".to_string(), "true".to_string()),
                ("height_cm".to_string(), "48.5".to_string()),
                ("population_estimate".to_string(), "7000".to_string()),
            ]
        );
    }

    #[test]
    fn test_scalar_fields_of_non_object() {
        assert!(scalar_fields(&json!("just text")).is_empty());
    }

    #[test]
    fn test_multipart_form_builds_for_partial_payload() {
        let attachment = ImageAttachment {
            image_url: None,
            image_alt_text: Some("Alpine parrot".to_string()),
        };
        let upload = ImageUpload {
            file_name: "kea.jpg".to_string(),
            content: vec![0xFF, 0xD8, 0xFF],
            mime_type: Some("image/jpeg".to_string()),
        };
        assert!(multipart_form(&attachment, &upload).is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_is_tolerated() {
        let client = SpeciesClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:5000/".to_string(),
            ..ApiConfig::default()
        });
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_config_default_targets_loopback() {
        assert_eq!(ApiConfig::default().base_url, SpeciesClient::DEFAULT_BASE_URL);
    }
}

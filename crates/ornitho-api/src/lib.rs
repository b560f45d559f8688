//! Rust client for the Ornithological Species API
//!
//! This crate provides typed access to the species catalog's REST API:
//! listing and fetching species records, and creating or updating them with
//! JSON or multipart bodies depending on whether an image binary is
//! attached.
//!
//! Payloads come from the `ornitho-records` validator, so everything sent
//! through this client is already trimmed, type-coerced, and
//! status-normalized.
//!
//! # Example
//!
//! ```no_run
//! use ornitho_api::{ApiConfig, ListParams, SortOrder, SpeciesClient};
//!
//! # async fn example() -> ornitho_api::Result<()> {
//! let client = SpeciesClient::new(&ApiConfig::from_env());
//!
//! // Most populous species first
//! let params = ListParams::sorted_by("population_estimate", SortOrder::Desc);
//! for species in client.list_species(&params).await? {
//!     println!("{}", species.common_name);
//! }
//!
//! let kea = client.get_species("some-species-id").await?;
//! println!("{:?}", kea.conservation_status);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /` - API status and welcome message
//! - `GET /api/species` - List species with optional sorting and filters
//! - `GET /api/species/{id}` - Get a single species record
//! - `POST /api/species` - Create a species (JSON or multipart)
//! - `PUT /api/species/{id}` - Update a species, optionally replacing its
//!   primary image (JSON or multipart)

mod client;
mod error;
mod params;
mod types;

pub use client::{ApiConfig, ImageUpload, SpeciesClient};
pub use error::{ApiError, Result};
pub use params::{ListParams, SortOrder};
pub use types::{ApiStatus, AuthorRecord, ImageRecord, SpeciesRecord, TaxonomyRecord};

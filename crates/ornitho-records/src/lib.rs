//! Domain logic for the ornithological species catalog
//!
//! Pure, synchronous building blocks shared by catalog frontends:
//! conservation status normalization, year display formatting, and the
//! strict validation applied to a species draft before it is handed to the
//! API client.
//!
//! # Example
//!
//! ```
//! use ornitho_records::{validate_and_normalize, SpeciesDraft};
//!
//! let draft = SpeciesDraft {
//!     common_name: "Mountain Bluebird".to_string(),
//!     conservation_status: "Least Concern".to_string(),
//!     ..SpeciesDraft::default()
//! };
//!
//! // An incomplete draft never reaches the network.
//! let err = validate_and_normalize(&draft, false).unwrap_err();
//! assert_eq!(err.to_string(), "All fields are required.");
//! ```

mod draft;
mod payload;
mod status;
mod validate;
mod year;

pub use draft::SpeciesDraft;
pub use payload::{AuthorFields, ImageAttachment, NormalizedPayload, TaxonomyFields};
pub use status::{normalize_status_key, status_class, status_label, ConservationStatus};
pub use validate::{validate_and_normalize, ValidationError};
pub use year::format_year;

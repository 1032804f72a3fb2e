//! Declarative enum definitions.
//!
//! Definitions are read from TOML, validated, and handed to the core
//! generator:
//!
//! ```toml
//! strict = true
//!
//! [[enum]]
//! attribute = "Category"
//! labels = ["PeerReviewed", "NonPeerReviewed", "CaseStudy"]
//! ```

mod definition;
mod error;
mod validate;

pub use definition::{EnumConfig, EnumDefinition};
pub use error::ConfigError;

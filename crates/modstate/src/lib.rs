//! ## Crate layout
//! - `core`: generator, inflection helpers, accessor tables, registry, and
//!   the event sink.
//! - `config`: TOML enum definitions (enabled by the `config` feature).
//!
//! The `prelude` carries the vocabulary a host record type needs to define
//! and call enum accessors.

pub use modstate_core as core;

#[cfg(feature = "config")]
pub use modstate_config as config;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use modstate_core::{Error, accessor::define_enum};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;

    #[cfg(feature = "config")]
    pub use crate::config::{EnumConfig, EnumDefinition};
}

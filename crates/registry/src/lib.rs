//! Static reference data for map art conversion.
//!
//! - [`colours`] - colour sets, their candidate blocks and per-version validity
//! - [`versions`] - supported game versions, oldest first
//!
//! Both registries are immutable once built and are shared behind [`std::sync::Arc`]
//! by the selection and session layers.

pub mod colours;
pub mod error;
pub mod loader;
pub mod spec;
pub mod versions;

pub use colours::{BlockDef, ColourRegistry, ColourSetDef, Tone, Tones, VersionedBlock};
pub use error::{RegistryError, Result};
pub use loader::{builtin_colours, builtin_versions};
pub use versions::{SupportedVersion, SupportedVersions};

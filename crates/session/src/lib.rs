//! The map art controller.
//!
//! [`MapartSession`] owns everything a front end edits between renders: the
//! block selection (through its reconciler), the target version, the preset
//! library and the [`MapSettings`]. Front ends call one method per UI event
//! and persist [`SessionState`] between runs.

pub mod error;
pub mod session;
pub mod settings;
pub mod state;

pub use error::{Result, SessionError};
pub use session::{LinkOutcome, MapartSession};
pub use settings::{
	BackgroundColourMode, CropMode, CropSettings, DitherMethod, MapMode, MapSettings, Preprocessing, StaircaseMode, WhereSupportBlocks,
};
pub use state::SessionState;

//! Store - External record format and conversion
//!
//! This crate owns the record shape exchanged with the host form and the
//! backend: per-side `layoutSections` in meters. Loading reconstructs a
//! [`panel_model::SideState`] from a flat section list; emitting derives the
//! section list back from the current geometry. Emission is synchronous;
//! staging and actually submitting records is the host's concern.

mod convert;
mod error;
mod record;

pub use convert::*;
pub use error::*;
pub use record::*;

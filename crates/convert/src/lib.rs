//! Conversion between Mihon and Kotatsu libraries.
//!
//! The two applications disagree on nearly everything except titles and
//! URLs: Mihon identifies sources by a 64-bit id derived from the
//! extension's name, Kotatsu by a string key; Mihon files an entry under
//! any number of categories, Kotatsu under one. [`sources`] bridges the
//! identifiers and [`mihon_to_kotatsu`] / [`kotatsu_to_mihon`] map the
//! schemas. Both directions are lossy; see the individual functions.

pub mod error;
mod forward;
mod ids;
mod reverse;
pub mod sources;
mod state;

pub use crate::forward::mihon_to_kotatsu;
pub use crate::ids::IdSequence;
pub use crate::reverse::{MapOptions, kotatsu_to_mihon};
pub use crate::sources::{ResolvedSource, Resolution, SourceResolver, SourceTarget, derive_source_id};

//! Protobuf wire-format primitives.
//!
//! This is deliberately *not* a protobuf implementation: there is no schema
//! compiler and no reflection. It provides the handful of building blocks that
//! hand-written message types need:
//!
//! - [`Tag`] and [`WireType`], the per-field key,
//! - [`Reader`], a cursor over one (sub-)buffer with typed, wire-type-checked
//!   field readers,
//! - [`Writer`], an append-only buffer that omits zero-valued singular fields,
//! - [`Message`], the trait tying a type's field table to the two above.
//!
//! Nested messages are always decoded from their own sub-slice with a fresh
//! [`Reader`], and always encoded into their own buffer before the parent
//! frames them, so no cursor is ever shared across nesting levels.

pub mod error;
mod message;
mod reader;
mod tag;
pub mod varint;
mod writer;

pub use crate::message::Message;
pub use crate::reader::Reader;
pub use crate::tag::{Tag, WireType};
pub use crate::writer::Writer;

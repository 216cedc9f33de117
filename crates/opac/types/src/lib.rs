//! OPAC Membership Domain Types
//!
//! This crate defines the domain types for the OPAC membership registry—
//! the librarian-facing system that tracks library members and their
//! membership fees.
//!
//! # Key Concepts
//!
//! - **Member**: a registered library patron with identity, contact info,
//!   and age. Identity is an opaque string newtype (`MemberId`).
//! - **Fee tier**: membership fees are a pure function of age. The schedule
//!   lives in exactly one place (`FeeTier`) and is consumed by both the
//!   registration and age-adjustment paths.
//! - **Presence-tagged updates**: `MemberUpdate` carries `Option` per field,
//!   so "not supplied" is never conflated with an empty string or zero age.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`. IDs use the
//! newtype pattern and implement `Display`, `generate()`, and `new()`.

#![deny(unsafe_code)]

mod errors;
mod fees;
mod member;

pub use errors::*;
pub use fees::*;
pub use member::*;

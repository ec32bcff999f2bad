//! Core domain logic for bumpcheck
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ChangedFile`, `FileRule`, `Versions`)
//! - `services/` - Matcher, extractor and validator stages
//! - `ports/` - Trait definitions for injected collaborators

pub mod models;
pub mod ports;
pub mod services;

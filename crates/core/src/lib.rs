//! Verge VR Core - Shared types library.
//!
//! This crate provides common types used across the Verge VR components:
//! - `storefront` - Client-side interactivity for the landing page
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Verge VR Storefront library.
//!
//! Client-side interactivity for the Verge VR landing page: the shopping
//! cart store with its storage, rendering, and notification collaborators,
//! plus the product catalog and newsletter signup logic.
//!
//! There is no server in this system. The embedding UI layer invokes the
//! operations here synchronously from its event handlers; every operation
//! runs to completion before the next one starts.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod newsletter;
pub mod notify;
pub mod render;
pub mod storage;

//! Core types and errors for the IntelMQ Fody API client.
//!
//! This crate provides the foundational types used across the Fody library:
//!
//! - **Types**: handler whitelist, query parameters, organization ID lists
//!   and the opaque record aliases returned by the backend
//! - **Errors**: the full error taxonomy in [`FodyError`]
//!
//! # Example
//!
//! ```rust
//! use fody_core::{Handler, Query};
//!
//! let handler: Handler = "contactdb".parse().unwrap();
//! let query = Query::new().param("asn", "3320");
//!
//! assert_eq!(handler.as_str(), "contactdb");
//! assert_eq!(query.get("asn"), Some("3320"));
//! ```

#![doc(html_root_url = "https://docs.rs/fody-core/0.1.0")]

mod error;
pub mod types;

pub use error::{FodyError, Result};
pub use types::*;

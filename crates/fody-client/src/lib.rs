//! HTTP client for the IntelMQ Fody backend.
//!
//! This crate provides the main [`FodyClient`] for querying the contact
//! database, event database and ticket database exposed by Fody.

#![doc(html_root_url = "https://docs.rs/fody-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{FodyClient, FodyClientBuilder};
pub use config::*;
pub use fody_core::{FodyError, Result};

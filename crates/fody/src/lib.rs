//! Rust client for the IntelMQ Fody backend.
//!
//! Fody fronts the IntelMQ contact database, event database and ticket
//! database. This crate wraps its REST API in typed calls.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fody::FodyClient;
//!
//! #[tokio::main]
//! async fn main() -> fody::Result<()> {
//!     let client = FodyClient::connect("https://fody.example.com", "alice", "secret").await?;
//!
//!     // Who is responsible for this network?
//!     for contact in client.contactdb().search_cidr("192.0.2.0/24").await? {
//!         println!("{contact}");
//!     }
//!
//!     // What did we send with a ticket?
//!     let events = client.check_ticket()
//!         .events("20240101-10000001")
//!         .limit(10)
//!         .send()
//!         .await?;
//!     println!("{events}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/fody/0.1.0")]

// Re-export core types
pub use fody_core::*;

// Re-export client
pub use fody_client::{api, ClientConfig, FodyClient, FodyClientBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;

//! Opaque records returned verbatim by the backend.

/// A contact/organisation record from the contact database
pub type Contact = serde_json::Value;

/// An event record
pub type Event = serde_json::Value;

/// A ticket record
pub type Ticket = serde_json::Value;

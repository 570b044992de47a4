mod common;
mod contact;
mod handler;
mod query;

pub use common::*;
pub use contact::*;
pub use handler::*;
pub use query::*;

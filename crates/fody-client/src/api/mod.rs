//! API endpoint modules.

mod checkticket;
mod contactdb;
mod events;
mod tickets;

pub use checkticket::{CheckTicketApi, TicketEventsRequestBuilder};
pub use contactdb::ContactDbApi;
pub use events::EventsApi;
pub use tickets::TicketsApi;

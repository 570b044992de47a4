//! Ticket/event cross-check endpoints.

use crate::FodyClient;
use fody_core::{Handler, Query, Result};
use serde_json::Value;

/// Ticket/event cross-check endpoints
pub struct CheckTicketApi<'a> {
    client: &'a FodyClient,
}

impl<'a> CheckTicketApi<'a> {
    pub(crate) const fn new(client: &'a FodyClient) -> Self {
        Self { client }
    }

    /// IDs of the events that were sent out with a ticket
    pub async fn event_ids(&self, ticket_number: &str) -> Result<Value> {
        let query = Query::new().param("ticket", ticket_number);
        self.client
            .dispatch(Handler::CheckTicket, "getEventIDsForTicket", &query)
            .await
    }

    /// Events that were sent out with a ticket
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let events = client.check_ticket()
    ///     .events("20240101-10000001")
    ///     .limit(50)
    ///     .send()
    ///     .await?;
    /// ```
    #[must_use]
    pub fn events(&self, ticket_number: impl Into<String>) -> TicketEventsRequestBuilder<'a> {
        TicketEventsRequestBuilder::new(self.client, ticket_number.into())
    }

    /// Number of the most recently issued ticket
    pub async fn last_ticket_number(&self) -> Result<Value> {
        self.client
            .dispatch(Handler::CheckTicket, "getLastTicketNumber", &Query::new())
            .await
    }
}

/// Builder for events-for-ticket requests
pub struct TicketEventsRequestBuilder<'a> {
    client: &'a FodyClient,
    ticket_number: String,
    limit: u32,
}

impl<'a> TicketEventsRequestBuilder<'a> {
    const fn new(client: &'a FodyClient, ticket_number: String) -> Self {
        Self {
            client,
            ticket_number,
            limit: 0,
        }
    }

    /// Maximum number of events to return (0 means no limit)
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Value> {
        let query = Query::new()
            .param("ticket", &self.ticket_number)
            .param("limit", self.limit);

        self.client
            .dispatch(Handler::CheckTicket, "getEventsForTicket", &query)
            .await
    }
}

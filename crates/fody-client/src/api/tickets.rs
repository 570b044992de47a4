//! Ticket database endpoints.

use crate::FodyClient;
use fody_core::{Handler, Query, Result, Subquery, Ticket};
use serde_json::Value;
use std::fmt::Display;

/// Ticket database endpoints
pub struct TicketsApi<'a> {
    client: &'a FodyClient,
}

impl<'a> TicketsApi<'a> {
    pub(crate) const fn new(client: &'a FodyClient) -> Self {
        Self { client }
    }

    /// Fetch a ticket by ID, returned exactly as the backend sends it
    pub async fn get(&self, id: impl Display) -> Result<Ticket> {
        self.client.get_by_id("tickets", &id.to_string()).await
    }

    /// List the subqueries the ticket search understands
    pub async fn subqueries(&self) -> Result<Value> {
        self.client
            .dispatch(Handler::Tickets, "subqueries", &Query::new())
            .await
    }

    /// Search tickets
    pub async fn search(&self, subquery: &Subquery) -> Result<Value> {
        self.client
            .dispatch(Handler::Tickets, "search", subquery)
            .await
    }

    /// Aggregated statistics for the tickets matching `subquery`
    pub async fn stats(&self, subquery: &Subquery) -> Result<Value> {
        self.client
            .dispatch(Handler::Tickets, "stats", subquery)
            .await
    }

    /// Recipient a ticket was sent to
    pub async fn recipient(&self, ticket_number: &str) -> Result<Value> {
        let query = Query::new().param("ticketnumber", ticket_number);
        self.client
            .dispatch(Handler::Tickets, "getRecipient", &query)
            .await
    }
}

//! Event database endpoints.

use crate::FodyClient;
use fody_core::{Event, FodyError, Handler, Query, Result, Subquery};
use serde_json::Value;
use std::fmt::Display;

/// Event database endpoints
pub struct EventsApi<'a> {
    client: &'a FodyClient,
}

impl<'a> EventsApi<'a> {
    pub(crate) const fn new(client: &'a FodyClient) -> Self {
        Self { client }
    }

    /// Fetch a single event by ID.
    ///
    /// The backend answers with a one-element array; the element is returned.
    /// An empty array is reported as a decode error.
    pub async fn get(&self, id: impl Display) -> Result<Event> {
        let id = id.to_string();
        let events: Vec<Event> = self.client.get_by_id("events", &id).await?;
        events
            .into_iter()
            .next()
            .ok_or_else(|| FodyError::Decode(format!("no event returned for id {id}")))
    }

    /// List the subqueries the event search understands
    pub async fn subqueries(&self) -> Result<Value> {
        self.client
            .dispatch(Handler::Events, "subqueries", &Query::new())
            .await
    }

    /// Search events
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let query = Subquery::new().param("time-observation_after", "2024-01-01");
    /// let events = client.events().search(&query).await?;
    /// ```
    pub async fn search(&self, subquery: &Subquery) -> Result<Value> {
        self.client
            .dispatch(Handler::Events, "search", subquery)
            .await
    }

    /// Aggregated statistics for the events matching `subquery`
    pub async fn stats(&self, subquery: &Subquery) -> Result<Value> {
        self.client
            .dispatch(Handler::Events, "stats", subquery)
            .await
    }

    /// Export the events matching `subquery`
    pub async fn export(&self, subquery: &Subquery) -> Result<Value> {
        self.client
            .dispatch(Handler::Events, "export", subquery)
            .await
    }
}

use crate::FodyError;
use std::str::FromStr;

/// Top-level API category on the Fody backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Contact database lookups
    ContactDb,
    /// Event database
    Events,
    /// Ticket database
    Tickets,
    /// Ticket/event cross checks
    CheckTicket,
}

impl Handler {
    /// All handlers the backend exposes
    pub const ALL: [Self; 4] = [Self::ContactDb, Self::Events, Self::Tickets, Self::CheckTicket];

    /// Path segment used under `/api/`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContactDb => "contactdb",
            Self::Events => "events",
            Self::Tickets => "tickets",
            Self::CheckTicket => "checkticket",
        }
    }
}

impl std::fmt::Display for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handler {
    type Err = FodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|handler| handler.as_str() == s)
            .ok_or_else(|| FodyError::UnknownHandler(s.to_string()))
    }
}

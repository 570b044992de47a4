//! Contact database endpoints.

use crate::FodyClient;
use fody_core::{Contact, CountryCode, Handler, OrgIdList, Query, Result};
use serde_json::Value;

/// Contact database endpoints.
///
/// Every search returns a list of organisation IDs which is then resolved
/// into full contact records, one request per match (see
/// [`FodyClient::resolve_contacts`]).
pub struct ContactDbApi<'a> {
    client: &'a FodyClient,
}

impl<'a> ContactDbApi<'a> {
    pub(crate) const fn new(client: &'a FodyClient) -> Self {
        Self { client }
    }

    /// Check that the contact database is reachable
    pub async fn ping(&self) -> Result<Value> {
        self.client
            .dispatch(Handler::ContactDb, "ping", &Query::new())
            .await
    }

    /// Find contacts responsible for an autonomous system
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let contacts = client.contactdb().search_asn("3320").await?;
    /// ```
    pub async fn search_asn(&self, asn: &str) -> Result<Vec<Contact>> {
        self.search("searchasn", "asn", asn).await
    }

    /// Find contacts by organisation name
    pub async fn search_org(&self, name: &str) -> Result<Vec<Contact>> {
        self.search("searchorg", "name", name).await
    }

    /// Find contacts by email address
    pub async fn search_email(&self, email: &str) -> Result<Vec<Contact>> {
        self.search("searchcontact", "email", email).await
    }

    /// Find contacts responsible for a network in CIDR notation
    pub async fn search_cidr(&self, cidr: &str) -> Result<Vec<Contact>> {
        self.search("searchcidr", "address", cidr).await
    }

    /// Find contacts responsible for a single IP address
    pub async fn search_ip(&self, ip: &str) -> Result<Vec<Contact>> {
        self.search_cidr(ip).await
    }

    /// Find contacts responsible for a domain name
    pub async fn search_fqdn(&self, domain: &str) -> Result<Vec<Contact>> {
        self.search("searchfqdn", "domain", domain).await
    }

    /// Find national CERT contacts by two or three letter country code.
    ///
    /// The code is validated before any request is sent.
    pub async fn search_national(&self, country_code: &str) -> Result<Vec<Contact>> {
        let country_code = CountryCode::new(country_code)?;
        self.search("searchnational", "countrycode", country_code.as_str())
            .await
    }

    async fn search(&self, endpoint: &str, key: &str, value: &str) -> Result<Vec<Contact>> {
        let query = Query::new().param(key, value);
        let ids: OrgIdList = self
            .client
            .dispatch(Handler::ContactDb, endpoint, &query)
            .await?;
        self.client.resolve_contacts(&ids).await
    }
}

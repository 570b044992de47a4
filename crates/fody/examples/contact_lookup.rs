//! Look up the contacts responsible for an ASN or network.
//!
//! Run with: cargo run -p fody --example contact_lookup -- 3320
//!
//! Set FODY_URL and either FODY_USERNAME/FODY_PASSWORD or FODY_TOKEN before
//! running.

use fody::{ClientConfig, FodyClientBuilder, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;
    let client = FodyClientBuilder::from_config(&config).connect().await?;

    let target = std::env::args().nth(1).unwrap_or_else(|| "3320".to_string());

    println!("=== Contact DB ===");
    println!("{}", client.contactdb().ping().await?);
    println!();

    let contacts = if target.parse::<u32>().is_ok() {
        client.contactdb().search_asn(&target).await?
    } else {
        client.contactdb().search_cidr(&target).await?
    };

    println!("=== Contacts for {target} ===");
    for contact in &contacts {
        println!("{}", serde_json::to_string_pretty(contact)?);
    }
    if contacts.is_empty() {
        println!("  (none)");
    }
    println!();

    println!("=== Last ticket ===");
    println!("{}", client.check_ticket().last_ticket_number().await?);

    client.close();
    Ok(())
}

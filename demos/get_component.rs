//! Fetch one component by id, with deployment attributes included.
//!
//! Run:
//! `BLOCKCHAIN_URL=<url> BLOCKCHAIN_AUTH_TYPE=noauth cargo run --example get_component -- <component-id>`

use ibp_client::{ATTRS_INCLUDED, GetComponentOptions, IbpClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let id = match std::env::args().nth(1) {
        Some(value) => value,
        None => {
            eprintln!("Pass a component id as the first argument.");
            std::process::exit(2);
        }
    };

    let client = IbpClient::from_env()?;
    let options = GetComponentOptions::new(id).with_deployment_attrs(ATTRS_INCLUDED);
    let response = client.get_component(&options).await?;

    println!("{}", serde_json::to_string_pretty(&response.result)?);
    Ok(())
}

//! Create a CA with a minimal registry: one enroll identity, unlimited
//! enrollments.
//!
//! Run:
//! `BLOCKCHAIN_URL=<url> BLOCKCHAIN_AUTH_TYPE=noauth cargo run --example create_ca`

use ibp_client::models::{
    ConfigCaCreate, ConfigCaRegistry, ConfigCaRegistryIdentity, CreateCaBodyConfigOverride,
};
use ibp_client::{CreateCaOptions, IbpClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = IbpClient::from_env()?;

    let config_override = CreateCaBodyConfigOverride {
        ca: ConfigCaCreate {
            registry: ConfigCaRegistry {
                maxenrollments: -1,
                identities: Some(vec![ConfigCaRegistryIdentity {
                    name: "admin".to_owned(),
                    pass: "password".to_owned(),
                    identity_type: "client".to_owned(),
                    ..ConfigCaRegistryIdentity::default()
                }]),
            },
            ..ConfigCaCreate::default()
        },
        tlsca: None,
    };

    let options = CreateCaOptions::new("My CA", config_override);
    let response = client.create_ca(&options).await?;

    println!(
        "created CA {} ({})",
        response.result.display_name.as_deref().unwrap_or("?"),
        response.result.id.as_deref().unwrap_or("?"),
    );
    Ok(())
}

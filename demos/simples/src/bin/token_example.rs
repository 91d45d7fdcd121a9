use baokim_client::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;

    // Sandbox, with a five minute token
    let overrides = ConfigOverrides::new().with_is_dev(true).with_token_expire(300);
    let token = client.get_token(Some(&overrides), None).await?;
    info!("Token: {}", token);

    // Same payload and still valid: reused
    let again = client.get_token(None, None).await?;
    info!("Reused: {}", again == token);

    // Different payload: reminted
    let other = client.get_token(None, Some(&json!({"id": 1}))).await?;
    info!("Reminted: {}", other != token);

    Ok(())
}

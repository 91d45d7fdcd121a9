use baokim_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();
    info!("Starting bank list example");

    // Credentials and environment come from BAOKIM_* variables or .env
    let client = Client::from_env()?;

    let banks = client
        .get_bank_list(&BankListRequest::new().with_lb_available(true).with_limit(20))
        .await?;
    info!("Banks: {}", serde_json::to_string_pretty(&banks)?);

    let methods = client.get_payment_methods().await?;
    info!("Payment methods: {}", serde_json::to_string_pretty(&methods)?);

    Ok(())
}

use baokim_client::prelude::*;
use chrono::Utc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting create order example");

    let client = Client::from_env()?;

    let mrc_order_id = format!("DEMO-{}", nanoid::nanoid!(10));
    let order = CreateOrderRequest::new(
        mrc_order_id.as_str(),
        50_000,
        "Demo order",
        "https://shop.example/success",
    )
    .with_lang(Language::En)
    .with_accept_bank(true)
    .with_customer_email("buyer@example.com");

    let created = client.create_order(&order).await?;
    info!("Order created: {}", serde_json::to_string_pretty(&created)?);

    let detail = client
        .get_order_detail(&OrderDetailRequest::by_mrc_order_id(mrc_order_id.as_str()))
        .await?;
    info!("Order detail: {}", serde_json::to_string_pretty(&detail)?);

    let today = Utc::now().date_naive();
    let orders = client
        .get_order_list(&OrderListRequest::new().with_date_range(today, today).with_per_page(10))
        .await?;
    info!("Orders today: {}", serde_json::to_string_pretty(&orders)?);

    match created["data"]["order_id"].as_u64() {
        Some(id) => {
            let cancelled = client.cancel_order(&CancelOrderRequest::new(id)).await?;
            info!("Order cancelled: {}", cancelled);
        }
        None => warn!("Response carried no order id, skipping cancel"),
    }

    Ok(())
}

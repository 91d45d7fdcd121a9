use assert_json_diff::assert_json_eq;
use baokim_client::error::AppError;
use baokim_client::model::requests::{
    BankListRequest, CancelOrderRequest, CreateOrderRequest, Language, OrderDetailRequest,
    OrderListRequest,
};
use serde_json::json;

#[test]
fn test_create_order_full_form() {
    let order = CreateOrderRequest::new("ORD-1", 150_000, "Invoice #1", "https://shop.example/ok")
        .with_merchant_id(40002)
        .with_url_detail("https://shop.example/order/1")
        .with_lang(Language::En)
        .with_bpm_id(295)
        .with_accept_bank(true)
        .with_accept_cc(false)
        .with_accept_qrpay(false)
        .with_webhooks("https://shop.example/hook")
        .with_customer_email("buyer@example.com")
        .with_customer_phone("0900000000")
        .with_customer_name("Nguyen Van A")
        .with_customer_address("1 Ly Thuong Kiet, Ha Noi");

    assert!(order.validate().is_ok());
    assert_json_eq!(
        serde_json::to_value(&order).unwrap(),
        json!({
            "mrc_order_id": "ORD-1",
            "total_amount": 150000,
            "description": "Invoice #1",
            "url_success": "https://shop.example/ok",
            "merchant_id": 40002,
            "url_detail": "https://shop.example/order/1",
            "lang": "en",
            "bpm_id": 295,
            "accept_bank": 1,
            "accept_cc": 0,
            "accept_qrpay": 0,
            "webhooks": "https://shop.example/hook",
            "customer_email": "buyer@example.com",
            "customer_phone": "0900000000",
            "customer_name": "Nguyen Van A",
            "customer_address": "1 Ly Thuong Kiet, Ha Noi"
        })
    );
}

#[test]
fn test_create_order_minimal_form_has_only_required_fields() {
    let order = CreateOrderRequest::new("ORD-2", 10_000, "Top up", "https://shop.example/ok");
    assert_json_eq!(
        serde_json::to_value(&order).unwrap(),
        json!({
            "mrc_order_id": "ORD-2",
            "total_amount": 10000,
            "description": "Top up",
            "url_success": "https://shop.example/ok"
        })
    );
}

#[test]
fn test_create_order_reports_first_missing_field() {
    let cases = [
        (CreateOrderRequest::default(), "mrc_order_id"),
        (
            CreateOrderRequest {
                total_amount: None,
                ..CreateOrderRequest::new("A", 1, "d", "u")
            },
            "total_amount",
        ),
        (
            CreateOrderRequest {
                description: None,
                ..CreateOrderRequest::new("A", 1, "d", "u")
            },
            "description",
        ),
        (
            CreateOrderRequest {
                url_success: None,
                ..CreateOrderRequest::new("A", 1, "d", "u")
            },
            "url_success",
        ),
    ];

    for (order, field) in cases {
        match order.validate() {
            Err(AppError::MissingField(missing)) => assert_eq!(missing, field),
            other => panic!("expected missing {field}, got {other:?}"),
        }
    }
}

#[test]
fn test_bank_list_display_is_json() {
    let request = BankListRequest::new().with_lb_available(true).with_offset(0);
    assert_eq!(request.to_string(), r#"{"lb_available":1,"offset":0}"#);
}

#[test]
fn test_detail_and_cancel_shapes() {
    assert_json_eq!(
        serde_json::to_value(OrderDetailRequest::by_mrc_order_id("ORD-1")).unwrap(),
        json!({"mrc_order_id": "ORD-1"})
    );
    assert_json_eq!(
        serde_json::to_value(OrderDetailRequest::by_id(12345)).unwrap(),
        json!({"id": 12345})
    );
    assert_json_eq!(
        serde_json::to_value(CancelOrderRequest::new(12345)).unwrap(),
        json!({"id": 12345})
    );
}

#[test]
fn test_order_list_all_filters() {
    let request = OrderListRequest::new()
        .with_mrc_order_id("ORD-1")
        .with_txn_id(77)
        .with_stat(1)
        .with_per_page(20)
        .with_page(2);
    assert!(request.validate().is_ok());
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"mrc_order_id": "ORD-1", "txn_id": 77, "stat": 1, "per_page": 20, "page": 2})
    );
}

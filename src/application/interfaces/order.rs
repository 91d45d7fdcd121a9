use crate::error::BaokimResult;
use crate::model::requests::{
    CancelOrderRequest, CreateOrderRequest, OrderDetailRequest, OrderListRequest,
};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Service for creating, querying and cancelling payment orders
///
/// Each method validates its request before any network traffic and fails with
/// [`AppError::MissingField`](crate::error::AppError::MissingField) or
/// [`AppError::InvalidInput`](crate::error::AppError::InvalidInput) when it is incomplete.
pub trait OrderService: Send + Sync {
    /// Sends a new order to Baokim
    async fn create_order(&self, order: &CreateOrderRequest) -> BaokimResult<Value>;

    /// Gets one order by merchant order code or Baokim id
    async fn get_order_detail(&self, request: &OrderDetailRequest) -> BaokimResult<Value>;

    /// Lists orders matching the filters
    async fn get_order_list(&self, request: &OrderListRequest) -> BaokimResult<Value>;

    /// Cancels an order
    async fn cancel_order(&self, request: &CancelOrderRequest) -> BaokimResult<Value>;
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::TokenManager;
use crate::application::config::{Config, ConfigOverrides};
use crate::application::interfaces::bank::BankService;
use crate::application::interfaces::order::OrderService;
use crate::constants::{
    BANK_LIST_PATH, ORDER_CANCEL_PATH, ORDER_DETAIL_PATH, ORDER_LIST_PATH, ORDER_SEND_PATH,
    PAYMENT_METHOD_LIST_PATH,
};
use crate::error::{AppError, BaokimResult};
use crate::model::auth::AuthToken;
use crate::model::http::HttpClient;
use crate::model::requests::{
    BankListRequest, CancelOrderRequest, CreateOrderRequest, OrderDetailRequest, OrderListRequest,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Last successful body of each endpoint
#[derive(Debug, Clone, Default)]
struct LastResults {
    bank_list: Option<Value>,
    payment_methods: Option<Value>,
    created_order: Option<Value>,
    order_detail: Option<Value>,
    order_list: Option<Value>,
    cancelled_order: Option<Value>,
}

/// Client for the Baokim payment API
///
/// Implements [`BankService`] and [`OrderService`]. The last successful body
/// of every endpoint is kept and can be read back with the `last_*` accessors;
/// failed calls leave them untouched.
pub struct Client {
    http_client: Arc<HttpClient>,
    last_results: RwLock<LastResults>,
}

impl Client {
    /// Creates a client; no network traffic happens until the first call
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config)?),
            last_results: RwLock::new(LastResults::default()),
        })
    }

    /// Creates a client configured from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Gets a token, applying `overrides` to the client configuration first
    ///
    /// See [`TokenManager::get_token`].
    pub async fn get_token(
        &self,
        overrides: Option<&ConfigOverrides>,
        payload: Option<&Value>,
    ) -> Result<AuthToken, AppError> {
        self.http_client.auth().get_token(overrides, payload).await
    }

    /// Gets the token manager
    pub fn token_manager(&self) -> &TokenManager {
        self.http_client.auth()
    }

    /// Snapshot of the current configuration
    pub async fn config(&self) -> Config {
        self.http_client.auth().config().await
    }

    /// Last bank list received
    pub async fn last_bank_list(&self) -> Option<Value> {
        self.last_results.read().await.bank_list.clone()
    }

    /// Last payment method list received
    pub async fn last_payment_methods(&self) -> Option<Value> {
        self.last_results.read().await.payment_methods.clone()
    }

    /// Last order creation response
    pub async fn last_created_order(&self) -> Option<Value> {
        self.last_results.read().await.created_order.clone()
    }

    /// Last order detail received
    pub async fn last_order_detail(&self) -> Option<Value> {
        self.last_results.read().await.order_detail.clone()
    }

    /// Last order list received
    pub async fn last_order_list(&self) -> Option<Value> {
        self.last_results.read().await.order_list.clone()
    }

    /// Last order cancellation response
    pub async fn last_cancelled_order(&self) -> Option<Value> {
        self.last_results.read().await.cancelled_order.clone()
    }
}

#[async_trait]
impl BankService for Client {
    async fn get_bank_list(&self, request: &BankListRequest) -> BaokimResult<Value> {
        info!("Getting bank list");
        let body = self.http_client.get(BANK_LIST_PATH, Some(request)).await?;
        self.last_results.write().await.bank_list = Some(body.clone());
        debug!("Bank list obtained");
        Ok(body)
    }

    async fn get_payment_methods(&self) -> BaokimResult<Value> {
        info!("Getting bank payment methods");
        let body = self
            .http_client
            .get(PAYMENT_METHOD_LIST_PATH, None::<&()>)
            .await?;
        self.last_results.write().await.payment_methods = Some(body.clone());
        debug!("Bank payment methods obtained");
        Ok(body)
    }
}

#[async_trait]
impl OrderService for Client {
    async fn create_order(&self, order: &CreateOrderRequest) -> BaokimResult<Value> {
        order.validate()?;
        info!(
            "Creating order {}",
            order.mrc_order_id.as_deref().unwrap_or_default()
        );
        let body = self.http_client.post_form(ORDER_SEND_PATH, order).await?;
        self.last_results.write().await.created_order = Some(body.clone());
        debug!("Order created");
        Ok(body)
    }

    async fn get_order_detail(&self, request: &OrderDetailRequest) -> BaokimResult<Value> {
        request.validate()?;
        info!("Getting order detail");
        let body = self.http_client.get(ORDER_DETAIL_PATH, Some(request)).await?;
        self.last_results.write().await.order_detail = Some(body.clone());
        Ok(body)
    }

    async fn get_order_list(&self, request: &OrderListRequest) -> BaokimResult<Value> {
        request.validate()?;
        info!("Getting order list");
        let body = self.http_client.get(ORDER_LIST_PATH, Some(request)).await?;
        self.last_results.write().await.order_list = Some(body.clone());
        Ok(body)
    }

    async fn cancel_order(&self, request: &CancelOrderRequest) -> BaokimResult<Value> {
        request.validate()?;
        info!("Cancelling order {:?}", request.id);
        let body = self.http_client.post_form(ORDER_CANCEL_PATH, request).await?;
        self.last_results.write().await.cancelled_order = Some(body.clone());
        debug!("Order cancelled");
        Ok(body)
    }
}

use crate::error::BaokimResult;
use crate::model::requests::BankListRequest;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Service for the Baokim bank catalogue endpoints
///
/// Merchants use these lists to show the banks and payment methods a customer
/// can pick from.
pub trait BankService: Send + Sync {
    /// Lists supported banks
    async fn get_bank_list(&self, request: &BankListRequest) -> BaokimResult<Value>;

    /// Lists bank payment methods
    ///
    /// Entries are classified by their `type` field: `0` Baokim wallet,
    /// `1` online ATM card, `2` Visa/Master card, `14` QR code, `15` e-wallet.
    async fn get_payment_methods(&self) -> BaokimResult<Value>;
}

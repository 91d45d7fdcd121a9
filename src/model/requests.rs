/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::{optional_flag, reject_zero, require_text};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Query of the bank list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct BankListRequest {
    /// Only banks supporting wallet links (`1`) or only those that do not (`0`)
    #[serde(
        default,
        with = "optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub lb_available: Option<bool>,
    /// Index of the first record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl BankListRequest {
    /// Request without filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on wallet-link support
    pub fn with_lb_available(mut self, lb_available: bool) -> Self {
        self.lb_available = Some(lb_available);
        self
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Checkout page language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Vietnamese
    Vi,
}

/// Form of the order creation endpoint
///
/// The four required fields are `Option` so that an incomplete request can be
/// built and rejected by [`CreateOrderRequest::validate`] with the missing field's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Merchant's order code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrc_order_id: Option<String>,
    /// Total amount of the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<u64>,
    /// Transaction description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Redirect URL after a successful payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_success: Option<String>,
    /// Website id from website validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<u64>,
    /// Order page URL, used when the customer cancels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_detail: Option<String>,
    /// Checkout language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    /// Bank payment method id from the payment method list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm_id: Option<u64>,
    /// Accept ATM cards (gateway default: 1)
    #[serde(
        default,
        with = "optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub accept_bank: Option<bool>,
    /// Accept credit cards (gateway default: 1)
    #[serde(
        default,
        with = "optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub accept_cc: Option<bool>,
    /// Accept QR payments (gateway default: 0)
    #[serde(
        default,
        with = "optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub accept_qrpay: Option<bool>,
    /// Notification URLs, separated by `|`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<String>,
    /// Customer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Customer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    /// Customer full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Customer address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
}

impl CreateOrderRequest {
    /// Creates an order with all required fields set
    pub fn new(
        mrc_order_id: impl Into<String>,
        total_amount: u64,
        description: impl Into<String>,
        url_success: impl Into<String>,
    ) -> Self {
        Self {
            mrc_order_id: Some(mrc_order_id.into()),
            total_amount: Some(total_amount),
            description: Some(description.into()),
            url_success: Some(url_success.into()),
            ..Default::default()
        }
    }

    /// Checks the required fields
    pub fn validate(&self) -> Result<(), AppError> {
        require_text(&self.mrc_order_id, "mrc_order_id")?;
        match self.total_amount {
            None => return Err(AppError::MissingField("total_amount".to_string())),
            amount => reject_zero(amount, "total_amount")?,
        }
        require_text(&self.description, "description")?;
        require_text(&self.url_success, "url_success")?;
        Ok(())
    }

    /// Set the merchant (website) id
    pub fn with_merchant_id(mut self, merchant_id: u64) -> Self {
        self.merchant_id = Some(merchant_id);
        self
    }

    /// Set the order detail URL
    pub fn with_url_detail(mut self, url_detail: impl Into<String>) -> Self {
        self.url_detail = Some(url_detail.into());
        self
    }

    /// Set the checkout language
    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Set the bank payment method id
    pub fn with_bpm_id(mut self, bpm_id: u64) -> Self {
        self.bpm_id = Some(bpm_id);
        self
    }

    /// Accept or refuse ATM cards
    pub fn with_accept_bank(mut self, accept: bool) -> Self {
        self.accept_bank = Some(accept);
        self
    }

    /// Accept or refuse credit cards
    pub fn with_accept_cc(mut self, accept: bool) -> Self {
        self.accept_cc = Some(accept);
        self
    }

    /// Accept or refuse QR payments
    pub fn with_accept_qrpay(mut self, accept: bool) -> Self {
        self.accept_qrpay = Some(accept);
        self
    }

    /// Set the webhook URLs (`|` separated)
    pub fn with_webhooks(mut self, webhooks: impl Into<String>) -> Self {
        self.webhooks = Some(webhooks.into());
        self
    }

    /// Set the customer email
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Set the customer phone
    pub fn with_customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    /// Set the customer name
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Set the customer address
    pub fn with_customer_address(mut self, address: impl Into<String>) -> Self {
        self.customer_address = Some(address.into());
        self
    }
}

/// Query of the order detail endpoint; exactly one key must be set
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct OrderDetailRequest {
    /// Merchant's order code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrc_order_id: Option<String>,
    /// Baokim order id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl OrderDetailRequest {
    /// Looks an order up by the merchant's order code
    pub fn by_mrc_order_id(mrc_order_id: impl Into<String>) -> Self {
        Self {
            mrc_order_id: Some(mrc_order_id.into()),
            id: None,
        }
    }

    /// Looks an order up by its Baokim id
    pub fn by_id(id: u64) -> Self {
        Self {
            mrc_order_id: None,
            id: Some(id),
        }
    }

    /// Checks that exactly one key is supplied
    ///
    /// Two present keys are rejected even when one of them is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        match (self.mrc_order_id.as_deref(), self.id) {
            (Some(_), Some(_)) => Err(AppError::InvalidInput(
                "only one of mrc_order_id and id may be supplied".to_string(),
            )),
            (Some(code), None) if !code.trim().is_empty() => Ok(()),
            (None, Some(_)) => Ok(()),
            _ => Err(AppError::MissingField("mrc_order_id or id".to_string())),
        }
    }
}

/// Query of the order list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct OrderListRequest {
    /// Filter by merchant's order code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrc_order_id: Option<String>,
    /// Filter by transaction id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_id: Option<u64>,
    /// Filter by order status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<u8>,
    /// First day of the range (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    /// Last day of the range (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number, starting at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl OrderListRequest {
    /// Request without filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks paging values and date range ordering
    pub fn validate(&self) -> Result<(), AppError> {
        reject_zero(self.per_page.map(u64::from), "per_page")?;
        reject_zero(self.page.map(u64::from), "page")?;
        match (self.from_date, self.to_date) {
            (Some(from), Some(to)) if from > to => Err(AppError::InvalidInput(format!(
                "from_date {from} is after to_date {to}"
            ))),
            _ => Ok(()),
        }
    }

    /// Filter by merchant's order code
    pub fn with_mrc_order_id(mut self, mrc_order_id: impl Into<String>) -> Self {
        self.mrc_order_id = Some(mrc_order_id.into());
        self
    }

    /// Filter by transaction id
    pub fn with_txn_id(mut self, txn_id: u64) -> Self {
        self.txn_id = Some(txn_id);
        self
    }

    /// Filter by status code
    pub fn with_stat(mut self, stat: u8) -> Self {
        self.stat = Some(stat);
        self
    }

    /// Restrict to a date range
    pub fn with_date_range(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self.to_date = Some(to_date);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Form of the order cancellation endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    /// Baokim order id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl CancelOrderRequest {
    /// Cancels the order with the given Baokim id
    pub fn new(id: u64) -> Self {
        Self { id: Some(id) }
    }

    /// Checks that the id is present
    pub fn validate(&self) -> Result<(), AppError> {
        match self.id {
            Some(_) => Ok(()),
            None => Err(AppError::MissingField("id".to_string())),
        }
    }
}

/// Default validity window of a freshly minted token, in seconds
pub const DEFAULT_TOKEN_EXPIRE_SECS: u64 = 60;
/// Default JWT signing algorithm
pub const DEFAULT_ENCODE_ALG: &str = "HS256";
/// Default timeout applied to every HTTP request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Base URL of the Baokim sandbox environment
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.baokim.vn/payment/";
/// Base URL of the Baokim production environment
pub const PRODUCTION_BASE_URL: &str = "https://api.baokim.vn/payment/";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("baokim-client/", env!("CARGO_PKG_VERSION"));

/// A held token with fewer seconds than this left before `exp` is replaced
pub const TOKEN_REUSE_MARGIN_SECS: i64 = 5;

/// Query parameter carrying the signed token
pub const JWT_QUERY_PARAM: &str = "jwt";
/// Number of random characters drawn for a token id before base64 encoding
pub const TOKEN_ID_LENGTH: usize = 32;
/// Alphabet the random token id is drawn from
pub const TOKEN_ID_ALPHABET: &str =
    "0123456789qazwsxedcrfvtgbyhnujmikolpQAZWSXEDCRFVTGBYHNUJMIKOLP";

/// Bank list endpoint
pub const BANK_LIST_PATH: &str = "api/v4/bank/list";
/// Bank payment method list endpoint
pub const PAYMENT_METHOD_LIST_PATH: &str = "api/v4/bpm/list";
/// Order creation endpoint
pub const ORDER_SEND_PATH: &str = "api/v4/order/send";
/// Order detail endpoint
pub const ORDER_DETAIL_PATH: &str = "api/v4/order/detail";
/// Order list endpoint
pub const ORDER_LIST_PATH: &str = "api/v4/order/list";
/// Order cancellation endpoint
pub const ORDER_CANCEL_PATH: &str = "api/v4/order/cancel";

use log::*;
use sos_common::Secret;

const DEFAULT_API_URL: &str = "https://api.paystack.co";

#[derive(Debug, Clone, Default)]
pub struct PaystackConfig {
    /// Base URL for the Paystack REST API. Only overridden in tests and sandboxes.
    pub api_url: String,
    pub secret_key: Secret<String>,
    /// Optional URL the gateway redirects the customer to after checkout completes.
    pub callback_url: Option<String>,
}

impl PaystackConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_url = std::env::var("SOS_PAYSTACK_API_URL").unwrap_or_else(|_| {
            info!("SOS_PAYSTACK_API_URL not set, using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        let secret_key = Secret::new(std::env::var("SOS_PAYSTACK_SECRET_KEY").unwrap_or_else(|_| {
            warn!("SOS_PAYSTACK_SECRET_KEY not set, using (probably useless) default");
            "sk_test_00000000000000".to_string()
        }));
        let callback_url = std::env::var("SOS_PAYSTACK_CALLBACK_URL").ok();
        Self { api_url, secret_key, callback_url }
    }
}

use serde::{Deserialize, Serialize};
use sos_common::Cents;

/// Body for `POST /transaction/initialize`.
///
/// Amounts are expressed in the currency's minor unit, which matches [`Cents`] exactly, so no conversion happens at
/// this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct InitializePaymentRequest {
    pub email: String,
    pub amount: Cents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl InitializePaymentRequest {
    pub fn new<S: Into<String>>(email: S, amount: Cents) -> Self {
        Self { email: email.into(), amount, reference: None, callback_url: None }
    }

    pub fn with_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_callback_url<S: Into<String>>(mut self, url: S) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

/// The standard response wrapper used by every gateway endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Payload of a successful `transaction/initialize` call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentInitData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

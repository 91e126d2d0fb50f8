use log::*;
use paystack_tools::{InitializePaymentRequest, PaystackApi, PaystackApiError, PaystackConfig};
use sos_common::Cents;
use storefront_order_engine::db_types::OrderId;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PaymentProviderError {
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

impl From<PaystackApiError> for PaymentProviderError {
    fn from(e: PaystackApiError) -> Self {
        Self::Gateway(e.to_string())
    }
}

/// The redirect data handed back to the client after a checkout session has been opened with the gateway.
#[derive(Debug, Clone)]
pub struct PaymentInit {
    pub payment_url: String,
    pub reference: String,
}

/// The one operation the order flow needs from a payment collaborator.
#[allow(async_fn_in_trait)]
pub trait PaymentProvider {
    async fn initialize_payment(
        &self,
        email: &str,
        amount: Cents,
        order_id: &OrderId,
    ) -> Result<PaymentInit, PaymentProviderError>;
}

/// [`PaymentProvider`] implementation backed by the Paystack REST API.
#[derive(Clone)]
pub struct PaystackGateway {
    api: PaystackApi,
}

impl PaystackGateway {
    pub fn new(config: PaystackConfig) -> Result<Self, PaymentProviderError> {
        let api = PaystackApi::new(config)?;
        Ok(Self { api })
    }
}

impl PaymentProvider for PaystackGateway {
    async fn initialize_payment(
        &self,
        email: &str,
        amount: Cents,
        order_id: &OrderId,
    ) -> Result<PaymentInit, PaymentProviderError> {
        debug!("💳️ Initializing payment of {amount} for order [{order_id}]");
        let request = InitializePaymentRequest::new(email, amount);
        let data = self.api.initialize_payment(request).await?;
        debug!("💳️ Payment session for order [{order_id}] opened with reference {}", data.reference);
        Ok(PaymentInit { payment_url: data.authorization_url, reference: data.reference })
    }
}

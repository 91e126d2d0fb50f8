use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::PaystackConfig,
    data_objects::{ApiEnvelope, InitializePaymentRequest, PaymentInitData},
    PaystackApiError,
};

#[derive(Clone)]
pub struct PaystackApi {
    config: PaystackConfig,
    client: Arc<Client>,
}

impl PaystackApi {
    pub fn new(config: PaystackConfig) -> Result<Self, PaystackApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.secret_key.reveal());
        let val = HeaderValue::from_str(&bearer).map_err(|e| PaystackApiError::Initialization(e.to_string()))?;
        headers.insert("Authorization", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PaystackApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    /// Start a hosted checkout session for the given email and amount.
    ///
    /// Returns the redirect URL and reference that the storefront echoes back to the customer. The reference defaults
    /// to the gateway-assigned one unless the request carried its own.
    pub async fn initialize_payment(
        &self,
        mut request: InitializePaymentRequest,
    ) -> Result<PaymentInitData, PaystackApiError> {
        if request.callback_url.is_none() {
            request.callback_url = self.config.callback_url.clone();
        }
        trace!("Initializing payment of {} for {}", request.amount, request.email);
        let envelope: ApiEnvelope<PaymentInitData> =
            self.rest_query(Method::POST, "/transaction/initialize", Some(&request)).await?;
        if !envelope.status {
            return Err(PaystackApiError::Declined(envelope.message));
        }
        let data = envelope.data.ok_or_else(|| {
            PaystackApiError::ResponseError("Gateway reported success but returned no payload".to_string())
        })?;
        debug!("Payment session {} initialized", data.reference);
        Ok(data)
    }

    async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, PaystackApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let response = req.send().await.map_err(|e| PaystackApiError::ResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| PaystackApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| PaystackApiError::ResponseError(e.to_string()))?;
            Err(PaystackApiError::QueryError { status, message })
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url.trim_end_matches('/'))
    }
}

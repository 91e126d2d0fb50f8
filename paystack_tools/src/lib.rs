//! A minimal client for the Paystack REST API.
//!
//! Only the endpoints that the storefront order server actually uses are wrapped. The main entry point is
//! [`PaystackApi`], which is configured via [`PaystackConfig`] and exposes [`PaystackApi::initialize_payment`] to
//! start a hosted checkout session.

mod api;
mod config;
mod data_objects;
mod error;

pub use api::PaystackApi;
pub use config::PaystackConfig;
pub use data_objects::{ApiEnvelope, InitializePaymentRequest, PaymentInitData};
pub use error::PaystackApiError;

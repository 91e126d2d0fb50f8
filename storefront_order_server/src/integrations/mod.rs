//! Adapters for the external services the server talks to. Each adapter sits behind a trait so that endpoint tests
//! can substitute a mock.
mod paystack;

pub use paystack::{PaymentInit, PaymentProvider, PaymentProviderError, PaystackGateway};

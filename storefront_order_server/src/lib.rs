//! # Storefront order server
//! This module hosts the HTTP layer of the storefront order service. It is responsible for:
//! Accepting checkout requests, validating them and handing them to the order engine.
//! Initiating a hosted checkout session with the payment gateway and echoing the redirect URL to the client.
//! Serving order list and detail reads, with the list going through the engine's cache-aside layer.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `POST /orders/create`: Create an order and receive the payment redirect.
//! * `GET /orders`: List all orders.
//! * `GET /orders/{order_id}`: Fetch a single order.
//! * `DELETE /orders/{order_id}`: Delete an order.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;

use crate::traits::{OrderManagement, UserManagement};

/// The umbrella contract for a storage backend supporting the storefront order server.
///
/// The order-creation flow needs both order and user storage in one backend so that the invariant check, the user
/// lookup and the insert run against the same database.
pub trait StorefrontDatabase: OrderManagement + UserManagement {}

/// Failures surfaced by the repository layer, whichever backend is in use.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("connection pool error: {0}")]
    Pool(String),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    #[error("cart {0} does not exist")]
    CartNotFound(i32),
    #[error("product {0} does not exist")]
    ProductNotFound(i32),
    #[error("quantity {attempted} exceeds the limit of {max}")]
    QuantityLimitExceeded { attempted: i32, max: i32 },
    #[error("injected failure: {0}")]
    Injected(&'static str),
}

use crate::data::errors::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("Product not found")]
    ProductNotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] RepoError),
}

#[derive(Debug, thiserror::Error)]
pub enum CartServiceError {
    #[error("user_id is required")]
    InvalidUser,
    #[error("Quantity must be a number between {min} and {max}")]
    InvalidQuantity { min: i32, max: i32 },
    #[error("Cart line would hold {attempted} units, the limit is {max}")]
    QuantityLimitExceeded { attempted: i32, max: i32 },
    #[error("Product not found")]
    ProductNotFound,
    #[error("Database error: {0}")]
    DatabaseError(RepoError),
}

impl From<RepoError> for CartServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::ProductNotFound(_) => CartServiceError::ProductNotFound,
            RepoError::QuantityLimitExceeded { attempted, max } => {
                CartServiceError::QuantityLimitExceeded { attempted, max }
            }
            other => CartServiceError::DatabaseError(other),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error("user_id is required")]
    InvalidUser,
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Order not found")]
    OrderNotFound,
    #[error("Order total is out of range")]
    TotalOverflow,
    #[error("Database error: {0}")]
    DatabaseError(#[from] RepoError),
}

impl From<diesel::result::Error> for OrderServiceError {
    fn from(err: diesel::result::Error) -> Self {
        OrderServiceError::DatabaseError(RepoError::Database(err))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryOptionServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] RepoError),
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentSummaryServiceError {
    #[error("Payment summary not found")]
    SummaryNotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] RepoError),
}

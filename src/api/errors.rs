use crate::api::response::ErrorResponse;
use crate::security::errors::AuthError;
use crate::services::errors::{
    CartServiceError, CatalogServiceError, DeliveryOptionServiceError, OrderServiceError,
    PaymentSummaryServiceError,
};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced to HTTP clients. Every variant renders as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum APIErrors {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("{0}")]
    Unauthorized(String),
    #[error("Internal server error")]
    Internal,
}

impl APIErrors {
    pub fn status(&self) -> StatusCode {
        match self {
            APIErrors::Validation(_) | APIErrors::EmptyCart => StatusCode::BAD_REQUEST,
            APIErrors::NotFound(_) => StatusCode::NOT_FOUND,
            APIErrors::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            APIErrors::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(source: &dyn std::error::Error) -> Self {
        tracing::error!(error = %source, "Request failed");
        APIErrors::Internal
    }
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<CatalogServiceError> for APIErrors {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::ProductNotFound => APIErrors::NotFound(err.to_string()),
            CatalogServiceError::DatabaseError(ref e) => APIErrors::internal(e),
        }
    }
}

impl From<CartServiceError> for APIErrors {
    fn from(err: CartServiceError) -> Self {
        match err {
            CartServiceError::InvalidUser
            | CartServiceError::InvalidQuantity { .. }
            | CartServiceError::QuantityLimitExceeded { .. } => {
                APIErrors::Validation(err.to_string())
            }
            CartServiceError::ProductNotFound => APIErrors::NotFound(err.to_string()),
            CartServiceError::DatabaseError(ref e) => APIErrors::internal(e),
        }
    }
}

impl From<OrderServiceError> for APIErrors {
    fn from(err: OrderServiceError) -> Self {
        match err {
            OrderServiceError::InvalidUser | OrderServiceError::TotalOverflow => {
                APIErrors::Validation(err.to_string())
            }
            OrderServiceError::EmptyCart => APIErrors::EmptyCart,
            OrderServiceError::OrderNotFound => APIErrors::NotFound(err.to_string()),
            OrderServiceError::DatabaseError(ref e) => APIErrors::internal(e),
        }
    }
}

impl From<DeliveryOptionServiceError> for APIErrors {
    fn from(err: DeliveryOptionServiceError) -> Self {
        match err {
            DeliveryOptionServiceError::DatabaseError(ref e) => APIErrors::internal(e),
        }
    }
}

impl From<PaymentSummaryServiceError> for APIErrors {
    fn from(err: PaymentSummaryServiceError) -> Self {
        match err {
            PaymentSummaryServiceError::SummaryNotFound => APIErrors::NotFound(err.to_string()),
            PaymentSummaryServiceError::DatabaseError(ref e) => APIErrors::internal(e),
        }
    }
}

impl From<AuthError> for APIErrors {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotConfigured => APIErrors::internal(&err),
            _ => APIErrors::Unauthorized(err.to_string()),
        }
    }
}

use crate::api::errors::APIErrors;
use crate::api::state::AppState;
use crate::security::errors::AuthError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::{Json, RequestPartsExt};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON body that has been deserialized and passed its `Validate` rules.
///
/// Malformed bodies, missing fields and failed rules all reject with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = APIErrors;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| APIErrors::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| APIErrors::Validation(first_message(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| errors.iter().map(move |e| (field.clone(), e)))
        .map(|(field, error)| match &error.message {
            Some(message) => message.to_string(),
            None => format!("{field} is invalid"),
        })
        .next()
        .unwrap_or_else(|| "Invalid request body".to_string())
}

/// The caller identified by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = APIErrors;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jwt = state.jwt.as_ref().ok_or(AuthError::NotConfigured)?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::debug!(uri = %parts.uri, "Missing or malformed authorization header");
                AuthError::MissingToken
            })?;

        let claims = jwt.decode_token(bearer.token()).map_err(|e| {
            tracing::warn!(uri = %parts.uri, error = %e, "Rejected bearer token");
            e
        })?;

        Ok(AuthUser { id: claims.sub })
    }
}

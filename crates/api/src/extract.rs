//! Request extractors producing the API's standard error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use catalog_core::error::CoreError;

use crate::error::AppError;

/// JSON body extractor for write endpoints.
///
/// Axum's plain `Json` rejects a malformed or type-mismatched body with its
/// own 422 response. This wrapper maps the rejection into the same 400
/// `VALIDATION_ERROR` shape that field validation produces, so clients see
/// one error contract for every bad payload:
///
/// ```ignore
/// async fn create_product(ApiJson(input): ApiJson<CreateProduct>) -> ...
/// ```
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(vec![
                rejection.body_text(),
            ]))),
        }
    }
}

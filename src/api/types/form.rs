//! Request field extractor accepting JSON or url-encoded bodies

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::{Map, Value};

use super::error::{ApiError, ApiErrorType};
use crate::domain::access_key::{AccessKeyFormData, FormErrors, RawAccessKeyForm};

/// Raw access key fields, whichever encoding the client used
///
/// `application/x-www-form-urlencoded` bodies become string values; anything
/// else is parsed as a JSON object.
#[derive(Debug, Clone, Default)]
pub struct FormFields(pub RawAccessKeyForm);

impl FormFields {
    pub fn bind(self) -> Result<AccessKeyFormData, FormErrors> {
        self.0.bind()
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_url_encoded(&req) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    ApiError::bad_request(format!("Invalid form data: {}", rejection.body_text()))
                        .with_code("form_parse_error")
                })?;

            return Ok(FormFields(RawAccessKeyForm::from_pairs(pairs)));
        }

        let Json(fields) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::new(
                    rejection.status(),
                    ApiErrorType::InvalidRequestError,
                    format!("Invalid JSON data: {}", rejection.body_text()),
                )
                .with_code("json_parse_error")
            })?;

        Ok(FormFields(RawAccessKeyForm::from_fields(fields)))
    }
}

fn is_url_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

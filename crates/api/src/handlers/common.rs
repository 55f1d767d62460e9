use axum::{
	extract::rejection::JsonRejection,
	http::StatusCode,
	response::{IntoResponse, Json, Response},
};
use rfq_service::OrderServiceError;
use rfq_types::OrderValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Machine-readable error category returned in [`ErrorResponse::error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
	MalformedJson,
	PayloadTooLarge,
	MissingField,
	InvalidAmount,
	PricingError,
}

/// Error response format shared by handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: ErrorKind,
	pub message: String,
	pub timestamp: i64,
}

/// Handler failure, rendered as an [`ErrorResponse`]
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("Malformed JSON body: {0}")]
	MalformedJson(String),

	#[error("Request body too large: {0}")]
	PayloadTooLarge(String),

	#[error(transparent)]
	Validation(#[from] OrderValidationError),

	#[error(transparent)]
	Service(#[from] OrderServiceError),
}

impl ApiError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ApiError::MalformedJson(_) => ErrorKind::MalformedJson,
			ApiError::PayloadTooLarge(_) => ErrorKind::PayloadTooLarge,
			ApiError::Validation(OrderValidationError::MissingField { .. }) => {
				ErrorKind::MissingField
			},
			ApiError::Validation(OrderValidationError::InvalidAmount { .. }) => {
				ErrorKind::InvalidAmount
			},
			ApiError::Service(OrderServiceError::Pricing(_)) => ErrorKind::PricingError,
		}
	}

	pub fn status(&self) -> StatusCode {
		match self.kind() {
			ErrorKind::MalformedJson | ErrorKind::MissingField | ErrorKind::InvalidAmount => {
				StatusCode::BAD_REQUEST
			},
			ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
			ErrorKind::PricingError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		// Body-limit failures surface as a buffering rejection carrying 413
		if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
			ApiError::PayloadTooLarge(rejection.body_text())
		} else {
			ApiError::MalformedJson(rejection.body_text())
		}
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		ApiError::MalformedJson(err.to_string())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		warn!("Rejecting getOrder request ({}): {}", status, self);

		let body = ErrorResponse {
			error: self.kind(),
			message: self.to_string(),
			timestamp: chrono::Utc::now().timestamp(),
		};
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rfq_types::PricingError;

	#[test]
	fn test_kind_and_status_mapping() {
		let missing = ApiError::from(OrderValidationError::MissingField {
			field: "makerToken",
		});
		assert_eq!(missing.kind(), ErrorKind::MissingField);
		assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
		assert_eq!(missing.to_string(), "Missing required field: makerToken");

		let invalid = ApiError::from(OrderValidationError::InvalidAmount {
			field: "makerAmount",
			reason: "amount must not be negative".to_string(),
		});
		assert_eq!(invalid.kind(), ErrorKind::InvalidAmount);
		assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

		let malformed = ApiError::MalformedJson("EOF while parsing".to_string());
		assert_eq!(malformed.kind(), ErrorKind::MalformedJson);
		assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

		let too_large = ApiError::PayloadTooLarge("length limit exceeded".to_string());
		assert_eq!(too_large.kind(), ErrorKind::PayloadTooLarge);
		assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);

		let pricing = ApiError::from(OrderServiceError::Pricing(PricingError::Overflow {
			amount: "1".to_string(),
			price: "3".to_string(),
		}));
		assert_eq!(pricing.kind(), ErrorKind::PricingError);
		assert_eq!(pricing.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_error_kind_wire_names() {
		assert_eq!(
			serde_json::to_value(ErrorKind::MalformedJson).unwrap(),
			"MALFORMED_JSON"
		);
		assert_eq!(
			serde_json::to_value(ErrorKind::PayloadTooLarge).unwrap(),
			"PAYLOAD_TOO_LARGE"
		);
		assert_eq!(
			serde_json::to_value(ErrorKind::MissingField).unwrap(),
			"MISSING_FIELD"
		);
		assert_eq!(
			serde_json::to_value(ErrorKind::InvalidAmount).unwrap(),
			"INVALID_AMOUNT"
		);
		assert_eq!(
			serde_json::to_value(ErrorKind::PricingError).unwrap(),
			"PRICING_ERROR"
		);
	}
}

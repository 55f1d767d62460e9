use axum::{
	extract::{rejection::JsonRejection, State},
	response::Json,
};
use rfq_types::{OrderRequest, OrderResponse, SwapRequest};
use serde_json::Value;
use tracing::info;

use crate::handlers::common::ApiError;
use crate::state::AppState;

/// POST /getOrder - Quote a maker order for the requested swap
pub async fn get_order(
	State(state): State<AppState>,
	payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
	let Json(raw) = payload?;
	info!("Received getOrder: {}", raw);

	let request: OrderRequest = serde_json::from_value(raw)?;
	let swap = SwapRequest::try_from(request)?;
	let order = state.order_service.create_order(&swap)?;

	let response = OrderResponse::from(order);
	info!("Sending order: {:?}", response);
	Ok(Json(response))
}

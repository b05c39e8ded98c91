use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{DomainError, NewSale};
use crate::infrastructure::AppState;

const INVALID_SALE: &str = "Name, price, and delivery are required and must be valid";
const SALE_NOT_FOUND: &str = "Sale not found";

/// Request body for creating or replacing a sale
///
/// Every field is optional at the parsing stage so that a missing field is reported
/// as a validation error rather than a framework rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SaleRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub delivery: Option<f64>,
}

impl SaleRequest {
    /// Check presence and types; all three fields are required
    pub fn validate(self) -> Result<NewSale, DomainError> {
        match (self.name, self.price, self.delivery) {
            (Some(name), Some(price), Some(delivery)) if !name.is_empty() => Ok(NewSale {
                name,
                price,
                delivery,
            }),
            _ => Err(DomainError::Validation(INVALID_SALE.to_string())),
        }
    }
}

/// Unwrap the JSON extractor, folding malformed bodies into the validation error
fn parse_body(payload: Result<Json<SaleRequest>, JsonRejection>) -> Result<NewSale, DomainError> {
    match payload {
        Ok(Json(request)) => request.validate(),
        Err(rejection) => {
            tracing::debug!("Rejected sale body: {}", rejection.body_text());
            Err(DomainError::Validation(INVALID_SALE.to_string()))
        }
    }
}

/// Ids are looked up as integers; anything else cannot match a row
fn parse_id(raw: &str) -> Result<i32, DomainError> {
    raw.trim().parse().map_err(|_| DomainError::NotFound)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Map a failure to its response. Database details are logged, never returned.
fn failure_response(err: DomainError, failure_message: &'static str) -> Response {
    match err {
        DomainError::NotFound => error_response(StatusCode::NOT_FOUND, SALE_NOT_FOUND),
        DomainError::Validation(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
        DomainError::Database(detail) => {
            tracing::error!("{}: {}", failure_message, detail);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}

/// GET /api/sales - List every sale
#[utoipa::path(
    get,
    path = "/api/sales",
    responses(
        (status = 200, description = "All sales", body = [Sale]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_sales(State(state): State<AppState>) -> Response {
    match state.sale_repo.find_all().await {
        Ok(sales) => (StatusCode::OK, Json(sales)).into_response(),
        Err(e) => failure_response(e, "Failed to fetch sales"),
    }
}

/// GET /api/sales/:id - Get a single sale
#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 200, description = "The sale", body = Sale),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_sale(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.sale_repo.find_by_id(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(Some(sale)) => (StatusCode::OK, Json(sale)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, SALE_NOT_FOUND),
        Err(e) => failure_response(e, "Failed to fetch sale"),
    }
}

/// POST /api/sales - Record a new sale
#[utoipa::path(
    post,
    path = "/api/sales",
    request_body = SaleRequest,
    responses(
        (status = 201, description = "Sale created", body = Sale),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_sale(
    State(state): State<AppState>,
    payload: Result<Json<SaleRequest>, JsonRejection>,
) -> Response {
    let input = match parse_body(payload) {
        Ok(input) => input,
        Err(e) => return failure_response(e, "Failed to create sale"),
    };

    match state.sale_repo.create(input).await {
        Ok(sale) => (StatusCode::CREATED, Json(sale)).into_response(),
        Err(e) => failure_response(e, "Failed to create sale"),
    }
}

/// PUT /api/sales/:id - Replace name, price and delivery of a sale
#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    params(("id" = i32, Path, description = "Sale id")),
    request_body = SaleRequest,
    responses(
        (status = 200, description = "Sale updated", body = Sale),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SaleRequest>, JsonRejection>,
) -> Response {
    // Body is checked before the id so a bad body is a 400 even for unknown ids
    let input = match parse_body(payload) {
        Ok(input) => input,
        Err(e) => return failure_response(e, "Failed to update sale"),
    };

    let result = match parse_id(&id) {
        Ok(id) => state.sale_repo.update(id, input).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(sale) => (StatusCode::OK, Json(sale)).into_response(),
        Err(e) => failure_response(e, "Failed to update sale"),
    }
}

/// DELETE /api/sales/:id - Remove a sale
#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 204, description = "Sale deleted"),
        (status = 404, description = "Sale not found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_sale(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.sale_repo.delete(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => failure_response(e, "Failed to delete sale"),
    }
}

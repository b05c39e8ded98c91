pub mod health;
pub mod sales;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

/// Routes mounted under `/api`
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Sales
        .route("/sales", get(sales::list_sales).post(sales::create_sale))
        .route(
            "/sales/:id",
            get(sales::get_sale)
                .put(sales::update_sale)
                .delete(sales::delete_sale),
        )
        .with_state(state)
}

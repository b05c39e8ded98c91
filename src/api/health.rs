#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    "Sales API is running"
}

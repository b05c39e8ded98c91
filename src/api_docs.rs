use crate::api;
use crate::domain::Sale;

#[derive(utoipa::OpenApi)]
#[openapi(
    paths(
        api::health::root,
        api::sales::list_sales,
        api::sales::get_sale,
        api::sales::create_sale,
        api::sales::update_sale,
        api::sales::delete_sale,
    ),
    components(schemas(Sale, api::sales::SaleRequest)),
    tags(
        (name = "sales-api", description = "Sales CRUD API")
    )
)]
pub struct ApiDoc;

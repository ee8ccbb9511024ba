use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, ErrorResponse, JsonBody,
    errors::responses::RequestRejectedResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::envelope::Envelope;
use crate::models::{ArticleNumberRequest, CreateProduct, Product};
use crate::service::ProductService;
use crate::store::ProductStore;

pub const PRODUCTS_TAG: &str = "products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        list_products,
        get_product,
        get_product_by_article_number,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, ArticleNumberRequest, ErrorResponse),
        responses(RequestRejectedResponse)
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// `Ok` renders its payload, `NotFound` is an empty 404, and anything else
/// is a generic 400 with no internal detail.
impl<T: IntoResponse> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match self {
            Envelope::Ok(payload) => payload.into_response(),
            Envelope::NotFound => StatusCode::NOT_FOUND.into_response(),
            Envelope::Error | Envelope::Exists(_) => AppError::RequestRejected.into_response(),
        }
    }
}

/// Create the product router with all HTTP endpoints
pub fn router<S: ProductStore + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route(
            "/lookup",
            get(get_product).post(get_product_by_article_number),
        )
        .with_state(shared_service)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCTS_TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, response = RequestRejectedResponse)
    )
)]
async fn create_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> Envelope<Json<Product>> {
    service.create(input).await.map(Json)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCTS_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 404, description = "The catalog is empty"),
        (status = 400, response = RequestRejectedResponse)
    )
)]
async fn list_products<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
) -> Envelope<Json<Vec<Product>>> {
    service.get_all().await.map(Json)
}

/// Get a product by article number (body on GET)
#[utoipa::path(
    get,
    path = "/lookup",
    tag = PRODUCTS_TAG,
    request_body = ArticleNumberRequest,
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this article number"),
        (status = 400, response = RequestRejectedResponse)
    )
)]
async fn get_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    JsonBody(request): JsonBody<ArticleNumberRequest>,
) -> Envelope<Json<Product>> {
    service.get_one(request.article_number).await.map(Json)
}

/// Get a product by article number
#[utoipa::path(
    post,
    path = "/lookup",
    tag = PRODUCTS_TAG,
    request_body = ArticleNumberRequest,
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this article number"),
        (status = 400, response = RequestRejectedResponse)
    )
)]
async fn get_product_by_article_number<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    JsonBody(request): JsonBody<ArticleNumberRequest>,
) -> Envelope<Json<Product>> {
    service.get_one(request.article_number).await.map(Json)
}

/// Replace a product; the article number in the body selects it
#[utoipa::path(
    put,
    path = "",
    tag = PRODUCTS_TAG,
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "No product with this article number"),
        (status = 400, response = RequestRejectedResponse)
    )
)]
async fn update_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    JsonBody(product): JsonBody<Product>,
) -> Envelope<Json<Product>> {
    let id = product.article_number;
    service.update(id, product).await.map(Json)
}

/// Delete a product by article number
#[utoipa::path(
    delete,
    path = "",
    tag = PRODUCTS_TAG,
    request_body = ArticleNumberRequest,
    responses(
        (status = 200, description = "Product deleted, empty body"),
        (status = 404, description = "No product with this article number"),
        (status = 400, response = RequestRejectedResponse)
    )
)]
async fn delete_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    JsonBody(request): JsonBody<ArticleNumberRequest>,
) -> Envelope<()> {
    service.delete(request.article_number).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_ok_unit_is_empty_200() {
        let response = Envelope::ok(()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_is_empty_404() {
        let response = Envelope::<()>::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_error_and_stray_exists_are_generic_400() {
        for envelope in [Envelope::<()>::error(), Envelope::<()>::exists(true)] {
            let response = envelope.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(body.error, "REQUEST_REJECTED");
        }
    }

    #[test]
    fn test_openapi_lists_product_routes() {
        let doc = ApiDoc::openapi();
        let lookup = &doc.paths.paths["/lookup"];
        assert!(lookup.get.is_some());
        assert!(lookup.post.is_some());
    }
}

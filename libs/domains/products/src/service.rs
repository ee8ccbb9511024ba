//! Product Service - maps request shapes onto stored products

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::envelope::Envelope;
use crate::models::{CreateProduct, Product, ProductQuery};
use crate::repository::ProductRepository;
use crate::store::ProductStore;

/// Product service
///
/// Validates inbound products, assigns identity, and forwards to the
/// repository. The envelope kind it returns is always the repository's,
/// except that a validation failure is reported as `Error`.
pub struct ProductService<S: ProductStore> {
    repository: ProductRepository<S>,
}

impl<S: ProductStore> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<S: ProductStore> ProductService<S> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: ProductRepository<S>) -> Self {
        Self { repository }
    }

    /// Create a product with a freshly generated article number
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateProduct) -> Envelope<Product> {
        if let Err(e) = input.validate() {
            tracing::warn!(error = %e, "Rejected invalid product");
            return Envelope::error();
        }

        self.repository.create(Product::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn get_one(&self, id: Uuid) -> Envelope<Product> {
        self.repository
            .get_one(ProductQuery::ArticleNumber(id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Envelope<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Replace every mutable field of the product with article number `id`
    #[instrument(skip(self, product))]
    pub async fn update(&self, id: Uuid, mut product: Product) -> Envelope<Product> {
        if let Err(e) = product.validate() {
            tracing::warn!(error = %e, "Rejected invalid product");
            return Envelope::error();
        }

        product.article_number = id;
        self.repository
            .update(ProductQuery::ArticleNumber(id), product)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Envelope<()> {
        self.repository
            .delete(ProductQuery::ArticleNumber(id))
            .await
    }
}

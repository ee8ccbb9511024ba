use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Product, ProductQuery};

/// Raw persistence operations for products.
///
/// Implementations report failures as `Err`; [`ProductRepository`](crate::ProductRepository)
/// is the only caller and turns them into envelopes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new row; an existing article number is an error
    async fn insert(&self, product: Product) -> DatabaseResult<Product>;

    /// First product matching the query
    async fn find_one(&self, query: ProductQuery) -> DatabaseResult<Option<Product>>;

    /// Every product, ordered by article number
    async fn find_all(&self) -> DatabaseResult<Vec<Product>>;

    /// Whether at least one product matches
    async fn any(&self, query: ProductQuery) -> DatabaseResult<bool>;

    /// Overwrite the row with the same article number; a missing row is an error
    async fn replace(&self, product: Product) -> DatabaseResult<Product>;

    /// Remove all matching products, returning how many were removed
    async fn remove(&self, query: ProductQuery) -> DatabaseResult<u64>;
}

/// In-memory implementation of ProductStore (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: Product) -> DatabaseResult<Product> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.article_number) {
            return Err(DatabaseError::Generic(format!(
                "duplicate article number {}",
                product.article_number
            )));
        }

        products.insert(product.article_number, product.clone());
        Ok(product)
    }

    async fn find_one(&self, query: ProductQuery) -> DatabaseResult<Option<Product>> {
        let products = self.products.read().await;
        let found = match &query {
            ProductQuery::ArticleNumber(id) => products.get(id).cloned(),
            _ => products
                .values()
                .filter(|p| query.matches(p))
                .min_by_key(|p| p.article_number)
                .cloned(),
        };
        Ok(found)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.article_number);
        Ok(result)
    }

    async fn any(&self, query: ProductQuery) -> DatabaseResult<bool> {
        let products = self.products.read().await;
        Ok(products.values().any(|p| query.matches(p)))
    }

    async fn replace(&self, product: Product) -> DatabaseResult<Product> {
        let mut products = self.products.write().await;

        match products.get_mut(&product.article_number) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product)
            }
            None => Err(DatabaseError::Generic(format!(
                "no row to update for article number {}",
                product.article_number
            ))),
        }
    }

    async fn remove(&self, query: ProductQuery) -> DatabaseResult<u64> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|_, p| !query.matches(p));
        Ok((before - products.len()) as u64)
    }
}

use database::DatabaseError;
use std::sync::Arc;

use crate::envelope::Envelope;
use crate::models::{Product, ProductQuery};
use crate::store::ProductStore;

/// Sole gateway to the product store.
///
/// Every store failure is logged here with the operation name and turned
/// into [`Envelope::Error`]; nothing above this layer sees a `DatabaseError`.
///
/// `update` and `delete` check for the target first and then write. The two
/// steps are separate store calls: a concurrent delete in between is not
/// detected, and the write's own outcome decides the result.
pub struct ProductRepository<S: ProductStore> {
    store: Arc<S>,
}

impl<S: ProductStore> Clone for ProductRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

fn absorb<T>(operation: &'static str, error: DatabaseError) -> Envelope<T> {
    tracing::error!(operation, error = %error, "Product store operation failed");
    Envelope::error()
}

impl<S: ProductStore> ProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub async fn create(&self, product: Product) -> Envelope<Product> {
        match self.store.insert(product).await {
            Ok(created) => {
                tracing::info!(article_number = %created.article_number, "Created product");
                Envelope::ok(created)
            }
            Err(e) => absorb("create", e),
        }
    }

    pub async fn get_one(&self, query: ProductQuery) -> Envelope<Product> {
        match self.store.find_one(query).await {
            Ok(Some(product)) => Envelope::ok(product),
            Ok(None) => Envelope::not_found(),
            Err(e) => absorb("get_one", e),
        }
    }

    /// An empty catalog is reported as `NotFound`, not as an empty `Ok`.
    pub async fn get_all(&self) -> Envelope<Vec<Product>> {
        match self.store.find_all().await {
            Ok(products) if products.is_empty() => Envelope::not_found(),
            Ok(products) => Envelope::ok(products),
            Err(e) => absorb("get_all", e),
        }
    }

    /// `Exists(true)` when a product matches, `NotFound` otherwise.
    ///
    /// Never yields `Exists(false)`.
    pub async fn exists(&self, query: ProductQuery) -> Envelope<()> {
        match self.store.any(query).await {
            Ok(true) => Envelope::exists(true),
            Ok(false) => Envelope::not_found(),
            Err(e) => absorb("exists", e),
        }
    }

    pub async fn update(&self, query: ProductQuery, product: Product) -> Envelope<Product> {
        match self.exists(query).await {
            Envelope::Exists(_) => match self.store.replace(product).await {
                Ok(updated) => {
                    tracing::info!(article_number = %updated.article_number, "Updated product");
                    Envelope::ok(updated)
                }
                Err(e) => absorb("update", e),
            },
            Envelope::NotFound => Envelope::not_found(),
            _ => Envelope::error(),
        }
    }

    /// Succeeds whatever the removal's row count; only the existence check
    /// decides between `Ok` and `NotFound`.
    pub async fn delete(&self, query: ProductQuery) -> Envelope<()> {
        match self.exists(query.clone()).await {
            Envelope::Exists(_) => match self.store.remove(query).await {
                Ok(rows_affected) => {
                    tracing::info!(rows_affected, "Deleted product");
                    Envelope::ok(())
                }
                Err(e) => absorb("delete", e),
            },
            Envelope::NotFound => Envelope::not_found(),
            _ => Envelope::error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockProductStore;
    use mockall::{Sequence, predicate::eq};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn product() -> Product {
        Product {
            article_number: Uuid::now_v7(),
            price: Decimal::TEN,
            discount_price: Decimal::ZERO,
            title: "Test Product".to_string(),
            description: None,
            ingress: None,
            manufacturer: None,
            primary_image: None,
        }
    }

    fn db_down() -> DatabaseError {
        DatabaseError::Generic("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_create_absorbs_store_failure() {
        let mut store = MockProductStore::new();
        store.expect_insert().returning(|_| Err(db_down()));

        let repository = ProductRepository::new(store);
        assert!(repository.create(product()).await.is_error());
    }

    #[tokio::test]
    async fn test_get_one_maps_outcomes() {
        let found = product();
        let found_id = found.article_number;
        let missing_id = Uuid::now_v7();

        let mut store = MockProductStore::new();
        store
            .expect_find_one()
            .with(eq(ProductQuery::ArticleNumber(found_id)))
            .returning(move |_| Ok(Some(found.clone())));
        store
            .expect_find_one()
            .with(eq(ProductQuery::ArticleNumber(missing_id)))
            .returning(|_| Ok(None));

        let repository = ProductRepository::new(store);
        let envelope = repository
            .get_one(ProductQuery::ArticleNumber(found_id))
            .await;
        assert_eq!(envelope.payload().article_number, found_id);
        assert!(
            repository
                .get_one(ProductQuery::ArticleNumber(missing_id))
                .await
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_get_all_empty_is_not_found() {
        let mut store = MockProductStore::new();
        store.expect_find_all().returning(|| Ok(vec![]));

        let repository = ProductRepository::new(store);
        assert!(repository.get_all().await.is_not_found());
    }

    #[tokio::test]
    async fn test_get_all_failure_is_error() {
        let mut store = MockProductStore::new();
        store.expect_find_all().returning(|| Err(db_down()));

        let repository = ProductRepository::new(store);
        assert!(repository.get_all().await.is_error());
    }

    #[tokio::test]
    async fn test_exists_never_reports_false() {
        let mut store = MockProductStore::new();
        let mut seq = Sequence::new();
        store
            .expect_any()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        store
            .expect_any()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        store
            .expect_any()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(db_down()));

        let repository = ProductRepository::new(store);
        let query = ProductQuery::ArticleNumber(Uuid::now_v7());

        let present = repository.exists(query.clone()).await;
        assert!(present.exists_flag());
        assert!(repository.exists(query.clone()).await.is_not_found());
        assert!(repository.exists(query).await.is_error());
    }

    #[tokio::test]
    async fn test_update_checks_then_replaces() {
        let replacement = product();
        let query = ProductQuery::ArticleNumber(replacement.article_number);

        let mut store = MockProductStore::new();
        let mut seq = Sequence::new();
        store
            .expect_any()
            .with(eq(query.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        store
            .expect_replace()
            .with(eq(replacement.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(Ok);

        let repository = ProductRepository::new(store);
        let envelope = repository.update(query, replacement.clone()).await;
        assert_eq!(envelope, Envelope::ok(replacement));
    }

    #[tokio::test]
    async fn test_update_missing_skips_write() {
        let mut store = MockProductStore::new();
        store.expect_any().returning(|_| Ok(false));
        store.expect_replace().never();

        let repository = ProductRepository::new(store);
        let envelope = repository
            .update(ProductQuery::ArticleNumber(Uuid::now_v7()), product())
            .await;
        assert!(envelope.is_not_found());
    }

    #[tokio::test]
    async fn test_update_check_failure_is_error() {
        let mut store = MockProductStore::new();
        store.expect_any().returning(|_| Err(db_down()));
        store.expect_replace().never();

        let repository = ProductRepository::new(store);
        let envelope = repository
            .update(ProductQuery::ArticleNumber(Uuid::now_v7()), product())
            .await;
        assert!(envelope.is_error());
    }

    #[tokio::test]
    async fn test_update_write_failure_is_error() {
        // Row vanished between the check and the write
        let mut store = MockProductStore::new();
        store.expect_any().returning(|_| Ok(true));
        store.expect_replace().returning(|_| Err(db_down()));

        let repository = ProductRepository::new(store);
        let envelope = repository
            .update(ProductQuery::ArticleNumber(Uuid::now_v7()), product())
            .await;
        assert!(envelope.is_error());
    }

    #[tokio::test]
    async fn test_delete_checks_then_removes() {
        let query = ProductQuery::ArticleNumber(Uuid::now_v7());

        let mut store = MockProductStore::new();
        let mut seq = Sequence::new();
        store
            .expect_any()
            .with(eq(query.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        store
            .expect_remove()
            .with(eq(query.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));

        let repository = ProductRepository::new(store);
        assert_eq!(repository.delete(query).await, Envelope::ok(()));
    }

    #[tokio::test]
    async fn test_delete_ignores_row_count() {
        // A concurrent delete already removed the row
        let mut store = MockProductStore::new();
        store.expect_any().returning(|_| Ok(true));
        store.expect_remove().returning(|_| Ok(0));

        let repository = ProductRepository::new(store);
        let envelope = repository
            .delete(ProductQuery::ArticleNumber(Uuid::now_v7()))
            .await;
        assert!(envelope.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_skips_remove() {
        let mut store = MockProductStore::new();
        store.expect_any().returning(|_| Ok(false));
        store.expect_remove().never();

        let repository = ProductRepository::new(store);
        let envelope = repository
            .delete(ProductQuery::ArticleNumber(Uuid::now_v7()))
            .await;
        assert!(envelope.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_remove_failure_is_error() {
        let mut store = MockProductStore::new();
        store.expect_any().returning(|_| Ok(true));
        store.expect_remove().returning(|_| Err(db_down()));

        let repository = ProductRepository::new(store);
        let envelope = repository
            .delete(ProductQuery::ArticleNumber(Uuid::now_v7()))
            .await;
        assert!(envelope.is_error());
    }
}

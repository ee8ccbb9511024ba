use async_trait::async_trait;
use database::DatabaseResult;
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    models::{Product, ProductQuery},
    store::ProductStore,
};

/// PostgreSQL implementation of ProductStore backed by SeaORM
#[derive(Clone)]
pub struct PgProductStore {
    db: DatabaseConnection,
}

impl PgProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: Product) -> DatabaseResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.insert(&self.db).await?;

        tracing::debug!(article_number = %model.article_number, "Inserted product row");
        Ok(model.into())
    }

    async fn find_one(&self, query: ProductQuery) -> DatabaseResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(Condition::from(&query))
            .order_by_asc(entity::Column::ArticleNumber)
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> DatabaseResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::ArticleNumber)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn any(&self, query: ProductQuery) -> DatabaseResult<bool> {
        let found = entity::Entity::find()
            .filter(Condition::from(&query))
            .one(&self.db)
            .await?
            .is_some();

        Ok(found)
    }

    async fn replace(&self, product: Product) -> DatabaseResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.update(&self.db).await?;

        tracing::debug!(article_number = %model.article_number, "Replaced product row");
        Ok(model.into())
    }

    async fn remove(&self, query: ProductQuery) -> DatabaseResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(Condition::from(&query))
            .exec(&self.db)
            .await?;

        tracing::debug!(%query, rows_affected = result.rows_affected, "Removed product rows");
        Ok(result.rows_affected)
    }
}

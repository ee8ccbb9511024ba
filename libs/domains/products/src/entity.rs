use crate::models::{Product, ProductQuery};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::Condition;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub article_number: Uuid,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub discount_price: Decimal,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ingress: Option<String>,
    pub manufacturer: Option<String>,
    pub primary_image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            article_number: model.article_number,
            price: model.price,
            discount_price: model.discount_price,
            title: model.title,
            description: model.description,
            ingress: model.ingress,
            manufacturer: model.manufacturer,
            primary_image: model.primary_image,
        }
    }
}

// Every column is set: inserts write the full row and updates replace it
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            article_number: Set(product.article_number),
            price: Set(product.price),
            discount_price: Set(product.discount_price),
            title: Set(product.title),
            description: Set(product.description),
            ingress: Set(product.ingress),
            manufacturer: Set(product.manufacturer),
            primary_image: Set(product.primary_image),
        }
    }
}

impl From<&ProductQuery> for Condition {
    fn from(query: &ProductQuery) -> Self {
        match query {
            ProductQuery::ArticleNumber(id) => Condition::all().add(Column::ArticleNumber.eq(*id)),
            ProductQuery::Title(title) => Condition::all().add(Column::Title.eq(title.as_str())),
        }
    }
}

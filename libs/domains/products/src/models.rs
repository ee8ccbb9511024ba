use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Fractional digits a stored price keeps (`NUMERIC(19, 4)`)
const MONEY_SCALE: u32 = 4;

/// Integer digits a stored price keeps (`NUMERIC(19, 4)`)
const MONEY_INTEGER_DIGITS: u32 = 15;

/// Rejects negative amounts and any amount the price columns would round
/// or overflow.
///
/// Trailing zeros do not count towards the scale, so `1.50000` is accepted.
fn validate_money(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < Decimal::ZERO {
        return Err(ValidationError::new("negative_amount"));
    }
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(ValidationError::new("too_many_decimals"));
    }
    if amount.trunc() >= Decimal::from(10_i64.pow(MONEY_INTEGER_DIGITS)) {
        return Err(ValidationError::new("amount_too_large"));
    }
    Ok(())
}

/// Product entity
///
/// Also the request body for updates: the article number in the body
/// selects the product to replace.
///
/// Prices travel as JSON numbers with their exact decimal digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned at creation and never changed
    #[serde(alias = "articlenumber")]
    pub article_number: Uuid,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_money"))]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_money"))]
    pub discount_price: Decimal,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    /// Short summary shown in listings
    pub ingress: Option<String>,
    pub manufacturer: Option<String>,
    /// URL or identifier of the main product image
    pub primary_image: Option<String>,
}

/// DTO for creating a new product
///
/// Any article number in the request is ignored; a fresh one is generated.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_money"))]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_money"))]
    pub discount_price: Decimal,
    pub description: Option<String>,
    pub ingress: Option<String>,
    pub manufacturer: Option<String>,
    pub primary_image: Option<String>,
}

/// Body of lookup and delete requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ArticleNumberRequest {
    #[serde(rename = "articlenumber", alias = "articleNumber")]
    pub article_number: Uuid,
}

/// Selects which stored products an operation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    ArticleNumber(Uuid),
    /// Exact title match
    Title(String),
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductQuery::ArticleNumber(id) => product.article_number == *id,
            ProductQuery::Title(title) => product.title == *title,
        }
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductQuery::ArticleNumber(id) => write!(f, "article_number={}", id),
            ProductQuery::Title(title) => write!(f, "title={}", title),
        }
    }
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            article_number: Uuid::now_v7(),
            price: input.price,
            discount_price: input.discount_price,
            title: input.title,
            description: input.description,
            ingress: input.ingress,
            manufacturer: input.manufacturer,
            primary_image: input.primary_image,
        }
    }
}

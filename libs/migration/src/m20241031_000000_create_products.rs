use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_uuid(Products::ArticleNumber))
                    .col(decimal_len(Products::Price, 19, 4))
                    .col(decimal_len(Products::DiscountPrice, 19, 4).default(0))
                    .col(string(Products::Title))
                    .col(text_null(Products::Description))
                    .col(text_null(Products::Ingress))
                    .col(string_null(Products::Manufacturer))
                    .col(string_null(Products::PrimaryImage))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_title")
                    .table(Products::Table)
                    .col(Products::Title)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ArticleNumber,
    Price,
    DiscountPrice,
    Title,
    Description,
    Ingress,
    Manufacturer,
    PrimaryImage,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(string(Property::Title))
                    .col(text_null(Property::Description))
                    .col(string(Property::Address))
                    .col(string(Property::Category))
                    .col(double(Property::Price))
                    .col(integer(Property::Bedrooms).default(0))
                    .col(integer(Property::Bathrooms).default(0))
                    .col(string(Property::Status).default("available"))
                    .col(
                        timestamp_with_time_zone(Property::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Property::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_category")
                    .table(Property::Table)
                    .col(Property::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    Title,
    Description,
    Address,
    Category,
    Price,
    Bedrooms,
    Bathrooms,
    Status,
    CreatedAt,
    UpdatedAt,
}

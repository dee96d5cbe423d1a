use sea_orm_migration::prelude::*;

/// Creates the `app` table for the app directory.
///
/// `category` holds one of `recommended`, `reference` or `productivity`; the set is
/// enforced by the API layer, not by the schema.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum App {
    Table,
    Id,
    Name,
    Description,
    Rating,
    Image,
    Category,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(App::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(App::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(App::Name).text().not_null())
                    .col(ColumnDef::new(App::Description).text().null())
                    .col(ColumnDef::new(App::Rating).double().null())
                    .col(ColumnDef::new(App::Image).text().null())
                    .col(ColumnDef::new(App::Category).string_len(20).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(App::Table).to_owned())
            .await
    }
}

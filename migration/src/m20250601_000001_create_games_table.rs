use sea_orm_migration::prelude::*;

/// Creates the `games` table for the game catalog.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Title,
    Description,
    Category,
    Rating,
    Imageurl,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Title).text().not_null())
                    .col(ColumnDef::new(Games::Description).text().null())
                    .col(ColumnDef::new(Games::Category).text().null())
                    .col(ColumnDef::new(Games::Rating).double().null())
                    .col(ColumnDef::new(Games::Imageurl).text().null())
                    .to_owned(),
            )
            .await?;

        // Backs the distinct-category listing
        manager
            .create_index(
                Index::create()
                    .name("idx_games_category")
                    .table(Games::Table)
                    .col(Games::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

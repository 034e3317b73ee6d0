use sea_query::{ColumnDef, Index, Table};

use crate::table::Tag;

pub struct CreateTable;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Table::create()
            .table(Tag::Table)
            .col(
                ColumnDef::new(Tag::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Tag::Name).string().not_null().string_len(50))
            .col(
                ColumnDef::new(Tag::NameLower)
                    .string()
                    .not_null()
                    .string_len(50),
            )
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        super::execute(connection, Table::drop().table(Tag::Table).to_owned()).await
    }
}

pub struct CreateUk1;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUk1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::create()
            .name("uk_tag_name")
            .table(Tag::Table)
            .unique()
            .col(Tag::Name)
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::drop()
            .name("uk_tag_name")
            .table(Tag::Table)
            .to_owned();

        super::execute(connection, statement).await
    }
}

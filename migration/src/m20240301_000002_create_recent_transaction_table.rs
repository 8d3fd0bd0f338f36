use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // no foreign key to account
        manager
            .create_table(
                Table::create()
                    .table(RecentTransaction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecentTransaction::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Status)
                            .string_len(60)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp())
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Merchant)
                            .string_len(60)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::TransactionType)
                            .string_len(60)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Amount)
                            .decimal_len(10, 2)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Currency)
                            .string_len(5)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Tokens)
                            .decimal_len(9, 2)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(RecentTransaction::Details)
                            .string_len(100)
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(RecentTransaction::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecentTransaction {
    Table,
    Id,
    Status,
    Date,
    Merchant,
    TransactionType,
    Amount,
    Currency,
    Tokens,
    Details,
}

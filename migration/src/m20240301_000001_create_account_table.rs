use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Account::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Account::Email)
                            .string_len(254)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Account::FullName)
                            .string_len(50)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Account::ReferralCode)
                            .string_len(250)
                            .null()
                    )
                    .col(
                        ColumnDef::new(Account::Password)
                            .string_len(128)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Account::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Account::LastLogin)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(ColumnDef::new(Account::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Account::IsAdmin).boolean().not_null().default(false))
                    .col(ColumnDef::new(Account::IsStaff).boolean().not_null().default(false))
                    .col(ColumnDef::new(Account::IsSuperuser).boolean().not_null().default(false))
                    .to_owned()
            )
            .await?;

        // concurrent signups race past the application check, this index settles them
        manager
            .create_index(
                Index::create()
                    .name("uk_account_email")
                    .table(Account::Table)
                    .col(Account::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uk_account_email").table(Account::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Account::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
    Email,
    FullName,
    ReferralCode,
    Password,
    DateJoined,
    LastLogin,
    IsActive,
    IsAdmin,
    IsStaff,
    IsSuperuser,
}

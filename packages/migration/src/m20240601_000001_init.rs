use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    Photo,
    Role,
    IsVerified,
    Designation,
    BankAccountNo,
    Salary,
    Timestamp,
}

#[derive(Iden)]
enum Works {
    Table,
    Id,
    EmployeeEmail,
    EmployeeName,
    Category,
    Details,
    CreatedAt,
}

#[derive(Iden)]
enum Salaries {
    Table,
    Id,
    EmployeeEmail,
    Month,
    Year,
    Amount,
    TransactionId,
    PaidAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(ColumnDef::new(Users::Photo).string().null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(16)
                            .not_null()
                            .default("unset"),
                    )
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::Designation).string().null())
                    .col(ColumnDef::new(Users::BankAccountNo).string().null())
                    .col(ColumnDef::new(Users::Salary).double().null())
                    .col(ColumnDef::new(Users::Timestamp).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // works
        manager
            .create_table(
                Table::create()
                    .table(Works::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Works::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Works::EmployeeEmail).string().not_null())
                    .col(ColumnDef::new(Works::EmployeeName).string().null())
                    .col(ColumnDef::new(Works::Category).string().not_null())
                    .col(ColumnDef::new(Works::Details).json().not_null())
                    .col(ColumnDef::new(Works::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_works_employee_email")
                    .table(Works::Table)
                    .col(Works::EmployeeEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_works_category")
                    .table(Works::Table)
                    .col(Works::Category)
                    .to_owned(),
            )
            .await?;

        // salaries
        manager
            .create_table(
                Table::create()
                    .table(Salaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Salaries::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Salaries::EmployeeEmail).string().not_null())
                    .col(ColumnDef::new(Salaries::Month).string_len(16).not_null())
                    .col(ColumnDef::new(Salaries::Year).integer().not_null())
                    .col(ColumnDef::new(Salaries::Amount).double().not_null())
                    .col(ColumnDef::new(Salaries::TransactionId).string().null())
                    .col(ColumnDef::new(Salaries::PaidAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_salaries_employee_email")
                    .table(Salaries::Table)
                    .col(Salaries::EmployeeEmail)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order
        manager
            .drop_table(Table::drop().table(Salaries::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Works::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

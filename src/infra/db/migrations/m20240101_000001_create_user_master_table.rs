//! Migration: Create user_master table.

use sea_orm_migration::prelude::*;

use crate::config::{MAX_STATUS_LENGTH, MAX_USER_NAME_LENGTH, PHONE_NUMBER_DIGITS};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMaster::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserMaster::UserId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserMaster::UserName)
                            .string_len(MAX_USER_NAME_LENGTH as u32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserMaster::UserPassword).string().not_null())
                    .col(
                        ColumnDef::new(UserMaster::UserPhoneNumber)
                            .char_len(PHONE_NUMBER_DIGITS as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserMaster::DateOfRegistration)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserMaster::Status)
                            .string_len(MAX_STATUS_LENGTH as u32)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_master_status")
                    .table(UserMaster::Table)
                    .col(UserMaster::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMaster::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum UserMaster {
    Table,
    UserId,
    UserName,
    UserPassword,
    UserPhoneNumber,
    DateOfRegistration,
    Status,
}

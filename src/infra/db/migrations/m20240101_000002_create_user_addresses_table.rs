//! Migration: Create user_addresses table.
//!
//! Addresses are removed by the database when their user row is deleted.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_user_master_table::UserMaster;
use crate::config::MAX_ADDRESS_TYPE_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAddresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAddresses::AddressId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserAddresses::UserId).integer().not_null())
                    .col(ColumnDef::new(UserAddresses::FullAddress).text().not_null())
                    .col(
                        ColumnDef::new(UserAddresses::AddressType)
                            .string_len(MAX_ADDRESS_TYPE_LENGTH as u32)
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_addresses_user_id")
                            .from(UserAddresses::Table, UserAddresses::UserId)
                            .to(UserMaster::Table, UserMaster::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_addresses_user_id")
                    .table(UserAddresses::Table)
                    .col(UserAddresses::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAddresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserAddresses {
    Table,
    AddressId,
    UserId,
    FullAddress,
    AddressType,
}

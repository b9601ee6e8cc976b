//! `user_addresses` table.

use sea_orm::entity::prelude::*;

use crate::domain::Address;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub address_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub full_address: String,
    pub address_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_master::Entity",
        from = "Column::UserId",
        to = "super::user_master::Column::UserId",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user_master::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Address {
    fn from(model: Model) -> Self {
        Address {
            id: model.address_id,
            user_id: model.user_id,
            full_address: model.full_address,
            address_type: model.address_type,
        }
    }
}

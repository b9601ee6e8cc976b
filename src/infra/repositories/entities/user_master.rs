//! `user_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::{Password, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub user_name: String,
    /// Argon2 PHC string
    pub user_password: String,
    pub user_phone_number: String,
    pub date_of_registration: DateTimeUtc,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_address::Entity")]
    Addresses,
}

impl Related<super::user_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.user_id,
            user_name: model.user_name,
            password: Password::from_hash(model.user_password),
            phone_number: model.user_phone_number,
            date_of_registration: model.date_of_registration,
            status: model.status,
        }
    }
}

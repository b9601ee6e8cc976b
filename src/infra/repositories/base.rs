//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! Implemented by both the pooled stores and the transaction-scoped
//! repositories; the only thing an implementor supplies is the connection
//! the default methods run against.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use crate::errors::AppResult;

/// Anything holding a connection (pool or open transaction)
pub trait Connected: Send + Sync {
    type Conn: ConnectionTrait + Send + Sync;

    fn conn(&self) -> &Self::Conn;
}

/// Read operations (Query) - Single Responsibility
#[async_trait]
pub trait ReadRepository<E>: Connected
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Find a row by primary key
    async fn find_model(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<E::Model>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Send,
    {
        Ok(E::find_by_id(id).one(self.conn()).await?)
    }

    /// All rows in primary key order
    async fn find_all_models(&self) -> AppResult<Vec<E::Model>> {
        let query = E::PrimaryKey::iter()
            .fold(E::find(), |query, key| query.order_by_asc(key.into_column()));
        Ok(query.all(self.conn()).await?)
    }
}

/// Delete operations - Single Responsibility
#[async_trait]
pub trait DeleteRepository<E>: Connected
where
    E: EntityTrait,
{
    /// Delete a row by primary key. Returns false when no row matched.
    async fn delete_model(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<bool>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Send,
    {
        let result = E::delete_by_id(id).exec(self.conn()).await?;
        Ok(result.rows_affected > 0)
    }
}

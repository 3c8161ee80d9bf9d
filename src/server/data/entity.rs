use std::marker::PhantomData;

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

use crate::server::resource::Resource;

/// Store operations shared by every catalog resource.
///
/// The repository is keyed by the [`Resource`] whose records it reads and writes, so one
/// implementation serves characters, clans and jutsus alike.
pub struct EntityRepository<'a, R: Resource, C: ConnectionTrait> {
    db: &'a C,
    resource: PhantomData<R>,
}

impl<'a, R: Resource, C: ConnectionTrait> EntityRepository<'a, R, C> {
    /// Creates a new instance of [`EntityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Gets the record with the given id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find_by_id(id).one(self.db).await
    }

    /// Returns every stored record, in no particular order
    pub async fn list_all(&self) -> Result<Vec<R::Model>, DbErr> {
        R::Entity::find().all(self.db).await
    }

    /// Inserts a new record and returns it with its assigned id
    pub async fn insert(&self, record: R::ActiveModel) -> Result<R::Model, DbErr> {
        record.insert(self.db).await
    }

    /// Persists the changed columns of an existing record
    pub async fn update(&self, record: R::ActiveModel) -> Result<R::Model, DbErr> {
        record.update(self.db).await
    }

    /// Deletes a record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        R::Entity::delete_by_id(id).exec(self.db).await
    }
}

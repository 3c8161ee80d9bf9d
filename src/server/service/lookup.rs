use sea_orm::ConnectionTrait;

use crate::server::{
    data::entity::EntityRepository,
    error::{resource::ResourceError, Error},
    resource::Resource,
};

/// Finds records by id, treating a miss as an error.
pub struct LookupService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LookupService<'a, C> {
    /// Creates a new instance of [`LookupService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves the `R` record with the given id.
    ///
    /// # Arguments
    /// - `id` - Primary key of the record
    ///
    /// # Returns
    /// - `Ok(R::Model)` - The stored record
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No record has the id
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find<R: Resource>(&self, id: i32) -> Result<R::Model, Error> {
        EntityRepository::<R, C>::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| {
                ResourceError::NotFound {
                    kind: R::DESCRIPTOR.kind,
                    id,
                }
                .into()
            })
    }
}

use sea_orm::{ConnectionTrait, IntoActiveModel};

use crate::server::{
    data::entity::EntityRepository,
    error::{resource::ResourceError, Error},
    model::patch::FieldPatch,
    resource::Resource,
    service::lookup::LookupService,
};

/// Applies field patches to existing records.
///
/// Replace and partial update both go through [`MutationService::apply`]; they only differ
/// in which fields the resource puts into the patch.
pub struct MutationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MutationService<'a, C> {
    /// Creates a new instance of [`MutationService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes `patch` onto the `R` record with the given id.
    ///
    /// The record is looked up first, each patched column is set on it, and the changes are
    /// persisted as a single update. A patch without fields performs no write. Concurrent
    /// patches of the same record are not coordinated, the last write wins.
    ///
    /// # Arguments
    /// - `id` - Primary key of the record to update
    /// - `patch` - Column assignments to apply
    ///
    /// # Returns
    /// - `Ok(R::Model)` - The record as stored after the update, or the current record
    ///   without any write when `patch` is empty
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No record has the id
    /// - `Err(Error::ResourceError(ResourceError::InvalidReference))` - A patched foreign key
    ///   points at a record that does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn apply<R: Resource>(
        &self,
        id: i32,
        patch: FieldPatch<R::Entity>,
    ) -> Result<R::Model, Error> {
        let record = LookupService::new(self.db).find::<R>(id).await?;

        if patch.is_empty() {
            return Ok(record);
        }

        let mut record = record.into_active_model();
        patch.apply_to(&mut record);

        EntityRepository::<R, C>::new(self.db)
            .update(record)
            .await
            .map_err(|err| ResourceError::from_write(R::DESCRIPTOR.kind, err))
    }
}

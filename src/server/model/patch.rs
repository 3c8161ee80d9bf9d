use sea_orm::{ActiveModelTrait, EntityTrait, IdenStatic, Value};

/// Column assignments to apply to an existing record.
///
/// Built by each resource from its typed input and applied in order by
/// [`MutationService`](crate::server::service::mutation::MutationService). A patch only
/// names the columns the caller intends to change; columns it does not name keep their
/// stored values.
pub struct FieldPatch<E: EntityTrait> {
    fields: Vec<(E::Column, Value)>,
}

impl<E: EntityTrait> FieldPatch<E> {
    /// Creates a patch without assignments
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Assign `value` to `column`
    pub fn set<V: Into<Value>>(mut self, column: E::Column, value: V) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    /// Assign `value` to `column` only when the caller supplied one
    pub fn set_if_present<V: Into<Value>>(self, column: E::Column, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    /// Whether the patch assigns no column
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the assigned columns, in assignment order
    pub fn column_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(column, _)| column.as_str().to_string())
            .collect()
    }

    /// Writes every assignment onto `record`
    pub fn apply_to<A>(self, record: &mut A)
    where
        A: ActiveModelTrait<Entity = E>,
    {
        for (column, value) in self.fields {
            record.set(column, value);
        }
    }
}

impl<E: EntityTrait> Default for FieldPatch<E> {
    fn default() -> Self {
        Self::new()
    }
}

//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::UserRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Caller-supplied identifier; the constraint on this column is what
    /// rejects duplicate inserts.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for UserRecord {
    fn from(model: Model) -> Self {
        UserRecord {
            id: model.id,
            name: model.name,
        }
    }
}

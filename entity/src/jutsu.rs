use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jutsu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub r#type: Option<String>,
    pub rank: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_jutsu_link::Entity")]
    CharacterJutsuLink,
}

impl Related<super::character_jutsu_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterJutsuLink.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_jutsu_link::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_jutsu_link::Relation::Jutsu.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

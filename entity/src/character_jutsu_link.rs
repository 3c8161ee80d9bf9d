use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character_jutsu_link")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub jutsu_id: i32,
    pub learned_in_episode: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Character,
    #[sea_orm(
        belongs_to = "super::jutsu::Entity",
        from = "Column::JutsuId",
        to = "super::jutsu::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Jutsu,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::jutsu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jutsu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

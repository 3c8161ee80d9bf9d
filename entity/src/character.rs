use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub external_id: Option<String>,
    pub name: String,
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub clan_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clan::Entity",
        from = "Column::ClanId",
        to = "super::clan::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Clan,
    #[sea_orm(has_many = "super::character_jutsu_link::Entity")]
    CharacterJutsuLink,
}

impl Related<super::clan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clan.def()
    }
}

impl Related<super::character_jutsu_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterJutsuLink.def()
    }
}

impl Related<super::jutsu::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_jutsu_link::Relation::Jutsu.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_jutsu_link::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for `mentors`

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::mentor_participants::Entity")]
    MentorParticipants,
    #[sea_orm(has_many = "super::logbooks::Entity")]
    Logbooks,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::mentor_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorParticipants.def()
    }
}

impl Related<super::logbooks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logbooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

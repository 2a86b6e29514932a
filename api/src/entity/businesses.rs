//! `SeaORM` Entity for `businesses`

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub participant_id: Uuid,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub main_product: Option<String>,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::participants::Entity",
        from = "Column::ParticipantId",
        to = "super::participants::Column::Id"
    )]
    Participants,
    #[sea_orm(has_many = "super::business_employees::Entity")]
    BusinessEmployees,
}

impl Related<super::participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl Related<super::business_employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEmployees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

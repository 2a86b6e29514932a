//! `SeaORM` Entity for `participants`

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub legacy_tkm_id: Option<String>,
    pub profile_id: Option<Uuid>,
    pub university_id: Option<Uuid>,
    pub status: String,
    pub last_education: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ProfileId",
        to = "super::profiles::Column::Id"
    )]
    Profiles,
    #[sea_orm(
        belongs_to = "super::universities::Entity",
        from = "Column::UniversityId",
        to = "super::universities::Column::Id"
    )]
    Universities,
    #[sea_orm(has_many = "super::businesses::Entity")]
    Businesses,
    #[sea_orm(has_many = "super::monthly_reports::Entity")]
    MonthlyReports,
    #[sea_orm(has_many = "super::mentor_participants::Entity")]
    MentorParticipants,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl Related<super::universities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Universities.def()
    }
}

impl Related<super::businesses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Businesses.def()
    }
}

impl Related<super::monthly_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyReports.def()
    }
}

impl Related<super::mentor_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! PostgreSQL adapter for AnalyticsRepository
//!
//! Each method is a handful of flat queries joined in memory. The fact sets
//! are bounded by program size (thousands of participants), so growth and
//! grouping run in the domain rather than in SQL window functions.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use super::listing::{is_active, profiles_by_id};
use crate::domain::analytics::{MentorFacts, ParticipantFacts, RevenuePoint};
use crate::domain::entities::{
    EntityStatus, MeetingType, MentorId, ParticipantId, UniversityId, UniversityRef, VisitLog,
    VisitType,
};
use crate::domain::ports::AnalyticsRepository;
use crate::entity::{
    business_employees, businesses, logbooks, mentor_participants, mentors, monthly_reports,
    participants, profiles, universities, users,
};
use crate::error::DomainError;

/// PostgreSQL implementation of AnalyticsRepository
pub struct PostgresAnalyticsRepository {
    db: DatabaseConnection,
}

impl PostgresAnalyticsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn university_refs(&self) -> Result<HashMap<Uuid, UniversityRef>, DomainError> {
        let rows = universities::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|u| {
                let reference = UniversityRef {
                    id: UniversityId(u.id),
                    name: u.name,
                    status: EntityStatus::from(u.status.as_str()),
                };
                (u.id, reference)
            })
            .collect())
    }
}

fn active_participant_select() -> Select<participants::Entity> {
    participants::Entity::find().filter(is_active(participants::Column::Status))
}

/// (participant id, business name) of active participants, lowest business id first
fn business_select() -> Select<businesses::Entity> {
    businesses::Entity::find()
        .select_only()
        .column(businesses::Column::ParticipantId)
        .column(businesses::Column::Name)
        .join(JoinType::InnerJoin, businesses::Relation::Participants.def())
        .filter(is_active(participants::Column::Status))
        .order_by_asc(businesses::Column::Id)
}

/// (participant id, active employee count) of active participants
fn employee_count_select() -> Select<business_employees::Entity> {
    business_employees::Entity::find()
        .select_only()
        .column(businesses::Column::ParticipantId)
        .column_as(
            Expr::col((business_employees::Entity, business_employees::Column::Id)).count(),
            "employees",
        )
        .join(JoinType::InnerJoin, business_employees::Relation::Businesses.def())
        .join(JoinType::InnerJoin, businesses::Relation::Participants.def())
        .filter(business_employees::Column::IsActive.eq(true))
        .filter(is_active(participants::Column::Status))
        .group_by(businesses::Column::ParticipantId)
}

/// (participant id, year, month, revenue) of active participants
fn report_select() -> Select<monthly_reports::Entity> {
    monthly_reports::Entity::find()
        .select_only()
        .column(monthly_reports::Column::ParticipantId)
        .column(monthly_reports::Column::ReportYear)
        .column(monthly_reports::Column::ReportMonth)
        .column(monthly_reports::Column::Revenue)
        .join(JoinType::InnerJoin, monthly_reports::Relation::Participants.def())
        .filter(is_active(participants::Column::Status))
}

/// (mentor id, username, full name, avatar, profile university)
fn roster_select() -> Select<mentors::Entity> {
    mentors::Entity::find()
        .select_only()
        .column(mentors::Column::Id)
        .column(users::Column::Username)
        .column(profiles::Column::FullName)
        .column(profiles::Column::AvatarUrl)
        .column(profiles::Column::UniversityId)
        .join(JoinType::InnerJoin, mentors::Relation::Users.def())
        .join(JoinType::LeftJoin, users::Relation::Profiles.def())
}

/// (mentor id, participant id) of active assignments
fn assignment_select() -> Select<mentor_participants::Entity> {
    mentor_participants::Entity::find()
        .select_only()
        .column(mentor_participants::Column::MentorId)
        .column(mentor_participants::Column::ParticipantId)
        .filter(is_active(mentor_participants::Column::Status))
        .order_by_asc(mentor_participants::Column::ParticipantId)
}

fn countable_visit_select() -> Select<logbooks::Entity> {
    logbooks::Entity::find()
        .select_only()
        .column(logbooks::Column::MentorId)
        .column(logbooks::Column::ParticipantId)
        .column(logbooks::Column::MeetingType)
        .column(logbooks::Column::VisitType)
        .column(logbooks::Column::LogbookDate)
        .filter(logbooks::Column::MeetingType.eq(MeetingType::Individual.as_str()))
        .filter(logbooks::Column::VisitType.is_in(VisitType::IN_PERSON.map(|v| v.as_str())))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl AnalyticsRepository for PostgresAnalyticsRepository {
    async fn active_participants(&self) -> Result<Vec<ParticipantFacts>, DomainError> {
        let rows = active_participant_select()
            .order_by_asc(participants::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let profiles = profiles_by_id(&self.db, rows.iter().filter_map(|p| p.profile_id)).await?;
        let universities = self.university_refs().await?;

        let business_rows: Vec<(Uuid, Option<String>)> = business_select()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut business_names: HashMap<Uuid, Option<String>> = HashMap::new();
        for (participant_id, name) in business_rows {
            business_names.entry(participant_id).or_insert(name);
        }

        let employees: HashMap<Uuid, i64> = employee_count_select()
            .into_tuple::<(Uuid, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .collect();

        let report_rows: Vec<(Uuid, i32, i32, Option<Decimal>)> = report_select()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut reports: HashMap<Uuid, Vec<RevenuePoint>> = HashMap::new();
        for (participant_id, year, month, revenue) in report_rows {
            reports.entry(participant_id).or_default().push(RevenuePoint::new(
                year,
                month.max(0) as u32,
                revenue.and_then(|r| r.to_f64()),
            ));
        }

        Ok(rows
            .into_iter()
            .map(|p| {
                let profile = p.profile_id.and_then(|id| profiles.get(&id));
                let university = p
                    .university_id
                    .or_else(|| profile.and_then(|pr| pr.university_id))
                    .and_then(|id| universities.get(&id))
                    .cloned();

                ParticipantFacts {
                    id: ParticipantId(p.id),
                    name: profile
                        .and_then(|pr| pr.full_name.clone())
                        .unwrap_or_default(),
                    business_name: business_names
                        .get(&p.id)
                        .cloned()
                        .flatten()
                        .unwrap_or_default(),
                    photo: profile.and_then(|pr| pr.avatar_url.clone()),
                    status: EntityStatus::from(p.status.as_str()),
                    university,
                    city: non_blank(profile.and_then(|pr| pr.city.clone())),
                    active_employees: employees.get(&p.id).copied().unwrap_or(0).max(0) as u64,
                    reports: reports.remove(&p.id).unwrap_or_default(),
                }
            })
            .collect())
    }

    async fn mentor_roster(&self) -> Result<Vec<MentorFacts>, DomainError> {
        let rows: Vec<(Uuid, String, Option<String>, Option<String>, Option<Uuid>)> =
            roster_select()
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;

        let universities = self.university_refs().await?;

        let assignments: Vec<(Uuid, Uuid)> = assignment_select()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut assigned: HashMap<Uuid, Vec<ParticipantId>> = HashMap::new();
        for (mentor_id, participant_id) in assignments {
            assigned
                .entry(mentor_id)
                .or_default()
                .push(ParticipantId(participant_id));
        }

        // One entry per mentor even if the user has several profiles
        let mut roster: BTreeMap<Uuid, MentorFacts> = BTreeMap::new();
        for (id, username, full_name, avatar, university_id) in rows {
            roster.entry(id).or_insert_with(|| MentorFacts {
                id: MentorId(id),
                name: non_blank(full_name).unwrap_or(username),
                photo: avatar,
                university: university_id.and_then(|u| universities.get(&u)).cloned(),
                participant_ids: assigned.remove(&id).unwrap_or_default(),
            });
        }

        let mut mentors: Vec<MentorFacts> = roster.into_values().collect();
        mentors.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(mentors)
    }

    async fn countable_visits(&self) -> Result<Vec<VisitLog>, DomainError> {
        let rows: Vec<(Uuid, Option<Uuid>, Option<String>, Option<String>, NaiveDate)> =
            countable_visit_select()
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(mentor_id, participant_id, meeting, visit, date)| VisitLog {
                mentor_id: MentorId(mentor_id),
                participant_id: participant_id.map(ParticipantId),
                meeting_type: MeetingType::from(meeting.as_deref().unwrap_or_default()),
                visit_type: VisitType::from(visit.as_deref().unwrap_or_default()),
                date,
            })
            .filter(VisitLog::is_countable)
            .collect())
    }

    async fn count_active_universities(&self) -> Result<u64, DomainError> {
        universities::Entity::find()
            .filter(is_active(universities::Column::Status))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

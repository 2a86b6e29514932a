//! PostgreSQL adapter for MonthlyReportRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use super::listing::{
    contains, mentor_labels, order, participant_labels, resolve_search, window, MentorLabel,
    ParticipantLabel, SearchMatch,
};
use crate::domain::entities::{
    MentorId, MonthlyReportEntry, MonthlyReportId, ParticipantId, ReportPeriod,
};
use crate::domain::listing::{
    parse_flag, parse_number, DayRange, OutputFilter, OutputQuery, OutputSort,
};
use crate::domain::ports::MonthlyReportRepository;
use crate::entity::{mentors, monthly_reports, participants, profiles, users};
use crate::error::DomainError;

/// PostgreSQL implementation of MonthlyReportRepository
pub struct PostgresMonthlyReportRepository {
    db: DatabaseConnection,
}

impl PostgresMonthlyReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn enrich(
        &self,
        rows: Vec<monthly_reports::Model>,
    ) -> Result<Vec<MonthlyReportEntry>, DomainError> {
        let mentors = mentor_labels(&self.db, rows.iter().filter_map(|r| r.mentor_id)).await?;
        let participants =
            participant_labels(&self.db, rows.iter().map(|r| r.participant_id)).await?;

        Ok(rows
            .into_iter()
            .map(|model| to_entry(model, &mentors, &participants))
            .collect())
    }
}

fn to_entry(
    model: monthly_reports::Model,
    mentors: &HashMap<Uuid, MentorLabel>,
    participants: &HashMap<Uuid, ParticipantLabel>,
) -> MonthlyReportEntry {
    let mentor = model
        .mentor_id
        .and_then(|id| mentors.get(&id))
        .cloned()
        .unwrap_or_default();
    let participant = participants
        .get(&model.participant_id)
        .cloned()
        .unwrap_or_default();

    MonthlyReportEntry {
        id: MonthlyReportId(model.id),
        participant_id: ParticipantId(model.participant_id),
        id_tkm: participant.legacy_id,
        participant_name: participant.name,
        mentor_id: model.mentor_id.map(MentorId),
        mentor_name: mentor.name,
        mentor_university: mentor.university,
        period: ReportPeriod::new(model.report_year, model.report_month.max(0) as u32),
        revenue: model.revenue.and_then(|d| d.to_f64()),
        sales_volume: model.sales_volume.and_then(|d| d.to_f64()),
        sales_volume_unit: model.sales_unit,
        marketing_area: model.marketing_area,
        business_condition: model.business_condition,
        obstacle: model.obstacles,
        isverified: model.is_verified,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn list_select(
    query: &OutputQuery,
    search: Option<&SearchMatch>,
) -> Select<monthly_reports::Entity> {
    let mut select = monthly_reports::Entity::find();

    if let Some(search) = search {
        select = select.filter(
            Condition::any()
                .add(contains(monthly_reports::Column::Obstacles, &search.pattern))
                .add(contains(monthly_reports::Column::BusinessCondition, &search.pattern))
                .add(search.related(
                    monthly_reports::Column::MentorId,
                    monthly_reports::Column::ParticipantId,
                )),
        );
    }

    for (filter, value) in &query.filters {
        select = match filter {
            OutputFilter::Condition => {
                select.filter(monthly_reports::Column::BusinessCondition.eq(value.as_str()))
            }
            OutputFilter::Verified => match parse_flag(value) {
                Some(flag) => select.filter(monthly_reports::Column::IsVerified.eq(flag)),
                None => select,
            },
            OutputFilter::Date => match DayRange::parse(value) {
                Some(day) => select
                    .filter(monthly_reports::Column::UpdatedAt.gte(day.start_utc()))
                    .filter(monthly_reports::Column::UpdatedAt.lt(day.end_utc())),
                None => select,
            },
            OutputFilter::Year => match parse_i32(value) {
                Some(year) => select.filter(monthly_reports::Column::ReportYear.eq(year)),
                None => select,
            },
            OutputFilter::Month => match parse_i32(value) {
                Some(month) => select.filter(monthly_reports::Column::ReportMonth.eq(month)),
                None => select,
            },
        };
    }

    select
}

fn parse_i32(value: &str) -> Option<i32> {
    parse_number(value).and_then(|n| i32::try_from(n).ok())
}

fn sorted(
    select: Select<monthly_reports::Entity>,
    query: &OutputQuery,
) -> Select<monthly_reports::Entity> {
    let direction = order(query.order);
    let select = match query.sort {
        OutputSort::Period => select
            .order_by(monthly_reports::Column::ReportYear, direction.clone())
            .order_by(monthly_reports::Column::ReportMonth, direction),
        OutputSort::Verified => select.order_by(monthly_reports::Column::IsVerified, direction),
        OutputSort::Condition => {
            select.order_by(monthly_reports::Column::BusinessCondition, direction)
        }
        OutputSort::Revenue => select.order_by(monthly_reports::Column::Revenue, direction),
        OutputSort::UpdatedAt => select.order_by(monthly_reports::Column::UpdatedAt, direction),
        OutputSort::Mentor => select
            .join(JoinType::LeftJoin, monthly_reports::Relation::Mentors.def())
            .join(JoinType::LeftJoin, mentors::Relation::Users.def())
            .join(JoinType::LeftJoin, users::Relation::Profiles.def())
            .order_by(profiles::Column::FullName, direction),
        OutputSort::Participant => select
            .join(JoinType::InnerJoin, monthly_reports::Relation::Participants.def())
            .order_by(participants::Column::LegacyTkmId, direction),
    };
    select.order_by_asc(monthly_reports::Column::Id)
}

#[async_trait]
impl MonthlyReportRepository for PostgresMonthlyReportRepository {
    async fn list(
        &self,
        query: &OutputQuery,
    ) -> Result<(Vec<MonthlyReportEntry>, u64), DomainError> {
        let search = resolve_search(&self.db, query.search.as_deref()).await?;
        let select = list_select(query, search.as_ref());

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let rows = window(sorted(select, query), &query.pagination)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok((self.enrich(rows).await?, total))
    }

    async fn find_by_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Vec<MonthlyReportEntry>, DomainError> {
        let rows = monthly_reports::Entity::find()
            .filter(monthly_reports::Column::ParticipantId.eq(participant_id.0))
            .order_by_asc(monthly_reports::Column::ReportYear)
            .order_by_asc(monthly_reports::Column::ReportMonth)
            .order_by_asc(monthly_reports::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        self.enrich(rows).await
    }
}

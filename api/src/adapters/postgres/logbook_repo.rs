//! PostgreSQL adapter for LogbookRepository

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use super::listing::{
    contains, mentor_labels, order, participant_labels, resolve_search, window, SearchMatch,
};
use crate::domain::entities::{LogbookEntry, LogbookId, MentorId, ParticipantId};
use crate::domain::listing::{parse_uuid, DayRange, LogbookFilter, LogbookQuery, LogbookSort};
use crate::domain::ports::LogbookRepository;
use crate::entity::{logbooks, mentors, participants, profiles, users};
use crate::error::DomainError;

/// PostgreSQL implementation of LogbookRepository
pub struct PostgresLogbookRepository {
    db: DatabaseConnection,
}

impl PostgresLogbookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn list_select(query: &LogbookQuery, search: Option<&SearchMatch>) -> Select<logbooks::Entity> {
    let mut select = logbooks::Entity::find();

    if let Some(search) = search {
        select = select.filter(
            Condition::any()
                .add(contains(logbooks::Column::ActivitySummary, &search.pattern))
                .add(contains(logbooks::Column::MentoringMaterial, &search.pattern))
                .add(contains(logbooks::Column::Obstacle, &search.pattern))
                .add(contains(logbooks::Column::Solutions, &search.pattern))
                .add(search.related(logbooks::Column::MentorId, logbooks::Column::ParticipantId)),
        );
    }

    for (filter, value) in &query.filters {
        select = match filter {
            LogbookFilter::Verified => {
                select.filter(logbooks::Column::Verified.eq(value.as_str()))
            }
            LogbookFilter::MeetingType => {
                select.filter(logbooks::Column::MeetingType.eq(value.as_str()))
            }
            LogbookFilter::VisitType => {
                select.filter(logbooks::Column::VisitType.eq(value.as_str()))
            }
            LogbookFilter::Date => match DayRange::parse(value) {
                Some(day) => select
                    .filter(logbooks::Column::LogbookDate.gte(day.start))
                    .filter(logbooks::Column::LogbookDate.lt(day.end)),
                None => select,
            },
            LogbookFilter::Mentor => match parse_uuid(value) {
                Some(id) => select.filter(logbooks::Column::MentorId.eq(id)),
                None => select,
            },
        };
    }

    select
}

fn sorted(select: Select<logbooks::Entity>, query: &LogbookQuery) -> Select<logbooks::Entity> {
    let direction = order(query.order);
    let select = match query.sort {
        LogbookSort::LogbookDate => select.order_by(logbooks::Column::LogbookDate, direction),
        LogbookSort::Verified => select.order_by(logbooks::Column::Verified, direction),
        LogbookSort::UpdatedAt => select.order_by(logbooks::Column::UpdatedAt, direction),
        LogbookSort::Mentor => select
            .join(JoinType::InnerJoin, logbooks::Relation::Mentors.def())
            .join(JoinType::InnerJoin, mentors::Relation::Users.def())
            .join(JoinType::LeftJoin, users::Relation::Profiles.def())
            .order_by(profiles::Column::FullName, direction),
        LogbookSort::Participant => select
            .join(JoinType::LeftJoin, logbooks::Relation::Participants.def())
            .order_by(participants::Column::LegacyTkmId, direction),
    };
    select.order_by_asc(logbooks::Column::Id)
}

#[async_trait]
impl LogbookRepository for PostgresLogbookRepository {
    async fn list(&self, query: &LogbookQuery) -> Result<(Vec<LogbookEntry>, u64), DomainError> {
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

        let mentors = mentor_labels(&self.db, rows.iter().map(|l| l.mentor_id)).await?;
        let participants =
            participant_labels(&self.db, rows.iter().filter_map(|l| l.participant_id)).await?;

        let data = rows
            .into_iter()
            .map(|model| {
                let mentor = mentors.get(&model.mentor_id).cloned().unwrap_or_default();
                let participant = model
                    .participant_id
                    .and_then(|id| participants.get(&id))
                    .cloned()
                    .unwrap_or_default();

                LogbookEntry {
                    id: LogbookId(model.id),
                    mentor_id: MentorId(model.mentor_id),
                    mentor_name: mentor.name,
                    mentor_university: mentor.university,
                    participant_id: model.participant_id.map(ParticipantId),
                    participant_name: participant.name,
                    logbook_date: model.logbook_date,
                    meeting_type: model.meeting_type,
                    visit_type: model.visit_type,
                    delivery_method: model.delivery_method,
                    activity_summary: model.activity_summary,
                    mentoring_material: model.mentoring_material,
                    obstacle: model.obstacle,
                    solutions: model.solutions,
                    total_expense: model.total_expense.and_then(|d| d.to_f64()),
                    verified: model.verified,
                    created_at: model.created_at.with_timezone(&Utc),
                    updated_at: model.updated_at.with_timezone(&Utc),
                }
            })
            .collect();

        Ok((data, total))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use uuid::Uuid;

    use super::super::listing::sql;
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> LogbookQuery {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogbookQuery::from_params(&params)
    }

    #[test]
    fn date_filter_is_a_half_open_day() {
        let q = query(&[("date", "2024-05-01")]);
        let (sql, values) = sql::build(&list_select(&q, None));

        assert!(sql.contains(r#""logbooks"."logbook_date" >= $1"#), "{sql}");
        assert!(sql.contains(r#""logbooks"."logbook_date" < $2"#), "{sql}");
        assert!(values.contains("2024-05-01") && values.contains("2024-05-02"), "{values}");
    }

    #[test]
    fn bad_date_is_ignored() {
        let q = query(&[("date", "last tuesday")]);
        let (sql, _) = sql::build(&list_select(&q, None));
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn search_folds_in_related_ids() {
        let mentor = Uuid::new_v4();
        let participant = Uuid::new_v4();
        let search = SearchMatch {
            pattern: "%budi%".to_string(),
            mentor_ids: vec![mentor],
            participant_ids: vec![participant],
        };
        let q = query(&[("search", "Budi")]);
        let (sql, values) = sql::build(&list_select(&q, Some(&search)));

        assert!(sql.contains(r#"LOWER("logbooks"."activity_summary")"#), "{sql}");
        assert!(sql.contains(r#""logbooks"."mentor_id" IN ("#), "{sql}");
        assert!(sql.contains(r#""logbooks"."participant_id" IN ("#), "{sql}");
        assert!(values.contains(&mentor.to_string()), "{values}");
    }

    #[test]
    fn mentor_sort_joins_profile_name() {
        let q = query(&[("sortBy", "pendamping"), ("sortOrder", "asc")]);
        let (sql, _) = sql::build(&sorted(list_select(&q, None), &q));
        assert!(
            sql.contains(r#"ORDER BY "profiles"."full_name" ASC, "logbooks"."id" ASC"#),
            "{sql}"
        );
    }

    #[test]
    fn default_sort_is_latest_logbook_first() {
        let q = query(&[]);
        let (sql, _) = sql::build(&sorted(list_select(&q, None), &q));
        assert!(sql.contains(r#"ORDER BY "logbooks"."logbook_date" DESC"#), "{sql}");
    }
}

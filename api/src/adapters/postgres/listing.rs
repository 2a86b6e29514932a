//! SQL building blocks shared by the list repositories
//!
//! Only columns chosen by an exhaustive `match` on an allowlist enum reach
//! the SQL text. Search terms and filter values are always bound.

use std::collections::HashMap;

use sea_orm::sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, Order, QueryFilter,
    QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use crate::domain::entities::EntityStatus;
use crate::domain::listing::{like_pattern, Pagination, SortOrder};
use crate::entity::{mentors, participants, profiles, universities, users};
use crate::error::DomainError;

pub(super) fn order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

/// `LOWER(col) LIKE pattern ESCAPE '\'`; `pattern` comes from `like_pattern`.
pub(super) fn contains<C: ColumnTrait>(column: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

/// `LOWER(TRIM(status)) = 'active'`, matching `EntityStatus::from`
pub(super) fn is_active<C: ColumnTrait>(column: C) -> SimpleExpr {
    let trimmed = Func::cust(Alias::new("TRIM")).arg(Expr::col((column.entity_name(), column)));
    Expr::expr(Func::lower(trimmed)).eq(EntityStatus::ACTIVE)
}

/// Apply the page window. Postgres offsets are signed 64-bit.
pub(super) fn window<E: EntityTrait>(select: Select<E>, pagination: &Pagination) -> Select<E> {
    select
        .offset(pagination.offset().min(i64::MAX as u64))
        .limit(pagination.limit())
}

/// Mentors whose profile name or profile university name matches
pub(super) fn mentor_search(pattern: &str) -> Select<mentors::Entity> {
    mentors::Entity::find()
        .select_only()
        .column(mentors::Column::Id)
        .join(JoinType::InnerJoin, mentors::Relation::Users.def())
        .join(JoinType::LeftJoin, users::Relation::Profiles.def())
        .join(JoinType::LeftJoin, profiles::Relation::Universities.def())
        .filter(
            Condition::any()
                .add(contains(profiles::Column::FullName, pattern))
                .add(contains(universities::Column::Name, pattern)),
        )
}

/// Participants whose profile name or legacy id matches
pub(super) fn participant_search(pattern: &str) -> Select<participants::Entity> {
    participants::Entity::find()
        .select_only()
        .column(participants::Column::Id)
        .join(JoinType::LeftJoin, participants::Relation::Profiles.def())
        .filter(
            Condition::any()
                .add(contains(profiles::Column::FullName, pattern))
                .add(contains(participants::Column::LegacyTkmId, pattern)),
        )
}

/// A search term plus the related rows it already matched
#[derive(Debug, Clone, Default)]
pub(super) struct SearchMatch {
    pub pattern: String,
    pub mentor_ids: Vec<Uuid>,
    pub participant_ids: Vec<Uuid>,
}

impl SearchMatch {
    /// `col IN (...)` for each non-empty id set, to be OR-ed with the
    /// entity's own text columns.
    pub fn related<M, P>(&self, mentor_column: M, participant_column: P) -> Condition
    where
        M: ColumnTrait,
        P: ColumnTrait,
    {
        let mut condition = Condition::any();
        if !self.mentor_ids.is_empty() {
            condition = condition.add(mentor_column.is_in(self.mentor_ids.iter().copied()));
        }
        if !self.participant_ids.is_empty() {
            condition =
                condition.add(participant_column.is_in(self.participant_ids.iter().copied()));
        }
        condition
    }
}

/// Resolve a search term against related mentors and participants.
pub(super) async fn resolve_search(
    db: &DatabaseConnection,
    search: Option<&str>,
) -> Result<Option<SearchMatch>, DomainError> {
    let Some(term) = search else {
        return Ok(None);
    };
    let pattern = like_pattern(term);

    let mentor_ids: Vec<Uuid> = mentor_search(&pattern)
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    let participant_ids: Vec<Uuid> = participant_search(&pattern)
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(Some(SearchMatch {
        pattern,
        mentor_ids,
        participant_ids,
    }))
}

pub(super) async fn universities_by_id(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, universities::Model>, DomainError> {
    let ids: Vec<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = universities::Entity::find()
        .filter(universities::Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(rows.into_iter().map(|u| (u.id, u)).collect())
}

pub(super) async fn profiles_by_id(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, profiles::Model>, DomainError> {
    let ids: Vec<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = profiles::Entity::find()
        .filter(profiles::Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(rows.into_iter().map(|p| (p.id, p)).collect())
}

/// Display name and university name of a mentor
#[derive(Debug, Clone, Default)]
pub(super) struct MentorLabel {
    pub name: Option<String>,
    pub university: Option<String>,
}

pub(super) async fn mentor_labels(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, MentorLabel>, DomainError> {
    let ids: Vec<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(Uuid, String, Option<String>, Option<String>)> = mentors::Entity::find()
        .select_only()
        .column(mentors::Column::Id)
        .column(users::Column::Username)
        .column(profiles::Column::FullName)
        .column(universities::Column::Name)
        .join(JoinType::InnerJoin, mentors::Relation::Users.def())
        .join(JoinType::LeftJoin, users::Relation::Profiles.def())
        .join(JoinType::LeftJoin, profiles::Relation::Universities.def())
        .filter(mentors::Column::Id.is_in(ids))
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, username, full_name, university)| {
            let label = MentorLabel {
                name: full_name.or(Some(username)),
                university,
            };
            (id, label)
        })
        .collect())
}

/// Legacy id and display name of a participant
#[derive(Debug, Clone, Default)]
pub(super) struct ParticipantLabel {
    pub legacy_id: Option<String>,
    pub name: Option<String>,
}

pub(super) async fn participant_labels(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, ParticipantLabel>, DomainError> {
    let ids: Vec<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(Uuid, Option<String>, Option<String>)> = participants::Entity::find()
        .select_only()
        .column(participants::Column::Id)
        .column(participants::Column::LegacyTkmId)
        .column(profiles::Column::FullName)
        .join(JoinType::LeftJoin, participants::Relation::Profiles.def())
        .filter(participants::Column::Id.is_in(ids))
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, legacy_id, name)| (id, ParticipantLabel { legacy_id, name }))
        .collect())
}

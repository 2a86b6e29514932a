//! PostgreSQL adapter for MentorRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use super::listing::{contains, order, universities_by_id, window};
use crate::domain::entities::{MentorId, MentorSummary, UniversityBrief, UniversityId};
use crate::domain::listing::{like_pattern, parse_uuid, MentorFilter, MentorQuery, MentorSort};
use crate::domain::ports::MentorRepository;
use crate::entity::{mentors, profiles, universities, users};
use crate::error::DomainError;

/// PostgreSQL implementation of MentorRepository
pub struct PostgresMentorRepository {
    db: DatabaseConnection,
}

impl PostgresMentorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn list_select(query: &MentorQuery) -> Select<mentors::Entity> {
    let mut select = mentors::Entity::find()
        .join(JoinType::InnerJoin, mentors::Relation::Users.def())
        .join(JoinType::LeftJoin, users::Relation::Profiles.def())
        .join(JoinType::LeftJoin, profiles::Relation::Universities.def());

    if let Some(term) = &query.search {
        let pattern = like_pattern(term);
        select = select.filter(
            Condition::any()
                .add(contains(profiles::Column::FullName, &pattern))
                .add(contains(users::Column::Username, &pattern))
                .add(contains(users::Column::Email, &pattern))
                .add(contains(universities::Column::Name, &pattern)),
        );
    }

    for (filter, value) in &query.filters {
        select = match filter {
            MentorFilter::University => match parse_uuid(value) {
                Some(id) => select.filter(profiles::Column::UniversityId.eq(id)),
                None => select,
            },
        };
    }

    select
}

fn sorted(select: Select<mentors::Entity>, query: &MentorQuery) -> Select<mentors::Entity> {
    let direction = order(query.order);
    let select = match query.sort {
        MentorSort::Name => select.order_by(profiles::Column::FullName, direction),
        MentorSort::Email => select.order_by(users::Column::Email, direction),
        MentorSort::University => select.order_by(universities::Column::Name, direction),
    };
    select.order_by_asc(mentors::Column::Id)
}

#[async_trait]
impl MentorRepository for PostgresMentorRepository {
    async fn list(&self, query: &MentorQuery) -> Result<(Vec<MentorSummary>, u64), DomainError> {
        let select = list_select(query);

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let rows = window(sorted(select, query), &query.pagination)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        if rows.is_empty() {
            return Ok((Vec::new(), total));
        }

        let user_ids: Vec<Uuid> = rows.iter().map(|m| m.user_id).collect();

        let users: HashMap<Uuid, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let profiles: HashMap<Uuid, profiles::Model> = profiles::Entity::find()
            .filter(profiles::Column::UserId.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .filter_map(|p| p.user_id.map(|user_id| (user_id, p)))
            .collect();

        let universities =
            universities_by_id(&self.db, profiles.values().filter_map(|p| p.university_id))
                .await?;

        let data = rows
            .iter()
            .map(|m| {
                let user = users.get(&m.user_id);
                let profile = profiles.get(&m.user_id);
                let university = profile
                    .and_then(|p| p.university_id)
                    .and_then(|id| universities.get(&id))
                    .map(|u| UniversityBrief {
                        id: UniversityId(u.id),
                        name: u.name.clone(),
                        city: u.city.clone(),
                        province: u.province.clone(),
                    });

                MentorSummary {
                    id: MentorId(m.id),
                    name: profile
                        .and_then(|p| p.full_name.clone())
                        .or_else(|| user.map(|u| u.username.clone()))
                        .unwrap_or_default(),
                    email: user.and_then(|u| u.email.clone()).unwrap_or_default(),
                    phone: profile
                        .and_then(|p| p.whatsapp_number.clone())
                        .unwrap_or_default(),
                    gender: profile.and_then(|p| p.gender.clone()).unwrap_or_default(),
                    photo: profile.and_then(|p| p.avatar_url.clone()),
                    university,
                }
            })
            .collect();

        Ok((data, total))
    }
}

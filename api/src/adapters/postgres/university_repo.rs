//! PostgreSQL adapter for UniversityRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};

use super::listing::{contains, order, window};
use crate::domain::entities::{University, UniversityId};
use crate::domain::listing::{like_pattern, UniversityFilter, UniversityQuery, UniversitySort};
use crate::domain::ports::UniversityRepository;
use crate::entity::universities;
use crate::error::DomainError;

/// PostgreSQL implementation of UniversityRepository
pub struct PostgresUniversityRepository {
    db: DatabaseConnection,
}

impl PostgresUniversityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn list_select(query: &UniversityQuery) -> Select<universities::Entity> {
    let mut select = universities::Entity::find();

    if let Some(term) = &query.search {
        let pattern = like_pattern(term);
        select = select.filter(
            Condition::any()
                .add(contains(universities::Column::Name, &pattern))
                .add(contains(universities::Column::Address, &pattern))
                .add(contains(universities::Column::City, &pattern))
                .add(contains(universities::Column::Province, &pattern)),
        );
    }

    for (filter, value) in &query.filters {
        let column = match filter {
            UniversityFilter::Status => universities::Column::Status,
            UniversityFilter::City => universities::Column::City,
            UniversityFilter::Province => universities::Column::Province,
        };
        select = select.filter(column.eq(value.as_str()));
    }

    select
}

fn sorted(
    select: Select<universities::Entity>,
    query: &UniversityQuery,
) -> Select<universities::Entity> {
    let column = match query.sort {
        UniversitySort::Name => universities::Column::Name,
        UniversitySort::City => universities::Column::City,
        UniversitySort::Province => universities::Column::Province,
        UniversitySort::Status => universities::Column::Status,
    };
    select
        .order_by(column, order(query.order))
        .order_by_asc(universities::Column::Id)
}

#[async_trait]
impl UniversityRepository for PostgresUniversityRepository {
    async fn list(&self, query: &UniversityQuery) -> Result<(Vec<University>, u64), DomainError> {
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

        Ok((rows.into_iter().map(|m| m.into()).collect(), total))
    }
}

/// Convert SeaORM model to domain entity
impl From<universities::Model> for University {
    fn from(model: universities::Model) -> Self {
        University {
            id: UniversityId(model.id),
            name: model.name,
            alamat: model.address,
            city: model.city,
            province: model.province,
            status: model.status,
            photo: model.photo_url,
        }
    }
}

//! PostgreSQL adapter for ParticipantRepository

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select,
};
use uuid::Uuid;

use super::listing::{contains, order, profiles_by_id, universities_by_id, window};
use crate::domain::entities::{
    ParticipantDetail, ParticipantFilterOptions, ParticipantId, ParticipantSummary,
};
use crate::domain::listing::{
    like_pattern, parse_uuid, ParticipantFilter, ParticipantQuery, ParticipantSort,
};
use crate::domain::ports::ParticipantRepository;
use crate::entity::{business_employees, businesses, participants, profiles, universities};
use crate::error::DomainError;

/// PostgreSQL implementation of ParticipantRepository
pub struct PostgresParticipantRepository {
    db: DatabaseConnection,
}

impl PostgresParticipantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile, first business and owning university of each participant
    async fn related(&self, rows: &[participants::Model]) -> Result<RelatedRows, DomainError> {
        let profiles = profiles_by_id(&self.db, rows.iter().filter_map(|p| p.profile_id)).await?;

        let businesses = businesses::Entity::find()
            .filter(businesses::Column::ParticipantId.is_in(rows.iter().map(|p| p.id)))
            .order_by_asc(businesses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut by_participant: HashMap<Uuid, businesses::Model> = HashMap::new();
        for business in businesses {
            by_participant.entry(business.participant_id).or_insert(business);
        }

        let university_ids: BTreeSet<Uuid> = rows
            .iter()
            .filter_map(|p| owning_university(p, &profiles))
            .collect();
        let universities = universities_by_id(&self.db, university_ids).await?;

        Ok(RelatedRows {
            profiles,
            businesses: by_participant,
            universities,
        })
    }
}

struct RelatedRows {
    profiles: HashMap<Uuid, profiles::Model>,
    businesses: HashMap<Uuid, businesses::Model>,
    universities: HashMap<Uuid, universities::Model>,
}

impl RelatedRows {
    fn profile(&self, p: &participants::Model) -> Option<&profiles::Model> {
        p.profile_id.and_then(|id| self.profiles.get(&id))
    }

    fn business(&self, p: &participants::Model) -> Option<&businesses::Model> {
        self.businesses.get(&p.id)
    }

    fn university_name(&self, p: &participants::Model) -> Option<String> {
        owning_university(p, &self.profiles)
            .and_then(|id| self.universities.get(&id))
            .map(|u| u.name.clone())
    }
}

/// The participant's own university, else its profile's
fn owning_university(
    participant: &participants::Model,
    profiles: &HashMap<Uuid, profiles::Model>,
) -> Option<Uuid> {
    participant.university_id.or_else(|| {
        participant
            .profile_id
            .and_then(|id| profiles.get(&id))
            .and_then(|profile| profile.university_id)
    })
}

/// Filtered and searched participants, unordered and unpaged.
///
/// Only the one-to-one profile is joined. Businesses are reached through
/// subqueries so a participant with several businesses stays one row.
fn list_select(query: &ParticipantQuery) -> Select<participants::Entity> {
    let mut select = participants::Entity::find()
        .join(JoinType::LeftJoin, participants::Relation::Profiles.def());

    if let Some(term) = &query.search {
        let pattern = like_pattern(term);
        let business_match = businesses::Entity::find()
            .select_only()
            .column(businesses::Column::ParticipantId)
            .filter(contains(businesses::Column::Name, &pattern))
            .into_query();

        select = select.filter(
            Condition::any()
                .add(contains(profiles::Column::FullName, &pattern))
                .add(participants::Column::Id.in_subquery(business_match))
                .add(contains(profiles::Column::City, &pattern))
                .add(contains(profiles::Column::Province, &pattern))
                .add(contains(participants::Column::LegacyTkmId, &pattern)),
        );
    }

    for (filter, value) in &query.filters {
        select = match filter {
            ParticipantFilter::Status => {
                select.filter(participants::Column::Status.eq(value.as_str()))
            }
            ParticipantFilter::Province => {
                select.filter(profiles::Column::Province.eq(value.as_str()))
            }
            ParticipantFilter::City => select.filter(profiles::Column::City.eq(value.as_str())),
            ParticipantFilter::University => match parse_uuid(value) {
                Some(id) => select.filter(owned_by_university(id)),
                None => select,
            },
        };
    }

    select
}

/// Same fallback as `owning_university`, in SQL
fn owned_by_university(id: Uuid) -> Condition {
    Condition::any()
        .add(participants::Column::UniversityId.eq(id))
        .add(
            Condition::all()
                .add(participants::Column::UniversityId.is_null())
                .add(profiles::Column::UniversityId.eq(id)),
        )
}

/// `(SELECT name FROM businesses WHERE participant_id = participants.id
/// ORDER BY id LIMIT 1)`, the name shown in the list
fn first_business_name() -> SimpleExpr {
    let subquery = Query::select()
        .column((businesses::Entity, businesses::Column::Name))
        .from(businesses::Entity)
        .and_where(
            Expr::col((businesses::Entity, businesses::Column::ParticipantId))
                .equals((participants::Entity, participants::Column::Id)),
        )
        .order_by((businesses::Entity, businesses::Column::Id), Order::Asc)
        .limit(1)
        .to_owned();
    SimpleExpr::SubQuery(None, Box::new(subquery.into_sub_query_statement()))
}

fn sorted(
    select: Select<participants::Entity>,
    query: &ParticipantQuery,
) -> Select<participants::Entity> {
    let direction = order(query.order);
    let select = match query.sort {
        ParticipantSort::RegisteredAt => {
            select.order_by(participants::Column::CreatedAt, direction)
        }
        ParticipantSort::Name => select.order_by(profiles::Column::FullName, direction),
        ParticipantSort::Business => select.order_by(first_business_name(), direction),
        ParticipantSort::Status => select.order_by(participants::Column::Status, direction),
        ParticipantSort::City => select.order_by(profiles::Column::City, direction),
        ParticipantSort::Province => select.order_by(profiles::Column::Province, direction),
    };
    select.order_by_asc(participants::Column::Id)
}

/// Trim, drop blanks, sort and dedup
fn distinct_values(values: impl IntoIterator<Item = Option<String>>) -> Vec<String> {
    let set: BTreeSet<String> = values
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().collect()
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepository {
    async fn list(
        &self,
        query: &ParticipantQuery,
    ) -> Result<(Vec<ParticipantSummary>, u64), DomainError> {
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

        let related = self.related(&rows).await?;
        let data = rows
            .iter()
            .map(|p| {
                let profile = related.profile(p);
                let business = related.business(p);
                ParticipantSummary {
                    id: ParticipantId(p.id),
                    id_tkm: p.legacy_tkm_id.clone(),
                    nama: profile.and_then(|pr| pr.full_name.clone()),
                    nama_usaha: business.and_then(|b| b.name.clone()),
                    status: p.status.clone(),
                    kota_domisili: profile.and_then(|pr| pr.city.clone()),
                    provinsi_domisili: profile.and_then(|pr| pr.province.clone()),
                    sektor_usaha: business.and_then(|b| b.sector.clone()),
                    university: related.university_name(p),
                    tanggal_daftar: p.created_at.with_timezone(&Utc),
                    no_whatsapp: profile.and_then(|pr| pr.whatsapp_number.clone()),
                    photo: profile.and_then(|pr| pr.avatar_url.clone()),
                }
            })
            .collect();

        Ok((data, total))
    }

    async fn find_by_legacy_id(
        &self,
        legacy_id: &str,
    ) -> Result<Option<ParticipantDetail>, DomainError> {
        let Some(p) = participants::Entity::find()
            .filter(participants::Column::LegacyTkmId.eq(legacy_id))
            .order_by_asc(participants::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let related = self.related(std::slice::from_ref(&p)).await?;
        let profile = related.profile(&p);
        let business = related.business(&p);

        Ok(Some(ParticipantDetail {
            id: ParticipantId(p.id),
            id_tkm: p.legacy_tkm_id.clone(),
            nama: profile.and_then(|pr| pr.full_name.clone()).unwrap_or_default(),
            status: p.status.clone(),
            no_whatsapp: profile.and_then(|pr| pr.whatsapp_number.clone()),
            jenis_kelamin: profile.and_then(|pr| pr.gender.clone()),
            foto: profile.and_then(|pr| pr.avatar_url.clone()),
            pendidikan_terakhir: p.last_education.clone(),
            kota_domisili: profile.and_then(|pr| pr.city.clone()),
            provinsi_domisili: profile.and_then(|pr| pr.province.clone()),
            nama_usaha: business.and_then(|b| b.name.clone()),
            sektor_usaha: business.and_then(|b| b.sector.clone()),
            produk_utama: business.and_then(|b| b.main_product.clone()),
            deskripsi_usaha: business.and_then(|b| b.description.clone()),
            university: related.university_name(&p),
            tanggal_daftar: p.created_at.with_timezone(&Utc),
        }))
    }

    async fn filter_options(&self) -> Result<ParticipantFilterOptions, DomainError> {
        let statuses: Vec<String> = participants::Entity::find()
            .select_only()
            .column(participants::Column::Status)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let locations: Vec<(Option<String>, Option<String>)> = participants::Entity::find()
            .select_only()
            .column(profiles::Column::Province)
            .column(profiles::Column::City)
            .join(JoinType::InnerJoin, participants::Relation::Profiles.def())
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let (provinces, cities): (Vec<_>, Vec<_>) = locations.into_iter().unzip();

        Ok(ParticipantFilterOptions {
            statuses: distinct_values(statuses.into_iter().map(Some)),
            provinces: distinct_values(provinces),
            cities: distinct_values(cities),
        })
    }

    async fn active_employee_count(&self, id: &ParticipantId) -> Result<u64, DomainError> {
        business_employees::Entity::find()
            .join(JoinType::InnerJoin, business_employees::Relation::Businesses.def())
            .filter(businesses::Column::ParticipantId.eq(id.0))
            .filter(business_employees::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

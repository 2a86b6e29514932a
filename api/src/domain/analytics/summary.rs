//! Dashboard summary payload
//!
//! Field names follow the dashboard client's wire format. `compute` merges
//! the independently fetched fact sets; a missing input yields the empty or
//! zero value for every section that depends on it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::facts::{MentorFacts, ParticipantFacts};
use super::geo::{group_by_location, LocationCount};
use super::growth::mean_growth;
use super::ranking::top_n;
use super::rollup::{rollup, university_groups, RollupOrder, RollupRow};
use crate::domain::entities::{MentorId, VisitLog};

/// Round to two decimals. Presentation only; never round before averaging.
pub fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub participants: u64,
    pub mentors: u64,
    pub universities: u64,
    pub new_employees: u64,
    pub avg_omzet_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDistribution {
    pub name: String,
    pub value: u64,
}

impl From<LocationCount> for MapDistribution {
    fn from(l: LocationCount) -> Self {
        Self {
            name: l.name,
            value: l.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopOmzetParticipant {
    pub nama: String,
    pub nama_usaha: String,
    pub photo: Option<String>,
    pub growth: f64,
    pub last_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityStat {
    pub university_name: String,
    pub total_mentors: usize,
    pub total_participants: usize,
    pub total_new_employees: u64,
    pub avg_growth: f64,
}

impl From<RollupRow> for UniversityStat {
    fn from(row: RollupRow) -> Self {
        Self {
            university_name: row.label,
            total_mentors: row.mentor_count,
            total_participants: row.participant_count,
            total_new_employees: row.new_employee_count,
            avg_growth: round_for_display(row.avg_growth_percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopMentorVisit {
    pub name: String,
    pub foto: Option<String>,
    pub visit_count: u64,
}

/// Everything the dashboard landing page shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub counts: DashboardCounts,
    pub map_distribution: Vec<MapDistribution>,
    pub top_omzet_participants: Vec<TopOmzetParticipant>,
    pub university_stats: Vec<UniversityStat>,
    pub top_mentors_visits: Vec<TopMentorVisit>,
    pub updated_at: DateTime<Utc>,
}

/// Fact sets behind one summary. `None` marks a fetch that failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryInputs<'a> {
    pub participants: Option<&'a [ParticipantFacts]>,
    /// Ordered by name then id
    pub mentors: Option<&'a [MentorFacts]>,
    pub visits: Option<&'a [VisitLog]>,
    pub active_universities: Option<u64>,
}

impl DashboardSummary {
    pub fn compute(inputs: SummaryInputs<'_>, top: usize, updated_at: DateTime<Utc>) -> Self {
        let counted: Vec<&ParticipantFacts> = inputs
            .participants
            .unwrap_or_default()
            .iter()
            .filter(|p| p.is_counted())
            .collect();

        Self {
            counts: counts(&counted, inputs),
            map_distribution: group_by_location(counted.iter(), |p| p.city.clone())
                .into_iter()
                .map(MapDistribution::from)
                .collect(),
            top_omzet_participants: top_participants(&counted, top),
            university_stats: university_stats(inputs),
            top_mentors_visits: top_mentors(inputs, top),
            updated_at,
        }
    }
}

fn counts(counted: &[&ParticipantFacts], inputs: SummaryInputs<'_>) -> DashboardCounts {
    let growths: Vec<_> = counted.iter().map(|p| p.growth()).collect();
    let (avg_growth, _) = mean_growth(&growths);

    DashboardCounts {
        participants: counted.len() as u64,
        mentors: inputs
            .mentors
            .unwrap_or_default()
            .iter()
            .filter(|m| m.has_active_university())
            .count() as u64,
        universities: inputs.active_universities.unwrap_or(0),
        new_employees: counted.iter().map(|p| p.active_employees).sum(),
        avg_omzet_growth: round_for_display(avg_growth),
    }
}

fn top_participants(counted: &[&ParticipantFacts], top: usize) -> Vec<TopOmzetParticipant> {
    let mut candidates: Vec<_> = counted
        .iter()
        .map(|p| (*p, p.growth()))
        .filter(|(_, growth)| growth.has_data())
        .collect();
    candidates.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    top_n(candidates, top, |(_, growth)| growth.growth_percent)
        .into_iter()
        .map(|(p, growth)| TopOmzetParticipant {
            nama: p.name.clone(),
            nama_usaha: p.business_name.clone(),
            photo: p.photo.clone(),
            growth: round_for_display(growth.growth_percent),
            last_revenue: growth.last_revenue,
        })
        .collect()
}

fn university_stats(inputs: SummaryInputs<'_>) -> Vec<UniversityStat> {
    let (Some(participants), Some(mentors)) = (inputs.participants, inputs.mentors) else {
        return Vec::new();
    };

    let by_id: HashMap<_, _> = participants.iter().map(|p| (p.id, p.clone())).collect();
    rollup(university_groups(mentors), &by_id, RollupOrder::Participants)
        .into_iter()
        .map(UniversityStat::from)
        .collect()
}

fn top_mentors(inputs: SummaryInputs<'_>, top: usize) -> Vec<TopMentorVisit> {
    let (Some(mentors), Some(visits)) = (inputs.mentors, inputs.visits) else {
        return Vec::new();
    };

    let mut visit_counts: HashMap<MentorId, u64> = HashMap::new();
    for visit in visits.iter().filter(|v| v.is_countable()) {
        *visit_counts.entry(visit.mentor_id).or_default() += 1;
    }

    let candidates = mentors
        .iter()
        .filter(|m| m.has_active_university())
        .filter_map(|m| visit_counts.get(&m.id).map(|count| (m, *count)));

    top_n(candidates, top, |(_, count)| *count)
        .into_iter()
        .map(|(m, visit_count)| TopMentorVisit {
            name: m.name.clone(),
            foto: m.photo.clone(),
            visit_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::RevenuePoint;
    use crate::domain::entities::{
        EntityStatus, MeetingType, ParticipantId, UniversityId, UniversityRef, VisitType,
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn university(name: &str, status: EntityStatus) -> UniversityRef {
        UniversityRef {
            id: UniversityId(Uuid::new_v4()),
            name: name.to_string(),
            status,
        }
    }

    fn participant(
        name: &str,
        university: &UniversityRef,
        city: Option<&str>,
        revenues: &[Option<f64>],
    ) -> ParticipantFacts {
        ParticipantFacts {
            id: ParticipantId(Uuid::new_v4()),
            name: name.to_string(),
            business_name: format!("Usaha {}", name),
            photo: None,
            status: EntityStatus::Active,
            university: Some(university.clone()),
            city: city.map(str::to_string),
            active_employees: 2,
            reports: revenues
                .iter()
                .enumerate()
                .map(|(i, r)| RevenuePoint::new(2024, i as u32 + 1, *r))
                .collect(),
        }
    }

    fn mentor(
        name: &str,
        university: &UniversityRef,
        participants: &[&ParticipantFacts],
    ) -> MentorFacts {
        MentorFacts {
            id: MentorId(Uuid::new_v4()),
            name: name.to_string(),
            photo: None,
            university: Some(university.clone()),
            participant_ids: participants.iter().map(|p| p.id).collect(),
        }
    }

    fn visit(mentor: &MentorFacts, meeting: MeetingType, visit: VisitType) -> VisitLog {
        VisitLog {
            mentor_id: mentor.id,
            participant_id: None,
            meeting_type: meeting,
            visit_type: visit,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    struct World {
        participants: Vec<ParticipantFacts>,
        mentors: Vec<MentorFacts>,
        visits: Vec<VisitLog>,
    }

    fn world() -> World {
        let active = university("Universitas Aktif", EntityStatus::Active);
        let closed = university("Universitas Tutup", EntityStatus::Inactive);

        let ani = participant("Ani", &active, Some("Bandung"), &[Some(100.0), Some(200.0)]);
        let budi = participant("Budi", &active, Some("Bandung"), &[Some(0.0), Some(0.0)]);
        let citra = participant("Citra", &active, Some("Bogor"), &[]);
        let dedi = participant("Dedi", &closed, Some("Bogor"), &[Some(10.0), Some(90.0)]);

        let m1 = mentor("Mentor A", &active, &[&ani, &budi]);
        let m2 = mentor("Mentor B", &active, &[&citra]);
        let m3 = mentor("Mentor C", &closed, &[&dedi]);

        let visits = vec![
            visit(&m1, MeetingType::Individual, VisitType::Local),
            visit(&m1, MeetingType::Individual, VisitType::Offline),
            visit(&m2, MeetingType::Individual, VisitType::Online),
            visit(&m2, MeetingType::Group, VisitType::Local),
            visit(&m3, MeetingType::Individual, VisitType::Local),
        ];

        World {
            participants: vec![ani, budi, citra, dedi],
            mentors: vec![m1, m2, m3],
            visits,
        }
    }

    fn inputs(w: &World) -> SummaryInputs<'_> {
        SummaryInputs {
            participants: Some(&w.participants),
            mentors: Some(&w.mentors),
            visits: Some(&w.visits),
            active_universities: Some(1),
        }
    }

    #[test]
    fn counts_only_active_participants_of_active_universities() {
        let w = world();
        let summary = DashboardSummary::compute(inputs(&w), 10, Utc::now());

        assert_eq!(summary.counts.participants, 3);
        assert_eq!(summary.counts.mentors, 2);
        assert_eq!(summary.counts.universities, 1);
        assert_eq!(summary.counts.new_employees, 6);
        // (100% + 0%) / 2; Citra has no reports and Dedi's university is inactive
        assert_eq!(summary.counts.avg_omzet_growth, 50.0);
    }

    #[test]
    fn map_groups_counted_participants_by_city() {
        let w = world();
        let summary = DashboardSummary::compute(inputs(&w), 10, Utc::now());

        assert_eq!(
            summary.map_distribution,
            vec![
                MapDistribution {
                    name: "Bandung".to_string(),
                    value: 2,
                },
                MapDistribution {
                    name: "Bogor".to_string(),
                    value: 1,
                },
            ]
        );
    }

    #[test]
    fn top_participants_need_revenue_data() {
        let w = world();
        let summary = DashboardSummary::compute(inputs(&w), 10, Utc::now());

        let names: Vec<_> = summary
            .top_omzet_participants
            .iter()
            .map(|p| p.nama.as_str())
            .collect();
        assert_eq!(names, vec!["Ani", "Budi"]);
        assert_eq!(summary.top_omzet_participants[0].growth, 100.0);
        assert_eq!(summary.top_omzet_participants[0].last_revenue, 200.0);
    }

    #[test]
    fn university_stats_skip_inactive_universities() {
        let w = world();
        let summary = DashboardSummary::compute(inputs(&w), 10, Utc::now());

        assert_eq!(summary.university_stats.len(), 1);
        let stat = &summary.university_stats[0];
        assert_eq!(stat.university_name, "Universitas Aktif");
        assert_eq!(stat.total_mentors, 2);
        assert_eq!(stat.total_participants, 3);
        assert_eq!(stat.total_new_employees, 6);
        assert_eq!(stat.avg_growth, 50.0);
    }

    #[test]
    fn top_mentors_count_individual_in_person_visits() {
        let w = world();
        let summary = DashboardSummary::compute(inputs(&w), 10, Utc::now());

        assert_eq!(
            summary.top_mentors_visits,
            vec![TopMentorVisit {
                name: "Mentor A".to_string(),
                foto: None,
                visit_count: 2,
            }]
        );
    }

    #[test]
    fn rankings_respect_limit() {
        let w = world();
        let summary = DashboardSummary::compute(inputs(&w), 1, Utc::now());
        assert_eq!(summary.top_omzet_participants.len(), 1);
        assert_eq!(summary.top_mentors_visits.len(), 1);
    }

    #[test]
    fn missing_inputs_degrade_dependent_sections_only() {
        let w = world();
        let summary = DashboardSummary::compute(
            SummaryInputs {
                mentors: None,
                ..inputs(&w)
            },
            10,
            Utc::now(),
        );

        assert_eq!(summary.counts.participants, 3);
        assert_eq!(summary.counts.mentors, 0);
        assert!(summary.university_stats.is_empty());
        assert!(summary.top_mentors_visits.is_empty());
        assert_eq!(summary.map_distribution.len(), 2);
        assert_eq!(summary.top_omzet_participants.len(), 2);
    }

    #[test]
    fn empty_world_is_all_zero() {
        let summary = DashboardSummary::compute(SummaryInputs::default(), 10, Utc::now());
        assert_eq!(summary.counts, DashboardCounts::default());
        assert!(summary.map_distribution.is_empty());
        assert!(summary.top_omzet_participants.is_empty());
    }

    #[test]
    fn wire_format() {
        let summary = DashboardSummary::compute(SummaryInputs::default(), 10, Utc::now());
        let json = serde_json::to_value(&summary).unwrap();

        for key in [
            "counts",
            "mapDistribution",
            "topOmzetParticipants",
            "universityStats",
            "topMentorsVisits",
            "updatedAt",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["counts"].get("avgOmzetGrowth").is_some());
        assert!(json["counts"].get("newEmployees").is_some());
    }

    #[test]
    fn display_rounding() {
        assert_eq!(round_for_display(33.33333), 33.33);
        assert_eq!(round_for_display(-12.345678), -12.35);
    }
}

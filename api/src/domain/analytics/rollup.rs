//! Per-group rollups
//!
//! Folds participant growth, headcount and mentor links into one summary
//! row per owning entity (university or mentor). Groups are built from the
//! mentor roster: a university owns the mentors whose profile points at it,
//! and reaches participants through those mentors' active assignments.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::domain::entities::{MentorId, ParticipantId, UniversityId};

use super::facts::{MentorFacts, ParticipantFacts};
use super::growth::mean_growth;

/// The owning entity rows are grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    University,
    Mentor,
}

impl GroupBy {
    /// Lenient parse of a request value; unknown values fall back to the default.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("mentor") | Some("mentors") => GroupBy::Mentor,
            _ => GroupBy::University,
        }
    }
}

/// Output ordering of rollup rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupOrder {
    /// Participant count descending, then label ascending
    #[default]
    Participants,
    /// Average growth descending, then label ascending
    Growth,
}

impl RollupOrder {
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("growth") | Some("avg_growth") | Some("avggrowth") => RollupOrder::Growth,
            _ => RollupOrder::Participants,
        }
    }
}

/// Members reachable from one group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMembers {
    pub label: String,
    pub mentor_ids: BTreeSet<MentorId>,
    pub participant_ids: BTreeSet<ParticipantId>,
    /// Members also need an active owning university (university rollups)
    pub requires_active_university: bool,
}

impl GroupMembers {
    fn counts(&self, participant: &ParticipantFacts) -> bool {
        if self.requires_active_university {
            participant.is_counted()
        } else {
            participant.is_active()
        }
    }
}

/// One summary row per group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupRow {
    pub label: String,
    pub mentor_count: usize,
    pub participant_count: usize,
    pub new_employee_count: u64,
    pub avg_growth_percent: f64,
    /// Participants that contributed to the growth average
    pub growth_samples: usize,
}

/// One group per active university, holding its mentors and their
/// assigned participants. Mentors without an active university are skipped.
pub fn university_groups(mentors: &[MentorFacts]) -> Vec<GroupMembers> {
    let mut groups: BTreeMap<UniversityId, GroupMembers> = BTreeMap::new();

    for mentor in mentors {
        let Some(university) = mentor.university.as_ref().filter(|u| u.is_active()) else {
            continue;
        };

        let group = groups
            .entry(university.id)
            .or_insert_with(|| GroupMembers {
                label: university.name.clone(),
                requires_active_university: true,
                ..Default::default()
            });
        group.mentor_ids.insert(mentor.id);
        group.participant_ids.extend(mentor.participant_ids.iter().copied());
    }

    groups.into_values().collect()
}

/// One group per mentor
pub fn mentor_groups(mentors: &[MentorFacts]) -> Vec<GroupMembers> {
    mentors
        .iter()
        .map(|mentor| GroupMembers {
            label: mentor.name.clone(),
            mentor_ids: BTreeSet::from([mentor.id]),
            participant_ids: mentor.participant_ids.iter().copied().collect(),
            requires_active_university: false,
        })
        .collect()
}

/// Summarise each group over the active participants it reaches.
///
/// A participant counts toward a group when it appears in `participants`
/// and is active; for university groups its own owning university must be
/// active too. Groups with no mentors are dropped. The growth average
/// only includes participants with at least one revenue report.
pub fn rollup(
    groups: impl IntoIterator<Item = GroupMembers>,
    participants: &HashMap<ParticipantId, ParticipantFacts>,
    order: RollupOrder,
) -> Vec<RollupRow> {
    let mut rows: Vec<RollupRow> = groups
        .into_iter()
        .filter(|group| !group.mentor_ids.is_empty())
        .map(|group| {
            let members: Vec<&ParticipantFacts> = group
                .participant_ids
                .iter()
                .filter_map(|id| participants.get(id))
                .filter(|p| group.counts(p))
                .collect();

            let growths: Vec<_> = members.iter().map(|p| p.growth()).collect();
            let (avg_growth_percent, growth_samples) = mean_growth(&growths);

            RollupRow {
                label: group.label,
                mentor_count: group.mentor_ids.len(),
                participant_count: members.len(),
                new_employee_count: members.iter().map(|p| p.active_employees).sum(),
                avg_growth_percent,
                growth_samples,
            }
        })
        .collect();

    match order {
        RollupOrder::Participants => rows.sort_by(|a, b| {
            b.participant_count
                .cmp(&a.participant_count)
                .then_with(|| a.label.cmp(&b.label))
        }),
        RollupOrder::Growth => rows.sort_by(|a, b| {
            b.avg_growth_percent
                .total_cmp(&a.avg_growth_percent)
                .then_with(|| a.label.cmp(&b.label))
        }),
    }

    rows
}

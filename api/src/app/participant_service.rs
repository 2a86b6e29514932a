//! Participant detail and outputs

use std::sync::Arc;

use crate::domain::analytics::{round_for_display, Growth, RevenuePoint};
use crate::domain::entities::{
    MonthlyReportEntry, OutputsSummary, ParticipantDetail, ParticipantOutputs,
};
use crate::domain::ports::{MonthlyReportRepository, ParticipantRepository};
use crate::error::AppError;

pub struct ParticipantService {
    participants: Arc<dyn ParticipantRepository>,
    reports: Arc<dyn MonthlyReportRepository>,
}

impl ParticipantService {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        reports: Arc<dyn MonthlyReportRepository>,
    ) -> Self {
        Self {
            participants,
            reports,
        }
    }

    /// Look up a participant by legacy identifier
    pub async fn detail(&self, legacy_id: &str) -> Result<ParticipantDetail, AppError> {
        self.participants
            .find_by_legacy_id(legacy_id)
            .await
            .map_err(AppError::fetch("participant"))?
            .ok_or_else(|| AppError::NotFound(format!("Participant {} not found", legacy_id)))
    }

    /// Monthly reports of one participant, oldest first, with their summary
    pub async fn outputs(&self, legacy_id: &str) -> Result<ParticipantOutputs, AppError> {
        let participant = self.detail(legacy_id).await?;

        let (outputs, new_employees) = tokio::try_join!(
            self.reports.find_by_participant(&participant.id),
            self.participants.active_employee_count(&participant.id),
        )
        .map_err(AppError::fetch("participant outputs"))?;

        tracing::debug!(
            participant = %participant.id,
            reports = outputs.len(),
            "Loaded participant outputs"
        );

        let summary = summarize(&outputs, new_employees);
        Ok(ParticipantOutputs { outputs, summary })
    }
}

fn summarize(outputs: &[MonthlyReportEntry], new_employees: u64) -> OutputsSummary {
    let revenues: Vec<f64> = outputs.iter().filter_map(|o| o.revenue).collect();
    let average_revenue = if revenues.is_empty() {
        0.0
    } else {
        round_for_display(revenues.iter().sum::<f64>() / revenues.len() as f64)
    };

    let points: Vec<RevenuePoint> = outputs
        .iter()
        .map(|o| RevenuePoint {
            period: o.period,
            revenue: o.revenue,
        })
        .collect();

    OutputsSummary {
        total_months_reported: outputs.len(),
        average_revenue,
        total_new_employees: new_employees,
        growth: Growth::compute(&points),
    }
}

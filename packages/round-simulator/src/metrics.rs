//! Per-round metrics for simulation output.

use serde::Serialize;
use trizone::domain::{FeedbackTier, ZoneMap};

use crate::simulator::RoundOutcome;
use crate::types::ModalityChoice;

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub session_seed: u64,
    pub timestamp: String,
    pub modality: ModalityChoice,
    pub score: u32,
    pub correct_count: usize,
    pub total_cards: usize,
    pub accuracy_percent: u32,
    pub tier: FeedbackTier,
    pub zone_drops: ZoneMap<usize>,
    pub returned_gestures: u32,
    pub pointer_drops: u32,
    pub touch_drops: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

/// Flat CSV row for the summary file.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub round_no: u32,
    pub session_seed: u64,
    pub score: u32,
    pub correct: usize,
    pub total: usize,
    pub accuracy_pct: u32,
    pub tier: &'static str,
    pub green_drops: usize,
    pub yellow_drops: usize,
    pub red_drops: usize,
    pub returned: u32,
    pub high_score: u32,
}

impl From<&RoundMetrics> for CsvSummaryRow {
    fn from(m: &RoundMetrics) -> Self {
        Self {
            round_no: m.round_no,
            session_seed: m.session_seed,
            score: m.score,
            correct: m.correct_count,
            total: m.total_cards,
            accuracy_pct: m.accuracy_percent,
            tier: m.tier.slug(),
            green_drops: m.zone_drops.green,
            yellow_drops: m.zone_drops.yellow,
            red_drops: m.zone_drops.red,
            returned: m.returned_gestures,
            high_score: m.high_score,
        }
    }
}

pub fn build_round_metrics(
    outcome: &RoundOutcome,
    session_seed: u64,
    modality: ModalityChoice,
) -> Result<RoundMetrics, Box<dyn std::error::Error>> {
    let summary = &outcome.summary;
    let accuracy_percent = summary.accuracy_percent()?;
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(RoundMetrics {
        round_no: summary.round_no,
        session_seed,
        timestamp,
        modality,
        score: summary.score,
        correct_count: summary.correct_count,
        total_cards: summary.total_cards,
        accuracy_percent,
        tier: FeedbackTier::for_accuracy(accuracy_percent),
        zone_drops: outcome.zone_drops.clone(),
        returned_gestures: outcome.returned_gestures,
        pointer_drops: outcome.pointer_drops,
        touch_drops: outcome.touch_drops,
        high_score: outcome.high_score,
        new_high_score: outcome.new_high_score,
    })
}

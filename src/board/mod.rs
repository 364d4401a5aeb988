//! Pipeline data model and board state.
//!
//! A [`BoardState`] owns the lead collection; column membership is always
//! derived from each lead's current [`Stage`], never stored per column.

pub mod drag;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One discrete position in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 7] = [
        Stage::New,
        Stage::Contacted,
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::Won,
        Stage::Lost,
    ];

    /// Stages rendered as board columns. `Lost` has no column; lost leads
    /// only appear in the status bar tally.
    pub const BOARD: [Stage; 6] = [
        Stage::New,
        Stage::Contacted,
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::Won,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Stage::New => "New Leads",
            Stage::Contacted => "Contacted",
            Stage::Qualified => "Qualified",
            Stage::Proposal => "Proposal Sent",
            Stage::Negotiation => "Negotiation",
            Stage::Won => "Won",
            Stage::Lost => "Lost",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Contacted => "contacted",
            Stage::Qualified => "qualified",
            Stage::Proposal => "proposal",
            Stage::Negotiation => "negotiation",
            Stage::Won => "won",
            Stage::Lost => "lost",
        }
    }

    /// Index of this stage among the board columns, if it has one.
    pub fn board_index(&self) -> Option<usize> {
        Stage::BOARD.iter().position(|s| s == self)
    }

    /// A closed lead no longer counts toward the open pipeline value.
    pub fn is_closed(&self) -> bool {
        matches!(self, Stage::Won | Stage::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A prospective customer moving through the pipeline.
///
/// `status` is the only field the board mutates; everything else is seed
/// data carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    /// Estimated deal value in whole currency units.
    pub value: u64,
    pub status: Stage,
    pub priority: Priority,
    pub assigned_to: String,
    pub assigned_to_avatar: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Local>,
    pub last_activity: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Summary card data for the metrics row. Derived externally and seeded at
/// start, never recomputed from the board.
#[derive(Debug, Clone)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub change: f64,
    pub change_label: String,
    pub trend: Trend,
}

/// A committed stage transition, handed to the event-loop owner so the
/// activity log and status line stay in sync with the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageChange {
    pub lead_id: String,
    pub from: Stage,
    pub to: Stage,
}

/// Owns the ordered lead collection and the single mutation entry point.
#[derive(Debug)]
pub struct BoardState {
    leads: Vec<Lead>,
}

impl BoardState {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// Reassign a lead to `to`. Unknown ids are a silent no-op (`None`);
    /// dropping off-target is a normal user action, not an error. Relative
    /// order and every field other than `status` are left untouched.
    pub fn move_lead(&mut self, lead_id: &str, to: Stage) -> Option<StageChange> {
        let lead = self.leads.iter_mut().find(|l| l.id == lead_id)?;
        let from = lead.status;
        lead.status = to;
        Some(StageChange {
            lead_id: lead.id.clone(),
            from,
            to,
        })
    }

    /// Leads currently in `stage`, in original seed order.
    pub fn leads_in_stage(&self, stage: Stage) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.status == stage).collect()
    }

    pub fn stage_count(&self, stage: Stage) -> usize {
        self.leads.iter().filter(|l| l.status == stage).count()
    }

    /// Sum of deal values still in play (not won, not lost).
    pub fn pipeline_value(&self) -> u64 {
        self.leads
            .iter()
            .filter(|l| !l.status.is_closed())
            .map(|l| l.value)
            .sum()
    }

    pub fn won_count(&self) -> usize {
        self.stage_count(Stage::Won)
    }

    pub fn lost_count(&self) -> usize {
        self.stage_count(Stage::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, status: Stage) -> Lead {
        let now = Local::now();
        Lead {
            id: id.to_string(),
            name: format!("Lead {}", id),
            company: "Acme Corp".to_string(),
            email: format!("{}@acme.test", id),
            phone: "555-0100".to_string(),
            value: 10_000,
            status,
            priority: Priority::Medium,
            assigned_to: "Sarah Chen".to_string(),
            assigned_to_avatar: "SC".to_string(),
            notes: None,
            created_at: now,
            last_activity: now,
        }
    }

    fn board() -> BoardState {
        BoardState::new(vec![
            lead("L1", Stage::New),
            lead("L2", Stage::Contacted),
            lead("L3", Stage::New),
        ])
    }

    #[test]
    fn move_changes_exactly_one_lead() {
        let mut b = board();
        let before = b.leads().to_vec();

        let change = b.move_lead("L1", Stage::Qualified).unwrap();
        assert_eq!(change.from, Stage::New);
        assert_eq!(change.to, Stage::Qualified);

        assert_eq!(b.lead("L1").unwrap().status, Stage::Qualified);
        // Every other field of L1 and every other lead is untouched.
        let after = b.leads();
        for (prev, cur) in before.iter().zip(after) {
            if cur.id == "L1" {
                let mut expected = prev.clone();
                expected.status = Stage::Qualified;
                assert_eq!(cur, &expected);
            } else {
                assert_eq!(cur, prev);
            }
        }
    }

    #[test]
    fn move_preserves_order() {
        let mut b = board();
        b.move_lead("L2", Stage::Won);
        let ids: Vec<_> = b.leads().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["L1", "L2", "L3"]);
    }

    #[test]
    fn move_unknown_id_is_a_noop() {
        let mut b = board();
        let before = b.leads().to_vec();
        assert!(b.move_lead("nope", Stage::Won).is_none());
        assert_eq!(b.leads(), &before[..]);
    }

    #[test]
    fn move_is_idempotent() {
        let mut b = board();
        b.move_lead("L1", Stage::Proposal);
        let once = b.leads().to_vec();

        let change = b.move_lead("L1", Stage::Proposal).unwrap();
        assert_eq!(change.from, Stage::Proposal);
        assert_eq!(change.to, Stage::Proposal);
        assert_eq!(b.leads(), &once[..]);
    }

    #[test]
    fn stages_partition_the_collection() {
        let mut b = board();
        b.move_lead("L3", Stage::Lost);

        let mut seen: Vec<&str> = Vec::new();
        for stage in Stage::ALL {
            for l in b.leads_in_stage(stage) {
                assert_eq!(l.status, stage);
                assert!(!seen.contains(&l.id.as_str()), "lead in two stages");
                seen.push(&l.id);
            }
        }
        assert_eq!(seen.len(), b.len());
    }

    #[test]
    fn leads_in_stage_keeps_seed_order() {
        let b = board();
        let ids: Vec<_> = b
            .leads_in_stage(Stage::New)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, ["L1", "L3"]);
    }

    #[test]
    fn pipeline_value_excludes_closed_stages() {
        let mut b = board();
        assert_eq!(b.pipeline_value(), 30_000);
        b.move_lead("L1", Stage::Won);
        b.move_lead("L2", Stage::Lost);
        assert_eq!(b.pipeline_value(), 10_000);
        assert_eq!(b.won_count(), 1);
        assert_eq!(b.lost_count(), 1);
    }

    #[test]
    fn lost_has_no_board_column() {
        assert_eq!(Stage::Lost.board_index(), None);
        assert_eq!(Stage::New.board_index(), Some(0));
        assert_eq!(Stage::Won.board_index(), Some(5));
    }
}

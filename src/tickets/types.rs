// Ticket domain types - requisitions, positions, attachments and workflow stamps

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TicketId = u64;
pub type PositionId = u64;
pub type AttachmentId = u64;
pub type AgencyId = u64;
pub type TorId = u64;

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Draft,
    Submitted,
    Validated,
    Posted,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 6] = [
        TicketStatus::Draft,
        TicketStatus::Submitted,
        TicketStatus::Validated,
        TicketStatus::Posted,
        TicketStatus::InProgress,
        TicketStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Draft => "draft",
            TicketStatus::Submitted => "submitted",
            TicketStatus::Validated => "validated",
            TicketStatus::Posted => "posted",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Salary or rate band for a position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// A single role within a requisition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub budget: Option<BudgetRange>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentCategory {
    Tor,
    Correspondence,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub category: AttachmentCategory,
    pub size_bytes: u64,
    pub uploaded_date: NaiveDate,
}

/// By-value copy of a Terms-of-Reference template taken when the ticket was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorSnapshot {
    pub template_id: TorId,
    pub title: String,
    pub scope: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatStatus {
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatedAgency {
    pub agency_id: AgencyId,
    pub agency_name: String,
    pub floated_date: NaiveDate,
    pub status: FloatStatus,
}

/// Audit entry written by every applied transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: TicketStatus,
    pub to: TicketStatus,
    pub actor: String,
    pub at: DateTime<Utc>,
}

/// Who moved the ticket through each stage, and when
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub submitted_by: Option<String>,
    pub submitted_date: Option<NaiveDate>,
    pub validated_by: Option<String>,
    pub validated_date: Option<NaiveDate>,
    pub posted_by: Option<String>,
    pub posted_date: Option<NaiveDate>,
    pub started_by: Option<String>,
    pub started_date: Option<NaiveDate>,
    pub closed_by: Option<String>,
    pub closed_date: Option<NaiveDate>,
    #[serde(default)]
    pub floated_agencies: Vec<FloatedAgency>,
    #[serde(default)]
    pub history: Vec<TransitionRecord>,
}

impl WorkflowRecord {
    fn stage_fields_mut(
        &mut self,
        stage: TicketStatus,
    ) -> Option<(&mut Option<String>, &mut Option<NaiveDate>)> {
        match stage {
            TicketStatus::Draft => None,
            TicketStatus::Submitted => Some((&mut self.submitted_by, &mut self.submitted_date)),
            TicketStatus::Validated => Some((&mut self.validated_by, &mut self.validated_date)),
            TicketStatus::Posted => Some((&mut self.posted_by, &mut self.posted_date)),
            TicketStatus::InProgress => Some((&mut self.started_by, &mut self.started_date)),
            TicketStatus::Closed => Some((&mut self.closed_by, &mut self.closed_date)),
        }
    }

    /// Stamp the actor/date pair belonging to `stage`. Draft has no stage fields.
    pub(crate) fn stamp(&mut self, stage: TicketStatus, actor: &str, date: NaiveDate) {
        if let Some((by, on)) = self.stage_fields_mut(stage) {
            *by = Some(actor.to_string());
            *on = Some(date);
        }
    }

    /// Unset every stage that comes after `target`. History is left alone.
    pub(crate) fn clear_after(&mut self, target: TicketStatus) {
        for stage in TicketStatus::ALL.into_iter().filter(|stage| *stage > target) {
            if let Some((by, on)) = self.stage_fields_mut(stage) {
                *by = None;
                *on = None;
            }
        }
    }

    /// Actor and date recorded for a stage, if it has been reached
    pub fn stage(&self, stage: TicketStatus) -> Option<(&str, NaiveDate)> {
        let (by, on) = match stage {
            TicketStatus::Draft => return None,
            TicketStatus::Submitted => (&self.submitted_by, self.submitted_date),
            TicketStatus::Validated => (&self.validated_by, self.validated_date),
            TicketStatus::Posted => (&self.posted_by, self.posted_date),
            TicketStatus::InProgress => (&self.started_by, self.started_date),
            TicketStatus::Closed => (&self.closed_by, self.closed_date),
        };
        Some((by.as_deref()?, on?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    pub status: TicketStatus,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub attached_tor: Option<TorSnapshot>,
    #[serde(default)]
    pub workflow: WorkflowRecord,
    pub created_date: NaiveDate,
}

/// Position input for ticket creation; ids are assigned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPosition {
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub budget: Option<BudgetRange>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttachment {
    pub name: String,
    pub category: AttachmentCategory,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub department: Option<String>,
    #[serde(default)]
    pub positions: Vec<NewPosition>,
    #[serde(default)]
    pub attachments: Vec<NewAttachment>,
    pub tor_template_id: Option<TorId>,
}

/// Result of floating a ticket to agencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatOutcome {
    pub floated_to: Vec<String>,
    pub ticket: Ticket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in TicketStatus::ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
        assert!("archived".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_stamp_only_touches_its_stage() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut workflow = WorkflowRecord::default();

        workflow.stamp(TicketStatus::Posted, "Bob", date);

        assert_eq!(workflow.stage(TicketStatus::Posted), Some(("Bob", date)));
        assert_eq!(workflow.stage(TicketStatus::Submitted), None);
        assert_eq!(workflow.stage(TicketStatus::Closed), None);
    }

    #[test]
    fn test_stamp_draft_is_noop() {
        let mut workflow = WorkflowRecord::default();
        workflow.stamp(
            TicketStatus::Draft,
            "Alice",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        assert_eq!(workflow, WorkflowRecord::default());
    }

    #[test]
    fn test_clear_after_keeps_earlier_stages() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut workflow = WorkflowRecord::default();
        workflow.stamp(TicketStatus::Submitted, "Alice", date);
        workflow.stamp(TicketStatus::Validated, "Victor", date);

        workflow.clear_after(TicketStatus::Submitted);

        assert_eq!(workflow.stage(TicketStatus::Submitted), Some(("Alice", date)));
        assert!(workflow.validated_by.is_none());
        assert!(workflow.validated_date.is_none());

        workflow.clear_after(TicketStatus::Draft);
        assert_eq!(workflow, WorkflowRecord::default());
    }
}

// Ticket Lifecycle Engine - validated, atomic status transitions
//
// Every mutating operation holds the write gate from the moment it reads the
// ticket until the updated copy is saved. Validation therefore always sees the
// current stored status, never a stale one.

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn, Instrument};

use super::errors::LifecycleError;
use super::transitions::is_allowed;
use super::types::*;
use crate::agencies::AgencyRoster;
use crate::identity::{Clock, IdentityProvider, SystemClock};
use crate::observability::{LifecycleMetrics, OperationTimer};
use crate::store::TicketStore;
use crate::telemetry::{create_lifecycle_span, generate_correlation_id};
use crate::tor::TorCatalog;

/// Whether a transition stamps its target stage or unwinds the stages after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionKind {
    Advance,
    Recall,
}

pub struct TicketLifecycle {
    store: Arc<dyn TicketStore>,
    agencies: Arc<dyn AgencyRoster>,
    tors: Arc<dyn TorCatalog>,
    identity: Arc<dyn IdentityProvider>,
    clock: Arc<dyn Clock>,
    metrics: Arc<LifecycleMetrics>,
    write_gate: Mutex<()>,
}

impl std::fmt::Debug for TicketLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketLifecycle")
            .field("store", &"Arc<dyn TicketStore>")
            .field("agencies", &"Arc<dyn AgencyRoster>")
            .field("tors", &"Arc<dyn TorCatalog>")
            .field("default_actor", &self.identity.current_actor())
            .field("metrics", &self.metrics.get_stats())
            .finish()
    }
}

impl TicketLifecycle {
    pub fn new(
        store: Arc<dyn TicketStore>,
        agencies: Arc<dyn AgencyRoster>,
        tors: Arc<dyn TorCatalog>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            store,
            agencies,
            tors,
            identity,
            clock: Arc::new(SystemClock),
            metrics: Arc::new(LifecycleMetrics::new()),
            write_gate: Mutex::new(()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<LifecycleMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &LifecycleMetrics {
        &self.metrics
    }

    // ----- named transitions -----

    pub async fn submit(&self, id: TicketId, actor: Option<&str>) -> Result<Ticket, LifecycleError> {
        self.transition("submit", id, TicketStatus::Submitted, TransitionKind::Advance, actor)
            .await
    }

    pub async fn validate(&self, id: TicketId, actor: Option<&str>) -> Result<Ticket, LifecycleError> {
        self.transition("validate", id, TicketStatus::Validated, TransitionKind::Advance, actor)
            .await
    }

    pub async fn post(&self, id: TicketId, actor: Option<&str>) -> Result<Ticket, LifecycleError> {
        self.transition("post", id, TicketStatus::Posted, TransitionKind::Advance, actor)
            .await
    }

    pub async fn start(&self, id: TicketId, actor: Option<&str>) -> Result<Ticket, LifecycleError> {
        self.transition("start", id, TicketStatus::InProgress, TransitionKind::Advance, actor)
            .await
    }

    pub async fn close(&self, id: TicketId, actor: Option<&str>) -> Result<Ticket, LifecycleError> {
        self.transition("close", id, TicketStatus::Closed, TransitionKind::Advance, actor)
            .await
    }

    /// Pull a submitted ticket back to draft. The submission stamp is cleared;
    /// the history keeps who submitted it.
    pub async fn recall_to_draft(
        &self,
        id: TicketId,
        actor: Option<&str>,
    ) -> Result<Ticket, LifecycleError> {
        self.transition("recall_to_draft", id, TicketStatus::Draft, TransitionKind::Recall, actor)
            .await
    }

    /// Send a validated ticket back to submitted. The validation stamp is
    /// cleared and the submission stamp is kept.
    pub async fn recall_to_submitted(
        &self,
        id: TicketId,
        actor: Option<&str>,
    ) -> Result<Ticket, LifecycleError> {
        self.transition(
            "recall_to_submitted",
            id,
            TicketStatus::Submitted,
            TransitionKind::Recall,
            actor,
        )
        .await
    }

    async fn transition(
        &self,
        operation: &'static str,
        id: TicketId,
        target: TicketStatus,
        kind: TransitionKind,
        actor: Option<&str>,
    ) -> Result<Ticket, LifecycleError> {
        let correlation_id = generate_correlation_id();
        let span = create_lifecycle_span(operation, Some(id), &correlation_id);

        async move {
            let timer = OperationTimer::new(operation);
            let actor = self.resolve_actor(actor);

            let _gate = self.write_gate.lock().await;
            let mut ticket = self.load(id).await?;
            let from = ticket.status;

            if !is_allowed(from, target) {
                self.metrics.record_rejection();
                warn!(
                    ticket_id = id,
                    from = %from,
                    to = %target,
                    actor = %actor,
                    "Rejected ticket transition"
                );
                return Err(LifecycleError::InvalidTransition { id, from, to: target });
            }

            let now = self.clock.now();
            ticket.status = target;
            match kind {
                TransitionKind::Advance => {
                    ticket.workflow.stamp(target, &actor, self.clock.today())
                }
                TransitionKind::Recall => ticket.workflow.clear_after(target),
            }
            ticket.workflow.history.push(TransitionRecord {
                from,
                to: target,
                actor: actor.clone(),
                at: now,
            });

            self.store.save(&ticket).await?;
            self.metrics.record_transition();
            timer.finish();

            info!(
                ticket_id = id,
                from = %from,
                to = %target,
                actor = %actor,
                "Ticket transitioned"
            );
            Ok(ticket)
        }
        .instrument(span)
        .await
    }

    // ----- agency floating -----

    /// Notify active agencies about an open requisition. Status is untouched and
    /// earlier float records are kept.
    pub async fn float_to_agencies(
        &self,
        id: TicketId,
        agency_ids: &BTreeSet<AgencyId>,
    ) -> Result<FloatOutcome, LifecycleError> {
        let correlation_id = generate_correlation_id();
        let span = create_lifecycle_span("float_to_agencies", Some(id), &correlation_id);

        async move {
            let _gate = self.write_gate.lock().await;
            let mut ticket = self.load(id).await?;

            let floated_date = self.clock.today();
            let matched: Vec<_> = self
                .agencies
                .active_agencies()
                .await?
                .into_iter()
                .filter(|agency| agency_ids.contains(&agency.id))
                .collect();

            let skipped = agency_ids.len().saturating_sub(matched.len());
            if skipped > 0 {
                debug!(ticket_id = id, skipped, "Ignoring unknown or inactive agencies");
            }

            let mut floated_to = Vec::with_capacity(matched.len());
            for agency in matched {
                ticket.workflow.floated_agencies.push(FloatedAgency {
                    agency_id: agency.id,
                    agency_name: agency.name.clone(),
                    floated_date,
                    status: FloatStatus::Sent,
                });
                floated_to.push(agency.name);
            }

            self.store.save(&ticket).await?;
            self.metrics.record_floated(floated_to.len());

            info!(
                ticket_id = id,
                status = %ticket.status,
                agencies = ?floated_to,
                "Floated ticket to agencies"
            );
            Ok(FloatOutcome { floated_to, ticket })
        }
        .instrument(span)
        .await
    }

    // ----- ticket records -----

    /// Create a draft ticket. Positions and attachments get their own ids and
    /// the selected TOR template is copied by value.
    pub async fn create_ticket(&self, new_ticket: NewTicket) -> Result<Ticket, LifecycleError> {
        let correlation_id = generate_correlation_id();
        let span = create_lifecycle_span("create_ticket", None, &correlation_id);

        async move {
            let attached_tor = match new_ticket.tor_template_id {
                Some(tor_id) => Some(
                    self.tors
                        .find_template(tor_id)
                        .await?
                        .ok_or(LifecycleError::TorNotFound { id: tor_id })?
                        .snapshot(),
                ),
                None => None,
            };

            let today = self.clock.today();
            let _gate = self.write_gate.lock().await;
            let id = self.store.allocate_ticket_id().await?;

            let mut positions = Vec::with_capacity(new_ticket.positions.len());
            for position in new_ticket.positions {
                positions.push(self.build_position(position).await?);
            }

            let mut attachments = Vec::with_capacity(new_ticket.attachments.len());
            for attachment in new_ticket.attachments {
                attachments.push(self.build_attachment(attachment, today).await?);
            }

            let ticket = Ticket {
                id,
                title: new_ticket.title,
                department: new_ticket.department,
                status: TicketStatus::Draft,
                positions,
                attachments,
                attached_tor,
                workflow: WorkflowRecord::default(),
                created_date: today,
            };

            self.store.save(&ticket).await?;
            self.metrics.record_created();
            info!(
                ticket_id = id,
                positions = ticket.positions.len(),
                tor = ?ticket.attached_tor.as_ref().map(|tor| tor.template_id),
                "Created draft ticket"
            );
            Ok(ticket)
        }
        .instrument(span)
        .await
    }

    pub async fn get_ticket(&self, id: TicketId) -> Result<Ticket, LifecycleError> {
        self.load(id).await
    }

    /// All tickets in id order, optionally narrowed to one status
    pub async fn list_tickets(
        &self,
        status: Option<TicketStatus>,
    ) -> Result<Vec<Ticket>, LifecycleError> {
        let tickets = self.store.list().await?;
        Ok(match status {
            Some(status) => tickets.into_iter().filter(|t| t.status == status).collect(),
            None => tickets,
        })
    }

    /// Irreversibly remove a ticket. Its id is never handed out again.
    pub async fn delete_ticket(&self, id: TicketId) -> Result<(), LifecycleError> {
        let _gate = self.write_gate.lock().await;
        if !self.store.delete(id).await? {
            self.metrics.record_not_found();
            return Err(LifecycleError::NotFound { id });
        }
        info!(ticket_id = id, "Deleted ticket");
        Ok(())
    }

    pub async fn add_attachment(
        &self,
        id: TicketId,
        attachment: NewAttachment,
    ) -> Result<Ticket, LifecycleError> {
        let _gate = self.write_gate.lock().await;
        let mut ticket = self.load(id).await?;
        let attachment = self.build_attachment(attachment, self.clock.today()).await?;
        debug!(ticket_id = id, attachment_id = attachment.id, "Adding attachment");
        ticket.attachments.push(attachment);
        self.store.save(&ticket).await?;
        Ok(ticket)
    }

    pub async fn add_position(
        &self,
        id: TicketId,
        position: NewPosition,
    ) -> Result<Ticket, LifecycleError> {
        let _gate = self.write_gate.lock().await;
        let mut ticket = self.load(id).await?;
        let position = self.build_position(position).await?;
        debug!(ticket_id = id, position_id = position.id, "Adding position");
        ticket.positions.push(position);
        self.store.save(&ticket).await?;
        Ok(ticket)
    }

    // ----- helpers -----

    async fn load(&self, id: TicketId) -> Result<Ticket, LifecycleError> {
        match self.store.find_by_id(id).await? {
            Some(ticket) => Ok(ticket),
            None => {
                self.metrics.record_not_found();
                warn!(ticket_id = id, "Ticket not found");
                Err(LifecycleError::NotFound { id })
            }
        }
    }

    /// Blank or missing names fall back to the injected identity
    fn resolve_actor(&self, actor: Option<&str>) -> String {
        match actor.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.identity.current_actor(),
        }
    }

    async fn build_position(&self, position: NewPosition) -> Result<Position, LifecycleError> {
        Ok(Position {
            id: self.store.allocate_position_id().await?,
            title: position.title,
            required_skills: position.required_skills,
            budget: position.budget,
            description: position.description,
        })
    }

    async fn build_attachment(
        &self,
        attachment: NewAttachment,
        uploaded_date: chrono::NaiveDate,
    ) -> Result<Attachment, LifecycleError> {
        Ok(Attachment {
            id: self.store.allocate_attachment_id().await?,
            name: attachment.name,
            category: attachment.category,
            size_bytes: attachment.size_bytes,
            uploaded_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agencies::{Agency, InMemoryAgencyRoster};
    use crate::identity::{FixedClock, StaticIdentity};
    use crate::store::{InMemoryTicketStore, MockTicketStore, StoreError};
    use crate::tor::{InMemoryTorCatalog, TorTemplate};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn draft(id: TicketId) -> Ticket {
        Ticket {
            id,
            title: "Backend contractors".to_string(),
            department: Some("Engineering".to_string()),
            status: TicketStatus::Draft,
            positions: Vec::new(),
            attachments: Vec::new(),
            attached_tor: None,
            workflow: WorkflowRecord::default(),
            created_date: today(),
        }
    }

    fn engine_with(store: Arc<dyn TicketStore>) -> TicketLifecycle {
        let agencies = InMemoryAgencyRoster::new(vec![
            Agency {
                id: 1,
                name: "TalentBridge".to_string(),
                active: true,
                specialties: vec!["engineering".to_string()],
                contact_email: None,
            },
            Agency {
                id: 2,
                name: "Dormant Staffing".to_string(),
                active: false,
                specialties: Vec::new(),
                contact_email: None,
            },
        ]);
        let tors = InMemoryTorCatalog::new(vec![TorTemplate {
            id: 10,
            title: "Data Platform Build".to_string(),
            scope: "Design the ingestion layer".to_string(),
            deliverables: vec!["Architecture doc".to_string()],
            qualifications: Vec::new(),
            duration: None,
        }]);

        TicketLifecycle::new(
            store,
            Arc::new(agencies),
            Arc::new(tors),
            Arc::new(StaticIdentity::new("Procurement Desk")),
        )
        .with_clock(Arc::new(FixedClock::on(today())))
    }

    fn engine() -> TicketLifecycle {
        engine_with(Arc::new(InMemoryTicketStore::with_tickets(vec![draft(1)])))
    }

    #[tokio::test]
    async fn test_submit_stamps_actor_and_date() {
        let engine = engine();

        let ticket = engine.submit(1, Some("Alice")).await.unwrap();

        assert_eq!(ticket.status, TicketStatus::Submitted);
        assert_eq!(ticket.workflow.submitted_by.as_deref(), Some("Alice"));
        assert_eq!(ticket.workflow.submitted_date, Some(today()));
        assert_eq!(ticket.workflow.history.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_actor_uses_identity_provider() {
        let engine = engine();

        let ticket = engine.submit(1, None).await.unwrap();
        assert_eq!(ticket.workflow.submitted_by.as_deref(), Some("Procurement Desk"));

        let ticket = engine.validate(1, Some("   ")).await.unwrap();
        assert_eq!(ticket.workflow.validated_by.as_deref(), Some("Procurement Desk"));
    }

    #[tokio::test]
    async fn test_rejected_transition_leaves_ticket_untouched() {
        let engine = engine();
        let before = engine.get_ticket(1).await.unwrap();

        let err = engine.close(1, Some("Dana")).await.unwrap_err();

        assert!(err.is_invalid_transition());
        assert_eq!(engine.get_ticket(1).await.unwrap(), before);
        assert_eq!(engine.metrics().get_stats().transitions_rejected, 1);
    }

    #[tokio::test]
    async fn test_recall_clears_undone_stage_stamps() {
        let engine = engine();
        engine.submit(1, Some("Alice")).await.unwrap();
        engine.validate(1, Some("Victor")).await.unwrap();

        let ticket = engine.recall_to_submitted(1, Some("Victor")).await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Submitted);
        assert_eq!(ticket.workflow.submitted_by.as_deref(), Some("Alice"));
        assert_eq!(ticket.workflow.submitted_date, Some(today()));
        assert!(ticket.workflow.validated_by.is_none());
        assert!(ticket.workflow.validated_date.is_none());

        let ticket = engine.recall_to_draft(1, Some("Alice")).await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Draft);
        assert!(ticket.workflow.submitted_by.is_none());
        assert!(ticket.workflow.submitted_date.is_none());

        // the audit trail still names everyone involved
        assert_eq!(ticket.workflow.history.len(), 4);
        assert_eq!(ticket.workflow.history[1].actor, "Victor");
        assert_eq!(ticket.workflow.history[3].from, TicketStatus::Submitted);
        assert_eq!(ticket.workflow.history[3].to, TicketStatus::Draft);
    }

    /// Reports a calendar day that differs from the UTC date of `now`
    struct OffsetDayClock {
        now: chrono::DateTime<chrono::Utc>,
        today: NaiveDate,
    }

    impl Clock for OffsetDayClock {
        fn now(&self) -> chrono::DateTime<chrono::Utc> {
            self.now
        }

        fn today(&self) -> NaiveDate {
            self.today
        }
    }

    #[tokio::test]
    async fn test_stage_dates_follow_clock_today() {
        let local_day = NaiveDate::from_ymd_opt(2024, 5, 21).unwrap();
        let now = today().and_hms_opt(23, 30, 0).unwrap().and_utc();
        let engine = engine().with_clock(Arc::new(OffsetDayClock {
            now,
            today: local_day,
        }));

        let ticket = engine.submit(1, Some("Alice")).await.unwrap();
        assert_eq!(ticket.workflow.submitted_date, Some(local_day));
        assert_eq!(ticket.workflow.history[0].at, now);

        let ids: BTreeSet<AgencyId> = [1].into_iter().collect();
        let outcome = engine.float_to_agencies(1, &ids).await.unwrap();
        assert_eq!(
            outcome.ticket.workflow.floated_agencies[0].floated_date,
            local_day
        );
    }

    #[tokio::test]
    async fn test_injected_metrics_see_engine_activity() {
        let metrics = Arc::new(LifecycleMetrics::new());
        let engine = engine().with_metrics(Arc::clone(&metrics));

        engine.submit(1, None).await.unwrap();
        engine.close(1, None).await.unwrap_err();

        let stats = metrics.get_stats();
        assert_eq!(stats.transitions_applied, 1);
        assert_eq!(stats.transitions_rejected, 1);
    }

    #[tokio::test]
    async fn test_recall_only_from_matching_status() {
        let engine = engine();

        let err = engine.recall_to_draft(1, None).await.unwrap_err();
        assert!(err.is_invalid_transition());

        let err = engine.recall_to_submitted(1, None).await.unwrap_err();
        assert!(err.is_invalid_transition());
    }

    #[tokio::test]
    async fn test_store_failure_is_surfaced() {
        let mut store = MockTicketStore::new();
        store
            .expect_find_by_id()
            .returning(|id| Ok(Some(draft(id))));
        store.expect_save().times(1).returning(|ticket| {
            Err(StoreError::WriteRejected {
                id: ticket.id,
                reason: "disk full".to_string(),
            })
        });
        let engine = engine_with(Arc::new(store));

        let err = engine.submit(5, Some("Alice")).await.unwrap_err();

        assert!(matches!(err, LifecycleError::Store(StoreError::WriteRejected { id: 5, .. })));
        assert_eq!(engine.metrics().get_stats().transitions_applied, 0);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_float() {
        let mut store = MockTicketStore::new();
        store.expect_find_by_id().returning(|_| {
            Err(StoreError::Unavailable {
                reason: "connection refused".to_string(),
            })
        });
        let engine = engine_with(Arc::new(store));
        let ids: BTreeSet<AgencyId> = [1].into_iter().collect();

        let err = engine.float_to_agencies(1, &ids).await.unwrap_err();

        assert!(matches!(err, LifecycleError::Store(StoreError::Unavailable { .. })));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_invalid_transition_never_saves() {
        let mut store = MockTicketStore::new();
        store.expect_find_by_id().returning(|id| {
            let mut ticket = draft(id);
            ticket.status = TicketStatus::Closed;
            Ok(Some(ticket))
        });
        store.expect_save().never();
        let engine = engine_with(Arc::new(store));

        let err = engine.submit(3, None).await.unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidTransition {
                id: 3,
                from: TicketStatus::Closed,
                to: TicketStatus::Submitted
            }
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submits_only_one_wins() {
        let engine = Arc::new(engine());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let engine = Arc::clone(&engine);
                tokio::spawn(async move {
                    let actor = format!("clerk-{n}");
                    engine.submit(1, Some(actor.as_str())).await
                })
            })
            .collect();

        let mut successes = 0;
        let mut rejections = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) if e.is_invalid_transition() => rejections += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(rejections, 7);
        let ticket = engine.get_ticket(1).await.unwrap();
        assert_eq!(ticket.workflow.history.len(), 1);
    }

    #[tokio::test]
    async fn test_float_skips_inactive_agencies() {
        let engine = engine();
        let ids: BTreeSet<AgencyId> = [1, 2, 99].into_iter().collect();

        let outcome = engine.float_to_agencies(1, &ids).await.unwrap();

        assert_eq!(outcome.floated_to, vec!["TalentBridge"]);
        assert_eq!(outcome.ticket.workflow.floated_agencies.len(), 1);
        assert_eq!(outcome.ticket.status, TicketStatus::Draft);
        assert_eq!(engine.metrics().get_stats().agencies_floated, 1);
    }

    #[tokio::test]
    async fn test_create_ticket_assigns_ids_and_copies_tor() {
        let engine = engine();

        let ticket = engine
            .create_ticket(NewTicket {
                title: "Data platform contractors".to_string(),
                department: Some("Analytics".to_string()),
                positions: vec![
                    NewPosition {
                        title: "Data Engineer".to_string(),
                        required_skills: vec!["Spark".to_string()],
                        budget: None,
                        description: String::new(),
                    },
                    NewPosition {
                        title: "Analytics Engineer".to_string(),
                        required_skills: vec!["dbt".to_string()],
                        budget: None,
                        description: String::new(),
                    },
                ],
                attachments: vec![NewAttachment {
                    name: "tor.pdf".to_string(),
                    category: AttachmentCategory::Tor,
                    size_bytes: 20_480,
                }],
                tor_template_id: Some(10),
            })
            .await
            .unwrap();

        assert_eq!(ticket.id, 2);
        assert_eq!(ticket.status, TicketStatus::Draft);
        assert_eq!(ticket.positions[0].id, 1);
        assert_eq!(ticket.positions[1].id, 2);
        assert_eq!(ticket.attachments[0].id, 1);
        assert_eq!(ticket.attachments[0].uploaded_date, today());
        assert_eq!(ticket.attached_tor.as_ref().map(|t| t.template_id), Some(10));
        assert_eq!(ticket.workflow, WorkflowRecord::default());
    }

    #[tokio::test]
    async fn test_create_ticket_with_unknown_tor_fails() {
        let engine = engine();

        let err = engine
            .create_ticket(NewTicket {
                title: "Orphan".to_string(),
                tor_template_id: Some(404),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LifecycleError::TorNotFound { id: 404 }));
        assert_eq!(engine.list_tickets(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_irreversible() {
        let engine = engine();

        engine.delete_ticket(1).await.unwrap();

        assert!(engine.get_ticket(1).await.unwrap_err().is_not_found());
        assert!(engine.delete_ticket(1).await.unwrap_err().is_not_found());
        let next = engine.create_ticket(NewTicket::default()).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_ungated_mutations_keep_status() {
        let engine = engine();
        engine.submit(1, Some("Alice")).await.unwrap();

        let ticket = engine
            .add_attachment(
                1,
                NewAttachment {
                    name: "agency-letter.docx".to_string(),
                    category: AttachmentCategory::Correspondence,
                    size_bytes: 4_096,
                },
            )
            .await
            .unwrap();
        assert_eq!(ticket.status, TicketStatus::Submitted);
        assert_eq!(ticket.attachments.len(), 1);

        let ticket = engine
            .add_position(
                1,
                NewPosition {
                    title: "QA Analyst".to_string(),
                    required_skills: Vec::new(),
                    budget: None,
                    description: String::new(),
                },
            )
            .await
            .unwrap();
        assert_eq!(ticket.positions.len(), 1);
        assert_eq!(ticket.status, TicketStatus::Submitted);
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let engine = engine();
        engine.create_ticket(NewTicket::default()).await.unwrap();
        engine.submit(1, None).await.unwrap();

        let submitted = engine.list_tickets(Some(TicketStatus::Submitted)).await.unwrap();
        let drafts = engine.list_tickets(Some(TicketStatus::Draft)).await.unwrap();

        assert_eq!(submitted.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(drafts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
    }
}

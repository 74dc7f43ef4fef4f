//! Shared builders for ticket lifecycle integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use requisition_desk::tickets::{NewPosition, NewTicket};
use requisition_desk::{
    Agency, FixedClock, InMemoryAgencyRoster, InMemoryTicketStore, InMemoryTorCatalog,
    StaticIdentity, TicketLifecycle, TorTemplate,
};
use std::sync::Arc;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

pub fn agency(id: u64, name: &str, active: bool) -> Agency {
    Agency {
        id,
        name: name.to_string(),
        active,
        specialties: Vec::new(),
        contact_email: None,
    }
}

pub fn roster() -> Vec<Agency> {
    vec![
        agency(1, "TalentBridge Staffing", true),
        agency(2, "Northwind Contractors", true),
        agency(3, "Legacy Temps", false),
        agency(4, "Summit Talent", true),
        agency(5, "Harbor Workforce", true),
    ]
}

pub fn tor_templates() -> Vec<TorTemplate> {
    vec![TorTemplate {
        id: 1,
        title: "Cloud Migration Support".to_string(),
        scope: "Migrate on-premise workloads".to_string(),
        deliverables: vec!["Migration runbook".to_string()],
        qualifications: vec!["AWS".to_string()],
        duration: Some("6 months".to_string()),
    }]
}

/// Engine over empty in-memory storage with a pinned clock
pub fn lifecycle() -> TicketLifecycle {
    lifecycle_with_catalog(Arc::new(InMemoryTorCatalog::new(tor_templates())))
}

pub fn lifecycle_with_catalog(catalog: Arc<InMemoryTorCatalog>) -> TicketLifecycle {
    TicketLifecycle::new(
        Arc::new(InMemoryTicketStore::new()),
        Arc::new(InMemoryAgencyRoster::new(roster())),
        catalog,
        Arc::new(StaticIdentity::new("Procurement Desk")),
    )
    .with_clock(Arc::new(FixedClock::on(today())))
}

pub fn new_ticket(title: &str) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        department: Some("Engineering".to_string()),
        positions: vec![NewPosition {
            title: "Backend Developer".to_string(),
            required_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            budget: None,
            description: "Payments platform".to_string(),
        }],
        attachments: Vec::new(),
        tor_template_id: None,
    }
}

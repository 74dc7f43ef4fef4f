// Ticket transition table - the only authority on which status moves are legal

use super::types::TicketStatus;

/// Statuses reachable from `from` in a single step
pub fn allowed_targets(from: TicketStatus) -> &'static [TicketStatus] {
    use TicketStatus::*;

    match from {
        Draft => &[Submitted],
        Submitted => &[Validated, Draft],
        Validated => &[Posted, Submitted],
        Posted => &[InProgress],
        InProgress => &[Closed],
        Closed => &[],
    }
}

pub fn is_allowed(from: TicketStatus, to: TicketStatus) -> bool {
    allowed_targets(from).contains(&to)
}

/// String-level check for callers holding raw status names. Unknown names are never allowed.
pub fn is_allowed_str(from: &str, to: &str) -> bool {
    match (from.parse::<TicketStatus>(), to.parse::<TicketStatus>()) {
        (Ok(from), Ok(to)) => is_allowed(from, to),
        _ => false,
    }
}

pub fn is_terminal(status: TicketStatus) -> bool {
    allowed_targets(status).is_empty()
}

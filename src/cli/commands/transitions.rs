use crate::tickets::{allowed_targets, TicketStatus};

pub struct TransitionsCommand;

impl TransitionsCommand {
    /// One line per status, `from -> a, b`; terminal statuses show `(terminal)`
    pub fn render() -> String {
        TicketStatus::ALL
            .iter()
            .map(|from| {
                let targets = allowed_targets(*from);
                let rendered = if targets.is_empty() {
                    "(terminal)".to_string()
                } else {
                    targets
                        .iter()
                        .map(|to| to.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!("{:<12} -> {}", from.as_str(), rendered)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

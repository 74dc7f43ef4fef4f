// Staffing agency roster - the external list that floating filters against

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::store::StoreError;
use crate::tickets::AgencyId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub id: AgencyId,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub contact_email: Option<String>,
}

fn default_active() -> bool {
    true
}

#[async_trait]
pub trait AgencyRoster: Send + Sync {
    /// Active agencies in roster order
    async fn active_agencies(&self) -> Result<Vec<Agency>, StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryAgencyRoster {
    agencies: RwLock<Vec<Agency>>,
}

impl InMemoryAgencyRoster {
    pub fn new(agencies: Vec<Agency>) -> Self {
        Self {
            agencies: RwLock::new(agencies),
        }
    }

    pub async fn set_active(&self, id: AgencyId, active: bool) -> bool {
        let mut agencies = self.agencies.write().await;
        match agencies.iter_mut().find(|agency| agency.id == id) {
            Some(agency) => {
                agency.active = active;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl AgencyRoster for InMemoryAgencyRoster {
    async fn active_agencies(&self) -> Result<Vec<Agency>, StoreError> {
        Ok(self
            .agencies
            .read()
            .await
            .iter()
            .filter(|agency| agency.active)
            .cloned()
            .collect())
    }
}

// Terms-of-Reference templates. Tickets copy a template at creation time and
// never follow later edits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::store::StoreError;
use crate::tickets::{TorId, TorSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorTemplate {
    pub id: TorId,
    pub title: String,
    pub scope: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub duration: Option<String>,
}

impl TorTemplate {
    pub fn snapshot(&self) -> TorSnapshot {
        TorSnapshot {
            template_id: self.id,
            title: self.title.clone(),
            scope: self.scope.clone(),
            deliverables: self.deliverables.clone(),
            qualifications: self.qualifications.clone(),
            duration: self.duration.clone(),
        }
    }
}

#[async_trait]
pub trait TorCatalog: Send + Sync {
    async fn find_template(&self, id: TorId) -> Result<Option<TorTemplate>, StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryTorCatalog {
    templates: RwLock<BTreeMap<TorId, TorTemplate>>,
}

impl InMemoryTorCatalog {
    pub fn new(templates: Vec<TorTemplate>) -> Self {
        Self {
            templates: RwLock::new(templates.into_iter().map(|t| (t.id, t)).collect()),
        }
    }

    /// Replace a template in place
    pub async fn update(&self, template: TorTemplate) {
        self.templates.write().await.insert(template.id, template);
    }
}

#[async_trait]
impl TorCatalog for InMemoryTorCatalog {
    async fn find_template(&self, id: TorId) -> Result<Option<TorTemplate>, StoreError> {
        Ok(self.templates.read().await.get(&id).cloned())
    }
}

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

use crate::config::Capacities;
use crate::errors::RegistryError;
use crate::health_queue::HealthQueue;
use crate::inventory::AssetRegistry;
use crate::load_index::LoadIndex;
use crate::scheduler::TaskScheduler;

/// Registre derrière son propre verrou
pub type Shared<T> = Arc<Mutex<T>>;

fn locked<T>(registry: T) -> Shared<T> {
    Arc::new(Mutex::new(registry))
}

/// Une instance de chaque registre, possédée par l'appelant pour la durée
/// d'une session console. Rien n'est partagé entre registres.
#[derive(Debug)]
pub struct Session {
    pub inventory: AssetRegistry,
    pub loads: LoadIndex,
    pub scheduler: TaskScheduler,
    pub reports: HealthQueue,
}

impl Session {
    pub fn new(capacities: &Capacities) -> Result<Self, RegistryError> {
        let session = Self {
            inventory: AssetRegistry::new(capacities.assets),
            loads: LoadIndex::new(),
            scheduler: TaskScheduler::new(capacities.tasks),
            reports: HealthQueue::new(capacities.reports)?,
        };
        info!(
            assets = capacities.assets,
            tasks = capacities.tasks,
            reports = capacities.reports,
            "fleet session opened"
        );
        Ok(session)
    }

    /// Un verrou par registre ; aucune opération n'en prend deux
    pub fn into_shared(self) -> SharedSession {
        SharedSession {
            inventory: locked(self.inventory),
            loads: locked(self.loads),
            scheduler: locked(self.scheduler),
            reports: locked(self.reports),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SharedSession {
    pub inventory: Shared<AssetRegistry>,
    pub loads: Shared<LoadIndex>,
    pub scheduler: Shared<TaskScheduler>,
    pub reports: Shared<HealthQueue>,
}

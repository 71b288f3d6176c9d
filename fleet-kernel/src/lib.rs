/**
 * FLEET KERNEL - Registres en mémoire de l'état opérationnel de la flotte
 *
 * RÔLE : Quatre moteurs indépendants, chacun adossé à une structure de données
 * classique : inventaire (tableau borné), index de charge (ABR non équilibré),
 * planificateur de maintenance (tas binaire min), file des rapports de santé
 * (tampon circulaire).
 *
 * ARCHITECTURE : Aucun état global. Une `Session` possède une instance de chaque
 * registre ; `SharedSession` ajoute un verrou par registre pour l'embarquer.
 * UTILITÉ : Cœur algorithmique consommé par la console opérateur.
 */

pub mod config;
pub mod errors;
pub mod health_queue;
pub mod inventory;
pub mod load_index;
pub mod models;
pub mod scheduler;
pub mod session;

pub use config::{load_config, Capacities, ConsoleConfig, Role};
pub use errors::RegistryError;
pub use health_queue::HealthQueue;
pub use inventory::{AssetPatch, AssetRegistry, StatusCounts};
pub use load_index::{LoadIndex, Upsert};
pub use models::{
    AssetId, AssetRecord, AssetStatus, HealthReport, HealthStatus, LoadEntry, SchedulerTask,
    ServerId, TaskId,
};
pub use scheduler::TaskScheduler;
pub use session::{Session, Shared, SharedSession};

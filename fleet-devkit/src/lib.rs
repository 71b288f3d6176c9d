/*!
# Fleet DevKit - Outillage de test pour les registres de flotte

Bibliothèque facilitant l'écriture de tests avec:
- Fixtures prêtes à l'emploi (assets, rapports, tâches, flotte exemple)
- Vérificateurs d'invariants structurels (tas, ABR)
- Générateurs d'opérations aléatoires reproductibles et rejeu contre un modèle
*/

pub mod fixtures;
pub mod invariants;
pub mod ops;

pub use fixtures::{asset, init_logging, report, sample_session, task};
pub use invariants::{assert_heap_property, assert_strictly_ascending, drain_priorities};
pub use ops::{HeapOp, LoadOp, QueueOp};

/**
 * INVENTAIRE DES ASSETS - Collection bornée d'enregistrements à clé unique
 *
 * RÔLE : Ajout, mise à jour partielle, recherche linéaire, listing dans l'ordre
 * d'insertion et comptage par statut.
 *
 * Pas de suppression : un asset se désactive (statut Inactive), son id reste
 * stable pour toute référence externe.
 */

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::RegistryError;
use crate::models::{normalize_name, AssetId, AssetRecord, AssetStatus, ASSET_NAME_MAX};

/// Mise à jour partielle : `None` = champ laissé tel quel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub status: Option<AssetStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub active: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone)]
pub struct AssetRegistry {
    records: Vec<AssetRecord>,
    capacity: usize,
}

impl AssetRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ajoute un asset en fin de collection.
    ///
    /// Ordre des contrôles : clé dupliquée, capacité, puis nom.
    pub fn add(&mut self, id: AssetId, name: &str, status: AssetStatus) -> Result<(), RegistryError> {
        let result = self.check_insert(id).and_then(|_| normalize_name(name, ASSET_NAME_MAX));
        match result {
            Ok(name) => {
                self.records.push(AssetRecord { id, name, status });
                debug!(asset_id = id, %status, "asset added");
                Ok(())
            }
            Err(e) => {
                warn!(asset_id = id, error = %e, "asset add rejected");
                Err(e)
            }
        }
    }

    fn check_insert(&self, id: AssetId) -> Result<(), RegistryError> {
        if self.position(id).is_some() {
            return Err(RegistryError::DuplicateKey(id));
        }
        if self.records.len() >= self.capacity {
            return Err(RegistryError::CapacityExceeded { capacity: self.capacity });
        }
        Ok(())
    }

    /// Applique les champs fournis et renvoie l'enregistrement à jour.
    /// Rien n'est modifié si l'un des champs est invalide.
    pub fn update(&mut self, id: AssetId, patch: AssetPatch) -> Result<&AssetRecord, RegistryError> {
        let Some(idx) = self.position(id) else {
            warn!(asset_id = id, "asset update on unknown id");
            return Err(RegistryError::NotFound(id));
        };

        let name = match patch.name.as_deref() {
            Some(raw) => Some(normalize_name(raw, ASSET_NAME_MAX).inspect_err(|e| {
                warn!(asset_id = id, error = %e, "asset update rejected");
            })?),
            None => None,
        };

        let record = &mut self.records[idx];
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        debug!(asset_id = id, status = %record.status, "asset updated");
        Ok(record)
    }

    pub fn find(&self, id: AssetId) -> Option<&AssetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Enregistrements dans l'ordre d'insertion
    pub fn list_all(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn count_by_status(&self) -> StatusCounts {
        self.records.iter().fold(StatusCounts::default(), |mut acc, r| {
            match r.status {
                AssetStatus::Active => acc.active += 1,
                AssetStatus::Inactive => acc.inactive += 1,
            }
            acc
        })
    }

    fn position(&self, id: AssetId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

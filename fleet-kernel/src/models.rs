use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RegistryError;

pub type AssetId = i64;
pub type ServerId = i64;
pub type TaskId = i64;

/// Longueur utile max d'un nom d'asset (buffer historique de 64 octets)
pub const ASSET_NAME_MAX: usize = 63;
/// Longueur utile max d'un nom de tâche (buffer historique de 50 octets)
pub const TASK_NAME_MAX: usize = 49;
/// Borne haute de la charge d'un serveur
pub const LOAD_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    Inactive,
}

impl FromStr for AssetStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(RegistryError::invalid(format!(
                "asset status '{other}' (expected Active/Inactive)"
            ))),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: AssetId,
    pub name: String,
    pub status: AssetStatus,
}

/// Paire (serveur, charge) telle que restituée par l'index de charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadEntry {
    pub id: ServerId,
    pub load: u8,
}

impl From<(ServerId, u8)> for LoadEntry {
    fn from((id, load): (ServerId, u8)) -> Self {
        Self { id, load }
    }
}

/// Tâche de maintenance ; priorité basse = plus urgente
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerTask {
    pub id: TaskId,
    pub name: String,
    pub priority: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl FromStr for HealthStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "healthy" => Ok(Self::Healthy),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            other => Err(RegistryError::invalid(format!(
                "health status '{other}' (expected Healthy/Warning/Critical)"
            ))),
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Healthy => "Healthy",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub server_id: ServerId,
    pub status: HealthStatus,
    pub cpu_usage: f32,
    pub memory_usage: f32,
}

impl HealthReport {
    pub fn new(server_id: ServerId, status: HealthStatus, cpu_usage: f32, memory_usage: f32) -> Self {
        Self { server_id, status, cpu_usage, memory_usage }
    }

    /// Vérifie que les deux pourcentages sont dans [0,100]
    pub fn validate(&self) -> Result<(), RegistryError> {
        check_percentage("cpu usage", self.cpu_usage)?;
        check_percentage("memory usage", self.memory_usage)
    }
}

pub fn check_percentage(field: &str, value: f32) -> Result<(), RegistryError> {
    // NaN échoue aussi sur contains()
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(RegistryError::invalid(format!("{field} {value} outside [0,100]")))
    }
}

/// Nettoie un nom : trim, refus si vide, troncature à `max_chars` caractères
pub(crate) fn normalize_name(raw: &str, max_chars: usize) -> Result<String, RegistryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::invalid("name must not be blank"));
    }
    Ok(trimmed.chars().take(max_chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("Active".parse::<AssetStatus>().unwrap(), AssetStatus::Active);
        assert_eq!(" inactive ".parse::<AssetStatus>().unwrap(), AssetStatus::Inactive);
        assert_eq!("CRITICAL".parse::<HealthStatus>().unwrap(), HealthStatus::Critical);
        assert!(matches!(
            "retired".parse::<AssetStatus>(),
            Err(RegistryError::InvalidAttribute(_))
        ));
        assert!("degraded".parse::<HealthStatus>().is_err());
    }

    #[test]
    fn test_report_validation() {
        assert!(HealthReport::new(1, HealthStatus::Healthy, 0.0, 100.0).validate().is_ok());
        assert!(HealthReport::new(1, HealthStatus::Healthy, -0.5, 10.0).validate().is_err());
        assert!(HealthReport::new(1, HealthStatus::Healthy, 10.0, 100.1).validate().is_err());
        assert!(HealthReport::new(1, HealthStatus::Healthy, f32::NAN, 10.0).validate().is_err());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  rack-04  ", 63).unwrap(), "rack-04");
        assert!(normalize_name("   ", 63).is_err());
        assert_eq!(normalize_name("héllo wörld", 4).unwrap(), "héll");
    }

    #[test]
    fn test_records_serialize_for_dumps() {
        let a = AssetRecord { id: 7, name: "core-switch".into(), status: AssetStatus::Active };
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "name": "core-switch", "status": "Active"}));
    }
}

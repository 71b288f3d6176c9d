use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{warn, Level};

pub const CONFIG_ENV: &str = "FLEET_CONSOLE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "console.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub capacities: Capacities,
    pub role: Role,
    pub log_level: String,
}

/// Tailles maximales déclarées des registres bornés
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Capacities {
    pub assets: usize,
    pub tasks: usize,
    pub reports: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Operator,
    Viewer,
}

impl Role {
    pub fn can_mutate(self) -> bool {
        matches!(self, Role::Operator)
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self { assets: 200, tasks: 100, reports: 32 }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            capacities: Capacities::default(),
            role: Role::Operator,
            log_level: "warn".into(),
        }
    }
}

impl Capacities {
    /// Remplace chaque capacité nulle par sa valeur par défaut
    fn sanitized(self) -> Self {
        let defaults = Capacities::default();
        let pick = |field: &str, value: usize, default: usize| {
            if value == 0 {
                warn!(field, default, "zero capacity in config, using default");
                default
            } else {
                value
            }
        };
        Self {
            assets: pick("assets", self.assets, defaults.assets),
            tasks: pick("tasks", self.tasks, defaults.tasks),
            reports: pick("reports", self.reports, defaults.reports),
        }
    }
}

/// Chemin effectif : argument explicite, sinon `FLEET_CONSOLE_CONFIG`, sinon `console.yaml`
pub fn resolve_config_path(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
}

/// N'échoue jamais : toute erreur retombe sur la configuration par défaut
pub async fn load_config(path: &str) -> ConsoleConfig {
    if !Path::new(path).exists() {
        warn!(path, "no console config, using defaults");
        return ConsoleConfig::default();
    }
    let txt = fs::read_to_string(path).await.unwrap_or_default();
    if txt.trim().is_empty() {
        warn!(path, "empty console config, using defaults");
        return ConsoleConfig::default();
    }
    parse_config(&txt).unwrap_or_else(|e| {
        warn!(path, error = %e, "invalid console config, using defaults");
        ConsoleConfig::default()
    })
}

pub fn parse_config(txt: &str) -> Result<ConsoleConfig, serde_yaml::Error> {
    let mut cfg: ConsoleConfig = serde_yaml::from_str(txt)?;
    cfg.capacities = cfg.capacities.sanitized();
    cfg.log_level = sanitized_level(&cfg.log_level);
    Ok(cfg)
}

/// Niveau normalisé en minuscules ; inconnu -> `warn`
fn sanitized_level(raw: &str) -> String {
    match raw.trim().parse::<Level>() {
        Ok(level) => level.to_string().to_ascii_lowercase(),
        Err(_) => {
            warn!(log_level = raw, "unknown log level in config, using warn");
            ConsoleConfig::default().log_level
        }
    }
}

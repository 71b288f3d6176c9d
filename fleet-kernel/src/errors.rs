/// Erreurs possibles lors des opérations sur les registres
///
/// Toutes sont locales et récupérables : un appel en échec laisse la
/// structure exactement dans l'état où il l'a trouvée.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate key: {0} already exists")]
    DuplicateKey(i64),
    #[error("not found: {0}")]
    NotFound(i64),
    #[error("capacity exceeded: registry holds at most {capacity} entries")]
    CapacityExceeded { capacity: usize },
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),
}

impl RegistryError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidAttribute(msg.into())
    }
}

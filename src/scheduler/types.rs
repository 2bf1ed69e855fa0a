use thiserror::Error;

/// Options du générateur
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Graine du tirage ; `None` = tirage indépendant à chaque exécution.
    pub seed: Option<u64>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("configuration error: {0}")]
    Configuration(&'static str),
    #[error("no volunteer available to draw from")]
    EmptyPool,
    #[error("year out of calendar range: {0}")]
    InvalidYear(i32),
}

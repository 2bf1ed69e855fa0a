use super::SchedError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Noms déjà tirés pendant la passe de rotation en cours.
#[derive(Debug, Clone, Default)]
pub(super) struct Rotation {
    used: BTreeSet<String>,
}

impl Rotation {
    pub(super) fn reset(&mut self) {
        self.used.clear();
    }

    /// Tire un diacre pas encore passé et renvoie sa position dans `roster`.
    /// La passe repart à zéro dès que tout le rôle est passé, ou quand un
    /// nom en double ne laisse plus aucun candidat.
    pub(super) fn next_pick<R: Rng>(
        &mut self,
        roster: &[String],
        rng: &mut R,
    ) -> Result<usize, SchedError> {
        if self.used.len() >= roster.len() {
            #[cfg(feature = "logging")]
            tracing::debug!(total = roster.len(), "rotation pass complete, starting a new one");
            self.reset();
        }

        let mut candidates: Vec<usize> = (0..roster.len())
            .filter(|&i| !self.used.contains(&roster[i]))
            .collect();
        if candidates.is_empty() {
            self.reset();
            candidates = (0..roster.len()).collect();
        }

        let chosen = *candidates.choose(rng).ok_or(SchedError::EmptyPool)?;
        self.used.insert(roster[chosen].clone());
        Ok(chosen)
    }
}

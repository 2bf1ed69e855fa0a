mod annual;
mod calendar;
mod rotation;
mod types;
mod weekly;

pub use calendar::{compute_year_dates, find_preceding_saturday};
pub use types::{GeneratorOptions, SchedError};

use crate::model::Schedule;
use crate::render::{ScheduleRenderer, TextRenderer};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rotation::Rotation;
use std::collections::BTreeMap;

/// Générateur d'escala : possède le rôle des diacres, sa source aléatoire
/// et l'état de rotation. Une instance par appelant ; non partageable.
#[derive(Debug)]
pub struct ScheduleGenerator<R = ChaCha8Rng> {
    roster: Vec<String>,
    rng: R,
    rotation: Rotation,
    /// sábado -> index (dans `roster`) de la chave de la semaine
    weekly_link: BTreeMap<NaiveDate, usize>,
    schedule: Schedule,
}

impl ScheduleGenerator<ChaCha8Rng> {
    /// Construit un générateur ; avec une graine, deux exécutions sur le
    /// même rôle donnent exactement la même escala.
    pub fn new<S: AsRef<str>>(roster: &[S], seed: Option<u64>) -> Result<Self, SchedError> {
        Self::with_options(roster, GeneratorOptions { seed })
    }

    pub fn with_options<S: AsRef<str>>(
        roster: &[S],
        opts: GeneratorOptions,
    ) -> Result<Self, SchedError> {
        let rng = match opts.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(roster, rng)
    }
}

impl<R: Rng> ScheduleGenerator<R> {
    /// Construit un générateur sur une source aléatoire fournie.
    pub fn with_rng<S: AsRef<str>>(roster: &[S], rng: R) -> Result<Self, SchedError> {
        if roster.is_empty() {
            return Err(SchedError::Configuration("volunteer roster must not be empty"));
        }
        Ok(Self {
            roster: roster.iter().map(|s| s.as_ref().to_owned()).collect(),
            rng,
            rotation: Rotation::default(),
            weekly_link: BTreeMap::new(),
            schedule: Schedule::new(),
        })
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Dernière escala générée (vide avant le premier appel).
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Tirage uniforme dans `pool`.
    pub fn draw<'a>(&mut self, pool: &'a [String]) -> Result<&'a str, SchedError> {
        pool.choose(&mut self.rng)
            .map(String::as_str)
            .ok_or(SchedError::EmptyPool)
    }

    /// Prochaine chave de la rotation circulaire : personne ne revient
    /// avant que tout le rôle soit passé.
    pub fn next_rotation_pick(&mut self) -> Result<&str, SchedError> {
        let idx = self.rotation.next_pick(&self.roster, &mut self.rng)?;
        Ok(&self.roster[idx])
    }

    /// Escala complète d'une année : 1 chave + 2 ofertas chaque sábado,
    /// la même chave le domingo et la quarta qui suivent.
    pub fn generate_annual_schedule(&mut self, year: i32) -> Result<&Schedule, SchedError> {
        self.schedule = Schedule::new();
        #[cfg(feature = "logging")]
        tracing::debug!(year, roster = self.roster.len(), "generating annual schedule");

        let schedule = annual::generate(self, year)?;

        #[cfg(feature = "logging")]
        tracing::debug!(year, assignments = schedule.len(), "annual schedule ready");
        self.schedule = schedule;
        Ok(&self.schedule)
    }

    /// Escala d'une seule semaine, sans dates (mode historique).
    pub fn generate_weekly_schedule(&mut self, avoid_repeat: bool) -> Result<&Schedule, SchedError> {
        self.schedule = Schedule::new();
        #[cfg(feature = "logging")]
        tracing::debug!(avoid_repeat, roster = self.roster.len(), "generating weekly schedule");

        self.schedule = weekly::generate(self, avoid_repeat)?;
        Ok(&self.schedule)
    }

    /// Rendu texte de la dernière escala.
    pub fn display(&self) -> String {
        TextRenderer.render(&self.schedule)
    }
}

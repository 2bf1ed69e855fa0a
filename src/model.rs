use chrono::{DateTime, NaiveDate, Utc, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Jour de culte couvert par l'escala.
///
/// L'ordre des variantes est l'ordre d'affichage (domingo, quarta, sábado).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ServiceDay {
    Sunday,
    Wednesday,
    Saturday,
}

impl ServiceDay {
    pub const ALL: [ServiceDay; 3] = [ServiceDay::Sunday, ServiceDay::Wednesday, ServiceDay::Saturday];

    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Sun => Some(Self::Sunday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Sat => Some(Self::Saturday),
            _ => None,
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Wednesday => Weekday::Wed,
            Self::Saturday => Weekday::Sat,
        }
    }

    /// Nombre de jours depuis le sábado qui ouvre la semaine de service.
    pub fn days_after_saturday(self) -> i64 {
        match self {
            Self::Saturday => 0,
            Self::Sunday => 1,
            Self::Wednesday => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sunday => "DOMINGO",
            Self::Wednesday => "QUARTA",
            Self::Saturday => "SABADO",
        }
    }
}

impl fmt::Display for ServiceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fonction tenue par un diacre pour un culte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// "chave" : responsable du culte, un seul par date.
    Primary,
    /// "oferta" : appui, deux le sábado en mode annuel.
    Secondary,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Primary, Role::Secondary];

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "chave",
            Self::Secondary => "oferta",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Une ligne de l'escala : qui, quelle fonction, quel jour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub volunteer: String,
    pub role: Role,
    pub day: ServiceDay,
    /// Absente en mode hebdomadaire (legacy).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub date: Option<NaiveDate>,
}

impl Assignment {
    pub fn new<S: Into<String>>(
        volunteer: S,
        role: Role,
        day: ServiceDay,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            volunteer: volunteer.into(),
            role,
            day,
            date,
        }
    }
}

/// Escala générée, dans l'ordre chronologique des cultes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Vrai si la première affectation porte une date (mode annuel).
    pub fn has_dates(&self) -> bool {
        self.assignments
            .first()
            .map_or(false, |a| a.date.is_some())
    }

    /// Regroupe par jour ; les trois jours sont toujours présents.
    pub fn by_day(&self) -> BTreeMap<ServiceDay, Vec<&Assignment>> {
        let mut out: BTreeMap<ServiceDay, Vec<&Assignment>> =
            ServiceDay::ALL.iter().map(|d| (*d, Vec::new())).collect();
        for a in &self.assignments {
            out.entry(a.day).or_default().push(a);
        }
        out
    }

    /// Regroupe par fonction ; chave et oferta toujours présentes.
    pub fn by_role(&self) -> BTreeMap<Role, Vec<&Assignment>> {
        let mut out: BTreeMap<Role, Vec<&Assignment>> =
            Role::ALL.iter().map(|r| (*r, Vec::new())).collect();
        for a in &self.assignments {
            out.entry(a.role).or_default().push(a);
        }
        out
    }

    /// Affectations datées, regroupées par date croissante.
    pub fn by_date(&self) -> BTreeMap<NaiveDate, Vec<&Assignment>> {
        let mut out: BTreeMap<NaiveDate, Vec<&Assignment>> = BTreeMap::new();
        for a in &self.assignments {
            if let Some(date) = a.date {
                out.entry(date).or_default().push(a);
            }
        }
        out
    }

    /// Nom de la chave pour une date donnée.
    pub fn primary_on(&self, date: NaiveDate) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.date == Some(date) && a.role == Role::Primary)
            .map(|a| a.volunteer.as_str())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

impl From<Vec<Assignment>> for Schedule {
    fn from(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }
}

/// Identifiant fort pour un tirage sauvegardé
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Résultat d'un tirage, tel qu'il est persisté sur disque.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleRecord {
    pub id: ScheduleId,
    pub roster: Vec<String>,
    /// Absente pour l'escala hebdomadaire.
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
    pub schedule: Schedule,
}

impl ScheduleRecord {
    pub fn new(
        roster: &[String],
        year: Option<i32>,
        seed: Option<u64>,
        schedule: Schedule,
    ) -> Self {
        Self {
            id: ScheduleId::random(),
            roster: roster.to_vec(),
            year,
            seed,
            generated_at: Utc::now(),
            schedule,
        }
    }
}

#![forbid(unsafe_code)]
//! Escala — tirage au sort de l'escala annuelle des diacres.
//!
//! - Dates de domingo, quarta et sábado d'une année civile.
//! - Chave du sábado en rotation circulaire, reprise le domingo et la quarta.
//! - Deux ofertas tirées librement chaque sábado.
//! - Tirage reproductible avec une graine (ChaCha8 propre à chaque générateur).

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use model::{Assignment, Role, Schedule, ScheduleId, ScheduleRecord, ServiceDay};
pub use render::{format_date, RoleRenderer, ScheduleRenderer, TextRenderer};
pub use scheduler::{
    compute_year_dates, find_preceding_saturday, GeneratorOptions, SchedError, ScheduleGenerator,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};

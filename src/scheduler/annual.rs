use super::{calendar, SchedError, ScheduleGenerator};
use crate::model::{Assignment, Role, Schedule, ServiceDay};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ofertas tirées chaque sábado.
const SATURDAY_SECONDARIES: usize = 2;

pub(super) fn generate<R: Rng>(
    generator: &mut ScheduleGenerator<R>,
    year: i32,
) -> Result<Schedule, SchedError> {
    generator.rotation.reset();
    generator.weekly_link.clear();

    let dates = calendar::compute_year_dates(year)?;
    let mut schedule = Schedule::new();

    for (date, day) in calendar::chronological(&dates) {
        match day {
            ServiceDay::Saturday => add_saturday(generator, date, &mut schedule)?,
            ServiceDay::Sunday | ServiceDay::Wednesday => {
                add_linked_day(generator, day, date, &mut schedule)?
            }
        }
    }

    Ok(schedule)
}

fn add_saturday<R: Rng>(
    generator: &mut ScheduleGenerator<R>,
    date: NaiveDate,
    schedule: &mut Schedule,
) -> Result<(), SchedError> {
    let primary = generator
        .rotation
        .next_pick(&generator.roster, &mut generator.rng)?;
    generator.weekly_link.insert(date, primary);
    schedule.push(Assignment::new(
        generator.roster[primary].clone(),
        Role::Primary,
        ServiceDay::Saturday,
        Some(date),
    ));

    // n'importe qui, chave comprise, avec remise
    for _ in 0..SATURDAY_SECONDARIES {
        let secondary = generator
            .roster
            .choose(&mut generator.rng)
            .ok_or(SchedError::EmptyPool)?;
        schedule.push(Assignment::new(
            secondary.clone(),
            Role::Secondary,
            ServiceDay::Saturday,
            Some(date),
        ));
    }
    Ok(())
}

fn add_linked_day<R: Rng>(
    generator: &mut ScheduleGenerator<R>,
    day: ServiceDay,
    date: NaiveDate,
    schedule: &mut Schedule,
) -> Result<(), SchedError> {
    let linked = calendar::find_preceding_saturday(date)
        .and_then(|saturday| generator.weekly_link.get(&saturday).copied());

    let primary = match linked {
        Some(idx) => idx,
        None => {
            // sábado de l'année précédente : pas de lien entre années
            #[cfg(feature = "logging")]
            tracing::warn!(%date, "no linked saturday, falling back to rotation pick");
            generator
                .rotation
                .next_pick(&generator.roster, &mut generator.rng)?
        }
    };

    schedule.push(Assignment::new(
        generator.roster[primary].clone(),
        Role::Primary,
        day,
        Some(date),
    ));
    Ok(())
}

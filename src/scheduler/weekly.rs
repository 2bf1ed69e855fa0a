use super::{SchedError, ScheduleGenerator};
use crate::model::{Assignment, Role, Schedule, ServiceDay};
use rand::Rng;

pub(super) fn generate<R: Rng>(
    generator: &mut ScheduleGenerator<R>,
    avoid_repeat: bool,
) -> Result<Schedule, SchedError> {
    generator.rotation.reset();
    let mut pool = generator.roster.clone();
    let mut schedule = Schedule::new();

    // domingo et quarta : 1 chave + 1 oferta
    for day in [ServiceDay::Sunday, ServiceDay::Wednesday] {
        let primary = draw_from(&mut generator.rng, &mut pool, avoid_repeat)?;
        schedule.push(Assignment::new(primary, Role::Primary, day, None));
        let secondary = draw_from(&mut generator.rng, &mut pool, avoid_repeat)?;
        schedule.push(Assignment::new(secondary, Role::Secondary, day, None));
    }

    // sábado : 1 chave + 2 ofertas
    let primary = draw_from(&mut generator.rng, &mut pool, avoid_repeat)?;
    schedule.push(Assignment::new(primary, Role::Primary, ServiceDay::Saturday, None));
    for _ in 0..2 {
        let secondary = draw_from(&mut generator.rng, &mut pool, avoid_repeat)?;
        schedule.push(Assignment::new(secondary, Role::Secondary, ServiceDay::Saturday, None));
    }

    Ok(schedule)
}

/// Tire un nom du pool ; avec `remove`, toutes ses occurrences en sortent.
fn draw_from<R: Rng>(rng: &mut R, pool: &mut Vec<String>, remove: bool) -> Result<String, SchedError> {
    if pool.is_empty() {
        return Err(SchedError::EmptyPool);
    }
    let chosen = pool[rng.gen_range(0..pool.len())].clone();
    if remove {
        pool.retain(|name| name != &chosen);
    }
    Ok(chosen)
}

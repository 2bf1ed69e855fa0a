use super::SchedError;
use crate::model::ServiceDay;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Toutes les dates de domingo, quarta et sábado de `year`, par jour,
/// en ordre croissant. Les trois clés sont toujours présentes.
pub fn compute_year_dates(year: i32) -> Result<BTreeMap<ServiceDay, Vec<NaiveDate>>, SchedError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(SchedError::InvalidYear(year))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(SchedError::InvalidYear(year))?;

    let mut out: BTreeMap<ServiceDay, Vec<NaiveDate>> =
        ServiceDay::ALL.iter().map(|d| (*d, Vec::new())).collect();

    let mut current = first;
    while current <= last {
        if let Some(day) = ServiceDay::from_weekday(current.weekday()) {
            out.entry(day).or_default().push(current);
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(out)
}

/// Sábado qui ouvre la semaine de service d'un domingo (J-1) ou d'une
/// quarta (J-4). `None` pour tout autre jour.
pub fn find_preceding_saturday(date: NaiveDate) -> Option<NaiveDate> {
    match ServiceDay::from_weekday(date.weekday())? {
        ServiceDay::Saturday => None,
        day => date.checked_sub_signed(Duration::days(day.days_after_saturday())),
    }
}

/// Fusionne les dates par jour en une seule séquence chronologique.
pub(super) fn chronological(dates: &BTreeMap<ServiceDay, Vec<NaiveDate>>) -> Vec<(NaiveDate, ServiceDay)> {
    let mut all: Vec<(NaiveDate, ServiceDay)> = dates
        .iter()
        .flat_map(|(day, list)| list.iter().map(move |date| (*date, *day)))
        .collect();
    all.sort_by_key(|(date, _)| *date);
    all
}

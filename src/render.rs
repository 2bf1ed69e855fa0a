use crate::model::{Assignment, Role, Schedule, ServiceDay};
use chrono::{Datelike, NaiveDate};

pub const EMPTY_SCHEDULE: &str = "Nenhuma escala gerada ainda.";

/// Permet de customiser le rendu d'une escala (texte, message, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule) -> String;
}

/// Rendu texte groupé par date (mode annuel) ou par jour (mode hebdo).
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ScheduleRenderer for TextRenderer {
    fn render(&self, schedule: &Schedule) -> String {
        if schedule.is_empty() {
            return EMPTY_SCHEDULE.to_string();
        }

        let blocks: Vec<String> = if schedule.has_dates() {
            schedule
                .by_date()
                .into_iter()
                .map(|(date, entries)| {
                    let header = match ServiceDay::from_weekday(date.weekday()) {
                        Some(day) => format!("{} ({}):", format_date(date), day.label()),
                        None => format!("{}:", format_date(date)),
                    };
                    block(&header, &entries, |a| a.role.label().to_string())
                })
                .collect()
        } else {
            schedule
                .by_day()
                .into_iter()
                .filter(|(_, entries)| !entries.is_empty())
                .map(|(day, entries)| {
                    block(&format!("{}:", day.label()), &entries, |a| {
                        a.role.label().to_string()
                    })
                })
                .collect()
        };

        blocks.join("\n\n")
    }
}

/// Rendu groupé par fonction (CHAVE puis OFERTA).
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleRenderer;

impl ScheduleRenderer for RoleRenderer {
    fn render(&self, schedule: &Schedule) -> String {
        if schedule.is_empty() {
            return EMPTY_SCHEDULE.to_string();
        }

        schedule
            .by_role()
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(role, entries)| {
                let header = format!("{}:", role_header(role));
                block(&header, &entries, |a| match a.date {
                    Some(date) => format!("{}, {}", a.day.label(), format_date(date)),
                    None => a.day.label().to_string(),
                })
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Date au format jj/mm/aaaa.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn role_header(role: Role) -> String {
    role.label().to_uppercase()
}

fn block<F>(header: &str, entries: &[&Assignment], detail: F) -> String
where
    F: Fn(&Assignment) -> String,
{
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(header.to_string());
    for a in entries {
        lines.push(format!("  - {} ({})", a.volunteer, detail(a)));
    }
    lines.join("\n")
}

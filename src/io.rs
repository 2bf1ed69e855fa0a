use crate::model::Schedule;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import du rôle depuis un fichier : CSV avec header `name`, ou un nom par
/// ligne pour une extension `.txt`. Les lignes vides sont ignorées.
pub fn import_roster<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let is_txt = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("txt"));
    let names = if is_txt {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        raw.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        import_roster_csv(path)?
    };
    if names.is_empty() {
        bail!("roster file {} contains no volunteer", path.display());
    }
    Ok(names)
}

/// Import CSV: colonne `name` (les autres colonnes sont ignorées)
pub fn import_roster_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("name"))
        .context("missing `name` column in roster header")?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(column).context("missing name")?.trim();
        if name.is_empty() {
            continue;
        }
        out.push(name.to_string());
    }
    Ok(out)
}

/// Liste "A,B,C" passée en ligne de commande.
pub fn parse_roster_list(raw: &str) -> anyhow::Result<Vec<String>> {
    let names: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() {
        bail!("volunteer list is empty");
    }
    Ok(names)
}

/// Export JSON de l'escala (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV: header `date,day,role,volunteer` (date vide en mode hebdo)
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "day", "role", "volunteer"])?;
    for a in schedule {
        let date = a.date.map(|d| d.to_string()).unwrap_or_default();
        w.write_record([
            date.as_str(),
            a.day.label(),
            a.role.label(),
            a.volunteer.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

use crate::model::ScheduleRecord;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Persistance d'un tirage (`ScheduleRecord`) : rôle utilisé, année et
/// graine éventuelles, date de génération et escala complète. Relire un
/// tirage permet de le réafficher sans refaire le sort.
pub trait Storage {
    fn load(&self) -> anyhow::Result<ScheduleRecord>;
    /// Remplace le tirage précédent ; jamais de fichier à moitié écrit.
    fn save(&self, record: &ScheduleRecord) -> anyhow::Result<()>;
}

/// Un tirage par fichier JSON, l'escala sous la clé `schedule` comme une
/// liste d'objets `{volunteer, role, day, date?}`.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<ScheduleRecord> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let record: ScheduleRecord =
            serde_json::from_slice(&data).with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(record)
    }

    fn save(&self, record: &ScheduleRecord) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(record)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}

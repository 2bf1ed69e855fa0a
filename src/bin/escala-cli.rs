#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use escala::{
    io,
    model::ScheduleRecord,
    render::{RoleRenderer, ScheduleRenderer, TextRenderer},
    scheduler::{GeneratorOptions, ScheduleGenerator},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Tirage au sort de l'escala des diacres
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct RosterArgs {
    /// liste "Nom1,Nom2,..."
    #[arg(long, conflicts_with = "people_file")]
    people: Option<String>,
    /// Fichier CSV (header `name`) ou .txt (un nom par ligne)
    #[arg(long)]
    people_file: Option<String>,
}

impl RosterArgs {
    fn load(&self) -> Result<Vec<String>> {
        match (&self.people, &self.people_file) {
            (Some(list), _) => io::parse_roster_list(list),
            (None, Some(path)) => io::import_roster(path),
            (None, None) => bail!("missing roster: use --people or --people-file"),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer l'escala d'une année complète
    Annual {
        #[arg(long)]
        year: i32,
        /// Graine pour un tirage reproductible
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        roster: RosterArgs,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Sauvegarde du tirage (JSON) pour `show`
        #[arg(long)]
        save: Option<String>,
    },

    /// Générer une seule semaine sans dates (mode historique)
    Weekly {
        #[arg(long)]
        seed: Option<u64>,
        /// Autorise un même diacre plusieurs fois dans la semaine
        #[arg(long)]
        allow_repeat: bool,
        #[command(flatten)]
        roster: RosterArgs,
        #[arg(long)]
        save: Option<String>,
    },

    /// Afficher un tirage sauvegardé
    Show {
        #[arg(long)]
        from: String,
        /// Grouper par fonction (chave/oferta)
        #[arg(long)]
        by_role: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = cli.log;

    match cli.cmd {
        Commands::Annual {
            year,
            seed,
            roster,
            out_json,
            out_csv,
            save,
        } => {
            let names = roster.load()?;
            let mut generator = ScheduleGenerator::with_options(&names, GeneratorOptions { seed })?;
            let schedule = generator
                .generate_annual_schedule(year)
                .with_context(|| format!("generating schedule for {year}"))?
                .clone();

            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            if let Some(path) = save {
                let record = ScheduleRecord::new(&names, Some(year), seed, schedule.clone());
                JsonStorage::open(path)?.save(&record)?;
            }

            println!("Escala {year}: {} assignments", schedule.len());
            println!("{}", TextRenderer.render(&schedule));
        }
        Commands::Weekly {
            seed,
            allow_repeat,
            roster,
            save,
        } => {
            let names = roster.load()?;
            let mut generator = ScheduleGenerator::with_options(&names, GeneratorOptions { seed })?;
            let schedule = generator.generate_weekly_schedule(!allow_repeat)?.clone();

            if let Some(path) = save {
                let record = ScheduleRecord::new(&names, None, seed, schedule.clone());
                JsonStorage::open(path)?.save(&record)?;
            }

            println!("{}", TextRenderer.render(&schedule));
        }
        Commands::Show { from, by_role } => {
            let record = JsonStorage::open(&from)?.load()?;
            let rendered = if by_role {
                RoleRenderer.render(&record.schedule)
            } else {
                TextRenderer.render(&record.schedule)
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

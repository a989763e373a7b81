//! Rainfall CLI commands
//!
//! Logging a measurement and the read-only views over what is stored.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_entry_details, format_entry_table, format_rainfall_chart};
use crate::error::PluvioResult;
use crate::models::{parse_amount, parse_iso_date};
use crate::services::{ListRainfall, LogRainfall};
use crate::storage::RainfallRepository;

/// Rainfall subcommands
#[derive(Subcommand, Debug)]
pub enum RainfallCommands {
    /// Enregistrer la pluie d'une journée (remplace la valeur existante)
    Log {
        /// Quantité en millimètres (la virgule décimale est acceptée)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date de la mesure (YYYY-MM-DD), aujourd'hui par défaut
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Lister toutes les mesures, de la plus récente à la plus ancienne
    #[command(alias = "ls")]
    List,
    /// Afficher la mesure d'une date
    Show {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Lister les mesures entre deux dates incluses
    Range {
        /// Première date (YYYY-MM-DD)
        start: String,
        /// Dernière date (YYYY-MM-DD)
        end: String,
    },
    /// Tracer l'évolution de la pluviométrie en barres
    Chart,
}

/// Handle a rainfall command
pub async fn handle_rainfall_command(
    repository: &dyn RainfallRepository,
    settings: &Settings,
    cmd: RainfallCommands,
) -> PluvioResult<()> {
    match cmd {
        RainfallCommands::Log { amount, date } => {
            let date = date
                .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
            let amount = parse_amount(&amount)?;

            let saved = LogRainfall::new(repository).execute(&date, amount).await?;
            println!("Pluviométrie enregistrée avec succès");
            print!("{}", format_entry_details(&saved, &settings.display_date_format));
        }
        RainfallCommands::List => {
            let entries = ListRainfall::new(repository).execute().await?;
            println!(
                "{}",
                format_entry_table(&entries, &settings.display_date_format)
            );
        }
        RainfallCommands::Show { date } => {
            parse_iso_date(&date)?;
            match repository.find_by_date(&date).await? {
                Some(entry) => {
                    print!("{}", format_entry_details(&entry, &settings.display_date_format))
                }
                None => println!("Aucune donnée enregistrée pour le {}", date),
            }
        }
        RainfallCommands::Range { start, end } => {
            parse_iso_date(&start)?;
            parse_iso_date(&end)?;
            let entries = repository.find_by_date_range(&start, &end).await?;
            println!(
                "{}",
                format_entry_table(&entries, &settings.display_date_format)
            );
        }
        RainfallCommands::Chart => {
            let entries = ListRainfall::new(repository).execute().await?;
            println!("{}", format_rainfall_chart(&entries, settings.chart_width));
        }
    }

    Ok(())
}

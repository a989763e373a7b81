use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pluvio::cli::{handle_export_command, handle_rainfall_command, ExportArgs, RainfallCommands};
use pluvio::config::{paths::PluvioPaths, settings::Settings};
use pluvio::storage::open_repository;
use pluvio::{PluvioError, PluvioResult};

/// Environment variable holding the log filter
const LOG_ENV: &str = "PLUVIO_LOG";

#[derive(Parser)]
#[command(
    name = "pluvio",
    version,
    about = "Relevé pluviométrique personnel",
    long_about = "Pluvio enregistre une mesure de pluie par jour, l'affiche en \
                  tableau ou en graphique, et l'exporte en CSV pour les \
                  tableurs."
)]
struct Cli {
    /// Répertoire de la base, des réglages et des exports
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Journal de débogage sur la sortie d'erreur
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Rainfall(RainfallCommands),

    /// Exporter toutes les mesures en CSV
    Export(ExportArgs),

    /// Afficher la configuration et les chemins
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let paths = match cli.data_dir {
        Some(dir) => PluvioPaths::with_base_dir(dir),
        None => PluvioPaths::new()
            .context("Impossible de déterminer le répertoire des données")?,
    };
    let settings =
        Settings::load_or_create(&paths).context("Impossible de charger les réglages")?;

    let Some(command) = cli.command else {
        println!("Pluvio - relevé pluviométrique personnel");
        println!();
        println!("Lancez 'pluvio --help' pour l'aide.");
        return Ok(ExitCode::SUCCESS);
    };

    if let Commands::Config = command {
        if !paths.settings_file().exists() {
            settings
                .save(&paths)
                .context("Impossible d'enregistrer les réglages")?;
        }
        print_config(&paths, &settings);
        return Ok(ExitCode::SUCCESS);
    }

    let failure = failure_message(&command);
    let repository = open_repository(&paths)
        .await
        .context("Impossible d'ouvrir la base de données")?;

    let outcome = match command {
        Commands::Rainfall(cmd) => handle_rainfall_command(&repository, &settings, cmd).await,
        Commands::Export(args) => {
            handle_export_command(&repository, &paths, &settings, args).await
        }
        Commands::Config => Ok(()),
    };
    repository.close().await;

    Ok(report(outcome, failure))
}

/// Headline printed when a command fails for a non-validation reason
fn failure_message(command: &Commands) -> &'static str {
    match command {
        Commands::Rainfall(RainfallCommands::Log { .. }) => {
            "Une erreur est survenue lors de l'enregistrement"
        }
        Commands::Export(_) => "Une erreur est survenue lors de l'export",
        _ => "Erreur lors du chargement des données",
    }
}

/// Map a command outcome to the process exit code, printing any failure
fn report(outcome: PluvioResult<()>, failure: &str) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(PluvioError::Validation(e)) => {
            eprintln!("Saisie invalide : {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{}", failure);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pluvio=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config(paths: &PluvioPaths, settings: &Settings) {
    println!("Configuration de Pluvio");
    println!("=======================");
    println!("Répertoire des données : {}", paths.base_dir().display());
    println!("Fichier de réglages :    {}", paths.settings_file().display());
    println!("Base de données :        {}", paths.database_file().display());
    println!(
        "Répertoire d'export :    {}",
        settings.resolve_export_dir(paths).display()
    );
    println!();
    println!("Réglages :");
    println!("  Format de date :       {}", settings.display_date_format);
    println!("  Largeur du graphique : {}", settings.chart_width);
}

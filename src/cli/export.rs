//! CLI command for CSV export
//!
//! Writes the export next to the data by default, or to a chosen path, or to
//! stdout. The text is written byte for byte, BOM included.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::config::{paths::PluvioPaths, settings::Settings};
use crate::error::{PluvioError, PluvioResult};
use crate::export::csv;
use crate::services::ExportRainfall;
use crate::storage::RainfallRepository;

/// Export arguments
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Fichier de sortie (répertoire d'export par défaut)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Écrire le CSV sur la sortie standard
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Handle the export command
pub async fn handle_export_command(
    repository: &dyn RainfallRepository,
    paths: &PluvioPaths,
    settings: &Settings,
    args: ExportArgs,
) -> PluvioResult<()> {
    let content = ExportRainfall::new(repository).execute().await?;

    if args.stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(content.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| PluvioError::Export(format!("Impossible d'écrire sur la sortie standard : {}", e)))?;
        return Ok(());
    }

    let output = resolve_output(args.output, paths, settings)?;
    std::fs::write(&output, content.as_bytes()).map_err(|e| {
        PluvioError::Export(format!(
            "Impossible d'écrire le fichier {} : {}",
            output.display(),
            e
        ))
    })?;

    debug!(path = %output.display(), "wrote export");
    println!("Données exportées vers {}", output.display());
    Ok(())
}

/// Where a file export goes
///
/// Without an explicit path, the export directory is created if needed and
/// today's file name is used inside it.
fn resolve_output(
    output: Option<PathBuf>,
    paths: &PluvioPaths,
    settings: &Settings,
) -> PluvioResult<PathBuf> {
    if let Some(path) = output {
        return Ok(path);
    }

    let dir = settings.resolve_export_dir(paths);
    std::fs::create_dir_all(&dir).map_err(|e| {
        PluvioError::Export(format!(
            "Impossible de créer le répertoire d'export {} : {}",
            dir.display(),
            e
        ))
    })?;

    Ok(dir.join(csv::filename()))
}

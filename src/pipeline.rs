// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch generation of pseudo-localized resource files.
//!
//! Expands the inputs into `.resx` files, skips files whose name already
//! carries a culture (`Strings.fr-FR.resx`), and writes
//! `<stem>.<pseudo-locale>.resx` for the rest. Files are processed in
//! parallel; a failure is recorded against its file and the batch carries on.

use crate::config::Settings;
use crate::i18n;
use crate::pseudo::Pseudofier;
use crate::resx::{self, ResxDocument, RESX_EXTENSION};
use crate::types::{
    BatchReport, EntryAction, EntryStatistics, FileOutcome, FileStatus, ResourceEntry,
    ResourceValue,
};
use anyhow::{bail, Context, Result};
use colored::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories never searched for resource files.
const SKIPPED_DIRS: [&str; 5] = ["bin", "obj", ".git", "node_modules", "target"];

/// Expand files and directories into the sorted, de-duplicated list of
/// `.resx` files they name.
pub fn discover_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let walker = WalkDir::new(input).into_iter().filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !SKIPPED_DIRS.contains(&entry.file_name().to_string_lossy().as_ref())
            });
            for entry in walker {
                let entry = entry.with_context(|| format!("walking {}", input.display()))?;
                if entry.file_type().is_file() && is_resx(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            bail!("input not found: {}", input.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_resx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(RESX_EXTENSION))
        .unwrap_or(false)
}

/// Culture encoded in a file name as its second-to-last dot segment.
///
/// `Strings.en-us.resx` yields `en-US`; `Strings.resx` and
/// `My.Strings.resx` yield `None`.
pub fn culture_from_file_name(path: &Path) -> Option<String> {
    let stem = Path::new(path.file_stem()?);
    let segment = stem.extension()?.to_str()?;
    i18n::parse_locale(segment.trim_matches('.')).map(|langid| langid.to_string())
}

/// `<dir>/<stem>.<locale>.resx`, with `<dir>` replaced by `output_dir` when
/// one is given.
pub fn output_path_for(input: &Path, locale: &str, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}.{}.{}", stem, locale, RESX_EXTENSION);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .map(|parent| parent.join(&file_name))
            .unwrap_or_else(|| PathBuf::from(&file_name)),
    }
}

/// Apply the classify-then-translate rule to one entry.
pub fn transform_entry(
    entry: &ResourceEntry,
    locale: &str,
    pseudofier: &Pseudofier,
) -> (ResourceEntry, EntryAction) {
    let (value, action) = match &entry.value {
        ResourceValue::Text(text) if i18n::is_locale_identifier(text) => (
            ResourceValue::Text(locale.to_string()),
            EntryAction::LocaleReplaced,
        ),
        ResourceValue::Text(text) => (
            ResourceValue::Text(pseudofier.pseudofy(text)),
            EntryAction::Translated,
        ),
        ResourceValue::Opaque(_) => (entry.value.clone(), EntryAction::PassedThrough),
    };
    log::debug!("{}: {:?}", entry.name, action);

    let transformed = ResourceEntry {
        name: entry.name.clone(),
        value,
        comment: entry.comment.clone(),
    };
    (transformed, action)
}

pub fn transform_entries(
    entries: &[ResourceEntry],
    locale: &str,
    pseudofier: &Pseudofier,
) -> (Vec<ResourceEntry>, EntryStatistics) {
    let mut statistics = EntryStatistics::default();
    let transformed = entries
        .iter()
        .map(|entry| {
            let (entry, action) = transform_entry(entry, locale, pseudofier);
            statistics.record(action);
            entry
        })
        .collect();
    (transformed, statistics)
}

/// Transform a whole document, keeping its headers, assemblies and schema.
pub fn transform_document(
    document: &ResxDocument,
    locale: &str,
    pseudofier: &Pseudofier,
) -> (ResxDocument, EntryStatistics) {
    let (entries, statistics) = transform_entries(&document.entries, locale, pseudofier);
    let transformed = ResxDocument {
        schema: document.schema.clone(),
        headers: document.headers.clone(),
        assemblies: document.assemblies.clone(),
        entries,
    };
    (transformed, statistics)
}

/// Generate the pseudo-localized counterpart of one resource file.
pub fn process_file(input: &Path, settings: &Settings) -> Result<FileOutcome> {
    if let Some(culture) = culture_from_file_name(input) {
        log::info!(
            "Skipping {}: already specific to culture {}",
            input.display(),
            culture
        );
        return Ok(FileOutcome::skipped(input.to_path_buf(), culture));
    }

    log::info!("Started converting {} to pseudo-loc", input.display());
    let locale = settings.locale_tag();
    let document = resx::read_file(input)?;
    let (pseudo, statistics) = transform_document(&document, locale, &settings.pseudofier());

    let output = output_path_for(input, locale, settings.output_dir.as_deref());
    resx::write_file(&pseudo, &output)?;
    log::info!("Generated pseudo-loc file {}", output.display());

    Ok(FileOutcome::generated(input.to_path_buf(), output, statistics))
}

/// Run generation over every resource file named by `inputs`.
///
/// Only input discovery and invalid settings fail the call; per-file errors
/// are reported in the returned [`BatchReport`].
pub fn run(inputs: &[PathBuf], settings: &Settings) -> Result<BatchReport> {
    settings.validate()?;
    let files = discover_inputs(inputs)?;

    if files.is_empty() {
        log::warn!(
            "Skipping conversion of resource files to pseudo-loc, as no .resx files were found"
        );
    } else {
        log::info!("Started converting {} resx file(s) to pseudo-loc", files.len());
    }

    let conflicts = output_conflicts(&files, settings);
    let results: Vec<FileOutcome> = files
        .par_iter()
        .zip(conflicts.par_iter())
        .map(|(file, conflict)| {
            if let Some(message) = conflict {
                log::warn!("Failed to convert {}: {}", file.display(), message);
                return FileOutcome::failed(file.clone(), message.clone());
            }
            process_file(file, settings).unwrap_or_else(|err| {
                log::warn!("Failed to convert {}: {:#}", file.display(), err);
                FileOutcome::failed(file.clone(), format!("{:#}", err))
            })
        })
        .collect();

    let count = |status: FileStatus| results.iter().filter(|r| r.status == status).count();

    Ok(BatchReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        pseudo_locale: settings.locale_tag().to_string(),
        files_seen: files.len(),
        files_generated: count(FileStatus::Generated),
        files_skipped: count(FileStatus::Skipped),
        files_failed: count(FileStatus::Failed),
        results,
    })
}

/// For each file, an error message if its output path is already claimed by
/// an earlier file in `files`.
fn output_conflicts(files: &[PathBuf], settings: &Settings) -> Vec<Option<String>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    files
        .iter()
        .map(|file| {
            if culture_from_file_name(file).is_some() {
                return None;
            }
            let output =
                output_path_for(file, settings.locale_tag(), settings.output_dir.as_deref());
            match claimed.get(&output).copied() {
                Some(first) => Some(format!(
                    "output {} is already generated from {}",
                    output.display(),
                    first.display()
                )),
                None => {
                    claimed.insert(output, file.as_path());
                    None
                }
            }
        })
        .collect()
}

/// Print a summary table to the terminal
pub fn print_summary(report: &BatchReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n{}", "=== PSEUDO-LOC SUMMARY ===".bold().cyan());
    println!(
        "Locale: {}  |  Files: {}  |  Generated: {}  |  Skipped: {}  |  Failed: {}",
        report.pseudo_locale,
        report.files_seen,
        report.files_generated.to_string().green(),
        report.files_skipped,
        report.files_failed.to_string().red()
    );
    println!();

    if report.results.is_empty() {
        println!("  No resource files found.");
        return;
    }

    println!(
        "  {:<48} {:>8} {:>8} {:>8} {:>8}",
        "Resource file", "Status", "Strings", "Locales", "Other"
    );
    println!("  {}", "-".repeat(84));

    for result in &report.results {
        let name = result.input.display().to_string();
        match result.status {
            FileStatus::Generated => println!(
                "  {:<48} {:>8} {:>8} {:>8} {:>8}",
                name,
                "ok".green(),
                result.statistics.strings_translated,
                result.statistics.locales_replaced,
                result.statistics.passthrough,
            ),
            FileStatus::Skipped => println!(
                "  {:<48} {:>8} ({})",
                name,
                "skipped".yellow(),
                result.culture.as_deref().unwrap_or("localized")
            ),
            FileStatus::Failed => println!(
                "  {:<48} {} {}",
                name,
                "ERROR:".red().bold(),
                result.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
    println!();
}

/// Write the batch report as JSON, or YAML for `.yaml`/`.yml` paths
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::to_string(report)?,
        _ => serde_json::to_string_pretty(report)?,
    };
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

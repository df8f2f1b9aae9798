//! Subcommand implementations.

use crate::cli::{Command, GenerateArgs, ListArgs, WatchArgs};
use crate::output::write_if_changed;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use themegen_common::{Result, ThemeError, ThemegenError};
use themegen_config::{ThemeEntry, ThemeWatcher, ThemegenConfig};
use themegen_generator::{
    plan_theme_module, scan_theme_folder, GlobalCssFile, IdentifierDiagnostic, ThemeModule,
};
use tracing::{error, info, warn};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate(args),
        Command::List(args) => list(args),
        Command::Watch(args) => watch(args),
        Command::Init { path } => {
            themegen_config::create_default_config(&path)?;
            Ok(())
        }
    }
}

// =============================================================================
// GENERATE
// =============================================================================

fn generate(args: GenerateArgs) -> Result<()> {
    let (Some(folder), Some(name)) = (args.folder, args.name) else {
        let config = themegen_config::load_config(args.config.as_deref())?;
        let strict = args.strict || config.generator.strict;
        return generate_all(&config, strict);
    };

    let module = plan_checked(&folder, &name, args.strict)?;
    let text = module.render();

    if args.stdout {
        print!("{text}");
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| folder.join(format!("{name}.js")));
    write_if_changed(&path, &text)?;
    Ok(())
}

/// Plan a module, failing on identifier diagnostics when `strict`.
fn plan_checked(folder: &Path, name: &str, strict: bool) -> Result<ThemeModule> {
    let module = plan_theme_module(folder, name)?;

    if strict {
        let diagnostics = module.diagnostics();
        if !diagnostics.is_empty() {
            let joined = diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ThemeError::Diagnostics(joined).into());
        }
    }

    Ok(module)
}

/// Generate and write the module for one configured theme.
pub fn generate_entry(entry: &ThemeEntry, root: &Path, strict: bool) -> Result<bool> {
    let module = plan_checked(&entry.folder_in(root), &entry.name, strict)?;
    let written = write_if_changed(&entry.output_in(root), &module.render())?;
    Ok(written)
}

/// Generate every configured theme, reporting each failure.
fn generate_all(config: &ThemegenConfig, strict: bool) -> Result<()> {
    if config.themes.is_empty() {
        warn!("no themes configured, nothing to generate");
        return Ok(());
    }

    let mut failed = 0;
    for entry in &config.themes {
        if let Err(e) = generate_entry(entry, &config.root, strict) {
            error!(theme = entry.name.as_str(), "generation failed: {e}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(ThemegenError::Other(format!(
            "{failed} of {} theme(s) failed to generate",
            config.themes.len()
        )));
    }
    Ok(())
}

// =============================================================================
// LIST
// =============================================================================

#[derive(Debug, Serialize)]
struct ThemeListing<'a> {
    theme: &'a str,
    flag: &'a str,
    files: &'a [GlobalCssFile],
    diagnostics: Vec<IdentifierDiagnostic>,
}

fn default_theme_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "theme".to_string())
}

fn list(args: ListArgs) -> Result<()> {
    let name = args
        .name
        .unwrap_or_else(|| default_theme_name(&args.folder));
    print!("{}", listing_for(&args.folder, &name, args.json)?);
    Ok(())
}

/// Render the listing of `folder`. Diagnostics appear in the listing only,
/// not in the log as well.
fn listing_for(folder: &Path, name: &str, json: bool) -> Result<String> {
    let module = ThemeModule::from_files(name, scan_theme_folder(folder)?);
    render_listing(&module, json)
}

fn render_listing(module: &ThemeModule, json: bool) -> Result<String> {
    let listing = ThemeListing {
        theme: module.theme_name(),
        flag: module.flag(),
        files: module.files(),
        diagnostics: module.diagnostics(),
    };

    if json {
        let mut text = serde_json::to_string_pretty(&listing)
            .map_err(|e| ThemegenError::Other(format!("failed to serialize listing: {e}")))?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = format!("theme {} (flag {})\n", listing.theme, listing.flag);
    for file in listing.files {
        let marker = if file.is_document_css() { "  [document]" } else { "" };
        text.push_str(&format!("  {} -> {}{marker}\n", file.file_name, file.identifier));
    }
    if listing.files.is_empty() {
        text.push_str("  (no global stylesheets)\n");
    }
    for diagnostic in &listing.diagnostics {
        text.push_str(&format!("  warning: {diagnostic}\n"));
    }
    Ok(text)
}

// =============================================================================
// WATCH
// =============================================================================

fn watch(args: WatchArgs) -> Result<()> {
    let config = themegen_config::load_config(args.config.as_deref())?;
    let strict = args.strict || config.generator.strict;

    if let Err(e) = generate_all(&config, strict) {
        warn!("initial generation incomplete: {e}");
    }

    let folders: Vec<PathBuf> = config
        .themes
        .iter()
        .map(|t| t.folder_in(&config.root))
        .collect();
    let watcher = ThemeWatcher::new(folders, Duration::from_millis(config.watch.debounce_ms))?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let (tx, mut rx) = tokio::sync::broadcast::channel::<usize>(16);
        let watch_task = watcher.watch(tx);
        tokio::pin!(watch_task);

        loop {
            tokio::select! {
                result = &mut watch_task => return result.map_err(ThemegenError::from),
                changed = rx.recv() => match changed {
                    Ok(index) => {
                        let entry = &config.themes[index];
                        match generate_entry(entry, &config.root, strict) {
                            Ok(true) => info!(theme = entry.name.as_str(), "regenerated"),
                            Ok(false) => {}
                            Err(e) => error!(theme = entry.name.as_str(), "regeneration failed: {e}"),
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("missed {skipped} change signal(s), regenerating all themes");
                        if let Err(e) = generate_all(&config, strict) {
                            error!("{e}");
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => return Ok(()),
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted, stopping watch");
                    return Ok(());
                }
            }
        }
    })
}

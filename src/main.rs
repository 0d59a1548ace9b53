//! propdoc: generate component reference pages from annotated TypeScript sources.
//!
//! - **default**: `propdoc` scans `src/` and writes `docs/api/<Component>.mdx`
//! - **selected components**: `propdoc Entity Billboard`
//! - **preview**: `propdoc --preview Entity` prints the extracted record as JSON

use anyhow::{Context, Result};
use clap::Parser;
use propdoc::parser::{self, Dialect};
use propdoc::render::{self, RenderOptions, Renderer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "propdoc",
    about = "Generate component documentation from annotated TypeScript prop interfaces"
)]
struct Cli {
    /// Component names to process (file base names). If omitted, all are processed.
    names: Vec<String>,

    /// Source files, directories or glob patterns to scan
    #[arg(short = 's', long = "src", default_value = "src")]
    sources: Vec<String>,

    /// Output directory
    #[arg(short = 'o', long, default_value = "docs/api")]
    output: PathBuf,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Print extracted records as JSON instead of writing files
    #[arg(long)]
    preview: bool,

    /// Base URL of the Cesium API reference
    #[arg(long, default_value = propdoc::DEFAULT_DOCS_URL)]
    docs_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.names.is_empty() {
        info!("Generating documents...");
    } else {
        info!("Generating documents...: {}", cli.names.join(", "));
    }

    let options = RenderOptions {
        docs_url: cli.docs_url.clone(),
    };
    let renderer = render::create_renderer(&cli.format, &options)?;

    let files: Vec<PathBuf> = expand_sources(&cli.sources)?
        .into_iter()
        .filter(|p| cli.names.is_empty() || cli.names.iter().any(|n| *n == component_name(p)))
        .collect();

    if !cli.preview && !files.is_empty() {
        fs::create_dir_all(&cli.output).with_context(|| {
            format!("failed to create output directory: {}", cli.output.display())
        })?;
    }

    let preview = render::json::JsonRenderer;
    for path in &files {
        let name = component_name(path);
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let record = parser::parse_component(&name, &source, Dialect::from_path(path), &cli.docs_url)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if cli.preview {
            print!("{}", preview.render(&record));
            continue;
        }

        let out_path = cli
            .output
            .join(format!("{}.{}", name, renderer.file_extension()));
        fs::write(&out_path, renderer.render(&record))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    if !cli.preview {
        info!("{} documents have been generated!", files.len());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// File extensions recognized as component sources.
const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Expand files, directories and glob patterns into component source paths.
/// Directories are scanned non-recursively.
fn expand_sources(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_component_source(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file() && is_component_source(p))
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// `.ts`/`.tsx` files other than `index.*` and `.d.ts` declarations.
fn is_component_source(path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
        return false;
    };
    let supported = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
    supported && !file_name.ends_with(".d.ts") && component_name(path) != "index"
}

/// Component name from a source path.
/// "src/Entity.tsx" → "Entity", "src/Camera.ts" → "Camera"
fn component_name(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();
    filename
        .strip_suffix(".tsx")
        .or_else(|| filename.strip_suffix(".ts"))
        .unwrap_or(&filename)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_tsx() {
        assert_eq!(component_name(Path::new("src/Entity.tsx")), "Entity");
        assert_eq!(component_name(Path::new("Entity.tsx")), "Entity");
    }

    #[test]
    fn name_from_ts() {
        assert_eq!(component_name(Path::new("src/Camera.ts")), "Camera");
    }

    #[test]
    fn name_no_extension() {
        assert_eq!(component_name(Path::new("Makefile")), "Makefile");
    }

    #[test]
    fn component_sources() {
        assert!(is_component_source(Path::new("src/Entity.tsx")));
        assert!(is_component_source(Path::new("src/Camera.ts")));
        assert!(!is_component_source(Path::new("src/index.ts")));
        assert!(!is_component_source(Path::new("src/index.tsx")));
        assert!(!is_component_source(Path::new("src/types.d.ts")));
        assert!(!is_component_source(Path::new("src/style.css")));
    }
}

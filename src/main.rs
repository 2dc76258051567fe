mod document;
mod engine;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::document::{Category, SpecDocument};

#[derive(Parser)]
#[command(name = "phonespecs", about = "Phone spec-page extraction and normalization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one saved spec page and print it as JSON
    Extract {
        /// Path to a saved HTML spec page
        file: PathBuf,
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Extract every .html page in a directory
    Batch {
        /// Directory of saved spec pages
        dir: PathBuf,
        /// Max pages to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Write one <page>.json per input into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `extract` leaves clean JSON on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { file, pretty } => {
            let markup = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let doc = engine::extract(&markup)?;
            let json = if pretty {
                serde_json::to_string_pretty(&doc)?
            } else {
                serde_json::to_string(&doc)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Batch { dir, limit, out } => {
            let files = collect_pages(&dir, limit)?;
            if files.is_empty() {
                println!("No .html pages found in {}.", dir.display());
                return Ok(());
            }
            if let Some(out) = &out {
                std::fs::create_dir_all(out)
                    .with_context(|| format!("creating {}", out.display()))?;
            }
            println!("Extracting {} pages...", files.len());
            let counts = extract_pages(&files, out.as_deref())?;
            counts.print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn collect_pages(dir: &Path, limit: Option<usize>) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?
    {
        let path = entry?.path();
        let is_page = path.extension().is_some_and(|ext| {
            ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm")
        });
        if is_page {
            files.push(path);
        }
    }
    // Directory order is filesystem-dependent; sort so runs are repeatable.
    files.sort();
    if let Some(limit) = limit {
        files.truncate(limit);
    }
    Ok(files)
}

struct ExtractCounts {
    pages: usize,
    ok: usize,
    invalid: usize,
    no_data: usize,
    unreadable: usize,
    fields: usize,
    category_pages: [usize; Category::ALL.len()],
}

impl ExtractCounts {
    fn print(&self) {
        println!(
            "Done: {}/{} pages extracted, {} fields total.",
            self.ok, self.pages, self.fields
        );
        if self.ok < self.pages {
            println!(
                "Skipped: {} invalid input, {} no data, {} unreadable.",
                self.invalid, self.no_data, self.unreadable
            );
        }
        for (category, pages) in Category::ALL.iter().zip(self.category_pages) {
            println!("  {:<12} {:>6}", category.name(), pages);
        }
    }
}

fn extract_pages(files: &[PathBuf], out: Option<&Path>) -> anyhow::Result<ExtractCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut counts = ExtractCounts {
        pages: files.len(),
        ok: 0,
        invalid: 0,
        no_data: 0,
        unreadable: 0,
        fields: 0,
        category_pages: [0; Category::ALL.len()],
    };

    for chunk in files.chunks(500) {
        let results: Vec<(&Path, anyhow::Result<SpecDocument>)> = chunk
            .par_iter()
            .map(|path| (path.as_path(), extract_page(path)))
            .collect();

        for (path, result) in results {
            match result {
                Ok(doc) => {
                    counts.ok += 1;
                    counts.fields += doc.field_count();
                    for (i, category) in Category::ALL.into_iter().enumerate() {
                        if doc.category(category).is_some() {
                            counts.category_pages[i] += 1;
                        }
                    }
                    if let Some(out) = out {
                        write_document(out, path, &doc)?;
                    }
                }
                Err(err) => {
                    match err.downcast_ref::<engine::ExtractError>() {
                        Some(engine::ExtractError::InvalidInput { .. }) => counts.invalid += 1,
                        Some(engine::ExtractError::NoDataRecognized) => counts.no_data += 1,
                        None => counts.unreadable += 1,
                    }
                    warn!("{}: {err:#}", path.display());
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(counts)
}

fn extract_page(path: &Path) -> anyhow::Result<SpecDocument> {
    let markup = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(engine::extract(&markup)?)
}

fn write_document(out: &Path, page: &Path, doc: &SpecDocument) -> anyhow::Result<()> {
    let stem = page.file_stem().unwrap_or(page.as_os_str());
    let target = out.join(stem).with_extension("json");
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(&target, json).with_context(|| format!("writing {}", target.display()))?;
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use toclink::annotate::annotate_all;
use toclink::geometry::PageGeometry;
use toclink::host::{PdfHost, ScriptHost};
use toclink::types::Manifest;
use toclink::{config, extract, output};

/// Shared flags for commands that register links.
#[derive(clap::Args, Clone)]
struct AnnotateArgs {
    /// Songbook PDF to annotate; omit to emit an Acrobat console script
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Output path: the annotated PDF, or the script (stdout when omitted)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "toclink")]
#[command(about = "Add clickable table-of-contents links to songbook PDFs")]
#[command(long_about = "\
Add clickable table-of-contents links to songbook PDFs

The TOC sheet export is the data source: one tab-separated row per song.
Two export variants are accepted, detected from the header row:

  Title <TAB> Start <TAB> End
  TOC Page <TAB> Title <TAB> Start <TAB> End

Pipeline:

  extract    toc.tsv → formatted title;pages listing (stdout, pasteable
             back into the sheet) + manifest.json in the temp dir
  annotate   manifest.json → links, either as real /GoTo annotations in a
             PDF (--pdf) or as an Acrobat JavaScript console batch
  build      extract + annotate in one run, no manual hand-off

Link geometry (page size, margins, leading) defaults to the original
songbook layout. Run 'toclink gen-config' for a documented toclink.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Table-of-contents export (tab-separated, header row first)
    #[arg(long, default_value = "toc.tsv", global = true)]
    source: PathBuf,

    /// Layout config file (stock defaults when absent)
    #[arg(long, default_value = "toclink.toml", global = true)]
    config: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".toclink-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse the TSV, print the formatted listing, write the manifest
    Extract,
    /// Register links from the manifest against a PDF or as a script
    Annotate(AnnotateArgs),
    /// Run the full pipeline: extract → annotate
    Build(AnnotateArgs),
    /// Validate the TSV and report the link plan without writing anything
    Check,
    /// Print a stock toclink.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract => {
            let layout = config::load_optional(&cli.config)?;
            let manifest = extract::extract(&cli.source, &layout)?;
            write_manifest(&cli.temp_dir, &manifest)?;
            output::print_listing(&manifest.entries);
        }
        Command::Annotate(args) => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let content = std::fs::read_to_string(&manifest_path)?;
            let manifest: Manifest = serde_json::from_str(&content)?;
            run_annotate(&manifest, &args)?;
        }
        Command::Build(args) => {
            let layout = config::load_optional(&cli.config)?;

            println!("==> Stage 1: Extracting {}", cli.source.display());
            let manifest = extract::extract(&cli.source, &layout)?;
            write_manifest(&cli.temp_dir, &manifest)?;
            output::print_listing(&manifest.entries);

            println!("==> Stage 2: Registering links");
            run_annotate(&manifest, &args)?;
        }
        Command::Check => {
            let layout = config::load_optional(&cli.config)?;
            println!("==> Checking {}", cli.source.display());
            let manifest = extract::extract(&cli.source, &layout)?;
            let geometry = PageGeometry::from_config(&manifest.config);
            output::print_check_output(&manifest, &geometry);
            println!("==> TOC data is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Serialize the stage-1 manifest into the temp dir.
fn write_manifest(temp_dir: &Path, manifest: &Manifest) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)?;
    Ok(())
}

/// Run stage 2 against the backend the flags select.
fn run_annotate(manifest: &Manifest, args: &AnnotateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let geometry = PageGeometry::from_config(&manifest.config);

    match &args.pdf {
        Some(pdf_path) => {
            let mut host = PdfHost::open(pdf_path)?;
            let registered = annotate_all(&manifest.page_links, &geometry, &mut host)?;
            let out = args
                .out
                .clone()
                .unwrap_or_else(|| linked_pdf_path(pdf_path));
            host.save(&out)?;
            output::print_annotate_output(
                &manifest.page_links,
                &geometry,
                registered,
                &out.display().to_string(),
            );
        }
        None => {
            let mut host = ScriptHost::new();
            let registered = annotate_all(&manifest.page_links, &geometry, &mut host)?;
            let script = host.into_script();
            match &args.out {
                Some(path) => {
                    std::fs::write(path, script)?;
                    output::print_annotate_output(
                        &manifest.page_links,
                        &geometry,
                        registered,
                        &path.display().to_string(),
                    );
                }
                None => print!("{script}"),
            }
        }
    }
    Ok(())
}

/// Default output path for --pdf without --out: `songbook.pdf` → `songbook-linked.pdf`.
fn linked_pdf_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "songbook".to_string());
    input.with_file_name(format!("{stem}-linked.pdf"))
}

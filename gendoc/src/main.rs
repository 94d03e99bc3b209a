//! gendoc — collect exported Go functions per package into a README.
//!
//! Scans `<root>/*/*.go`, groups `func Xxx(...)` signatures by package
//! directory, wraps each package's code block with optional doc fragments
//! and injects the result into `README[.<lang>].md.tpl`.
//!
//! ```text
//! gendoc -o stdout
//! gendoc -o stdout -l zh-CN
//! gendoc -o README.md
//! gendoc -o README.zh-CN.md -l zh-CN
//! ```

mod collect;
mod config;
mod discover;
mod fragment;
mod model;
mod naming;
mod render;
mod template;

use anyhow::Result;
use clap::Parser;
use config::{GenOptions, Lang, Output};
use fragment::FragmentLoader;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gendoc",
    about = "Collect and dump all exported functions of the utility packages",
    after_help = "Examples:
  gendoc -o stdout
  gendoc -o stdout -l zh-CN
  gendoc -o README.md
  gendoc -o README.zh-CN.md -l zh-CN"
)]
struct Cli {
    /// Package description language. Known: en, zh-CN
    #[arg(short = 'l', long, default_value = Lang::DEFAULT)]
    lang: String,

    /// Result output file. If it is 'stdout', print the result directly.
    #[arg(short = 'o', long, default_value = "./metadata.log")]
    output: String,

    /// Template dir holding README.md.tpl and part-*.md fragments.
    /// An empty value disables templates.
    #[arg(short = 't', long, default_value = "./internal/template")]
    tpl_dir: String,

    /// Directory whose subdirectories are scanned as packages
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,

    /// Import path prefix of the scanned packages
    #[arg(long, default_value = "github.com/gookit/goutil")]
    base_pkg: String,

    /// Package directories to leave out. Can be specified multiple times.
    #[arg(long, default_values = ["netutil", "numutil", "internal"])]
    hidden: Vec<String>,

    /// Log debug details
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> GenOptions {
        GenOptions {
            lang: Lang::new(&self.lang),
            output: Output::parse(&self.output),
            tpl_dir: (!self.tpl_dir.is_empty()).then(|| PathBuf::from(&self.tpl_dir)),
            root: self.root.clone(),
            base_pkg: self.base_pkg.clone(),
            hidden: self.hidden.clone(),
        }
    }

    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    run(&cli.options())
}

/// Logs go to stderr so `-o stdout` output stays clean.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gendoc={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

/// One generator run: discover, collect, render, assemble, write.
fn run(opts: &GenOptions) -> Result<()> {
    if !opts.lang.is_known() {
        warn!("unknown language {}, using default fragments", opts.lang);
    }

    let files = discover::discover(&opts.root, &opts.hidden)?;
    let template = template::load_template(opts)?;

    let collection = collect::collect(&files, &opts.base_pkg)?;
    let fragments = FragmentLoader::new(opts.tpl_dir(), opts.lang.clone());
    let body = render::render_sections(&collection.sections, &fragments);

    let document = template::assemble(template.as_deref(), &body);
    template::write_output(&opts.output, &document)?;

    info!("collected packages:");
    for (name, path) in &collection.packages {
        info!("  {} => {}", name, path);
    }
    Ok(())
}

use anyhow::{Context, Result, bail};
use markdown_subreddit_config::{Config, OutputFormat, RecognizerKind};
use markdown_subreddit_engine::{
    ScanCoordinator, SubredditRecognizer,
    parsing::snapshot::{self, Snap},
    scan_document,
};
use std::{env, fmt::Write as _, path::PathBuf, process};
use xi_rope::Rope;

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    format: Option<OutputFormat>,
    elements_only: bool,
}

const USAGE: &str =
    "Usage: markdown-subreddit-cli <file> [--config <path>] [--format text|toml] [--elements-only]";

fn parse_args(args: &[String]) -> Result<Args> {
    let mut input = None;
    let mut config = None;
    let mut format = None;
    let mut elements_only = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--format" => {
                format = Some(match it.next().map(String::as_str) {
                    Some("text") => OutputFormat::Text,
                    Some("toml") => OutputFormat::Toml,
                    other => bail!("unknown format {other:?}, expected text or toml"),
                });
            }
            "--elements-only" => elements_only = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}"),
        }
    }

    Ok(Args {
        input: input.context("no input file given")?,
        config,
        format,
        elements_only,
    })
}

fn build_coordinator(config: &Config) -> ScanCoordinator {
    let mut coordinator = ScanCoordinator::new();
    for kind in &config.recognizers {
        match kind {
            RecognizerKind::Subreddit => coordinator.register(Box::new(SubredditRecognizer)),
        }
    }
    coordinator
}

fn render_text(snap: &Snap) -> String {
    let mut out = String::new();
    for line in &snap.lines {
        for item in &line.items {
            let _ = writeln!(
                out,
                "{:>4}  {:<10} {:>5}..{:<5} {:?}",
                line.number, item.kind, item.range.0, item.range.1, item.text
            );
        }
    }
    out
}

fn load_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("config file {} does not exist", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    let mut config = loaded.unwrap_or_else(|| {
        log::info!("No config file found, using defaults");
        Config::default()
    });
    if let Some(format) = args.format {
        config.output = format;
    }
    config.elements_only |= args.elements_only;
    Ok(config)
}

fn run(args: &Args) -> Result<String> {
    let config = load_config(args)?;
    let coordinator = build_coordinator(&config);
    log::info!("Recognizers in priority order: {:?}", coordinator.names());

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let rope = Rope::from(content.as_str());
    let doc = scan_document(&rope, &coordinator);

    #[cfg(debug_assertions)]
    for line in &doc.lines {
        snapshot::invariants(&doc.buffer, line.range, &line.items);
    }

    let elements: usize = doc
        .lines
        .iter()
        .flat_map(|l| &l.items)
        .filter(|i| matches!(i, markdown_subreddit_engine::ScanItem::Inline(_)))
        .count();
    log::info!(
        "Scanned {} lines, found {elements} elements",
        doc.lines.len()
    );

    let snap = snapshot::normalize(&doc, config.preview_width, config.elements_only);
    match config.output {
        OutputFormat::Text => Ok(render_text(&snap)),
        OutputFormat::Toml => toml::to_string_pretty(&snap).context("serializing report"),
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

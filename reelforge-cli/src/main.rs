use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composition and its segment ranges.
    Info(ConfigArgs),
    /// Evaluate one frame and write its layers as JSON.
    Frame(FrameArgs),
    /// Print a fingerprint per frame over a range.
    Fingerprint(FingerprintArgs),
    /// Print the copy of one language.
    Strings(StringsArgs),
    /// Check that every referenced asset exists under a directory.
    CheckAssets(CheckAssetsArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Creative config JSON. Defaults to the stock creative.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config language (`en` or `pt`).
    #[arg(long)]
    lang: Option<reelforge::Lang>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Global frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,
}

#[derive(Parser, Debug)]
struct StringsArgs {
    /// Language to print.
    #[arg(long, default_value = "en")]
    lang: reelforge::Lang,
}

#[derive(Parser, Debug)]
struct CheckAssetsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Static asset directory.
    #[arg(long)]
    assets: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
        Command::Strings(args) => cmd_strings(args),
        Command::CheckAssets(args) => cmd_check_assets(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<reelforge::CreativeConfig> {
    let mut config = match &args.config {
        Some(path) => reelforge::CreativeConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => reelforge::CreativeConfig::default(),
    };
    if let Some(lang) = args.lang {
        config.lang = lang;
    }
    tracing::debug!(lang = %config.lang, counter = %config.counter, "config loaded");
    Ok(config)
}

fn cmd_info(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let spec = config.composition();
    let tl = reelforge::creative_timeline(&config)?;

    println!(
        "{}: {} frames at {} fps ({:.2}s), {}x{}",
        spec.id,
        spec.duration_frames,
        spec.fps.as_f64(),
        spec.duration_secs(),
        spec.canvas.width,
        spec.canvas.height
    );
    for seg in tl.segments() {
        let r = seg.range();
        println!("  {:<16} [{}, {})", seg.name(), r.start.0, r.end.0);
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    let tl = reelforge::creative_timeline(&config)?;
    let layout = tl
        .evaluate(reelforge::FrameIndex(args.frame), &config.inputs())
        .with_context(|| format!("evaluate frame {}", args.frame))?;
    let json = serde_json::to_string_pretty(&layout).context("serialize frame layout")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write layout '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    let tl = reelforge::creative_timeline(&config)?;
    let end = args.end.unwrap_or(tl.duration());
    anyhow::ensure!(
        args.start < end && end <= tl.duration(),
        "frame range [{}, {end}) is not inside [0, {})",
        args.start,
        tl.duration()
    );

    let inputs = config.inputs();
    let mut stdout = std::io::stdout().lock();
    for f in args.start..end {
        let layout = tl.evaluate(reelforge::FrameIndex(f), &inputs)?;
        let fp = reelforge::fingerprint_layout(&layout)?;
        writeln!(stdout, "{f}\t{fp}").context("write fingerprint")?;
    }
    Ok(())
}

fn cmd_strings(args: StringsArgs) -> anyhow::Result<()> {
    let t = reelforge::lookup(args.lang);
    for (key, text) in t.entries() {
        println!("{key}\t{}", text.replace('\n', "\\n"));
    }
    for item in t.folder_list {
        println!("folder\t{}\t{}", item.icon, item.name);
    }
    Ok(())
}

fn cmd_check_assets(args: CheckAssetsArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    let missing = missing_assets(&config.assets, &args.assets);
    for (field, path) in &missing {
        eprintln!("missing {field}: {}", path.display());
    }
    anyhow::ensure!(
        missing.is_empty(),
        "{} asset(s) missing under '{}'",
        missing.len(),
        args.assets.display()
    );
    println!("all assets present under {}", args.assets.display());
    Ok(())
}

fn missing_assets(assets: &reelforge::AssetRefs, root: &Path) -> Vec<(&'static str, PathBuf)> {
    assets
        .resolve(root)
        .into_iter()
        .filter(|(_, p)| !p.is_file())
        .collect()
}

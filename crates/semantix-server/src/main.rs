use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use semantix_core::insights::tags_from_analysis;
use semantix_core::text::{document_summary, extract_plain_text, prepare_for_analysis, SUMMARY_LENGTH};
use semantix_core::{DocumentOutline, InMemoryDocumentSource, SemanticAnalysis};
use semantix_server::{pipeline_from_config, ConfigArgs, ServerConfig};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "semantix", version, about = "Document analysis service")]
struct Cli {
    /// TOML config file
    #[arg(long, env = "SEMANTIX_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `semantix_core=debug` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(flatten)]
    settings: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve,
    /// Analyze one document and print the result as JSON
    Analyze(AnalyzeArgs),
    /// Suggest personalities for one document
    Suggest(SuggestArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Document to analyze
    #[arg(long)]
    file: PathBuf,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Treat the file as editor HTML and strip markup first
    #[arg(long)]
    html: bool,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    /// Document text
    #[arg(long)]
    file: Option<PathBuf>,

    /// Prior analysis as JSON (output of `analyze` or a bare analysis object)
    #[arg(long)]
    analysis: Option<PathBuf>,

    /// Document title
    #[arg(long)]
    title: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref(), cli.log_format);

    if let Err(err) = run(cli).await {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ServerConfig::load(&cli.settings, cli.config.as_deref())
        .context("failed to resolve configuration")?;

    match cli.command {
        Commands::Serve => {
            semantix_server::run(config, shutdown_signal()).await?;
            Ok(())
        }
        Commands::Analyze(args) => analyze(&config, args).await,
        Commands::Suggest(args) => suggest(&config, args).await,
    }
}

async fn analyze(config: &ServerConfig, args: AnalyzeArgs) -> Result<()> {
    let raw = read_text(&args.file)?;
    let text = if args.html { extract_plain_text(&raw) } else { raw };
    let document_id = args.file.display().to_string();

    let source = InMemoryDocumentSource::new();
    source.insert(document_id.clone(), prepare_for_analysis(&text).into_owned());

    let pipeline = pipeline_from_config(config)?;
    let analysis = pipeline
        .analyze_stored(&source, &document_id, args.title.as_deref())
        .await
        .context("document analysis failed")?;

    let outline = DocumentOutline::from_segments(&analysis.segments);
    for dangling in outline.dangling_parents() {
        warn!(segment = %dangling.segment_id, parent = %dangling.parent_id, "segment names an unknown parent");
    }
    if !outline.duplicate_ids().is_empty() {
        warn!(ids = ?outline.duplicate_ids(), "duplicate segment ids ignored");
    }

    let report = serde_json::json!({
        "documentId": document_id,
        "summary": document_summary(&text, SUMMARY_LENGTH),
        "tags": tags_from_analysis(&analysis),
        "analysis": analysis,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn suggest(config: &ServerConfig, args: SuggestArgs) -> Result<()> {
    if args.file.is_none() && args.analysis.is_none() {
        bail!("either --file or --analysis is required");
    }

    let content = args.file.as_deref().map(read_text).transpose()?;
    let analysis = args.analysis.as_deref().map(read_analysis).transpose()?;

    let pipeline = pipeline_from_config(config)?;
    let suggestions = pipeline
        .suggest_for_document(content.as_deref(), args.title.as_deref(), analysis)
        .await
        .context("personality suggestion failed")?;

    info!(count = suggestions.len(), "suggestions ready");
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Accepts either a bare analysis or the `analyze` report wrapping one
fn read_analysis(path: &Path) -> Result<SemanticAnalysis> {
    let value: serde_json::Value = serde_json::from_str(&read_text(path)?)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let inner = value.get("analysis").cloned().unwrap_or(value);
    serde_json::from_value(inner)
        .with_context(|| format!("{} does not contain a semantic analysis", path.display()))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

fn init_tracing(level: Option<&str>, format: LogFormat) {
    let env_filter = level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

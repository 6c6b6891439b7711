mod api;
mod config;
mod llm;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use postcraft::analysis::{suggest_keywords, Industry};
use postcraft::history::{HistoryStore, PostDraft};
use postcraft::suggest::{detect_hashtags, suggest_emojis};
use postcraft::{analyze_post, AnalysisReport};

#[derive(Parser)]
#[command(name = "postcraft", about = "LinkedIn post quality analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Suggest(SuggestArgs),
    Draft(DraftArgs),
    History(HistoryArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "tech")]
    industry: String,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct SuggestArgs {
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct DraftArgs {
    #[arg(long)]
    topic: String,
    #[arg(long, default_value = "professional")]
    tone: String,
    #[arg(long, default_value = "optimal")]
    length: String,
    #[arg(long, default_value = "tech")]
    industry: String,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    save: bool,
}

#[derive(Args, Debug, Clone)]
struct HistoryArgs {
    #[arg(long)]
    delete: Option<String>,
    #[arg(long)]
    clear: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8787)]
    pub port: u16,
    #[arg(long, default_value = "webapp/dist")]
    pub web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Analyze(AnalyzeArgs::default()));
    let (config, _) = AppConfig::load(None)?;

    match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Draft(args) => run_draft(args, config).await,
        Command::History(args) => run_history(args, config).await,
        Command::Serve(args) => server::serve(args, config).await,
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), String> {
    let text = read_text(args.text)?;
    let report = analyze_post(&text);
    print_report(&report, args.details);

    let industry = Industry::parse_or_default(&args.industry);
    let matches = suggest_keywords(&text, industry);
    let present: Vec<&str> = matches
        .iter()
        .filter(|entry| entry.present)
        .map(|entry| entry.keyword)
        .collect();
    let missing: Vec<&str> = matches
        .iter()
        .filter(|entry| !entry.present)
        .map(|entry| entry.keyword)
        .collect();
    println!("\nIndustry keywords ({}):", industry.label());
    println!("  present: {}", join_or_none(&present));
    if args.details {
        println!("  missing: {}", join_or_none(&missing));
    }

    Ok(())
}

fn run_suggest(args: SuggestArgs) -> Result<(), String> {
    let text = read_text(args.text)?;
    let hashtags = detect_hashtags(&text);
    let emojis = suggest_emojis(&text);
    println!("Hashtags: {}", hashtags.join(" "));
    println!("Emojis: {}", emojis.join(" "));
    Ok(())
}

async fn run_draft(args: DraftArgs, config: AppConfig) -> Result<(), String> {
    let client = llm::LlmClient::from_env(&config.generator, args.model)
        .ok_or_else(|| "OPENROUTER_API_KEY is not set".to_string())?;
    let request = llm::DraftRequest {
        topic: args.topic.clone(),
        tone: args.tone.clone(),
        length: args.length,
        industry: Industry::parse_or_default(&args.industry),
    };

    let outcome = client.draft_post(&request).await?;
    println!("{}\n", outcome.text);
    println!(
        "Drafted by {} in {}ms ({} attempt{})",
        outcome.trace.model,
        outcome.trace.latency_ms,
        outcome.trace.attempts,
        if outcome.trace.attempts == 1 { "" } else { "s" }
    );

    let report = analyze_post(&outcome.text);
    println!("Score: {}/100", report.overall_score);

    if args.save {
        let store = HistoryStore::load(config.history.path, config.history.limit).await?;
        let record = store
            .save(PostDraft {
                content: outcome.text,
                topic: args.topic,
                tone: args.tone,
                score: report.overall_score,
            })
            .await?;
        println!("Saved to history as {}", record.id);
    }

    Ok(())
}

async fn run_history(args: HistoryArgs, config: AppConfig) -> Result<(), String> {
    let store = HistoryStore::load(config.history.path, config.history.limit).await?;

    if args.clear {
        store.clear().await?;
        println!("History cleared");
        return Ok(());
    }

    if let Some(id) = args.delete {
        if store.delete(&id).await? {
            println!("Deleted {}", id);
        } else {
            return Err(format!("no record with id {}", id));
        }
        return Ok(());
    }

    let records = store.list().await;
    if records.is_empty() {
        println!("History is empty");
        return Ok(());
    }
    for record in records {
        let preview: String = record.content.chars().take(60).collect();
        println!(
            "{}  score {:>3}  {}  {}",
            record.id,
            record.score,
            if record.topic.is_empty() {
                "-"
            } else {
                record.topic.as_str()
            },
            preview.replace('\n', " ")
        );
    }
    Ok(())
}

fn print_report(report: &AnalysisReport, details: bool) {
    println!("Overall score: {}/100", report.overall_score);
    println!(
        "Length: {} chars ({}) — {}",
        report.char_analysis.count,
        report.char_analysis.status.label(),
        report.char_analysis.message
    );
    println!(
        "Readability: {} ({})",
        report.readability.score,
        report.readability.level.label()
    );
    println!(
        "Hook: {}/100 — \"{}\"",
        report.hook_analysis.score, report.hook_analysis.hook
    );
    println!(
        "Emojis: {} ({}) | Hashtags: {} ({}) | CTA: {} | Paragraph breaks: {} | Words: {}",
        report.emoji_count,
        report.emoji_status.label(),
        report.hashtag_count,
        report.hashtag_status.label(),
        if report.has_cta { "yes" } else { "no" },
        report.line_breaks,
        report.word_count
    );
    println!("Power words: {}", join_or_none(&report.power_words));
    if !report.negative_terms.is_empty() {
        println!("Negative terms: {}", report.negative_terms.join(", "));
    }

    if details && !report.hook_analysis.tips.is_empty() {
        println!("\nHook notes:");
        for tip in &report.hook_analysis.tips {
            println!("- {}", tip);
        }
    }

    if !report.tips.is_empty() {
        println!("\nTips:");
        for tip in &report.tips {
            println!("- {}", tip);
        }
    }
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing post text: pass --text or pipe stdin".to_string());
    }
    Ok(buffer)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

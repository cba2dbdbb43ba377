//! Recovery Desk console runner.
//!
//! Interactive chat loop over stdin/stdout against the live engine. A web
//! transport is a separate deployment concern; this binary drives the same
//! handlers a transport would, so the full path from raw message to reply
//! is exercised end to end.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::info;

use recovery_desk::adapters::FileIntentStore;
use recovery_desk::application::handlers::{
    bootstrap_engine, ClassifyMessageCommand, ClassifyMessageHandler, ListIntentsHandler,
};
use recovery_desk::config::AppConfig;
use recovery_desk::domain::engine::ClassificationResult;
use recovery_desk::domain::foundation::{ChatContext, PaymentStatus, SessionId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "recovery desk starting");

    let store = FileIntentStore::new(config.knowledge.custom_intents_path.as_str());
    let engine = bootstrap_engine(&store).await?;
    let metrics = engine.metrics();
    info!(
        intents = metrics.total_intents,
        patterns = metrics.total_patterns,
        "knowledge base ready"
    );

    let engine = Arc::new(Mutex::new(engine));
    let classify = ClassifyMessageHandler::new(Arc::clone(&engine));
    let list = ListIntentsHandler::new(Arc::clone(&engine));

    let session_id = SessionId::new();
    let mut context = ChatContext::new();

    println!("Recovery Desk support chat. Type a message, or /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/paid" => {
                context.payment_status = PaymentStatus::Paid;
                println!("Payment recorded for this session.");
            }
            "/intents" => {
                let snapshot = list.handle().await;
                println!(
                    "{} intents, {} patterns:",
                    snapshot.metrics.total_intents, snapshot.metrics.total_patterns
                );
                for intent in &snapshot.intents {
                    println!("  {} ({} patterns)", intent.name, intent.patterns.len());
                }
            }
            _ if input.starts_with("/platform ") => {
                let platform = input["/platform ".len()..].trim().to_string();
                println!("Platform set to {platform}.");
                context.platform = Some(platform);
            }
            _ if input.starts_with("/name ") => {
                let name = input["/name ".len()..].trim().to_string();
                println!("Nice to meet you, {name}.");
                context.name = Some(name);
            }
            _ => {
                let cmd = ClassifyMessageCommand::new(session_id, input, context.clone());
                match classify.handle(cmd).await {
                    Ok(result) => print_result(&result),
                    Err(e) => println!("({e})"),
                }
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Loads and validates configuration; any failure falls back to defaults
/// so the chat still comes up.
fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                eprintln!("invalid configuration ({e}), using defaults");
                AppConfig::default()
            }
        },
        Err(e) => {
            eprintln!("could not load configuration ({e}), using defaults");
            AppConfig::default()
        }
    }
}

fn prompt() -> std::io::Result<()> {
    print!("you> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!("Commands:");
    println!("  /paid           mark this session as paid");
    println!("  /platform NAME  set the platform you are recovering");
    println!("  /name NAME      tell the bot your name");
    println!("  /intents        list the live knowledge base");
    println!("  /quit           leave the chat");
}

fn print_result(result: &ClassificationResult) {
    println!("bot> {}", result.reply);
    if let Some(suggestions) = &result.suggestions {
        println!("     You could ask:");
        for suggestion in suggestions {
            println!("       - {suggestion}");
        }
    }
    if result.requires_payment {
        println!("     [payment required]");
    }
    if result.should_escalate {
        println!("     [escalated to human support]");
    }
}

//! GramaBot application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Install the tracing subscriber
//! 3. Build the response resolver (built-in or file catalog)
//! 4. Run the requested command: interactive chat, one-shot ask, service
//!    listing or config dump

mod cli;

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

use gramabot_chat::{
    ChatExchange, ChatOrchestrator, LogSpeechSink, ResponseCatalog, ResponseResolver,
    ServiceDirectory, ServiceGroup, VoiceInterface,
};
use gramabot_core::{GramabotConfig, Language};

use cli::{CliArgs, Command};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Build the resolver from the configured catalog file, or the built-in one.
fn build_resolver(config: &GramabotConfig) -> AppResult<ResponseResolver> {
    match config.catalog.path {
        Some(ref path) => {
            let catalog = ResponseCatalog::load(std::path::Path::new(path))?;
            Ok(ResponseResolver::new(catalog)?)
        }
        None => {
            tracing::debug!("Using built-in response catalog");
            Ok(ResponseResolver::builtin())
        }
    }
}

/// Print a bot reply after the configured pause, voicing it if enabled.
async fn deliver(
    exchange: &ChatExchange,
    config: &GramabotConfig,
    voice: &mut Option<VoiceInterface<LogSpeechSink>>,
) {
    if config.chat.reply_delay_ms > 0 {
        println!("GramaBot is typing...");
        tokio::time::sleep(tokio::time::Duration::from_millis(config.chat.reply_delay_ms)).await;
    }
    println!("GramaBot: {}", exchange.bot_message.text);
    if let Some(ref note) = exchange.bot_message.translation {
        println!("          ({})", note);
    }
    if let Some(voice) = voice {
        if let Err(e) = voice.speak(&exchange.bot_message.text) {
            tracing::warn!(error = %e, "Speech output failed");
        }
    }
}

fn print_quick_actions(orchestrator: &ChatOrchestrator, session_id: Uuid) {
    if let Ok(actions) = orchestrator.quick_actions(session_id) {
        println!("Quick actions:");
        for (i, action) in actions.iter().enumerate() {
            println!("  /quick {}  {}", i + 1, action.label);
        }
    }
}

/// Send the 1-based quick action named by `arg`. Failures come back as a
/// message so the chat loop can report them and keep going.
fn quick_exchange(
    orchestrator: &ChatOrchestrator,
    session_id: Uuid,
    arg: &str,
) -> Result<(ChatExchange, Uuid), String> {
    let actions = orchestrator
        .quick_actions(session_id)
        .map_err(|e| e.to_string())?;
    let action = arg
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| actions.get(i))
        .ok_or_else(|| format!("Pick a quick action between 1 and {}", actions.len()))?;
    orchestrator
        .handle_quick_action(&action.category, Some(session_id))
        .map_err(|e| e.to_string())
}

fn print_help() {
    println!("Commands:");
    println!("  /lang <name>   switch language (English, Hindi, Telugu, Tamil, Kannada)");
    println!("  /quick <n>     send quick action n");
    println!("  /rate <1-5>    rate the last reply");
    println!("  /history       show this conversation");
    println!("  /help          show this help");
    println!("  /quit          leave");
}

/// Interactive chat loop over stdin.
async fn run_chat(
    orchestrator: &ChatOrchestrator,
    config: &GramabotConfig,
    language: Language,
) -> AppResult<()> {
    let mut session_id = orchestrator.start_session(Some(language))?;
    let mut language = language;
    let mut voice = config
        .voice
        .speak_replies
        .then(|| VoiceInterface::new(LogSpeechSink, language));

    println!("GramaBot: {}", language.greeting());
    print_quick_actions(orchestrator, session_id);
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} > ", language.placeholder());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
        let rest = rest.trim();

        match command {
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/lang" => match rest.parse::<Language>() {
                Ok(next) => {
                    orchestrator.set_language(session_id, next)?;
                    language = next;
                    if let Some(ref mut voice) = voice {
                        voice.set_language(next);
                    }
                    println!("GramaBot: {}", next.greeting());
                    print_quick_actions(orchestrator, session_id);
                }
                Err(e) => eprintln!("{}", e),
            },
            "/quick" => match quick_exchange(orchestrator, session_id, rest) {
                Ok((exchange, sid)) => {
                    println!("You: {}", exchange.user_message.text);
                    session_id = sid;
                    deliver(&exchange, config, &mut voice).await;
                }
                Err(e) => eprintln!("{}", e),
            },
            "/rate" => match rest.parse::<u8>() {
                Ok(rating) => match orchestrator.rate_last_reply(session_id, rating) {
                    Ok(_) => println!("Thank you for your feedback."),
                    Err(e) => eprintln!("{}", e),
                },
                Err(_) => eprintln!("Rate the last reply from 1 to 5"),
            },
            "/history" => {
                for message in orchestrator.get_history(session_id)? {
                    let rating = message
                        .rating
                        .map(|r| format!(" [{}/5]", r))
                        .unwrap_or_default();
                    println!("{:?}: {}{}", message.role, message.text, rating);
                }
            }
            _ => match orchestrator.handle_message(input, Some(language), Some(session_id)) {
                Ok((exchange, sid)) => {
                    if sid != session_id {
                        tracing::info!(old = %session_id, new = %sid, "Session restarted");
                    }
                    session_id = sid;
                    deliver(&exchange, config, &mut voice).await;
                }
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    println!("GramaBot: Goodbye!");
    Ok(())
}

/// Resolve one message and print the reply.
fn run_ask(
    orchestrator: &ChatOrchestrator,
    config: &GramabotConfig,
    language: Language,
    text: &[String],
    json: bool,
) -> AppResult<()> {
    let message = text.join(" ");
    let (exchange, _) = orchestrator.handle_message(&message, Some(language), None)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&exchange.reply)?);
    } else {
        println!("{}", exchange.reply.text);
    }

    if config.voice.speak_replies {
        VoiceInterface::new(LogSpeechSink, language).speak(&exchange.reply.text)?;
    }
    Ok(())
}

/// Print the service directory, filtered.
fn run_services(search: Option<&str>, group: Option<&str>) -> AppResult<()> {
    let group = match group.map(str::trim) {
        None | Some("all") | Some("") => None,
        Some(name) => Some(name.parse::<ServiceGroup>()?),
    };

    let directory = ServiceDirectory::builtin();
    let services = directory.filter(search.unwrap_or(""), group);
    if services.is_empty() {
        println!("No services found.");
        return Ok(());
    }

    for service in services {
        let languages: Vec<&str> = service.languages.iter().map(|l| l.name()).collect();
        println!(
            "{}. {} [{}] ~{} min",
            service.id,
            service.name,
            service.group.display_name(),
            service.avg_response_minutes
        );
        println!("   {}", service.description);
        println!("   Languages: {}", languages.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = GramabotConfig::load_or_default(&config_file);
    args.apply_overrides(&mut config)?;

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting GramaBot v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let language = config.chat.default_language();

    match args.command() {
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Command::Services { search, group } => {
            run_services(search.as_deref(), group.as_deref())?;
        }
        Command::Ask { text, json } => {
            let resolver = Arc::new(build_resolver(&config)?);
            let orchestrator = ChatOrchestrator::new(resolver, config.chat.clone());
            run_ask(&orchestrator, &config, language, &text, json)?;
        }
        Command::Chat => {
            let resolver = Arc::new(build_resolver(&config)?);
            tracing::info!(
                categories = resolver.catalog().categories.len(),
                %language,
                "Response resolver ready"
            );
            let orchestrator = ChatOrchestrator::new(resolver, config.chat.clone());
            run_chat(&orchestrator, &config, language).await?;
        }
    }

    Ok(())
}

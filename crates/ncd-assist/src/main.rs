//! Terminal chat for the NCD health assistant.

#[macro_use]
extern crate tracing;

mod style;

use std::env;
use std::io::Write as _;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use ncd_assist_core::render::render_citations;
use ncd_assist_core::transcript::{Message, Role};
use ncd_assist_core::{Session, SessionBuilder, SubmitError};
use ncd_assist_http_engine::{HttpEngine, HttpEngineConfigBuilder};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = env::var("NCD_ASSIST_API_KEY") else {
        eprintln!("NCD_ASSIST_API_KEY environment variable is not set");
        return ExitCode::FAILURE;
    };
    let mut config = HttpEngineConfigBuilder::with_api_key(api_key);
    if let Ok(base_url) = env::var("NCD_ASSIST_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    if let Ok(collection) = env::var("NCD_ASSIST_COLLECTION") {
        config = config.with_collection(collection);
    }
    let config = config.build();

    let session = Arc::new(
        SessionBuilder::with_engine_factory(move || HttpEngine::new(config))
            .build(),
    );
    if let Err(err) = session.initialize() {
        eprintln!("{}", err.to_string().bright_red());
        return ExitCode::FAILURE;
    }

    print_banner();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        match line {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.reset();
                println!("{}", "(chat history cleared)".dimmed());
                continue;
            }
            _ => {}
        }

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("🤔 Thinking...");
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        let result = session.submit(line).await;
        progress_bar.finish_and_clear();

        match result {
            Ok(()) => print_latest_reply(&session),
            Err(SubmitError::Busy) => {
                // Input is only read between turns, so this should not
                // happen; surface it rather than drop the question.
                eprintln!(
                    "{}",
                    "A request is already in flight, try again.".yellow()
                );
            }
            Err(SubmitError::EngineUnavailable) => {
                eprintln!(
                    "{}",
                    "The chat engine is unavailable, please restart."
                        .bright_red()
                );
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_banner() {
    println!("{}", "🏥 NCD Health Assistant".bold());
    println!(
        "{}",
        "⚠️  Getting medical info from AI. This is not a substitute for \
         professional medical advice."
            .yellow()
    );
    println!(
        "Ask about diabetes, cancer types, heart disease, obesity, high \
         blood pressure, and more."
    );
    println!("Commands: /clear clears the history, /quit exits.");
    println!();
}

fn print_latest_reply(session: &Session) {
    let transcript = session.transcript();
    let Some(message) = transcript.last() else {
        // An ignored empty submission leaves the transcript as is.
        return;
    };
    if message.role != Role::Assistant {
        debug!("transcript ends with a dangling user message");
        return;
    }
    print_reply(message);
}

fn print_reply(message: &Message) {
    let rendered = render_citations(message, style::citation_marker);
    println!("{}🤖 {}", BAR_CHAR.bright_cyan(), rendered.bright_white());

    if !message.sources.is_empty() {
        println!("{}", "📚 Sources".bold());
        for line in style::source_lines(&message.sources) {
            println!("   {line}");
        }
    }
    println!();
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

//! QuoteFlow terminal runner
//!
//! Drives the conversation engine over stdin/stdout: prints newly
//! appended timeline entries after every engine call, reads answers
//! while the engine is awaiting input, and reads the final action once
//! the conversation is complete.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

use quoteflow::{
    config::Settings,
    services::ServiceFactory,
    state::{
        default_script, AuthorRole, ConversationEngine, Cursor, MessageContent, Pacing,
        StepScript, UserAnswer,
    },
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the conversation loop so
    // the file sink keeps flushing
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", quoteflow::app_info());

    let services = ServiceFactory::new(&settings)?;
    let script = default_script();
    let mut engine = ConversationEngine::new(
        script.clone(),
        services.pipeline.clone(),
        Arc::clone(&services.navigator),
        Pacing::from_config(&settings.conversation),
    );

    info!(session_id = %engine.session_id(), "Conversation session started");

    let mut printed = 0;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    engine.start().await;
    printed = print_new_entries(&engine, printed);

    while !engine.is_gate_open() {
        let answer = match read_answer(&mut lines).await? {
            Some(answer) => answer,
            None => {
                info!("Input closed, ending conversation");
                return Ok(());
            }
        };

        check_answer_format(&engine, &script, &answer);
        engine.handle_user_response(UserAnswer::plain(&answer)).await;
        printed = print_new_entries(&engine, printed);
    }

    // Gate open: read the final action and hand off
    println!();
    println!("  [proceed / view_dashboard]");
    if let Some(action) = read_answer(&mut lines).await? {
        engine.handle_final_action(&action);
    }

    info!(session_id = %engine.session_id(), "Conversation session finished");
    Ok(())
}

/// Print timeline entries appended since the last call
fn print_new_entries(engine: &ConversationEngine, printed: usize) -> usize {
    let entries = engine.timeline().entries();
    for entry in &entries[printed..] {
        let speaker = match entry.author {
            AuthorRole::Assistant => "quoteflow",
            AuthorRole::User => "you",
        };
        match &entry.content {
            MessageContent::Text(text) => println!("{:>9}> {}", speaker, text),
            MessageContent::QuoteResult => {
                println!("{:>9}> Here's your quote:", speaker);
                if let Some(quote) = &entry.quote {
                    if let Some(monthly) = quote.monthly {
                        println!("{:>9}  Monthly premium: ${:.2}", "", monthly);
                    }
                    if let Some(annual) = quote.annual {
                        println!("{:>9}  Annual premium: ${:.2}", "", annual);
                    }
                    if let Some(limit) = quote.dwelling_limit {
                        println!("{:>9}  Dwelling coverage: ${:.0}", "", limit);
                    }
                    if let Some(coverage) = &quote.coverage {
                        println!("{:>9}  Coverage: {}", "", coverage);
                    }
                }
            }
        }
    }
    entries.len()
}

/// Read one non-empty, whitespace-normalized line; `None` on EOF
async fn read_answer(
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<Option<String>, std::io::Error> {
    loop {
        match lines.next_line().await? {
            Some(line) => {
                let answer = helpers::normalize_whitespace(&line);
                if !answer.is_empty() {
                    return Ok(Some(answer));
                }
            }
            None => return Ok(None),
        }
    }
}

/// Log a warning for answers that look malformed for the current field.
///
/// The answer is still accepted as given; format problems surface later
/// as a submission failure rather than blocking the conversation.
fn check_answer_format(engine: &ConversationEngine, script: &StepScript, answer: &str) {
    let field = match engine.cursor() {
        Cursor::At(index) => script.get(index).and_then(|step| step.field.as_deref()),
        Cursor::Exhausted => None,
    };
    match field {
        Some("email") if !helpers::is_valid_email(answer) => {
            warn!(answer = answer, "Answer does not look like an email address");
        }
        Some("phone") if !helpers::is_valid_phone(answer) => {
            warn!(answer = answer, "Answer does not look like a phone number");
        }
        _ => {}
    }
}

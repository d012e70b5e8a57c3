use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use uuid::Uuid;

use souschef::utils::{collapse_whitespace, safe_truncate};
use souschef::{
    DialogueState, RecipeRanker, SessionMemory, SousChefConfig, load_corpus, next_turn, parse,
};

/// One entry of the sid -> (state, memory) table. The dialogue core never
/// sees this table; it only receives and returns a single session's values.
#[derive(Default)]
struct ChatSession {
    state: DialogueState,
    memory: SessionMemory,
    title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("souschef=info".parse()?))
        .init();

    let config = SousChefConfig::from_env();
    let corpus = load_corpus(Path::new(&config.corpus_path))?;
    let ranker = RecipeRanker::new(corpus, &config);

    let mut sessions: HashMap<String, ChatSession> = HashMap::new();
    let mut sid = Uuid::new_v4().to_string();

    println!("souschef — type a message, /new for a fresh chat, /quit to exit.");
    println!("{}", souschef::dialogue::replies::fallback_prompt());

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();

        match message {
            "" => continue,
            "/quit" => break,
            "/new" => {
                sid = Uuid::new_v4().to_string();
                println!("Started a new chat.");
                println!("{}", souschef::dialogue::replies::fallback_prompt());
                continue;
            }
            _ => {}
        }

        let session = sessions.entry(sid.clone()).or_default();
        if session.title.is_none() {
            session.title = Some(safe_truncate(&collapse_whitespace(message), 40));
        }

        let parsed = parse(message);
        let outcome = next_turn(
            session.state,
            session.memory.clone(),
            &parsed,
            |query| ranker.search(query, config.top_k),
            |title| ranker.details(title),
        );
        session.state = outcome.state;
        session.memory = outcome.memory;

        println!("{}", outcome.reply);
        if session.state == DialogueState::Closed {
            println!("(type /new to start another chat)");
        }
    }

    Ok(())
}

//! Interactive driver for the agent facade.
//!
//! Reads one request per line from stdin and prints each analysis result
//! as pretty-printed JSON. Initialization failures are fatal; per-request
//! failures come back as error-shaped results and the loop continues.

use pipewright_agent::Agent;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut agent = Agent::from_env().expect("failed to initialize agent");
    tracing::info!(model = %agent.model(), "agent ready");

    if !agent.verify_backend().await {
        tracing::warn!("backend verification failed; requests may not succeed");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ").expect("failed to write prompt");
        stdout.flush().expect("failed to flush stdout");

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .expect("failed to read input");
        if bytes_read == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        let result = agent.analyze(input).await;
        let rendered =
            serde_json::to_string_pretty(&result).expect("failed to serialize result");
        println!("{rendered}");
    }
}

//! NLIP CLI - Line-oriented chat against an NLIP endpoint
//!
//! Each line typed is sent as one envelope; the reply text is printed.
//! Conversation continuity comes from the client's correlator.

mod command;
mod config;

use chrono::Local;
use clap::Parser;
use command::Command;
use config::CliConfig;
use nlip::{Message, NlipClient, NlipError};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();

    info!("NLIP CLI starting");
    info!("  Endpoint: {}", config.url);
    info!("  Timeout: {}ms", config.timeout_ms);
    info!("  Language: {}", config.language);

    let client = NlipClient::new(config.url.clone(), config.client_options());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(command::ParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if !run_command(&client, &config, command).await {
            break;
        }
    }

    info!("NLIP CLI exiting");
    Ok(())
}

/// Returns false when the session should end.
async fn run_command(client: &NlipClient, config: &CliConfig, command: Command) -> bool {
    let result = match command {
        Command::Say(text) => client.send_message(&text).await,
        Command::Image { path, text } => client.send_with_image(&text, &path).await,
        Command::Files { paths, text } => client.send_with_files(&text, &paths).await,
        Command::Upload(path) => {
            match client.upload_file(&path).await {
                Ok(ack) => println!("{}", ack),
                Err(e) => print_error(&e),
            }
            return true;
        }
        Command::Reset => {
            client.reset_session().await;
            println!("(new conversation)");
            return true;
        }
        Command::Session => {
            let correlator = client.correlator().await;
            println!("{}", correlator.as_deref().unwrap_or("(none)"));
            return true;
        }
        Command::Help => {
            println!("{}", command::HELP);
            return true;
        }
        Command::Quit => return false,
    };

    match result {
        Ok(reply) => print_reply(&reply, &config.language),
        Err(e) => print_error(&e),
    }
    true
}

fn print_reply(reply: &Message, language: &str) {
    debug!("Reply has {} submessage(s)", reply.submessages.len());
    let text = reply
        .extract_text(language, " ")
        .unwrap_or_else(|| "(no text in reply)".to_string());
    println!("[{}] {}", Local::now().format("%H:%M:%S"), text);
}

fn print_error(e: &NlipError) {
    println!("Error: {}", e);
    if e.is_timeout() {
        println!("The server took too long. Try a smaller payload or wait longer (--timeout-ms).");
    }
}

use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    cli::load_config,
    extract::YtDlpExtractor,
    info,
    management::{LinkOutcome, MessageProcessor},
    spotify::SpotifyClient,
    success, utils, warning,
};

pub async fn sync_message(text: String) {
    let config = load_config();
    let client = SpotifyClient::from_config(&config);
    let extractor = YtDlpExtractor::new(config.ytdlp_path.as_str());
    let processor = MessageProcessor::new(&client, &extractor, config.playlist_id.as_str())
        .with_page_size(config.page_size);

    let outcomes = processor.process(&text).await;
    if outcomes.is_empty() {
        warning!("No music links found in message.");
        return;
    }

    print_outcomes(&outcomes);

    let synced = outcomes.iter().filter(|o| o.is_success()).count();
    if synced == outcomes.len() {
        success!("Synced {} link(s).", synced);
    } else {
        warning!("Synced {} of {} link(s).", synced, outcomes.len());
    }
}

/// Processes stdin line by line, one message per line, until EOF.
pub async fn watch() {
    let config = load_config();
    let client = SpotifyClient::from_config(&config);
    let extractor = YtDlpExtractor::new(config.ytdlp_path.as_str());
    let processor = MessageProcessor::new(&client, &extractor, config.playlist_id.as_str())
        .with_page_size(config.page_size);

    info!("Groovebot is running! Listening for music links...");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => continue,
            Ok(Some(line)) => {
                processor.process(&line).await;
            }
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to read message: {}", e);
                break;
            }
        }
    }

    info!("Shutting down...");
}

fn print_outcomes(outcomes: &[LinkOutcome]) {
    let rows: Vec<_> = outcomes.iter().map(utils::outcome_row).collect();
    println!("{}", Table::new(rows));
}

use crate::client::ModelClient;
use crate::generate::{create_sdk_util_file, FATAL_PREFIX};
use crate::prelude::{println, *};
use colored::Colorize;
use sdkgen_core::prompt::GENERATION_LANGUAGE;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive panel: one free-text request per line, progress notices and a
/// final composed message (or an error line) per request.
pub async fn run(global: crate::Global) -> Result<()> {
    println!(
        "{}",
        "sdkgen panel — describe the utility you need (Ctrl-D to exit)".bold()
    );

    let client = ModelClient::new(global.api_url.clone(), global.api_key.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        match create_sdk_util_file(&client, &global, request, GENERATION_LANGUAGE, true).await {
            Ok(outcome) => {
                println!();
                println!("{}", outcome.message);
            }
            Err(err) => {
                println!("{} {FATAL_PREFIX} {err}", "Error:".red().bold());
            }
        }
        println!();
    }

    Ok(())
}

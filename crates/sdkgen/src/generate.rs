use std::path::Path;
use std::time::Duration;

use crate::client::{CompletionError, ModelClient};
use crate::prelude::{println, *};
use crate::scanner::{self, ScanConfig};
use colored::Colorize;
use sdkgen_core::assemble::assemble_context;
use sdkgen_core::compose::{compose_final_message, IntegrationOutcome};
use sdkgen_core::extract::extract_code;
use sdkgen_core::filename::{generate_filename, ExtensionTable};
use sdkgen_core::prompt::{build_generation_prompt, build_integration_prompt, GENERATION_LANGUAGE};
use sdkgen_core::service::{extract_service_name, KNOWN_SERVICES};
use sdkgen_core::types::GeneratedArtifact;

/// Character budget for the workspace context sent with the integration
/// request.
pub const MAX_CONTEXT_LENGTH: usize = 50_000;

/// Prefix carried by every fatal orchestration error.
pub const FATAL_PREFIX: &str = "Failed to create SDK file:";

const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);
/// Generous ceiling for the integration-instructions call; it carries the
/// whole workspace context, so it can take a while.
const INTEGRATION_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Debug, Clone, clap::Args)]
pub struct GenerateOptions {
    /// Free-text request naming the service, e.g. "generate stripe util"
    #[arg(value_name = "REQUEST", num_args = 1.., required = true)]
    pub request: Vec<String>,

    /// Target language for the generated utility
    #[arg(long, default_value = GENERATION_LANGUAGE)]
    pub language: String,

    /// Output the artifact and scan summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Resolve the service name and file name without calling the model or
    /// writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Everything one successful run produces.
#[derive(Debug, serde::Serialize)]
pub struct RunOutcome {
    pub artifact: GeneratedArtifact,
    pub message: String,
    pub included_count: usize,
    pub total_files: usize,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let request_text = options.request.join(" ");
    let service_name = extract_service_name(&request_text, KNOWN_SERVICES);
    let filename = generate_filename(&service_name, &options.language, &ExtensionTable::default());

    if options.dry_run {
        if options.json {
            let value = serde_json::json!({
                "service_name": service_name,
                "language": options.language,
                "filename": filename,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("Service: {service_name}");
            println!("Would write: utils/{filename}");
        }
        return Ok(());
    }

    let client = ModelClient::new(global.api_url.clone(), global.api_key.clone());

    let outcome = create_sdk_util_file(
        &client,
        &global,
        &request_text,
        &options.language,
        global.verbose,
    )
    .await
    .map_err(|err| eyre!("{FATAL_PREFIX} {err}"))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.message);
    }

    Ok(())
}

/// The orchestration chain: extract name, request code, extract code, derive
/// the file name, write the file, scan the workspace, request integration
/// instructions, compose the final message.
///
/// Any failure up to and including the file write is fatal and leaves no
/// file behind. After the write, failures in the integration call degrade
/// the final message instead of aborting.
pub async fn create_sdk_util_file(
    client: &ModelClient,
    global: &crate::Global,
    request_text: &str,
    language: &str,
    progress: bool,
) -> Result<RunOutcome, Error> {
    let service_name = extract_service_name(request_text, KNOWN_SERVICES);
    let filename = generate_filename(&service_name, language, &ExtensionTable::default());

    if progress {
        println!("Generating {language} utility for {}...", service_name.bold());
    }

    let generation_prompt = build_generation_prompt(&service_name, language);
    let response = client
        .complete(&generation_prompt, GENERATION_TIMEOUT)
        .await
        .map_err(|err| match err {
            CompletionError::NoContent => Error::NoContentInResponse,
            other => Error::RemoteCallFailed(other.to_string()),
        })?;

    let code = extract_code(&response, language);

    let workspace = global.workspace_root().ok_or(Error::NoWorkspaceOpen)?;
    let file_path = write_artifact(&workspace, &filename, &code).await?;

    let artifact = GeneratedArtifact {
        service_name,
        language: language.to_string(),
        filename,
        code,
        file_path,
    };

    if progress {
        println!("Created {}", artifact.file_path.bold());
        println!("Scanning workspace for context...");
    }

    // The scan swallows per-entry errors, so nothing past this point can
    // fail the run; the file already exists.
    let files = scanner::scan(&workspace, &ScanConfig::default());
    let total_files = files.len();
    let context = assemble_context(&files, MAX_CONTEXT_LENGTH);

    if progress {
        println!(
            "Requesting integration instructions ({} of {total_files} files as context)...",
            context.included_count
        );
    }

    let integration_prompt = build_integration_prompt(
        &artifact.service_name,
        &artifact.filename,
        &artifact.code,
        &context.text,
    );
    let outcome =
        integration_outcome(client.complete(&integration_prompt, INTEGRATION_TIMEOUT).await);

    let message = compose_final_message(
        &artifact.filename,
        &outcome,
        context.included_count,
        total_files,
    );

    Ok(RunOutcome {
        artifact,
        message,
        included_count: context.included_count,
        total_files,
    })
}

/// Map the integration call's result to its outcome, keeping timeouts apart
/// from other failures so the final message can tell the user whether
/// retrying might help.
fn integration_outcome(result: Result<String, CompletionError>) -> IntegrationOutcome {
    match result {
        Ok(text) => IntegrationOutcome::Instructions(text),
        Err(CompletionError::Timeout) => {
            log::warn!("integration-instructions request timed out");
            IntegrationOutcome::TimedOut
        }
        Err(err) => {
            log::warn!("integration-instructions request failed: {err}");
            IntegrationOutcome::Failed(err.to_string())
        }
    }
}

/// Write the generated code to `<workspace>/utils/<filename>`, creating the
/// directory if needed. An existing file at that path is overwritten.
async fn write_artifact(
    workspace: &Path,
    filename: &str,
    code: &str,
) -> Result<String, Error> {
    let utils_dir = workspace.join("utils");
    tokio::fs::create_dir_all(&utils_dir)
        .await
        .map_err(|err| Error::FileWriteFailed(err.to_string()))?;

    let file_path = utils_dir.join(filename);
    tokio::fs::write(&file_path, code)
        .await
        .map_err(|err| Error::FileWriteFailed(err.to_string()))?;

    Ok(file_path.to_string_lossy().into_owned())
}

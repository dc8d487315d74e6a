use crate::generate::MAX_CONTEXT_LENGTH;
use crate::prelude::{eprintln, println, *};
use crate::scanner::{self, ScanConfig};
use colored::Colorize;
use sdkgen_core::assemble::assemble_context;

#[derive(Debug, Clone, clap::Args)]
pub struct ScanOptions {
    /// Prompt budget to pack the context against
    #[arg(long, default_value_t = MAX_CONTEXT_LENGTH)]
    pub budget: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Debug surface: show what context a generation run would send.
pub async fn run(options: ScanOptions, global: crate::Global) -> Result<()> {
    let workspace = global.workspace_root().ok_or_else(|| eyre!(Error::NoWorkspaceOpen))?;

    if global.verbose {
        eprintln!("Scanning {}", workspace.display());
    }

    let files = scanner::scan(&workspace, &ScanConfig::default());
    let context = assemble_context(&files, options.budget);

    if options.json {
        let value = serde_json::json!({
            "workspace": workspace.display().to_string(),
            "budget": options.budget,
            "total_files": files.len(),
            "included_count": context.included_count,
            "context_length": context.text.len(),
            "files": files.iter().map(|file| {
                serde_json::json!({
                    "path": file.path,
                    "bytes": file.content.len(),
                })
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (index, file) in files.iter().enumerate() {
        let marker = if index < context.included_count {
            "included".green()
        } else {
            "omitted".yellow()
        };
        println!("{marker:>10}  {}  ({} bytes)", file.path, file.content.len());
    }

    println!();
    println!(
        "{} of {} files fit in the {} character budget ({} characters used)",
        context.included_count,
        files.len(),
        options.budget,
        context.text.len()
    );

    Ok(())
}

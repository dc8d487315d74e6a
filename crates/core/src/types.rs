use serde::Serialize;

/// A file captured from the workspace, used as context for the
/// integration-instructions request.
#[derive(Debug, Clone, Serialize)]
pub struct ScannedFile {
    /// Path relative to the workspace root.
    pub path: String,
    /// Base file name.
    pub name: String,
    /// Full text content of the file.
    pub content: String,
}

/// Workspace context packed under a prompt budget.
#[derive(Debug, Clone)]
pub struct AssembledContext {
    /// Concatenated, labeled file blocks. Always strictly shorter than the
    /// budget it was packed against.
    pub text: String,
    /// How many files made it into `text`.
    pub included_count: usize,
}

/// The utility file produced by one generation run. Created once, written
/// to disk exactly once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    pub service_name: String,
    pub language: String,
    pub filename: String,
    pub code: String,
    pub file_path: String,
}

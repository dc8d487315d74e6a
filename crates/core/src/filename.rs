use std::collections::HashMap;

/// Language to file-extension lookup used when naming generated utilities.
///
/// Kept as explicit data rather than a hard-coded match so tests can
/// substitute a smaller table without touching the naming algorithm.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    entries: HashMap<String, String>,
    fallback: String,
}

impl ExtensionTable {
    pub fn new<I, K, V>(entries: I, fallback: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fallback: fallback.to_string(),
        }
    }

    pub fn extension_for(&self, language: &str) -> &str {
        self.entries
            .get(language)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::new(
            [
                ("python", "py"),
                ("javascript", "js"),
                ("typescript", "ts"),
                ("java", "java"),
                ("go", "go"),
                ("rust", "rs"),
            ],
            "txt",
        )
    }
}

/// Derive the utility file name for a service and target language.
///
/// The service name is lower-cased; each hyphen and each run of whitespace
/// becomes a single underscore; the stem is suffixed with `_util` and the
/// extension looked up from `table`. Pure and total.
pub fn generate_filename(service_name: &str, language: &str, table: &ExtensionTable) -> String {
    let lower = service_name.to_lowercase();
    let mut stem = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            stem.push(if ch == '-' { '_' } else { ch });
        }
    }

    format!("{stem}_util.{}", table.extension_for(language))
}

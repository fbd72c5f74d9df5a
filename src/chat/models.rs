use serde::{Deserialize, Serialize};

use crate::chat::error::CompletionError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

// Wire shapes of the completion worker. The worker forwards to an
// OpenAI-style chat completions API, so the reply lives at
// choices[0].message.content. If the upstream schema changes, only
// these types and into_reply need to follow.

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompletionRequest<'a> {
    pub messages: &'a [Message],
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Takes the first generated choice as the assistant reply.
    pub fn into_reply(self) -> Result<Message, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(Message::assistant)
            .ok_or(CompletionError::MissingChoice)
    }
}

pub fn parse_completion_body(body: &str) -> Result<Message, CompletionError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedBody(e.to_string()))?;
    response.into_reply()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_carries_ordered_messages_with_lowercase_roles() {
        let messages = vec![
            Message::system("You are a helpful assistant."),
            Message::user("Hello"),
            Message::assistant("Hi there"),
        ];
        let body = serde_json::to_value(CompletionRequest { messages: &messages }).unwrap();
        assert_eq!(
            body,
            json!({
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Hello"},
                    {"role": "assistant", "content": "Hi there"},
                ]
            })
        );
    }

    #[test]
    fn first_choice_becomes_assistant_message() {
        let body = r#"{"id":"x","choices":[
            {"index":0,"message":{"role":"assistant","content":"Hi there"}},
            {"index":1,"message":{"role":"assistant","content":"ignored"}}
        ]}"#;
        assert_eq!(parse_completion_body(body), Ok(Message::assistant("Hi there")));
    }

    #[test]
    fn empty_string_reply_is_still_a_reply() {
        let body = r#"{"choices":[{"message":{"content":""}}]}"#;
        assert_eq!(parse_completion_body(body), Ok(Message::assistant("")));
    }

    #[test]
    fn missing_choice_fields_are_rejected() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ] {
            assert_eq!(parse_completion_body(body), Err(CompletionError::MissingChoice), "{body}");
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_completion_body("<html>502 Bad Gateway</html>"),
            Err(CompletionError::MalformedBody(_))
        ));
        assert!(matches!(parse_completion_body(""), Err(CompletionError::MalformedBody(_))));
        assert!(matches!(
            parse_completion_body(r#"{"choices":"nope"}"#),
            Err(CompletionError::MalformedBody(_))
        ));
    }
}

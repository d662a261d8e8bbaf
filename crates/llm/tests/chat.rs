//! Tests for the chat completion wire types.

use mancala_llm::{General, Message, Request, Response, Role};

#[test]
fn request_borrows_model_and_messages() {
    let general = General::new("gpt-4o-mini");
    let messages = [Message::system("sys"), Message::user("hi")];
    let body = serde_json::to_value(Request::new(&general, &messages)).unwrap();

    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "hi");
    assert_eq!(body["max_tokens"], 1024);
    assert!(body.get("response_format").is_none());
}

#[test]
fn request_json_mode_and_unbounded_tokens() {
    let general = General {
        json: true,
        max_tokens: 0,
        ..General::default()
    };
    let body = serde_json::to_value(Request::new(&general, &[])).unwrap();
    assert_eq!(body["response_format"]["type"], "json_object");
    assert!(body.get("max_tokens").is_none());
}

#[test]
fn response_without_content() {
    let response: Response = serde_json::from_str(
        r#"{"choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "length"}]}"#,
    )
    .unwrap();
    assert_eq!(response.text(), None);
    assert_eq!(response.finish_reason(), Some("length"));
    assert_eq!(response.choices[0].message.role, Some(Role::Assistant));
}

#[test]
fn response_without_choices() {
    let response: Response = serde_json::from_str(r#"{"id": "x", "choices": []}"#).unwrap();
    assert_eq!(response.text(), None);
    assert!(response.usage.is_none());
}

use std::str::FromStr;

use nerva::domain::{Conversation, InputOrigin, Message, MessageRole};

#[test]
fn given_new_conversation_when_created_then_it_is_empty() {
    let conversation = Conversation::new(Some("Test".to_string()));

    assert!(conversation.messages.is_empty());
    assert_eq!(conversation.title.as_deref(), Some("Test"));
    assert_eq!(conversation.created_at, conversation.updated_at);
}

#[test]
fn given_messages_when_pushed_then_order_is_preserved_and_timestamp_advances() {
    let mut conversation = Conversation::new(None);
    let created = conversation.updated_at;

    conversation.push(Message::new(
        conversation.id,
        MessageRole::User,
        InputOrigin::Text,
        "Hello".to_string(),
    ));
    conversation.push(Message::new(
        conversation.id,
        MessageRole::Assistant,
        InputOrigin::Text,
        "Hi there".to_string(),
    ));

    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[0].content, "Hello");
    assert_eq!(conversation.messages[1].role, MessageRole::Assistant);
    assert!(conversation.updated_at >= created);
}

#[test]
fn given_populated_conversation_when_cleared_then_messages_are_gone() {
    let mut conversation = Conversation::new(None);
    conversation.push(Message::new(
        conversation.id,
        MessageRole::User,
        InputOrigin::Voice,
        "transcribed words".to_string(),
    ));

    conversation.clear();

    assert!(conversation.messages.is_empty());
}

#[test]
fn given_message_when_created_then_it_carries_origin_and_conversation_id() {
    let conversation = Conversation::new(None);
    let message = Message::new(
        conversation.id,
        MessageRole::User,
        InputOrigin::Vision,
        "What is this?".to_string(),
    );

    assert_eq!(message.conversation_id, conversation.id);
    assert_eq!(message.origin, InputOrigin::Vision);
}

#[test]
fn given_role_strings_when_parsed_then_round_trip_with_display() {
    for role in [MessageRole::User, MessageRole::Assistant] {
        assert_eq!(MessageRole::from_str(role.as_str()).unwrap(), role);
    }
    assert!(MessageRole::from_str("ROBOT").is_err());
}

use line_ox::{
    Action, Area, AudioMessage, BaseSize, CarouselColumn, CarouselTemplate, ConfirmTemplate,
    ImagemapAction, ImagemapMessage, Message, Messages, QuickReply, QuickReplyButton, Sender,
    StickerMessage, TemplateMessage, TextMessage,
};
use serde_json::json;

#[test]
fn single_line_text_yields_one_record() {
    let payloads = Message::from(TextMessage::new("hello").unwrap()).to_payloads();

    assert_eq!(
        serde_json::to_value(&payloads).unwrap(),
        json!([{"type": "text", "text": "hello"}])
    );
}

#[test]
fn quick_reply_is_copied_onto_every_expanded_text_record() {
    let quick_reply = QuickReply::new(vec![QuickReplyButton::new(Action::camera("Camera"))])
        .unwrap();

    let message = TextMessage::lines(["one", "two", "three"])
        .unwrap()
        .with_quick_reply(quick_reply.clone());

    let payloads = Message::from(message).to_payloads();
    assert_eq!(payloads.len(), 3);

    let expected_items = serde_json::to_value(&quick_reply).unwrap();
    for payload in &payloads {
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["quickReply"], expected_items);
    }
}

#[test]
fn serialization_is_deterministic() {
    let message = Message::from(
        TextMessage::lines(["a", "b"])
            .unwrap()
            .with_sender(Sender::builder().name("test1").build()),
    );

    assert_eq!(
        serde_json::to_value(message.to_payloads()).unwrap(),
        serde_json::to_value(message.to_payloads()).unwrap()
    );
}

#[test]
fn wire_keys_are_emitted_in_schema_order() {
    let sticker = Message::from(StickerMessage::new("1", "2").unwrap());
    let serialized = serde_json::to_string(&sticker.to_payloads()[0]).unwrap();
    assert_eq!(
        serialized,
        r#"{"type":"sticker","packageId":"1","stickerId":"2"}"#
    );

    let audio = Message::from(AudioMessage::new("https://example.com/a.m4a", 60000).unwrap());
    let serialized = serde_json::to_string(&audio.to_payloads()[0]).unwrap();
    assert_eq!(
        serialized,
        r#"{"type":"audio","originalContentUrl":"https://example.com/a.m4a","duration":60000}"#
    );
}

#[test]
fn audio_duration_is_a_json_number() {
    let payloads = Message::from(
        AudioMessage::new("https://example.com/original.m4a", 60000).unwrap(),
    )
    .to_payloads();

    let value = serde_json::to_value(&payloads[0]).unwrap();
    assert_eq!(value["duration"], json!(60000));
    assert!(value["duration"].is_u64());
}

#[test]
fn imagemap_actions_preserve_order_and_areas() {
    let message = ImagemapMessage::new(
        "https://example.com/bot/images/rm001",
        "This is an imagemap",
        BaseSize::new(1040, 1040).unwrap(),
        vec![
            ImagemapAction::uri("https://example.com/", Area::new(0, 0, 520, 1040).unwrap()),
            ImagemapAction::message("Hello", Area::new(520, 0, 520, 1040).unwrap()),
        ],
    )
    .unwrap();

    let value = serde_json::to_value(&Message::from(message).to_payloads()[0]).unwrap();

    let actions = value["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["type"], json!("uri"));
    assert_eq!(
        actions[0]["area"],
        json!({"x": 0, "y": 0, "width": 520, "height": 1040})
    );
    assert_eq!(actions[1]["type"], json!("message"));
    assert_eq!(
        actions[1]["area"],
        json!({"x": 520, "y": 0, "width": 520, "height": 1040})
    );
}

#[test]
fn confirm_template_nests_both_actions() {
    let template = ConfirmTemplate::new(
        "Are you sure?",
        vec![
            Action::message("Yes", "yes"),
            Action::message("No", "no"),
        ],
    )
    .unwrap();

    let message = TemplateMessage::new("Confirmation", template).unwrap();
    let value = serde_json::to_value(&Message::from(message).to_payloads()[0]).unwrap();

    assert_eq!(
        value["template"],
        json!({
            "type": "confirm",
            "text": "Are you sure?",
            "actions": [
                {"type": "message", "label": "Yes", "text": "yes"},
                {"type": "message", "label": "No", "text": "no"},
            ],
        })
    );
}

#[test]
fn carousel_template_preserves_column_order() {
    let columns = vec![
        CarouselColumn::new("First", vec![Action::postback("Pick", "item=1")])
            .unwrap()
            .with_title("one"),
        CarouselColumn::new("Second", vec![Action::postback("Pick", "item=2")])
            .unwrap()
            .with_title("two"),
    ];

    let message = TemplateMessage::new(
        "This is a carousel template",
        CarouselTemplate::new(columns).unwrap(),
    )
    .unwrap();

    let value = serde_json::to_value(&Message::from(message).to_payloads()[0]).unwrap();
    let columns = value["template"]["columns"].as_array().unwrap();

    assert_eq!(columns[0]["title"], json!("one"));
    assert_eq!(columns[1]["title"], json!("two"));
    assert_eq!(
        columns[1]["actions"],
        json!([{"type": "postback", "label": "Pick", "data": "item=2"}])
    );
}

#[test]
fn messages_batch_flattens_per_message_expansions() {
    let mut messages = Messages::new();
    messages.push(TextMessage::lines(["one", "two"]).unwrap());
    messages.push(StickerMessage::new("1", "1").unwrap());

    let payloads = messages.to_payloads();
    assert_eq!(payloads.len(), 3);

    let value = serde_json::to_value(&payloads).unwrap();
    assert_eq!(value[0]["type"], json!("text"));
    assert_eq!(value[1]["type"], json!("text"));
    assert_eq!(value[2]["type"], json!("sticker"));
}

#[test]
fn quick_reply_items_preserve_insertion_order() {
    let quick_reply = QuickReply::new(vec![
        QuickReplyButton::new(Action::location("Send location")),
        QuickReplyButton::new(Action::camera("Camera"))
            .with_image_url("https://example.com/camera.png"),
        QuickReplyButton::new(Action::postback("Buy", "action=buy")),
    ])
    .unwrap();

    let message = TextMessage::new("pick one")
        .unwrap()
        .with_quick_reply(quick_reply);

    let value = serde_json::to_value(&Message::from(message).to_payloads()[0]).unwrap();
    let items = value["quickReply"]["items"].as_array().unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["action"]["type"], json!("location"));
    assert_eq!(items[1]["imageUrl"], json!("https://example.com/camera.png"));
    assert_eq!(items[2]["action"]["type"], json!("postback"));
}

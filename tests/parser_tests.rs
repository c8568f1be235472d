use linebridge::errors::BotError;
use linebridge::webhook::events::{Event, MessageContent, Source};
use linebridge::webhook::parser::parse;
use linebridge::webhook::signature::compute;
use serde_json::json;

const SECRET: &str = "parser-test-secret";

fn signed_parse(body: &str) -> Result<Vec<Event>, BotError> {
    let signature = compute(body.as_bytes(), SECRET);
    parse(body, Some(&signature), SECRET)
}

#[test]
fn missing_signature_is_rejected() {
    let body = r#"{"events":[]}"#;
    assert!(matches!(
        parse(body, None, SECRET),
        Err(BotError::InvalidSignature)
    ));
}

#[test]
fn tampered_signature_is_rejected() {
    let body = r#"{"events":[]}"#;
    let signature = compute(b"different body", SECRET);
    assert!(matches!(
        parse(body, Some(&signature), SECRET),
        Err(BotError::InvalidSignature)
    ));
}

#[test]
fn empty_event_list_parses_successfully() {
    let events = signed_parse(r#"{"destination":"Uxxx","events":[]}"#).unwrap();
    assert!(events.is_empty());
}

#[test]
fn malformed_envelope_is_a_parse_error() {
    assert!(matches!(
        signed_parse("not json at all"),
        Err(BotError::ParseError(_))
    ));
    assert!(matches!(
        signed_parse(r#"{"destination":"Uxxx"}"#),
        Err(BotError::ParseError(_))
    ));
}

#[test]
fn text_message_event_is_classified() {
    let body = json!({
        "destination": "Uxxx",
        "events": [{
            "type": "message",
            "replyToken": "rt-1",
            "source": { "type": "user", "userId": "U1" },
            "message": { "type": "text", "id": "m1", "text": "/ping", "quoteToken": "q1" }
        }]
    })
    .to_string();

    let events = signed_parse(&body).unwrap();
    assert_eq!(events.len(), 1);
    let Event::Message {
        reply_token,
        source,
        message,
    } = &events[0]
    else {
        panic!("expected a message event");
    };
    assert_eq!(reply_token, "rt-1");
    assert_eq!(source.user_id(), Some("U1"));
    assert_eq!(
        *message,
        MessageContent::Text {
            id: "m1".to_string(),
            text: "/ping".to_string(),
            quote_token: Some("q1".to_string()),
        }
    );
}

#[test]
fn all_recognized_event_types_are_classified() {
    let body = json!({
        "destination": "Uxxx",
        "events": [
            { "type": "follow", "replyToken": "rt-f", "source": { "type": "user", "userId": "U1" } },
            { "type": "unfollow", "source": { "type": "user", "userId": "U1" } },
            { "type": "join", "replyToken": "rt-j", "source": { "type": "group", "groupId": "G1" } },
            { "type": "leave", "source": { "type": "group", "groupId": "G1" } },
            { "type": "memberJoined", "replyToken": "rt-mj",
              "source": { "type": "group", "groupId": "G1" },
              "joined": { "members": [{ "userId": "U2" }, { "userId": "U3" }] } },
            { "type": "memberLeft",
              "source": { "type": "group", "groupId": "G1" },
              "left": { "members": [{ "userId": "U2" }] } },
            { "type": "postback", "replyToken": "rt-p",
              "source": { "type": "user", "userId": "U1" },
              "postback": { "data": "action=basic_test&type=button" } },
            { "type": "beacon", "replyToken": "rt-b",
              "source": { "type": "user", "userId": "U1" },
              "beacon": { "hwid": "hw-1", "type": "enter" } },
            { "type": "videoPlayComplete", "replyToken": "rt-v",
              "source": { "type": "user", "userId": "U1" },
              "videoPlayComplete": { "trackingId": "track-1" } },
            { "type": "accountLink", "replyToken": "rt-a",
              "source": { "type": "user", "userId": "U1" },
              "link": { "result": "ok", "nonce": "n1" } },
            { "type": "unsend",
              "source": { "type": "user", "userId": "U1" },
              "unsend": { "messageId": "m9" } },
            { "type": "things", "replyToken": "rt-th",
              "source": { "type": "user", "userId": "U1" },
              "things": { "deviceId": "d1", "type": "link" } },
        ]
    })
    .to_string();

    let events = signed_parse(&body).unwrap();
    assert_eq!(events.len(), 12);

    assert!(matches!(&events[0], Event::Follow { reply_token, .. } if reply_token == "rt-f"));
    assert!(matches!(&events[1], Event::Unfollow { .. }));
    assert!(matches!(&events[2], Event::Join { .. }));
    assert!(matches!(&events[3], Event::Leave { .. }));
    assert!(
        matches!(&events[4], Event::MemberJoined { joined, .. } if joined.members.len() == 2)
    );
    assert!(matches!(&events[5], Event::MemberLeft { left, .. } if left.members.len() == 1));
    assert!(
        matches!(&events[6], Event::Postback { postback, .. } if postback.data.starts_with("action="))
    );
    assert!(matches!(&events[7], Event::Beacon { beacon, .. } if beacon.beacon_type == "enter"));
    assert!(matches!(
        &events[8],
        Event::VideoPlayComplete { video_play_complete, .. }
            if video_play_complete.tracking_id == "track-1"
    ));
    assert!(matches!(&events[9], Event::AccountLink { link, .. } if link.result == "ok"));
    assert!(matches!(&events[10], Event::Unsend { unsend, .. } if unsend.message_id == "m9"));
    assert!(
        matches!(&events[11], Event::Things { things, .. } if things.device_id == "d1"
            && things.things_type == "link")
    );

    // Variants without a reply token really have none.
    assert_eq!(events[1].reply_token(), None);
    assert_eq!(events[3].reply_token(), None);
    assert_eq!(events[5].reply_token(), None);
    assert_eq!(events[10].reply_token(), None);
}

#[test]
fn unrecognized_event_type_is_skipped_without_sinking_the_batch() {
    let body = json!({
        "destination": "Uxxx",
        "events": [
            { "type": "membership", "replyToken": "rt-m",
              "source": { "type": "user", "userId": "U1" },
              "membership": { "type": "joined", "membershipId": 1 } },
            { "type": "follow", "replyToken": "rt-f", "source": { "type": "user", "userId": "U1" } },
        ]
    })
    .to_string();

    let events = signed_parse(&body).unwrap();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], Event::Follow { .. }));
}

#[test]
fn location_message_fields_are_populated() {
    let body = json!({
        "destination": "Uxxx",
        "events": [{
            "type": "message",
            "replyToken": "rt-l",
            "source": { "type": "room", "roomId": "R1", "userId": "U1" },
            "message": {
                "type": "location", "id": "m2",
                "title": "Tokyo Station", "address": "1 Chome Marunouchi",
                "latitude": 35.6812, "longitude": 139.7671
            }
        }]
    })
    .to_string();

    let events = signed_parse(&body).unwrap();
    let Event::Message {
        source, message, ..
    } = &events[0]
    else {
        panic!("expected a message event");
    };
    assert_eq!(source.chat_id(), "R1");
    assert!(matches!(source, Source::Room { .. }));
    let MessageContent::Location {
        latitude,
        longitude,
        title,
        ..
    } = message
    else {
        panic!("expected location content");
    };
    assert_eq!(*latitude, 35.6812);
    assert_eq!(*longitude, 139.7671);
    assert_eq!(title.as_deref(), Some("Tokyo Station"));
}

#[test]
fn reparsing_the_same_payload_is_idempotent() {
    let body = json!({
        "destination": "Uxxx",
        "events": [
            { "type": "follow", "replyToken": "rt-f", "source": { "type": "user", "userId": "U1" } },
            { "type": "message", "replyToken": "rt-m",
              "source": { "type": "user", "userId": "U1" },
              "message": { "type": "sticker", "id": "m3", "packageId": "1", "stickerId": "2" } },
        ]
    })
    .to_string();

    let first = signed_parse(&body).unwrap();
    let second = signed_parse(&body).unwrap();
    assert_eq!(first, second);
}

//! Typed model of LINE webhook events.
//!
//! One webhook delivery carries an envelope with zero or more events. Each
//! event is classified here into a closed tagged union keyed by the `type`
//! discriminant; unknown discriminants are skipped by the parser rather
//! than growing an escape-hatch variant.

use serde::Deserialize;

/// Where an event originated: a 1:1 chat, a group, or a multi-person room.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Source {
    #[serde(rename_all = "camelCase")]
    User { user_id: String },
    #[serde(rename_all = "camelCase")]
    Group {
        group_id: String,
        user_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Room {
        room_id: String,
        user_id: Option<String>,
    },
}

impl Source {
    /// The acting user, when the platform discloses one.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Source::User { user_id } => Some(user_id),
            Source::Group { user_id, .. } | Source::Room { user_id, .. } => user_id.as_deref(),
        }
    }

    /// The chat this event belongs to (user, group, or room id).
    #[must_use]
    pub fn chat_id(&self) -> &str {
        match self {
            Source::User { user_id } => user_id,
            Source::Group { group_id, .. } => group_id,
            Source::Room { room_id, .. } => room_id,
        }
    }

    #[must_use]
    pub fn is_user_chat(&self) -> bool {
        matches!(self, Source::User { .. })
    }
}

/// Content of a received message, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    #[serde(rename_all = "camelCase")]
    Text {
        id: String,
        text: String,
        quote_token: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Image { id: String },
    #[serde(rename_all = "camelCase")]
    Sticker {
        id: String,
        package_id: String,
        sticker_id: String,
        sticker_resource_type: Option<String>,
        keywords: Option<Vec<String>>,
    },
    #[serde(rename_all = "camelCase")]
    Location {
        id: String,
        title: Option<String>,
        address: Option<String>,
        latitude: f64,
        longitude: f64,
    },
    #[serde(rename_all = "camelCase")]
    Audio { id: String, duration: Option<u64> },
    #[serde(rename_all = "camelCase")]
    Video { id: String, duration: Option<u64> },
    #[serde(rename_all = "camelCase")]
    File {
        id: String,
        file_name: String,
        file_size: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsendDetail {
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Members {
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostbackDetail {
    /// Opaque data string chosen by whoever built the interactive element.
    pub data: String,
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BeaconDetail {
    pub hwid: String,
    #[serde(rename = "type")]
    pub beacon_type: String,
    pub dm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlayCompleteDetail {
    pub tracking_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountLinkDetail {
    pub result: String,
    pub nonce: Option<String>,
}

/// LINE Things (IoT device) event payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingsDetail {
    pub device_id: String,
    #[serde(rename = "type")]
    pub things_type: String,
}

/// One notification from a webhook delivery.
///
/// Variants without a `reply_token` field (Unsend, Unfollow, Leave,
/// MemberLeft) cannot be replied to - the platform issues no token for
/// them, and the type makes that impossible to get wrong.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        reply_token: String,
        source: Source,
        message: MessageContent,
    },
    #[serde(rename_all = "camelCase")]
    Unsend { source: Source, unsend: UnsendDetail },
    #[serde(rename_all = "camelCase")]
    Follow {
        reply_token: String,
        source: Source,
    },
    #[serde(rename_all = "camelCase")]
    Unfollow { source: Source },
    #[serde(rename_all = "camelCase")]
    Join {
        reply_token: String,
        source: Source,
    },
    #[serde(rename_all = "camelCase")]
    Leave { source: Source },
    #[serde(rename_all = "camelCase")]
    MemberJoined {
        reply_token: String,
        source: Source,
        joined: Members,
    },
    #[serde(rename_all = "camelCase")]
    MemberLeft { source: Source, left: Members },
    #[serde(rename_all = "camelCase")]
    Postback {
        reply_token: String,
        source: Source,
        postback: PostbackDetail,
    },
    #[serde(rename_all = "camelCase")]
    Beacon {
        reply_token: String,
        source: Source,
        beacon: BeaconDetail,
    },
    #[serde(rename_all = "camelCase")]
    VideoPlayComplete {
        reply_token: String,
        source: Source,
        video_play_complete: VideoPlayCompleteDetail,
    },
    #[serde(rename_all = "camelCase")]
    AccountLink {
        reply_token: String,
        source: Source,
        link: AccountLinkDetail,
    },
    #[serde(rename_all = "camelCase")]
    Things {
        reply_token: String,
        source: Source,
        things: ThingsDetail,
    },
}

/// Discriminant-only view of [`Event`], used as the handler registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Message,
    Unsend,
    Follow,
    Unfollow,
    Join,
    Leave,
    MemberJoined,
    MemberLeft,
    Postback,
    Beacon,
    VideoPlayComplete,
    AccountLink,
    Things,
}

impl EventKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Message => "message",
            EventKind::Unsend => "unsend",
            EventKind::Follow => "follow",
            EventKind::Unfollow => "unfollow",
            EventKind::Join => "join",
            EventKind::Leave => "leave",
            EventKind::MemberJoined => "memberJoined",
            EventKind::MemberLeft => "memberLeft",
            EventKind::Postback => "postback",
            EventKind::Beacon => "beacon",
            EventKind::VideoPlayComplete => "videoPlayComplete",
            EventKind::AccountLink => "accountLink",
            EventKind::Things => "things",
        }
    }
}

impl Event {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Message { .. } => EventKind::Message,
            Event::Unsend { .. } => EventKind::Unsend,
            Event::Follow { .. } => EventKind::Follow,
            Event::Unfollow { .. } => EventKind::Unfollow,
            Event::Join { .. } => EventKind::Join,
            Event::Leave { .. } => EventKind::Leave,
            Event::MemberJoined { .. } => EventKind::MemberJoined,
            Event::MemberLeft { .. } => EventKind::MemberLeft,
            Event::Postback { .. } => EventKind::Postback,
            Event::Beacon { .. } => EventKind::Beacon,
            Event::VideoPlayComplete { .. } => EventKind::VideoPlayComplete,
            Event::AccountLink { .. } => EventKind::AccountLink,
            Event::Things { .. } => EventKind::Things,
        }
    }

    /// Reply token, for the variants the platform issues one on.
    #[must_use]
    pub fn reply_token(&self) -> Option<&str> {
        match self {
            Event::Message { reply_token, .. }
            | Event::Follow { reply_token, .. }
            | Event::Join { reply_token, .. }
            | Event::MemberJoined { reply_token, .. }
            | Event::Postback { reply_token, .. }
            | Event::Beacon { reply_token, .. }
            | Event::VideoPlayComplete { reply_token, .. }
            | Event::AccountLink { reply_token, .. }
            | Event::Things { reply_token, .. } => Some(reply_token),
            Event::Unsend { .. }
            | Event::Unfollow { .. }
            | Event::Leave { .. }
            | Event::MemberLeft { .. } => None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &Source {
        match self {
            Event::Message { source, .. }
            | Event::Unsend { source, .. }
            | Event::Follow { source, .. }
            | Event::Unfollow { source, .. }
            | Event::Join { source, .. }
            | Event::Leave { source, .. }
            | Event::MemberJoined { source, .. }
            | Event::MemberLeft { source, .. }
            | Event::Postback { source, .. }
            | Event::Beacon { source, .. }
            | Event::VideoPlayComplete { source, .. }
            | Event::AccountLink { source, .. }
            | Event::Things { source, .. } => source,
        }
    }
}

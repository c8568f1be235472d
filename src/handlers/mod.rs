//! Per-event-type handlers and registry construction.

pub mod beacon;
pub mod follow;
pub mod group;
pub mod location;
pub mod media;
pub mod message;
pub mod misc;
pub mod postback;
pub mod text;
pub mod things;

use std::sync::Arc;

use crate::commands::CommandRegistry;
use crate::dispatch::HandlerRegistry;
use crate::line::client::MessagingApi;
use crate::webhook::events::EventKind;

/// Build the full handler registry. Called once at startup; the result is
/// immutable and shared read-only across request-handling tasks.
#[must_use]
pub fn build_registry(api: Arc<dyn MessagingApi>) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();

    registry.register(
        EventKind::Message,
        Arc::new(message::MessageEventHandler::new(
            api.clone(),
            CommandRegistry::standard(),
        )),
    );
    registry.register(
        EventKind::Follow,
        Arc::new(follow::FollowHandler::new(api.clone())),
    );
    registry.register(EventKind::Unfollow, Arc::new(follow::UnfollowHandler));
    registry.register(
        EventKind::Join,
        Arc::new(group::JoinHandler::new(api.clone())),
    );
    registry.register(EventKind::Leave, Arc::new(group::LeaveHandler));
    registry.register(
        EventKind::MemberJoined,
        Arc::new(group::MemberJoinedHandler::new(api.clone())),
    );
    registry.register(EventKind::MemberLeft, Arc::new(group::MemberLeftHandler));
    registry.register(
        EventKind::Postback,
        Arc::new(postback::PostbackHandler::new(api.clone())),
    );
    registry.register(
        EventKind::Beacon,
        Arc::new(beacon::BeaconHandler::new(api.clone())),
    );
    registry.register(
        EventKind::VideoPlayComplete,
        Arc::new(misc::VideoPlayCompleteHandler::new(api.clone())),
    );
    registry.register(
        EventKind::AccountLink,
        Arc::new(misc::AccountLinkHandler::new(api.clone())),
    );
    registry.register(
        EventKind::Things,
        Arc::new(things::ThingsHandler::new(api)),
    );
    registry.register(EventKind::Unsend, Arc::new(misc::UnsendHandler));

    registry
}

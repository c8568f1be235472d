//! Descriptive card replies for image, sticker, audio, video, and file
//! messages.

use serde_json::Value;

use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::flex;
use crate::webhook::events::MessageContent;

const IMAGE_COLOR: &str = "#6C5CE7";
const STICKER_COLOR: &str = "#E17055";
const AUDIO_COLOR: &str = "#00B894";
const VIDEO_COLOR: &str = "#0984E3";
const FILE_COLOR: &str = "#FDCB6E";

pub async fn handle_image(
    api: &dyn MessagingApi,
    reply_token: &str,
    id: &str,
) -> Result<(), BotError> {
    let hero = flex::header("Image received", "Thanks for the picture!", IMAGE_COLOR);
    let body = flex::body(vec![
        flex::section_title("Details", IMAGE_COLOR),
        flex::separator(),
        flex::info_row("Message ID", id),
    ]);
    let card = flex::message("Image received", flex::bubble(hero, body, None));
    api.reply(reply_token, vec![card]).await
}

pub async fn handle_sticker(
    api: &dyn MessagingApi,
    reply_token: &str,
    package_id: &str,
    sticker_id: &str,
    resource_type: Option<&str>,
    keywords: Option<&[String]>,
) -> Result<(), BotError> {
    let mut rows = vec![
        flex::section_title("Sticker details", STICKER_COLOR),
        flex::separator(),
        flex::info_row("Package", package_id),
        flex::info_row("Sticker", sticker_id),
        flex::info_row("Kind", resource_type.unwrap_or("static")),
    ];
    if let Some(keywords) = keywords
        && !keywords.is_empty()
    {
        rows.push(flex::info_row("Keywords", &keywords.join(", ")));
    }

    let hero = flex::header("Sticker received", "Nice sticker!", STICKER_COLOR);
    let card = flex::message("Sticker received", flex::bubble(hero, flex::body(rows), None));
    api.reply(reply_token, vec![card]).await
}

pub async fn handle_audio(
    api: &dyn MessagingApi,
    reply_token: &str,
    id: &str,
    duration_ms: Option<u64>,
) -> Result<(), BotError> {
    let hero = flex::header("Audio received", "Thanks for the recording!", AUDIO_COLOR);
    let body = flex::body(vec![
        flex::section_title("Details", AUDIO_COLOR),
        flex::separator(),
        flex::info_row("Message ID", id),
        flex::info_row("Length", &format_duration(duration_ms)),
    ]);
    let card = flex::message("Audio received", flex::bubble(hero, body, None));
    api.reply(reply_token, vec![card]).await
}

pub async fn handle_video(
    api: &dyn MessagingApi,
    reply_token: &str,
    id: &str,
    duration_ms: Option<u64>,
) -> Result<(), BotError> {
    let hero = flex::header("Video received", "Thanks for the clip!", VIDEO_COLOR);
    let body = flex::body(vec![
        flex::section_title("Details", VIDEO_COLOR),
        flex::separator(),
        flex::info_row("Message ID", id),
        flex::info_row("Length", &format_duration(duration_ms)),
    ]);
    let card = flex::message("Video received", flex::bubble(hero, body, None));
    api.reply(reply_token, vec![card]).await
}

pub async fn handle_file(
    api: &dyn MessagingApi,
    reply_token: &str,
    file_name: &str,
    file_size: u64,
) -> Result<(), BotError> {
    let hero = flex::header("File received", file_name, FILE_COLOR);
    let body = flex::body(vec![
        flex::section_title("Details", FILE_COLOR),
        flex::separator(),
        flex::info_row("Name", file_name),
        flex::info_row("Size", &format_size(file_size)),
    ]);
    let card: Value = flex::message("File received", flex::bubble(hero, body, None));
    api.reply(reply_token, vec![card]).await
}

fn format_duration(duration_ms: Option<u64>) -> String {
    match duration_ms {
        Some(ms) => format!("{:.1}s", ms as f64 / 1000.0),
        None => "unknown".to_string(),
    }
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.1} MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{bytes:.0} B")
    }
}

/// Route a non-text, non-location message content to its card builder.
pub async fn handle(
    api: &dyn MessagingApi,
    reply_token: &str,
    content: &MessageContent,
) -> Result<(), BotError> {
    match content {
        MessageContent::Image { id } => handle_image(api, reply_token, id).await,
        MessageContent::Sticker {
            package_id,
            sticker_id,
            sticker_resource_type,
            keywords,
            ..
        } => {
            handle_sticker(
                api,
                reply_token,
                package_id,
                sticker_id,
                sticker_resource_type.as_deref(),
                keywords.as_deref(),
            )
            .await
        }
        MessageContent::Audio { id, duration } => {
            handle_audio(api, reply_token, id, *duration).await
        }
        MessageContent::Video { id, duration } => {
            handle_video(api, reply_token, id, *duration).await
        }
        MessageContent::File {
            file_name,
            file_size,
            ..
        } => handle_file(api, reply_token, file_name, *file_size).await,
        MessageContent::Text { .. } | MessageContent::Location { .. } => {
            Err(BotError::HandlerError(
                "media handler received text or location content".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_format_with_sensible_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn durations_format_in_seconds() {
        assert_eq!(format_duration(Some(2500)), "2.5s");
        assert_eq!(format_duration(None), "unknown");
    }
}

//! Line-oriented console transport for running the bot locally.
//!
//! Input lines map to events: `/start`, `/addfanfic`, `tap <callback-data>`;
//! anything else is a text reply. Responses are printed as Markdown followed
//! by their buttons.

use crate::{ActionRef, InteractionEvent, Response, Router};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use vignette_conversation::UserId;

/// Turn one console line into an event.
pub fn parse_line(user: UserId, line: &str) -> InteractionEvent {
    let trimmed = line.trim();
    match trimmed {
        "/start" => InteractionEvent::Start(user),
        "/addfanfic" => InteractionEvent::AddRequest(user),
        _ => match trimmed.strip_prefix("tap ") {
            Some(data) => match ActionRef::parse(data.trim()) {
                Some(action) => InteractionEvent::from_action(user, action),
                None => {
                    debug!(data, "Unknown callback data, showing list");
                    InteractionEvent::Back(user)
                }
            },
            None => InteractionEvent::TextReply(user, line.to_string()),
        },
    }
}

/// Render a response the way the console prints it.
pub fn format_response(response: &Response) -> String {
    let mut out = response.to_markdown();
    for button in response.buttons() {
        out.push_str(&format!("\n  [{}] tap {}", button.label(), button.action()));
    }
    out.push('\n');
    out
}

/// Read events from `reader` until EOF, writing responses to `writer`.
pub async fn run_console<R, W>(
    router: &Router,
    user: UserId,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(%user, "Console transport started");
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_line(user, &line);
        if let Some(response) = router.dispatch(event).await {
            writer.write_all(format_response(&response).as_bytes()).await?;
            writer.flush().await?;
        }
    }
    info!("Console transport finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let user = UserId(9);
        assert_eq!(parse_line(user, "/start"), InteractionEvent::Start(user));
        assert_eq!(parse_line(user, " /addfanfic "), InteractionEvent::AddRequest(user));
        assert_eq!(parse_line(user, "tap fanfic:2"), InteractionEvent::PickTitle(user, 2));
        assert_eq!(parse_line(user, "tap again:0"), InteractionEvent::Reroll(user, 0));
        assert_eq!(parse_line(user, "tap addfanfic"), InteractionEvent::AddRequest(user));
        assert_eq!(parse_line(user, "tap ???"), InteractionEvent::Back(user));
    }

    #[test]
    fn test_other_lines_are_text() {
        let user = UserId(9);
        assert_eq!(
            parse_line(user, "One. Two."),
            InteractionEvent::TextReply(user, "One. Two.".to_string())
        );
    }
}

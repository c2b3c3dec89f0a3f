//! Rendered responses handed back to the transport.

use crate::ActionRef;
use derive_getters::Getters;
use vignette_catalog::Catalog;
use vignette_conversation::Reply;

const MENU_PROMPT: &str = "📚 Pick a story:";
const STALE_MENU_PROMPT: &str = "That story is no longer available. 📚 Pick a story:";
const NOTHING_AVAILABLE: &str = "📂 No stories to choose from.";
const ADMIN_ONLY: &str = "⛔ Admins only.";

/// A button with its encoded action.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Button {
    label: String,
    action: ActionRef,
}

impl Button {
    /// Create a button.
    pub fn new(label: impl Into<String>, action: ActionRef) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// How a quote was reached; selects the header marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum QuoteOrigin {
    /// Chosen from the work list
    #[display("📖")]
    Picked,
    /// Chosen by the random button
    #[display("🎲")]
    Random,
    /// Another quote from the same work
    #[display("🔮")]
    Reroll,
}

/// Work list with one button per title.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Menu {
    prompt: String,
    buttons: Vec<Button>,
}

/// A quote from a work with its follow-up actions.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Quote {
    origin: QuoteOrigin,
    index: usize,
    title: String,
    excerpt: String,
}

impl Quote {
    /// Create a quote for the work at `index`.
    pub fn new(
        origin: QuoteOrigin,
        index: usize,
        title: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            origin,
            index,
            title: title.into(),
            excerpt: excerpt.into(),
        }
    }

    /// "Another quote" and "back to list" buttons.
    pub fn buttons(&self) -> Vec<Button> {
        vec![
            Button::new("🔁 Another quote", ActionRef::Reroll(self.index)),
            Button::new("📚 Pick another story", ActionRef::Back),
        ]
    }
}

/// Response to one interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Work list
    Menu(Menu),
    /// Title and excerpt
    Quote(Quote),
    /// Prompt, confirmation or refusal
    Text(String),
}

impl Response {
    /// Message body using Telegram-style Markdown.
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Menu(menu) => menu.prompt.clone(),
            Self::Quote(quote) => format!(
                "{} *{}*\n\n_{}_",
                quote.origin, quote.title, quote.excerpt
            ),
            Self::Text(text) => text.clone(),
        }
    }

    /// Buttons attached to the message.
    pub fn buttons(&self) -> Vec<Button> {
        match self {
            Self::Menu(menu) => menu.buttons.clone(),
            Self::Quote(quote) => quote.buttons(),
            Self::Text(_) => Vec::new(),
        }
    }
}

/// Work list for the current catalog.
///
/// The add button is only shown to the admin.
pub fn render_menu(catalog: &Catalog, is_admin: bool) -> Response {
    menu_with_prompt(catalog, is_admin, MENU_PROMPT)
}

/// Work list shown after a reference no longer resolved.
pub fn render_stale_menu(catalog: &Catalog, is_admin: bool) -> Response {
    menu_with_prompt(catalog, is_admin, STALE_MENU_PROMPT)
}

fn menu_with_prompt(catalog: &Catalog, is_admin: bool, prompt: &str) -> Response {
    let mut buttons: Vec<Button> = catalog
        .titles()
        .enumerate()
        .map(|(i, title)| Button::new(title, ActionRef::PickWork(i)))
        .collect();
    buttons.push(Button::new("🎲 Random", ActionRef::Random));
    if is_admin {
        buttons.push(Button::new("➕ Add story", ActionRef::AddWork));
    }
    Response::Menu(Menu {
        prompt: prompt.to_string(),
        buttons,
    })
}

/// Response for an empty catalog.
pub fn render_nothing_available() -> Response {
    Response::Text(NOTHING_AVAILABLE.to_string())
}

/// Response for a refused admin action.
pub fn render_denied() -> Response {
    Response::Text(ADMIN_ONLY.to_string())
}

/// Response for a dialogue reply.
pub fn render_reply(reply: &Reply) -> Response {
    let text = match reply {
        Reply::AskTitle => "✍️ Enter the title of the new story:".to_string(),
        Reply::EmptyTitle => "❗ The title cannot be empty. Enter a title.".to_string(),
        Reply::TitleExists { .. } => {
            "❗ That story already exists. Enter another title.".to_string()
        }
        Reply::AskText { .. } => "📜 Now send the text, all in one message.\n\
             It will be split into sentences automatically."
            .to_string(),
        Reply::EmptyText => "❗ No sentences found. Send the text again.".to_string(),
        Reply::Saved { title, sentences } => {
            format!("✅ Story *{title}* saved! Added {sentences} sentences.")
        }
        Reply::TitleTaken { title } => {
            format!("❗ The title *{title}* was taken in the meantime. Nothing was saved.")
        }
        Reply::SaveFailed { title } => {
            format!("⚠️ Could not save *{title}*. Send the text again to retry.")
        }
    };
    Response::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert("First", vec!["a.".to_string()]).unwrap();
        catalog.insert("Second", vec!["b.".to_string()]).unwrap();
        catalog
    }

    fn actions(response: &Response) -> Vec<ActionRef> {
        response.buttons().iter().map(|b| *b.action()).collect()
    }

    #[test]
    fn test_menu_for_regular_user() {
        let menu = render_menu(&catalog(), false);
        assert_eq!(
            actions(&menu),
            vec![
                ActionRef::PickWork(0),
                ActionRef::PickWork(1),
                ActionRef::Random
            ]
        );
        assert_eq!(menu.buttons()[1].label(), "Second");
    }

    #[test]
    fn test_menu_for_admin_has_add_button() {
        let menu = render_menu(&catalog(), true);
        assert_eq!(actions(&menu).last(), Some(&ActionRef::AddWork));
    }

    #[test]
    fn test_menu_for_empty_catalog() {
        let menu = render_menu(&Catalog::new(), false);
        assert_eq!(actions(&menu), vec![ActionRef::Random]);
    }

    #[test]
    fn test_quote_markdown_and_buttons() {
        let response = Response::Quote(Quote::new(QuoteOrigin::Picked, 1, "Second", "b."));
        assert_eq!(response.to_markdown(), "📖 *Second*\n\n_b._");
        assert_eq!(actions(&response), vec![ActionRef::Reroll(1), ActionRef::Back]);
    }

    #[test]
    fn test_quote_origin_markers() {
        let reroll = Response::Quote(Quote::new(QuoteOrigin::Reroll, 0, "T", "x"));
        let random = Response::Quote(Quote::new(QuoteOrigin::Random, 0, "T", "x"));
        assert!(reroll.to_markdown().starts_with("🔮"));
        assert!(random.to_markdown().starts_with("🎲"));
    }

    #[test]
    fn test_saved_reply_names_title_and_count() {
        let response = render_reply(&Reply::Saved {
            title: "My Story".to_string(),
            sentences: 2,
        });
        let text = response.to_markdown();
        assert!(text.contains("My Story"));
        assert!(text.contains('2'));
        assert!(response.buttons().is_empty());
    }
}

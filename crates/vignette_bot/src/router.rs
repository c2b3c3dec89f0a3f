//! Maps interaction events onto catalog reads and dialogue transitions.

use crate::{
    InteractionEvent, Quote, QuoteOrigin, Response, render_denied, render_menu,
    render_nothing_available, render_reply, render_stale_menu,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use vignette_catalog::{CatalogStore, SelectionEngine};
use vignette_conversation::{AddFlow, UserId};
use vignette_error::CatalogErrorKind;

/// Routes events from the transport to the core and renders the result.
#[derive(Debug)]
pub struct Router {
    catalog: Arc<CatalogStore>,
    selection: SelectionEngine,
    flow: AddFlow,
}

impl Router {
    /// Create a router over `catalog` with an entropy-seeded selection engine.
    pub fn new(catalog: Arc<CatalogStore>, admin: Option<UserId>) -> Self {
        Self::with_selection(catalog, admin, SelectionEngine::new())
    }

    /// Create a router with an explicit selection engine.
    pub fn with_selection(
        catalog: Arc<CatalogStore>,
        admin: Option<UserId>,
        selection: SelectionEngine,
    ) -> Self {
        let flow = AddFlow::new(admin, Arc::clone(&catalog));
        Self {
            catalog,
            selection,
            flow,
        }
    }

    /// Shared catalog.
    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    /// Add-work dialogue.
    pub fn flow(&self) -> &AddFlow {
        &self.flow
    }

    /// Handle one event.
    ///
    /// Returns `None` when the event needs no response (free text outside a
    /// dialogue).
    #[instrument(skip(self, event), fields(event = event.name(), user = %event.user()))]
    pub async fn dispatch(&self, event: InteractionEvent) -> Option<Response> {
        let response = match event {
            InteractionEvent::Start(user) | InteractionEvent::Back(user) => self.menu(user).await,
            InteractionEvent::PickTitle(user, index) => {
                self.quote_at(user, index, QuoteOrigin::Picked).await
            }
            InteractionEvent::Reroll(user, index) => {
                self.quote_at(user, index, QuoteOrigin::Reroll).await
            }
            InteractionEvent::Random(_) => self.random_quote().await,
            InteractionEvent::AddRequest(user) => match self.flow.request(user).await {
                Ok(reply) => render_reply(&reply),
                Err(e) => {
                    debug!(error = %e, "Add request refused");
                    render_denied()
                }
            },
            InteractionEvent::TextReply(user, text) => {
                let reply = self.flow.reply(user, &text).await;
                if reply.is_none() {
                    debug!("Text outside a dialogue ignored");
                }
                return reply.map(|r| render_reply(&r));
            }
        };
        Some(response)
    }

    async fn menu(&self, user: UserId) -> Response {
        let catalog = self.catalog.read().await;
        render_menu(&catalog, self.flow.is_admin(user))
    }

    async fn quote_at(&self, user: UserId, index: usize, origin: QuoteOrigin) -> Response {
        let catalog = self.catalog.read().await;
        let quote = catalog.title_at(index).and_then(|title| {
            self.selection
                .random_excerpt(&catalog, title)
                .map(|excerpt| Quote::new(origin, index, title, excerpt))
        });

        match quote {
            Ok(quote) => Response::Quote(quote),
            Err(e) => {
                warn!(index, error = %e, "Stale work reference, showing list again");
                render_stale_menu(&catalog, self.flow.is_admin(user))
            }
        }
    }

    async fn random_quote(&self) -> Response {
        let catalog = self.catalog.read().await;
        let quote = self.selection.random_title(&catalog).and_then(|(index, title)| {
            self.selection
                .random_excerpt(&catalog, title)
                .map(|excerpt| Quote::new(QuoteOrigin::Random, index, title, excerpt))
        });

        match quote {
            Ok(quote) => Response::Quote(quote),
            Err(e) if e.kind == CatalogErrorKind::Empty => render_nothing_available(),
            Err(e) => {
                warn!(error = %e, "Random selection failed");
                render_nothing_available()
            }
        }
    }
}

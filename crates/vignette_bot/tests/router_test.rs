//! Tests for event routing and response rendering.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tempfile::TempDir;
use vignette_bot::{ActionRef, InteractionEvent, QuoteOrigin, Response, Router, run_console};
use vignette_catalog::{Catalog, CatalogStore, JsonFilePersistence, SelectionEngine};
use vignette_conversation::{ConversationState, UserId};

const ADMIN: UserId = UserId(1);
const READER: UserId = UserId(2);

fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .insert("Alpha", vec!["A one.".to_string(), "A two.".to_string()])
        .unwrap();
    catalog.insert("Beta", vec!["B one.".to_string()]).unwrap();
    catalog
}

fn router(dir: &TempDir, catalog: Catalog) -> Router {
    let store = CatalogStore::with_catalog(
        catalog,
        JsonFilePersistence::new(dir.path().join("works.json")),
    );
    Router::with_selection(
        Arc::new(store),
        Some(ADMIN),
        SelectionEngine::with_rng(StdRng::seed_from_u64(42)),
    )
}

fn actions(response: &Response) -> Vec<ActionRef> {
    response.buttons().iter().map(|b| *b.action()).collect()
}

fn expect_quote(response: Option<Response>) -> vignette_bot::Quote {
    match response {
        Some(Response::Quote(quote)) => quote,
        other => panic!("Expected quote, got {other:?}"),
    }
}

#[tokio::test]
async fn test_start_menu_hides_add_for_reader() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    let reader_menu = router.dispatch(InteractionEvent::Start(READER)).await.unwrap();
    assert_eq!(
        actions(&reader_menu),
        vec![ActionRef::PickWork(0), ActionRef::PickWork(1), ActionRef::Random]
    );

    let admin_menu = router.dispatch(InteractionEvent::Back(ADMIN)).await.unwrap();
    assert_eq!(actions(&admin_menu).last(), Some(&ActionRef::AddWork));
}

#[tokio::test]
async fn test_pick_title_returns_member_excerpt() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    let quote = expect_quote(router.dispatch(InteractionEvent::PickTitle(READER, 0)).await);
    assert_eq!(quote.title(), "Alpha");
    assert_eq!(*quote.origin(), QuoteOrigin::Picked);
    assert!(["A one.", "A two."].contains(&quote.excerpt().as_str()));

    let response = Response::Quote(quote);
    assert_eq!(actions(&response), vec![ActionRef::Reroll(0), ActionRef::Back]);
    assert!(response.to_markdown().starts_with("📖 *Alpha*\n\n_"));
}

#[tokio::test]
async fn test_reroll_stays_on_same_work() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    for _ in 0..10 {
        let quote = expect_quote(router.dispatch(InteractionEvent::Reroll(READER, 1)).await);
        assert_eq!(quote.title(), "Beta");
        assert_eq!(quote.excerpt(), "B one.");
        assert_eq!(*quote.origin(), QuoteOrigin::Reroll);
    }
}

#[tokio::test]
async fn test_stale_index_rerenders_menu() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    let response = router
        .dispatch(InteractionEvent::PickTitle(READER, 7))
        .await
        .unwrap();
    match &response {
        Response::Menu(menu) => assert!(menu.prompt().contains("no longer available")),
        other => panic!("Expected menu, got {other:?}"),
    }
    assert_eq!(actions(&response).len(), 3);
}

#[tokio::test]
async fn test_random_on_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, Catalog::new());

    let response = router.dispatch(InteractionEvent::Random(READER)).await;
    assert!(matches!(response, Some(Response::Text(_))));
}

#[tokio::test]
async fn test_random_picks_existing_work() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    for _ in 0..10 {
        let quote = expect_quote(router.dispatch(InteractionEvent::Random(READER)).await);
        let catalog = router.catalog().read().await;
        assert_eq!(catalog.title_at(*quote.index()).unwrap(), quote.title());
        assert!(catalog.get(quote.title()).unwrap().contains(quote.excerpt()));
    }
}

#[tokio::test]
async fn test_reader_add_request_is_denied() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    let response = router
        .dispatch(InteractionEvent::AddRequest(READER))
        .await
        .unwrap();
    assert!(response.to_markdown().contains("Admins only"));
    assert_eq!(
        router.flow().state(READER).await,
        ConversationState::Idle
    );
    assert!(!router.flow().sessions().contains(READER));
}

#[tokio::test]
async fn test_admin_adds_work_through_events() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    router.dispatch(InteractionEvent::AddRequest(ADMIN)).await.unwrap();
    router
        .dispatch(InteractionEvent::TextReply(ADMIN, "My Story".to_string()))
        .await
        .unwrap();
    let confirmation = router
        .dispatch(InteractionEvent::TextReply(ADMIN, "One. Two.".to_string()))
        .await
        .unwrap();
    assert!(confirmation.to_markdown().contains("My Story"));

    let menu = router.dispatch(InteractionEvent::Start(READER)).await.unwrap();
    assert_eq!(menu.buttons()[2].label(), "My Story");
    assert_eq!(*menu.buttons()[2].action(), ActionRef::PickWork(2));

    let quote = expect_quote(router.dispatch(InteractionEvent::PickTitle(READER, 2)).await);
    assert!(["One.", "Two."].contains(&quote.excerpt().as_str()));
}

#[tokio::test]
async fn test_free_text_outside_dialogue_has_no_response() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    let response = router
        .dispatch(InteractionEvent::TextReply(READER, "hello".to_string()))
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_console_session() {
    let dir = TempDir::new().unwrap();
    let router = router(&dir, seeded_catalog());

    let input: &[u8] = b"/start\ntap fanfic:1\n/addfanfic\nConsole Tale\nFirst. Second!\n";
    let mut output = Vec::new();
    run_console(&router, ADMIN, input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("tap fanfic:0"));
    assert!(output.contains("*Beta*"));
    assert!(output.contains("Console Tale"));
    assert!(router.catalog().contains("Console Tale").await);
}

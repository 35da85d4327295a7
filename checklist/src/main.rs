//! Scripted demo for the checklist.
//!
//! Plays the part of the view layer: turns a fixed sequence of gestures
//! into actions, sends them through a store and prints the list after each
//! step. Policies come from `CHECKLIST_INSERT_POSITION` and
//! `CHECKLIST_EDIT_MODE`.

use checklist::{ItemId, ListAction, ListConfig, ListEnvironment, ListReducer, ListState, ListStore};
use checklist_core::environment::SequentialIds;
use checklist_core::reducer::Transition;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(state: &ListState) {
    if state.validation_failed {
        println!("  ! This is required.");
    }
    if state.is_empty() {
        println!("  (empty)");
    }
    for item in &state.items {
        let status = if item.is_checked { "✓" } else { " " };
        let editing = if item.is_editing { " (editing)" } else { "" };
        println!("  [{status}] #{} {}{editing}", item.id, item.display_text());
    }
}

/// Types `name` into the compose field and presses Add
async fn add(store: &ListStore, name: &str) -> Result<Option<ItemId>, Box<dyn std::error::Error>> {
    store
        .send(ListAction::SetComposeText {
            text: name.to_string(),
        })
        .await?;
    added_id(store, store.send(ListAction::Add).await?).await
}

/// Id of the item an `Add` just created, if it was accepted
async fn added_id(
    store: &ListStore,
    transition: Transition,
) -> Result<Option<ItemId>, Box<dyn std::error::Error>> {
    if transition != Transition::Changed {
        return Ok(None);
    }
    Ok(store
        .state(|s| s.items.iter().map(|item| item.id).max())
        .await)
}

async fn show(store: &ListStore, heading: &str) {
    println!("\n{heading}");
    let state = store.snapshot().await;
    render(&state);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checklist=info,checklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ListConfig::from_env()?;
    tracing::info!(?config, "Loaded configuration");

    println!("=== What to buy ===");

    let env = ListEnvironment::with_config(Arc::new(SequentialIds::new()), config);
    let store = ListStore::new(ListState::new(), ListReducer::new(), env);

    let eggs = add(&store, "eggs").await?.ok_or("eggs was not added")?;
    let bread = add(&store, "bread").await?.ok_or("bread was not added")?;
    add(&store, "milk").await?;
    show(&store, "After adding eggs, bread, milk:").await;

    if add(&store, "   ").await?.is_none() {
        tracing::info!("Blank name refused");
    }
    show(&store, "After submitting a blank name:").await;

    store.send(ListAction::ToggleChecked { id: eggs }).await?;
    show(&store, "After checking eggs:").await;

    store.send(ListAction::ToggleEdit { id: bread }).await?;
    store
        .send(ListAction::EditInput {
            id: bread,
            text: "rye bread".to_string(),
        })
        .await?;
    show(&store, "While renaming bread:").await;

    store.send(ListAction::CommitEdit { id: bread }).await?;
    show(&store, "After pressing Enter:").await;

    store.send(ListAction::Delete { id: eggs }).await?;
    // The view may still hold the old id; this is ignored
    store.send(ListAction::Delete { id: eggs }).await?;
    show(&store, "After deleting eggs:").await;

    let state = store.snapshot().await;
    println!("\nSnapshot handed to the view:");
    println!("{}", serde_json::to_string_pretty(&state)?);

    store.shutdown();
    println!("\n=== Demo Complete ===");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;
    use checklist_testing::test_ids;

    fn new_store() -> ListStore {
        ListStore::new(
            ListState::new(),
            ListReducer::new(),
            ListEnvironment::new(Arc::new(test_ids())),
        )
    }

    #[tokio::test]
    async fn test_add_reports_new_id() {
        let store = new_store();
        assert_eq!(add(&store, "eggs").await.unwrap(), Some(ItemId::new(0)));
        assert_eq!(add(&store, "bread").await.unwrap(), Some(ItemId::new(1)));
    }

    #[tokio::test]
    async fn test_blank_add_reports_nothing() {
        let store = new_store();
        add(&store, "eggs").await.unwrap();

        assert_eq!(add(&store, "   ").await.unwrap(), None);
        assert_eq!(store.state(ListState::len).await, 1);
    }
}

//! Tasklist demo binary
//!
//! Walks the full interaction surface of the to-do list: categories,
//! todos, toggling, renames and deletes with their cascades, and the
//! filtered, locale-sorted view.

use std::sync::Arc;

use tasklist::{
    CategoryFilter, Collator, TodoAction, TodoEnvironment, TodoReducer, TodoState,
};
use tasklist_core::environment::SystemClock;
use tasklist_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_visible(state: &TodoState, collator: &Collator) {
    for todo in state.visible_todos(collator) {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{}] ({}) {}", status, todo.category, todo.text);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Tasklist ===\n");

    let env = TodoEnvironment::new(Arc::new(SystemClock));
    let mut store = Store::new(TodoState::new(), TodoReducer::new(), env);
    let collator = Collator::new();

    // Set up categories
    println!("Creating categories Work and Home...");
    store.send(TodoAction::AddCategory {
        name: "Work".to_string(),
    });
    store.send(TodoAction::AddCategory {
        name: "Home".to_string(),
    });

    // Create some todos
    println!("Creating todos...\n");
    store.send(TodoAction::AddTodo {
        text: "Write quarterly report".to_string(),
        category: Some("Work".to_string()),
    });
    store.send(TodoAction::AddTodo {
        text: "Buy milk".to_string(),
        category: Some("Home".to_string()),
    });
    store.send(TodoAction::AddTodo {
        text: "Water the plants".to_string(),
        category: None,
    });

    println!("All todos, sorted by category:");
    print_visible(store.state(), &collator);

    // Complete one
    let first_id = store.state().todos[0].id;
    println!("\nCompleting the first todo...");
    store.send(TodoAction::ToggleTodo { id: first_id });

    // Filter to Home
    println!("\nFiltering to Home:");
    store.send(TodoAction::SetFilter {
        filter: CategoryFilter::Category("Home".to_string()),
    });
    print_visible(store.state(), &collator);

    // Rename Home; the filter follows the rename
    println!("\nRenaming Home to Errands:");
    store.send(TodoAction::RenameCategory {
        old: "Home".to_string(),
        new: "Errands".to_string(),
    });
    print_visible(store.state(), &collator);

    // Delete Work; its todos fall back to Uncategorized
    println!("\nDeleting Work and showing everything:");
    store.send(TodoAction::SetFilter {
        filter: CategoryFilter::All,
    });
    store.send(TodoAction::DeleteCategory {
        name: "Work".to_string(),
    });
    print_visible(store.state(), &collator);

    println!(
        "\nCompleted: {}/{}",
        store.state().completed_count(),
        store.state().count()
    );

    println!("\nFinal state:");
    println!("{}", serde_json::to_string_pretty(store.state())?);

    println!("\n=== Demo Complete ===");
    Ok(())
}

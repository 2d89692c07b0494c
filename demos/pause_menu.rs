//! Pause Menu
//!
//! This example drives the built-in gameplay/pause/options states through a
//! scripted sequence of button presses, one press per frame.
//!
//! Key concepts:
//! - Overlay states pushed with `add_state` and popped with `remove_state`
//! - Collaborators injected through the layer's context
//! - Named events dispatched to listeners that know nothing about states
//! - Snapshotting the history for a save file
//!
//! Run with: RUST_LOG=statelayer=debug cargo run --example pause_menu

use statelayer::menu::{self, HeadlessMenu, MenuButton, Panel};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Pause Menu Example ===\n");

    let mut ui = HeadlessMenu::new();
    ui.events
        .add_listener(menu::ON_PAUSE, || println!("  [audio] muffling music"));

    let mut layer = menu::menu_layer().unwrap();
    layer.start(&mut ui).unwrap();

    let script = [
        None,
        Some(MenuButton::Pause),
        None,
        Some(MenuButton::Options),
        Some(MenuButton::Cancel),
        Some(MenuButton::Cancel),
        None,
    ];

    for (frame, press) in script.into_iter().enumerate() {
        if let Some(button) = press {
            ui.press(button);
        }
        layer.update(&mut ui).unwrap();
        layer.fixed_update(&mut ui).unwrap();
        ui.end_frame();

        println!(
            "frame {frame}: pressed {:<9} history {:?} time scale {} pause panel {} options panel {}",
            press.map_or("-".to_string(), |b| format!("{b:?}")),
            layer.history_names(),
            ui.time_scale,
            ui.is_visible(Panel::Pause),
            ui.is_visible(Panel::Options),
        );

        if frame == 3 {
            let snapshot = layer.snapshot();
            println!("  saved snapshot:\n{}", snapshot.to_json().unwrap());
        }
    }

    println!("\nVisited:");
    for record in layer.journal().records() {
        println!(
            "  {:?}: {} -> {} (depth {})",
            record.kind,
            record.from.as_deref().unwrap_or("<none>"),
            record.to.as_deref().unwrap_or("<none>"),
            record.depth
        );
    }

    println!("\n=== Example Complete ===");
}

//! Ready-made gameplay and menu states.
//!
//! `Gameplay` sits at the bottom of a layer, `Pause` is pushed over it and
//! `Option` over `Pause`. Cancel always pops one level.
//!
//! # Example
//!
//! ```rust
//! use statelayer::menu::{self, HeadlessMenu, MenuButton, Panel};
//!
//! let mut ui = HeadlessMenu::new();
//! let mut layer = menu::menu_layer().unwrap();
//! layer.start(&mut ui).unwrap();
//!
//! ui.press(MenuButton::Pause);
//! layer.update(&mut ui).unwrap();
//! ui.end_frame();
//!
//! assert_eq!(layer.current_state_name(), Some(menu::PAUSE));
//! assert!(ui.is_visible(Panel::Pause));
//! assert_eq!(ui.time_scale, 0.0);
//! ```

mod context;
mod gameplay;
mod option;
mod pause;

pub use context::{HeadlessMenu, MenuButton, MenuContext, Panel};
pub use gameplay::GameplayState;
pub use option::OptionState;
pub use pause::PauseState;

use crate::builder::{BuildError, LayerBuilder};
use crate::layer::{LayerError, StateMachineLayer};

pub const GAMEPLAY: &str = "Gameplay";
pub const PAUSE: &str = "Pause";
pub const OPTION: &str = "Option";

/// Dispatched every time the pause menu opens.
pub const ON_PAUSE: &str = "OnPause";

/// Register the three menu states on an existing layer.
pub fn register_menu_states<C: MenuContext>(
    layer: &mut StateMachineLayer<C>,
) -> Result<(), LayerError> {
    layer.register_state(GAMEPLAY, GameplayState::new())?;
    layer.register_state(PAUSE, PauseState::new())?;
    layer.register_state(OPTION, OptionState::new())?;
    Ok(())
}

/// A layer named "Menus" that starts in gameplay.
pub fn menu_layer<C: MenuContext>() -> Result<StateMachineLayer<C>, BuildError> {
    LayerBuilder::new()
        .name("Menus")
        .default_state(GAMEPLAY)
        .state(GAMEPLAY, GameplayState::new())
        .state(PAUSE, PauseState::new())
        .state(OPTION, OptionState::new())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{State, Transition};
    use std::cell::Cell;
    use std::rc::Rc;

    fn frame(
        layer: &mut StateMachineLayer<HeadlessMenu>,
        ui: &mut HeadlessMenu,
        press: Option<MenuButton>,
    ) {
        if let Some(button) = press {
            ui.press(button);
        }
        layer.update(ui).unwrap();
        ui.end_frame();
    }

    fn started() -> (StateMachineLayer<HeadlessMenu>, HeadlessMenu) {
        let mut ui = HeadlessMenu::new();
        let mut layer = menu_layer().unwrap();
        layer.start(&mut ui).unwrap();
        (layer, ui)
    }

    #[test]
    fn starts_in_gameplay_at_full_speed() {
        let (layer, ui) = started();
        assert_eq!(layer.current_state_name(), Some(GAMEPLAY));
        assert_eq!(ui.time_scale, 1.0);
        assert!(ui.visible.is_empty());
    }

    #[test]
    fn pausing_freezes_time_and_announces_it() {
        let (mut layer, mut ui) = started();
        let pauses = Rc::new(Cell::new(0));
        let seen = Rc::clone(&pauses);
        ui.events.add_listener(ON_PAUSE, move || seen.set(seen.get() + 1));

        frame(&mut layer, &mut ui, Some(MenuButton::Pause));

        assert_eq!(layer.history_names(), vec![Some(PAUSE), Some(GAMEPLAY)]);
        assert_eq!(ui.time_scale, 0.0);
        assert!(ui.is_visible(Panel::Pause));
        assert_eq!(ui.focus_resets, 1);
        assert_eq!(pauses.get(), 1);
    }

    #[test]
    fn options_open_over_pause_and_cancel_back() {
        let (mut layer, mut ui) = started();
        frame(&mut layer, &mut ui, Some(MenuButton::Pause));

        frame(&mut layer, &mut ui, Some(MenuButton::Options));
        assert_eq!(
            layer.history_names(),
            vec![Some(OPTION), Some(PAUSE), Some(GAMEPLAY)]
        );
        assert!(ui.is_visible(Panel::Options));
        assert!(!ui.is_visible(Panel::Pause));

        frame(&mut layer, &mut ui, Some(MenuButton::Cancel));
        assert_eq!(layer.current_state_name(), Some(PAUSE));
        assert!(!ui.is_visible(Panel::Options));
        assert!(ui.is_visible(Panel::Pause));
    }

    #[test]
    fn cancel_from_pause_resumes_gameplay() {
        let (mut layer, mut ui) = started();
        frame(&mut layer, &mut ui, Some(MenuButton::Pause));

        frame(&mut layer, &mut ui, Some(MenuButton::Cancel));

        assert_eq!(layer.history_names(), vec![Some(GAMEPLAY)]);
        assert_eq!(ui.time_scale, 1.0);
        assert!(ui.visible.is_empty());
    }

    #[test]
    fn idle_frames_change_nothing() {
        let (mut layer, mut ui) = started();
        for _ in 0..3 {
            frame(&mut layer, &mut ui, None);
        }
        assert_eq!(layer.history_names(), vec![Some(GAMEPLAY)]);
        assert_eq!(layer.journal().len(), 1);
    }

    #[test]
    fn requested_options_open_once_without_a_button() {
        let mut ui = HeadlessMenu::new();
        let mut pause = PauseState::new();
        pause.request_options();

        pause.handle_input(&mut ui);
        assert_eq!(pause.handle_should_change_state(&mut ui), Transition::add(OPTION));

        pause.handle_input(&mut ui);
        assert_eq!(pause.handle_should_change_state(&mut ui), Transition::None);
    }

    #[test]
    fn requested_options_reach_option_state_through_the_layer() {
        let mut pause = PauseState::new();
        pause.request_options();
        let mut layer = LayerBuilder::new()
            .default_state(GAMEPLAY)
            .state(GAMEPLAY, GameplayState::new())
            .state(PAUSE, pause)
            .state(OPTION, OptionState::new())
            .build()
            .unwrap();
        let mut ui = HeadlessMenu::new();
        layer.start(&mut ui).unwrap();

        frame(&mut layer, &mut ui, Some(MenuButton::Pause));
        frame(&mut layer, &mut ui, None);

        assert_eq!(
            layer.history_names(),
            vec![Some(OPTION), Some(PAUSE), Some(GAMEPLAY)]
        );
        assert!(ui.is_visible(Panel::Options));
    }

    #[test]
    fn menu_states_register_on_existing_layer() {
        let mut layer: StateMachineLayer<HeadlessMenu> = StateMachineLayer::new("Overlay");
        register_menu_states(&mut layer).unwrap();

        let mut ui = HeadlessMenu::new();
        layer.add_state(PAUSE, &mut ui).unwrap();

        assert_eq!(layer.history_names(), vec![Some(PAUSE)]);
        assert_eq!(ui.time_scale, 0.0);
    }
}

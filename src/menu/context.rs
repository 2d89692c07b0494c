//! What menu states need from the game around them.

use crate::events::EventDispatcher;
use std::collections::HashSet;

/// UI panels toggled by the menu states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Pause,
    Options,
}

/// Buttons the menu states react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuButton {
    /// Back out of the current menu
    Cancel,
    /// Open the pause menu during gameplay
    Pause,
    /// The "Options" entry of the pause menu
    Options,
}

/// Collaborators reached by the menu states.
///
/// Implemented by the game's glue code; every call is fire-and-forget.
pub trait MenuContext {
    /// Scale applied to game time; 0 freezes the simulation.
    fn set_time_scale(&mut self, scale: f32);

    fn set_panel_visible(&mut self, panel: Panel, visible: bool);

    /// Move UI focus back to the menu's default selection.
    fn focus_default_selection(&mut self);

    /// Whether `button` went down this frame.
    fn button_down(&self, button: MenuButton) -> bool;

    fn events(&mut self) -> &mut EventDispatcher;
}

/// In-memory [`MenuContext`] for tools, tests and headless runs.
#[derive(Debug)]
pub struct HeadlessMenu {
    pub time_scale: f32,
    pub visible: HashSet<Panel>,
    pub pressed: HashSet<MenuButton>,
    pub focus_resets: usize,
    pub events: EventDispatcher,
}

impl Default for HeadlessMenu {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            visible: HashSet::new(),
            pressed: HashSet::new(),
            focus_resets: 0,
            events: EventDispatcher::new(),
        }
    }
}

impl HeadlessMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `button` down for the next frame.
    pub fn press(&mut self, button: MenuButton) {
        self.pressed.insert(button);
    }

    /// Release every button; call once per frame after the layer update.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }
}

impl MenuContext for HeadlessMenu {
    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        if visible {
            self.visible.insert(panel);
        } else {
            self.visible.remove(&panel);
        }
    }

    fn focus_default_selection(&mut self) {
        self.focus_resets += 1;
    }

    fn button_down(&self, button: MenuButton) -> bool {
        self.pressed.contains(&button)
    }

    fn events(&mut self) -> &mut EventDispatcher {
        &mut self.events
    }
}

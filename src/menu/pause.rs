//! The pause menu overlay.

use super::context::{MenuButton, MenuContext, Panel};
use super::{ON_PAUSE, OPTION};
use crate::core::{State, Transition};

/// Freezes the game and shows the pause panel.
///
/// Cancel pops back to whatever was running underneath; the options button
/// pushes the options menu on top.
#[derive(Debug, Default)]
pub struct PauseState {
    should_unpause: bool,
    wants_options: bool,
}

impl PauseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the options menu on the next decision, as the options button in
    /// the pause panel does. Consumed by that decision.
    pub fn request_options(&mut self) {
        self.wants_options = true;
    }
}

impl<C: MenuContext> State<C> for PauseState {
    fn enter(&mut self, ctx: &mut C) {
        ctx.set_time_scale(0.0);
        ctx.set_panel_visible(Panel::Pause, true);
        ctx.events().dispatch(ON_PAUSE);
        ctx.focus_default_selection();
    }

    fn exit(&mut self, ctx: &mut C) {
        ctx.set_panel_visible(Panel::Pause, false);
    }

    fn handle_input(&mut self, ctx: &mut C) {
        self.should_unpause = ctx.button_down(MenuButton::Cancel);
        self.wants_options |= ctx.button_down(MenuButton::Options);
    }

    fn handle_should_change_state(&mut self, _ctx: &mut C) -> Transition {
        let wants_options = std::mem::take(&mut self.wants_options);
        if self.should_unpause {
            Transition::Remove
        } else if wants_options {
            Transition::add(OPTION)
        } else {
            Transition::None
        }
    }
}

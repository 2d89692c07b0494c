//! The options menu overlay.

use super::context::{MenuButton, MenuContext, Panel};
use crate::core::{State, Transition};

/// Options menu shown over the pause menu. Cancel returns to it.
#[derive(Debug, Default)]
pub struct OptionState {
    should_close: bool,
}

impl OptionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: MenuContext> State<C> for OptionState {
    fn enter(&mut self, ctx: &mut C) {
        ctx.set_panel_visible(Panel::Options, true);
        ctx.focus_default_selection();
    }

    fn exit(&mut self, ctx: &mut C) {
        ctx.set_panel_visible(Panel::Options, false);
    }

    fn handle_input(&mut self, ctx: &mut C) {
        self.should_close = ctx.button_down(MenuButton::Cancel);
    }

    fn handle_should_change_state(&mut self, _ctx: &mut C) -> Transition {
        if self.should_close {
            Transition::Remove
        } else {
            Transition::None
        }
    }
}

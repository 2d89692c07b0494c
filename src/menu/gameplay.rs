//! Regular play underneath the menus.

use super::context::{MenuButton, MenuContext};
use super::PAUSE;
use crate::core::{State, Transition};

/// Regular play. Runs game time at full speed and opens the pause menu on
/// request.
#[derive(Debug, Default)]
pub struct GameplayState {
    should_pause: bool,
}

impl GameplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: MenuContext> State<C> for GameplayState {
    fn enter(&mut self, ctx: &mut C) {
        ctx.set_time_scale(1.0);
    }

    fn exit(&mut self, _ctx: &mut C) {}

    fn handle_input(&mut self, ctx: &mut C) {
        self.should_pause = ctx.button_down(MenuButton::Pause);
    }

    fn handle_should_change_state(&mut self, _ctx: &mut C) -> Transition {
        if self.should_pause {
            Transition::add(PAUSE)
        } else {
            Transition::None
        }
    }
}

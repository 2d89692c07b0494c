//! A layer of states driven by a history stack.

use crate::checkpoint::{CheckpointError, LayerSnapshot};
use crate::config::LayerConfig;
use crate::core::{
    HistoryStack, State, StateId, Transition, TransitionJournal, TransitionKind, TransitionRecord,
};
use crate::layer::error::LayerError;
use crate::layer::registry::StateRegistry;
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Owns a set of named states and a history stack of active ones.
///
/// The top of the history is the current state; states beneath it are
/// suspended and resume when the states above them are removed. An external
/// driver calls [`start`](Self::start) once, then [`update`](Self::update)
/// every frame and [`fixed_update`](Self::fixed_update) every physics step.
///
/// `C` is the context handed to every state hook.
///
/// # Example
///
/// ```rust
/// use statelayer::core::{State, Transition};
/// use statelayer::layer::StateMachineLayer;
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// struct Named(&'static str);
///
/// impl State<Log> for Named {
///     fn enter(&mut self, ctx: &mut Log) {
///         ctx.0.push(format!("{}.enter", self.0));
///     }
///     fn exit(&mut self, ctx: &mut Log) {
///         ctx.0.push(format!("{}.exit", self.0));
///     }
///     fn handle_should_change_state(&mut self, _ctx: &mut Log) -> Transition {
///         Transition::None
///     }
/// }
///
/// let mut log = Log::default();
/// let mut layer = StateMachineLayer::new("Menus");
/// layer.register_state("Pause", Named("Pause")).unwrap();
/// layer.register_state("Option", Named("Option")).unwrap();
///
/// layer.start(&mut log).unwrap();
/// layer.add_state("Pause", &mut log).unwrap();
/// layer.add_state("Option", &mut log).unwrap();
/// assert_eq!(layer.history_names(), vec![Some("Option"), Some("Pause")]);
///
/// layer.remove_state(&mut log);
/// assert_eq!(layer.current_state_name(), Some("Pause"));
/// assert_eq!(
///     log.0,
///     ["Pause.enter", "Pause.exit", "Option.enter", "Option.exit", "Pause.enter"]
/// );
/// ```
pub struct StateMachineLayer<C> {
    config: LayerConfig,
    registry: StateRegistry<C>,
    history: HistoryStack,
    journal: TransitionJournal,
    started: bool,
}

impl<C> Default for StateMachineLayer<C> {
    fn default() -> Self {
        Self::with_config(LayerConfig::default())
    }
}

impl<C> StateMachineLayer<C> {
    /// An empty layer with the given label and no default state.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(LayerConfig::new(name))
    }

    pub fn with_config(config: LayerConfig) -> Self {
        let journal = TransitionJournal::with_capacity(config.journal_capacity);
        Self {
            config,
            registry: StateRegistry::new(),
            history: HistoryStack::new(),
            journal,
            started: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn default_state(&self) -> &str {
        &self.config.default_state
    }

    /// Set the state `start` activates. An empty name means none.
    pub fn set_default_state(&mut self, name: impl Into<String>) {
        self.config.default_state = name.into();
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Register `state` under `name`.
    ///
    /// Registering a name twice replaces the mapping (last writer wins)
    /// unless the layer was configured with `strict_registration`, in which
    /// case the second registration fails. History is never touched.
    pub fn register_state<S>(
        &mut self,
        name: impl Into<String>,
        state: S,
    ) -> Result<StateId, LayerError>
    where
        S: State<C> + 'static,
    {
        self.register_boxed(name, Box::new(state))
    }

    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        state: Box<dyn State<C>>,
    ) -> Result<StateId, LayerError> {
        let name = name.into();
        if self.config.strict_registration && self.registry.contains_name(&name) {
            return Err(LayerError::DuplicateState {
                layer: self.config.name.clone(),
                name,
            });
        }

        let (id, replaced) = self.registry.insert(name.clone(), state);
        if let Some(old) = replaced {
            warn!(
                layer = %self.config.name,
                state = %name,
                %old,
                new = %id,
                "state re-registered, replacing mapping"
            );
        } else {
            trace!(layer = %self.config.name, state = %name, %id, "state registered");
        }
        Ok(id)
    }

    /// Handle currently registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<StateId> {
        self.registry.lookup(name)
    }

    /// Resolve a transition target by name. The empty name resolves to no
    /// state; any other unknown name is an error.
    pub fn resolve(&self, name: &str) -> Result<Option<StateId>, LayerError> {
        if name.is_empty() {
            return Ok(None);
        }
        self.require(name).map(Some)
    }

    /// Names currently registered, in no particular order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.registry.name_of(id)
    }

    pub fn state(&self, id: StateId) -> Option<&(dyn State<C> + 'static)> {
        self.registry.get(id)
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut (dyn State<C> + 'static)> {
        self.registry.get_mut(id)
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.history.current()
    }

    pub fn current_state_name(&self) -> Option<&str> {
        self.current_state().and_then(|id| self.registry.name_of(id))
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// History as registration names, top first.
    pub fn history_names(&self) -> Vec<Option<&str>> {
        self.history
            .slots()
            .iter()
            .map(|slot| slot.and_then(|id| self.registry.name_of(id)))
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    pub fn journal(&self) -> &TransitionJournal {
        &self.journal
    }

    /// Activate the default state, if one is configured.
    ///
    /// Meant to run once, after every state has been registered.
    pub fn start(&mut self, ctx: &mut C) -> Result<(), LayerError> {
        if self.started {
            warn!(layer = %self.config.name, "layer started more than once");
        }
        self.started = true;

        if !self.config.has_default_state() {
            debug!(layer = %self.config.name, "started without a default state");
            return Ok(());
        }
        let default_state = self.config.default_state.clone();
        self.change_state(&default_state, ctx)
    }

    /// Per-frame tick: input, transition decision, then logic.
    ///
    /// The transition returned by `handle_should_change_state` is executed
    /// before `logic_update`, which then runs on whichever state is current
    /// afterwards. A failing transition aborts the tick.
    pub fn update(&mut self, ctx: &mut C) -> Result<(), LayerError> {
        let Some(id) = self.current_state() else {
            trace!(layer = %self.config.name, "update with no active state");
            return Ok(());
        };

        let request = {
            let state = self.require_id(id)?;
            state.handle_input(ctx);
            state.handle_should_change_state(ctx)
        };
        self.apply(request, ctx)?;

        if let Some(id) = self.current_state() {
            self.require_id(id)?.logic_update(ctx);
        }
        Ok(())
    }

    /// Per-physics-step tick.
    pub fn fixed_update(&mut self, ctx: &mut C) -> Result<(), LayerError> {
        let Some(id) = self.current_state() else {
            trace!(layer = %self.config.name, "fixed update with no active state");
            return Ok(());
        };
        self.require_id(id)?.physics_update(ctx);
        Ok(())
    }

    /// Execute a transition request.
    pub fn apply(&mut self, request: Transition, ctx: &mut C) -> Result<(), LayerError> {
        match request {
            Transition::None => Ok(()),
            Transition::Change(name) => self.change_state(&name, ctx),
            Transition::Add(name) => self.add_state(&name, ctx),
            Transition::Remove => {
                self.remove_state(ctx);
                Ok(())
            }
        }
    }

    /// Replace the current state with the one registered under `name`.
    ///
    /// The empty name clears the top. Unknown names fail without touching
    /// the history.
    pub fn change_state(&mut self, name: &str, ctx: &mut C) -> Result<(), LayerError> {
        let target = self.resolve(name)?;
        self.change_state_to(target, ctx)
    }

    /// Replace the top of the history in place; depth is unchanged.
    ///
    /// Naming the current state again is a no-op: it is neither exited nor
    /// re-entered.
    pub fn change_state_to(
        &mut self,
        target: Option<StateId>,
        ctx: &mut C,
    ) -> Result<(), LayerError> {
        if let Some(id) = target {
            self.require_id(id)?;
        }

        let current = self.current_state();
        if current == target {
            trace!(layer = %self.config.name, "change to current state ignored");
            return Ok(());
        }

        if let Some(id) = current {
            self.exit(id, ctx);
        }
        self.history.set_current(target);
        if let Some(id) = target {
            self.enter(id, ctx);
        }

        self.record(TransitionKind::Change, current, target);
        Ok(())
    }

    /// Push the state registered under `name`, suspending the current one.
    ///
    /// If there is no active state the new one takes the empty top slot
    /// instead of growing the stack. Adding the state that is already
    /// current is a no-op.
    pub fn add_state(&mut self, name: &str, ctx: &mut C) -> Result<(), LayerError> {
        let target = self.require(name)?;

        let current = self.current_state();
        if current == Some(target) {
            debug!(
                layer = %self.config.name,
                state = name,
                "state is already current, not re-adding"
            );
            return Ok(());
        }

        match current {
            Some(id) => {
                self.exit(id, ctx);
                self.history.push(target);
            }
            None => self.history.set_current(Some(target)),
        }
        self.enter(target, ctx);

        self.record(TransitionKind::Add, current, Some(target));
        Ok(())
    }

    /// Pop the current state and resume the one beneath it.
    ///
    /// Returns `false`, without calling any hook, when there is no active
    /// state.
    pub fn remove_state(&mut self, ctx: &mut C) -> bool {
        let Some(current) = self.current_state() else {
            trace!(layer = %self.config.name, "remove with no active state");
            return false;
        };

        self.exit(current, ctx);
        self.history.pop();
        let resumed = self.current_state();
        if let Some(id) = resumed {
            self.enter(id, ctx);
        }

        self.record(TransitionKind::Remove, Some(current), resumed);
        true
    }

    pub fn snapshot(&self) -> LayerSnapshot {
        let history = self
            .history_names()
            .into_iter()
            .map(|slot| slot.map(str::to_string))
            .collect();
        LayerSnapshot::new(self.config.name.clone(), history)
    }

    /// Replace the history with the one in `snapshot` without running any
    /// hook. Nothing changes if a name cannot be resolved.
    pub fn restore(&mut self, snapshot: &LayerSnapshot) -> Result<(), CheckpointError> {
        snapshot.check_version()?;

        let slots = snapshot
            .history
            .iter()
            .map(|slot| match slot {
                Some(name) => self
                    .registry
                    .lookup(name)
                    .map(Some)
                    .ok_or_else(|| CheckpointError::UnknownState { name: name.clone() }),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.history = HistoryStack::from_slots(slots);
        debug!(
            layer = %self.config.name,
            snapshot = %snapshot.id,
            depth = self.history.depth(),
            "history restored"
        );
        Ok(())
    }

    /// Restore `snapshot` as a transition: the current state is exited and
    /// the restored top is entered. If the restored top is already current
    /// no hook runs and nothing is recorded.
    pub fn resume(&mut self, snapshot: &LayerSnapshot, ctx: &mut C) -> Result<(), CheckpointError> {
        let previous = self.history.clone();
        self.restore(snapshot)?;
        let restored = std::mem::replace(&mut self.history, previous);

        let current = self.current_state();
        if current == restored.current() {
            trace!(layer = %self.config.name, "resumed top is already current");
            self.history = restored;
            return Ok(());
        }

        if let Some(id) = current {
            self.exit(id, ctx);
        }
        self.history = restored;
        let resumed = self.current_state();
        if let Some(id) = resumed {
            self.enter(id, ctx);
        }

        self.record(TransitionKind::Change, current, resumed);
        Ok(())
    }

    fn require(&self, name: &str) -> Result<StateId, LayerError> {
        self.registry
            .lookup(name)
            .ok_or_else(|| LayerError::UnknownState {
                layer: self.config.name.clone(),
                name: name.to_string(),
            })
    }

    fn require_id(&mut self, id: StateId) -> Result<&mut (dyn State<C> + 'static), LayerError> {
        let layer = &self.config.name;
        self.registry
            .get_mut(id)
            .ok_or_else(|| LayerError::InvalidStateId {
                layer: layer.clone(),
                id,
            })
    }

    fn enter(&mut self, id: StateId, ctx: &mut C) {
        if let Some(state) = self.registry.get_mut(id) {
            state.enter(ctx);
        }
    }

    fn exit(&mut self, id: StateId, ctx: &mut C) {
        if let Some(state) = self.registry.get_mut(id) {
            state.exit(ctx);
        }
    }

    fn record(&mut self, kind: TransitionKind, from: Option<StateId>, to: Option<StateId>) {
        let from = from.and_then(|id| self.registry.name_of(id)).map(str::to_string);
        let to = to.and_then(|id| self.registry.name_of(id)).map(str::to_string);
        let depth = self.history.depth();

        debug!(
            layer = %self.config.name,
            ?kind,
            from = from.as_deref().unwrap_or("<none>"),
            to = to.as_deref().unwrap_or("<none>"),
            depth,
            "transition"
        );

        self.journal.record(TransitionRecord {
            kind,
            from,
            to,
            depth,
            timestamp: Utc::now(),
        });
    }
}

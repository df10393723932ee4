#![forbid(unsafe_code)]

//! Elm-style runtime for terminal applications.
//!
//! The program runtime manages the update/view loop, handling events and
//! rendering frames. It separates state ([`Model`]) from rendering (`view`)
//! and provides a command pattern ([`Cmd`]) for side effects.
//!
//! Time is never read from the wall clock inside a model. The runtime owns a
//! [`Clock`] and asks the model for its [`Model::next_deadline`]; once that
//! deadline passes the model receives [`Event::Tick`]. The same loop runs
//! headlessly in [`ProgramSimulator`](crate::simulator::ProgramSimulator).
//!
//! # Example
//!
//! ```ignore
//! use wordgrid_core::event::Event;
//! use wordgrid_runtime::program::{Cmd, Model};
//! use wordgrid_widgets::Frame;
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             _ => Msg::Increment,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Increment => { self.count += 1; Cmd::none() }
//!             Msg::Quit => Cmd::quit(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {}
//! }
//! ```

use std::fmt;
#[cfg(feature = "crossterm")]
use std::io;
#[cfg(feature = "crossterm")]
use std::sync::{Arc, mpsc};
use std::time::Duration;

#[cfg(feature = "crossterm")]
use wordgrid_core::clock::{Clock, SystemClock};
use wordgrid_core::event::Event;
use wordgrid_widgets::Frame;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// Messages represent actions that update the model state.
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Called once when the program starts. Return commands to execute
    /// initial side effects like loading data.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);

    /// Earliest pending deadline on the runtime clock. The runtime sends
    /// [`Event::Tick`] once it has passed.
    fn next_deadline(&self) -> Option<Duration> {
        None
    }
}

/// Work executed off the update loop. Its result comes back as a message.
pub type TaskFn<M> = Box<dyn FnOnce() -> M + Send + 'static>;

/// Metadata for a background task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSpec {
    /// Name used in logs.
    pub name: Option<String>,
}

impl TaskSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("task")
    }
}

/// Commands represent side effects to be executed by the runtime.
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Execute commands in order; stops at `Quit`.
    Batch(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Run a closure in the background and deliver its message.
    Task(TaskSpec, TaskFn<M>),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch, collapsing empty and single-element lists.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// Unnamed background task.
    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(TaskSpec::new(), Box::new(f))
    }

    /// Named background task.
    pub fn task_named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(TaskSpec::new().with_name(name), Box::new(f))
    }

    /// Whether this is [`Cmd::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M: fmt::Debug> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Quit => f.write_str("Quit"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Task(spec, _) => f.debug_tuple("Task").field(spec).finish(),
        }
    }
}

/// Where the UI is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    /// Alternate screen, whole terminal.
    AltScreen,
    /// Below the shell prompt, `ui_height` rows tall.
    Inline { ui_height: u16 },
}

/// Configuration for the program runtime.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Screen mode (inline or alternate screen).
    pub screen_mode: ScreenMode,
    /// Upper bound on how long the loop blocks waiting for input.
    pub poll_timeout: Duration,
    /// Enable mouse support.
    pub mouse: bool,
    /// Enable bracketed paste.
    pub bracketed_paste: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            screen_mode: ScreenMode::Inline { ui_height: 24 },
            poll_timeout: Duration::from_millis(50),
            mouse: false,
            bracketed_paste: true,
        }
    }
}

impl ProgramConfig {
    /// Create config for fullscreen applications.
    pub fn fullscreen() -> Self {
        Self {
            screen_mode: ScreenMode::AltScreen,
            ..Default::default()
        }
    }

    /// Create config for inline mode with specified height.
    pub fn inline(height: u16) -> Self {
        Self {
            screen_mode: ScreenMode::Inline { ui_height: height },
            ..Default::default()
        }
    }

    /// Enable mouse support.
    #[must_use]
    pub fn with_mouse(mut self) -> Self {
        self.mouse = true;
        self
    }

    /// Set the maximum input poll timeout.
    #[must_use]
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }
}

/// How long to block for input: until the model's next deadline, capped
/// at `max`.
pub(crate) fn poll_timeout(deadline: Option<Duration>, now: Duration, max: Duration) -> Duration {
    match deadline {
        Some(at) => at.saturating_sub(now).min(max),
        None => max,
    }
}

/// Message dispatch shared by the terminal program and the simulator.
pub(crate) struct Dispatcher<M: Model> {
    pub(crate) model: M,
    pub(crate) running: bool,
    pub(crate) dirty: bool,
}

impl<M: Model> Dispatcher<M> {
    pub(crate) fn new(model: M) -> Self {
        Self {
            model,
            running: true,
            dirty: true,
        }
    }

    /// Execute `cmd`, handing background tasks to `spawn`.
    pub(crate) fn execute<S>(&mut self, cmd: Cmd<M::Message>, spawn: &mut S)
    where
        S: FnMut(TaskSpec, TaskFn<M::Message>),
    {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                tracing::debug!("quit requested");
                self.running = false;
            }
            Cmd::Msg(m) => self.dispatch(m, spawn),
            Cmd::Batch(cmds) => {
                for c in cmds {
                    if !self.running {
                        break;
                    }
                    self.execute(c, spawn);
                }
            }
            Cmd::Task(spec, f) => {
                tracing::debug!(task = spec.label(), "task scheduled");
                spawn(spec, f);
            }
        }
    }

    pub(crate) fn dispatch<S>(&mut self, msg: M::Message, spawn: &mut S)
    where
        S: FnMut(TaskSpec, TaskFn<M::Message>),
    {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute(cmd, spawn);
    }
}

/// The program runtime that manages the update/view loop on a real terminal.
#[cfg(feature = "crossterm")]
pub struct Program<M: Model> {
    dispatcher: Dispatcher<M>,
    config: ProgramConfig,
    clock: Arc<dyn Clock>,
}

#[cfg(feature = "crossterm")]
impl<M: Model> Program<M> {
    /// Program on the system clock.
    pub fn new(model: M, config: ProgramConfig) -> Self {
        Self::with_clock(model, config, Arc::new(SystemClock::new()))
    }

    /// Program on an explicit clock; share it with the model so deadlines
    /// agree.
    pub fn with_clock(model: M, config: ProgramConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            dispatcher: Dispatcher::new(model),
            config,
            clock,
        }
    }

    /// Run the main event loop until the model quits.
    ///
    /// Handles, in order: initialization, task results, due deadlines,
    /// rendering, and input polling. The terminal is restored on return,
    /// including on error.
    pub fn run(&mut self) -> io::Result<()> {
        use crate::terminal::{Presenter, TerminalSession};

        let session = TerminalSession::new(&self.config)?;
        let (width, height) = session.size()?;
        let mut presenter = Presenter::new(io::stdout(), session.origin());
        let (tx, rx) = mpsc::channel::<M::Message>();
        let mut spawn = |spec: TaskSpec, f: TaskFn<M::Message>| {
            let tx = tx.clone();
            let name = spec.label().to_string();
            let spawned = std::thread::Builder::new()
                .name(name.clone())
                .spawn(move || {
                    // The receiver only disappears at shutdown.
                    let _ = tx.send(f());
                });
            if let Err(err) = spawned {
                tracing::error!(task = %name, error = %err, "failed to spawn task");
            }
        };

        let cmd = self.dispatcher.model.init();
        self.dispatcher.execute(cmd, &mut spawn);
        let mut size = (width, session.ui_height(height));
        self.dispatcher
            .dispatch(Event::Resize { width: size.0, height: size.1 }.into(), &mut spawn);

        while self.dispatcher.running {
            while let Ok(msg) = rx.try_recv() {
                self.dispatcher.dispatch(msg, &mut spawn);
            }

            let now = self.clock.now();
            if self.dispatcher.model.next_deadline().is_some_and(|at| at <= now) {
                self.dispatcher.dispatch(Event::Tick.into(), &mut spawn);
            }
            if !self.dispatcher.running {
                break;
            }

            if self.dispatcher.dirty {
                let mut frame = Frame::new(size.0, size.1);
                self.dispatcher.model.view(&mut frame);
                presenter.present(&frame)?;
                self.dispatcher.dirty = false;
            }

            let timeout = poll_timeout(
                self.dispatcher.model.next_deadline(),
                self.clock.now(),
                self.config.poll_timeout,
            );
            if session.poll_event(timeout)? {
                let Some(event) = session.read_event()? else {
                    continue;
                };
                if let Event::Resize { width, height } = event {
                    size = (width, session.ui_height(height));
                    presenter.invalidate();
                    let resized = Event::Resize {
                        width: size.0,
                        height: size.1,
                    };
                    self.dispatcher.dispatch(resized.into(), &mut spawn);
                    continue;
                }
                self.dispatcher.dispatch(event.into(), &mut spawn);
            }
        }

        presenter.finish(size.1)?;
        Ok(())
    }

    pub fn model(&self) -> &M {
        &self.dispatcher.model
    }

    pub fn is_running(&self) -> bool {
        self.dispatcher.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Msg {
        A,
        B,
    }

    impl From<Event> for Msg {
        fn from(_: Event) -> Self {
            Msg::A
        }
    }

    #[test]
    fn batch_collapses() {
        assert!(Cmd::<Msg>::batch(vec![]).is_none());
        assert!(matches!(Cmd::batch(vec![Cmd::None, Cmd::Msg(Msg::B)]), Cmd::Msg(Msg::B)));
        assert!(matches!(
            Cmd::batch(vec![Cmd::<Msg>::Quit, Cmd::Quit]),
            Cmd::Batch(v) if v.len() == 2
        ));
    }

    #[test]
    fn task_named_carries_name() {
        let cmd: Cmd<Msg> = Cmd::task_named("load", || Msg::B);
        let Cmd::Task(spec, f) = cmd else {
            panic!("expected task");
        };
        assert_eq!(spec.name.as_deref(), Some("load"));
        assert_eq!(f(), Msg::B);
    }

    #[test]
    fn debug_hides_closure() {
        let cmd: Cmd<Msg> = Cmd::task(|| Msg::A);
        assert_eq!(format!("{cmd:?}"), "Task(TaskSpec { name: None })");
    }

    #[test]
    fn config_builders() {
        let config = ProgramConfig::fullscreen()
            .with_mouse()
            .with_poll_timeout(Duration::from_millis(10));
        assert_eq!(config.screen_mode, ScreenMode::AltScreen);
        assert!(config.mouse);
        assert_eq!(config.poll_timeout, Duration::from_millis(10));
        assert_eq!(
            ProgramConfig::inline(12).screen_mode,
            ScreenMode::Inline { ui_height: 12 }
        );
    }

    #[test]
    fn poll_timeout_waits_for_deadline() {
        let max = Duration::from_millis(50);
        let ms = Duration::from_millis;
        assert_eq!(poll_timeout(None, ms(0), max), max);
        assert_eq!(poll_timeout(Some(ms(120)), ms(100), max), ms(20));
        assert_eq!(poll_timeout(Some(ms(90)), ms(100), max), Duration::ZERO);
        assert_eq!(poll_timeout(Some(ms(900)), ms(100), max), max);
    }
}

#![forbid(unsafe_code)]

//! Deterministic headless program simulator.
//!
//! [`ProgramSimulator`] runs a [`Model`] without a terminal. Time comes from
//! a [`ManualClock`] that only moves when the test says so, and background
//! tasks run on the calling thread once the update that scheduled them
//! returns. Tasks can also be held and completed in any order, which is how
//! tests reproduce slow or out-of-order loads.
//!
//! ```ignore
//! let mut sim = ProgramSimulator::new(MyModel::default());
//! sim.init();
//! sim.inject_event(Event::key(KeyCode::Char('x')));
//! sim.advance_ms(250);
//! assert!(sim.render().contains_text("x"));
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use wordgrid_core::clock::{Clock, ManualClock};
use wordgrid_core::event::{Event, KeyCode};
use wordgrid_widgets::Frame;

use crate::program::{Cmd, Dispatcher, Model, TaskFn, TaskSpec};

/// Stop delivering ticks after this many in one `advance`; a model whose
/// deadline never moves would otherwise spin forever.
const MAX_TICKS_PER_ADVANCE: usize = 1024;

/// Headless driver for a [`Model`].
pub struct ProgramSimulator<M: Model> {
    dispatcher: Dispatcher<M>,
    clock: ManualClock,
    size: (u16, u16),
    tasks: VecDeque<(TaskSpec, TaskFn<M::Message>)>,
    hold_tasks: bool,
    ticks: u64,
}

impl<M: Model> ProgramSimulator<M> {
    /// Simulator on a fresh clock with an 80x24 screen.
    pub fn new(model: M) -> Self {
        Self::with_clock(model, ManualClock::new())
    }

    /// Simulator on `clock`; hand a clone of the same clock to the model.
    pub fn with_clock(model: M, clock: ManualClock) -> Self {
        Self {
            dispatcher: Dispatcher::new(model),
            clock,
            size: (80, 24),
            tasks: VecDeque::new(),
            hold_tasks: false,
            ticks: 0,
        }
    }

    /// Set the screen size used by [`ProgramSimulator::init`] and
    /// [`ProgramSimulator::render`].
    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    /// Run `init` and announce the screen size, like the terminal program.
    pub fn init(&mut self) {
        let cmd = self.dispatcher.model.init();
        self.execute(cmd);
        let (width, height) = self.size;
        self.inject_event(Event::Resize { width, height });
    }

    /// Deliver a message.
    pub fn send(&mut self, msg: M::Message) {
        let tasks = &mut self.tasks;
        let mut spawn = |spec: TaskSpec, f: TaskFn<M::Message>| tasks.push_back((spec, f));
        self.dispatcher.dispatch(msg, &mut spawn);
        self.settle();
    }

    fn execute(&mut self, cmd: Cmd<M::Message>) {
        let tasks = &mut self.tasks;
        let mut spawn = |spec: TaskSpec, f: TaskFn<M::Message>| tasks.push_back((spec, f));
        self.dispatcher.execute(cmd, &mut spawn);
        self.settle();
    }

    /// Deliver a terminal event.
    pub fn inject_event(&mut self, event: Event) {
        self.send(event.into());
    }

    /// Deliver several events in order.
    pub fn inject_events<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.inject_event(event);
        }
    }

    /// Press a key.
    pub fn press(&mut self, code: KeyCode) {
        self.inject_event(Event::key(code));
    }

    /// Type each character of `text` as a key press.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Left-click at `(x, y)`.
    pub fn click(&mut self, x: u16, y: u16) {
        self.inject_event(Event::click(x, y));
    }

    /// Change the screen size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.inject_event(Event::Resize { width, height });
    }

    /// Move time forward by `by`, delivering [`Event::Tick`] at each model
    /// deadline that falls inside the interval, in order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.clock.now().saturating_add(by);
        for _ in 0..MAX_TICKS_PER_ADVANCE {
            if !self.dispatcher.running {
                break;
            }
            let Some(at) = self.dispatcher.model.next_deadline() else {
                break;
            };
            if at > target {
                break;
            }
            let now = self.clock.now();
            if at > now {
                self.clock.advance(at - now);
            }
            self.ticks += 1;
            self.inject_event(Event::Tick);
        }
        let now = self.clock.now();
        if target > now {
            self.clock.advance(target - now);
        }
    }

    /// [`ProgramSimulator::advance`] in milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Render the current view.
    pub fn render(&self) -> Frame {
        let mut frame = Frame::new(self.size.0, self.size.1);
        self.dispatcher.model.view(&mut frame);
        frame
    }

    /// Keep scheduled tasks queued until [`ProgramSimulator::run_task`].
    pub fn hold_tasks(&mut self, hold: bool) {
        self.hold_tasks = hold;
        if !hold {
            self.settle();
        }
    }

    /// Names of queued tasks, oldest first.
    pub fn pending_tasks(&self) -> Vec<String> {
        self.tasks
            .iter()
            .map(|(spec, _)| spec.name.clone().unwrap_or_default())
            .collect()
    }

    /// Run the queued task at `index` and deliver its message. Returns
    /// `false` if there is no such task.
    pub fn run_task(&mut self, index: usize) -> bool {
        let Some((spec, f)) = self.tasks.remove(index) else {
            return false;
        };
        tracing::debug!(task = ?spec.name, "simulated task");
        let msg = f();
        self.send(msg);
        true
    }

    fn settle(&mut self) {
        if self.hold_tasks {
            return;
        }
        while self.dispatcher.running {
            let Some((spec, f)) = self.tasks.pop_front() else {
                break;
            };
            tracing::debug!(task = ?spec.name, "simulated task");
            let msg = f();
            let tasks = &mut self.tasks;
            let mut spawn = |spec: TaskSpec, f: TaskFn<M::Message>| tasks.push_back((spec, f));
            self.dispatcher.dispatch(msg, &mut spawn);
        }
    }

    pub fn model(&self) -> &M {
        &self.dispatcher.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.dispatcher.model
    }

    pub fn is_running(&self) -> bool {
        self.dispatcher.running
    }

    /// Current simulated time.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// The simulator's clock.
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#![forbid(unsafe_code)]

//! The application model.
//!
//! [`App`] owns the one [`BitState`] and the one [`WordlistIndex`]. Input
//! is routed to exactly one view, the view mutates the state it is handed,
//! and `refresh` pushes the derived snapshot back out to every view
//! and the announcer. Nothing else writes to a view.
//!
//! # Focus and input routing
//!
//! Focus cycles grid → word input → reset → theme → language with Tab and
//! Shift-Tab. Leaving the word input, by key or by click, is a blur and
//! validates the typed word. While the input has focus it receives every
//! key except Tab, Shift-Tab, F1 and Ctrl+C; otherwise `r`, `t`, `l`, `?`
//! and `q` are global shortcuts. An open help overlay takes all input until
//! it closes, and an open language picker takes all keys.

use std::sync::Arc;
use std::time::Duration;

use wordgrid_core::clock::Clock;
use wordgrid_core::event::{Event, KeyCode, KeyEvent};
use wordgrid_core::geometry::Rect;
use wordgrid_core::timer::earliest;
use wordgrid_core::{BOX_COUNT, BitState, LoadError, WordlistIndex, bit_weight};
use wordgrid_i18n::{Language, StringCatalog, builtin_catalog, keys};
use wordgrid_runtime::{Cmd, Model, StorageBackend};
use wordgrid_style::{Style, Theme, ThemeMode};
use wordgrid_widgets::frame::text_width;
use wordgrid_widgets::{
    Announcement, Announcer, BlockedNudge, Button, Frame, GridAction, GridView, InputAction,
    LanguagePicker, Modal, NotificationQueue, NotificationStack, PickerAction, Readout,
    ReadoutLabels, Toast, ToastId, ToastSeverity, Validation, Widget, WordInputView,
};

use crate::config::{LANGUAGE_KEY, THEME_KEY, Timings};
use crate::layout::{Layout, Widths};
use crate::loader::{LoadSequencer, LoadTicket, WordlistSource, load_wordlist};
use crate::sync::SyncController;

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    Input,
    Reset,
    Theme,
    Language,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Grid,
        Focus::Input,
        Focus::Reset,
        Focus::Theme,
        Focus::Language,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Application messages.
#[derive(Debug)]
pub enum Msg {
    /// Terminal input or a tick.
    Event(Event),
    /// A background wordlist load finished.
    WordlistLoaded {
        ticket: LoadTicket,
        language: Language,
        result: Result<WordlistIndex, LoadError>,
    },
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

/// The word selector.
pub struct App {
    clock: Arc<dyn Clock>,
    source: Arc<dyn WordlistSource>,
    storage: Box<dyn StorageBackend>,
    timings: Timings,
    catalog: StringCatalog,

    bits: BitState,
    wordlist: WordlistIndex,
    language: Language,
    theme_mode: ThemeMode,
    loads: LoadSequencer,
    load_error: Option<String>,
    sync: SyncController,

    grid: GridView,
    input: WordInputView,
    readout: Readout,
    announcer: Announcer,
    nudge: BlockedNudge,
    toasts: NotificationQueue,
    picker: LanguagePicker,
    help: Modal,
    reset_button: Button,
    theme_button: Button,
    language_button: Button,
    focus: Focus,
    screen: Rect,
}

impl App {
    /// An English, dark-themed app with default timings.
    pub fn new(
        source: Arc<dyn WordlistSource>,
        storage: Box<dyn StorageBackend>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let timings = Timings::default();
        let mut app = Self {
            clock,
            source,
            storage,
            input: Self::build_input(&timings),
            announcer: Announcer::new(timings.announcement_clear()),
            nudge: BlockedNudge::new(timings.nudge_threshold, timings.nudge_window()),
            timings,
            catalog: builtin_catalog(),
            bits: BitState::new(),
            wordlist: WordlistIndex::new(),
            language: Language::default(),
            theme_mode: ThemeMode::default(),
            loads: LoadSequencer::new(),
            load_error: None,
            sync: SyncController::new(),
            grid: GridView::new(),
            readout: Readout::new(),
            toasts: NotificationQueue::default(),
            picker: LanguagePicker::new(Language::default()),
            help: Modal::default(),
            reset_button: Button::default(),
            theme_button: Button::default(),
            language_button: Button::default(),
            focus: Focus::Grid,
            screen: Rect::from_size(80, 24),
        };
        app.apply_theme();
        app.apply_locale();
        app.show_focus();
        app
    }

    /// Start with `language` (builder).
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self.picker.set_active(language);
        self.apply_locale();
        self
    }

    /// Start with `mode` (builder).
    #[must_use]
    pub fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = mode;
        self.apply_theme();
        self
    }

    /// Use `timings` (builder).
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.input = Self::build_input(&timings);
        self.announcer = Announcer::new(timings.announcement_clear());
        self.nudge = BlockedNudge::new(timings.nudge_threshold, timings.nudge_window());
        self.timings = timings;
        self.apply_theme();
        self.apply_locale();
        self
    }

    fn build_input(timings: &Timings) -> WordInputView {
        WordInputView::new().with_timings(
            timings.suggestion_hide(),
            timings.input_error_clear(),
            timings.max_suggestions,
        )
    }

    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn text(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.catalog.text(self.language.ui_locale(), key, args)
    }

    fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }

    fn theme_label(&self) -> String {
        let key = match self.theme_mode {
            ThemeMode::Dark => keys::THEME_DARK,
            ThemeMode::Light => keys::THEME_LIGHT,
        };
        self.text(key, &[])
    }

    fn apply_theme(&mut self) {
        let theme = self.theme();
        self.grid.set_theme(theme);
        self.input.set_theme(theme);
        self.readout.set_theme(theme);
        self.announcer.set_theme(theme);
        self.picker.set_theme(theme);
        self.help.set_theme(theme);
        for button in [
            &mut self.reset_button,
            &mut self.theme_button,
            &mut self.language_button,
        ] {
            button.set_style(theme.button());
        }
        let label = self.theme_label();
        self.theme_button.set_label(label);
    }

    /// Push every localized string into the views.
    fn apply_locale(&mut self) {
        let labels = ReadoutLabels {
            selected_word: self.text(keys::SELECTED_WORD, &[]),
            index: self.text(keys::INDEX, &[]),
            binary: self.text(keys::BINARY_LABEL, &[]),
            pick_pattern: self.text(keys::PICK_PATTERN, &[]),
            out_of_range: self.text(keys::OUT_OF_RANGE, &[]),
        };
        let box_labels = (0..BOX_COUNT)
            .map(|i| {
                let n = (i + 1).to_string();
                let weight = bit_weight(i).to_string();
                self.text(keys::BOX_LABEL, &[("n", n.as_str()), ("weight", weight.as_str())])
            })
            .collect();
        let placeholder = self.text(keys::WORD_INPUT_PLACEHOLDER, &[]);
        let help_body = [keys::HELP_BODY, keys::INFO_TEXT, keys::PRIVACY_TOOLTIP]
            .map(|key| self.text(key, &[]))
            .join("\n\n");
        let help_title = self.text(keys::HELP_TITLE, &[]);
        let help_hint = self.text(keys::HELP_CLOSE, &[]);
        let reset = self.text(keys::RESET_BUTTON, &[]);
        let theme = self.theme_label();

        self.readout.set_labels(labels);
        self.grid.set_labels(box_labels);
        self.input.set_placeholder(placeholder);
        self.help.set_text(help_title, help_body, help_hint);
        self.reset_button.set_label(reset);
        self.theme_button.set_label(theme);
        self.language_button.set_label(self.picker.button_label());
    }

    fn show_focus(&mut self) {
        self.grid.set_focused(self.focus == Focus::Grid);
        self.reset_button.set_focused(self.focus == Focus::Reset);
        self.theme_button.set_focused(self.focus == Focus::Theme);
        self.language_button.set_focused(self.focus == Focus::Language);
    }

    /// Move focus. Leaving the word input validates it.
    fn set_focus(&mut self, target: Focus) {
        if self.focus == target {
            return;
        }
        let leaving_input = self.focus == Focus::Input;
        self.focus = target;
        if target == Focus::Input {
            self.input.focus(&self.wordlist);
        }
        self.show_focus();
        if leaving_input {
            let now = self.now();
            let validation = self.input.blur(now, &self.wordlist, &mut self.bits);
            self.after_validation(validation);
        }
    }

    /// Re-derive the snapshot, update every view, and announce the result.
    fn refresh(&mut self) {
        let now = self.now();
        let snapshot = self.sync.refresh(
            &self.bits,
            &self.wordlist,
            now,
            &mut [&mut self.grid, &mut self.input, &mut self.readout],
        );
        let announcement = Announcement::for_display(&snapshot.display);
        let text = self.announcement_text(&announcement);
        self.announcer.announce(announcement, text, now);
    }

    fn announcement_text(&self, announcement: &Announcement) -> String {
        match announcement {
            Announcement::Selected { word, index } => {
                let index = index.to_string();
                self.text(
                    keys::ANNOUNCE_SELECTED,
                    &[("word", word.as_str()), ("index", index.as_str())],
                )
            }
            Announcement::Empty => self.text(keys::ANNOUNCE_EMPTY, &[]),
            Announcement::OutOfRange { value } => {
                let value = value.to_string();
                self.text(keys::ANNOUNCE_OUT_OF_RANGE, &[("value", value.as_str())])
            }
        }
    }

    fn notify(
        &mut self,
        id: ToastId,
        key: &str,
        args: &[(&str, &str)],
        severity: ToastSeverity,
        duration: Duration,
    ) {
        let toast = Toast::new(id, self.text(key, args))
            .severity(severity)
            .duration(duration)
            .theme(self.theme());
        let now = self.now();
        self.toasts.show(toast, now);
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            tracing::warn!(backend = self.storage.name(), key, %err, "preference not saved");
        }
    }

    fn after_grid(&mut self, action: GridAction) {
        match action {
            GridAction::Toggled { .. } => self.refresh(),
            GridAction::Blocked { index } => {
                let now = self.now();
                if self.nudge.record(now) {
                    tracing::debug!(index, "repeated blocked activation");
                    let ttl = self.timings.toast();
                    self.notify(
                        ToastId::DISABLED_BOX,
                        keys::DISABLED_BOX_MESSAGE,
                        &[],
                        ToastSeverity::Info,
                        ttl,
                    );
                }
            }
            GridAction::Moved | GridAction::Ignored => {}
        }
    }

    fn after_validation(&mut self, validation: Validation) {
        match validation {
            Validation::Cleared => {}
            Validation::Accepted { .. } => self.refresh(),
            Validation::Rejected => {
                self.refresh();
                let ttl = self.timings.toast();
                self.notify(
                    ToastId::INVALID_WORD,
                    keys::INVALID_WORD_MESSAGE,
                    &[],
                    ToastSeverity::Warning,
                    ttl,
                );
            }
        }
    }

    fn after_input(&mut self, action: InputAction) {
        match action {
            InputAction::Selected { .. } => {
                // The input already let go of focus; no second validation.
                self.focus = Focus::Grid;
                self.show_focus();
                self.refresh();
            }
            InputAction::Validated(validation) => self.after_validation(validation),
            InputAction::None
            | InputAction::Edited
            | InputAction::Navigated
            | InputAction::Closed => {}
        }
    }

    fn input_event(&mut self, event: &Event) {
        let now = self.now();
        let action = self.input.handle_event(event, now, &self.wordlist, &mut self.bits);
        self.after_input(action);
    }

    /// Clear the pattern and the word input.
    pub fn reset(&mut self) {
        tracing::debug!("reset");
        self.bits.reset_boxes();
        self.input.reset();
        self.refresh();
    }

    /// Switch between dark and light and remember the choice.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::info!(theme = %self.theme_mode, "theme changed");
        self.apply_theme();
        self.persist(THEME_KEY, self.theme_mode.as_str());
    }

    /// Switch the UI and wordlist language and start loading its list.
    ///
    /// The pattern is kept; once the list arrives the views show the word
    /// at the same index in the new language.
    pub fn choose_language(&mut self, language: Language) -> Cmd<Msg> {
        tracing::info!(from = %self.language, to = %language, "language changed");
        self.language = language;
        self.picker.set_active(language);
        self.apply_locale();
        self.persist(LANGUAGE_KEY, language.code());
        self.start_load(language)
    }

    /// Replace the pattern directly and refresh. Bypasses the disable
    /// rule, so values above 2048 are possible.
    pub fn set_bits(&mut self, bits: BitState) {
        self.bits = bits;
        self.refresh();
    }

    fn start_load(&mut self, language: Language) -> Cmd<Msg> {
        let ticket = self.loads.begin();
        tracing::info!(%language, ticket = ticket.get(), "wordlist load started");
        let source = Arc::clone(&self.source);
        Cmd::task_named(format!("load {language}"), move || Msg::WordlistLoaded {
            ticket,
            language,
            result: load_wordlist(source.as_ref(), language),
        })
    }

    fn finish_load(
        &mut self,
        ticket: LoadTicket,
        language: Language,
        result: Result<WordlistIndex, LoadError>,
    ) {
        if !self.loads.complete(ticket) {
            tracing::warn!(
                %language,
                ticket = ticket.get(),
                latest = self.loads.issued(),
                "stale wordlist result dropped"
            );
            return;
        }
        match result {
            Ok(index) => {
                tracing::info!(%language, words = index.len(), "wordlist loaded");
                self.wordlist.replace(index);
                self.load_error = None;
                let now = self.now();
                self.toasts.dismiss(ToastId::WORDLIST_ERROR, now);
                if self.input.is_focused() {
                    self.input.refresh_suggestions(&self.wordlist);
                }
                self.refresh();
            }
            Err(err) => {
                // The previous list, possibly empty, stays in place.
                tracing::error!(%language, %err, "wordlist load failed");
                self.load_error = Some(err.to_string());
                let ttl = self.timings.load_error_toast();
                self.notify(
                    ToastId::WORDLIST_ERROR,
                    keys::WORDLIST_LOAD_ERROR,
                    &[("language", language.native_name())],
                    ToastSeverity::Error,
                    ttl,
                );
            }
        }
    }

    fn open_picker(&mut self) {
        self.picker.open();
        self.language_button.set_pressed(true);
    }

    fn close_picker(&mut self) {
        self.picker.close();
        self.language_button.set_pressed(false);
    }

    fn open_help(&mut self) {
        self.close_picker();
        self.help.open();
    }

    fn handle_event(&mut self, event: Event) -> Cmd<Msg> {
        match &event {
            Event::Tick => {
                self.tick();
                return Cmd::none();
            }
            Event::Resize { width, height } => {
                self.screen = Rect::from_size(*width, *height);
                return Cmd::none();
            }
            Event::Key(key) if key.is_press() && key.ctrl() && key.is_char('c') => {
                return Cmd::quit();
            }
            _ => {}
        }
        if self.help.is_open() {
            self.help.handle_event(&event, self.screen);
            return Cmd::none();
        }
        match &event {
            Event::Key(key) if key.is_press() => self.handle_key(*key),
            Event::Mouse(mouse) if mouse.is_left_press() => self.handle_click(mouse.x, mouse.y),
            Event::Paste(_) if self.focus == Focus::Input => {
                self.input_event(&event);
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if self.picker.is_open() {
            return match self.picker.handle_key(&key) {
                PickerAction::Chosen(language) => {
                    self.language_button.set_pressed(false);
                    self.choose_language(language)
                }
                PickerAction::Closed => {
                    self.language_button.set_pressed(false);
                    Cmd::none()
                }
                PickerAction::Moved | PickerAction::None => Cmd::none(),
            };
        }
        match key.code {
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return Cmd::none();
            }
            KeyCode::Tab if key.shift() => {
                self.set_focus(self.focus.prev());
                return Cmd::none();
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return Cmd::none();
            }
            KeyCode::F(1) => {
                self.open_help();
                return Cmd::none();
            }
            _ => {}
        }
        if self.focus == Focus::Input {
            self.input_event(&Event::Key(key));
            return Cmd::none();
        }
        match key.code {
            KeyCode::Char('q') => return Cmd::quit(),
            KeyCode::Char('r') => {
                self.reset();
                return Cmd::none();
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                return Cmd::none();
            }
            KeyCode::Char('l') => {
                self.set_focus(Focus::Language);
                self.open_picker();
                return Cmd::none();
            }
            KeyCode::Char('?') => {
                self.open_help();
                return Cmd::none();
            }
            _ => {}
        }
        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match self.focus {
            Focus::Grid => {
                let action = self.grid.handle_key(&key, &mut self.bits);
                self.after_grid(action);
            }
            Focus::Reset if activate => self.reset(),
            Focus::Theme if activate => self.toggle_theme(),
            Focus::Language if activate || key.code == KeyCode::Down => self.open_picker(),
            _ => {}
        }
        Cmd::none()
    }

    fn handle_click(&mut self, x: u16, y: u16) -> Cmd<Msg> {
        let layout = self.layout();
        if self.picker.is_open() {
            let action = self.picker.click(layout.language_button, x, y);
            self.language_button.set_pressed(false);
            return match action {
                PickerAction::Chosen(language) => self.choose_language(language),
                _ => Cmd::none(),
            };
        }
        // The list outlives a blur by a short delay so this click can land.
        if let Some(position) = self.input.suggestion_at(layout.input, x, y) {
            if let Some(action) = self.input.select(position, &self.wordlist, &mut self.bits) {
                self.after_input(action);
            }
            return Cmd::none();
        }
        if let Some(index) = GridView::box_at(layout.grid, x, y) {
            self.set_focus(Focus::Grid);
            let action = self.grid.activate(index, &mut self.bits);
            self.after_grid(action);
        } else if layout.input.contains(x, y) {
            self.set_focus(Focus::Input);
        } else if layout.reset_button.contains(x, y) {
            self.set_focus(Focus::Reset);
            self.reset();
        } else if layout.theme_button.contains(x, y) {
            self.set_focus(Focus::Theme);
            self.toggle_theme();
        } else if layout.language_button.contains(x, y) {
            self.set_focus(Focus::Language);
            self.open_picker();
        } else if self.focus == Focus::Input {
            self.set_focus(Focus::Grid);
        }
        Cmd::none()
    }

    fn tick(&mut self) {
        let now = self.now();
        self.input.tick(now);
        self.announcer.tick(now);
        self.nudge.tick(now);
        for action in self.toasts.tick(now) {
            tracing::debug!(?action, "toast");
        }
    }

    fn widths(&self) -> Widths {
        let label = self.text(keys::WORD_INPUT_LABEL, &[]);
        Widths {
            input_label: text_width(&label).min(usize::from(u16::MAX)) as u16,
            reset_button: self.reset_button.width(),
            theme_button: self.theme_button.width(),
            language_button: self.language_button.width(),
        }
    }

    /// Regions for the last known screen size.
    pub fn layout(&self) -> Layout {
        Layout::compute(self.screen, self.widths())
    }

    fn status_line(&self, theme: &Theme) -> Option<(String, Style)> {
        if self.loads.is_pending() {
            return Some((format!("{}…", self.text(keys::LOADING, &[])), theme.muted_text()));
        }
        let detail = self.load_error.as_ref()?;
        let language = self.language.native_name();
        let message = self.text(keys::WORDLIST_LOAD_ERROR, &[("language", language)]);
        Some((format!("{message}: {detail}"), theme.base().fg(theme.error)))
    }

    pub fn bits(&self) -> &BitState {
        &self.bits
    }

    pub fn wordlist(&self) -> &WordlistIndex {
        &self.wordlist
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    pub fn input(&self) -> &WordInputView {
        &self.input
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn nudge(&self) -> &BlockedNudge {
        &self.nudge
    }

    pub fn toasts(&self) -> &NotificationQueue {
        &self.toasts
    }

    pub fn picker(&self) -> &LanguagePicker {
        &self.picker
    }

    pub fn help(&self) -> &Modal {
        &self.help
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Whether the newest wordlist load is still running.
    pub fn is_loading(&self) -> bool {
        self.loads.is_pending()
    }

    /// Message of the last failed load, cleared by a successful one.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Refreshes performed so far.
    pub fn revision(&self) -> u64 {
        self.sync.revision()
    }
}

impl Model for App {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        tracing::info!(
            language = %self.language,
            theme = %self.theme_mode,
            source = %self.source.describe(),
            "wordgrid starting"
        );
        self.refresh();
        self.start_load(self.language)
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Event(event) => self.handle_event(event),
            Msg::WordlistLoaded {
                ticket,
                language,
                result,
            } => {
                self.finish_load(ticket, language, result);
                Cmd::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let theme = self.theme();
        let screen = frame.area();
        frame.fill(screen, theme.base());
        let layout = Layout::compute(screen, self.widths());

        frame.put_line(layout.title, &self.text(keys::TITLE, &[]), theme.emphasis());
        self.language_button.render(layout.language_button, frame);
        frame.put_line(layout.subtitle, &self.text(keys::SUBTITLE, &[]), theme.muted_text());
        if let Some((status, style)) = self.status_line(&theme) {
            frame.put_line(layout.status, &status, style);
        }

        self.grid.render(layout.grid, frame);
        let cursor_label = (self.focus == Focus::Grid)
            .then(|| self.grid.cursor_label())
            .flatten();
        if let Some(label) = cursor_label {
            frame.put_line(layout.box_label, label, theme.muted_text());
        }
        self.readout.render(layout.readout, frame);
        frame.put_line(layout.input_label, &self.text(keys::WORD_INPUT_LABEL, &[]), theme.base());
        self.input.render(layout.input, frame);
        self.reset_button.render(layout.reset_button, frame);
        self.theme_button.render(layout.theme_button, frame);
        self.announcer.render(layout.announcement, frame);
        frame.put_line(layout.hints, &self.text(keys::KEY_HINTS, &[]), theme.muted_text());

        // Overlays, lowest first.
        self.input.render_list(layout.input, screen, frame);
        if self.picker.is_open() {
            let list = self.picker.list_rect(layout.language_button).intersection(&screen);
            self.picker.render(list, frame);
        }
        NotificationStack::new(&self.toasts).render(screen, frame);
        if self.help.is_open() {
            frame.set_cursor(None);
            self.help.render(screen, frame);
        }
    }

    fn next_deadline(&self) -> Option<Duration> {
        earliest([
            self.input.next_deadline(),
            self.announcer.next_deadline(),
            self.nudge.next_deadline(),
            self.toasts.next_deadline(),
        ])
    }
}

#![forbid(unsafe_code)]

//! The twelve-box bit grid.
//!
//! Boxes are laid out in two rows of six, most significant first. Each box
//! shows its weight and an active/inactive glyph. A box is in one of four
//! states, `{active, inactive} x {enabled, disabled}`, and both halves come
//! from the last [`StateSnapshot`]; the grid never decides them itself.
//!
//! Activation checks the disable rule against the live [`BitState`], not the
//! cached snapshot, so a stale render can never let a blocked toggle through.

use wordgrid_core::event::{KeyCode, KeyEvent};
use wordgrid_core::geometry::Rect;
use wordgrid_core::{
    ACTIVE_GLYPH, BOX_COUNT, BitState, DisableMask, INACTIVE_GLYPH, bit_weight, should_be_disabled,
};
use wordgrid_style::{InteractionState, Theme};

use crate::Widget;
use crate::frame::Frame;
use crate::snapshot::{StateListener, StateSnapshot};

/// Boxes per row.
pub const COLUMNS: usize = 6;
/// Width of one box in cells.
pub const BOX_WIDTH: u16 = 6;
/// Height of one box in cells.
pub const BOX_HEIGHT: u16 = 2;
/// Gap between boxes, both directions.
pub const GAP: u16 = 1;

/// Outcome of an activation or key press on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    /// The box was toggled; `active` is its new state.
    Toggled { index: usize, active: bool },
    /// The box is disabled; nothing changed.
    Blocked { index: usize },
    /// The keyboard cursor moved.
    Moved,
    /// The event was not for the grid.
    Ignored,
}

/// The bit grid view.
#[derive(Debug, Clone)]
pub struct GridView {
    boxes: [bool; BOX_COUNT],
    mask: DisableMask,
    cursor: usize,
    focused: bool,
    labels: Vec<String>,
    theme: Theme,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    /// A grid showing the empty pattern.
    pub fn new() -> Self {
        Self {
            boxes: [false; BOX_COUNT],
            mask: DisableMask::default(),
            cursor: 0,
            focused: false,
            labels: (0..BOX_COUNT)
                .map(|i| format!("Bit {}, value {}", i + 1, bit_weight(i)))
                .collect(),
            theme: Theme::default(),
        }
    }

    /// Total size of the grid in cells.
    pub const fn size() -> (u16, u16) {
        let cols = COLUMNS as u16;
        let rows = (BOX_COUNT / COLUMNS) as u16;
        (
            cols * BOX_WIDTH + (cols - 1) * GAP,
            rows * BOX_HEIGHT + (rows - 1) * GAP,
        )
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replace the accessible box labels, one per box.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        if labels.len() == BOX_COUNT {
            self.labels = labels;
        }
    }

    /// Accessible label of box `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Label of the box under the keyboard cursor.
    pub fn cursor_label(&self) -> Option<&str> {
        self.label(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether box `index` is shown as active.
    pub fn is_active(&self, index: usize) -> bool {
        self.boxes.get(index).copied().unwrap_or(false)
    }

    /// Whether box `index` is shown as disabled.
    pub fn is_disabled(&self, index: usize) -> bool {
        self.mask.is_disabled(index)
    }

    /// Try to toggle box `index`.
    ///
    /// A disabled box is left alone and reported as [`GridAction::Blocked`]
    /// so the caller can feed its nudge limiter.
    pub fn activate(&mut self, index: usize, bits: &mut BitState) -> GridAction {
        if index >= BOX_COUNT {
            return GridAction::Ignored;
        }
        let _span = tracing::debug_span!("grid.toggle", index).entered();
        self.cursor = index;
        if should_be_disabled(index, bits.boxes()) {
            tracing::debug!(index, "activation blocked by disable rule");
            return GridAction::Blocked { index };
        }
        bits.toggle_box(index);
        let active = bits.is_active(index);
        tracing::debug!(index, active, value = bits.calculate_value(), "box toggled");
        GridAction::Toggled { index, active }
    }

    /// Keyboard handling while the grid has focus.
    ///
    /// Arrows move the cursor (up and down jump a row), Home/End go to the
    /// first and last box, Space/Enter activate.
    pub fn handle_key(&mut self, key: &KeyEvent, bits: &mut BitState) -> GridAction {
        let last = BOX_COUNT - 1;
        let target = match key.code {
            KeyCode::Left => self.cursor.saturating_sub(1),
            KeyCode::Right => (self.cursor + 1).min(last),
            KeyCode::Up if self.cursor >= COLUMNS => self.cursor - COLUMNS,
            KeyCode::Down if self.cursor + COLUMNS <= last => self.cursor + COLUMNS,
            KeyCode::Up | KeyCode::Down => self.cursor,
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::Char(' ') | KeyCode::Enter => return self.activate(self.cursor, bits),
            _ => return GridAction::Ignored,
        };
        self.cursor = target;
        GridAction::Moved
    }

    /// Screen rectangle of box `index` when the grid is drawn at `area`.
    pub fn box_rect(area: Rect, index: usize) -> Rect {
        let col = (index % COLUMNS) as u16;
        let row = (index / COLUMNS) as u16;
        Rect::new(
            area.x + col * (BOX_WIDTH + GAP),
            area.y + row * (BOX_HEIGHT + GAP),
            BOX_WIDTH,
            BOX_HEIGHT,
        )
        .intersection(&area)
    }

    /// Box under the point `(x, y)`, if any. Gaps hit nothing.
    pub fn box_at(area: Rect, x: u16, y: u16) -> Option<usize> {
        (0..BOX_COUNT).find(|&i| Self::box_rect(area, i).contains(x, y))
    }

    fn box_state(&self, index: usize) -> InteractionState {
        InteractionState::from_flags(
            self.focused && self.cursor == index,
            false,
            self.mask.is_disabled(index),
        )
    }
}

impl StateListener for GridView {
    fn on_state_changed(&mut self, snapshot: &StateSnapshot) {
        self.boxes = snapshot.boxes;
        self.mask = snapshot.disabled;
    }
}

impl Widget for GridView {
    fn render(&self, area: Rect, frame: &mut Frame) {
        for index in 0..BOX_COUNT {
            let rect = Self::box_rect(area, index);
            if rect.is_empty() {
                continue;
            }
            let active = self.boxes[index];
            let style = self.theme.grid_box(active).resolve(self.box_state(index));
            frame.fill(rect, style);
            frame.put_centered(rect, &bit_weight(index).to_string(), style);
            let glyph = if active { ACTIVE_GLYPH } else { INACTIVE_GLYPH };
            frame.put_centered(rect.row(1), glyph.encode_utf8(&mut [0; 4]), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wordgrid_core::WordlistIndex;

    fn sync(grid: &mut GridView, bits: &BitState) {
        let snap = StateSnapshot::derive(0, bits, &WordlistIndex::new(), Duration::ZERO);
        grid.on_state_changed(&snap);
    }

    #[test]
    fn size_is_two_rows_of_six() {
        assert_eq!(GridView::size(), (41, 5));
    }

    #[test]
    fn activate_toggles_enabled_box() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        assert_eq!(
            grid.activate(11, &mut bits),
            GridAction::Toggled { index: 11, active: true }
        );
        assert_eq!(bits.calculate_value(), 1);
        assert_eq!(
            grid.activate(11, &mut bits),
            GridAction::Toggled { index: 11, active: false }
        );
        assert_eq!(bits.calculate_value(), 0);
    }

    #[test]
    fn activate_blocks_disabled_box() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        grid.activate(0, &mut bits);
        assert_eq!(grid.activate(1, &mut bits), GridAction::Blocked { index: 1 });
        assert!(!bits.is_active(1));
        assert_eq!(bits.calculate_value(), 2048);
    }

    #[test]
    fn msb_blocked_when_lower_bits_set() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        grid.activate(5, &mut bits);
        assert_eq!(grid.activate(0, &mut bits), GridAction::Blocked { index: 0 });
    }

    #[test]
    fn activate_out_of_range_is_ignored() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        assert_eq!(grid.activate(12, &mut bits), GridAction::Ignored);
    }

    #[test]
    fn arrows_move_cursor_within_bounds() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        let key = |code| KeyEvent::new(code);
        grid.handle_key(&key(KeyCode::Left), &mut bits);
        assert_eq!(grid.cursor(), 0);
        grid.handle_key(&key(KeyCode::Down), &mut bits);
        assert_eq!(grid.cursor(), 6);
        grid.handle_key(&key(KeyCode::Down), &mut bits);
        assert_eq!(grid.cursor(), 6);
        grid.handle_key(&key(KeyCode::End), &mut bits);
        assert_eq!(grid.cursor(), 11);
        grid.handle_key(&key(KeyCode::Right), &mut bits);
        assert_eq!(grid.cursor(), 11);
        grid.handle_key(&key(KeyCode::Up), &mut bits);
        assert_eq!(grid.cursor(), 5);
    }

    #[test]
    fn space_activates_cursor_box() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        grid.handle_key(&KeyEvent::new(KeyCode::End), &mut bits);
        let action = grid.handle_key(&KeyEvent::new(KeyCode::Char(' ')), &mut bits);
        assert_eq!(action, GridAction::Toggled { index: 11, active: true });
    }

    #[test]
    fn hit_testing_skips_gaps() {
        let area = Rect::new(2, 1, 41, 5);
        assert_eq!(GridView::box_at(area, 2, 1), Some(0));
        assert_eq!(GridView::box_at(area, 8, 1), None);
        assert_eq!(GridView::box_at(area, 9, 2), Some(1));
        assert_eq!(GridView::box_at(area, 2, 3), None);
        assert_eq!(GridView::box_at(area, 42, 5), Some(11));
    }

    #[test]
    fn view_reflects_snapshot() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        bits.toggle_box(0);
        sync(&mut grid, &bits);
        assert!(grid.is_active(0));
        assert!(grid.is_disabled(1));
        assert!(!grid.is_disabled(0));
    }

    #[test]
    fn render_shows_weights_and_glyphs() {
        let mut grid = GridView::new();
        let mut bits = BitState::new();
        bits.toggle_box(11);
        sync(&mut grid, &bits);
        let (w, h) = GridView::size();
        let mut frame = Frame::new(w, h);
        grid.render(frame.area(), &mut frame);
        assert!(frame.row_text(0).starts_with(" 2048"));
        assert!(frame.row_text(3).trim_end().ends_with('1'));
        assert!(frame.row_text(4).contains(ACTIVE_GLYPH));
        assert!(frame.row_text(1).contains(INACTIVE_GLYPH));
    }

    #[test]
    fn labels_name_bit_and_weight() {
        let grid = GridView::new();
        assert_eq!(grid.label(0), Some("Bit 1, value 2048"));
        assert_eq!(grid.label(11), Some("Bit 12, value 1"));
        assert_eq!(grid.label(12), None);
    }
}

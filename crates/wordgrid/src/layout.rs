#![forbid(unsafe_code)]

//! Screen regions.
//!
//! The screen is a single column, top to bottom:
//!
//! ```text
//!  0  title                                   [EN] English ▾
//!  1  subtitle
//!  2  status (loading / load error)
//!  3  ┌ grid, 2 rows of 6 boxes ┐
//!  8  label of the box under the cursor
//! 10  readout: word, index, binary
//! 14  Word: [input]
//! 16  [ Reset ]  [ Dark ]
//! 18  announcement
//!  …
//! -1  key hints
//! ```
//!
//! Every rectangle is clipped to the screen, so a small terminal yields
//! empty rectangles rather than out-of-bounds ones.

use wordgrid_core::geometry::Rect;
use wordgrid_widgets::GridView;

/// Left margin.
pub const MARGIN: u16 = 2;
/// Width of the word input field.
pub const INPUT_WIDTH: u16 = 24;

/// Widths that depend on localized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Widths {
    pub input_label: u16,
    pub reset_button: u16,
    pub theme_button: u16,
    pub language_button: u16,
}

/// Computed regions for one screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub screen: Rect,
    pub title: Rect,
    pub subtitle: Rect,
    pub status: Rect,
    pub language_button: Rect,
    pub grid: Rect,
    pub box_label: Rect,
    pub readout: Rect,
    pub input_label: Rect,
    pub input: Rect,
    pub reset_button: Rect,
    pub theme_button: Rect,
    pub announcement: Rect,
    pub hints: Rect,
}

impl Layout {
    pub fn compute(screen: Rect, widths: Widths) -> Self {
        let clip = |r: Rect| r.intersection(&screen);
        let x = screen.x + MARGIN;
        let inner = screen.width.saturating_sub(MARGIN * 2);
        let row = |dy: u16, width: u16| clip(Rect::new(x, screen.y + dy, width, 1));

        let language_x = screen
            .right()
            .saturating_sub(widths.language_button + 1)
            .max(x);
        let (grid_w, grid_h) = GridView::size();
        let input_x = x + widths.input_label + 1;
        let theme_x = x + widths.reset_button + 2;
        let hints_y = screen.height.saturating_sub(1).max(19);

        Self {
            screen,
            title: row(0, language_x.saturating_sub(x + 1)),
            subtitle: row(1, inner),
            status: row(2, inner),
            language_button: clip(Rect::new(language_x, screen.y, widths.language_button, 1)),
            grid: clip(Rect::new(x, screen.y + 3, grid_w, grid_h)),
            box_label: row(8, inner),
            readout: clip(Rect::new(x, screen.y + 10, inner, 3)),
            input_label: row(14, widths.input_label),
            input: clip(Rect::new(input_x, screen.y + 14, INPUT_WIDTH, 1)),
            reset_button: row(16, widths.reset_button),
            theme_button: clip(Rect::new(theme_x, screen.y + 16, widths.theme_button, 1)),
            announcement: row(18, inner),
            hints: row(hints_y, inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths() -> Widths {
        Widths {
            input_label: 5,
            reset_button: 9,
            theme_button: 8,
            language_button: 16,
        }
    }

    #[test]
    fn standard_screen_positions() {
        let layout = Layout::compute(Rect::from_size(80, 24), widths());
        assert_eq!(layout.grid, Rect::new(2, 3, 41, 5));
        assert_eq!(layout.input, Rect::new(8, 14, 24, 1));
        assert_eq!(layout.reset_button, Rect::new(2, 16, 9, 1));
        assert_eq!(layout.theme_button, Rect::new(13, 16, 8, 1));
        assert_eq!(layout.language_button, Rect::new(63, 0, 16, 1));
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn regions_do_not_overlap_vertically() {
        let l = Layout::compute(Rect::from_size(80, 24), widths());
        let order = [
            l.title, l.subtitle, l.status, l.grid, l.box_label, l.readout, l.input, l.reset_button,
            l.announcement, l.hints,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].bottom() <= pair[1].y, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn tiny_screen_clips_to_empty() {
        let layout = Layout::compute(Rect::from_size(10, 4), widths());
        assert!(layout.input.is_empty());
        assert!(layout.hints.is_empty());
        assert!(layout.grid.width <= 10);
    }
}

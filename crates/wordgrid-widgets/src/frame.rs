#![forbid(unsafe_code)]

//! Frame buffer.
//!
//! A [`Frame`] is a grid of [`Cell`]s that widgets draw into. Each cell
//! holds one grapheme cluster and a [`Style`]. A double-width grapheme
//! occupies its own cell plus a continuation cell whose symbol is empty.
//!
//! The runtime presents a frame to the terminal; tests read it back with
//! [`Frame::row_text`].

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use wordgrid_core::geometry::Rect;
use wordgrid_style::Style;

/// Display width of a grapheme cluster in cells (0, 1, or 2).
#[inline]
pub fn grapheme_width(g: &str) -> usize {
    UnicodeWidthStr::width(g).min(2)
}

/// Display width of a string in cells.
pub fn text_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

/// Truncate `text` to at most `max` cells without splitting a grapheme.
pub fn truncate_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (offset, g) in text.grapheme_indices(true) {
        let w = grapheme_width(g);
        if used + w > max {
            return &text[..offset];
        }
        used += w;
    }
    text
}

/// Greedy word wrap to `width` cells.
///
/// Explicit newlines start a new line. Words wider than the line (and
/// scripts written without spaces) are broken at grapheme boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_word_bounds() {
            let w = text_width(word);
            if line_width + w <= width {
                line.push_str(word);
                line_width += w;
                continue;
            }
            if word.trim().is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
                continue;
            }
            if line_width > 0 && w <= width {
                lines.push(std::mem::take(&mut line).trim_end().to_string());
                line.push_str(word);
                line_width = w;
                continue;
            }
            for g in word.graphemes(true) {
                let gw = grapheme_width(g);
                if line_width + gw > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push_str(g);
                line_width += gw;
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// One terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Grapheme cluster; empty for the trailing half of a wide grapheme.
    pub symbol: String,
    /// Style of the cell.
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            style: Style::new(),
        }
    }
}

impl Cell {
    /// Whether this is the trailing half of a wide grapheme.
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// A drawable grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: Option<(u16, u16)>,
}

impl Frame {
    /// Blank frame of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            cursor: None,
        }
    }

    /// Whole-frame rectangle.
    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Frame width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Frame height.
    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Cell at `(x, y)`.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(x, y)`.
    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Fill `area` with blanks in `style`.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.symbol.clear();
                    cell.symbol.push(' ');
                    cell.style = style;
                }
            }
        }
    }

    /// Patch `style` onto every cell of `area` without touching symbols.
    pub fn restyle(&mut self, area: Rect, style: Style) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.style = cell.style.patch(&style);
                }
            }
        }
    }

    /// Draw `text` starting at `(x, y)`, never past column `max_x` (exclusive).
    ///
    /// Returns the column after the last drawn cell. A wide grapheme that
    /// would straddle `max_x` is not drawn.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut col = x;
        for g in text.graphemes(true) {
            let w = grapheme_width(g) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > max_x {
                break;
            }
            if let Some(cell) = self.cell_mut(col, y) {
                cell.symbol.clear();
                cell.symbol.push_str(g);
                cell.style = style;
            }
            if w == 2
                && let Some(cont) = self.cell_mut(col + 1, y)
            {
                cont.symbol.clear();
                cont.style = style;
            }
            col += w;
        }
        col
    }

    /// Draw `text` inside `area` on its first row, clipped to the area.
    pub fn put_line(&mut self, area: Rect, text: &str, style: Style) -> u16 {
        if area.is_empty() {
            return area.x;
        }
        self.put_str(area.x, area.y, text, style, area.right())
    }

    /// Draw `text` horizontally centered on the first row of `area`.
    pub fn put_centered(&mut self, area: Rect, text: &str, style: Style) {
        let w = text_width(text).min(usize::from(area.width)) as u16;
        let x = area.x + (area.width - w) / 2;
        self.put_str(x, area.y, text, style, area.right());
    }

    /// Single-line box border around `area`.
    pub fn border(&mut self, area: Rect, style: Style) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let (right, bottom) = (area.right() - 1, area.bottom() - 1);
        for x in area.x + 1..right {
            self.put_str(x, area.y, "─", style, x + 1);
            self.put_str(x, bottom, "─", style, x + 1);
        }
        for y in area.y + 1..bottom {
            self.put_str(area.x, y, "│", style, area.x + 1);
            self.put_str(right, y, "│", style, right + 1);
        }
        self.put_str(area.x, area.y, "┌", style, area.x + 1);
        self.put_str(right, area.y, "┐", style, right + 1);
        self.put_str(area.x, bottom, "└", style, area.x + 1);
        self.put_str(right, bottom, "┘", style, right + 1);
    }

    /// Request the hardware cursor at `(x, y)`.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    /// Requested hardware cursor.
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Row `y` as text, continuation cells skipped, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = usize::from(y) * usize::from(self.width);
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row.iter().map(|c| c.symbol.as_str()).collect();
        text.trim_end().to_string()
    }

    /// All rows joined with newlines.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any row contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    /// Rows of the frame, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_writes_and_clips() {
        let mut f = Frame::new(6, 1);
        let end = f.put_str(1, 0, "abcdefgh", Style::new(), 6);
        assert_eq!(end, 6);
        assert_eq!(f.row_text(0), " abcde");
    }

    #[test]
    fn wide_graphemes_use_two_cells() {
        let mut f = Frame::new(6, 1);
        let end = f.put_str(0, 0, "日本", Style::new(), 6);
        assert_eq!(end, 4);
        assert!(f.cell(1, 0).unwrap().is_continuation());
        assert_eq!(f.row_text(0), "日本");
    }

    #[test]
    fn wide_grapheme_does_not_straddle_edge() {
        let mut f = Frame::new(3, 1);
        let end = f.put_str(0, 0, "a日本", Style::new(), 3);
        assert_eq!(end, 3);
        assert_eq!(f.row_text(0), "a日");
    }

    #[test]
    fn put_centered() {
        let mut f = Frame::new(7, 1);
        f.put_centered(f.area(), "abc", Style::new());
        assert_eq!(f.row_text(0), "  abc");
    }

    #[test]
    fn border_draws_corners() {
        let mut f = Frame::new(4, 3);
        f.border(f.area(), Style::new());
        assert_eq!(f.row_text(0), "┌──┐");
        assert_eq!(f.row_text(1), "│  │");
        assert_eq!(f.row_text(2), "└──┘");
    }

    #[test]
    fn out_of_bounds_access_is_none() {
        let f = Frame::new(2, 2);
        assert!(f.cell(2, 0).is_none());
        assert!(f.cell(0, 2).is_none());
        assert_eq!(f.row_text(5), "");
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("ok", 10), "ok");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_breaks_long_cjk_runs() {
        let lines = wrap_text("每个方框代表一个位", 6);
        assert!(lines.iter().all(|l| text_width(l) <= 6), "{lines:?}");
        assert_eq!(lines.concat(), "每个方框代表一个位");
    }
}

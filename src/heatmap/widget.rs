use super::view::{Cell, MonthView};
use crate::theme::{STATUS_STYLE, TITLE_STYLE, WEEKDAY_STYLE};
use ratatui::{prelude::*, widgets::*};

static HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa ";

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the calendar grid in columns
const GRID_WIDTH: u16 = 28;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 3;

const ACS_HLINE: char = '─';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct HeatmapCalendar;

impl StatefulWidget for HeatmapCalendar {
    type State = MonthView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let left = area.width.saturating_sub(GRID_WIDTH) / 2;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left),
                Constraint::Length(GRID_WIDTH.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area);
        let area = chunks[1];
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(&state.month().to_string());
        canvas.draw_weekday_header();
        for (row, week) in state.cells().chunks(7).enumerate() {
            let y = u16::try_from(row).unwrap_or(u16::MAX) + HEADER_LINES;
            for (col, cell) in week.iter().enumerate() {
                if cell.day == 0 {
                    continue;
                }
                let x = u16::try_from(col).unwrap_or(u16::MAX) * DAY_WIDTH;
                canvas.draw_cell(y, x, cell);
            }
        }
        if let Some(cell) = state.selected_cell() {
            let y = u16::try_from(state.weeks()).unwrap_or(u16::MAX) + HEADER_LINES + 1;
            canvas.draw_status(y, &cell);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, title: &str) {
        let width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        self.mvprint(
            0,
            GRID_WIDTH.saturating_sub(width) / 2,
            title,
            Some(TITLE_STYLE),
        );
    }

    fn draw_weekday_header(&mut self) {
        self.mvprint(1, 0, HEADER, Some(WEEKDAY_STYLE));
        self.hline(2, 0, ACS_HLINE, GRID_WIDTH);
    }

    fn draw_cell(&mut self, y: u16, x: u16, cell: &Cell) {
        let s = cell.show();
        self.mvprint(y, x, s.content, Some(s.style));
    }

    // The raw data an out-of-scope tooltip layer would format: the
    // normalized date, plus the count when the day is populated.
    fn draw_status(&mut self, y: u16, cell: &Cell) {
        let Some(key) = cell.key.as_deref() else {
            return;
        };
        let text = if cell.count == 0 {
            key.to_owned()
        } else {
            format!("{key} · {}", cell.count)
        };
        self.mvprint(y, 0, text, Some(STATUS_STYLE));
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

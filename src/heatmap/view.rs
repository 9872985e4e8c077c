use super::grid::{DaySlot, MonthGrid};
use super::intensity::Intensity;
use super::month::MonthRef;
use crate::counts::CountMap;
use crate::theme;
use ratatui::{style::Modifier, text::Span};
use time::Date;

/// Everything the renderer needs to know about one grid position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) day: u8,
    pub(crate) key: Option<String>,
    pub(crate) count: u64,
    pub(crate) tier: Intensity,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
}

impl Cell {
    pub(crate) fn is_actionable(&self) -> bool {
        self.day != 0 && self.count > 0
    }

    pub(crate) fn show(&self) -> Span<'static> {
        let text = if self.is_today {
            format!("[{:2}]", self.day)
        } else {
            format!(" {:2} ", self.day)
        };
        let mut style = theme::intensity_style(self.tier);
        if self.is_selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Span::styled(text, style)
    }
}

/// Selection state over one month's grid.  Rebuilt from scratch whenever
/// the month or the counts change; "today" is injected once so nothing in
/// here reads a clock.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    grid: MonthGrid,
    today: Date,
    selected: Option<u8>,
}

impl MonthView {
    pub(crate) fn new(month: MonthRef, counts: &CountMap, today: Date) -> MonthView {
        MonthView {
            grid: MonthGrid::build(month, counts),
            today,
            selected: None,
        }
    }

    pub(crate) fn month(&self) -> MonthRef {
        self.grid.month()
    }

    pub(crate) fn weeks(&self) -> usize {
        self.grid.weeks()
    }

    pub(crate) fn selected_day(&self) -> Option<u8> {
        self.selected
    }

    /// Selects the given date if it falls within this month; dates from
    /// other months simply match no cell.
    pub(crate) fn select_date(&mut self, date: Date) -> bool {
        if self.grid.month().contains(date) {
            self.selected = Some(date.day());
            true
        } else {
            false
        }
    }

    pub(crate) fn select_left(&mut self) -> bool {
        self.move_selection(-1)
    }

    pub(crate) fn select_right(&mut self) -> bool {
        self.move_selection(1)
    }

    pub(crate) fn select_up(&mut self) -> bool {
        self.move_selection(-7)
    }

    pub(crate) fn select_down(&mut self) -> bool {
        self.move_selection(7)
    }

    fn move_selection(&mut self, delta: i16) -> bool {
        let Some(day) = self.selected else {
            // First movement seeds the selection rather than moving it.
            self.selected = Some(self.initial_day());
            return true;
        };
        let target = i16::from(day) + delta;
        if (1..=i16::from(self.grid.month().days())).contains(&target) {
            self.selected = u8::try_from(target).ok();
            true
        } else {
            false
        }
    }

    fn initial_day(&self) -> u8 {
        if self.grid.month().contains(self.today) {
            self.today.day()
        } else {
            1
        }
    }

    /// The normalized date of the selected day, if activating it should
    /// notify the caller.  Padding and zero-count days are inert.
    pub(crate) fn activate(&self) -> Option<String> {
        let day = self.selected?;
        let slot = self.grid.slot_for_day(day)?;
        slot.is_actionable().then(|| self.grid.month().day_key(day))
    }

    pub(crate) fn cells(&self) -> Vec<Cell> {
        self.grid
            .slots()
            .iter()
            .map(|slot| self.cell_for(*slot))
            .collect()
    }

    pub(crate) fn selected_cell(&self) -> Option<Cell> {
        let slot = self.grid.slot_for_day(self.selected?)?;
        Some(self.cell_for(slot))
    }

    fn cell_for(&self, slot: DaySlot) -> Cell {
        let day = slot.day();
        Cell {
            day,
            key: (day != 0).then(|| self.grid.month().day_key(day)),
            count: slot.count(),
            tier: slot.tier(),
            is_today: day != 0
                && self.grid.month().contains(self.today)
                && day == self.today.day(),
            is_selected: day != 0 && self.selected == Some(day),
        }
    }
}

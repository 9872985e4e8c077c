use crate::counts::CountMap;
use crate::heatmap::{HeatmapCalendar, MonthRef, MonthView};
use crate::help::Help;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    DefaultTerminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: MonthView,
    counts: CountMap,
    today: Date,
    picked: Option<String>,
    state: AppState,
}

impl App {
    pub(crate) fn new(view: MonthView, counts: CountMap, today: Date) -> App {
        App {
            view,
            counts,
            today,
            picked: None,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<Option<String>> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(self.picked)
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.view.select_left(),
                KeyCode::Char('l') | KeyCode::Right => self.view.select_right(),
                KeyCode::Char('k') | KeyCode::Up => self.view.select_up(),
                KeyCode::Char('j') | KeyCode::Down => self.view.select_down(),
                KeyCode::Char('n') | KeyCode::PageDown => self.next_month(),
                KeyCode::Char('p') | KeyCode::PageUp => self.previous_month(),
                KeyCode::Char('t') | KeyCode::Home => {
                    self.jump_to_today();
                    true
                }
                KeyCode::Enter => {
                    self.pick();
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    // Padding and zero-count days are inert: picking them is a no-op, not
    // an input error.
    fn pick(&mut self) {
        if let Some(date) = self.view.activate() {
            self.picked = Some(date);
            self.state = AppState::Quitting;
        }
    }

    fn next_month(&mut self) -> bool {
        if let Ok(month) = self.view.month().next() {
            self.rebuild(month);
            true
        } else {
            false
        }
    }

    fn previous_month(&mut self) -> bool {
        if let Ok(month) = self.view.month().previous() {
            self.rebuild(month);
            true
        } else {
            false
        }
    }

    fn jump_to_today(&mut self) {
        if !self.view.month().contains(self.today) {
            self.rebuild(MonthRef::from_date(self.today));
        }
        self.view.select_date(self.today);
    }

    fn rebuild(&mut self, month: MonthRef) {
        self.view = MonthView::new(month, &self.counts, self.today);
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        HeatmapCalendar.render(area, buf, &mut self.view);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}

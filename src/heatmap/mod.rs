mod grid;
mod intensity;
mod month;
mod view;
mod widget;
pub(crate) use self::intensity::Intensity;
pub(crate) use self::month::MonthRef;
pub(crate) use self::view::MonthView;
pub(crate) use self::widget::HeatmapCalendar;

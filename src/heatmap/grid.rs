use super::intensity::Intensity;
use super::month::MonthRef;
use crate::counts::CountMap;

const DAYS_IN_WEEK: usize = 7;

/// One position in the 7-column grid: a real day of the month or padding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DaySlot {
    day: u8,
    count: u64,
    tier: Intensity,
}

impl DaySlot {
    const PADDING: DaySlot = DaySlot {
        day: 0,
        count: 0,
        tier: Intensity::Zero,
    };

    pub(crate) fn day(self) -> u8 {
        self.day
    }

    pub(crate) fn count(self) -> u64 {
        self.count
    }

    pub(crate) fn tier(self) -> Intensity {
        self.tier
    }

    pub(crate) fn is_padding(self) -> bool {
        self.day == 0
    }

    pub(crate) fn is_actionable(self) -> bool {
        self.day != 0 && self.count > 0
    }
}

/// The Sunday-first slot sequence for one month, tiers assigned up front.
///
/// Leading padding is exactly the weekday offset of day 1; trailing padding
/// runs only to the end of the final populated week, so the length is 28,
/// 35, or 42 and always a multiple of 7.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: MonthRef,
    slots: Vec<DaySlot>,
}

impl MonthGrid {
    pub(crate) fn build(month: MonthRef, counts: &CountMap) -> MonthGrid {
        let days = month.days();
        let leading = month.first_weekday();
        let trailing = 6 - month.last_weekday();
        let day_counts = (1..=days)
            .map(|day| counts.get(&month.day_key(day)))
            .collect::<Vec<_>>();
        // Scale is relative to this month only; entries for other months
        // never influence the tiers.
        let max_count = day_counts.iter().copied().max().unwrap_or(0);
        let mut slots =
            Vec::with_capacity(usize::from(leading) + usize::from(days) + usize::from(trailing));
        slots.resize(usize::from(leading), DaySlot::PADDING);
        for (day, &count) in (1..=days).zip(&day_counts) {
            slots.push(DaySlot {
                day,
                count,
                tier: Intensity::for_count(count, max_count),
            });
        }
        slots.resize(slots.len() + usize::from(trailing), DaySlot::PADDING);
        MonthGrid { month, slots }
    }

    pub(crate) fn month(&self) -> MonthRef {
        self.month
    }

    pub(crate) fn slots(&self) -> &[DaySlot] {
        &self.slots
    }

    pub(crate) fn weeks(&self) -> usize {
        self.slots.len() / DAYS_IN_WEEK
    }

    pub(crate) fn slot_for_day(&self, day: u8) -> Option<DaySlot> {
        if day == 0 || day > self.month.days() {
            return None;
        }
        let i = usize::from(self.month.first_weekday()) + usize::from(day) - 1;
        self.slots.get(i).copied()
    }
}

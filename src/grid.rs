use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DAYS_PER_WEEK, MIN_DAY, Month, days_in_month, next_month, prelude::*, prev_month,
    types::Weekday, weekday_of,
};

/// Which month a grid cell's day number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOffset {
    #[display(fmt = "previous")]
    Previous,
    #[display(fmt = "current")]
    Current,
    #[display(fmt = "next")]
    Next,
}

/// How many previous-month cells pad the start of the grid.
///
/// Both policies produce complete weeks; they differ only for months that
/// start on a Sunday. The trailing edge is the same under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Only as many cells as needed to put day 1 in its weekday column.
    #[default]
    Minimal,
    /// Inclusive leading bound: a month starting on Sunday gets a full
    /// leading week.
    FullWeek,
}

/// One position in a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of month shown in the cell
    pub day:           u8,
    pub offset:        MonthOffset,
    /// Only cells of the displayed month can be picked
    pub is_selectable: bool,
    pub is_today:      bool,
    pub is_selected:   bool,
    /// Date the cell stands for, in its own month
    pub date:          CalendarDate,
}

impl DayCell {
    const fn padding(date: CalendarDate, offset: MonthOffset) -> Self {
        Self {
            day: date.day(),
            offset,
            is_selectable: false,
            is_today: false,
            is_selected: false,
            date,
        }
    }

    fn current(date: CalendarDate, selected: CalendarDate, today: CalendarDate) -> Self {
        Self {
            day: date.day(),
            offset: MonthOffset::Current,
            is_selectable: true,
            is_today: date == today,
            is_selected: date == selected,
            date,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.offset != MonthOffset::Current
    }
}

/// Computes the cells of a month view, Sunday in the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarGridBuilder {
    padding: Padding,
}

impl CalendarGridBuilder {
    pub const fn new() -> Self {
        Self {
            padding: Padding::Minimal,
        }
    }

    #[must_use]
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Number of previous-month cells placed before day 1, given the weekday
    /// of the previous month's last day.
    pub const fn leading_count(&self, last_of_prev: Weekday) -> u8 {
        match (self.padding, last_of_prev) {
            (Padding::Minimal, Weekday::Saturday) => 0,
            (_, weekday) => weekday.index() + 1,
        }
    }

    /// Number of next-month cells placed after the last day, given the
    /// weekday of the next month's first day. A next month starting on
    /// Sunday still gets a full trailing week.
    pub const fn trailing_count(&self, first_of_next: Weekday) -> u8 {
        DAYS_PER_WEEK - first_of_next.index()
    }

    /// Builds the ordered cells for `(year, month)`.
    ///
    /// The result always holds whole weeks, and the cells of the displayed
    /// month form one contiguous run of `days_in_month(year, month)` cells.
    pub fn build(&self, year: i32, month: Month, selected: CalendarDate, today: CalendarDate) -> Vec<DayCell> {
        let (prev_year, prev) = prev_month(year, month);
        let last_of_prev = days_in_month(prev_year, prev);
        let last_of_month = days_in_month(year, month);

        // Edge weekdays come from the displayed month itself, so the counts
        // stay right even where the adjacent year cannot be represented.
        let first = weekday_of(year, month, MIN_DAY);
        let last = weekday_of(year, month, last_of_month);
        let leading = self.leading_count(Weekday::from_index(first.index() + DAYS_PER_WEEK - 1));
        let trailing = self.trailing_count(Weekday::from_index(last.index() + 1));

        let (next_year, next) = next_month(year, month);

        let mut cells = Vec::with_capacity(usize::from(leading + last_of_month + trailing));

        cells.extend(
            (last_of_prev + 1 - leading..=last_of_prev)
                .filter_map(|day| CalendarDate::new(prev_year, prev, day).ok())
                .map(|date| DayCell::padding(date, MonthOffset::Previous)),
        );
        cells.extend(
            (MIN_DAY..=last_of_month)
                .filter_map(|day| CalendarDate::new(year, month, day).ok())
                .map(|date| DayCell::current(date, selected, today)),
        );
        cells.extend(
            (MIN_DAY..MIN_DAY + trailing)
                .filter_map(|day| CalendarDate::new(next_year, next, day).ok())
                .map(|date| DayCell::padding(date, MonthOffset::Next)),
        );

        trace!(
            "grid {year}-{:02}: {leading} leading, {last_of_month} current, {trailing} trailing ({:?})",
            month.number(),
            self.padding
        );
        cells
    }
}

/// Splits a grid into rows of seven cells.
pub fn weeks(cells: &[DayCell]) -> impl Iterator<Item = &[DayCell]> {
    cells.chunks(usize::from(DAYS_PER_WEEK))
}

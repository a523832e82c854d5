use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CELL_CLASS, CalendarDate, CalendarGridBuilder, DateError, DayCell, MONTH_NAMES, Month, PADDING_CELL_CLASS,
    PICKER_INPUT_CLASS, PLAIN_CELL_CLASS, Padding, SELECTED_CELL_CLASS, TODAY_CELL_CLASS, WEEKDAY_LABELS, cn,
    prelude::*, types,
};

/// What the picker is showing: the displayed month, the chosen date and
/// whether the calendar popover is open.
///
/// Transitions consume the state and return the next one; nothing here
/// touches the clock or renders anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    year:     i32,
    month:    Month,
    selected: CalendarDate,
    open:     bool,
}

impl ViewState {
    /// Closed picker showing the month of `selected`
    pub const fn new(selected: CalendarDate) -> Self {
        Self {
            year: selected.year(),
            month: selected.month(),
            selected,
            open: false,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn selected(&self) -> CalendarDate {
        self.selected
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn next_month(self) -> Self {
        let (year, month) = types::next_month(self.year, self.month);
        debug!("view moved forward to {month} {year}");
        Self { year, month, ..self }
    }

    #[must_use]
    pub fn prev_month(self) -> Self {
        let (year, month) = types::prev_month(self.year, self.month);
        debug!("view moved back to {month} {year}");
        Self { year, month, ..self }
    }

    #[must_use]
    pub const fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    #[must_use]
    pub const fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    #[must_use]
    pub const fn toggle_open(self) -> Self {
        Self {
            open: !self.open,
            ..self
        }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self { open: false, ..self }
    }

    /// Picks `day` of the displayed month and closes the popover.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the displayed month has no such day.
    pub fn select_day(self, day: u8) -> Result<(Self, CalendarDate), DateError> {
        let date = CalendarDate::new(self.year, self.month, day)?;
        debug!("selected {date}");
        Ok((
            Self {
                selected: date,
                open: false,
                ..self
            },
            date,
        ))
    }

    /// Cells of the displayed month
    pub fn grid(&self, today: CalendarDate, padding: Padding) -> Vec<DayCell> {
        CalendarGridBuilder::new()
            .padding(padding)
            .build(self.year, self.month, self.selected, today)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CalendarDate::today())
    }
}

/// Host-supplied settings. Style fields are extra class tokens merged after
/// the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerOptions {
    pub class_name:     Option<String>,
    pub selected_style: Option<String>,
    pub today_style:    Option<String>,
    /// Text shown in the field instead of the selected date
    pub value:          Option<String>,
    pub padding:        Padding,
}

/// A grid cell together with its merged classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    #[serde(flatten)]
    pub cell:  DayCell,
    pub class: String,
}

type DateSelectedHandler = Box<dyn FnMut(CalendarDate, &str)>;
type RawInputHandler = Box<dyn FnMut(&str)>;

/// Date picker widget model: a text field that opens a month calendar.
pub struct DatePicker {
    state:                ViewState,
    options:              DatePickerOptions,
    on_date_selected:     Option<DateSelectedHandler>,
    on_raw_input_changed: Option<RawInputHandler>,
}

impl DatePicker {
    pub fn new(selected: CalendarDate) -> Self {
        Self {
            state:                ViewState::new(selected),
            options:              DatePickerOptions::default(),
            on_date_selected:     None,
            on_raw_input_changed: None,
        }
    }

    #[must_use]
    pub fn options(mut self, options: DatePickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Called with the picked date and its `MM/DD/YYYY` text.
    #[must_use]
    pub fn on_date_selected(mut self, handler: impl FnMut(CalendarDate, &str) + 'static) -> Self {
        self.on_date_selected = Some(Box::new(handler));
        self
    }

    /// Called with the raw text whenever the field itself is edited.
    #[must_use]
    pub fn on_raw_input_changed(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_raw_input_changed = Some(Box::new(handler));
        self
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn settings(&self) -> &DatePickerOptions {
        &self.options
    }

    /// Clicking the text field shows or hides the calendar.
    pub fn click_input(&mut self) {
        self.state = self.state.toggle_open();
    }

    pub fn next_month(&mut self) {
        self.state = self.state.next_month();
    }

    pub fn prev_month(&mut self) {
        self.state = self.state.prev_month();
    }

    /// Month dropdown changed to the 0-based `index`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `index` is greater than 11.
    pub fn change_month(&mut self, index: u8) -> Result<(), DateError> {
        let month = Month::new(index)?;
        self.state = self.state.with_month(month);
        Ok(())
    }

    /// Year field changed. The state is left untouched when the text is not a year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `text` does not parse as an integer.
    pub fn change_year(&mut self, text: &str) -> Result<(), DateError> {
        let year = text.trim().parse::<i32>().map_err(|_| {
            warn!("ignoring year input {text:?}");
            DateError::InvalidYear(text.to_owned())
        })?;
        self.state = self.state.with_year(year);
        Ok(())
    }

    /// A day of the displayed month was clicked.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the displayed month has no such day;
    /// no notification is sent in that case.
    pub fn click_day(&mut self, day: u8) -> Result<CalendarDate, DateError> {
        let (state, date) = self.state.select_day(day)?;
        self.state = state;

        let formatted = date.to_string();
        if let Some(handler) = self.on_date_selected.as_mut() {
            handler(date, &formatted);
        }
        Ok(date)
    }

    /// The text field was edited directly.
    pub fn raw_input(&mut self, text: &str) {
        trace!("raw picker input {text:?}");
        if let Some(handler) = self.on_raw_input_changed.as_mut() {
            handler(text);
        }
    }

    /// Text for the field: the host's `value` when set and non-empty,
    /// otherwise the selected date.
    pub fn display_value(&self) -> String {
        match self.options.value.as_deref() {
            Some(value) if !value.is_empty() => value.to_owned(),
            _ => self.state.selected().to_string(),
        }
    }

    pub fn input_class(&self) -> String {
        cn([Some(PICKER_INPUT_CLASS), self.options.class_name.as_deref()])
    }

    /// Classes for one cell. Today's styling takes precedence over selection.
    pub fn cell_class(&self, cell: &DayCell) -> String {
        if cell.is_padding() {
            cn([CELL_CLASS, PADDING_CELL_CLASS])
        } else if cell.is_today {
            cn([
                Some(CELL_CLASS),
                Some(TODAY_CELL_CLASS),
                self.options.today_style.as_deref(),
            ])
        } else if cell.is_selected {
            cn([
                Some(CELL_CLASS),
                Some(SELECTED_CELL_CLASS),
                self.options.selected_style.as_deref(),
            ])
        } else {
            cn([CELL_CLASS, PLAIN_CELL_CLASS])
        }
    }

    /// Cells of the displayed month with their classes.
    pub fn cells(&self, today: CalendarDate) -> Vec<RenderedCell> {
        self.state
            .grid(today, self.options.padding)
            .into_iter()
            .map(|cell| RenderedCell {
                class: self.cell_class(&cell),
                cell,
            })
            .collect()
    }

    pub const fn month_names() -> [&'static str; 12] {
        MONTH_NAMES
    }

    pub const fn weekday_labels() -> [&'static str; 7] {
        WEEKDAY_LABELS
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(CalendarDate::today())
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("on_date_selected", &self.on_date_selected.is_some())
            .field("on_raw_input_changed", &self.on_raw_input_changed.is_some())
            .finish()
    }
}

/// Columns in a calendar grid, one per weekday
pub const DAYS_PER_WEEK: u8 = 7;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Highest valid 0-based month index (December)
pub const MAX_MONTH_INDEX: u8 = MONTHS_PER_YEAR - 1;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// 0-based index of January
pub const JANUARY: u8 = 0;
/// 0-based index of February
pub const FEBRUARY: u8 = 1;
/// 0-based index of December
pub const DECEMBER: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month, indexed by 0-based month.
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month names shown in the month dropdown
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// Weekday index of 1970-01-01 (a Thursday)
pub(crate) const UNIX_EPOCH_WEEKDAY: i64 = 4;

/// Separator of the month-first text form (MM/DD/YYYY)
pub const DATE_SEPARATOR: char = '/';

/// Base classes of a text input
pub const INPUT_CLASS: &str = "border rounded h-10 px-2 py-1";
/// Base classes of the date picker's text field
pub const PICKER_INPUT_CLASS: &str = "p-2 border border-gray-300 rounded w-full";
/// Classes shared by every day cell
pub const CELL_CLASS: &str = "border border-gray-300 rounded p-1";
/// Classes of disabled padding cells
pub const PADDING_CELL_CLASS: &str = "bg-gray-100 cursor-not-allowed";
/// Classes of an ordinary selectable cell
pub const PLAIN_CELL_CLASS: &str = "cursor-pointer bg-white";
/// Classes of the cell showing today
pub const TODAY_CELL_CLASS: &str = "cursor-pointer border border-primary-600 bg-primary-200";
/// Classes of the selected cell
pub const SELECTED_CELL_CLASS: &str = "cursor-pointer bg-primary-400 text-primary-900 border border-primary-600";

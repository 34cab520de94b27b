/// Minimum valid year accepted by the validated constructors (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year accepted by the validated constructors (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid one-based month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid zero-based month index, as stored in `YearMonth`
pub const MAX_MONTH_INDEX: u8 = 11;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week; grid rows always hold this many cells
pub const DAYS_PER_WEEK: usize = 7;

/// Fewest week rows a month grid can have (a 28-day February starting on Sunday)
pub const MIN_WEEKS_PER_GRID: usize = 4;

/// Most week rows a month grid can have
pub const MAX_WEEKS_PER_GRID: usize = 6;

/// Drag displacement that must be exceeded before a month/week switch happens
pub const DEFAULT_DRAG_THRESHOLD: f32 = 15.0;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

//! Calendar range helpers and month-grid quoting
//!
//! The acceptance calendar highlights the interval between the due date
//! and the user's selected date, and annotates every visible day cell
//! with its quoted rate. Range membership is decided by full chronological
//! comparison, never by day-of-month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::RateError;
use crate::policy::RatePolicy;
use crate::quote::RateQuote;

/// Whether a date sits on the edge of a selected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBoundary {
    pub is_start: bool,
    pub is_end: bool,
}

/// The closed interval between the due date and a selected payment date
///
/// Construction normalizes the endpoints, so the range is the same no
/// matter which order the two dates are given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl SelectedRange {
    /// Creates the range spanned by the two dates, inclusive on both ends
    pub fn new(due_date: NaiveDate, selected_date: NaiveDate) -> Self {
        Self {
            start: due_date.min(selected_date),
            end: due_date.max(selected_date),
        }
    }

    /// Returns the earlier endpoint
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the later endpoint
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Classifies `date` against the range edges
    ///
    /// Both flags are true only when the two endpoints coincide.
    pub fn boundary(&self, date: NaiveDate) -> RangeBoundary {
        RangeBoundary {
            is_start: date == self.start,
            is_end: date == self.end,
        }
    }

    /// Number of days spanned, inclusive endpoints
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// One renderable calendar cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The cell's date
    pub date: NaiveDate,
    /// Day of month, for the cell label
    pub day: u32,
    /// Quote under the grid's policy
    pub quote: RateQuote,
    /// True if the cell falls inside the current selection
    pub in_range: bool,
    /// True if the cell is the first day of the selection
    pub is_range_start: bool,
    /// True if the cell is the last day of the selection
    pub is_range_end: bool,
}

/// A fully quoted month of calendar cells
///
/// Built fresh for every render; nothing here is cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Quotes every day of `year`/`month` against the due date
    ///
    /// # Arguments
    ///
    /// * `policy` - Rate schedule to quote with
    /// * `due_date` - The zero-rate reference date
    /// * `year`, `month` - The month to lay out
    /// * `selected` - The user's selected payment date, if any
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidMonth`] if the year/month pair does not
    /// name a real calendar month.
    pub fn build(
        policy: &RatePolicy,
        due_date: NaiveDate,
        year: i32,
        month: u32,
        selected: Option<NaiveDate>,
    ) -> Result<Self, RateError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(RateError::InvalidMonth { year, month })?;
        let range = selected.map(|date| SelectedRange::new(due_date, date));

        let cells = first
            .iter_days()
            .take_while(|date| date.month() == month && date.year() == year)
            .map(|date| {
                let quote = policy.quote_for_date(due_date, date);
                let (in_range, boundary) = match &range {
                    Some(range) => (range.contains(date), range.boundary(date)),
                    None => (
                        false,
                        RangeBoundary {
                            is_start: false,
                            is_end: false,
                        },
                    ),
                };
                DayCell {
                    date,
                    day: date.day(),
                    quote,
                    in_range,
                    is_range_start: boundary.is_start,
                    is_range_end: boundary.is_end,
                }
            })
            .collect();

        Ok(Self { year, month, cells })
    }

    /// Returns the grid's year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the grid's month (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns all cells in day order
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Returns the cell for a day of the month, if it exists
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.get(day.checked_sub(1)? as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::RateClass;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_order_insensitive() {
        let due = date(2025, 6, 25);
        let selected = date(2025, 6, 20);

        assert_eq!(
            SelectedRange::new(due, selected),
            SelectedRange::new(selected, due)
        );
    }

    #[test]
    fn test_range_contains_interior_and_edges() {
        let range = SelectedRange::new(date(2025, 6, 25), date(2025, 6, 20));

        assert!(range.contains(date(2025, 6, 22)));
        assert!(range.contains(date(2025, 6, 20)));
        assert!(range.contains(date(2025, 6, 25)));
        assert!(!range.contains(date(2025, 6, 19)));
        assert!(!range.contains(date(2025, 6, 26)));
    }

    #[test]
    fn test_range_boundary_flags() {
        let range = SelectedRange::new(date(2025, 6, 25), date(2025, 6, 20));

        let start = range.boundary(date(2025, 6, 20));
        assert!(start.is_start && !start.is_end);

        let end = range.boundary(date(2025, 6, 25));
        assert!(!end.is_start && end.is_end);

        let interior = range.boundary(date(2025, 6, 22));
        assert!(!interior.is_start && !interior.is_end);
    }

    #[test]
    fn test_degenerate_range_is_both_edges() {
        let due = date(2025, 6, 25);
        let range = SelectedRange::new(due, due);

        let boundary = range.boundary(due);
        assert!(boundary.is_start && boundary.is_end);
        assert_eq!(range.len_days(), 1);
    }

    #[test]
    fn test_range_spans_months() {
        let range = SelectedRange::new(date(2025, 6, 25), date(2025, 7, 10));

        assert!(range.contains(date(2025, 6, 30)));
        assert!(range.contains(date(2025, 7, 1)));
        assert_eq!(range.len_days(), 16);
    }

    #[test]
    fn test_month_grid_covers_whole_month() {
        let due = date(2025, 6, 25);
        let grid =
            MonthGrid::build(&RatePolicy::default(), due, 2025, 6, None).unwrap();

        assert_eq!(grid.cells().len(), 30);
        assert_eq!(grid.cell(1).unwrap().day, 1);
        assert_eq!(grid.cell(30).unwrap().day, 30);
        assert!(grid.cell(31).is_none());
    }

    #[test]
    fn test_month_grid_quotes_each_day() {
        let due = date(2025, 6, 25);
        let grid =
            MonthGrid::build(&RatePolicy::default(), due, 2025, 6, None).unwrap();

        assert_eq!(grid.cell(25).unwrap().quote.class(), RateClass::Due);
        assert_eq!(grid.cell(10).unwrap().quote.rate(), "4.0");
        assert_eq!(grid.cell(29).unwrap().quote.rate(), "0.9");
    }

    #[test]
    fn test_month_grid_marks_selection() {
        let due = date(2025, 6, 25);
        let grid = MonthGrid::build(
            &RatePolicy::default(),
            due,
            2025,
            6,
            Some(date(2025, 6, 20)),
        )
        .unwrap();

        assert!(grid.cell(22).unwrap().in_range);
        assert!(grid.cell(20).unwrap().is_range_start);
        assert!(grid.cell(25).unwrap().is_range_end);
        assert!(!grid.cell(19).unwrap().in_range);
        assert!(!grid.cell(26).unwrap().in_range);
    }

    #[test]
    fn test_month_grid_rejects_bad_month() {
        let due = date(2025, 6, 25);
        let result = MonthGrid::build(&RatePolicy::default(), due, 2025, 13, None);
        assert_eq!(
            result.unwrap_err(),
            RateError::InvalidMonth {
                year: 2025,
                month: 13
            }
        );
    }

    #[test]
    fn test_february_grid_length() {
        let due = date(2024, 2, 25);
        let leap =
            MonthGrid::build(&RatePolicy::default(), due, 2024, 2, None).unwrap();
        assert_eq!(leap.cells().len(), 29);

        let plain =
            MonthGrid::build(&RatePolicy::default(), date(2025, 2, 25), 2025, 2, None)
                .unwrap();
        assert_eq!(plain.cells().len(), 28);
    }
}

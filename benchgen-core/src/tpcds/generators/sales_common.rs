//! Shared ticket mechanics for the three sales channels (§4.5 "TPC-DS
//! sales/returns"): ticket-length drawing, the date-weighted calendar
//! cursor, and the order-number-for-row replay used by `skip_to` and by the
//! row-count resolver's "walk the ticket-number stream" strategy.
//!
//! `store_sales`/`catalog_sales`/`web_sales` all share this shape even
//! though each channel's row is laid out differently (§4.5's per-table
//! generator files build the actual [`crate::row::Row`] from it).

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::types::Date;

use super::super::date_scaling::date_scaling;

/// Rolling "which day is this ticket on" cursor driven by the date-weighted
/// calendar (§4.5 "Date-weighted calendars"): advances `julian_date` and
/// recomputes `next_order_index` (the order-sequence number at which the
/// *next* day's budget runs out) each time `order_number` catches up to it.
pub struct DateCursor {
    julian_date: i32,
    next_order_index: u64,
    orders_on_date: u64,
}

impl DateCursor {
    pub fn new(total_rows: u64, dists: &DistributionStore, start_julian: i32) -> Result<Self> {
        let mut cursor = DateCursor { julian_date: start_julian, next_order_index: 0, orders_on_date: 0 };
        cursor.roll_forward(total_rows, dists)?;
        Ok(cursor)
    }

    fn roll_forward(&mut self, total_rows: u64, dists: &DistributionStore) -> Result<()> {
        let budget = date_scaling(total_rows, Date::from_julian_days(self.julian_date), dists, true)?.max(1);
        self.orders_on_date = budget;
        self.next_order_index += budget;
        Ok(())
    }

    /// Advances to the day owning `order_number` (1-based), rolling the
    /// calendar forward one day at a time until that day's budget covers it.
    pub fn date_for_order(&mut self, order_number: u64, total_rows: u64, dists: &DistributionStore) -> Result<Date> {
        while order_number > self.next_order_index {
            self.julian_date += 1;
            self.roll_forward(total_rows, dists)?;
        }
        Ok(Date::from_julian_days(self.julian_date))
    }
}

/// Draws one ticket's line count from `stream` (seeds_per_row == 1) and
/// consumes exactly one seed, matching `ComputeStoreSalesLineItems`'s inner
/// loop.
pub fn next_ticket_length(stream: &mut RandomStream, min_items: i64, max_items: i64) -> i64 {
    let n = stream.next_uniform_int(min_items, max_items);
    stream.consume_remaining_for_row();
    n
}

/// Replays the ticket-length stream from its initial seed to find which
/// order `row_number` (an absolute, 1-based *line* row number) belongs to,
/// and the 1-based line offset within that order. O(orders-so-far); this is
/// the "only touches the ticket-number stream" walk §4.7 describes for the
/// TPC-DS row-count resolver and for `skip_to`.
pub fn locate_row(min_items: i64, max_items: i64, mut ticket_stream: RandomStream, row_number: u64) -> (u64, u64) {
    ticket_stream.reset();
    let mut order_number = 0u64;
    let mut consumed = 0u64;
    loop {
        order_number += 1;
        let len = next_ticket_length(&mut ticket_stream, min_items, max_items) as u64;
        if consumed + len >= row_number {
            return (order_number, row_number - consumed);
        }
        consumed += len;
    }
}

/// Per-line `is_returned` decision: a uniform draw in `[0,100)` under the
/// channel's return percentage. Returns generators drive the matching sales
/// generator and request exactly the rows this flags.
pub fn is_returned(pct: i64, stream: &mut RandomStream) -> bool {
    stream.next_uniform_int(0, 99) < pct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seedplan::stream_for_column;

    #[test]
    fn locate_row_accounts_for_every_preceding_order() {
        let stream = stream_for_column(0, 1, 1);
        let (order_number, line_offset) = locate_row(1, 10, stream.clone(), 1);
        assert_eq!(order_number, 1);
        assert_eq!(line_offset, 1);
    }

    #[test]
    fn locate_row_is_consistent_with_sequential_replay() {
        let stream = stream_for_column(0, 1, 1);
        let mut cursor = stream.clone();
        let mut consumed = 0u64;
        let mut order_number = 0u64;
        let mut len = 0u64;
        while consumed < 50 {
            order_number += 1;
            len = next_ticket_length(&mut cursor, 1, 10) as u64;
            consumed += len;
        }
        let row_number = consumed;
        let (located_order, offset) = locate_row(1, 10, stream, row_number);
        assert_eq!(located_order, order_number);
        assert_eq!(offset, len);
    }

    #[test]
    fn date_cursor_never_goes_backwards() {
        let mut store = DistributionStore::new();
        crate::distribution::tpcds_distributions(&mut store);
        let start = crate::types::Date::new(2000, 1, 1).to_julian_days();
        let mut cursor = DateCursor::new(1000, &store, start).unwrap();
        let first = cursor.date_for_order(1, 1000, &store).unwrap();
        let later = cursor.date_for_order(500, 1000, &store).unwrap();
        assert!(later.to_julian_days() >= first.to_julian_days());
    }
}

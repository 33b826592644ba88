use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use serde::Serialize;

/// Row labels of the generated auditorium. Fixed 8-row alphabet; column count
/// stretches to fit the seat total.
pub const ROW_LABELS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// A generated auditorium grid. The filled set is demo data: it is
/// re-randomized every time the picker is entered and only the *count* of
/// filled seats (total - available) reflects stored state.
#[derive(Debug, Clone, Serialize)]
pub struct SeatLayout {
    pub rows: Vec<String>,
    pub seats_per_row: u32,
    pub filled_seats: BTreeSet<String>,
}

impl SeatLayout {
    pub fn seat_id(row: &str, column: u32) -> String {
        format!("{}{}", row, column)
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.all_seats().any(|s| s == seat_id)
    }

    pub fn is_filled(&self, seat_id: &str) -> bool {
        self.filled_seats.contains(seat_id)
    }

    pub fn all_seats(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().flat_map(move |row| {
            (1..=self.seats_per_row).map(move |col| Self::seat_id(row, col))
        })
    }
}

/// Generates the picker grid: `seats_per_row = ceil(total / 8)`, and
/// `total - available` seats marked filled by shuffling all seat ids and
/// taking a prefix.
pub fn generate_layout(total_seats: u32, available_seats: u32) -> SeatLayout {
    let rows: Vec<String> = ROW_LABELS.iter().map(|r| r.to_string()).collect();
    let seats_per_row = total_seats.div_ceil(rows.len() as u32).max(1);
    let filled_count = total_seats.saturating_sub(available_seats) as usize;

    let mut all_seats: Vec<String> = Vec::new();
    for row in &rows {
        for col in 1..=seats_per_row {
            all_seats.push(SeatLayout::seat_id(row, col));
        }
    }

    all_seats.shuffle(&mut rand::thread_rng());
    let filled_seats: BTreeSet<String> = all_seats
        .into_iter()
        .take(filled_count)
        .collect();

    SeatLayout {
        rows,
        seats_per_row,
        filled_seats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_count_is_exactly_total_minus_available() {
        let layout = generate_layout(60, 40);
        assert_eq!(layout.filled_seats.len(), 20);
    }

    #[test]
    fn filled_seats_are_a_subset_of_the_grid() {
        let layout = generate_layout(60, 40);
        let all: BTreeSet<String> = layout.all_seats().collect();
        assert!(layout.filled_seats.is_subset(&all));
    }

    #[test]
    fn seats_per_row_rounds_up() {
        // 61 seats over 8 rows -> 8 per row
        let layout = generate_layout(61, 61);
        assert_eq!(layout.seats_per_row, 8);
        assert_eq!(layout.rows.len(), 8);
        assert!(layout.filled_seats.is_empty());
    }

    #[test]
    fn fully_booked_grid_is_entirely_filled() {
        let layout = generate_layout(16, 0);
        assert_eq!(layout.filled_seats.len(), 16);
    }

    #[test]
    fn seat_ids_are_row_label_plus_column() {
        let layout = generate_layout(16, 16);
        assert!(layout.contains("A1"));
        assert!(layout.contains("H2"));
        assert!(!layout.contains("A3"));
        assert!(!layout.contains("Z1"));
    }
}

use crate::domain::models::movie::{STATUS_AVAILABLE, STATUS_SOLD_OUT};

/// Decides the availability flip for one movie row. Returns `None` when the
/// status should stay as-is; statuses other than available/sold_out are
/// never touched.
pub fn next_availability_status(available_seats: i32, current_status: &str) -> Option<&'static str> {
    if available_seats == 0 && current_status == STATUS_AVAILABLE {
        Some(STATUS_SOLD_OUT)
    } else if available_seats > 0 && current_status == STATUS_SOLD_OUT {
        Some(STATUS_AVAILABLE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_movie_with_no_seats_goes_sold_out() {
        assert_eq!(next_availability_status(0, STATUS_AVAILABLE), Some(STATUS_SOLD_OUT));
    }

    #[test]
    fn sold_out_movie_with_seats_becomes_available() {
        assert_eq!(next_availability_status(12, STATUS_SOLD_OUT), Some(STATUS_AVAILABLE));
    }

    #[test]
    fn steady_states_are_untouched() {
        assert_eq!(next_availability_status(12, STATUS_AVAILABLE), None);
        assert_eq!(next_availability_status(0, STATUS_SOLD_OUT), None);
    }

    #[test]
    fn unknown_statuses_are_never_flipped() {
        assert_eq!(next_availability_status(0, "coming_soon"), None);
        assert_eq!(next_availability_status(5, "coming_soon"), None);
    }
}

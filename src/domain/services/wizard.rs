use serde::Serialize;
use thiserror::Error;

use crate::domain::services::seating::SeatLayout;

pub const MAX_SEATS_PER_BOOKING: u32 = 10;

/// The steps of the booking wizard. Forward order is fixed; `back` walks one
/// step towards `Theaters` from `Seats`, `SeatSelection` and `Payment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Theaters,
    Seats,
    SeatSelection,
    Payment,
    Processing,
    Success,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Theaters => "theaters",
            WizardStep::Seats => "seats",
            WizardStep::SeatSelection => "seatSelection",
            WizardStep::Payment => "payment",
            WizardStep::Processing => "processing",
            WizardStep::Success => "success",
        }
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Please sign in to book tickets")]
    AuthRequired,
    #[error("Please select a theater and showtime to continue")]
    ShowtimeRequired,
    #[error("Seat count must be between 1 and {MAX_SEATS_PER_BOOKING}, got {0}")]
    InvalidSeatCount(u32),
    #[error("Select exactly {required} seats ({selected} selected so far)")]
    SeatSelectionIncomplete { selected: usize, required: u32 },
    #[error("Cannot {action} while at step '{step}'")]
    InvalidTransition { action: &'static str, step: &'static str },
}

/// A showtime the user picked on the theaters step, denormalized so the rest
/// of the wizard never goes back to the store for it.
#[derive(Debug, Clone, Serialize)]
pub struct ShowtimeChoice {
    pub showtime_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub price: f64,
    pub available_seats: i32,
}

/// Everything the booking store needs to create a pending booking.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub user_id: String,
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub seats: i32,
    pub total_amount: f64,
}

#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: f64,
}

/// The booking wizard's draft state. Pure state machine: handlers orchestrate
/// store and gateway calls around it, so a failed external call simply never
/// advances the step.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    movie_id: String,
    step: WizardStep,
    showtime: Option<ShowtimeChoice>,
    user_id: Option<String>,
    seat_count: u32,
    selected_seats: Vec<String>,
    layout: Option<SeatLayout>,
    booking_id: Option<String>,
    payment_id: Option<String>,
}

impl BookingWizard {
    pub fn new(movie_id: String) -> Self {
        Self {
            movie_id,
            step: WizardStep::Theaters,
            showtime: None,
            user_id: None,
            seat_count: 1,
            selected_seats: Vec::new(),
            layout: None,
            booking_id: None,
            payment_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub fn showtime(&self) -> Option<&ShowtimeChoice> {
        self.showtime.as_ref()
    }

    pub fn seat_count(&self) -> u32 {
        self.seat_count
    }

    pub fn selected_seats(&self) -> &[String] {
        &self.selected_seats
    }

    pub fn layout(&self) -> Option<&SeatLayout> {
        self.layout.as_ref()
    }

    pub fn booking_id(&self) -> Option<&str> {
        self.booking_id.as_deref()
    }

    pub fn payment_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    pub fn total_amount(&self) -> f64 {
        self.showtime
            .as_ref()
            .map(|st| st.price * self.seat_count as f64)
            .unwrap_or(0.0)
    }

    fn guard(&self, action: &'static str, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                action,
                step: self.step.as_str(),
            })
        }
    }

    /// Records (or replaces) the showtime pick while on the theaters step.
    pub fn select_showtime(&mut self, choice: ShowtimeChoice) -> Result<(), WizardError> {
        self.guard("select showtime", WizardStep::Theaters)?;
        self.showtime = Some(choice);
        Ok(())
    }

    /// Theaters -> Seats. Gated: requires an authenticated actor and a
    /// selected showtime, in that order.
    pub fn proceed_to_seats(&mut self, user_id: Option<&str>) -> Result<(), WizardError> {
        self.guard("proceed to seats", WizardStep::Theaters)?;

        let user_id = user_id.ok_or(WizardError::AuthRequired)?;
        if self.showtime.is_none() {
            return Err(WizardError::ShowtimeRequired);
        }

        self.user_id = Some(user_id.to_string());
        self.step = WizardStep::Seats;
        Ok(())
    }

    pub fn set_seat_count(&mut self, count: u32) -> Result<(), WizardError> {
        self.guard("set seat count", WizardStep::Seats)?;
        if count < 1 || count > MAX_SEATS_PER_BOOKING {
            return Err(WizardError::InvalidSeatCount(count));
        }
        self.seat_count = count;
        Ok(())
    }

    /// Seats -> SeatSelection. Any prior selection is cleared (the seat count
    /// may have changed) and a freshly generated layout is installed.
    pub fn proceed_to_seat_selection(&mut self, layout: SeatLayout) -> Result<(), WizardError> {
        self.guard("proceed to seat selection", WizardStep::Seats)?;
        self.selected_seats.clear();
        self.layout = Some(layout);
        self.step = WizardStep::SeatSelection;
        Ok(())
    }

    /// Applies the picker click rule: filled and unknown seats are no-ops,
    /// selected seats deselect, unselected seats select only below the cap.
    pub fn toggle_seat(&mut self, seat_id: &str) -> Result<(), WizardError> {
        self.guard("toggle seat", WizardStep::SeatSelection)?;

        let Some(layout) = &self.layout else {
            return Err(WizardError::InvalidTransition {
                action: "toggle seat",
                step: self.step.as_str(),
            });
        };

        if !layout.contains(seat_id) || layout.is_filled(seat_id) {
            return Ok(());
        }

        if let Some(pos) = self.selected_seats.iter().position(|s| s == seat_id) {
            self.selected_seats.remove(pos);
        } else if (self.selected_seats.len() as u32) < self.seat_count {
            self.selected_seats.push(seat_id.to_string());
        }

        Ok(())
    }

    /// Validates the draft for checkout without advancing. The caller creates
    /// the pending booking and then reports back via [`Self::booking_created`],
    /// so a rejected create leaves the wizard on the seat-selection step.
    pub fn checkout(&self) -> Result<CheckoutRequest, WizardError> {
        self.guard("confirm seats", WizardStep::SeatSelection)?;

        if self.selected_seats.len() as u32 != self.seat_count {
            return Err(WizardError::SeatSelectionIncomplete {
                selected: self.selected_seats.len(),
                required: self.seat_count,
            });
        }

        let showtime = self.showtime.as_ref().ok_or(WizardError::ShowtimeRequired)?;
        let user_id = self.user_id.clone().ok_or(WizardError::AuthRequired)?;

        Ok(CheckoutRequest {
            user_id,
            movie_id: self.movie_id.clone(),
            theater_id: showtime.theater_id.clone(),
            showtime: showtime.showtime.clone(),
            seats: self.seat_count as i32,
            total_amount: self.total_amount(),
        })
    }

    /// SeatSelection -> Payment, once the store accepted the pending booking.
    pub fn booking_created(&mut self, booking_id: String) -> Result<(), WizardError> {
        self.guard("record booking", WizardStep::SeatSelection)?;
        self.booking_id = Some(booking_id);
        self.step = WizardStep::Payment;
        Ok(())
    }

    /// Payment -> Processing. Returns what the gateway needs to charge.
    pub fn begin_processing(&mut self) -> Result<PaymentRequest, WizardError> {
        self.guard("pay", WizardStep::Payment)?;

        let booking_id = self.booking_id.clone().ok_or(WizardError::InvalidTransition {
            action: "pay",
            step: self.step.as_str(),
        })?;

        let amount = self.total_amount();
        self.step = WizardStep::Processing;
        Ok(PaymentRequest { booking_id, amount })
    }

    /// Processing -> Success.
    pub fn payment_succeeded(&mut self, payment_id: String) -> Result<(), WizardError> {
        self.guard("complete payment", WizardStep::Processing)?;
        self.payment_id = Some(payment_id);
        self.step = WizardStep::Success;
        Ok(())
    }

    /// Processing -> Payment. The booking stays pending in the store; a retry
    /// will mint a fresh payment id.
    pub fn payment_failed(&mut self) -> Result<(), WizardError> {
        self.guard("fail payment", WizardStep::Processing)?;
        self.step = WizardStep::Payment;
        Ok(())
    }

    /// One step back towards `Theaters`. `Processing` and `Success` have no
    /// backward edge.
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.step = match self.step {
            WizardStep::Seats => WizardStep::Theaters,
            WizardStep::SeatSelection => WizardStep::Seats,
            WizardStep::Payment => WizardStep::SeatSelection,
            other => {
                return Err(WizardError::InvalidTransition {
                    action: "go back",
                    step: other.as_str(),
                });
            }
        };
        Ok(())
    }
}

use serde::Deserialize;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub poster_url: String,
    pub rating: f64,
    pub votes: String,
    pub genres: Vec<String>,
    pub language: String,
    pub duration: String,
    pub available_seats: i32,
}

#[derive(Deserialize)]
pub struct UpdateSeatsRequest {
    pub available_seats: i32,
}

#[derive(Deserialize)]
pub struct CreateTheaterRequest {
    pub name: String,
    pub location: String,
}

#[derive(Deserialize)]
pub struct CreateShowtimeRequest {
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub price: f64,
    pub available_seats: i32,
}

#[derive(Deserialize)]
pub struct StartWizardRequest {
    pub movie_id: String,
}

#[derive(Deserialize)]
pub struct SelectShowtimeRequest {
    pub showtime_id: String,
}

#[derive(Deserialize)]
pub struct SeatCountRequest {
    pub seat_count: u32,
}

#[derive(Deserialize)]
pub struct ToggleSeatRequest {
    pub seat_id: String,
}

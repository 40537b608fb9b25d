pub mod home;
pub mod itinerary_detail;

pub use home::Home;
pub use itinerary_detail::ItineraryDetail;

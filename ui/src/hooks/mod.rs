pub mod use_appointments;
pub mod use_doctor_notes;
pub mod use_itinerary;
pub mod use_live_query;
pub mod use_prescriptions;

pub use use_appointments::use_appointments;
pub use use_doctor_notes::use_doctor_notes;
pub use use_itinerary::use_itinerary;
pub use use_live_query::{LiveQueryReturn, use_live_query};
pub use use_prescriptions::use_prescriptions;

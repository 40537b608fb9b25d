//! Shared document and id types for the careplan frontend.
//!
//! These mirror the wire shape of the external document store: camelCase
//! field names, document ids as plain strings (uuids), timestamps as
//! RFC 3339 strings.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod documents;

pub use documents::{
    Appointment, AuditStamp, DoctorNote, Itinerary, Prescription,
};

/// Collection names as the external store knows them.
pub mod collections {
    pub const ITINERARIES: &str = "itineraries";
    pub const APPOINTMENTS: &str = "appointments";
    pub const DOCTOR_NOTES: &str = "doctorNotes";
    pub const PRESCRIPTIONS: &str = "prescriptions";
}

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            Display,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

id_type!(ItineraryId);
id_type!(AppointmentId);
id_type!(NoteId);
id_type!(PrescriptionId);

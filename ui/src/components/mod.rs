pub mod header;
pub mod modal;
pub mod note_list;
pub mod prescription_list;
pub mod sidebar;

pub use header::Header;
pub use modal::{Modal, ModalHost};
pub use note_list::NoteList;
pub use prescription_list::PrescriptionList;
pub use sidebar::Sidebar;

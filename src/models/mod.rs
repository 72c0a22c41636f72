pub mod raw_visit;
pub mod shift_type;
pub mod visit;

pub use raw_visit::RawVisit;
pub use shift_type::ShiftType;
pub use visit::Visit;

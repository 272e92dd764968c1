pub mod page;
pub mod socket;

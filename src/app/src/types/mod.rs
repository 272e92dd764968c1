pub mod button;
pub mod catalog;
pub mod form;
pub mod gate;
pub mod request;

pub use button::*;
pub use form::*;
pub use gate::*;
pub use request::*;

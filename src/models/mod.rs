pub mod session;
pub mod ticket;

pub use session::AdminSession;
pub use ticket::{City, Flight, Ticket};

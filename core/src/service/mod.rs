pub mod session;

pub use session::{Response, Session};

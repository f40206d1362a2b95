pub mod handlers;
pub mod tailor;

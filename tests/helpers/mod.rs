pub mod setup;
pub mod unreachable;

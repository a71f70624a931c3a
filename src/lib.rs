mod error;
mod put_recorder;

pub mod client;
pub mod forwarder;
pub mod sync_forwarder;

pub use error::Error;

pub mod config;
pub mod controller_message;
pub mod geometry;
pub mod particle;
pub mod posbox;
pub mod pworld;
pub mod rope;
pub mod run_state;
pub mod session;
pub mod stick;
pub mod time_manager;

pub use protocol::V2;

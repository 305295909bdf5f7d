pub mod deliveries;
pub mod state;

pub mod attendance;
pub mod weekday;

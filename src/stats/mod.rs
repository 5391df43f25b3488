pub mod aggregate;
pub mod grouping;
pub mod report;
pub mod time;

//! Data models shared by the services and the command layer

pub mod series;
pub mod report;

pub use series::{Sample, Series};
pub use report::{Report, TradeWindow, VolumePeak};

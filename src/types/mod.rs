pub mod daily;
pub mod frames;
pub mod metric;
pub mod observation;
pub mod period;

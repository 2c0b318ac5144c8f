pub mod daily_frame;

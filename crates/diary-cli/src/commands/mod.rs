pub mod calendar;
pub mod entries;
pub mod init;
pub mod misc;
pub mod paid;
pub mod stats;
pub mod tags;

pub mod calendar;
pub mod menu;

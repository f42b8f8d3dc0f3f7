pub mod leave_record;
pub mod menu;
pub mod role;

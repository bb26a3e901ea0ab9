pub mod daily_assignments;

pub mod machine;
pub mod reading;
pub mod report;

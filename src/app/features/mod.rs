pub mod advisory;
pub mod attachment;
pub mod audit;
pub mod courses;
pub mod hierarchy;
pub mod organization;
pub mod plans;
pub mod training;
pub mod users;

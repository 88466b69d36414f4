pub mod point;
pub mod records;
pub mod response;

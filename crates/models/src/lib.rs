pub mod days;
pub mod grade;
pub mod meeting;
pub mod term;

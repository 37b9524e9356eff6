use chrono::NaiveDate;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Role {
    Student,
    Teacher,
}

/// Identity shared by students and teachers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub date_enrolled: NaiveDate,
}

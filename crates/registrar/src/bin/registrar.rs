use chrono::NaiveDate;
use log::info;
use models::meeting::{Room, TimeRange, WeeklyMeeting};
use registrar::{Campus, Course, RegistrarConfig, Semester, faculty::SpecializationKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Walks a small term through registration and grading
fn main() {
    env_logger::init();

    let config = RegistrarConfig::from_env().expect("Failed to load registrar configuration");
    let mut campus = Campus::new(config);

    let science = campus.add_faculty("Science");
    let cs = campus
        .add_specialization("Computer Science", SpecializationKind::Major, science)
        .expect("faculty exists");

    let teacher = campus
        .hire_teacher("Grace Hopper", Some(science), date(2015, 8, 15))
        .expect("faculty exists");
    let students = ["Alan Turing", "Ada Lovelace"].map(|name| {
        campus
            .admit_student(name, cs, None, date(2023, 9, 1))
            .expect("specialization exists")
    });

    let intro = campus.add_course(
        Course::new("CS101", "Introduction to Programming", 3, 1).with_meeting(WeeklyMeeting::new(
            Room::specific("SCI", "101"),
            "MWF".parse().expect("valid day letters"),
            TimeRange::from_hm((9, 0), (9, 50)).expect("valid time range"),
        )),
    );

    let mut semester =
        Semester::new(date(2024, 9, 2), date(2024, 12, 13)).expect("valid semester dates");
    info!("{semester} ({} weeks)", semester.weeks());

    let outcome = semester
        .register(&mut campus, intro, &students, teacher)
        .expect("all handles belong to this campus");
    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).expect("outcome serializes")
    );

    for &student in &outcome.accepted {
        campus
            .enter_course_grade(student, intro, "A")
            .expect("student is registered");
        let gpa = campus.calculate_gpa(student).expect("student exists");
        let status = campus
            .student_mut(student)
            .expect("student exists")
            .gpa_status();
        println!("student {student}: GPA {gpa:.2} ({status})");
    }
}

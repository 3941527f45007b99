use gradebook::{ErrorKind, Grade, GradeBook, Status, StoreError, NO_DATA};

#[test]
fn add_then_query_derives_average_and_grade() {
    let mut book = GradeBook::new();
    book.add_student("John Smith", &[85.0, 92.0, 78.0, 88.0, 90.0])
        .unwrap();

    let decorated = book.students_with_grades();
    assert_eq!(decorated.len(), 1);
    assert_eq!(decorated[0].average, 86.6);
    assert_eq!(decorated[0].grade, Grade::B);
    assert_eq!(decorated[0].status, Status::Passing);
}

#[test]
fn a_full_class_walkthrough() {
    let mut book = GradeBook::new();
    book.add_student("John Smith", &[85.0, 92.0, 78.0, 88.0, 90.0])
        .unwrap(); // 86.6 B
    book.add_student("Emma Wilson", &[95.0, 98.0, 92.0, 96.0, 94.0])
        .unwrap(); // 95 A
    book.add_student("Michael Brown", &[72.0, 68.0, 75.0, 70.0, 73.0])
        .unwrap(); // 71.6 C
    book.add_student("Sarah Davis", &[55.0, 48.0, 62.0, 58.0, 52.0])
        .unwrap(); // 55 F
    book.add_student("David Lee", &[88.0, 85.0, 90.0, 87.0, 91.0])
        .unwrap(); // 88.2 B

    // bad inputs bounce without touching the store
    assert!(book.add_student("", &[90.0]).is_err());
    assert!(book.add_student("John Smith", &[85.0]).is_err());
    assert!(book.add_student("Test User", &[105.0]).is_err());
    assert_eq!(book.len(), 5);

    let failing = book.failing_students();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].name, "Sarah Davis");

    let top = book.top_performer().unwrap();
    assert_eq!(top.name, "Emma Wilson");
    assert_eq!(top.average, 95.0);

    let smiths = book.search("Smith");
    assert_eq!(smiths.len(), 1);
    assert_eq!(smiths[0].name, "John Smith");

    let a_students = book.students_by_grade("A");
    assert_eq!(a_students.len(), 1);
    assert_eq!(a_students[0].name, "Emma Wilson");
    assert_eq!(book.students_by_grade("B").len(), 2);

    let stats = book.class_statistics();
    assert_eq!(stats.total_students, 5);
    assert_eq!(stats.class_average, 79.28);
    assert_eq!(stats.highest_average, 95.0);
    assert_eq!(stats.lowest_average, 55.0);
    assert_eq!(stats.passing_rate, 80);
    assert_eq!(stats.grade_distribution.count(Grade::A), 1);
    assert_eq!(stats.grade_distribution.count(Grade::B), 2);
    assert_eq!(stats.grade_distribution.count(Grade::C), 1);
    assert_eq!(stats.grade_distribution.count(Grade::D), 0);
    assert_eq!(stats.grade_distribution.count(Grade::F), 1);
}

#[test]
fn case_variant_duplicate_is_a_conflict_and_store_is_unchanged() {
    let mut book = GradeBook::new();
    book.add_student("Ann Lee", &[90.0, 80.0, 70.0]).unwrap();

    let err = book.add_student("ann lee", &[50.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(matches!(err, StoreError::DuplicateName(_)));

    let students = book.students();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Ann Lee");
    assert_eq!(students[0].scores, vec![90.0, 80.0, 70.0]);
}

#[test]
fn ann_lee_scenario() {
    let mut book = GradeBook::new();

    let added = book.add_student("Ann Lee", &[90.0, 80.0, 70.0]).unwrap();
    let decorated = book.students_with_grades();
    assert_eq!(decorated[0].average, 80.0);
    assert_eq!(decorated[0].grade, Grade::B);
    assert_eq!(decorated[0].status, Status::Passing);

    assert!(book.add_student("ann lee", &[50.0]).is_err());
    assert_eq!(book.len(), 1);

    let removed = book.remove_student("Ann Lee").unwrap();
    assert_eq!(removed.name, "Ann Lee");
    assert!(book.is_empty());

    let undone = book.undo().unwrap();
    assert_eq!(undone, "Removed student: Ann Lee");
    let students = book.students();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, added.id);
    assert_eq!(students[0].scores, vec![90.0, 80.0, 70.0]);
}

#[test]
fn empty_store_queries_are_well_defined() {
    let book = GradeBook::new();
    assert!(book.students_with_grades().is_empty());
    assert!(book.failing_students().is_empty());
    assert!(book.top_performer().is_none());
    assert!(book.search("anyone").is_empty());
    assert!(book.students_by_grade("A").is_empty());

    let stats = book.class_statistics();
    assert_eq!(stats.total_students, 0);
    assert_eq!(stats.class_average, 0.0);
    assert_eq!(stats.highest_average, 0.0);
    assert_eq!(stats.lowest_average, 0.0);
    assert_eq!(stats.passing_rate, 0);
    for grade in Grade::ALL {
        assert_eq!(stats.grade_distribution.count(grade), 0);
    }

    assert_eq!(book.export_as_csv(), NO_DATA);
}

#[test]
fn queries_hand_out_copies_not_live_state() {
    let mut book = GradeBook::new();
    book.add_student("Ann Lee", &[90.0]).unwrap();

    let mut copy = book.students();
    copy[0].name = "Hacked".to_string();
    copy[0].scores.clear();

    let stored = book.students();
    assert_eq!(stored[0].name, "Ann Lee");
    assert_eq!(stored[0].scores, vec![90.0]);
}

#[test]
fn exports_cover_the_whole_projection() {
    let mut book = GradeBook::new();
    book.add_student("Ann Lee", &[90.0, 80.0, 70.0]).unwrap();
    book.add_student("Sara Day", &[50.0]).unwrap();

    let csv = book.export_as_csv();
    assert!(csv.starts_with("ID,Name,Scores,Average,Grade,Status\n"));
    assert!(csv.contains("Ann Lee,\"90, 80, 70\",80,B,Passing"));
    assert!(csv.contains("Sara Day,\"50\",50,F,Failing"));

    let report = book.export_as_report();
    assert!(report.contains("Total Students: 2"));
    assert!(report.contains("Passing Rate: 50%"));

    let json = book.export_as_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["students"].as_array().unwrap().len(), 2);
    assert_eq!(value["statistics"]["totalStudents"], 2);
}

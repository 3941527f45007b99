//! Derived views over the record list: grades, filters, statistics.
//!
//! Everything here is a pure projection computed on demand. Nothing is
//! cached or written back to the store.

use serde::{Deserialize, Serialize};

use crate::grade::{Grade, GradeDistribution, Status, PASSING_AVERAGE};
use crate::store::GradeBook;
use crate::student::Student;
use crate::validate::normalize;

/// A record decorated with its derived average, grade band, and status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithGrade {
    pub id: String,
    pub name: String,
    pub scores: Vec<f64>,
    pub average: f64,
    pub grade: Grade,
    pub status: Status,
}

impl StudentWithGrade {
    fn decorate(student: &Student) -> Self {
        let average = calculate_average(&student.scores);
        let grade = Grade::from_average(average);
        StudentWithGrade {
            id: student.id.clone(),
            name: student.name.clone(),
            scores: student.scores.clone(),
            average,
            grade,
            status: Status::from_grade(grade),
        }
    }
}

/// Aggregate view of the whole class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStatistics {
    pub total_students: usize,
    /// Mean of the per-student averages, rounded to two decimals.
    pub class_average: f64,
    pub highest_average: f64,
    pub lowest_average: f64,
    /// Percentage of students with an average of at least 60, rounded to
    /// the nearest integer.
    pub passing_rate: u32,
    pub grade_distribution: GradeDistribution,
}

impl ClassStatistics {
    /// The well-defined value for a class with no records. An empty
    /// store is not an error.
    pub fn empty() -> Self {
        ClassStatistics {
            total_students: 0,
            class_average: 0.0,
            highest_average: 0.0,
            lowest_average: 0.0,
            passing_rate: 0,
            grade_distribution: GradeDistribution::default(),
        }
    }
}

/// Arithmetic mean rounded to two decimal places; 0 for no scores.
pub fn calculate_average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: f64 = scores.iter().sum();
    round2(sum / scores.len() as f64)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl GradeBook {
    /// All records decorated with average, grade, and status, in
    /// insertion order.
    pub fn students_with_grades(&self) -> Vec<StudentWithGrade> {
        self.records().iter().map(StudentWithGrade::decorate).collect()
    }

    /// Students whose average falls below the passing mark.
    pub fn failing_students(&self) -> Vec<StudentWithGrade> {
        self.students_with_grades()
            .into_iter()
            .filter(|student| student.average < PASSING_AVERAGE)
            .collect()
    }

    /// The student with the highest average. Ties resolve to the
    /// first-added student.
    pub fn top_performer(&self) -> Option<StudentWithGrade> {
        let mut best: Option<StudentWithGrade> = None;
        for student in self.students_with_grades() {
            match &best {
                Some(current) if student.average <= current.average => {}
                _ => best = Some(student),
            }
        }
        best
    }

    /// Case-insensitive substring search on names. A blank query matches
    /// nothing.
    pub fn search(&self, query: &str) -> Vec<StudentWithGrade> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.students_with_grades()
            .into_iter()
            .filter(|student| student.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Students in one grade band. Unrecognized grade letters yield an
    /// empty list rather than an error.
    pub fn students_by_grade(&self, grade: &str) -> Vec<StudentWithGrade> {
        let Some(wanted) = Grade::parse(grade) else {
            return Vec::new();
        };
        self.students_with_grades()
            .into_iter()
            .filter(|student| student.grade == wanted)
            .collect()
    }

    /// Aggregate statistics for the whole class.
    pub fn class_statistics(&self) -> ClassStatistics {
        let decorated = self.students_with_grades();
        if decorated.is_empty() {
            return ClassStatistics::empty();
        }

        let mut distribution = GradeDistribution::default();
        let mut sum = 0.0;
        let mut highest = f64::NEG_INFINITY;
        let mut lowest = f64::INFINITY;
        let mut passing = 0usize;
        for student in &decorated {
            distribution.record(student.grade);
            sum += student.average;
            if student.average > highest {
                highest = student.average;
            }
            if student.average < lowest {
                lowest = student.average;
            }
            if student.average >= PASSING_AVERAGE {
                passing += 1;
            }
        }

        let total = decorated.len();
        ClassStatistics {
            total_students: total,
            class_average: round2(sum / total as f64),
            highest_average: highest,
            lowest_average: lowest,
            passing_rate: ((passing as f64 / total as f64) * 100.0).round() as u32,
            grade_distribution: distribution,
        }
    }
}

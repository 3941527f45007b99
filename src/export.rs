//! Export serializations: CSV, plain-text report, JSON document.
//!
//! All three are pure functions over the decorated projection and the
//! class statistics; none of them touch stored state.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::analytics::{ClassStatistics, StudentWithGrade};
use crate::error::StoreError;
use crate::grade::Grade;
use crate::store::GradeBook;

/// Sentinel returned by every export when the store holds no records.
pub const NO_DATA: &str = "No data to export";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    export_date: SystemTime,
    statistics: ClassStatistics,
    students: Vec<StudentWithGrade>,
}

fn join_scores(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|score| score.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl GradeBook {
    /// Comma-separated values, one row per student. The score list shares
    /// a single quoted cell.
    pub fn export_as_csv(&self) -> String {
        if self.is_empty() {
            return NO_DATA.to_string();
        }

        let mut csv = String::from("ID,Name,Scores,Average,Grade,Status\n");
        for student in self.students_with_grades() {
            csv.push_str(&format!(
                "{},{},\"{}\",{},{},{}\n",
                student.id,
                student.name,
                join_scores(&student.scores),
                student.average,
                student.grade,
                student.status
            ));
        }
        csv
    }

    /// Human-readable class report: statistics, grade distribution, top
    /// performer, and per-student details.
    pub fn export_as_report(&self) -> String {
        if self.is_empty() {
            return NO_DATA.to_string();
        }

        let stats = self.class_statistics();
        let students = self.students_with_grades();

        let mut report = String::new();
        report.push_str("========================================\n");
        report.push_str("   STUDENT GRADE MANAGEMENT REPORT\n");
        report.push_str("========================================\n\n");

        report.push_str("CLASS STATISTICS:\n");
        report.push_str("----------------------------------------\n");
        report.push_str(&format!("Total Students: {}\n", stats.total_students));
        report.push_str(&format!("Class Average: {}\n", stats.class_average));
        report.push_str(&format!("Highest Average: {}\n", stats.highest_average));
        report.push_str(&format!("Lowest Average: {}\n", stats.lowest_average));
        report.push_str(&format!("Passing Rate: {}%\n\n", stats.passing_rate));

        report.push_str("GRADE DISTRIBUTION:\n");
        report.push_str("----------------------------------------\n");
        for grade in Grade::ALL {
            report.push_str(&format!(
                "{}: {} students\n",
                grade,
                stats.grade_distribution.count(grade)
            ));
        }
        report.push('\n');

        if let Some(top) = self.top_performer() {
            report.push_str("TOP PERFORMER:\n");
            report.push_str("----------------------------------------\n");
            report.push_str(&format!("Name: {}\n", top.name));
            report.push_str(&format!("Average: {}\n", top.average));
            report.push_str(&format!("Grade: {}\n\n", top.grade));
        }

        report.push_str("INDIVIDUAL STUDENT DETAILS:\n");
        report.push_str("========================================\n\n");
        for (position, student) in students.iter().enumerate() {
            report.push_str(&format!("{}. {}\n", position + 1, student.name));
            report.push_str(&format!("   ID: {}\n", student.id));
            report.push_str(&format!("   Scores: {}\n", join_scores(&student.scores)));
            report.push_str(&format!("   Average: {}\n", student.average));
            report.push_str(&format!("   Grade: {}\n", student.grade));
            report.push_str(&format!("   Status: {}\n", student.status));
            report.push_str("----------------------------------------\n");
        }

        let generated = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        report.push_str(&format!(
            "\nReport generated: {} (seconds since epoch)\n",
            generated
        ));
        report
    }

    /// Pretty-printed JSON document of statistics plus the decorated
    /// record list.
    pub fn export_as_json(&self) -> Result<String, StoreError> {
        if self.is_empty() {
            return Ok(NO_DATA.to_string());
        }

        let document = ExportDocument {
            export_date: SystemTime::now(),
            statistics: self.class_statistics(),
            students: self.students_with_grades(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::Corrupted(format!("json export: {e}")))
    }
}

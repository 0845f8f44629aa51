use internhub::{
    export::{export_filename, to_csv, Download},
    listing::ListController,
    model::{
        applicant::{Applicant, ApplicantStatus},
        user::{UserStatus, UserType},
    },
};

use super::*;

/// Counts the columns of a CSV line, ignoring commas inside quoted fields.
fn columns(line: &str) -> usize {
    let mut quoted = false;
    let mut count = 1;
    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => count += 1,
            _ => {}
        }
    }
    count
}

/// Tests a 3-record export where one field contains a comma.
///
/// Expected: every row has the header's column count
#[test]
fn comma_in_a_field_keeps_columns_aligned() {
    let users = vec![
        factory::user(1, "Ana López", UserType::Student, UserStatus::Active),
        factory::user(2, "Tech Solutions, S.A.", UserType::Company, UserStatus::Active),
        factory::user(3, "Carlos Ruiz", UserType::Admin, UserStatus::Inactive),
    ];

    let csv = to_csv(&users);
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), 4);
    let header_columns = columns(lines[0]);
    for line in &lines[1..] {
        assert_eq!(columns(line), header_columns, "{}", line);
    }
    assert!(lines[2].contains("\"Tech Solutions, S.A.\""));
}

/// Tests that only the filtered applicants are exported.
///
/// Expected: header plus the two applicants of offer 1
#[test]
fn applicant_export_uses_visible_rows() {
    let mut list = ListController::<Applicant>::new(1);
    list.replace_all(vec![
        factory::applicant(1, "Laura Gómez", 1, ApplicantStatus::New),
        factory::applicant(2, "Juan Pérez", 2, ApplicantStatus::New),
        factory::applicant(3, "María Díaz", 1, ApplicantStatus::Accepted),
    ]);
    list.set_filter("offer", "1");
    list.apply_filters();

    let date = factory::created_date();
    let download = Download::csv(export_filename("applicants", date), to_csv(list.filtered()));
    let content = String::from_utf8_lossy(&download.bytes).to_string();

    assert_eq!(download.filename, "applicants_2025-09-01.csv");
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("Laura Gómez"));
    assert!(!content.contains("Juan Pérez"));
}

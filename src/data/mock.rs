//! Generated records for the in-memory backend.
//!
//! Every generator takes the random source and the current time explicitly, so a fixed seed
//! and instant always produce the same data.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng};

use crate::model::{
    applicant::{Applicant, ApplicantStatus},
    company_offer::{CompanyOffer, CompanyOfferStatus},
    dashboard::Activity,
    document::UserDocument,
    offer::{Modality, Offer, OfferStatus},
    report::{Report, ReportFormat, ReportType},
    user::{User, UserStatus, UserType},
};

pub const USER_COUNT: usize = 50;
pub const OFFER_COUNT: usize = 30;

const PEOPLE: [&str; 8] = [
    "Juan Pérez",
    "María García",
    "Carlos López",
    "Ana Martínez",
    "Pedro Rodríguez",
    "Laura Fernández",
    "Diego Sánchez",
    "Sofia Torres",
];

const COMPANIES: [&str; 6] = [
    "Tech Solutions",
    "Data Corp",
    "XYZ Company",
    "Innovate SA",
    "Digital Plus",
    "Global Systems",
];

const OFFER_TITLES: [&str; 10] = [
    "Frontend Web Developer",
    "UI/UX Designer",
    "Data Analyst",
    "Backend Developer",
    "Software Engineer",
    "Digital Marketing Specialist",
    "Junior Accountant",
    "Administrative Assistant",
    "Mobile Developer",
    "Systems Analyst",
];

fn pick<'a, T>(rng: &mut StdRng, values: &'a [T]) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn users(rng: &mut StdRng, count: usize, now: DateTime<Utc>) -> Vec<User> {
    (1..=count as u64)
        .map(|id| {
            let user_type = *pick(rng, UserType::ALL);
            let name = match user_type {
                UserType::Company => pick(rng, &COMPANIES).to_string(),
                _ => pick(rng, &PEOPLE).to_string(),
            };

            User {
                id,
                name: format!("{} {}", name, id),
                email: format!("user{}@example.com", id),
                user_type,
                status: *pick(rng, UserStatus::ALL),
                created_at: now - Duration::minutes(rng.random_range(0..365 * 24 * 60)),
                last_login: Some(now - Duration::minutes(rng.random_range(0..30 * 24 * 60))),
            }
        })
        .collect()
}

pub fn offers(rng: &mut StdRng, count: usize, now: DateTime<Utc>) -> Vec<Offer> {
    (1..=count as u64)
        .map(|id| {
            let status = *pick(rng, OfferStatus::ALL);

            Offer {
                id,
                title: pick(rng, &OFFER_TITLES).to_string(),
                company: pick(rng, &COMPANIES).to_string(),
                description: "Professional internship offer for final-year students.".to_string(),
                requirements: "Active student with knowledge of the area.".to_string(),
                salary: rng.random_range(1_000_000..3_000_000),
                duration: rng.random_range(3..9),
                modality: *pick(rng, Modality::ALL),
                location: "Medellín, Colombia".to_string(),
                status,
                applications: rng.random_range(0..50),
                created_at: now - Duration::minutes(rng.random_range(0..60 * 24 * 60)),
                rejection_reason: (status == OfferStatus::Rejected)
                    .then(|| "Incomplete offer description".to_string()),
            }
        })
        .collect()
}

pub fn reports(now: DateTime<Utc>) -> Vec<Report> {
    let entries = [
        ("Weekly Activity Report", ReportType::Activity, ReportFormat::Pdf, 2, 2.3),
        ("Published Offers - October", ReportType::Offers, ReportFormat::Excel, 5, 1.8),
        ("Registered Users - September", ReportType::Users, ReportFormat::Pdf, 7, 3.1),
        ("Applications of the Month", ReportType::Applications, ReportFormat::Excel, 10, 4.5),
    ];

    entries
        .into_iter()
        .zip(1..)
        .map(|((name, report_type, format, days_ago, megabytes), id)| Report {
            id,
            name: name.to_string(),
            report_type,
            format,
            created_at: now - Duration::days(days_ago),
            size: megabytes_to_bytes(megabytes),
        })
        .collect()
}

/// Size of a freshly generated report, between 1 and 6 MB.
pub fn report_size(rng: &mut StdRng) -> u64 {
    megabytes_to_bytes(rng.random_range(1.0..6.0))
}

fn megabytes_to_bytes(megabytes: f64) -> u64 {
    (megabytes * 1024.0 * 1024.0) as u64
}

pub fn company_offers() -> Vec<CompanyOffer> {
    vec![
        CompanyOffer {
            id: 1,
            title: "Frontend Web Developer".to_string(),
            description: "We are looking for a frontend developer with React experience"
                .to_string(),
            area: "Technology".to_string(),
            requirements: "React, JavaScript, CSS".to_string(),
            status: CompanyOfferStatus::Active,
            applicants: 5,
            vacancies: 2,
            duration: 6,
            modality: Modality::Hybrid,
            published_date: Some(date(2025, 10, 1)),
            created_date: date(2025, 9, 28),
        },
        CompanyOffer {
            id: 2,
            title: "UI/UX Designer".to_string(),
            description: "Designer with experience building user interfaces".to_string(),
            area: "Design".to_string(),
            requirements: "Figma, Adobe XD, Sketch".to_string(),
            status: CompanyOfferStatus::Active,
            applicants: 3,
            vacancies: 1,
            duration: 6,
            modality: Modality::Remote,
            published_date: Some(date(2025, 9, 28)),
            created_date: date(2025, 9, 25),
        },
        CompanyOffer {
            id: 3,
            title: "Data Analyst".to_string(),
            description: "Analyst for data processing and visualization".to_string(),
            area: "Technology".to_string(),
            requirements: "Python, SQL, Power BI".to_string(),
            status: CompanyOfferStatus::Draft,
            applicants: 0,
            vacancies: 1,
            duration: 6,
            modality: Modality::OnSite,
            published_date: None,
            created_date: date(2025, 10, 5),
        },
        CompanyOffer {
            id: 4,
            title: "Backend Developer".to_string(),
            description: "Backend developer with Django experience".to_string(),
            area: "Technology".to_string(),
            requirements: "Python, Django, PostgreSQL".to_string(),
            status: CompanyOfferStatus::Closed,
            applicants: 4,
            vacancies: 1,
            duration: 6,
            modality: Modality::Hybrid,
            published_date: Some(date(2025, 9, 15)),
            created_date: date(2025, 9, 10),
        },
    ]
}

pub fn applicants() -> Vec<Applicant> {
    let entries = [
        ("Juan Pérez García", "juan.perez", "300-123-4567", 1, "Systems Engineering", 8, ApplicantStatus::New, date(2025, 10, 5), ""),
        ("María García López", "maria.garcia", "301-234-5678", 2, "Graphic Design", 7, ApplicantStatus::Reviewing, date(2025, 10, 4), "Excellent portfolio"),
        ("Carlos López Martínez", "carlos.lopez", "302-345-6789", 1, "Systems Engineering", 9, ApplicantStatus::New, date(2025, 10, 3), ""),
        ("Ana Martínez Rodríguez", "ana.martinez", "303-456-7890", 2, "Graphic Design", 8, ApplicantStatus::Accepted, date(2025, 10, 2), "Accepted for interview"),
        ("Pedro Sánchez Gómez", "pedro.sanchez", "304-567-8901", 1, "Systems Engineering", 6, ApplicantStatus::Rejected, date(2025, 9, 30), "Does not meet the minimum requirements"),
    ];

    let offers = company_offers();

    entries
        .into_iter()
        .zip(1..)
        .map(
            |((name, handle, phone, offer_id, program, semester, status, applied, notes), id)| {
                let offer_title = offers
                    .iter()
                    .find(|offer| offer.id == offer_id)
                    .map(|offer| offer.title.clone())
                    .unwrap_or_default();

                Applicant {
                    id,
                    name: name.to_string(),
                    email: format!("{}@example.com", handle),
                    phone: phone.to_string(),
                    offer_id,
                    offer_title,
                    program: program.to_string(),
                    semester,
                    status,
                    application_date: applied,
                    cv: Some(format!("/files/cv_{}.pdf", handle.replace('.', "_"))),
                    notes: notes.to_string(),
                }
            },
        )
        .collect()
}

pub fn admin_activity(now: DateTime<Utc>) -> Vec<Activity> {
    activity(
        now,
        &[
            ("New user registered: Juan Pérez", Duration::minutes(5)),
            ("Offer \"Web Developer\" published by XYZ Company", Duration::hours(1)),
            ("Student María García applied to \"UI/UX Designer\"", Duration::hours(3)),
            ("Offer \"Data Analysis\" approved by the administrator", Duration::days(1)),
            ("Weekly activity report generated", Duration::days(2)),
        ],
    )
}

pub fn company_activity(now: DateTime<Utc>) -> Vec<Activity> {
    activity(
        now,
        &[
            ("You published \"Frontend Internship\"", Duration::minutes(30)),
            ("2 new applicants for \"Backend\"", Duration::hours(1)),
            ("You saved the draft \"Data Analyst\"", Duration::days(1)),
        ],
    )
}

fn activity(now: DateTime<Utc>, entries: &[(&str, Duration)]) -> Vec<Activity> {
    entries
        .iter()
        .zip(1..)
        .map(|((description, ago), id)| Activity {
            id,
            description: description.to_string(),
            timestamp: now - *ago,
        })
        .collect()
}

/// Plain-text body shown when previewing or downloading a report.
pub fn report_content(report: &Report) -> String {
    format!(
        "REPORT: {name}\n\
         Format: {format}\n\
         Generated: {created}\n\
         \n\
         ========================================\n\
         EXECUTIVE SUMMARY\n\
         ========================================\n\
         \n\
         Report generated by the internship management system.\n\
         \n\
         Report type: {kind}\n\
         \n\
         ========================================\n\
         KEY FIGURES\n\
         ========================================\n\
         \n\
         Total records: 150\n\
         Active: 120\n\
         Inactive: 30\n",
        name = report.name,
        format = report.format.label(),
        created = report.created_at.format("%Y-%m-%d"),
        kind = report.report_type.label(),
    )
}

/// Plain-text rendition of a user document.
pub fn document_content(user: &User, document: &UserDocument) -> String {
    let body = match document.kind.as_str() {
        "CV" => "PROFESSIONAL PROFILE\n\
                 Final-semester student with solid knowledge of software development\n\
                 and project management.\n\
                 \n\
                 TECHNICAL SKILLS\n\
                 JavaScript, Python, Java\n\
                 React, Django, Node.js\n",
        _ => "This document was supplied during registration and is kept on file.\n",
    };

    format!(
        "{kind}\n\
         ========================================\n\
         Owner: {name}\n\
         Email: {email}\n\
         File: {file}\n\
         \n\
         {body}",
        kind = document.kind.to_uppercase(),
        name = user.name,
        email = user.email,
        file = document.name,
        body = body,
    )
}

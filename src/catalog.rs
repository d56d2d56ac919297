//! Built-in sample data: a parsed resume and a small job catalog

use crate::model::{Education, EndDate, Experience, JobPosting, Resume, Skill};
use chrono::NaiveDate;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid sample date")
}

/// The resume the upload step hands back in demo mode
pub fn sample_resume() -> Resume {
    Resume {
        name: "John Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        phone: Some("555-123-4567".to_string()),
        summary: Some(
            "Dedicated software developer with 3+ years of experience building web applications \
             with modern JavaScript frameworks. Passionate about creating clean, efficient code \
             and learning new technologies."
                .to_string(),
        ),
        education: vec![Education {
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: ymd(2016, 9, 1),
            end_date: ymd(2020, 5, 30),
        }],
        experience: vec![
            Experience {
                company: "Tech Solutions Inc.".to_string(),
                title: "Software Developer".to_string(),
                location: Some("San Francisco, CA".to_string()),
                start_date: ymd(2020, 6, 15),
                end_date: EndDate::Date(ymd(2023, 2, 28)),
                description: vec![
                    "Developed and maintained web applications using React and Node.js".to_string(),
                    "Implemented RESTful APIs and optimized database queries".to_string(),
                    "Collaborated with cross-functional teams to deliver projects on time".to_string(),
                ],
            },
            Experience {
                company: "Digital Innovations".to_string(),
                title: "Junior Developer".to_string(),
                location: Some("San Francisco, CA".to_string()),
                start_date: ymd(2019, 5, 1),
                end_date: EndDate::Date(ymd(2020, 6, 1)),
                description: vec![
                    "Assisted in developing front-end components using React".to_string(),
                    "Participated in code reviews and testing".to_string(),
                    "Fixed bugs and implemented minor features".to_string(),
                ],
            },
        ],
        skills: vec![
            Skill::new("JavaScript").with_level(9).with_category("Programming"),
            Skill::new("React").with_level(8).with_category("Frontend"),
            Skill::new("Node.js").with_level(7).with_category("Backend"),
            Skill::new("TypeScript").with_level(8).with_category("Programming"),
            Skill::new("SQL").with_level(6).with_category("Database"),
            Skill::new("Git").with_level(8).with_category("Tools"),
            Skill::new("Agile Methodology").with_level(7).with_category("Process"),
            Skill::new("Problem Solving").with_level(9).with_category("Soft Skills"),
        ],
    }
}

pub fn sample_job_postings() -> Vec<JobPosting> {
    let mut frontend = JobPosting::new("Frontend Developer", "Tech Innovations Inc.")
        .with_requirements([
            "JavaScript",
            "React",
            "HTML/CSS",
            "Responsive Design",
            "Git version control",
        ])
        .with_preferred_skills(["TypeScript", "Next.js", "Unit Testing", "UI/UX knowledge"]);
    frontend.description = "We are looking for a skilled Frontend Developer to join our product team. \
        You will be responsible for building user interfaces for our web applications."
        .to_string();

    let mut full_stack = JobPosting::new("Full Stack Engineer", "Digital Solutions Ltd.")
        .with_requirements([
            "JavaScript",
            "Node.js",
            "React or Angular",
            "RESTful APIs",
            "SQL databases",
            "Git version control",
        ])
        .with_preferred_skills([
            "TypeScript",
            "Docker",
            "AWS or cloud services",
            "Agile development",
        ]);
    full_stack.description = "Join our team to develop and maintain web applications across the full stack. \
        You'll work on both frontend and backend components."
        .to_string();

    let mut backend = JobPosting::new("Backend Developer", "Data Systems Corp.")
        .with_requirements([
            "Node.js",
            "Express",
            "MongoDB or PostgreSQL",
            "RESTful API design",
            "Authentication and authorization",
        ])
        .with_preferred_skills([
            "GraphQL",
            "Redis",
            "Microservices architecture",
            "CI/CD pipelines",
        ]);
    backend.description = "We're seeking a Backend Developer to build and optimize our server-side \
        applications and databases."
        .to_string();

    vec![frontend, full_stack, backend]
}

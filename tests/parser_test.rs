//! Integration tests for the heuristic resume parser.

use cvkit::model::{LanguageProficiency, SkillLevel};
use cvkit::{Resume, ResumeParser};

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_resume_parse() {
    let input = lines(&[
        "John Smith",
        "john.smith@example.com | (555) 123-4567 | Austin, TX",
        "PROFESSIONAL SUMMARY",
        "Platform engineer with nine years building distributed systems.",
        "WORK EXPERIENCE",
        "Staff Software Engineer",
        "Initech | Austin, TX | Jan 2019 - Present",
        "• Led migration of billing to event sourcing",
        "• Cut p99 latency by 40%",
        "Software Developer",
        "Initrode | Mar 2015 - Dec 2018",
        "• Shipped the customer portal",
        "EDUCATION",
        "B.S. Computer Science",
        "University of Texas | 2015",
        "SKILLS",
        "Backend: Rust, Go, PostgreSQL",
        "Tooling: Docker, Kubernetes",
        "CERTIFICATIONS",
        "• AWS Solutions Architect | Amazon | 2021",
        "LANGUAGES",
        "• English (Native)",
        "• German (Professional working proficiency)",
    ]);

    let resume = ResumeParser::new().parse_lines(&input);

    assert_eq!(resume.personal_info.full_name, "John Smith");
    assert_eq!(resume.personal_info.email, "john.smith@example.com");
    assert!(resume.personal_info.phone.contains("555"));
    assert_eq!(resume.title, "John Smith - Resume");

    assert!(resume.summary.contains("distributed systems"));

    assert_eq!(resume.experience.len(), 2);
    assert_eq!(resume.experience[0].position, "Staff Software Engineer");
    assert_eq!(resume.experience[0].company, "Initech");
    assert_eq!(resume.experience[0].location, "Austin, TX");
    assert!(resume.experience[0].current);
    assert_eq!(resume.experience[0].description.len(), 2);
    assert_eq!(resume.experience[1].company, "Initrode");
    assert_eq!(resume.experience[1].end_date, "Dec 2018");
    assert!(!resume.experience[1].current);

    assert_eq!(resume.education.len(), 1);
    assert_eq!(resume.education[0].degree, "B.S. Computer Science");
    assert_eq!(resume.education[0].institution, "University of Texas");
    assert_eq!(resume.education[0].graduation_date, "2015");

    assert_eq!(resume.skills.len(), 5);
    assert_eq!(resume.skills[0].category, "Backend");
    assert_eq!(resume.skills[0].name, "Rust");
    assert_eq!(resume.skills[0].level, Some(SkillLevel::Intermediate));
    assert_eq!(resume.skills[3].category, "Tooling");

    assert_eq!(resume.certifications.len(), 1);
    assert_eq!(resume.certifications[0].name, "AWS Solutions Architect");
    assert_eq!(resume.certifications[0].issuer, "Amazon");
    assert_eq!(resume.certifications[0].date, "2021");

    assert_eq!(resume.languages.len(), 2);
    assert_eq!(resume.languages[0].proficiency, LanguageProficiency::Native);
    assert_eq!(
        resume.languages[1].proficiency,
        LanguageProficiency::Professional
    );
}

#[test]
fn test_empty_input_matches_new_resume() {
    let parsed = ResumeParser::new().parse_lines(&[]);
    let fresh = Resume::new();

    assert_eq!(parsed.title, fresh.title);
    assert_eq!(parsed.personal_info, fresh.personal_info);
    assert!(parsed.experience.is_empty());
    assert!(parsed.education.is_empty());
    assert!(parsed.skills.is_empty());
    assert_eq!(parsed.sections.len(), fresh.sections.len());
}

#[test]
fn test_headerless_text_yields_contact_only() {
    let input = lines(&[
        "Mary Major",
        "Reach me at mary@example.org any time.",
        "I have done many things in many places.",
    ]);

    let resume = ResumeParser::new().parse_lines(&input);

    assert_eq!(resume.personal_info.full_name, "Mary Major");
    assert_eq!(resume.personal_info.email, "mary@example.org");
    assert!(resume.experience.is_empty());
    assert!(resume.education.is_empty());
    assert!(resume.summary.is_empty());
}

#[test]
fn test_parsed_resume_survives_json_round_trip() {
    let input = lines(&[
        "John Smith",
        "john.smith@example.com",
        "SKILLS",
        "Languages: Python, Go",
    ]);

    let resume = ResumeParser::new().parse_lines(&input);
    let json = resume.to_json().unwrap();
    let back = Resume::from_json(&json).unwrap();

    assert_eq!(back.personal_info, resume.personal_info);
    assert_eq!(back.skills, resume.skills);
    assert_eq!(back.sections.len(), resume.sections.len());
}

#[test]
fn test_generic_shout_case_header_terminates_sections() {
    // An unknown all-caps line should still close the summary body
    let input = lines(&[
        "John Smith",
        "SUMMARY",
        "Short and sweet.",
        "VOLUNTEERING",
        "Helped run a local food bank.",
    ]);

    let resume = ResumeParser::new().parse_lines(&input);
    assert_eq!(resume.summary, "Short and sweet.");
}

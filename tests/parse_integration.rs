//! Integration tests for the portfolio parser

use markfolio::sample::{PLACEHOLDER, SAMPLE};
use markfolio::{parse, Experience, PersonalInfo, Record};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_input_gives_default_record() {
    assert_eq!(parse(""), Record::default());
    assert_eq!(parse("\n\n   \n"), Record::default());
}

#[test]
fn test_title_heading_sets_name() {
    assert_eq!(parse("# Jane Doe\n").personal_info.name, "Jane Doe");
}

#[test]
fn test_experience_body_folds_into_description() {
    let input = r#"
## Experience
### Engineer
**Company:** Acme
More detail.
"#;
    let record = parse(input);
    assert_eq!(
        record.experience,
        vec![Experience {
            title: "Engineer".to_string(),
            description: "**Company:** Acme More detail.".to_string(),
            ..Experience::default()
        }]
    );
    assert_eq!(record.experience[0].company, "");
}

#[test]
fn test_skills_in_order() {
    let record = parse("## Skills\n- Go\n- Rust\n");
    assert_eq!(record.skills, vec!["Go", "Rust"]);
}

#[test]
fn test_second_tech_bullet_replaces_technologies() {
    let input = r#"
## Projects
### Site
- Tech: Rust, Wasm
- Tech stack: Go
"#;
    let record = parse(input);
    insta::assert_debug_snapshot!(record.projects[0], @r###"
    Project {
        name: "Site",
        description: "",
        technologies: [
            "Go",
        ],
        url: None,
        github: None,
    }
    "###);
}

#[test]
fn test_contact_key_matches_every_field() {
    let record = parse("## Contact\nEmail/Title: x@y.com\n");
    assert_eq!(
        record.personal_info,
        PersonalInfo {
            title: "x@y.com".to_string(),
            email: "x@y.com".to_string(),
            ..PersonalInfo::default()
        }
    );
}

#[test]
fn test_sections_can_appear_in_any_order() {
    let input = r#"
## Projects
### Tool
A tool.
## Experience
### Engineer
Did work.
## Summary
Short.
# Late Name
"#;
    let record = parse(input);
    assert_eq!(record.projects.len(), 1);
    assert_eq!(record.experience.len(), 1);
    assert_eq!(record.summary, "Short.");
    assert_eq!(record.personal_info.name, "Late Name");
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(SAMPLE), parse(SAMPLE));
}

#[test]
fn test_arbitrary_input_terminates() {
    let inputs = [
        "###",
        "### \n## \n# ",
        "- \n* \n:::\n## contact\n:\n",
        "## Projects\n- tech\n### \n- tech:,,,\n",
        "\u{feff}# BOM\r\n## Skills\r\n- CRLF\r\n",
    ];
    for input in inputs {
        let record = parse(input);
        assert!(record.experience.iter().all(|e| e.company.is_empty()));
    }
    assert_eq!(parse("## Skills\r\n- CRLF\r\n").skills, vec!["CRLF"]);
}

#[test]
fn test_leading_byte_order_mark_is_ignored() {
    let record = parse("\u{feff}# BOM\r\n## Skills\r\n- CRLF\r\n");
    assert_eq!(record.personal_info.name, "BOM");
    assert_eq!(record.skills, vec!["CRLF"]);
    assert_eq!(parse("## Projects\n### P\n- tech:,,\n").projects[0].technologies, vec!["", "", ""]);
}

#[test]
fn test_sample_round_trip() {
    let record = parse(SAMPLE);
    let info = &record.personal_info;

    assert_eq!(info.name, "John Developer");
    assert_eq!(info.title, "Full Stack Developer");
    assert_eq!(info.email, "john.developer@email.com");
    assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
    assert_eq!(info.location.as_deref(), Some("San Francisco, CA"));
    assert_eq!(info.website.as_deref(), Some("https://johndeveloper.com"));
    assert_eq!(
        info.linkedin.as_deref(),
        Some("https://linkedin.com/in/johndeveloper")
    );
    assert_eq!(info.github.as_deref(), Some("https://github.com/johndeveloper"));

    assert!(record.summary.starts_with("Passionate full-stack developer"));
    assert!(record.summary.ends_with("clean, maintainable code."));

    let titles: Vec<_> = record.experience.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Senior Frontend Developer",
            "Full Stack Developer",
            "Frontend Developer"
        ]
    );
    assert_eq!(
        record.experience[1].description,
        "**Company:** StartupXYZ **Location:** Remote **Duration:** Jun 2020 - Dec 2021 \
         **Description:** Built and maintained multiple web applications using React, Node.js, \
         and PostgreSQL. Collaborated with design team to implement responsive UI/UX."
    );

    assert_eq!(record.education.len(), 1);
    assert_eq!(
        record.education[0].degree,
        "Bachelor of Science in Computer Science"
    );

    assert_eq!(
        record.skills,
        vec![
            "JavaScript (ES6+)",
            "TypeScript",
            "React.js",
            "Node.js",
            "Python",
            "PostgreSQL",
            "MongoDB",
            "AWS",
            "Docker",
            "Git",
            "Agile/Scrum",
        ]
    );

    let names: Vec<_> = record.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["E-commerce Platform", "Task Management App", "Weather Dashboard"]
    );
    assert!(record.projects[1]
        .description
        .contains("**Technologies:** React, Socket.io, Express, MongoDB"));
    assert!(record.projects[2]
        .description
        .ends_with("**GitHub:** https://github.com/johndeveloper/weather-app"));
}

#[test]
fn test_placeholder_round_trip() {
    let record = parse(PLACEHOLDER);
    let info = &record.personal_info;

    assert_eq!(info.name, "Your Name");
    assert_eq!(info.title, "Your Professional Title");
    assert_eq!(info.email, "your.email@example.com");
    assert_eq!(info.location.as_deref(), Some("Your City, State"));
    assert_eq!(info.github.as_deref(), Some("https://github.com/yourusername"));

    assert_eq!(record.experience.len(), 1);
    assert_eq!(record.experience[0].title, "Job Title");
    assert!(record.experience[0]
        .description
        .starts_with("**Company:** Company Name **Location:** City, State"));
    assert_eq!(record.education[0].degree, "Degree Name");
    assert_eq!(
        record.skills,
        vec!["Skill 1", "Skill 2", "Skill 3", "Add more skills..."]
    );
    assert_eq!(record.projects[0].name, "Project Name");
}

#[test]
fn test_record_json_shape() {
    let record = parse("# Jane\n## Experience\n### Engineer\n");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "personalInfo": { "name": "Jane", "title": "", "email": "" },
            "summary": "",
            "experience": [{
                "title": "Engineer",
                "company": "",
                "startDate": "",
                "endDate": "",
                "description": ""
            }],
            "education": [],
            "skills": [],
            "projects": []
        })
    );
}

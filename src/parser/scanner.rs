//! Single-pass scanner turning classified lines into a [`Record`]

use tracing::{debug, trace};

use crate::parser::lexer::{lex, Line};
use crate::parser::record::{append_text, Education, Experience, PersonalInfo, Project, Record};

/// Section selected by the most recent `##` heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

/// Heading keywords, checked in order against the lowercased heading
static SECTION_KEYWORDS: &[(&str, Section)] = &[
    ("contact", Section::Contact),
    ("summary", Section::Summary),
    ("experience", Section::Experience),
    ("education", Section::Education),
    ("skills", Section::Skills),
    ("projects", Section::Projects),
];

impl Section {
    /// Pick the section for a `##` heading; unknown headings map to `None`
    pub fn from_heading(heading: &str) -> Self {
        let heading = heading.to_lowercase();
        SECTION_KEYWORDS
            .iter()
            .find(|(keyword, _)| heading.contains(keyword))
            .map(|(_, section)| *section)
            .unwrap_or(Section::None)
    }
}

/// Item opened by a `###` heading and not yet committed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Experience(Experience),
    Education(Education),
    Project(Project),
}

impl Pending {
    fn open(section: Section, heading: &str) -> Option<Self> {
        match section {
            Section::Experience => Some(Pending::Experience(Experience::titled(heading))),
            Section::Education => Some(Pending::Education(Education::titled(heading))),
            Section::Projects => Some(Pending::Project(Project::titled(heading))),
            _ => None,
        }
    }

    /// Description of the item, if its shape has one
    fn description_mut(&mut self) -> Option<&mut String> {
        match self {
            Pending::Experience(e) => Some(&mut e.description),
            Pending::Project(p) => Some(&mut p.description),
            Pending::Education(_) => None,
        }
    }
}

/// Personal info field addressed by a contact line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactField {
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Title,
}

static CONTACT_KEYS: &[(&str, ContactField)] = &[
    ("email", ContactField::Email),
    ("phone", ContactField::Phone),
    ("location", ContactField::Location),
    ("website", ContactField::Website),
    ("linkedin", ContactField::Linkedin),
    ("github", ContactField::Github),
    ("title", ContactField::Title),
];

impl ContactField {
    fn set(self, info: &mut PersonalInfo, value: &str) {
        let value = value.to_string();
        match self {
            ContactField::Email => info.email = value,
            ContactField::Phone => info.phone = Some(value),
            ContactField::Location => info.location = Some(value),
            ContactField::Website => info.website = Some(value),
            ContactField::Linkedin => info.linkedin = Some(value),
            ContactField::Github => info.github = Some(value),
            ContactField::Title => info.title = value,
        }
    }
}

/// Scan state carried across lines
struct Scanner {
    record: Record,
    section: Section,
    pending: Option<Pending>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            record: Record::default(),
            section: Section::None,
            pending: None,
        }
    }

    /// Move the pending item into the record if it matches the active section
    fn commit(&mut self) {
        let Some(item) = self.pending.take() else {
            return;
        };
        match (self.section, item) {
            (Section::Experience, Pending::Experience(e)) => self.record.experience.push(e),
            (Section::Education, Pending::Education(e)) => self.record.education.push(e),
            (Section::Projects, Pending::Project(p)) => self.record.projects.push(p),
            (section, item) => {
                debug!(?section, ?item, "discarding item that does not match its section");
            }
        }
    }

    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Blank => {}
            Line::Title(name) => self.record.personal_info.name = name.to_string(),
            Line::Section(heading) => {
                self.commit();
                self.section = Section::from_heading(heading);
                trace!(heading, section = ?self.section, "entering section");
            }
            Line::Item(heading) => {
                self.commit();
                self.pending = Pending::open(self.section, heading);
                if self.pending.is_none() {
                    trace!(heading, section = ?self.section, "ignoring item heading");
                }
            }
            Line::Bullet { line, content } => self.bullet(line, content),
            Line::Text(text) => self.text(text),
        }
    }

    fn bullet(&mut self, line: &str, content: &str) {
        match self.section {
            Section::Skills => self.record.skills.push(content.to_string()),
            Section::Projects => {
                let Some(Pending::Project(project)) = &mut self.pending else {
                    return;
                };
                if !content.to_lowercase().contains("tech") {
                    return;
                }
                if let Some((_, list)) = content.split_once(':') {
                    if !list.is_empty() {
                        project.technologies =
                            list.split(',').map(|t| t.trim().to_string()).collect();
                    }
                }
            }
            // Contact details are commonly written as a bulleted list
            Section::Contact => self.text(line),
            _ => {}
        }
    }

    fn text(&mut self, line: &str) {
        if self.section == Section::Contact {
            if let Some((key, value)) = line.split_once(':') {
                self.contact(key.trim(), value.trim());
                return;
            }
        }

        if self.section == Section::Summary && !line.starts_with('#') {
            append_text(&mut self.record.summary, line);
            return;
        }

        if let Some(description) = self.pending.as_mut().and_then(Pending::description_mut) {
            append_text(description, line);
        }
    }

    /// Every contact key contained in `key` applies, not just the first
    fn contact(&mut self, key: &str, value: &str) {
        let key = key.to_lowercase();
        let mut matched = false;
        for (name, field) in CONTACT_KEYS {
            if key.contains(name) {
                field.set(&mut self.record.personal_info, value);
                matched = true;
            }
        }
        if !matched {
            trace!(key = %key, "dropping unrecognized contact line");
        }
    }

    fn finish(mut self) -> Record {
        self.commit();
        self.record
    }
}

/// Parse a portfolio document into a [`Record`]
///
/// Never fails: sections that are missing or malformed leave their fields
/// at the defaults.
pub fn parse(input: &str) -> Record {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut scanner = Scanner::new();
    for line in lex(input) {
        scanner.feed(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_keyword_priority() {
        assert_eq!(Section::from_heading("## Contact Information"), Section::Contact);
        assert_eq!(Section::from_heading("## PROFESSIONAL SUMMARY"), Section::Summary);
        assert_eq!(Section::from_heading("## Work Experience"), Section::Experience);
        assert_eq!(Section::from_heading("## Side Projects"), Section::Projects);
        // "summary" is checked before "skills"
        assert_eq!(Section::from_heading("## Skills Summary"), Section::Summary);
        assert_eq!(Section::from_heading("## Hobbies"), Section::None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Record::default());
    }

    #[test]
    fn test_last_title_wins() {
        let record = parse("# First\n# Second\n");
        assert_eq!(record.personal_info.name, "Second");
    }

    #[test]
    fn test_summary_joins_lines() {
        let record = parse("## Summary\nBuilds things.\n\nShips them.\n");
        assert_eq!(record.summary, "Builds things. Ships them.");
    }

    #[test]
    fn test_summary_ignores_bullets_and_hash_lines() {
        let record = parse("## Summary\n- not summary\n#### nor this\nYes.\n");
        assert_eq!(record.summary, "Yes.");
    }

    #[test]
    fn test_unknown_section_drops_content() {
        let record = parse("## Skills\n- Rust\n## Hobbies\n- Chess\n### Climbing\nWeekends.\n");
        assert_eq!(record.skills, vec!["Rust".to_string()]);
        assert!(record.experience.is_empty());
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_item_heading_outside_item_sections_is_ignored() {
        let record = parse("## Summary\n### Heading\nText.\n## Contact\n### Other\nEmail: a@b.c\n");
        assert_eq!(record.summary, "Text.");
        assert_eq!(record.personal_info.email, "a@b.c");
        assert!(record.experience.is_empty());
    }

    #[test]
    fn test_experience_description_fallback() {
        let record = parse("## Experience\n### Engineer\n**Company:** Acme\nMore detail.\n");
        assert_eq!(
            record.experience,
            vec![Experience {
                title: "Engineer".to_string(),
                company: String::new(),
                location: None,
                start_date: String::new(),
                end_date: String::new(),
                description: "**Company:** Acme More detail.".to_string(),
            }]
        );
    }

    #[test]
    fn test_education_drops_body_lines() {
        let record = parse("## Education\n### BSc\n**School:** Uni\n");
        assert_eq!(record.education, vec![Education::titled("BSc")]);
    }

    #[test]
    fn test_items_commit_in_order() {
        let record = parse("## Experience\n### A\n### B\n## Education\n### C\n");
        let titles: Vec<_> = record.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(record.education.len(), 1);
    }

    #[test]
    fn test_skills_keep_duplicates() {
        let record = parse("## Skills\n- Go\n* Rust\n- Go\n");
        assert_eq!(record.skills, vec!["Go", "Rust", "Go"]);
    }

    #[test]
    fn test_technologies_replace() {
        let record = parse("## Projects\n### Site\n- Tech: A, B\n- Technologies: C ,D\n");
        assert_eq!(record.projects[0].technologies, vec!["C", "D"]);
    }

    #[test]
    fn test_technologies_need_text_after_colon() {
        let record = parse("## Projects\n### Site\n- Tech: A\n- Tech:\n- Tech stack\n");
        assert_eq!(record.projects[0].technologies, vec!["A"]);
    }

    #[test]
    fn test_technologies_keep_everything_after_first_colon() {
        let record = parse("## Projects\n### Site\n- Tech: http://x, y\n");
        assert_eq!(record.projects[0].technologies, vec!["http://x", "y"]);
    }

    #[test]
    fn test_technology_bullet_without_project_is_ignored() {
        let record = parse("## Projects\n- Tech: A\n");
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_project_description() {
        let record = parse("## Projects\n### Site\nA site.\n**URL:** https://x.y\n");
        assert_eq!(record.projects[0].description, "A site. **URL:** https://x.y");
        assert_eq!(record.projects[0].url, None);
    }

    #[test]
    fn test_contact_fields() {
        let record = parse(
            "## Contact\nEmail: a@b.c\nPhone: 555\nLocation: Here\nWebsite: https://x.y\n\
             LinkedIn: https://l.in/me\nGitHub: https://gh.com/me\nTitle: Dev\n",
        );
        let info = &record.personal_info;
        assert_eq!(info.email, "a@b.c");
        assert_eq!(info.phone.as_deref(), Some("555"));
        assert_eq!(info.location.as_deref(), Some("Here"));
        assert_eq!(info.website.as_deref(), Some("https://x.y"));
        assert_eq!(info.linkedin.as_deref(), Some("https://l.in/me"));
        assert_eq!(info.github.as_deref(), Some("https://gh.com/me"));
        assert_eq!(info.title, "Dev");
    }

    #[test]
    fn test_contact_bullets() {
        let record = parse("## Contact\n- Email: a@b.c\n* Phone: 555\n");
        assert_eq!(record.personal_info.email, "a@b.c");
        assert_eq!(record.personal_info.phone.as_deref(), Some("555"));
    }

    #[test]
    fn test_contact_multi_match() {
        let record = parse("## Contact\nEmail/Title: x@y.com\n");
        assert_eq!(record.personal_info.email, "x@y.com");
        assert_eq!(record.personal_info.title, "x@y.com");
    }

    #[test]
    fn test_contact_present_but_empty() {
        let record = parse("## Contact\nPhone:\n");
        assert_eq!(record.personal_info.phone.as_deref(), Some(""));
        assert_eq!(record.personal_info.location, None);
    }

    #[test]
    fn test_contact_unknown_key_dropped() {
        let record = parse("## Contact\nFax: 123\nno colon here\n");
        assert_eq!(record.personal_info, PersonalInfo::default());
    }

    #[test]
    fn test_contact_outside_section_ignored() {
        let record = parse("Email: a@b.c\n## Summary\nEmail: a@b.c\n");
        assert_eq!(record.personal_info.email, "");
        assert_eq!(record.summary, "Email: a@b.c");
    }

    #[test]
    fn test_commit_discards_mismatched_item() {
        let mut scanner = Scanner::new();
        scanner.feed(Line::Section("## Experience"));
        scanner.feed(Line::Item("Engineer"));
        scanner.section = Section::Education;
        let record = scanner.finish();
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
    }
}

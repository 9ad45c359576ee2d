//! HTML generation from parsed records

use tracing::debug;

use crate::parser::{Education, Experience, PersonalInfo, Project, Record};
use crate::theme::Theme;

use super::HtmlConfig;

const NAME_PLACEHOLDER: &str = "Your Name";
const TITLE_PLACEHOLDER: &str = "Your Professional Title";

/// Class-scoped style rules: (class, descendant selector, declarations)
static BASE_RULES: &[(&str, &str, &str)] = &[
    ("container", " *", "margin: 0; padding: 0; box-sizing: border-box;"),
    (
        "container",
        "",
        "max-width: 1024px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: var(--text); background-color: var(--background);",
    ),
    (
        "header",
        "",
        "background: linear-gradient(135deg, var(--primary), var(--secondary)); color: white; padding: 48px 32px; text-align: center;",
    ),
    ("header", " h1", "font-size: 2.5rem; margin-bottom: 8px;"),
    ("title", "", "font-size: 1.25rem; opacity: 0.9;"),
    (
        "contact-info",
        "",
        "display: flex; flex-wrap: wrap; justify-content: center; gap: 24px; margin-top: 24px;",
    ),
    (
        "social-links",
        "",
        "display: flex; justify-content: center; gap: 16px; margin-top: 16px;",
    ),
    ("social-links", " a", "color: white; opacity: 0.9;"),
    ("content", "", "padding: 32px;"),
    (
        "section",
        "",
        "background: var(--surface); padding: 24px; margin-bottom: 32px; border-radius: 8px;",
    ),
    ("section", " h2", "font-size: 1.5rem; margin-bottom: 16px; color: var(--text);"),
    ("section", " h3", "color: var(--text);"),
    (
        "experience-item",
        "",
        "border-left: 4px solid var(--primary); padding-left: 16px; margin-bottom: 24px;",
    ),
    (
        "education-item",
        "",
        "border-left: 4px solid var(--accent); padding-left: 16px; margin-bottom: 24px;",
    ),
    ("org", "", "color: var(--accent); font-weight: 500;"),
    ("meta", "", "color: var(--text-secondary); margin-bottom: 8px;"),
    ("description", "", "color: var(--text-secondary);"),
    (
        "project-grid",
        "",
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px;",
    ),
    (
        "project-card",
        "",
        "padding: 16px; border: 1px solid var(--primary); border-radius: 8px;",
    ),
    ("project-links", "", "display: flex; gap: 8px; margin: 4px 0 8px;"),
    ("project-links", " a", "color: var(--accent);"),
    ("skills", "", "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;"),
    (
        "skill-tag",
        "",
        "background: var(--primary); color: white; padding: 4px 12px; border-radius: 16px; font-size: 0.875rem;",
    ),
    (
        "tech-tag",
        "",
        "border: 1px solid var(--primary); color: var(--primary); padding: 2px 8px; border-radius: 4px; font-size: 0.75rem;",
    ),
];

/// Rules applied below 768px: (class, declarations)
static NARROW_RULES: &[(&str, &str)] = &[
    ("header", "padding: 32px 16px;"),
    ("content", "padding: 16px;"),
    ("contact-info", "flex-direction: column; align-items: center;"),
];

/// Build an HTML document incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    styles: Vec<String>,
    body: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        let indent = if config.standalone { 1 } else { 0 };
        Self {
            config,
            styles: vec![],
            body: vec![],
            indent,
        }
    }

    /// Bind the theme colors to CSS custom properties
    ///
    /// Standalone pages declare them on `:root`; fragments scope them to the
    /// container so they do not leak into the host page.
    pub fn add_theme(&mut self, theme: &Theme) {
        let selector = if self.config.standalone {
            ":root".to_string()
        } else {
            format!(".{}container", self.prefix())
        };
        let mut css = format!("{} {{", selector);
        for (name, value) in theme.colors.entries() {
            css.push_str(&format!(" --{}: {};", name, css_value(value)));
        }
        css.push_str(" }");
        self.styles.push(css);
    }

    /// Add the layout rules shared by every theme
    pub fn add_base_styles(&mut self) {
        let prefix = self.prefix();
        for (class, descendant, declarations) in BASE_RULES {
            self.styles.push(format!(
                ".{}{}{} {{ {} }}",
                prefix, class, descendant, declarations
            ));
        }

        let narrow = NARROW_RULES
            .iter()
            .map(|(class, declarations)| format!(".{}{} {{ {} }}", prefix, class, declarations))
            .collect::<Vec<_>>()
            .join(" ");
        self.styles
            .push(format!("@media (max-width: 768px) {{ {} }}", narrow));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    /// Indentation for `<head>` content, which sits outside the body's indent
    fn pad(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, classes: &[&str]) -> String {
        if classes.is_empty() {
            return String::new();
        }
        let prefix = self.prefix();
        let list = classes
            .iter()
            .map(|c| format!("{}{}", prefix, c))
            .collect::<Vec<_>>()
            .join(" ");
        format!(r#" class="{}""#, list)
    }

    /// Open an element; must be paired with [`HtmlBuilder::end`]
    pub fn start(&mut self, tag: &str, classes: &[&str]) {
        let line = format!("{}<{}{}>", self.indent_str(), tag, self.class_attr(classes));
        self.body.push(line);
        self.indent += 1;
    }

    /// Close an element opened with [`HtmlBuilder::start`]
    pub fn end(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        let line = format!("{}</{}>", self.indent_str(), tag);
        self.body.push(line);
    }

    /// Add an element with escaped text content
    pub fn text_element(&mut self, tag: &str, classes: &[&str], text: &str) {
        let line = format!(
            "{}<{}{}>{}</{}>",
            self.indent_str(),
            tag,
            self.class_attr(classes),
            escape_html(text),
            tag
        );
        self.body.push(line);
    }

    /// Add an external link opening in a new tab
    pub fn link(&mut self, href: &str, classes: &[&str], label: &str) {
        let line = format!(
            r#"{}<a{} href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            self.indent_str(),
            self.class_attr(classes),
            escape_html(safe_href(href)),
            escape_html(label)
        );
        self.body.push(line);
    }

    /// Build the final HTML string
    pub fn build(self, title: &str) -> String {
        let nl = self.newline();
        let head = self.pad(1);
        let rule = self.pad(2);
        let mut html = String::new();

        if self.config.standalone {
            html.push_str("<!DOCTYPE html>");
            html.push_str(nl);
            html.push_str(r#"<html lang="en">"#);
            html.push_str(nl);
            html.push_str("<head>");
            html.push_str(nl);
            html.push_str(&head);
            html.push_str(r#"<meta charset="UTF-8">"#);
            html.push_str(nl);
            html.push_str(&head);
            html.push_str(
                r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            );
            html.push_str(nl);
            html.push_str(&format!("{}<title>{}</title>", head, escape_html(title)));
            html.push_str(nl);
        }

        if !self.styles.is_empty() {
            html.push_str(&head);
            html.push_str("<style>");
            html.push_str(nl);
            for style in &self.styles {
                html.push_str(&rule);
                html.push_str(style);
                html.push_str(nl);
            }
            html.push_str(&head);
            html.push_str("</style>");
            html.push_str(nl);
        }

        if self.config.standalone {
            html.push_str("</head>");
            html.push_str(nl);
            html.push_str("<body>");
            html.push_str(nl);
        }

        for line in &self.body {
            html.push_str(line);
            html.push_str(nl);
        }

        if self.config.standalone {
            html.push_str("</body>");
            html.push_str(nl);
            html.push_str("</html>");
            html.push_str(nl);
        }

        html
    }
}

/// Render a record to a standalone HTML page
pub fn render_html(record: &Record, theme: &Theme) -> String {
    render_html_with_config(record, theme, &HtmlConfig::default())
}

/// Render a record to HTML with a custom configuration
///
/// Sections always appear in the same order (summary, experience, skills,
/// projects, education) and are omitted when empty.
pub fn render_html_with_config(record: &Record, theme: &Theme, config: &HtmlConfig) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    builder.add_theme(theme);
    builder.add_base_styles();

    builder.start("div", &["container"]);
    render_header(&record.personal_info, &mut builder);

    builder.start("main", &["content"]);
    render_summary(&record.summary, &mut builder);
    render_experience(&record.experience, &mut builder);
    render_skills(&record.skills, &mut builder);
    render_projects(&record.projects, &mut builder);
    render_education(&record.education, &mut builder);
    builder.end("main");

    builder.end("div");

    debug!(
        theme = %theme.id,
        experience = record.experience.len(),
        education = record.education.len(),
        projects = record.projects.len(),
        skills = record.skills.len(),
        "rendered portfolio"
    );

    builder.build(&page_title(record))
}

/// File name for a downloaded export, derived from the person's name
pub fn export_filename(record: &Record) -> String {
    let name: String = record
        .personal_info
        .name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let name = name.trim().trim_start_matches('.');
    if name.is_empty() {
        "portfolio.html".to_string()
    } else {
        format!("{}.html", name)
    }
}

fn page_title(record: &Record) -> String {
    let name = &record.personal_info.name;
    if name.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} - Portfolio", name)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn render_header(info: &PersonalInfo, builder: &mut HtmlBuilder) {
    builder.start("header", &["header"]);
    builder.text_element("h1", &[], or_placeholder(&info.name, NAME_PLACEHOLDER));
    builder.text_element("p", &["title"], or_placeholder(&info.title, TITLE_PLACEHOLDER));

    let email = (!info.email.is_empty()).then_some(info.email.as_str());
    let contacts = [
        ("contact-email", "\u{1F4E7}", email),
        ("contact-phone", "\u{1F4DE}", info.phone.as_deref()),
        ("contact-location", "\u{1F4CD}", info.location.as_deref()),
    ];
    if contacts.iter().any(|(_, _, value)| value.is_some()) {
        builder.start("div", &["contact-info"]);
        for (class, icon, value) in contacts {
            if let Some(value) = value {
                builder.text_element("span", &[class], &format!("{} {}", icon, value));
            }
        }
        builder.end("div");
    }

    let socials = [
        ("social-website", "Website", info.website.as_deref()),
        ("social-linkedin", "LinkedIn", info.linkedin.as_deref()),
        ("social-github", "GitHub", info.github.as_deref()),
    ];
    if socials.iter().any(|(_, _, href)| href.is_some()) {
        builder.start("nav", &["social-links"]);
        for (class, label, href) in socials {
            if let Some(href) = href {
                builder.link(href, &[class], label);
            }
        }
        builder.end("nav");
    }

    builder.end("header");
}

fn render_summary(summary: &str, builder: &mut HtmlBuilder) {
    if summary.is_empty() {
        return;
    }
    builder.start("section", &["section", "summary"]);
    builder.text_element("h2", &[], "Summary");
    builder.text_element("p", &[], summary);
    builder.end("section");
}

/// Join the non-empty parts with a bullet separator
fn joined(parts: &[Option<String>]) -> Option<String> {
    let parts: Vec<&str> = parts
        .iter()
        .flatten()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" \u{2022} "))
    }
}

fn render_experience(experience: &[Experience], builder: &mut HtmlBuilder) {
    if experience.is_empty() {
        return;
    }
    builder.start("section", &["section", "experience"]);
    builder.text_element("h2", &[], "Experience");
    for exp in experience {
        builder.start("div", &["experience-item"]);
        builder.text_element("h3", &[], &exp.title);

        let company = (!exp.company.is_empty()).then(|| exp.company.clone());
        if let Some(org) = joined(&[company, exp.location.clone()]) {
            builder.text_element("p", &["org"], &org);
        }
        if !exp.start_date.is_empty() || !exp.end_date.is_empty() {
            let dates = format!("{} - {}", exp.start_date, exp.end_date);
            builder.text_element("p", &["meta"], &dates);
        }
        if !exp.description.is_empty() {
            builder.text_element("p", &["description"], &exp.description);
        }
        builder.end("div");
    }
    builder.end("section");
}

fn render_skills(skills: &[String], builder: &mut HtmlBuilder) {
    if skills.is_empty() {
        return;
    }
    builder.start("section", &["section", "skills-section"]);
    builder.text_element("h2", &[], "Skills");
    builder.start("div", &["skills"]);
    for skill in skills {
        builder.text_element("span", &["skill-tag"], skill);
    }
    builder.end("div");
    builder.end("section");
}

fn render_projects(projects: &[Project], builder: &mut HtmlBuilder) {
    if projects.is_empty() {
        return;
    }
    builder.start("section", &["section", "projects"]);
    builder.text_element("h2", &[], "Projects");
    builder.start("div", &["project-grid"]);
    for project in projects {
        builder.start("div", &["project-card"]);
        builder.text_element("h3", &[], &project.name);

        if project.url.is_some() || project.github.is_some() {
            builder.start("div", &["project-links"]);
            if let Some(url) = &project.url {
                builder.link(url, &["project-url"], "Live");
            }
            if let Some(github) = &project.github {
                builder.link(github, &["project-github"], "Source");
            }
            builder.end("div");
        }

        if !project.description.is_empty() {
            builder.text_element("p", &["description"], &project.description);
        }

        if !project.technologies.is_empty() {
            builder.start("div", &["skills"]);
            for tech in &project.technologies {
                builder.text_element("span", &["tech-tag"], tech);
            }
            builder.end("div");
        }
        builder.end("div");
    }
    builder.end("div");
    builder.end("section");
}

fn render_education(education: &[Education], builder: &mut HtmlBuilder) {
    if education.is_empty() {
        return;
    }
    builder.start("section", &["section", "education"]);
    builder.text_element("h2", &[], "Education");
    for edu in education {
        builder.start("div", &["education-item"]);
        builder.text_element("h3", &[], &edu.degree);

        let school = (!edu.school.is_empty()).then(|| edu.school.clone());
        if let Some(org) = joined(&[school, edu.location.clone()]) {
            builder.text_element("p", &["org"], &org);
        }

        let graduated = (!edu.graduation_date.is_empty())
            .then(|| format!("Graduated: {}", edu.graduation_date));
        let gpa = edu.gpa.as_ref().map(|gpa| format!("GPA: {}", gpa));
        if let Some(meta) = joined(&[graduated, gpa]) {
            builder.text_element("p", &["meta"], &meta);
        }
        builder.end("div");
    }
    builder.end("section");
}

/// Escape characters that are significant in HTML text and attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Links with script-capable schemes are replaced by an inert anchor
fn safe_href(href: &str) -> &str {
    let scheme = href
        .trim_start()
        .split(':')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if href.contains(':') && matches!(scheme.as_str(), "javascript" | "vbscript" | "data") {
        "#"
    } else {
        href
    }
}

/// Keep only characters that can appear in a color value
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '))
        .collect()
}

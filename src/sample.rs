//! Bundled example documents

/// A complete example portfolio
pub const SAMPLE: &str = r#"# John Developer

## Contact Information
- Email: john.developer@email.com
- Phone: (555) 123-4567
- Location: San Francisco, CA
- Website: https://johndeveloper.com
- LinkedIn: https://linkedin.com/in/johndeveloper
- GitHub: https://github.com/johndeveloper
- Title: Full Stack Developer

## Summary
Passionate full-stack developer with 5+ years of experience building scalable web applications. Expertise in React, Node.js, and cloud technologies. Strong problem-solving skills and a commitment to writing clean, maintainable code.

## Experience

### Senior Frontend Developer
**Company:** TechCorp Inc.
**Location:** San Francisco, CA
**Duration:** Jan 2022 - Present
**Description:** Led development of user-facing features for a SaaS platform serving 100k+ users. Implemented modern React patterns, optimized performance, and mentored junior developers.

### Full Stack Developer
**Company:** StartupXYZ
**Location:** Remote
**Duration:** Jun 2020 - Dec 2021
**Description:** Built and maintained multiple web applications using React, Node.js, and PostgreSQL. Collaborated with design team to implement responsive UI/UX.

### Frontend Developer
**Company:** Digital Agency
**Location:** San Francisco, CA
**Duration:** Jan 2019 - May 2020
**Description:** Developed custom websites and web applications for clients. Specialized in React, Vue.js, and modern CSS frameworks.

## Education

### Bachelor of Science in Computer Science
**School:** University of California, Berkeley
**Location:** Berkeley, CA
**Graduation:** May 2018
**GPA:** 3.7/4.0

## Skills
- JavaScript (ES6+)
- TypeScript
- React.js
- Node.js
- Python
- PostgreSQL
- MongoDB
- AWS
- Docker
- Git
- Agile/Scrum

## Projects

### E-commerce Platform
**Description:** Full-stack e-commerce solution with payment processing, inventory management, and admin dashboard.
**Technologies:** React, Node.js, PostgreSQL, Stripe API
**URL:** https://github.com/johndeveloper/ecommerce-platform

### Task Management App
**Description:** Collaborative task management application with real-time updates and team collaboration features.
**Technologies:** React, Socket.io, Express, MongoDB
**URL:** https://taskmanager.johndeveloper.com
**GitHub:** https://github.com/johndeveloper/task-manager

### Weather Dashboard
**Description:** Weather tracking application with location-based forecasts and interactive charts.
**Technologies:** React, Chart.js, OpenWeather API
**URL:** https://weather.johndeveloper.com
**GitHub:** https://github.com/johndeveloper/weather-app
"#;

/// A fill-in-the-blanks starting document
pub const PLACEHOLDER: &str = r#"# Your Name

## Contact Information
- Email: your.email@example.com
- Phone: (555) 123-4567
- Location: Your City, State
- Website: https://yourwebsite.com
- LinkedIn: https://linkedin.com/in/yourprofile
- GitHub: https://github.com/yourusername
- Title: Your Professional Title

## Summary
Write a brief summary about yourself, your experience, and what makes you unique as a developer.

## Experience

### Job Title
**Company:** Company Name
**Location:** City, State
**Duration:** Start Date - End Date
**Description:** Describe your responsibilities and achievements in this role.

## Education

### Degree Name
**School:** University Name
**Location:** City, State
**Graduation:** Graduation Date
**GPA:** Your GPA (optional)

## Skills
- Skill 1
- Skill 2
- Skill 3
- Add more skills...

## Projects

### Project Name
**Description:** Brief description of the project and its purpose.
**Technologies:** List the technologies used
**URL:** https://project-url.com (optional)
**GitHub:** https://github.com/username/project (optional)
"#;

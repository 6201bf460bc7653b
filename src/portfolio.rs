//! Static content rendered by the site sections.

use chrono::{DateTime, Datelike};

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub const OWNER_NAME: &str = "Munna Pandey";
pub const TAGLINE: &str = "Full-Stack Developer";
pub const HERO_BLURB: &str =
    "I build modern, scalable web applications with clean code and seamless user experiences.";

pub static ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a passionate Full-Stack Developer with expertise in building modern, scalable web applications. My journey in web development has led me to specialize in the MERN stack (MongoDB, Express, React, Node.js), where I craft seamless user experiences from front to back.",
    "I have hands-on experience developing innovative projects like Mother Earth AI, an AI-powered climate change solution, and HappyEnding, a service marketplace platform connecting consumers with local service providers. These showcase my ability to integrate AI APIs, implement robust authentication, and design intuitive UIs.",
    "My toolkit includes React for dynamic frontends, Node.js for scalable backends, MongoDB for flexible databases, and strong expertise in API integration, database schema design, and authentication systems. I'm always learning to deliver high-quality, production-ready apps.",
];

pub static ABOUT_BADGES: [&str; 2] = ["Full-Stack Dev", "React Expert"];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat { value: "10+", label: "Projects" },
    Stat { value: "3+", label: "Years Exp" },
    Stat { value: "15+", label: "Technologies" },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
    pub icon: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend Development",
        icon: "🎨",
        skills: &[
            Skill { name: "React", level: 90, icon: "⚛️" },
            Skill { name: "JavaScript", level: 88, icon: "📜" },
            Skill { name: "TypeScript", level: 82, icon: "📘" },
            Skill { name: "HTML/CSS", level: 95, icon: "🌐" },
            Skill { name: "Tailwind CSS", level: 90, icon: "🎨" },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        icon: "⚙️",
        skills: &[
            Skill { name: "Node.js", level: 85, icon: "🟢" },
            Skill { name: "Express", level: 83, icon: "🚂" },
            Skill { name: "REST APIs", level: 88, icon: "🔌" },
        ],
    },
    SkillCategory {
        title: "Database",
        icon: "💾",
        skills: &[
            Skill { name: "MongoDB", level: 85, icon: "🍃" },
            Skill { name: "Schema Design", level: 82, icon: "📊" },
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        icon: "🛠️",
        skills: &[
            Skill { name: "Git", level: 87, icon: "📝" },
            Skill { name: "API Integration", level: 90, icon: "🔗" },
            Skill { name: "Authentication", level: 85, icon: "🔐" },
            Skill { name: "UI/UX Design", level: 80, icon: "🎯" },
        ],
    },
];

pub static ALSO_FAMILIAR: [&str; 12] = [
    "Redux",
    "Webpack",
    "Vite",
    "Figma",
    "Postman",
    "JWT",
    "OAuth",
    "Responsive Design",
    "Performance Optimization",
    "SEO",
    "Accessibility",
    "Agile/Scrum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    WebApps,
    AiProjects,
    FullStack,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::WebApps => "Web Apps",
            ProjectCategory::AiProjects => "AI Projects",
            ProjectCategory::FullStack => "Full-Stack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::WebApps),
        ProjectFilter::Only(ProjectCategory::AiProjects),
        ProjectFilter::Only(ProjectCategory::FullStack),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == c,
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub icon: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Mother Earth AI",
        category: ProjectCategory::AiProjects,
        description: "An innovative AI-powered platform addressing climate change challenges through intelligent data analysis and predictive modeling.",
        icon: "🌍",
        tags: &["React", "Node.js", "AI API", "MongoDB"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "HappyEnding",
        category: ProjectCategory::FullStack,
        description: "A service marketplace connecting consumers with local service providers through an intuitive request-and-accept system.",
        icon: "🤝",
        tags: &["React", "Node.js", "MongoDB", "Authentication"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "E-Commerce Platform",
        category: ProjectCategory::WebApps,
        description: "Full-featured online shopping platform with cart management, payment integration, and admin dashboard.",
        icon: "🛒",
        tags: &["React", "Express", "MongoDB", "Stripe"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "Task Management App",
        category: ProjectCategory::WebApps,
        description: "Collaborative task management tool with real-time updates, team features, and progress tracking.",
        icon: "✅",
        tags: &["React", "Node.js", "WebSocket", "MongoDB"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "Social Media Dashboard",
        category: ProjectCategory::FullStack,
        description: "Analytics dashboard for social media metrics with data visualization and reporting features.",
        icon: "📊",
        tags: &["React", "TypeScript", "REST API", "Charts"],
        live_url: None,
        github_url: None,
    },
    Project {
        title: "Weather Forecast App",
        category: ProjectCategory::WebApps,
        description: "Real-time weather application with location-based forecasts and interactive weather maps.",
        icon: "🌤️",
        tags: &["React", "Weather API"],
        live_url: None,
        github_url: None,
    },
];

pub fn filter_projects(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p))
}

/// RFC 3339 timestamp stamped by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year for the footer copyright line.
pub fn copyright_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

pub const CONTACT_EMAIL: &str = "munnajeepandit@gmail.com";
pub const LOCATION: &str = "Greater Noida, India";

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// devicon / extra icon class
    pub icon_class: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/munnajeepandit-ai",
        icon_class: "devicon-github-plain",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/munna-pandey-a98375306/",
        icon_class: "devicon-linkedin-plain",
    },
    SocialLink {
        name: "Email",
        url: "mailto:munnajeepandit@gmail.com",
        icon_class: "extra-email",
    },
];

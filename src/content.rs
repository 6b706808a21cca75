//! Literal page content.
//!
//! Everything the page displays lives here as `const` data so that each
//! section component is a pure function of these lists.

pub const OWNER_NAME: &str = "Hoang Duc Thien";
pub const EMAIL: &str = "hoangducthien176@gmail.com";
pub const PHONE: &str = "+84357031801";
pub const PHONE_DISPLAY: &str = "+84 357 031 801";
pub const LOCATION: &str = "Go Vap, HCM, VN";
pub const GITHUB_URL: &str = "https://github.com/rudojr";
pub const KAGGLE_URL: &str = "https://kaggle.com/iamrudo1999";
pub const PORTRAIT_URL: &str = "https://picsum.photos/seed/thien/800/800";

/// In-page anchor targets. Each one is rendered as exactly one section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Terminal,
    Cpu,
    Code,
    Layers,
    Github,
    Mail,
    Phone,
    MapPin,
    Database,
    ExternalLink,
    CheckCircle,
}

impl Icon {
    /// Inner SVG markup, drawn on a 24x24 stroke grid.
    pub const fn svg_body(self) -> &'static str {
        match self {
            Icon::Terminal => {
                r#"<polyline points="4 17 10 11 4 5"/><line x1="12" x2="20" y1="19" y2="19"/>"#
            }
            Icon::Cpu => {
                r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#
            }
            Icon::Code => r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#,
            Icon::Layers => {
                r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/><path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/><path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
            }
            Icon::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Icon::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#
            }
            Icon::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Icon::CheckCircle => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub name: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    Mail(&'static str),
    Tel(&'static str),
}

impl ContactLink {
    pub const fn scheme(self) -> &'static str {
        match self {
            ContactLink::Mail(_) => "mailto",
            ContactLink::Tel(_) => "tel",
        }
    }

    pub const fn value(self) -> &'static str {
        match self {
            ContactLink::Mail(v) | ContactLink::Tel(v) => v,
        }
    }

    pub fn href(self) -> String {
        format!("{}:{}", self.scheme(), self.value())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    /// Channels without a link (the location) render as a plain card.
    pub link: Option<ContactLink>,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "About",
        target: SectionId::About,
    },
    NavLink {
        name: "Skills",
        target: SectionId::Skills,
    },
    NavLink {
        name: "Experience",
        target: SectionId::Experience,
    },
    NavLink {
        name: "Projects",
        target: SectionId::Projects,
    },
    NavLink {
        name: "Contact",
        target: SectionId::Contact,
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Automation",
        icon: Icon::Terminal,
        skills: &[
            "Cypress",
            "Playwright",
            "Katalon",
            "Selenium",
            "Performance Testing",
            "API Testing",
            "Appium",
        ],
    },
    SkillCategory {
        title: "AI / ML",
        icon: Icon::Cpu,
        skills: &[
            "Machine Learning",
            "Deep Learning",
            "Computer Vision",
            "NLP",
        ],
    },
    SkillCategory {
        title: "Programming",
        icon: Icon::Code,
        skills: &["Python", "SQL", "JavaScript"],
    },
    SkillCategory {
        title: "Tools & DevOps",
        icon: Icon::Layers,
        skills: &["GitHub", "Postman", "CI/CD"],
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "DR Digital",
        role: "SDET",
        period: "Oct 2024 – Present",
        achievements: &[
            "Automation testing for Web, Mobile, and AI systems using Cypress & Playwright.",
            "Mobile automation using Appium and API testing with Postman & Python.",
            "Performance testing with JMeter and specialized testing for AI chatbot and RAG systems.",
            "Reduced regression testing time by 50% through optimized framework design.",
            "Integrated testing into CI/CD pipelines using GitHub Actions.",
        ],
    },
    ExperienceEntry {
        company: "Freelancer",
        role: "Developer",
        period: "Apr 2024 – Sep 2024",
        achievements: &[
            "Delivered Cypress automation for Japanese enterprise projects.",
            "Built Python pytest frameworks for blog platform automation.",
            "Executed freelance ML & Deep Learning projects focusing on Computer Vision.",
        ],
    },
    ExperienceEntry {
        company: "Lac Viet Corp",
        role: "Automation Tester",
        period: "Oct 2022 – Apr 2024",
        achievements: &[
            "Developed Web automation suites using Katalon Studio.",
            "Implemented Mobile automation with Appium.",
            "Conducted performance testing using JMeter & BlazeMeter.",
            "Improved overall testing efficiency by 40%.",
        ],
    },
    ExperienceEntry {
        company: "Just In Time Solution",
        role: "Manual Tester",
        period: "Feb 2022 – Jun 2022",
        achievements: &[
            "Core banking system testing for K-Bank and Ocean Bank.",
            "Designed comprehensive test cases and managed bug reporting lifecycles.",
        ],
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Cypress Automation OrangeHRM",
        description: "A robust Page Object Model (POM) test framework for the OrangeHRM demo site, focusing on scalability and execution speed.",
        tags: &["Cypress", "JavaScript", "POM", "Automation"],
        link: GITHUB_URL,
        image: "https://picsum.photos/seed/cypress/600/400",
    },
    ProjectEntry {
        title: "Python Pytest Blog Automation",
        description: "End-to-end automation suite for a blog platform with integrated HTML reporting and parallel execution capabilities.",
        tags: &["Python", "Pytest", "Selenium", "Reporting"],
        link: GITHUB_URL,
        image: "https://picsum.photos/seed/pytest/600/400",
    },
    ProjectEntry {
        title: "AI Chatbot & RAG Testing",
        description: "Specialized testing framework for evaluating the accuracy and reliability of Retrieval-Augmented Generation systems.",
        tags: &["AI Testing", "RAG", "Python", "LLM"],
        link: GITHUB_URL,
        image: "https://picsum.photos/seed/ai/600/400",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: EMAIL,
        icon: Icon::Mail,
        link: Some(ContactLink::Mail(EMAIL)),
    },
    ContactChannel {
        label: "Phone",
        value: PHONE_DISPLAY,
        icon: Icon::Phone,
        link: Some(ContactLink::Tel(PHONE)),
    },
    ContactChannel {
        label: "Location",
        value: LOCATION,
        icon: Icon::MapPin,
        link: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
        icon: Icon::Github,
    },
    SocialLink {
        label: "Kaggle",
        href: KAGGLE_URL,
        icon: Icon::Database,
    },
    SocialLink {
        label: "Email",
        href: "mailto:hoangducthien176@gmail.com",
        icon: Icon::Mail,
    },
];

//! Static portfolio content
//!
//! Literal records for every section. Nothing here is mutated at runtime;
//! the section renderers only read it.

pub mod resume;

/// Hero copy and call-to-action labels
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: [&'static str; 2],
    pub contact_label: &'static str,
    pub work_label: &'static str,
    pub scroll_hint: &'static str,
}

pub const HERO: Hero = Hero {
    title: "Full Stack Developer",
    tagline: [
        "Crafting digital experiences with cutting-edge technologies.",
        "Turning ideas into interactive realities.",
    ],
    contact_label: "Contact Me",
    work_label: "View My Work",
    scroll_hint: "scroll",
};

/// About-section feature card
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct About {
    pub heading: &'static str,
    pub intro: &'static str,
    pub paragraphs: [&'static str; 3],
    pub features: [Feature; 3],
    pub resume_label: &'static str,
}

pub const ABOUT: About = About {
    heading: "About Me",
    intro: "Hi, I'm a Full Stack Developer",
    paragraphs: [
        "With a strong passion for crafting innovative web solutions, I specialize in \
         developing modern applications using React.js for the frontend and Java Spring Boot \
         for the backend. As a fresher in software development, I'm continuously expanding my \
         skills across both frontend and backend technologies.",
        "I focus on writing clean, maintainable code and building user-friendly experiences \
         that blend functionality with simplicity. Every project I work on is a chance to \
         learn, grow, and push my boundaries.",
        "When I'm not coding, I enjoy exploring new frameworks, enhancing my technical \
         knowledge, and engaging with the developer community to share insights and learnings.",
    ],
    features: [
        Feature {
            title: "Clean Code",
            description: "Writing maintainable, scalable, and efficient code",
        },
        Feature {
            title: "Performance",
            description: "Optimizing applications for speed and user experience",
        },
        Feature {
            title: "User-Centric",
            description: "Designing with the end user in mind",
        },
    ],
    resume_label: "Download Resume",
};

/// One project card
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS_HEADING: &str = "Featured Projects";
pub const PROJECTS_SUBTITLE: &str = "A showcase of my recent work in web development, \
     featuring modern technologies and innovative solutions.";

pub const PROJECTS: &[Project] = &[Project {
    title: "Business Website",
    description: "A full-stack Business Website solution with React, Java, Springboot and MySQL.",
    technologies: &[
        "React",
        "javascript",
        "MySQL",
        "java",
        "Springboot",
        "Tailwind CSS",
    ],
    live_url: "#",
    source_url: "#",
    featured: true,
}];

/// A named skill with a 0-100 proficiency level
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILLS_HEADING: &str = "Skills & Technologies";

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 95 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "Tailwind CSS", level: 92 },
            Skill { name: "Framer Motion", level: 88 },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill { name: "Spring", level: 90 },
            Skill { name: "Springboot", level: 95 },
            Skill { name: "MySQL", level: 80 },
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        skills: &[Skill { name: "Git", level: 95 }],
    },
];

/// Contact info row; `link` is the target a click would open
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_SUBTITLE: &str =
    "Ready to bring your ideas to life? Let's collaborate and create something amazing together.";
pub const CONTACT_FORM_HEADING: &str = "Send me a message";
pub const CONTACT_INFO_HEADING: &str = "Contact Information";
pub const CONTACT_SOCIAL_HEADING: &str = "Connect with me";

/// Address copied by the clipboard shortcut
pub const EMAIL: &str = "sibir0252@gmail.com";

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: EMAIL,
        link: Some("mailto:sibir0252@gmail.com"),
    },
    ContactInfo {
        label: "Location",
        value: "Chennai, India",
        link: None,
    },
    ContactInfo {
        label: "Phone",
        value: "+91 7867894543",
        link: Some("tel:+917867894543"),
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/sibiraj-v-064b4527b/",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/sibiraj01",
    },
    SocialLink {
        name: "Email",
        url: "mailto:sibir0252@gmail.com",
    },
];

pub const BRAND: &str = "Portfolio";
pub const FOOTER: &str = "© 2024 Portfolio. Crafted with ❤️ using Rust, ratatui & tokio";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_in_range() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} is empty", category.name);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} = {}", skill.name, skill.level);
            }
        }
    }

    #[test]
    fn test_email_row_matches_copy_target() {
        let row = CONTACT_INFO.iter().find(|row| row.label == "Email");
        assert_eq!(row.map(|row| row.value), Some(EMAIL));
    }
}

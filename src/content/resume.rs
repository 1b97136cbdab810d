//! Resume page data

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Resume {
    pub name: &'static str,
    pub headline: &'static str,
    pub contact: [&'static str; 3],
    pub download_label: &'static str,
    pub summary: &'static str,
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    /// (category, skills)
    pub skills: &'static [(&'static str, &'static [&'static str])],
}

pub const RESUME: Resume = Resume {
    name: "Your Name",
    headline: "Full Stack Developer",
    contact: [super::EMAIL, "+91 7867894543", "Chennai, India"],
    download_label: "Download PDF Resume",
    summary: "Full Stack Developer skilled in React.js and Java Spring Boot. Passionate about \
              building scalable, user-friendly web applications and eager to contribute to \
              dynamic development teams. Committed to continuous learning and delivering \
              high-quality software solutions.",
    experience: &[Experience {
        role: "Full Stack Developer",
        company: "Mayuri Tours And Travels",
        period: "Jan 2025 - Present",
        highlights: &[
            "Led development of 3 major web applications serving 100k+ users",
            "Implemented CI/CD pipelines reducing deployment time by 70%",
            "Mentored 5 junior developers and conducted code reviews",
            "Technologies: React, Node.js, TypeScript, AWS, MongoDB",
        ],
    }],
    education: &[Education {
        degree: "Bachelor of Science in Computer Science",
        school: "Agurchand manmull jain college",
        period: "2020 - 2023",
        notes: "Graduated Magna Cum Laude • GPA: 3.8/4.0 • Relevant Coursework: Data \
                Structures, Algorithms, Software Engineering, Database Systems",
    }],
    skills: &[
        (
            "Frontend",
            &["React", "javascript", "Tailwind CSS", "Framer Motion"],
        ),
        ("Backend", &["Java", "Springboot", "MySQL", "AWS"]),
    ],
};

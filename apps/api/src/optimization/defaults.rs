// Built-in tables backing `TuningProfile::default()`.
// Order is significant everywhere in this file: vocabulary order is result order,
// rule order is application order.

/// Terms recognized when matching a resume against a job description.
pub const TECH_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "HTML",
    "CSS",
    "MongoDB",
    "MySQL",
    "Git",
    "Docker",
    "AWS",
    "REST API",
    "GraphQL",
    "Testing",
    "Agile",
    "Scrum",
    "Frontend",
    "Backend",
    "Full Stack",
    "Mobile",
    "Redux",
    "Next.js",
    "Express",
    "Django",
    "Flask",
    "Spring Boot",
    "Laravel",
    "PostgreSQL",
    "Firebase",
    "Kubernetes",
    "CI/CD",
    "DevOps",
    "Linux",
    "Windows",
    "Machine Learning",
    "AI",
    "Data Science",
    "Analytics",
    "Cloud",
    "Microservices",
];

/// Terms used to tag stored job descriptions.
pub const JOB_POSTING_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "HTML",
    "CSS",
    "SASS",
    "Bootstrap",
    "Tailwind",
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "Git",
    "Docker",
    "AWS",
    "Azure",
    "Firebase",
    "REST API",
    "GraphQL",
    "Redux",
    "Testing",
    "Jest",
    "Cypress",
    "Agile",
    "Scrum",
    "CI/CD",
    "DevOps",
    "Linux",
    "Frontend",
    "Backend",
    "Full Stack",
    "Mobile",
    "Responsive",
    "UI/UX",
];

/// (name, pattern, replacement) for the keyword-driven rewrites.
pub const TYPESCRIPT_RULE: (&str, &str, &str) =
    ("pair-typescript", r"JavaScript", "JavaScript/TypeScript");

pub const TESTING_RULE: (&str, &str, &str) = (
    "bullets-tested",
    r"• (Developed|Built|Created)",
    "• $1 and tested",
);

pub const AGILE_RULE: (&str, &str, &str) = (
    "agile-collaboration",
    r"Collaborated with",
    "Collaborated with cross-functional teams in Agile development environment, working with",
);

/// Stylistic rewrites applied to every resume, after the keyword-driven ones.
pub const STYLE_RULES: &[(&str, &str, &str)] = &[
    ("responsive-web-apps", r"web applications", "responsive web applications"),
    (
        "react-hooks",
        r"using React",
        "using React with modern hooks and state management",
    ),
    ("successfully-developed", r"• Developed", "• Successfully developed"),
    ("architected-built", r"• Built", "• Architected and built"),
];

pub const TYPESCRIPT_SUGGESTION: (&str, &str, &str) = (
    "Add TypeScript Experience",
    "The job requires TypeScript. Consider highlighting any TypeScript experience or mention it alongside JavaScript.",
    "Add \"JavaScript/TypeScript\" to your skills section",
);

pub const TESTING_SUGGESTION: (&str, &str, &str) = (
    "Highlight Testing Experience",
    "Testing is important for this role. Mention any testing frameworks you've used or testing practices you follow.",
    "Add testing experience or mention Jest, Cypress, or unit testing",
);

pub const AGILE_SUGGESTION: (&str, &str, &str) = (
    "Mention Agile Experience",
    "This role uses Agile methodology. Include any experience with Scrum, sprints, or Agile practices.",
    "Add Agile/Scrum experience to your work descriptions",
);

pub const ACHIEVEMENTS_SUGGESTION: (&str, &str, &str) = (
    "Add Quantifiable Achievements",
    "Include specific achievements and metrics to show your impact.",
    "Add numbers, percentages, or specific outcomes to your experience",
);

pub const EXPAND_SUGGESTION: (&str, &str, &str) = (
    "Expand Content",
    "Your resume could benefit from more detailed descriptions of your experience.",
    "Add more details about your projects and responsibilities",
);

/// Words whose absence signals a resume without measurable outcomes.
pub const ACHIEVEMENT_MARKERS: &[&str] = &["achieve", "improve"];

/// Resumes with fewer lines than this get the "Expand Content" suggestion.
pub const SHORT_RESUME_LINES: usize = 15;

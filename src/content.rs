//! Static portfolio data. Every page reads from here; nothing is fetched.

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub education: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub bio: &'static str,
    pub short_bio: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Parag Ambildhuke",
    title: "Software Engineer & ML Researcher",
    location: "Seattle, WA, USA",
    education: "Computer Science @ Georgia Tech",
    email: "paragambildhuke7@gmail.com",
    github: "https://github.com/gtparag",
    linkedin: "https://linkedin.com/in/parag-am/",
    bio: "currently interested in building agentic systems & applications",
    short_bio: "Building intelligent systems at the intersection of software engineering and machine learning research.",
};

pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub title: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub location: Option<&'static str>,
    pub team: Option<&'static str>,
    pub description: Option<&'static str>,
    pub bullets: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        id: "microsoft-swe",
        company: "Microsoft",
        title: "Software Engineer",
        start: "Jun 2025",
        end: "Present",
        location: Some("Greater Seattle Area"),
        team: Some("Azure Networking Team"),
        description: None,
        bullets: &[],
        skills: &["Web Development", "C#"],
    },
    Experience {
        id: "georgia-tech-vip",
        company: "Georgia Tech VIP Program",
        title: "Machine Learning & NLP Researcher",
        start: "Jan 2024",
        end: "Apr 2025",
        location: Some("Atlanta, Georgia"),
        team: Some("Topic Modeling Team under Prof. Kartik Goyal"),
        description: Some("Unlocking and Analyzing Historical Texts VIP team, a pioneering effort in digital humanities."),
        bullets: &[
            "Worked on unlocking and analyzing over 5,000 historical texts as part of a pioneering digital humanities effort.",
            "Built scraping and analysis of data from the EEBO TCP database and 50+ archives worldwide, handling over 3,000 document layouts.",
            "Topic modeling of Early Modern English using Latent Dirichlet Allocation and the Moses tokenizer.",
        ],
        skills: &["Python", "Machine Learning", "NLP"],
    },
    Experience {
        id: "microsoft-intern",
        company: "Microsoft",
        title: "Software Engineer Intern",
        start: "May 2024",
        end: "Aug 2024",
        location: Some("Greater Seattle Area"),
        team: Some("Azure HyperScale Physical Networking (PhyNet) Team"),
        description: None,
        bullets: &[
            "Improved tools that detect anomalies and measure loss across Azure's network infrastructure.",
            "Built datacenter network monitoring that helps resolve physical network outages in real time.",
        ],
        skills: &["C++", "C#"],
    },
    Experience {
        id: "georgia-tech-advising",
        company: "College of Computing at Georgia Tech",
        title: "College Advising Student Assistant",
        start: "May 2023",
        end: "May 2024",
        location: Some("Atlanta, Georgia"),
        team: None,
        description: None,
        bullets: &[
            "Point of contact at the front desk of College of Computing academic advising.",
            "Helped organize 10+ advising events with hundreds of students in each.",
        ],
        skills: &["Project Management", "Event Planning"],
    },
    Experience {
        id: "gsu-math-ta",
        company: "Georgia State University",
        title: "Undergraduate Mathematics Teaching & Lab Assistant",
        start: "Jan 2022",
        end: "Nov 2022",
        location: Some("Atlanta, Georgia"),
        team: Some("Mathematics Interactive Learning Environment (MILE) Lab"),
        description: None,
        bullets: &[
            "Ran test review sessions that lifted some students' grades by more than 25%.",
            "Tutored more than 250 students individually.",
            "Kept hardware and software running on over 70 lab computers.",
        ],
        skills: &["Applied Mathematics", "Communication"],
    },
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub date: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "secure-usb",
        title: "Secure USB with Gesture Authentication",
        description: "Working prototype of a USB device that authenticates users via gestures and touch detection and hides sensitive data behind a decoy file system.",
        technologies: &["C++", "ESP32", "Microcontrollers", "3D Printing"],
        github_url: None,
        live_url: None,
        date: Some("Feb 2025 - Present"),
        featured: true,
    },
    Project {
        id: "emotion-detection",
        title: "In-text Emotion Detection using NLP",
        description: "Classifies text into 6 fundamental human emotions using LSTM, BERT, SVM and Naive Bayes.",
        technologies: &["Python", "BERT", "LSTM", "NLP", "Scikit-learn"],
        github_url: Some("https://github.com/gtparag/CS4641-Project"),
        live_url: None,
        date: Some("Feb 2024 - Present"),
        featured: true,
    },
    Project {
        id: "investing-yellow",
        title: "Investing Yellow",
        description: "Fin-tech application giving users insight into their finances through AI-generated analysis reports. Built in 48 hours at HackGT X.",
        technologies: &["TypeScript", "React", "Node.js", "AWS", "Plaid API"],
        github_url: None,
        live_url: None,
        date: Some("Feb 2024"),
        featured: true,
    },
    Project {
        id: "platformer-game",
        title: "Platformer Jump Game",
        description: "2D platformer with physics simulation and smooth animations.",
        technologies: &["JavaScript", "HTML5", "CSS3", "Java"],
        github_url: Some("https://github.com/gtparag/Platformer-Jump-Game"),
        live_url: Some("https://gtparag.github.io/Platformer-Jump-Game/"),
        date: Some("Apr 2023 - Present"),
        featured: true,
    },
    Project {
        id: "netflix-rating",
        title: "Movie Rating Generator for Netflix",
        description: "Overall and per-movie rating averages over 17,770 files and more than 7 million customer IDs.",
        technologies: &["Python", "SQL", "Java"],
        github_url: None,
        live_url: None,
        date: Some("Oct 2022 - Dec 2022"),
        featured: false,
    },
];

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.featured)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    MlAi,
    Frameworks,
    Tools,
    Databases,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::MlAi,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Databases,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::MlAi => "ML & AI",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools & Platforms",
            SkillCategory::Databases => "Databases",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, category: SkillCategory) -> Skill {
    Skill { name, category }
}

pub const SKILLS: &[Skill] = &[
    skill("Python", SkillCategory::Languages),
    skill("TypeScript", SkillCategory::Languages),
    skill("Java", SkillCategory::Languages),
    skill("C++", SkillCategory::Languages),
    skill("SQL", SkillCategory::Languages),
    skill("PyTorch", SkillCategory::MlAi),
    skill("TensorFlow", SkillCategory::MlAi),
    skill("Scikit-learn", SkillCategory::MlAi),
    skill("NLP", SkillCategory::MlAi),
    skill("Transformers", SkillCategory::MlAi),
    skill("React", SkillCategory::Frameworks),
    skill("Next.js", SkillCategory::Frameworks),
    skill("FastAPI", SkillCategory::Frameworks),
    skill("Git", SkillCategory::Tools),
    skill("Docker", SkillCategory::Tools),
    skill("Linux", SkillCategory::Tools),
    skill("PostgreSQL", SkillCategory::Databases),
    skill("Redis", SkillCategory::Databases),
];

/// Skills bucketed by category, in display order, empty buckets dropped.
pub fn skills_by_category() -> Vec<(SkillCategory, Vec<&'static str>)> {
    SkillCategory::ALL
        .iter()
        .map(|category| {
            let names = SKILLS
                .iter()
                .filter(|skill| skill.category == *category)
                .map(|skill| skill.name)
                .collect::<Vec<_>>();
            (*category, names)
        })
        .filter(|(_, names)| !names.is_empty())
        .collect()
}

pub struct TimelineSection {
    pub id: &'static str,
    pub marker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub open_by_default: bool,
    pub bullets: &'static [&'static str],
}

pub const TIMELINE: &[TimelineSection] = &[
    TimelineSection {
        id: "now",
        marker: ">>",
        title: "CURRENT_STATUS",
        subtitle: "real-time system state",
        open_by_default: true,
        bullets: &[
            "Building intelligent systems.",
            "Researching NLP and deep learning applications.",
            "Creating tools that augment human capabilities.",
        ],
    },
    TimelineSection {
        id: "ml-research",
        marker: ":::",
        title: "ML_RESEARCH_PROTOCOL",
        subtitle: "diving deep into the intelligence frontier",
        open_by_default: false,
        bullets: &[
            "Fascinated by how neural networks learn representations of the world.",
            "Working on projects that bridge research and real-world applications.",
        ],
    },
    TimelineSection {
        id: "georgia-tech",
        marker: "[#]",
        title: "GEORGIA_TECH.node",
        subtitle: "where curiosity meets rigor",
        open_by_default: false,
        bullets: &[
            "Computer Science with a focus on Machine Learning.",
            "Learning to think systematically about complex problems.",
        ],
    },
    TimelineSection {
        id: "journey",
        marker: ">>>",
        title: "ORIGIN_STORY.log",
        subtitle: "from taking things apart to building the future",
        open_by_default: false,
        bullets: &[
            "Started by taking apart electronics to see how they worked.",
            "Discovered programming and never looked back.",
            "Now focused on creating AI that amplifies human potential.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_group_in_category_order_without_empty_buckets() {
        let groups = skills_by_category();
        let order: Vec<_> = groups.iter().map(|(category, _)| *category).collect();
        assert_eq!(order, SkillCategory::ALL.to_vec());
        assert!(groups.iter().all(|(_, names)| !names.is_empty()));
        let total: usize = groups.iter().map(|(_, names)| names.len()).sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn only_featured_projects_are_listed() {
        assert!(featured_projects().all(|project| project.featured));
        assert!(featured_projects().count() < PROJECTS.len());
    }

    #[test]
    fn identifiers_are_unique() {
        let mut ids: Vec<_> = EXPERIENCES.iter().map(|e| e.id).collect();
        ids.extend(PROJECTS.iter().map(|p| p.id));
        ids.extend(TIMELINE.iter().map(|t| t.id));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}

//! Static portfolio content: the about/skills/contact sections and the
//! seed project records.
//!
//! Loaded once at startup and cached for the lifetime of the process. The
//! project seed is the cold-start source of truth; the durable cache only
//! overlays it (see [`crate::project::ProjectStore`]).

use std::sync::OnceLock;

use crate::project::Project;

/// One professional experience entry.
#[derive(Debug, Clone)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// One education entry.
#[derive(Debug, Clone)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone)]
pub struct About {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone)]
pub struct Skills {
    pub technical: Vec<&'static str>,
    pub soft: Vec<&'static str>,
    pub tools: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Contact {
    pub email: &'static str,
    /// `(platform, url)` pairs in display order.
    pub social: Vec<(&'static str, &'static str)>,
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub about: About,
    pub skills: Skills,
    pub contact: Contact,
}

static PORTFOLIO: OnceLock<Portfolio> = OnceLock::new();

/// Returns the static portfolio content, initialized on first access.
pub fn portfolio() -> &'static Portfolio {
    PORTFOLIO.get_or_init(|| Portfolio {
        about: About {
            name: "Alex Moreno",
            title: "Full Stack Developer",
            summary: "I'm a full stack developer with a background in computer science. \
                I build modern, scalable web applications with a touch of creativity, \
                like this interactive terminal portfolio. I care about clean \
                architecture and seamless user experiences.",
            experience: vec![
                Experience {
                    role: "Senior Developer",
                    company: "Brightline Solutions",
                    period: "2023-Present",
                    description: "Lead developer for client projects, mentoring junior \
                        developers, and implementing CI/CD pipelines.",
                },
                Experience {
                    role: "Full Stack Developer",
                    company: "Northwind Digital",
                    period: "2021-2023",
                    description: "Built frontend interfaces and design systems, and \
                        improved UI performance across several web applications.",
                },
                Experience {
                    role: "Freelance Developer",
                    company: "Self-employed",
                    period: "2018-2021",
                    description: "Developed web applications for local businesses, \
                        focusing on responsive design and user experience.",
                },
            ],
            education: vec![Education {
                degree: "B.S. Computer Science",
                institution: "State University",
                year: "2021",
            }],
        },
        skills: Skills {
            technical: vec![
                "JavaScript (ES6+)",
                "TypeScript",
                "React",
                "Next.js",
                "Node.js",
                "Rust",
                "PostgreSQL",
                "GraphQL",
                "REST APIs",
                "HTML5",
                "CSS3",
                "Tailwind CSS",
            ],
            soft: vec![
                "Problem Solving",
                "Communication",
                "Team Collaboration",
                "Project Management",
                "Mentoring",
            ],
            tools: vec![
                "Git",
                "GitHub",
                "Docker",
                "AWS",
                "Vercel",
                "Figma",
                "Jest",
            ],
        },
        contact: Contact {
            email: "alex@example.dev",
            social: vec![
                ("GitHub", "https://github.com/alexmoreno-dev"),
                ("LinkedIn", "https://www.linkedin.com/in/alexmoreno-dev/"),
                ("Mastodon", "https://mastodon.social/@alexmoreno"),
            ],
        },
    })
}

/// Builds the seed project collection.
///
/// Returns an owned vector because the store mutates its copy; seed ids
/// are plain slugs without the random suffix runtime records get.
pub fn seed_projects() -> Vec<Project> {
    fn project(
        id: &str,
        name: &str,
        description: &str,
        technologies: &[&str],
        demo_url: &str,
        source_url: &str,
        image: &str,
        date: &str,
    ) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            source_url: source_url.to_string(),
            demo_url: demo_url.to_string(),
            image: image.to_string(),
            date: date.to_string(),
        }
    }

    vec![
        project(
            "event-horizon",
            "Event Horizon",
            "A responsive web app for discovering, creating, and managing community \
             events, with calendar sync and an assistant that suggests events by interest.",
            &["Next.js", "React", "TypeScript", "Tailwind CSS", "Prisma"],
            "https://event-horizon.example.dev/",
            "https://github.com/alexmoreno-dev/event-horizon",
            "/images/event-horizon.png",
            "2025-02-15",
        ),
        project(
            "table-tactician",
            "Table Tactician",
            "A restaurant management system that streamlines reservations, table \
             assignments, and staff scheduling, with real-time availability updates \
             and an admin dashboard for owners.",
            &["Next.js", "React", "TypeScript", "Tailwind CSS", "Prisma"],
            "https://table-tactician.example.dev/",
            "https://github.com/alexmoreno-dev/table-tactician",
            "/images/table-tactician.png",
            "2024-02-01",
        ),
        project(
            "sharp-cuts",
            "Sharp Cuts",
            "A booking platform for barber shops: customers book services online, \
             staff manage appointments, and the whole thing is wrapped in a clean \
             responsive design.",
            &["Next.js", "React", "TypeScript", "Tailwind CSS", "Prisma"],
            "https://sharp-cuts.example.dev/",
            "https://github.com/alexmoreno-dev/sharp-cuts",
            "/images/sharp-cuts.png",
            "2025-01-01",
        ),
        project(
            "cart-course",
            "Cart Course",
            "A modern online storefront with easy navigation, secure payments, and \
             order tracking, built for small shops that outgrew their spreadsheet.",
            &["Next.js", "React", "TypeScript", "Tailwind CSS", "Stripe"],
            "https://cart-course.example.dev/",
            "https://github.com/alexmoreno-dev/cart-course",
            "/images/cart-course.png",
            "2024-01-01",
        ),
        project(
            "study-sprint",
            "Study Sprint",
            "A learning platform where students create, share, and discover study \
             materials: notes, flashcards, and quizzes with spaced-repetition review.",
            &["Next.js", "React", "TypeScript", "Tailwind CSS", "PostgreSQL"],
            "https://study-sprint.example.dev/",
            "https://github.com/alexmoreno-dev/study-sprint",
            "/images/study-sprint.png",
            "2024-04-01",
        ),
    ]
}

/// ASCII art printed by the `banner` command and at startup.
pub const BANNER: &str = r#"
 _____ _____ ____  __  __ _____ ___  _     ___ ___
|_   _| ____|  _ \|  \/  |  ___/ _ \| |   |_ _/ _ \
  | | |  _| | |_) | |\/| | |_ | | | | |    | | | | |
  | | | |___|  _ <| |  | |  _|| |_| | |___ | | |_| |
  |_| |_____|_| \_\_|  |_|_|   \___/|_____|___\___/

        interactive portfolio terminal
        type 'help' to get started
"#;

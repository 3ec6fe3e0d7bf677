use leptos_router::static_routes::StaticParamsMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub social_links: Vec<SocialLink>,
}

impl PersonalInfo {
    pub fn social(&self, label: &str) -> Option<&str> {
        self.social_links
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
}

impl Skill {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: bool,
}

impl Project {
    pub fn path(&self) -> String {
        project_path(&self.slug)
    }
}

/// The in-page anchors of the home document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub target: Section,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.target.anchor()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: f64,
    pub suffix: String,
    pub label: String,
    pub icon: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

static PERSONAL_INFO: LazyLock<PersonalInfo> = LazyLock::new(|| PersonalInfo {
    name: "Nikhil Rana".to_string(),
    title: "Full Stack Developer".to_string(),
    email: "nikhilrana7885@gmail.com".to_string(),
    location: "Your City, Country".to_string(),
    bio: "A passionate developer crafting beautiful and functional web experiences."
        .to_string(),
    social_links: vec![
        SocialLink {
            label: "github".to_string(),
            url: "https://github.com/NikhilRana1".to_string(),
        },
        SocialLink {
            label: "linkedin".to_string(),
            url: "https://www.linkedin.com/in/nikhil-rana-9352352b3/".to_string(),
        },
    ],
});

static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| {
    [
        ("React", 90),
        ("Next.js", 85),
        ("JavaScript", 90),
        ("TypeScript", 75),
        ("Node.js", 80),
        ("Tailwind CSS", 85),
        ("MongoDB", 70),
        ("Git", 80),
    ]
    .into_iter()
    .map(|(name, level)| Skill::new(name, level))
    .collect()
});

fn project(slug: &str, title: &str, image: &str, technologies: &[&str], featured: bool) -> Project {
    let name = title.to_lowercase();
    Project {
        slug: slug.to_string(),
        title: title.to_string(),
        description: format!("A brief description of {name} and what it does."),
        long_description: "A detailed description of the project, technologies used, challenges faced, and solutions implemented.".to_string(),
        image: Some(image.to_string()),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: Some(format!("https://{slug}.com")),
        repo_url: Some(format!("https://github.com/yourusername/{slug}")),
        featured,
    }
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        project(
            "project-one",
            "Project One",
            "/images/project1.png",
            &["React", "Next.js", "Tailwind CSS"],
            true,
        ),
        project(
            "project-two",
            "Project Two",
            "/images/project2.png",
            &["Node.js", "Express", "MongoDB"],
            true,
        ),
        project(
            "project-three",
            "Project Three",
            "/images/project3.png",
            &["React", "Firebase", "Tailwind CSS"],
            false,
        ),
    ]
});

static NAV_LINKS: LazyLock<Vec<NavLink>> = LazyLock::new(|| {
    Section::ALL
        .into_iter()
        .map(|target| NavLink {
            name: format!("{target:?}"),
            target,
        })
        .collect()
});

static EXPERIENCES: LazyLock<Vec<Experience>> = LazyLock::new(|| {
    vec![Experience {
        title: "Software Developer".to_string(),
        company: "Company Name".to_string(),
        duration: "2023 - Present".to_string(),
        description: "Description of your role and responsibilities.".to_string(),
    }]
});

static STATS: LazyLock<Vec<Stat>> = LazyLock::new(|| {
    [
        (1.0, "+", "Years Experience", "📅"),
        (12.0, "+", "Projects Completed", "🚀"),
        (30.0, "+", "Happy Clients", "😄"),
        (99.0, "%", "Client Satisfaction", "⭐"),
    ]
    .into_iter()
    .map(|(value, suffix, label, icon)| Stat {
        value,
        suffix: suffix.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
    })
    .collect()
});

pub fn personal_info() -> &'static PersonalInfo {
    &PERSONAL_INFO
}

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

pub fn experiences() -> &'static [Experience] {
    &EXPERIENCES
}

pub fn stats() -> &'static [Stat] {
    &STATS
}

pub fn find_project(slug: &str) -> Result<&'static Project, ContentError> {
    projects()
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| ContentError::ProjectNotFound(slug.to_string()))
}

pub fn project_path(slug: &str) -> String {
    format!("/projects/{slug}")
}

pub fn project_slugs() -> Vec<String> {
    projects().iter().map(|p| p.slug.clone()).collect()
}

/// Params pre-rendered for `/projects/:slug`, one page per project.
pub fn project_route_params() -> StaticParamsMap {
    let mut params = StaticParamsMap::new();
    params.insert("slug", project_slugs());
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs = project_slugs();
        let unique = slugs.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), slugs.len());
    }

    #[test]
    fn one_prerendered_page_per_project() {
        let params = project_route_params();
        assert_eq!(params.0.len(), 1);
        let slugs = params.get("slug").expect("slug params");
        assert_eq!(slugs.len(), projects().len());
        for p in projects() {
            assert_eq!(slugs.iter().filter(|s| **s == p.slug).count(), 1);
        }
        assert!(slugs.contains(&"project-two".to_string()));
    }

    #[test]
    fn lookup_returns_table_entry() {
        for p in projects() {
            let found = find_project(&p.slug).expect("slug from the table");
            assert_eq!(found, p);
        }
        let two = find_project("project-two").expect("project two exists");
        assert_eq!(two.title, "Project Two");
        assert_eq!(two.image.as_deref(), Some("/images/project2.png"));
        assert_eq!(two.technologies, vec!["Node.js", "Express", "MongoDB"]);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert_eq!(
            find_project("nope"),
            Err(ContentError::ProjectNotFound("nope".to_string()))
        );
        assert!(find_project("").is_err());
        assert_eq!(
            find_project("x").unwrap_err().to_string(),
            "Project not found: x"
        );
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(skills().iter().all(|s| s.level <= 100));
        assert_eq!(Skill::new("Overflow", 250).level, 100);
    }

    #[test]
    fn nav_links_point_at_sections() {
        let hrefs = nav_links().iter().map(NavLink::href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#projects", "#skills", "#contact"]
        );
        assert_eq!(nav_links()[2].name, "Projects");
    }

    #[test]
    fn featured_subset() {
        let featured = projects()
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.slug.as_str())
            .collect::<Vec<_>>();
        assert_eq!(featured, vec!["project-one", "project-two"]);
    }

    #[test]
    fn project_survives_serialization() {
        let p = find_project("project-one").expect("project one exists");
        let json = serde_json::to_string(p).expect("serializable");
        let back: Project = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(&back, p);
    }

    #[test]
    fn social_links_by_label() {
        let info = personal_info();
        assert_eq!(info.social("github"), Some("https://github.com/NikhilRana1"));
        assert_eq!(info.social("twitter"), None);
    }
}

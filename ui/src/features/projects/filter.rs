use crate::content::Project;

/// Selected entry of the "Filter by Technology" bar
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum TechnologyFilter {
    #[default]
    All,
    Technology(String),
}

impl TechnologyFilter {
    pub fn label(&self) -> &str {
        match self {
            TechnologyFilter::All => "All Projects",
            TechnologyFilter::Technology(name) => name,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            TechnologyFilter::All => true,
            TechnologyFilter::Technology(name) => project.technologies.iter().any(|t| t == name),
        }
    }

    pub fn is_selected_technology(&self, technology: &str) -> bool {
        matches!(self, TechnologyFilter::Technology(name) if name == technology)
    }
}

/// Distinct technologies across all projects, in order of first appearance
pub fn distinct_technologies(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for technology in projects.iter().flat_map(|p| p.technologies.iter()) {
        if !seen.contains(technology) {
            seen.push(technology.clone());
        }
    }
    seen
}

/// `All` followed by one entry per distinct technology
pub fn filter_options(projects: &[Project]) -> Vec<TechnologyFilter> {
    std::iter::once(TechnologyFilter::All)
        .chain(
            distinct_technologies(projects)
                .into_iter()
                .map(TechnologyFilter::Technology),
        )
        .collect()
}

pub fn apply_filter<'a>(projects: &'a [Project], filter: &TechnologyFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Figures for the "Project Overview" section
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectStats {
    pub total_projects: usize,
    pub technologies_used: usize,
    pub key_features: usize,
    /// Percentage shown as "Completion Rate"; every listed project is shipped work
    pub completion_rate: u8,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            total_projects: projects.len(),
            technologies_used: distinct_technologies(projects).len(),
            key_features: projects.iter().map(|p| p.highlights.len()).sum(),
            completion_rate: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PortfolioContent;

    fn project(id: u32, technologies: &[&str], highlights: usize) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            demo_link: "#".to_string(),
            github_link: "#".to_string(),
            highlights: (0..highlights).map(|i| format!("feature {i}")).collect(),
        }
    }

    #[test]
    fn test_distinct_technologies_keep_first_appearance_order() {
        let projects = vec![
            project(1, &["React", "Node.js"], 1),
            project(2, &["Redux", "React", "Express"], 1),
        ];
        assert_eq!(
            distinct_technologies(&projects),
            ["React", "Node.js", "Redux", "Express"]
        );
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let projects = vec![project(1, &["Rust"], 0)];
        let options = filter_options(&projects);
        assert_eq!(options[0], TechnologyFilter::All);
        assert_eq!(options[0].label(), "All Projects");
        assert_eq!(options[1], TechnologyFilter::Technology("Rust".to_string()));
    }

    #[test]
    fn test_apply_filter_selects_matching_projects() {
        let projects = vec![
            project(1, &["React", "MongoDB"], 0),
            project(2, &["React", "PostgreSQL"], 0),
            project(3, &["Vue"], 0),
        ];

        let all = apply_filter(&projects, &TechnologyFilter::All);
        assert_eq!(all.len(), 3);

        let react = apply_filter(&projects, &TechnologyFilter::Technology("React".to_string()));
        assert_eq!(react.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2]);

        let none = apply_filter(&projects, &TechnologyFilter::Technology("Elm".to_string()));
        assert!(none.is_empty());
    }

    #[test]
    fn test_builtin_stats() {
        let content = PortfolioContent::builtin().unwrap();
        let stats = ProjectStats::from_projects(&content.projects);

        assert_eq!(stats.total_projects, 3);
        // React, Node.js, Express, MongoDB, Stripe API, Redux, Socket.io,
        // PostgreSQL, OpenWeather API, CSS Modules, Responsive Design
        assert_eq!(stats.technologies_used, 11);
        assert_eq!(stats.key_features, 12);
        assert_eq!(stats.completion_rate, 100);
    }

    #[test]
    fn test_selected_technology_highlight() {
        let filter = TechnologyFilter::Technology("React".to_string());
        assert!(filter.is_selected_technology("React"));
        assert!(!filter.is_selected_technology("Redux"));
        assert!(!TechnologyFilter::All.is_selected_technology("React"));
    }
}

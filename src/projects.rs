//! Sample project directory
//!
//! Static data behind the project selection screen. Search and status
//! filtering are pure functions so the screen stays trivially testable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Planning,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Planning,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// Percent complete
    pub progress: u8,
    pub status: ProjectStatus,
    pub value: &'static str,
    pub team: u16,
    pub deadline: &'static str,
    pub favorite: bool,
}

pub const SAMPLE_PROJECTS: &[Project] = &[
    Project {
        id: "1",
        name: "Downtown Office Complex",
        location: "Toronto, ON",
        progress: 65,
        status: ProjectStatus::Active,
        value: "$12.5M",
        team: 24,
        deadline: "Dec 2025",
        favorite: true,
    },
    Project {
        id: "2",
        name: "Residential Tower",
        location: "Vancouver, BC",
        progress: 42,
        status: ProjectStatus::Active,
        value: "$18.3M",
        team: 31,
        deadline: "Mar 2026",
        favorite: false,
    },
    Project {
        id: "3",
        name: "Shopping Mall Renovation",
        location: "Calgary, AB",
        progress: 28,
        status: ProjectStatus::Planning,
        value: "$8.7M",
        team: 18,
        deadline: "Aug 2026",
        favorite: false,
    },
    Project {
        id: "4",
        name: "Highway Infrastructure",
        location: "Montreal, QC",
        progress: 85,
        status: ProjectStatus::Active,
        value: "$24.1M",
        team: 45,
        deadline: "Oct 2025",
        favorite: false,
    },
    Project {
        id: "5",
        name: "Hospital Wing Extension",
        location: "Ottawa, ON",
        progress: 100,
        status: ProjectStatus::Completed,
        value: "$15.8M",
        team: 28,
        deadline: "Jun 2025",
        favorite: false,
    },
    Project {
        id: "6",
        name: "Harbourfront Promenade",
        location: "Halifax, NS",
        progress: 12,
        status: ProjectStatus::OnHold,
        value: "$5.2M",
        team: 9,
        deadline: "May 2027",
        favorite: false,
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    SAMPLE_PROJECTS.iter().find(|project| project.id == id)
}

/// Case-insensitive search over name and location, with an optional
/// status filter; an empty query keeps everything
pub fn filter_projects(
    projects: &'static [Project],
    query: &str,
    status: Option<ProjectStatus>,
) -> Vec<&'static Project> {
    let query = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|project| status.map_or(true, |wanted| project.status == wanted))
        .filter(|project| {
            query.is_empty()
                || project.name.to_lowercase().contains(&query)
                || project.location.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything() {
        let all = filter_projects(SAMPLE_PROJECTS, "", None);
        assert_eq!(all.len(), SAMPLE_PROJECTS.len());
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let matches = filter_projects(SAMPLE_PROJECTS, "TOWER", None);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Residential Tower");
    }

    #[test]
    fn test_query_matches_location() {
        let matches = filter_projects(SAMPLE_PROJECTS, "toronto", None);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
    }

    #[test]
    fn test_status_filter_composes_with_query() {
        let active = filter_projects(SAMPLE_PROJECTS, "", Some(ProjectStatus::Active));
        assert!(active.iter().all(|p| p.status == ProjectStatus::Active));
        assert_eq!(active.len(), 3);

        let none = filter_projects(SAMPLE_PROJECTS, "tower", Some(ProjectStatus::Planning));
        assert!(none.is_empty());
    }

    #[test]
    fn test_whitespace_query_is_treated_as_empty() {
        let all = filter_projects(SAMPLE_PROJECTS, "   ", None);
        assert_eq!(all.len(), SAMPLE_PROJECTS.len());
    }

    #[test]
    fn test_find_project() {
        assert_eq!(find_project("4").unwrap().name, "Highway Infrastructure");
        assert!(find_project("99").is_none());
    }
}

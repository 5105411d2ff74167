//! GitHub API wire types.

use serde::Deserialize;

/// The subset of GitHub's repository object the listing reads.
///
/// Unknown fields are ignored. Optional fields accept both `null` and a
/// missing key.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepoPayload {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_repository_object() {
        let json = r#"{
            "id": 1296269,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": {"login": "octocat", "id": 1},
            "description": "This your first repo!",
            "html_url": "https://github.com/octocat/Hello-World",
            "homepage": "https://github.com",
            "language": "Go",
            "stargazers_count": 80,
            "watchers_count": 80,
            "forks_count": 9,
            "topics": ["octocat"],
            "updated_at": "2011-01-26T19:14:43Z"
        }"#;

        let repo: GitHubRepoPayload = serde_json::from_str(json).unwrap();

        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description.as_deref(), Some("This your first repo!"));
        assert_eq!(repo.html_url, "https://github.com/octocat/Hello-World");
        assert_eq!(repo.homepage.as_deref(), Some("https://github.com"));
        assert_eq!(repo.language.as_deref(), Some("Go"));
        assert_eq!(repo.stargazers_count, 80);
        assert_eq!(repo.forks_count, 9);
    }

    #[test]
    fn null_and_missing_optionals_decode_as_none() {
        let json = r#"{
            "id": 7,
            "name": "bare",
            "description": null,
            "html_url": "https://github.com/x/bare",
            "language": null,
            "stargazers_count": 0,
            "forks_count": 0
        }"#;

        let repo: GitHubRepoPayload = serde_json::from_str(json).unwrap();

        assert!(repo.description.is_none());
        assert!(repo.homepage.is_none());
        assert!(repo.language.is_none());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let json = r#"{
            "id": 7,
            "name": "bad",
            "html_url": "https://github.com/x/bad",
            "stargazers_count": -1,
            "forks_count": 0
        }"#;

        assert!(serde_json::from_str::<GitHubRepoPayload>(json).is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{"id": 7, "name": "no-url", "stargazers_count": 0, "forks_count": 0}"#;

        assert!(serde_json::from_str::<GitHubRepoPayload>(json).is_err());
    }
}

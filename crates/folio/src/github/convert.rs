//! Conversion from GitHub wire types to listing records.

use std::collections::HashSet;

use super::types::GitHubRepoPayload;
use crate::record::RepositoryRecord;

/// Treat empty strings as absent.
///
/// GitHub reports an unset homepage as `""` rather than `null`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Convert a single payload into a record.
///
/// Returns `None` for payloads without a usable name.
pub fn to_record(repo: GitHubRepoPayload) -> Option<RepositoryRecord> {
    if repo.name.is_empty() {
        return None;
    }

    Some(RepositoryRecord {
        id: repo.id,
        name: repo.name,
        description: non_empty(repo.description),
        html_url: repo.html_url,
        homepage: non_empty(repo.homepage),
        language: non_empty(repo.language),
        star_count: repo.stargazers_count,
        fork_count: repo.forks_count,
    })
}

/// Convert a decoded page into records, preserving upstream order.
///
/// Nameless payloads and repeated ids are dropped so the list upholds the
/// record invariants.
pub fn to_records(repos: Vec<GitHubRepoPayload>) -> Vec<RepositoryRecord> {
    let mut seen = HashSet::with_capacity(repos.len());
    let mut records = Vec::with_capacity(repos.len());

    for repo in repos {
        let id = repo.id;
        let Some(record) = to_record(repo) else {
            tracing::warn!(id, "Dropping repository without a name");
            continue;
        };
        if !seen.insert(id) {
            tracing::warn!(id, name = %record.name, "Dropping repository with duplicate id");
            continue;
        }
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: u64, name: &str) -> GitHubRepoPayload {
        GitHubRepoPayload {
            id,
            name: name.to_string(),
            description: Some("desc".to_string()),
            html_url: format!("https://github.com/x/{name}"),
            homepage: Some("https://example.com".to_string()),
            language: Some("Rust".to_string()),
            stargazers_count: 3,
            forks_count: 1,
        }
    }

    #[test]
    fn maps_every_field() {
        let record = to_record(payload(42, "folio")).unwrap();

        assert_eq!(
            record,
            RepositoryRecord {
                id: 42,
                name: "folio".to_string(),
                description: Some("desc".to_string()),
                html_url: "https://github.com/x/folio".to_string(),
                homepage: Some("https://example.com".to_string()),
                language: Some("Rust".to_string()),
                star_count: 3,
                fork_count: 1,
            }
        );
    }

    #[test]
    fn empty_optionals_become_none() {
        let mut repo = payload(1, "blank");
        repo.homepage = Some(String::new());
        repo.description = Some(String::new());
        repo.language = Some(String::new());

        let record = to_record(repo).unwrap();

        assert!(record.homepage.is_none());
        assert!(record.description.is_none());
        assert!(record.language.is_none());
        assert!(!record.has_demo());
    }

    #[test]
    fn nameless_payload_is_rejected() {
        assert!(to_record(payload(1, "")).is_none());
    }

    #[test]
    fn whitespace_values_are_kept_verbatim() {
        let mut repo = payload(1, " ");
        repo.description = Some("   ".to_string());
        repo.language = Some(" ".to_string());

        let record = to_record(repo).unwrap();

        assert_eq!(record.name, " ");
        assert_eq!(record.description.as_deref(), Some("   "));
        assert_eq!(record.language.as_deref(), Some(" "));
    }

    #[test]
    fn to_records_preserves_order_and_drops_invalid() {
        let repos = vec![
            payload(3, "c"),
            payload(1, "a"),
            payload(9, ""),
            payload(3, "c-again"),
            payload(2, "b"),
        ];

        let names: Vec<_> = to_records(repos).into_iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn to_records_of_empty_page_is_empty() {
        assert!(to_records(Vec::new()).is_empty());
    }
}

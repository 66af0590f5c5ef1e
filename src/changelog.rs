//! Conventional-commit changelog generation
//!
//! Walks the enclosing repository's history from HEAD and splits it into
//! sections at release tags, newest first. Commit subjects are parsed as
//! conventional commits (`type(scope)!: description`); anything that does
//! not parse lands under Miscellaneous verbatim. Merge commits are skipped.

use std::collections::HashMap;
use std::fmt::Write as _;

use git2::{Oid, Repository, Sort};

use crate::error::Result;

/// Grouping bucket for a commit, derived from its conventional type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    Feat,
    Fix,
    Perf,
    Refactor,
    Docs,
    Test,
    Other,
}

/// Rendering order of the per-kind headings
const KIND_ORDER: &[CommitKind] = &[
    CommitKind::Feat,
    CommitKind::Fix,
    CommitKind::Perf,
    CommitKind::Refactor,
    CommitKind::Docs,
    CommitKind::Test,
    CommitKind::Other,
];

impl CommitKind {
    fn heading(self) -> &'static str {
        match self {
            CommitKind::Feat => "Features",
            CommitKind::Fix => "Bug Fixes",
            CommitKind::Perf => "Performance",
            CommitKind::Refactor => "Refactoring",
            CommitKind::Docs => "Documentation",
            CommitKind::Test => "Tests",
            CommitKind::Other => "Miscellaneous",
        }
    }

    fn from_type(commit_type: &str) -> Self {
        match commit_type {
            "feat" => CommitKind::Feat,
            "fix" => CommitKind::Fix,
            "perf" => CommitKind::Perf,
            "refactor" => CommitKind::Refactor,
            "docs" => CommitKind::Docs,
            "test" | "tests" => CommitKind::Test,
            _ => CommitKind::Other,
        }
    }
}

/// One changelog line
#[derive(Debug, Clone)]
pub struct Entry {
    pub kind: CommitKind,
    pub scope: Option<String>,
    pub breaking: bool,
    pub description: String,
    pub short_id: String,
}

/// One release section: a tag name (or "Unreleased") and its commits
#[derive(Debug)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// Parse a commit subject as a conventional commit header.
///
/// Returns the kind, scope, breaking flag and description, or None when the
/// subject does not follow the convention.
pub fn parse_subject(subject: &str) -> Option<(CommitKind, Option<String>, bool, String)> {
    let (header, description) = subject.split_once(':')?;
    let description = description.trim();
    if description.is_empty() {
        return None;
    }

    let mut header = header.trim();
    let mut breaking = false;
    if let Some(stripped) = header.strip_suffix('!') {
        header = stripped;
        breaking = true;
    }

    let (commit_type, scope) = match header.split_once('(') {
        Some((t, rest)) => {
            let scope = rest.strip_suffix(')')?;
            if scope.is_empty() {
                return None;
            }
            (t, Some(scope.to_string()))
        }
        None => (header, None),
    };

    if commit_type.is_empty() || !commit_type.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some((
        CommitKind::from_type(commit_type),
        scope,
        breaking,
        description.to_string(),
    ))
}

/// Map of commit ids to the release tag pointing at them.
///
/// Annotated tags are peeled to their target commit; lightweight tags
/// already point at one.
fn release_tags(repo: &Repository) -> Result<HashMap<Oid, String>> {
    let mut tags = HashMap::new();
    repo.tag_foreach(|oid, name_bytes| {
        if let Ok(name) = std::str::from_utf8(name_bytes) {
            let short = name.strip_prefix("refs/tags/").unwrap_or(name).to_string();
            let target = repo.find_tag(oid).map_or(oid, |tag| tag.target_id());
            tags.insert(target, short);
        }
        true
    })?;
    Ok(tags)
}

/// Collect changelog sections from HEAD backwards.
///
/// The walk starts in an "Unreleased" section; reaching a tagged commit
/// closes the current section and opens the tag's. With `unreleased_only`
/// the walk stops at the first tagged commit.
pub fn collect_sections(repo: &Repository, unreleased_only: bool) -> Result<Vec<Section>> {
    let tags = release_tags(repo)?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        title: "Unreleased".to_string(),
        entries: Vec::new(),
    };

    for oid in revwalk {
        let oid = oid?;

        if let Some(tag) = tags.get(&oid) {
            if unreleased_only {
                sections.push(current);
                return Ok(sections);
            }
            let finished = std::mem::replace(
                &mut current,
                Section {
                    title: tag.clone(),
                    entries: Vec::new(),
                },
            );
            // A tagged HEAD leaves the leading Unreleased section empty.
            if !(finished.title == "Unreleased" && finished.entries.is_empty()) {
                sections.push(finished);
            }
        }

        let commit = repo.find_commit(oid)?;
        if commit.parent_count() > 1 {
            continue;
        }
        let subject = commit.summary().unwrap_or("").trim().to_string();
        if subject.is_empty() {
            continue;
        }

        let short_id: String = oid.to_string().chars().take(7).collect();
        let entry = match parse_subject(&subject) {
            Some((kind, scope, breaking, description)) => Entry {
                kind,
                scope,
                breaking,
                description,
                short_id,
            },
            None => Entry {
                kind: CommitKind::Other,
                scope: None,
                breaking: false,
                description: subject,
                short_id,
            },
        };
        current.entries.push(entry);
    }

    if !current.entries.is_empty() || sections.is_empty() {
        sections.push(current);
    }
    Ok(sections)
}

/// Render sections as Markdown
pub fn render(sections: &[Section]) -> String {
    let mut out = String::from("# Changelog\n");

    for section in sections {
        let _ = write!(out, "\n## {}\n", section.title);
        for kind in KIND_ORDER {
            let entries: Vec<&Entry> =
                section.entries.iter().filter(|e| e.kind == *kind).collect();
            if entries.is_empty() {
                continue;
            }
            let _ = write!(out, "\n### {}\n\n", kind.heading());
            for entry in entries {
                out.push_str("- ");
                if entry.breaking {
                    out.push_str("**breaking** ");
                }
                if let Some(scope) = &entry.scope {
                    let _ = write!(out, "*{scope}*: ");
                }
                out.push_str(&entry.description);
                let _ = writeln!(out, " (`{}`)", entry.short_id);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_type() {
        let (kind, scope, breaking, desc) = parse_subject("feat: add recommender").unwrap();
        assert_eq!(kind, CommitKind::Feat);
        assert_eq!(scope, None);
        assert!(!breaking);
        assert_eq!(desc, "add recommender");
    }

    #[test]
    fn test_parse_scoped_breaking() {
        let (kind, scope, breaking, desc) =
            parse_subject("fix(api)!: change response shape").unwrap();
        assert_eq!(kind, CommitKind::Fix);
        assert_eq!(scope.as_deref(), Some("api"));
        assert!(breaking);
        assert_eq!(desc, "change response shape");
    }

    #[test]
    fn test_parse_unknown_type_is_other() {
        let (kind, ..) = parse_subject("chore: bump deps").unwrap();
        assert_eq!(kind, CommitKind::Other);
    }

    #[test]
    fn test_parse_rejects_non_conventional() {
        assert!(parse_subject("update stuff").is_none());
        assert!(parse_subject("feat:").is_none());
        assert!(parse_subject("feat(): empty scope").is_none());
        assert!(parse_subject("not a type!: x").is_none());
    }

    #[test]
    fn test_render_groups_by_kind() {
        let sections = vec![Section {
            title: "v1.0.0".to_string(),
            entries: vec![
                Entry {
                    kind: CommitKind::Fix,
                    scope: None,
                    breaking: false,
                    description: "handle empty tree".to_string(),
                    short_id: "abc1234".to_string(),
                },
                Entry {
                    kind: CommitKind::Feat,
                    scope: Some("cli".to_string()),
                    breaking: true,
                    description: "add doctor command".to_string(),
                    short_id: "def5678".to_string(),
                },
            ],
        }];

        let md = render(&sections);
        assert!(md.starts_with("# Changelog"));
        assert!(md.contains("## v1.0.0"));
        let features = md.find("### Features").unwrap();
        let fixes = md.find("### Bug Fixes").unwrap();
        assert!(features < fixes, "Features must render before Bug Fixes");
        assert!(md.contains("- **breaking** *cli*: add doctor command (`def5678`)"));
        assert!(md.contains("- handle empty tree (`abc1234`)"));
    }
}

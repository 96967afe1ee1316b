//! GitHub owner/repository extraction from remote URLs and slugs.

use url::Url;

const GITHUB_HOST: &str = "github.com";

/// Owner and repository name of a GitHub-hosted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepository {
    pub owner: String,
    pub name: String,
}

/// Parse an `owner/repo` slug as exported by GitHub Actions in `GITHUB_REPOSITORY`.
///
/// Returns `None` for anything that is not exactly two non-blank segments.
pub fn parse_slug(slug: &str) -> Option<GithubRepository> {
    let mut parts = slug.trim().split('/');
    let owner = parts.next()?.trim();
    let name = parts.next()?.trim();
    if parts.next().is_some() || owner.is_empty() || name.is_empty() {
        return None;
    }
    Some(GithubRepository {
        owner: owner.to_string(),
        name: name.trim_end_matches(".git").to_string(),
    })
}

/// Parse a GitHub remote URL.
///
/// Accepts `https://github.com/owner/repo(.git)`, `ssh://git@github.com/owner/repo.git`
/// and the scp-like `git@github.com:owner/repo.git`. Remotes on other hosts
/// yield `None`.
pub fn parse_remote_url(remote: &str) -> Option<GithubRepository> {
    let remote = remote.trim();
    if remote.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(remote) {
        // `git@github.com:owner/repo` parses with scheme "git@github.com"
        if url.host_str().is_some() {
            if !url.host_str()?.eq_ignore_ascii_case(GITHUB_HOST) {
                return None;
            }
            return parse_slug(url.path().trim_matches('/'));
        }
    }

    let (user_host, path) = remote.split_once(':')?;
    let host = user_host.rsplit('@').next()?;
    if !host.eq_ignore_ascii_case(GITHUB_HOST) {
        return None;
    }
    parse_slug(path.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://github.com/acme/widgets.git", "acme", "widgets")]
    #[case("https://github.com/acme/widgets", "acme", "widgets")]
    #[case("ssh://git@github.com/acme/widgets.git", "acme", "widgets")]
    #[case("git@github.com:acme/widgets.git", "acme", "widgets")]
    #[case("https://GitHub.com/Acme/widgets/", "Acme", "widgets")]
    fn parses_github_remotes(#[case] remote: &str, #[case] owner: &str, #[case] name: &str) {
        let repo = parse_remote_url(remote).unwrap();
        assert_eq!(repo.owner, owner);
        assert_eq!(repo.name, name);
    }

    #[rstest]
    #[case("")]
    #[case("https://gitlab.com/acme/widgets.git")]
    #[case("git@bitbucket.org:acme/widgets.git")]
    #[case("https://github.com/acme")]
    #[case("https://github.com/acme/widgets/tree/main")]
    #[case("/srv/git/widgets.git")]
    fn rejects_non_github_or_malformed_remotes(#[case] remote: &str) {
        assert_eq!(parse_remote_url(remote), None);
    }

    #[rstest]
    #[case("acme/widgets", Some(("acme", "widgets")))]
    #[case(" acme/widgets ", Some(("acme", "widgets")))]
    #[case("acme", None)]
    #[case("/widgets", None)]
    #[case("acme/widgets/extra", None)]
    fn parses_slugs(#[case] slug: &str, #[case] expected: Option<(&str, &str)>) {
        let parsed = parse_slug(slug);
        assert_eq!(
            parsed.as_ref().map(|r| (r.owner.as_str(), r.name.as_str())),
            expected
        );
    }
}

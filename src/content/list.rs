//! Ordering and selection over post lists

use serde::{Deserialize, Serialize};

use super::Post;

/// Slugs curated as "popular", in authored order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopularAllowlist(Vec<String>);

impl PopularAllowlist {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(slugs.into_iter().map(Into::into).collect())
    }

    /// Exact string membership
    pub fn contains(&self, slug: &str) -> bool {
        self.0.iter().any(|s| s == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slugs(&self) -> &[String] {
        &self.0
    }

    /// Allowlisted slugs that match none of `posts`
    pub fn missing<'a>(&'a self, posts: &[Post]) -> Vec<&'a str> {
        self.0
            .iter()
            .filter(|slug| !posts.iter().any(|p| &p.slug == *slug))
            .map(String::as_str)
            .collect()
    }
}

/// Newest first. Stable, so posts sharing a date keep their input order.
pub fn sort_by_date_descending(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
    posts
}

/// The first `n` posts, or all of them when there are fewer
pub fn take_prefix(mut posts: Vec<Post>, n: usize) -> Vec<Post> {
    posts.truncate(n);
    posts
}

/// Posts whose slug is allowlisted, in input order (not allowlist order)
pub fn filter_by_allowlist(posts: Vec<Post>, allowlist: &PopularAllowlist) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|p| allowlist.contains(&p.slug))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TrustedHtml;

    fn post(slug: &str, date: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: TrustedHtml::default(),
            date: date.to_string(),
            sort_key: None,
            thumbnail: None,
            content: TrustedHtml::default(),
        }
    }

    fn slugs(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let posts = vec![post("a", "2021"), post("b", "2022"), post("c", "2022")];
        let sorted = sort_by_date_descending(posts);
        assert_eq!(slugs(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let posts = vec![
            post("a", "2020-05-01"),
            post("b", "2023-01-09"),
            post("c", "2021-12-31"),
            post("d", "2023-01-09"),
        ];
        let once = sort_by_date_descending(posts);
        let twice = sort_by_date_descending(once.clone());
        assert_eq!(once, twice);
        assert_eq!(slugs(&once), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_sort_uses_sort_key_over_display_date() {
        let mut early = post("early", "December 01, 2020");
        early.sort_key = Some("2020-12-01T00:00:00".to_string());
        let mut late = post("late", "April 01, 2021");
        late.sort_key = Some("2021-04-01T00:00:00".to_string());

        // Lexicographically "December" > "April", the sort key must win
        let sorted = sort_by_date_descending(vec![early, late]);
        assert_eq!(slugs(&sorted), vec!["late", "early"]);
    }

    #[test]
    fn test_take_prefix() {
        let posts: Vec<_> = (0..5).map(|i| post(&i.to_string(), "2020")).collect();

        for n in [0, 1, 3, 5, 8] {
            let prefix = take_prefix(posts.clone(), n);
            assert_eq!(prefix.len(), n.min(posts.len()));
            assert_eq!(prefix.as_slice(), &posts[..prefix.len()]);
        }
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let allowlist = PopularAllowlist::new(["x", "y"]);
        let posts = vec![post("x", "1"), post("z", "2"), post("y", "3")];
        let popular = filter_by_allowlist(posts, &allowlist);
        assert_eq!(slugs(&popular), vec!["x", "y"]);

        let reversed = PopularAllowlist::new(["y", "x"]);
        let posts = vec![post("x", "1"), post("y", "3")];
        assert_eq!(slugs(&filter_by_allowlist(posts, &reversed)), vec!["x", "y"]);
    }

    #[test]
    fn test_filter_uses_exact_equality() {
        let allowlist = PopularAllowlist::new(["/foo/"]);
        let posts = vec![post("/foo", "1"), post("/Foo/", "1"), post("/foo/", "1")];
        assert_eq!(slugs(&filter_by_allowlist(posts, &allowlist)), vec!["/foo/"]);
    }

    #[test]
    fn test_missing_allowlist_entries() {
        let allowlist = PopularAllowlist::new(["x", "gone", "y"]);
        let posts = vec![post("x", "1"), post("y", "2")];
        assert_eq!(allowlist.missing(&posts), vec!["gone"]);
    }
}

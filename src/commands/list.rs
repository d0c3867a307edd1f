//! List site content

use anyhow::Result;
use serde_json::json;

use crate::content::loader::ContentLoader;
use crate::content::{filter_by_allowlist, sort_by_date_descending};
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, as_json: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = sort_by_date_descending(ContentLoader::new(folio).load_posts()?);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {} - {} [{}]", post.date, post.title, post.slug);
            }
        }
        "project" | "projects" => {
            let projects = &folio.config.projects;
            if as_json {
                println!("{}", serde_json::to_string_pretty(projects)?);
                return Ok(());
            }
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!("  {} - {} [{}]", project.title, project.link, project.tech.join(", "));
            }
        }
        "popular" => {
            let posts = sort_by_date_descending(ContentLoader::new(folio).load_posts()?);
            let allowlist = &folio.config.popular_posts;
            let missing: Vec<String> = allowlist
                .missing(&posts)
                .into_iter()
                .map(str::to_string)
                .collect();
            let popular = filter_by_allowlist(posts, allowlist);
            if as_json {
                let report = json!({
                    "popular": popular.iter().map(|p| &p.slug).collect::<Vec<_>>(),
                    "missing": missing,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!("Popular posts ({}):", popular.len());
            for post in &popular {
                println!("  {} [{}]", post.title, post.slug);
            }
            if !missing.is_empty() {
                println!("Allowlisted but missing ({}):", missing.len());
                for slug in missing {
                    println!("  {}", slug);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, project, popular",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(run(&folio, "tags", false).is_err());
        assert!(run(&folio, "post", true).is_ok());
    }
}

//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::loader::POSTS_DIR;
use crate::Folio;

/// Create `source/_posts/<slug>/index.md` with a front-matter scaffold
pub fn create_post(folio: &Folio, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = slug::slugify(slug.unwrap_or(title));
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    let target_dir = folio.source_dir.join(POSTS_DIR).join(&slug);
    let file_path = target_dir.join("index.md");

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&target_dir)?;

    let content = format!(
        "---\ntitle: {}\ndate: {}\ndescription:\n---\n\n<!-- more -->\n",
        serde_yaml::to_string(title)?.trim_end(),
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    #[test]
    fn test_create_post() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, "Building a chat application: part 1", None).unwrap();
        assert!(path.ends_with("_posts/building-a-chat-application-part-1/index.md"));

        let content = fs::read_to_string(&path).unwrap();
        let (fm, _) = FrontMatter::parse(&content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Building a chat application: part 1"));
        assert!(fm.parse_date().is_some());
        assert!(fm.description.is_none());

        assert!(create_post(&folio, "Building a chat application: part 1", None).is_err());
    }

    #[test]
    fn test_create_post_with_explicit_slug() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let path = create_post(&folio, "Perlin noise", Some("clojurescript-perlin-noise-tilemap"))
            .unwrap();
        assert!(path.ends_with("clojurescript-perlin-noise-tilemap/index.md"));
    }
}

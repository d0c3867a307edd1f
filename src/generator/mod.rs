//! Generator module - writes the composed pages to the public directory

use anyhow::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::content::loader::POSTS_DIR;
use crate::content::{filter_by_allowlist, sort_by_date_descending, take_prefix, Post};
use crate::page::{render_page, Clock, Page, PageComposer, SystemClock};
use crate::Folio;

/// Static site generator
pub struct Generator {
    folio: Folio,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Generator {
    /// Create a new generator reading the wall clock
    pub fn new(folio: &Folio) -> Self {
        Self::with_clock(folio, Box::new(SystemClock))
    }

    /// Create a generator with an explicit clock
    pub fn with_clock(folio: &Folio, clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self {
            folio: folio.clone(),
            clock,
        }
    }

    /// Generate the entire site. Returns the written page files.
    pub fn generate(&self, posts: &[Post]) -> Result<Vec<PathBuf>> {
        let config = &self.folio.config;
        fs::create_dir_all(&self.folio.public_dir)?;

        self.copy_source_assets()?;

        let sorted = sort_by_date_descending(posts.to_vec());
        let popular = filter_by_allowlist(sorted.clone(), &config.popular_posts);
        for slug in config.popular_posts.missing(&sorted) {
            tracing::warn!("Popular post {} does not match any post", slug);
        }
        let preview = take_prefix(sorted.clone(), config.preview_size);

        let composer = PageComposer::new(config, self.clock.as_ref());
        let mut written = Vec::with_capacity(sorted.len() + 2);

        let home = composer.home(&preview, sorted.len(), &config.projects, &popular);
        written.push(self.write_page(&home)?);

        let blog = composer.blog_index(&sorted, &popular);
        written.push(self.write_page(&blog)?);

        for post in &sorted {
            written.push(self.write_page(&composer.post(post))?);
        }

        tracing::info!(
            "Generated {} pages ({} posts, {} projects)",
            written.len(),
            sorted.len(),
            config.projects.len()
        );

        Ok(written)
    }

    /// Write a page to `<public>/<route>/index.html`
    fn write_page(&self, page: &Page) -> Result<PathBuf> {
        let html = render_page(&self.folio.config, page);

        // Strip leading slash from route to avoid creating absolute paths
        let clean_route = page.route.trim_matches('/');
        if Path::new(clean_route)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            anyhow::bail!("Route {:?} leaves the public directory", page.route);
        }
        let output_path = self.folio.public_dir.join(clean_route).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, html)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(output_path)
    }

    /// Copy non-markdown source files (images, logos) to the public directory.
    ///
    /// Files inside `_posts` land beside their post's page; other `_`-prefixed
    /// directories are private and skipped.
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.folio.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(ext, Some("md") | Some("markdown")) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let Some(target) = public_asset_path(relative) else {
                continue;
            };
            let dest = self.folio.public_dir.join(target);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} assets", copied);
        Ok(())
    }
}

/// Public location of a source asset, `None` for private files
fn public_asset_path(relative: &Path) -> Option<PathBuf> {
    let mut components = relative.components();
    let first = match components.next()? {
        Component::Normal(s) => s.to_string_lossy().to_string(),
        _ => return None,
    };

    if first == POSTS_DIR {
        Some(components.as_path().to_path_buf())
    } else if first.starts_with('_') {
        None
    } else {
        Some(relative.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use crate::page::FixedClock;
    use chrono::{TimeZone, Utc};

    fn write(base: &Path, path: &str, content: &str) {
        let full = base.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    fn fixed_clock() -> Box<FixedClock> {
        Box::new(FixedClock(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap()))
    }

    #[test]
    fn test_public_asset_path() {
        assert_eq!(
            public_asset_path(Path::new("_posts/hello/cover.png")),
            Some(PathBuf::from("hello/cover.png"))
        );
        assert_eq!(
            public_asset_path(Path::new("images/logo.png")),
            Some(PathBuf::from("images/logo.png"))
        );
        assert_eq!(public_asset_path(Path::new("_drafts/x.png")), None);
    }

    #[test]
    fn test_generate_site() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        write(
            base,
            "_config.yml",
            r#"
title: Peter Jewicz
author: Peter Jewicz
popular_posts:
  - /perlin/
  - /not-written-yet/
projects:
  - title: Nitor Fitness
    description: "<b>Lift</b> tracking"
    link: https://nitorfitness.com
    logo: /images/nitor.png
    tech: [Clojure]
"#,
        );
        for (i, name) in ["threading", "chat", "perlin", "tilemap"].iter().enumerate() {
            write(
                base,
                &format!("source/_posts/{}/index.md", name),
                &format!("---\ntitle: Post {}\ndate: 2021-0{}-01\n---\nBody of {}.", name, i + 1, name),
            );
        }
        write(base, "source/_posts/perlin/noise.png", "png");
        write(base, "source/images/nitor.png", "png");

        let folio = Folio::new(base).unwrap();
        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let written = Generator::with_clock(&folio, fixed_clock())
            .generate(&posts)
            .unwrap();
        assert_eq!(written.len(), 6);

        let public = base.join("public");
        assert!(public.join("perlin/noise.png").exists());
        assert!(public.join("images/nitor.png").exists());
        assert!(public.join("threading/index.html").exists());

        let home = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(home.contains("© 2023, Peter Jewicz"));
        assert!(home.contains("Post tilemap"));
        assert!(home.contains("Post perlin"));
        assert!(home.contains("Post chat"));
        // Oldest post falls outside the three-post preview
        assert!(!home.contains("Post threading</span>"));
        assert!(home.contains("view-all"));
        assert!(home.contains("Clojure |"));

        let blog = fs::read_to_string(public.join("blog/index.html")).unwrap();
        assert!(blog.contains("Post threading"));
        assert!(blog.contains("<h3>Popular Posts</h3>"));
        assert!(!blog.contains("view-all"));
        let tilemap = blog.find("Post tilemap").unwrap();
        let threading = blog.find("Post threading").unwrap();
        assert!(tilemap < threading);
    }

    #[test]
    fn test_escaping_route_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path().join("site")).unwrap();
        let post = crate::content::project(&crate::content::RawPost {
            slug: Some("/../../escaped/".to_string()),
            ..Default::default()
        })
        .unwrap();

        let result = Generator::with_clock(&folio, fixed_clock()).generate(&[post]);
        assert!(result.is_err());
        assert!(!dir.path().join("escaped").exists());
    }

    #[test]
    fn test_generate_empty_site() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let written = Generator::with_clock(&folio, fixed_clock())
            .generate(&[])
            .unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.path().join("public/index.html").exists());
        assert!(dir.path().join("public/blog/index.html").exists());
    }
}

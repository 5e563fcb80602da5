//! End-to-end tests for the generation pipeline.
//!
//! Builds a small site tree in a temporary directory and verifies the
//! full artifact set.

use std::fs;

use chrono::Local;
use sitemapper_core::Config;
use sitemapper_generator::Builder;

fn touch(root: &std::path::Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, "<html></html>").expect("write page");
}

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("CNAME"), "example.com\n").expect("write CNAME");

    touch(dir.path(), "index.html");
    touch(dir.path(), "about.html");
    touch(dir.path(), "blog/index.html");
    touch(dir.path(), "blog/sub/index.html");
    touch(dir.path(), "blog/first-post.html");
    touch(dir.path(), ".git/hooks/sample.html");
    touch(dir.path(), "assets/readme.txt");

    let stats = Builder::new(Config::default(), dir.path())
        .build()
        .expect("build");

    // .git and non-.html files are excluded.
    assert_eq!(stats.pages, 5);
    assert_eq!(stats.chunks.len(), 1);
    assert_eq!(stats.chunks[0].filename, "sitemap_0001.xml");
    assert!(!stats.domain_fallback);

    let chunk = fs::read_to_string(dir.path().join("sitemap_0001.xml")).expect("read chunk");
    let today = Local::now().format("%Y-%m-%d").to_string();

    // index.html files collapse to directory-style URLs.
    assert!(chunk.contains("<loc>https://example.com/</loc>"));
    assert!(chunk.contains("<loc>https://example.com/blog/</loc>"));
    assert!(chunk.contains("<loc>https://example.com/blog/sub/</loc>"));
    assert!(chunk.contains("<loc>https://example.com/about.html</loc>"));
    assert!(chunk.contains("<loc>https://example.com/blog/first-post.html</loc>"));
    assert!(!chunk.contains("hooks/sample.html"));
    assert_eq!(chunk.matches("<url>").count(), 5);
    assert_eq!(chunk.matches(&format!("<lastmod>{today}</lastmod>")).count(), 5);
    assert_eq!(chunk.matches("<priority>0.8</priority>").count(), 5);

    let index = fs::read_to_string(dir.path().join("sitemap.xml")).expect("read index");
    assert_eq!(
        index
            .matches("<loc>https://example.com/sitemap_0001.xml</loc>")
            .count(),
        1
    );

    let robots = fs::read_to_string(dir.path().join("robots.txt")).expect("read robots");
    assert!(robots.contains("User-agent: *"));
    assert!(robots.contains("Allow: /"));
    assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
}

#[test]
fn test_multi_chunk_site() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("CNAME"), "example.com\n").expect("write CNAME");

    for i in 0..5 {
        touch(dir.path(), &format!("p{i}.html"));
    }

    let config = Config {
        sitemap: sitemapper_core::config::SitemapConfig {
            max_urls_per_chunk: 2,
            ..Default::default()
        },
        ..Default::default()
    };

    let stats = Builder::new(config, dir.path()).build().expect("build");

    assert_eq!(
        stats
            .chunks
            .iter()
            .map(|c| c.filename.as_str())
            .collect::<Vec<_>>(),
        vec!["sitemap_0001.xml", "sitemap_0002.xml", "sitemap_0003.xml"]
    );
    assert_eq!(
        stats.chunks.iter().map(|c| c.urls).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );

    // Every discovered URL appears in exactly one chunk.
    let mut all = String::new();
    for chunk in &stats.chunks {
        all.push_str(&fs::read_to_string(dir.path().join(&chunk.filename)).expect("read"));
    }
    for i in 0..5 {
        let needle = format!("<loc>https://example.com/p{i}.html</loc>");
        assert_eq!(all.matches(&needle).count(), 1);
    }
}

#[test]
fn test_rerun_reconciles_chunk_set() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("CNAME"), "example.com\n").expect("write CNAME");

    for i in 0..4 {
        touch(dir.path(), &format!("p{i}.html"));
    }

    let config = Config {
        sitemap: sitemapper_core::config::SitemapConfig {
            max_urls_per_chunk: 2,
            ..Default::default()
        },
        ..Default::default()
    };

    Builder::new(config.clone(), dir.path())
        .build()
        .expect("first build");
    assert!(dir.path().join("sitemap_0002.xml").exists());

    // Shrink the site; the second chunk must be pruned on rerun.
    fs::remove_file(dir.path().join("p2.html")).expect("remove");
    fs::remove_file(dir.path().join("p3.html")).expect("remove");

    let stats = Builder::new(config, dir.path())
        .build()
        .expect("second build");

    assert_eq!(stats.chunks.len(), 1);
    assert_eq!(stats.pruned, 1);
    assert!(!dir.path().join("sitemap_0002.xml").exists());

    let index = fs::read_to_string(dir.path().join("sitemap.xml")).expect("read index");
    assert!(index.contains("sitemap_0001.xml"));
    assert!(!index.contains("sitemap_0002.xml"));
}

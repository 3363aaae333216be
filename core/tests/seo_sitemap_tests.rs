// tests/seo_sitemap_tests.rs
use chrono::{DateTime, TimeZone, Utc};
use storefront_core::seo::join_url;
use storefront_core::{ChangeFreq, CoreError, Markup, SeoMeta, Sitemap, SitemapEntry};

fn fixed_time() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap()
}

#[test]
fn test_page_meta_title_and_keywords() {
  let meta = SeoMeta::page("Storefront", "  About us ", " Who we are. ", &["shop", " Shop", "", "gifts", "GIFTS", "mugs"]);
  assert_eq!(meta.title, "About us | Storefront");
  assert_eq!(meta.description, "Who we are.");
  assert_eq!(meta.keywords, vec!["shop", "gifts", "mugs"]);
  assert_eq!(meta.canonical, None);

  let home = SeoMeta::page("Storefront", "", "", &[]);
  assert_eq!(home.title, "Storefront");
}

#[test]
fn test_head_tags() {
  let meta = SeoMeta::page("Storefront", "Contact", "Say \"hi\".", &["contact", "help"]).with_canonical("https://shop.test/", "/contact");
  let mut out = Markup::new();
  meta.render_head(&mut out);
  let head = out.into_string();

  assert!(head.contains("<title>Contact | Storefront</title>"));
  assert!(head.contains(r#"<meta name="description" content="Say &quot;hi&quot;.">"#));
  assert!(head.contains(r#"<meta name="keywords" content="contact, help">"#));
  assert!(head.contains(r#"<link rel="canonical" href="https://shop.test/contact">"#));
  assert!(head.contains(r#"<meta property="og:title" content="Contact | Storefront">"#));
}

#[test]
fn test_join_url_uses_single_slash() {
  assert_eq!(join_url("https://shop.test", "/about"), "https://shop.test/about");
  assert_eq!(join_url("https://shop.test/", "about"), "https://shop.test/about");
  assert_eq!(join_url("https://shop.test//", "//about"), "https://shop.test/about");
  assert_eq!(join_url("https://shop.test", "/"), "https://shop.test/");
}

#[test]
fn test_priority_must_be_within_unit_interval() {
  for priority in [0.0, 0.5, 1.0] {
    assert!(SitemapEntry::new("/", fixed_time(), ChangeFreq::Weekly, priority).is_ok());
  }
  for priority in [-0.1, 1.01, f32::NAN] {
    match SitemapEntry::new("/odd", fixed_time(), ChangeFreq::Weekly, priority) {
      Err(CoreError::InvalidPriority { path, .. }) => assert_eq!(path, "/odd"),
      other => panic!("Expected InvalidPriority for {}, got {:?}", priority, other),
    }
  }
}

#[test]
fn test_lastmod_is_rfc3339_utc() {
  let entry = SitemapEntry::new("/shop", fixed_time(), ChangeFreq::Daily, 0.9).unwrap();
  assert_eq!(entry.lastmod(), "2024-03-09T14:05:30Z");
  assert!(DateTime::parse_from_rfc3339(&entry.lastmod()).is_ok());
}

#[test]
fn test_sitemap_xml() {
  let mut sitemap = Sitemap::new("https://shop.test/");
  sitemap
    .add(SitemapEntry::new("/", fixed_time(), ChangeFreq::Weekly, 1.0).unwrap())
    .add(SitemapEntry::new("/search?q=a&b", fixed_time(), ChangeFreq::Monthly, 0.3).unwrap());
  assert_eq!(sitemap.entries().len(), 2);

  let xml = sitemap.to_xml();
  assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
  assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
  assert!(xml.contains("<loc>https://shop.test/</loc>"));
  assert!(xml.contains("<loc>https://shop.test/search?q=a&amp;b</loc>"));
  assert_eq!(xml.matches("<lastmod>2024-03-09T14:05:30Z</lastmod>").count(), 2);
  assert!(xml.contains("<changefreq>weekly</changefreq>"));
  assert!(xml.contains("<priority>1.0</priority>"));
  assert!(xml.contains("<priority>0.3</priority>"));
  assert_eq!(xml.matches("<url>").count(), 2);
}

// storefront-site/src/pages/layout.rs

//! Header and footer shared by every page.

use super::views::HasChrome;
use crate::models::ApplicationKind;
use storefront_core::{Markup, Section};

pub const STYLESHEET: &str = "/static/site.css";

const NAV_LINKS: [(&str, &str); 5] = [
  ("/", "Home"),
  ("/about", "About"),
  ("/services", "Services"),
  ("/shop", "Shop"),
  ("/contact", "Contact"),
];

pub struct SiteHeader {
  site_name: String,
}

impl SiteHeader {
  pub fn new(site_name: impl Into<String>) -> Self {
    Self {
      site_name: site_name.into(),
    }
  }
}

impl<V: HasChrome> Section<V> for SiteHeader {
  fn name(&self) -> &str {
    "header"
  }

  fn render(&self, view: &V, out: &mut Markup) -> anyhow::Result<()> {
    let chrome = view.chrome();
    out.open("header", &[("class", "site-header")]);
    out.element("a", &[("class", "brand"), ("href", "/")], &self.site_name);
    out.open("nav", &[("aria-label", "Main")]).open("ul", &[]);
    for (href, label) in NAV_LINKS {
      let current = is_current(&chrome.current_path, href);
      out.open("li", &[]);
      if current {
        out.element("a", &[("href", href), ("aria-current", "page")], label);
      } else {
        out.element("a", &[("href", href)], label);
      }
      out.close("li");
    }
    out.close("ul").close("nav");

    let cart_label = match chrome.cart_count {
      0 => "Cart".to_string(),
      n => format!("Cart ({})", n),
    };
    out.element("a", &[("class", "cart-link"), ("href", "/cart")], &cart_label);
    out.close("header");

    if let Some(notice) = &chrome.notice {
      out.element("p", &[("class", "notice"), ("role", "status")], notice);
    }
    Ok(())
  }
}

pub struct SiteFooter {
  site_name: String,
}

impl SiteFooter {
  pub fn new(site_name: impl Into<String>) -> Self {
    Self {
      site_name: site_name.into(),
    }
  }
}

impl<V: HasChrome> Section<V> for SiteFooter {
  fn name(&self) -> &str {
    "footer"
  }

  fn render(&self, _view: &V, out: &mut Markup) -> anyhow::Result<()> {
    out.open("footer", &[("class", "site-footer")]);
    out.wrap("nav", &[("aria-label", "Partner programs")], |out| {
      out.element("h2", &[], "Work with us");
      out.wrap("ul", &[], |out| {
        for kind in ApplicationKind::ALL {
          let label = format!("{} program", kind.label());
          out.wrap("li", &[], |out| {
            out.element("a", &[("href", kind.path())], &label);
          });
        }
      });
    });
    out.wrap("p", &[("class", "footer-links")], |out| {
      out.element("a", &[("href", "/contact")], "Contact");
      out.text(" · ");
      out.element("a", &[("href", "/sitemap.xml")], "Sitemap");
    });
    out.element("p", &[("class", "copyright")], &format!("© {}", self.site_name));
    out.close("footer");
    Ok(())
  }
}

/// `/shop/linen-tote-bag` highlights "Shop"; `/` only matches itself.
fn is_current(current_path: &str, href: &str) -> bool {
  if href == "/" {
    return current_path == "/";
  }
  current_path == href || current_path.starts_with(&format!("{}/", href))
}

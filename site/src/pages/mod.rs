// storefront-site/src/pages/mod.rs

//! Every page of the site, composed once at startup.

pub mod admin;
pub mod cart;
pub mod forms;
pub mod layout;
pub mod sections;
pub mod shop;
pub mod views;
pub mod widgets;

pub use views::{
  ApplicationView, CartView, CheckoutView, Chrome, ContactView, DashboardStats, DashboardView, HasChrome, OrderView,
  ProductView, ShopView, StaticView,
};

use crate::config::AppConfig;
use crate::models::ApplicationKind;
use chrono::{DateTime, Utc};
use layout::{SiteFooter, SiteHeader, STYLESHEET};
use sections::{CallToAction, FeatureList, Hero, InfoBlock, Testimonials};
use storefront_core::{ChangeFreq, CoreResult, Page, SeoMeta, Sitemap, SitemapEntry};

/// Public routes listed in the sitemap, with their change frequency and priority.
pub const SITEMAP_ROUTES: [(&str, ChangeFreq, f32); 11] = [
  ("/", ChangeFreq::Weekly, 1.0),
  ("/about", ChangeFreq::Monthly, 0.7),
  ("/services", ChangeFreq::Monthly, 0.7),
  ("/shop", ChangeFreq::Daily, 0.9),
  ("/cart", ChangeFreq::Weekly, 0.3),
  ("/checkout", ChangeFreq::Monthly, 0.3),
  ("/contact", ChangeFreq::Yearly, 0.5),
  ("/affiliates", ChangeFreq::Monthly, 0.6),
  ("/vendor-app", ChangeFreq::Monthly, 0.6),
  ("/blogger-app", ChangeFreq::Monthly, 0.6),
  ("/content-creator-app", ChangeFreq::Monthly, 0.6),
];

/// Sitemap of [`SITEMAP_ROUTES`], every entry stamped `now`.
pub fn build_sitemap(base_url: &str, now: DateTime<Utc>) -> CoreResult<Sitemap> {
  let mut sitemap = Sitemap::new(base_url);
  for (path, change_freq, priority) in SITEMAP_ROUTES {
    sitemap.add(SitemapEntry::new(path, now, change_freq, priority)?);
  }
  Ok(sitemap)
}

pub struct SitePages {
  pub home: Page<StaticView>,
  pub about: Page<StaticView>,
  pub services: Page<StaticView>,
  pub contact: Page<ContactView>,
  pub shop: Page<ShopView>,
  pub product: Page<ProductView>,
  pub cart: Page<CartView>,
  pub checkout: Page<CheckoutView>,
  pub order: Page<OrderView>,
  pub affiliates: Page<ApplicationView>,
  pub vendors: Page<ApplicationView>,
  pub bloggers: Page<ApplicationView>,
  pub content_creators: Page<ApplicationView>,
  pub dashboard: Page<DashboardView>,
}

impl SitePages {
  pub fn build(config: &AppConfig) -> Self {
    let pages = PageFactory { config };
    Self {
      home: pages.home(),
      about: pages.about(),
      services: pages.services(),
      contact: pages.contact(),
      shop: pages.shop(),
      product: pages.product(),
      cart: pages.cart(),
      checkout: pages.checkout(),
      order: pages.order(),
      affiliates: pages.application(ApplicationKind::Affiliate),
      vendors: pages.application(ApplicationKind::Vendor),
      bloggers: pages.application(ApplicationKind::Blogger),
      content_creators: pages.application(ApplicationKind::ContentCreator),
      dashboard: pages.dashboard(),
    }
  }

  pub fn application(&self, kind: ApplicationKind) -> &Page<ApplicationView> {
    match kind {
      ApplicationKind::Affiliate => &self.affiliates,
      ApplicationKind::Vendor => &self.vendors,
      ApplicationKind::Blogger => &self.bloggers,
      ApplicationKind::ContentCreator => &self.content_creators,
    }
  }

  /// Metadata for one product's detail page.
  pub fn product_meta(&self, config: &AppConfig, product: &crate::models::Product) -> SeoMeta {
    let description = if product.description.is_empty() {
      format!("{} from {}.", product.name, config.site_name)
    } else {
      product.description.clone()
    };
    SeoMeta::page(
      &config.site_name,
      &product.name,
      &description,
      &[product.category.as_str(), product.name.as_str(), "shop"],
    )
    .with_canonical(&config.app_base_url, &format!("/shop/{}", product.slug))
  }
}

struct PageFactory<'a> {
  config: &'a AppConfig,
}

impl PageFactory<'_> {
  fn meta(&self, path: &str, title: &str, description: &str, keywords: &[&str]) -> SeoMeta {
    SeoMeta::page(&self.config.site_name, title, description, keywords).with_canonical(&self.config.app_base_url, path)
  }

  fn page<V: HasChrome + 'static>(&self, path: &str, meta: SeoMeta) -> Page<V> {
    Page::new(
      path,
      meta,
      SiteHeader::new(&self.config.site_name),
      SiteFooter::new(&self.config.site_name),
    )
    .stylesheet(STYLESHEET)
  }

  fn testimonials(&self) -> Testimonials {
    Testimonials::new(&[
      ("The tote has survived two summers of farmers' markets.", "Priya, Leeds"),
      ("Fast shipping and the nicest packaging I've seen.", "Marco, Turin"),
    ])
  }

  fn home(&self) -> Page<StaticView> {
    let site = &self.config.site_name;
    let meta = self.meta(
      "/",
      "",
      &format!("{} sells well-made everyday goods for home, kitchen and travel.", site),
      &["shop", "home goods", "kitchen", "bags", "gifts"],
    );
    self
      .page("/", meta)
      .section(
        Hero::new(format!("Welcome to {}", site), "Everyday goods, made to last.")
          .action("Shop the collection", "/shop"),
      )
      .section(FeatureList::new(
        "highlights",
        "Why shop with us",
        &[
          ("Made to last", "We stock products we would buy twice."),
          ("Small makers", "Most of our range comes from independent workshops."),
          ("Easy returns", "Changed your mind? Send it back within 30 days."),
        ],
      ))
      .section(self.testimonials())
      .section(CallToAction::new(
        "partner_cta",
        "Make things? Write about them?",
        "Join our affiliate, vendor, blogger or creator programs.",
        "Become a partner",
        "/affiliates",
      ))
      .disable("testimonials")
  }

  fn about(&self) -> Page<StaticView> {
    let site = &self.config.site_name;
    let meta = self.meta(
      "/about",
      "About us",
      &format!("The story behind {} and the people who run it.", site),
      &["about", "our story", "team"],
    );
    self
      .page("/about", meta)
      .section(Hero::new(format!("About {}", site), "A small shop with a long view."))
      .section(InfoBlock::new(
        "story",
        "Our story",
        &[
          "We started as a market stall selling bags we sewed ourselves.",
          "Today we work with a few dozen makers and still test every product at home before it goes on sale.",
        ],
      ))
      .section(InfoBlock::new(
        "values",
        "What we care about",
        &[
          "Honest materials, fair prices and products that can be repaired.",
          "Plastic-free packaging on every order.",
        ],
      ))
      .section(self.testimonials())
      .disable("testimonials")
  }

  fn services(&self) -> Page<StaticView> {
    let meta = self.meta(
      "/services",
      "Services",
      "Gift wrapping, corporate orders, repairs and personal shopping.",
      &["services", "gift wrapping", "corporate gifts", "repairs"],
    );
    self
      .page("/services", meta)
      .section(Hero::new("Services", "More than a shop."))
      .section(FeatureList::new(
        "service_list",
        "What we offer",
        &[
          ("Gift wrapping", "Recycled paper and a handwritten note on request."),
          ("Corporate orders", "Bulk pricing and custom engraving for teams."),
          ("Repairs", "We repair what we sell, for as long as we can source parts."),
          ("Personal shopping", "Tell us who it's for and we'll put a box together."),
        ],
      ))
      .section(self.testimonials())
      .section(CallToAction::new(
        "contact_cta",
        "Have something in mind?",
        "Tell us about it and we'll get back to you within two business days.",
        "Get in touch",
        "/contact",
      ))
      .disable("testimonials")
  }

  fn contact(&self) -> Page<ContactView> {
    let meta = self.meta(
      "/contact",
      "Contact",
      "Questions about an order or a product? Send us a message.",
      &["contact", "support", "help"],
    );
    self
      .page("/contact", meta)
      .section(InfoBlock::new(
        "contact_intro",
        "Contact us",
        &["We answer every message within two business days."],
      ))
      .section(forms::ContactFormSection)
  }

  fn shop(&self) -> Page<ShopView> {
    let meta = self.meta(
      "/shop",
      "Shop",
      "Browse bags, kitchenware, apparel and home goods.",
      &["shop", "products", "bags", "kitchen", "apparel", "home"],
    );
    self
      .page("/shop", meta)
      .section(Hero::new("Shop", "Everything in stock, ready to ship."))
      .section(shop::CategoryFilter)
      .section(shop::ProductGrid::new(&self.config.currency))
  }

  /// Metadata is replaced per product at render time.
  fn product(&self) -> Page<ProductView> {
    let meta = self.meta("/shop", "Product", "", &[]);
    self
      .page("/shop/{slug}", meta)
      .section(shop::ProductDetail::new(&self.config.currency))
      .section(shop::ReviewList)
      .section(shop::ReviewForm)
  }

  fn cart(&self) -> Page<CartView> {
    let meta = self.meta("/cart", "Your cart", "Review the items in your cart.", &["cart"]);
    self
      .page("/cart", meta)
      .section(cart::CartTable::new(&self.config.currency))
      .section(cart::TotalsBox::new(&self.config.currency))
  }

  fn checkout(&self) -> Page<CheckoutView> {
    let meta = self.meta("/checkout", "Checkout", "Enter your address and payment method.", &["checkout"]);
    self
      .page("/checkout", meta)
      .section(cart::CheckoutFormSection)
      .optional_section(cart::TotalsBox::new(&self.config.currency), |view: &CheckoutView| {
        view.cart.is_empty()
      })
  }

  fn order(&self) -> Page<OrderView> {
    let meta = self.meta("/orders", "Order confirmed", "Your order has been placed.", &[]);
    self
      .page("/orders/{id}", meta)
      .section(cart::OrderSummary::new(&self.config.currency))
      .section(CallToAction::new(
        "keep_shopping",
        "Need anything else?",
        "New products arrive every week.",
        "Back to the shop",
        "/shop",
      ))
  }

  fn application(&self, kind: ApplicationKind) -> Page<ApplicationView> {
    let site = &self.config.site_name;
    let (title, intro): (&str, &[&str]) = match kind {
      ApplicationKind::Affiliate => (
        "Affiliate program",
        &[
          "Earn a commission on every order you refer.",
          "Approved affiliates get a personal link and monthly payouts.",
        ],
      ),
      ApplicationKind::Vendor => (
        "Sell with us",
        &[
          "We are always looking for makers whose work fits our range.",
          "Tell us about your products, your workshop and your capacity.",
        ],
      ),
      ApplicationKind::Blogger => (
        "Blogger program",
        &["Write about our products and receive samples ahead of launch."],
      ),
      ApplicationKind::ContentCreator => (
        "Content creator program",
        &["Create videos, photos or posts featuring our range and get paid for your work."],
      ),
    };
    let description = format!("Apply to the {} {}.", site, title.to_lowercase());
    let keywords = [kind.label(), "partner program", "apply"];
    let meta = self.meta(kind.path(), title, &description, &keywords);
    self
      .page(kind.path(), meta)
      .section(Hero::new(title, format!("Partner with {}.", site)))
      .section(InfoBlock::new("program_details", "How it works", intro))
      .section(forms::ApplicationFormSection)
  }

  fn dashboard(&self) -> Page<DashboardView> {
    let meta = self.meta("/admin/dashboard", "Dashboard", "Store overview.", &[]);
    self.page("/admin/dashboard", meta).section(admin::DashboardStatsSection::new(&self.config.currency))
  }
}

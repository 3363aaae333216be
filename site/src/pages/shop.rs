// storefront-site/src/pages/shop.rs

//! Shop listing and product detail sections.

use super::views::{ProductView, ShopView};
use super::widgets::{self, InputKind};
use crate::models::format_money;
use crate::models::review::{MAX_RATING, MIN_RATING};
use storefront_core::{Markup, Section};

/// Prefix of the add-to-cart form fields carrying option choices, e.g. `option.Size`.
pub const OPTION_FIELD_PREFIX: &str = "option.";

pub struct CategoryFilter;

impl Section<ShopView> for CategoryFilter {
  fn name(&self) -> &str {
    "category_filter"
  }

  fn render(&self, view: &ShopView, out: &mut Markup) -> anyhow::Result<()> {
    out.open("nav", &[("class", "category-filter"), ("aria-label", "Categories")]);
    out.open("ul", &[]);
    let all_class = if view.active_category.is_none() { "active" } else { "" };
    out.wrap("li", &[("class", all_class)], |out| {
      out.element("a", &[("href", "/shop")], "All");
    });
    for category in &view.categories {
      let active = view
        .active_category
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case(category));
      let href = category_href(category)?;
      out.wrap("li", &[("class", if active { "active" } else { "" })], |out| {
        out.element("a", &[("href", &href)], &capitalize(category));
      });
    }
    out.close("ul").close("nav");
    Ok(())
  }
}

/// `/shop?category=...` with the category percent-encoded.
pub fn category_href(category: &str) -> Result<String, serde_urlencoded::ser::Error> {
  let query = serde_urlencoded::to_string([("category", category)])?;
  Ok(format!("/shop?{}", query))
}

pub struct ProductGrid {
  currency: String,
}

impl ProductGrid {
  pub fn new(currency: impl Into<String>) -> Self {
    Self {
      currency: currency.into(),
    }
  }
}

impl Section<ShopView> for ProductGrid {
  fn name(&self) -> &str {
    "product_grid"
  }

  fn render(&self, view: &ShopView, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "product-grid")]);
    if view.products.is_empty() {
      out.element("p", &[("class", "empty")], "No products in this category yet.");
    }
    for product in &view.products {
      let href = format!("/shop/{}", product.slug);
      out.open("article", &[("class", "product-card")]);
      if let Some(src) = product.primary_image() {
        out.void("img", &[("src", src), ("alt", &product.name), ("loading", "lazy")]);
      }
      out.wrap("h3", &[], |out| {
        out.element("a", &[("href", &href)], &product.name);
      });
      out.element("p", &[("class", "price")], &format_money(product.price_cents, &self.currency));
      if product.review_count > 0 {
        let rating = format!("{} ({})", widgets::stars(product.rating), product.review_count);
        out.element("p", &[("class", "rating")], &rating);
      }
      if !product.in_stock() {
        out.element("p", &[("class", "stock out")], "Sold out");
      }
      out.close("article");
    }
    out.close("section");
    Ok(())
  }
}

/// Description, price and the add-to-cart form.
pub struct ProductDetail {
  currency: String,
}

impl ProductDetail {
  pub fn new(currency: impl Into<String>) -> Self {
    Self {
      currency: currency.into(),
    }
  }
}

impl Section<ProductView> for ProductDetail {
  fn name(&self) -> &str {
    "product_detail"
  }

  fn render(&self, view: &ProductView, out: &mut Markup) -> anyhow::Result<()> {
    let product = &view.product;
    out.open("section", &[("class", "product-detail")]);
    out.open("div", &[("class", "gallery")]);
    for src in &product.images {
      out.void("img", &[("src", src), ("alt", &product.name)]);
    }
    out.close("div");

    out.element("h1", &[], &product.name);
    out.element("p", &[("class", "price")], &format_money(product.price_cents, &self.currency));
    if product.review_count > 0 {
      let rating = format!(
        "{} {:.1} from {} review{}",
        widgets::stars(product.rating),
        product.rating,
        product.review_count,
        if product.review_count == 1 { "" } else { "s" }
      );
      out.element("p", &[("class", "rating")], &rating);
    }
    out.element("p", &[("class", "description")], &product.description);

    if !product.in_stock() {
      out.element("p", &[("class", "stock out")], "Sold out");
      out.close("section");
      return Ok(());
    }

    let stock = product.stock.to_string();
    let product_id = product.id.to_string();
    widgets::error_summary(out, &view.cart_errors);
    out.open("form", &[("method", "post"), ("action", "/cart/add"), ("class", "add-to-cart")]);
    widgets::hidden(out, "product_id", &product_id);
    for option in &product.options {
      let field = format!("{}{}", OPTION_FIELD_PREFIX, option.name);
      let choices: Vec<(&str, &str)> = option.values.iter().map(|v| (v.as_str(), v.as_str())).collect();
      widgets::select(
        out,
        &field,
        &option.name,
        &choices,
        None,
        view.cart_errors.message_for(&format!("options.{}", option.name)),
      );
    }
    out.open("div", &[("class", "field")]);
    out.element("label", &[("for", "quantity")], "Quantity");
    out.void(
      "input",
      &[
        ("type", "number"),
        ("id", "quantity"),
        ("name", "quantity"),
        ("value", "1"),
        ("min", "1"),
        ("max", &stock),
      ],
    );
    out.close("div");
    widgets::submit(out, "Add to cart");
    out.close("form");
    out.close("section");
    Ok(())
  }
}

pub struct ReviewList;

impl Section<ProductView> for ReviewList {
  fn name(&self) -> &str {
    "reviews"
  }

  fn render(&self, view: &ProductView, out: &mut Markup) -> anyhow::Result<()> {
    out.open("section", &[("class", "reviews"), ("id", "reviews")]);
    out.element("h2", &[], "Reviews");
    if view.reviews.is_empty() {
      out.element("p", &[("class", "empty")], "No reviews yet. Be the first to share your thoughts.");
    }
    for review in &view.reviews {
      let action = format!("/reviews/{}/helpful", review.id);
      out.open("article", &[("class", "review")]);
      out.element("p", &[("class", "rating")], &widgets::stars(f32::from(review.rating)));
      if !review.title.is_empty() {
        out.element("h3", &[], &review.title);
      }
      out.element("p", &[], &review.comment);
      out.open("p", &[("class", "byline")]).text(&review.author);
      if review.verified {
        out.element("span", &[("class", "verified")], " · Verified buyer");
      }
      out.text(&format!(" · {}", review.created_at.format("%B %-d, %Y")));
      out.close("p");
      out.open("form", &[("method", "post"), ("action", &action), ("class", "helpful")]);
      let label = format!("Helpful ({})", review.helpful_count);
      widgets::submit(out, &label);
      out.close("form");
      out.close("article");
    }
    out.close("section");
    Ok(())
  }
}

pub struct ReviewForm;

impl Section<ProductView> for ReviewForm {
  fn name(&self) -> &str {
    "review_form"
  }

  fn render(&self, view: &ProductView, out: &mut Markup) -> anyhow::Result<()> {
    let form = &view.review_form;
    let errors = &view.review_errors;
    let action = format!("/shop/{}/reviews", view.product.slug);
    let ratings: Vec<String> = (MIN_RATING..=MAX_RATING).rev().map(|r| r.to_string()).collect();
    let rating_choices: Vec<(&str, &str)> = ratings.iter().map(|r| (r.as_str(), r.as_str())).collect();
    let current_rating = form.rating.to_string();

    out.open("section", &[("class", "review-form"), ("id", "write-review")]);
    out.element("h2", &[], "Write a review");
    widgets::error_summary(out, errors);
    out.open("form", &[("method", "post"), ("action", &action)]);
    widgets::text_field(out, "author", "Your name", &form.author, InputKind::Text, true, errors.message_for("author"));
    widgets::text_field(out, "email", "Email (not published)", &form.email, InputKind::Email, true, errors.message_for("email"));
    widgets::select(out, "rating", "Rating", &rating_choices, Some(current_rating.as_str()), errors.message_for("rating"));
    widgets::text_field(out, "title", "Title", &form.title, InputKind::Text, false, errors.message_for("title"));
    widgets::text_area(out, "comment", "Review", &form.comment, 5, true, errors.message_for("comment"));
    widgets::submit(out, "Submit review");
    out.close("form");
    out.close("section");
    Ok(())
  }
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

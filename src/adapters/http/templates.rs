use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tera::Tera;

use crate::domain::invoice::format::format_currency_code;

/// Template engine wrapper for rendering HTML templates
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  /// Create a new template engine instance
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec!["html.tera", ".html"]);
    tera.register_filter("money", money_filter);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }
}

/// `{{ amount | money(code=...) }}` renders a currency string.
///
/// Amounts arrive as strings because decimals serialize that way. An unknown
/// code degrades to `CODE 12.34` instead of failing the whole page.
fn money_filter(
  value: &tera::Value,
  args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
  let amount = match value {
    tera::Value::String(s) => Decimal::from_str(s)
      .map_err(|_| tera::Error::msg(format!("money filter got a non-numeric string: {}", s)))?,
    tera::Value::Number(n) => Decimal::from_str(&n.to_string())
      .map_err(|_| tera::Error::msg(format!("money filter got an invalid number: {}", n)))?,
    _ => {
      return Err(tera::Error::msg(
        "money filter expects a numeric value or string",
      ));
    }
  };

  let code = args
    .get("code")
    .and_then(|v| v.as_str())
    .unwrap_or("USD")
    .to_string();

  let rendered = match format_currency_code(amount, &code) {
    Ok(text) => text,
    Err(_) => format!("{} {:.2}", code, amount),
  };

  Ok(tera::Value::String(rendered))
}

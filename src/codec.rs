//! Hint text codec: renders findings into template text and reads them back.
//!
//! Hints only ever exist as display strings. Everything a concept needs at
//! evaluation time (which of its forms a hint is, the scope, the number) is
//! recovered from the text through the functions here.

use crate::templates::DigitTemplates;
use crate::util::fill_template;

/// Placeholder for the single numeric parameter of a template.
pub const SLOT: &str = "{n}";

/// Coarse scope read from the scope vocabulary of a per-digit hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeClass {
  None,
  All,
  Some,
}

/// Scope of a per-digit finding: how many digits satisfy the property.
///
/// `Count(1)` renders with the singular wording, larger counts with the plural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitScope {
  None,
  Count(usize),
  All,
}

impl DigitScope {
  pub fn of(count: usize, digit_count: usize) -> Self {
    if count == 0 {
      DigitScope::None
    } else if count == digit_count {
      DigitScope::All
    } else {
      DigitScope::Count(count)
    }
  }
}

/// Fill the template's slot with `value`. Templates without a slot come back verbatim.
pub fn render(template: &str, value: Option<i64>) -> String {
  match value {
    Some(v) => fill_template(template, &[("n", &v.to_string())]),
    None => template.to_string(),
  }
}

pub fn render_digits(templates: &DigitTemplates, scope: DigitScope) -> String {
  match scope {
    DigitScope::None => render(&templates.none, None),
    DigitScope::All => render(&templates.all, None),
    DigitScope::Count(1) => render(&templates.one, Some(1)),
    DigitScope::Count(n) => render(&templates.some, Some(n as i64)),
  }
}

/// First integer embedded in `text`, with a leading minus sign when one is attached.
pub fn extract_value(text: &str) -> Option<i64> {
  let bytes = text.as_bytes();
  let start = bytes.iter().position(|b| b.is_ascii_digit())?;
  let end = bytes[start..]
    .iter()
    .position(|b| !b.is_ascii_digit())
    .map_or(bytes.len(), |off| start + off);
  let signed_start = if start > 0 && bytes[start - 1] == b'-' { start - 1 } else { start };
  text[signed_start..end].parse().ok()
}

/// Literal match on the scope vocabulary; anything else is numeric.
pub fn classify_scope(text: &str) -> ScopeClass {
  if text.contains("None") {
    ScopeClass::None
  } else if text.contains("All") {
    ScopeClass::All
  } else {
    ScopeClass::Some
  }
}

/// Whether `text` is an instance of `template`.
pub fn fits(template: &str, text: &str) -> bool {
  match template.split_once(SLOT) {
    None => text == template,
    Some((prefix, suffix)) => text
      .strip_prefix(prefix)
      .and_then(|rest| rest.strip_suffix(suffix))
      .is_some_and(|slot| slot.parse::<i64>().is_ok()),
  }
}

/// The value carried by `text` if it fits `template`.
pub fn value_if_fits(template: &str, text: &str) -> Option<i64> {
  if fits(template, text) { extract_value(text) } else { None }
}

/// Parse a per-digit hint written with `templates`. `None` when the text is not one of them.
pub fn digit_scope(templates: &DigitTemplates, text: &str) -> Option<DigitScope> {
  if !templates.iter().any(|tpl| fits(tpl, text)) {
    return None;
  }
  match classify_scope(text) {
    ScopeClass::None => Some(DigitScope::None),
    ScopeClass::All => Some(DigitScope::All),
    ScopeClass::Some => match extract_value(text) {
      Some(n) if n >= 1 => Some(DigitScope::Count(n as usize)),
      _ => None,
    },
  }
}

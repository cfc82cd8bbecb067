//! `{{ name }}` placeholder substitution

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::warn;

static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();

fn placeholder() -> Option<&'static Regex> {
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").ok())
        .as_ref()
}

/// Replace every `{{ name }}` with its value. Unknown names render empty.
pub fn render(template: &str, values: &BTreeMap<String, String>) -> String {
    let Some(re) = placeholder() else {
        return template.to_string();
    };
    re.replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
        Some(value) => value.clone(),
        None => {
            warn!(placeholder = &caps[1], "unknown template placeholder");
            String::new()
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("title".to_string(), "Octet".to_string()),
            ("count".to_string(), "8".to_string()),
        ])
    }

    #[test]
    fn test_substitution() {
        assert_eq!(render("<h1>{{ title }}</h1>{{count}}", &values()), "<h1>Octet</h1>8");
    }

    #[test]
    fn test_unknown_placeholder_is_empty() {
        assert_eq!(render("a{{ missing }}b", &values()), "ab");
    }

    #[test]
    fn test_other_braces_untouched() {
        let js = "const x = {a: 1}; {{ not valid }}";
        assert_eq!(render(js, &values()), js);
    }
}

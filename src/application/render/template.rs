// src/application/render/template.rs
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{[A-Z_]+\}\}").expect("placeholder pattern"));

/// Replace every occurrence of each placeholder with its value, in the
/// order given. Placeholders absent from `template` are ignored.
pub fn fill_template<'a, I, V>(template: &str, placeholders: I) -> String
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: AsRef<str>,
{
    placeholders
        .into_iter()
        .fold(template.to_string(), |page, (placeholder, value)| {
            page.replace(placeholder, value.as_ref())
        })
}

/// Placeholders still present after filling, in order of first appearance.
pub fn unfilled_placeholders(page: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for m in PLACEHOLDER.find_iter(page) {
        if !found.contains(&m.as_str()) {
            found.push(m.as_str());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_all_occurrences() {
        let page = fill_template(
            "<title>{{ARTICLE_TITLE}}</title><h1>{{ARTICLE_TITLE}}</h1>",
            [("{{ARTICLE_TITLE}}", "遺囑")],
        );
        assert_eq!(page, "<title>遺囑</title><h1>遺囑</h1>");
    }

    #[test]
    fn unknown_and_missing_placeholders_are_left_alone() {
        let page = fill_template("{{A}} {{B}}", [("{{A}}", "x"), ("{{C}}", "y")]);
        assert_eq!(page, "x {{B}}");
        assert_eq!(unfilled_placeholders(&page), vec!["{{B}}"]);
    }

    #[test]
    fn values_are_not_rescanned_for_earlier_placeholders() {
        let page = fill_template("{{A}}{{B}}", [("{{A}}", "a"), ("{{B}}", "{{A}}")]);
        assert_eq!(page, "a{{A}}");
    }
}

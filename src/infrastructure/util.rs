use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("slug pattern"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("separator pattern"));

/// Drops punctuation, keeps letters of any script, joins words with `-`.
/// Case is preserved.
#[derive(Default, Clone)]
pub struct RegexSlugGenerator;

impl SlugGenerator for RegexSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let cleaned = DISALLOWED.replace_all(input, "");
        SEPARATORS.replace_all(cleaned.trim(), "-").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_cjk_and_collapses_separators() {
        let slugger = RegexSlugGenerator;
        assert_eq!(slugger.slugify("遺產稅申報期限與罰則"), "遺產稅申報期限與罰則");
        assert_eq!(slugger.slugify("  Wills -- and  Trusts! "), "Wills-and-Trusts");
        assert_eq!(slugger.slugify("遺囑？效力 爭議"), "遺囑效力-爭議");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn slugging_a_slug_changes_nothing() {
        let slugger = RegexSlugGenerator;
        for title in ["遺產稅 申報！期限", "  Wills -- and  Trusts! ", "a_b - c", "離婚&監護權"] {
            let once = slugger.slugify(title);
            assert_eq!(slugger.slugify(&once), once, "{title}");
        }
    }
}

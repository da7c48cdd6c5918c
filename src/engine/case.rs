//! Capitalization classes.
//!
//! Every original word falls into one of three classes, checked in this
//! order:
//!
//! 1. [`CaseClass::AllCaps`]: at least one cased character, and every cased
//!    character is uppercase ("WORLD", "A", "R2D2").
//! 2. [`CaseClass::InitialCaps`]: the first character is uppercase ("Hello",
//!    "AbC").
//! 3. [`CaseClass::Other`]: everything else, including words with no cased
//!    characters at all ("123", "_").
//!
//! The class is then re-applied to the replacement, which may differ from
//! the original in length and script. Only the class survives; the internal
//! case pattern of the original ("AbC") does not.

use crate::TokenCaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseClass {
    AllCaps,
    InitialCaps,
    Other,
}

impl CaseClass {
    /// Classify `token`.
    pub fn of(token: &str) -> Result<CaseClass, TokenCaseError> {
        let first = token.chars().next().ok_or(TokenCaseError::EmptyToken)?;

        let mut any_cased = false;
        let mut all_upper = true;
        for c in token.chars().filter(|&c| is_cased(c)) {
            any_cased = true;
            if !c.is_uppercase() {
                all_upper = false;
                break;
            }
        }

        if any_cased && all_upper {
            Ok(CaseClass::AllCaps)
        } else if first.is_uppercase() {
            Ok(CaseClass::InitialCaps)
        } else {
            Ok(CaseClass::Other)
        }
    }

    /// Re-case `replacement` to this class.
    pub fn apply(self, replacement: &str) -> String {
        match self {
            CaseClass::AllCaps => replacement.to_uppercase(),
            CaseClass::InitialCaps => capitalize(replacement),
            CaseClass::Other => replacement.to_lowercase(),
        }
    }
}

/// Classify `original` and re-case `replacement` to match.
pub fn apply_case(original: &str, replacement: &str) -> Result<String, TokenCaseError> {
    CaseClass::of(original).map(|class| class.apply(replacement))
}

/// First character titlecased, the remainder forced to lowercase.
///
/// Titlecase rather than uppercase keeps multi-letter mappings from leaking
/// capitals into the remainder: `ß` -> `Ss`, `ﬀ` -> `Ff`, `ǆ` -> `ǅ`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            push_titlecase(&mut out, first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

fn push_titlecase(out: &mut String, c: char) {
    let mapped = unicode_case_mapping::to_titlecase(c);
    if mapped[0] == 0 {
        // No titlecase mapping: the character is its own titlecase.
        out.push(c);
        return;
    }
    out.extend(mapped.iter().take_while(|&&u| u != 0).filter_map(|&u| char::from_u32(u)));
}

/// Uppercase, lowercase or titlecase letter.
///
/// Titlecase letters (`ǅ`) are neither `is_uppercase` nor `is_lowercase` but
/// still change under both mappings.
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || (c.to_lowercase().ne([c]) && c.to_uppercase().ne([c]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_common_shapes() {
        let cases = [
            ("WORLD", CaseClass::AllCaps),
            ("A", CaseClass::AllCaps),
            ("R2-D2", CaseClass::AllCaps),
            ("DON'T", CaseClass::AllCaps),
            ("Hello", CaseClass::InitialCaps),
            ("AbC", CaseClass::InitialCaps),
            ("NurdRage", CaseClass::InitialCaps),
            ("hello", CaseClass::Other),
            ("iPhone", CaseClass::Other),
            ("123", CaseClass::Other),
            ("_", CaseClass::Other),
            ("-'-", CaseClass::Other),
        ];
        for (token, expected) in cases {
            assert_eq!(CaseClass::of(token), Ok(expected), "token {token:?}");
        }
    }

    #[test]
    fn digits_before_capitals_still_count_as_all_caps() {
        // No cased char is lowercase, and at least one is cased.
        assert_eq!(CaseClass::of("404ERROR"), Ok(CaseClass::AllCaps));
        // First char is a digit, so rule 2 never fires.
        assert_eq!(CaseClass::of("4Ever"), Ok(CaseClass::Other));
    }

    #[test]
    fn non_latin_scripts() {
        assert_eq!(CaseClass::of("ПРИВЕТ"), Ok(CaseClass::AllCaps));
        assert_eq!(CaseClass::of("Привет"), Ok(CaseClass::InitialCaps));
        assert_eq!(CaseClass::of("日本"), Ok(CaseClass::Other));
        assert_eq!(CaseClass::of("Ωmega"), Ok(CaseClass::InitialCaps));
    }

    #[test]
    fn titlecase_letter_is_cased_but_not_upper() {
        assert!(is_cased('ǅ'));
        assert_eq!(CaseClass::of("ǅ"), Ok(CaseClass::Other));
        assert_eq!(CaseClass::of("ǄA"), Ok(CaseClass::AllCaps));
    }

    #[test]
    fn empty_token_is_an_error() {
        assert_eq!(CaseClass::of(""), Err(TokenCaseError::EmptyToken));
        assert_eq!(apply_case("", "beta"), Err(TokenCaseError::EmptyToken));
    }

    #[test]
    fn apply_recases_replacement() {
        assert_eq!(CaseClass::AllCaps.apply("beta"), "BETA");
        assert_eq!(CaseClass::InitialCaps.apply("hACKUS"), "Hackus");
        assert_eq!(CaseClass::InitialCaps.apply("scienca-lorem"), "Scienca-lorem");
        assert_eq!(CaseClass::Other.apply("GAMMA"), "gamma");
        assert_eq!(CaseClass::Other.apply("NurdRage"), "nurdrage");
    }

    #[test]
    fn apply_handles_length_changing_maps() {
        assert_eq!(CaseClass::AllCaps.apply("straße"), "STRASSE");
        assert_eq!(CaseClass::InitialCaps.apply("ßig"), "Ssig");
        assert_eq!(CaseClass::InitialCaps.apply("404"), "404");
        assert_eq!(CaseClass::InitialCaps.apply(""), "");
    }

    #[test]
    fn initial_caps_titlecases_expanding_first_letters() {
        assert_eq!(CaseClass::InitialCaps.apply("ﬀoo"), "Ffoo");
        assert_eq!(CaseClass::InitialCaps.apply("ßx"), "Ssx");
        assert_eq!(CaseClass::InitialCaps.apply("ǆa"), "ǅa");
        assert_eq!(CaseClass::InitialCaps.apply("ǅA"), "ǅa");
        assert_eq!(CaseClass::InitialCaps.apply("ωMEGA"), "Ωmega");
    }

    #[test]
    fn apply_case_follows_original() {
        assert_eq!(apply_case("Hello", "alpha").as_deref(), Ok("Alpha"));
        assert_eq!(apply_case("WORLD", "beta").as_deref(), Ok("BETA"));
        assert_eq!(apply_case("123", "GAMMA").as_deref(), Ok("gamma"));
    }
}

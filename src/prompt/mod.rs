//! Prompt assembly for logo generation.
//!
//! The order of the parts is fixed: the sentence naming the company, then
//! the preset style phrase, then the user's own addition.

pub mod styles;

pub use styles::StyleCatalog;

use crate::error::{ArtError, Result};

pub const REFINE_SEPARATOR: &str = "Дополнительно:";

pub fn base_sentence(company_name: &str) -> String {
    format!("Создай логотип для компании \"{}\".", company_name)
}

/// Builds the generation prompt. Unknown style keys are ignored; blank
/// custom text adds nothing.
pub fn build_prompt(
    catalog: &StyleCatalog,
    company_name: &str,
    style: Option<&str>,
    custom_text: Option<&str>,
) -> Result<String> {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return Err(ArtError::Validation("company name is required".into()));
    }

    let mut prompt = base_sentence(company_name);

    if let Some(phrase) = style.and_then(|key| catalog.get(key)) {
        prompt.push_str(&format!(" {}.", phrase));
    }

    if let Some(custom) = custom_text.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(" {}.", custom));
    }

    Ok(prompt)
}

/// Appends a refinement to a previously generated prompt.
pub fn refine_prompt(original_prompt: &str, refinement: &str) -> Result<String> {
    let original_prompt = original_prompt.trim();
    let refinement = refinement.trim();
    if original_prompt.is_empty() || refinement.is_empty() {
        return Err(ArtError::Validation(
            "both the original prompt and a refinement are required".into(),
        ));
    }

    Ok(format!("{} {} {}", original_prompt, REFINE_SEPARATOR, refinement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_base_sentence_only() {
        let catalog = StyleCatalog::builtin();
        for name in ["Acme", "Рога и копыта", "  Padded  "] {
            let prompt = build_prompt(&catalog, name, None, None).unwrap();
            assert_eq!(prompt, base_sentence(name.trim()));
        }
        assert_eq!(
            build_prompt(&catalog, "Acme", None, None).unwrap(),
            "Создай логотип для компании \"Acme\"."
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let catalog = StyleCatalog::builtin();
        for name in ["", "   ", "\t\n"] {
            let err = build_prompt(&catalog, name, Some("tech"), Some("x")).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_style_after_base() {
        let catalog = StyleCatalog::builtin();
        for (key, phrase) in catalog.iter() {
            let prompt = build_prompt(&catalog, "Acme", Some(key), None).unwrap();
            assert_eq!(prompt, format!("{} {}.", base_sentence("Acme"), phrase));
            assert!(prompt.find(phrase).unwrap() > prompt.find("Acme").unwrap());
        }
    }

    #[test]
    fn test_unknown_style_ignored() {
        let catalog = StyleCatalog::builtin();
        let prompt = build_prompt(&catalog, "Acme", Some("baroque"), None).unwrap();
        assert_eq!(prompt, base_sentence("Acme"));
        let prompt = build_prompt(&catalog, "Acme", Some(""), None).unwrap();
        assert_eq!(prompt, base_sentence("Acme"));
    }

    #[test]
    fn test_custom_text_last() {
        let catalog = StyleCatalog::builtin();
        let phrase = catalog.get("vintage").unwrap();
        let prompt =
            build_prompt(&catalog, "Acme", Some("vintage"), Some("  с совой  ")).unwrap();
        assert_eq!(
            prompt,
            format!("{} {}. с совой.", base_sentence("Acme"), phrase)
        );
        assert!(prompt.find("с совой").unwrap() > prompt.find(phrase).unwrap());

        let prompt = build_prompt(&catalog, "Acme", None, Some("с совой")).unwrap();
        assert_eq!(prompt, format!("{} с совой.", base_sentence("Acme")));
    }

    #[test]
    fn test_blank_custom_text_ignored() {
        let catalog = StyleCatalog::builtin();
        let prompt = build_prompt(&catalog, "Acme", None, Some("   ")).unwrap();
        assert_eq!(prompt, base_sentence("Acme"));
    }

    #[test]
    fn test_refine_prompt() {
        assert_eq!(
            refine_prompt("Logo for X", "make it blue").unwrap(),
            "Logo for X Дополнительно: make it blue"
        );
        assert_eq!(
            refine_prompt("  Logo for X ", " make it blue ").unwrap(),
            "Logo for X Дополнительно: make it blue"
        );
        assert_eq!(
            refine_prompt("", "make it blue").unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            refine_prompt("Logo for X", "  ").unwrap_err().kind(),
            ErrorKind::Validation
        );
    }
}

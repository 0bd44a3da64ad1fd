// File: src/core/translations.rs
use crate::core::collation::Collator;
use crate::core::types::Translation;
use serde::Serialize;

/// All translations into one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationGroup {
    pub language: String,
    pub translations: Vec<Translation>,
}

/// Groups translations by language, languages in alphabetical order.
/// Within a group, translations keep their original relative order.
pub fn group_translations(
    mut translations: Vec<Translation>,
    collator: &dyn Collator,
) -> Vec<TranslationGroup> {
    if translations.is_empty() {
        return vec![];
    }

    translations.sort_by(|a, b| collator.compare(&a.language, &b.language));

    let mut groups: Vec<TranslationGroup> = Vec::new();
    for translation in translations {
        if let Some(group) = groups.last_mut().filter(|g| g.language == translation.language) {
            group.translations.push(translation);
            continue;
        }
        groups.push(TranslationGroup {
            language: translation.language.clone(),
            translations: vec![translation],
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collation::EsperantoCollator;

    fn t(word: &str, language: &str, text: &str) -> Translation {
        Translation {
            definition: 0,
            language: language.to_string(),
            translation: text.to_string(),
            word: word.to_string(),
        }
    }

    #[test]
    fn test_empty() {
        assert!(group_translations(vec![], &EsperantoCollator).is_empty());
    }

    #[test]
    fn test_groups_ordered_by_language() {
        let groups = group_translations(
            vec![
                t("hundo", "English", "dog"),
                t("hundo", "French", "chien"),
                t("kato", "English", "cat"),
            ],
            &EsperantoCollator,
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].language, "English");
        assert_eq!(groups[1].language, "French");

        let english: Vec<_> = groups[0].translations.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(english, vec!["hundo", "kato"]);
    }

    #[test]
    fn test_interleaved_languages_merge() {
        let groups = group_translations(
            vec![
                t("a", "Ĉeĥa", "1"),
                t("b", "Angla", "2"),
                t("c", "Ĉeĥa", "3"),
                t("d", "Angla", "4"),
            ],
            &EsperantoCollator,
        );
        let languages: Vec<_> = groups.iter().map(|g| g.language.as_str()).collect();
        assert_eq!(languages, vec!["Angla", "Ĉeĥa"]);
        let czech: Vec<_> = groups[1].translations.iter().map(|t| t.translation.as_str()).collect();
        assert_eq!(czech, vec!["1", "3"]);
    }
}

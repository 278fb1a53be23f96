//! Turns a decoded response into launcher result items

use regex::Regex;
use std::sync::OnceLock;

use crate::core::models::{
    RelatedGroup, ResultItem, SynonymGroup, TranslationEntry, TranslationResponse, UsageGroup,
};

pub const GROUP_ICON: &str = "font-awesome:fa-external-link-square";
pub const INFO_ICON: &str = "font-awesome:fa-info";

/// Format every section present in the response.
///
/// Sections come out in a fixed order: translations, examples, related
/// words, synonyms, usages. A missing or empty section adds nothing.
pub fn format(response: &TranslationResponse) -> Vec<ResultItem> {
    let mut items = Vec::new();

    if let Some(translations) = &response.translations {
        items.extend(format_translations(translations));
    }

    if let Some(examples) = &response.examples {
        items.extend(format_examples(examples));
    }

    if let Some(related) = &response.related {
        items.extend(format_related_words(related));
    }

    if let Some(synonyms) = &response.synonyms {
        items.extend(format_synonyms(synonyms));
    }

    if let Some(usages) = &response.usages {
        items.extend(format_usages(usages));
    }

    items
}

pub fn format_translations(entries: &[TranslationEntry]) -> Vec<ResultItem> {
    let mut items = Vec::new();

    for entry in entries {
        if let Some(translated) = &entry.translated {
            let mut item = ResultItem::new(translated.as_str());
            if let Some(source) = &entry.source {
                item = item.with_pinned_subtitle(source.as_str());
            }
            items.push(item);
        }

        if let Some(pronunciation) = &entry.target_pronunciation {
            items.push(ResultItem::new(pronunciation.as_str()));
        }

        if let Some(pronunciation) = &entry.source_pronunciation {
            items.push(ResultItem::new(pronunciation.as_str()));
        }
    }

    items
}

/// Remove `<b>`, `<i>` and their closing tags, leaving other markup alone
pub fn strip_emphasis(text: &str) -> String {
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    let re = EMPHASIS.get_or_init(|| Regex::new(r"</?[bi]>").expect("valid emphasis pattern"));
    re.replace_all(text, "").into_owned()
}

pub fn format_examples(groups: &[Vec<String>]) -> Option<ResultItem> {
    let examples = groups.first().filter(|examples| !examples.is_empty())?;

    let children: Vec<ResultItem> = examples
        .iter()
        .map(|example| strip_emphasis(example))
        .filter(|example| !example.is_empty())
        .map(ResultItem::new)
        .collect();

    non_empty_summary("查看例句", children)
}

pub fn format_related_words(groups: &[RelatedGroup]) -> Option<ResultItem> {
    let children: Vec<ResultItem> = groups
        .iter()
        .filter(|group| !group.words.is_empty())
        .map(|group| {
            let samples = group
                .samples
                .iter()
                .filter(|sample| !sample.word.is_empty())
                .map(|sample| {
                    let forms = sample
                        .forms
                        .iter()
                        .map(|form| ResultItem::new(form.as_str()).with_icon(INFO_ICON))
                        .collect();
                    ResultItem::new(sample.word.as_str())
                        .with_icon(INFO_ICON)
                        .with_children(forms)
                })
                .collect();

            ResultItem::new(group.words.join(", "))
                .with_label(group.kind.as_str())
                .with_icon(INFO_ICON)
                .with_children(samples)
        })
        .collect();

    non_empty_summary("相关词汇", children)
}

pub fn format_synonyms(groups: &[SynonymGroup]) -> Option<ResultItem> {
    let children: Vec<ResultItem> = groups
        .iter()
        .filter_map(|group| {
            let words = group.samples.first().filter(|words| !words.is_empty())?;
            let leaves = words.iter().map(|word| ResultItem::new(word.as_str())).collect();

            Some(
                ResultItem::new(words.join(", "))
                    .with_label(group.kind.as_str())
                    .with_icon(INFO_ICON)
                    .with_children(leaves),
            )
        })
        .collect();

    non_empty_summary("同义词", children)
}

pub fn format_usages(groups: &[UsageGroup]) -> Option<ResultItem> {
    let children: Vec<ResultItem> = groups
        .iter()
        .filter(|group| !group.kind.is_empty())
        .map(|group| {
            let samples = group
                .samples
                .iter()
                .filter(|sample| !sample.form.is_empty())
                .map(|sample| {
                    let mut item = ResultItem::new(sample.form.as_str()).with_icon(INFO_ICON);
                    if let Some(explanation) = &sample.explanation {
                        item = item
                            .with_subtitle(explanation.as_str())
                            .with_children(vec![ResultItem::new(explanation.as_str())]);
                    }
                    item
                })
                .collect();

            ResultItem::new(group.kind.as_str())
                .with_icon(INFO_ICON)
                .with_badge(group.samples.len().to_string())
                .with_children(samples)
        })
        .collect();

    non_empty_summary("用法与例子", children)
}

fn non_empty_summary(title: &str, children: Vec<ResultItem>) -> Option<ResultItem> {
    if children.is_empty() {
        return None;
    }
    Some(summary(title, children.len(), children))
}

fn summary(title: &str, count: usize, children: Vec<ResultItem>) -> ResultItem {
    ResultItem::new(title)
        .with_icon(GROUP_ICON)
        .with_badge(format!("{} 种", count))
        .with_lazy_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RelatedSample, UsageSample};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("<b>cat</b> and <i>dog</i>"), "cat and dog");
        assert_eq!(strip_emphasis("<em>x</em> <br> a<b"), "<em>x</em> <br> a<b");
    }

    #[test]
    fn test_translations_keep_order_and_pronunciations() {
        let entries = vec![
            TranslationEntry {
                translated: Some("bonjour".into()),
                source: Some("hello".into()),
                ..Default::default()
            },
            TranslationEntry {
                translated: Some("le monde".into()),
                target_pronunciation: Some("lə mɔ̃d".into()),
                source_pronunciation: Some("wɜːld".into()),
                ..Default::default()
            },
        ];

        let items = format_translations(&entries);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["bonjour", "le monde", "lə mɔ̃d", "wɜːld"]);
        assert_eq!(items[0].subtitle.as_deref(), Some("hello"));
        assert!(items[0].always_shows_subtitle);
        assert!(!items[1].always_shows_subtitle);
        assert!(items.iter().all(ResultItem::is_leaf));
    }

    #[test]
    fn test_only_translations_yield_single_section() {
        let response = TranslationResponse {
            translations: Some(vec![
                TranslationEntry {
                    translated: Some("a".into()),
                    ..Default::default()
                },
                TranslationEntry {
                    translated: Some("b".into()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let items = format(&response);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "a");
        assert_eq!(items[1].title, "b");
    }

    #[test]
    fn test_missing_or_empty_sections_are_skipped() {
        assert!(format(&TranslationResponse::default()).is_empty());

        let response = TranslationResponse {
            translations: Some(vec![]),
            related: Some(vec![]),
            synonyms: Some(vec![SynonymGroup {
                kind: "noun".into(),
                samples: vec![],
            }]),
            usages: Some(vec![]),
            examples: Some(vec![]),
            detected_source_lang: None,
        };
        assert!(format(&response).is_empty());
    }

    #[test]
    fn test_examples_summary() {
        let groups = vec![
            words(&["the <b>cat</b> sat", "a <i>big</i> cat"]),
            words(&["ignored"]),
        ];

        let item = format_examples(&groups).unwrap();
        assert_eq!(item.title, "查看例句");
        assert_eq!(item.badge.as_deref(), Some("2 种"));
        assert_eq!(item.icon.as_deref(), Some(GROUP_ICON));
        assert!(item.children.is_empty());
        let titles: Vec<&str> = item.lazy_children.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["the cat sat", "a big cat"]);
    }

    #[test]
    fn test_examples_badge_counts_shown_examples() {
        let payload = serde_json::json!([
            null, null, "en", null, null, null, null, null, null, null, null, null, null,
            [[["a <b>big</b> cat"], [42], ["the <i>cat</i> sat"]]]
        ]);
        let response = TranslationResponse::from_value(&payload).unwrap();

        let item = format_examples(response.examples.as_deref().unwrap()).unwrap();
        assert_eq!(item.badge.as_deref(), Some("2 种"));
        assert_eq!(item.lazy_children.len(), 2);

        let only_blank = vec![words(&[""])];
        assert!(format_examples(&only_blank).is_none());
    }

    #[test]
    fn test_synonyms_summary() {
        let groups = vec![SynonymGroup {
            kind: "noun".into(),
            samples: vec![words(&["big", "large"]), words(&["huge"])],
        }];

        let item = format_synonyms(&groups).unwrap();
        assert_eq!(item.title, "同义词");
        assert_eq!(item.badge.as_deref(), Some("1 种"));
        assert_eq!(item.lazy_children.len(), 1);

        let group = &item.lazy_children[0];
        assert_eq!(group.title, "big, large");
        assert_eq!(group.label.as_deref(), Some("noun"));
        let leaves: Vec<&str> = group.children.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(leaves, vec!["big", "large"]);
        assert!(group.children.iter().all(ResultItem::is_leaf));
    }

    #[test]
    fn test_related_words_summary() {
        let groups = vec![
            RelatedGroup {
                kind: "verb".into(),
                words: words(&["run", "sprint"]),
                samples: vec![RelatedSample {
                    word: "run".into(),
                    forms: words(&["jog", "dash"]),
                }],
            },
            RelatedGroup {
                kind: "noun".into(),
                words: words(&["race"]),
                samples: vec![],
            },
        ];

        let item = format_related_words(&groups).unwrap();
        assert_eq!(item.title, "相关词汇");
        assert_eq!(item.badge.as_deref(), Some("2 种"));

        let verb = &item.lazy_children[0];
        assert_eq!(verb.title, "run, sprint");
        assert_eq!(verb.label.as_deref(), Some("verb"));
        assert_eq!(verb.children[0].title, "run");
        let forms: Vec<&str> = verb.children[0].children.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(forms, vec!["jog", "dash"]);

        assert!(item.lazy_children[1].children.is_empty());
    }

    #[test]
    fn test_usages_summary() {
        let groups = vec![UsageGroup {
            kind: "exclamation".into(),
            samples: vec![
                UsageSample {
                    form: "used as a greeting".into(),
                    explanation: Some("hello there, Katie!".into()),
                },
                UsageSample {
                    form: "used to express surprise".into(),
                    explanation: None,
                },
            ],
        }];

        let item = format_usages(&groups).unwrap();
        assert_eq!(item.title, "用法与例子");
        assert_eq!(item.badge.as_deref(), Some("1 种"));

        let group = &item.lazy_children[0];
        assert_eq!(group.title, "exclamation");
        assert_eq!(group.badge.as_deref(), Some("2"));

        let sample = &group.children[0];
        assert_eq!(sample.subtitle.as_deref(), Some("hello there, Katie!"));
        assert_eq!(sample.children.len(), 1);
        assert_eq!(sample.children[0].title, "hello there, Katie!");
        assert!(group.children[1].is_leaf());
    }

    #[test]
    fn test_section_order() {
        let response = TranslationResponse {
            translations: Some(vec![TranslationEntry {
                translated: Some("grand".into()),
                ..Default::default()
            }]),
            related: Some(vec![RelatedGroup {
                kind: "adjective".into(),
                words: words(&["grand"]),
                samples: vec![],
            }]),
            detected_source_lang: Some("en".into()),
            synonyms: Some(vec![SynonymGroup {
                kind: "adjective".into(),
                samples: vec![words(&["big"])],
            }]),
            usages: Some(vec![UsageGroup {
                kind: "adjective".into(),
                samples: vec![],
            }]),
            examples: Some(vec![words(&["a <b>big</b> house"])]),
        };

        let titles: Vec<String> = format(&response).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["grand", "查看例句", "相关词汇", "同义词", "用法与例子"]);
    }
}

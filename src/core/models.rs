//! Core data models for translation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::{Result, TranslationError};

/// Source language used when none is given
pub const AUTO_DETECT: &str = "auto";

/// One translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationQuery {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationQuery {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: AUTO_DETECT.to_string(),
            target_lang: target_lang.into(),
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }
}

/// A single translated segment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    pub translated: Option<String>,
    pub source: Option<String>,
    pub target_pronunciation: Option<String>,
    pub source_pronunciation: Option<String>,
}

/// Dictionary group: a part of speech and the words it offers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedGroup {
    pub kind: String,
    pub words: Vec<String>,
    pub samples: Vec<RelatedSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedSample {
    pub word: String,
    pub forms: Vec<String>,
}

/// Synonym group; every sample is a list of interchangeable words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymGroup {
    pub kind: String,
    pub samples: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageGroup {
    pub kind: String,
    pub samples: Vec<UsageSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSample {
    pub form: String,
    pub explanation: Option<String>,
}

/// Decoded `translate_a/single` payload.
///
/// The wire format is a positional array; each section we use is pulled
/// out once here so the rest of the crate works with named fields. A
/// missing or `null` section is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationResponse {
    pub translations: Option<Vec<TranslationEntry>>,
    pub related: Option<Vec<RelatedGroup>>,
    pub detected_source_lang: Option<String>,
    pub synonyms: Option<Vec<SynonymGroup>>,
    pub usages: Option<Vec<UsageGroup>>,
    pub examples: Option<Vec<Vec<String>>>,
}

const TRANSLATIONS: usize = 0;
const RELATED: usize = 1;
const DETECTED_SOURCE_LANG: usize = 2;
const SYNONYMS: usize = 11;
const USAGES: usize = 12;
const EXAMPLES: usize = 13;

impl TranslationResponse {
    /// Decode the raw JSON payload
    pub fn from_value(payload: &Value) -> Result<Self> {
        let fields = match payload {
            Value::Null => return Ok(Self::default()),
            Value::Array(fields) => fields,
            other => {
                return Err(TranslationError::malformed(
                    "payload",
                    format!("expected array, got {}", type_name(other)),
                ))
            }
        };

        Ok(Self {
            translations: section(fields, TRANSLATIONS, "translations", decode_translation)?,
            related: section(fields, RELATED, "related", decode_related)?,
            detected_source_lang: fields.get(DETECTED_SOURCE_LANG).and_then(text),
            synonyms: section(fields, SYNONYMS, "synonyms", decode_synonyms)?,
            usages: section(fields, USAGES, "usages", decode_usages)?,
            examples: section(fields, EXAMPLES, "examples", decode_examples)?,
        })
    }

    /// True when no section carries any data
    pub fn is_empty(&self) -> bool {
        fn blank<T>(section: &Option<Vec<T>>) -> bool {
            section.as_ref().map_or(true, |s| s.is_empty())
        }

        blank(&self.translations)
            && blank(&self.related)
            && blank(&self.synonyms)
            && blank(&self.usages)
            && self
                .examples
                .as_ref()
                .map_or(true, |groups| groups.iter().all(|g| g.is_empty()))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode every element of the section at `index`
fn section<T>(
    fields: &[Value],
    index: usize,
    name: &str,
    decode: fn(&Value, &str) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    match fields.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let items = array(value, name)?;
            items
                .iter()
                .map(|item| decode(item, name))
                .collect::<Result<Vec<T>>>()
                .map(Some)
        }
    }
}

fn array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| {
            TranslationError::malformed(field, format!("expected array, got {}", type_name(value)))
        })
}

/// Like [`array`], but `null` or a missing slot reads as empty
fn optional_array<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a [Value]> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(value) => array(value, field),
    }
}

/// Non-empty string at a slot
fn text(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}

fn text_at(items: &[Value], index: usize) -> Option<String> {
    items.get(index).and_then(text)
}

fn strings(value: Option<&Value>, field: &str) -> Result<Vec<String>> {
    Ok(optional_array(value, field)?.iter().filter_map(text).collect())
}

fn decode_translation(value: &Value, field: &str) -> Result<TranslationEntry> {
    let entry = array(value, field)?;
    Ok(TranslationEntry {
        translated: text_at(entry, 0),
        source: text_at(entry, 1),
        target_pronunciation: text_at(entry, 2),
        source_pronunciation: text_at(entry, 3),
    })
}

fn decode_related(value: &Value, field: &str) -> Result<RelatedGroup> {
    let group = array(value, field)?;
    let samples = optional_array(group.get(2), field)?
        .iter()
        .map(|sample| {
            let sample = array(sample, field)?;
            Ok(RelatedSample {
                word: text_at(sample, 0).unwrap_or_default(),
                forms: strings(sample.get(1), field)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RelatedGroup {
        kind: text_at(group, 0).unwrap_or_default(),
        words: strings(group.get(1), field)?,
        samples,
    })
}

fn decode_synonyms(value: &Value, field: &str) -> Result<SynonymGroup> {
    let group = array(value, field)?;
    let samples = optional_array(group.get(1), field)?
        .iter()
        .map(|sample| strings(array(sample, field)?.first(), field))
        .collect::<Result<Vec<_>>>()?;

    Ok(SynonymGroup {
        kind: text_at(group, 0).unwrap_or_default(),
        samples,
    })
}

fn decode_usages(value: &Value, field: &str) -> Result<UsageGroup> {
    let group = array(value, field)?;
    let samples = optional_array(group.get(1), field)?
        .iter()
        .map(|sample| {
            let sample = array(sample, field)?;
            Ok(UsageSample {
                form: text_at(sample, 0).unwrap_or_default(),
                explanation: text_at(sample, 2),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(UsageGroup {
        kind: text_at(group, 0).unwrap_or_default(),
        samples,
    })
}

fn decode_examples(value: &Value, field: &str) -> Result<Vec<String>> {
    array(value, field)?
        .iter()
        .map(|example| Ok(text_at(array(example, field)?, 0).unwrap_or_default()))
        .collect()
}

/// What happens when the user picks an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Translate the text again into another language
    Translate { text: String, to: String },
}

/// A launcher list entry.
///
/// `children` are shown inline; `lazy_children` are built up front but
/// only rendered once the user opens the item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub always_shows_subtitle: bool,
    pub label: Option<String>,
    pub badge: Option<String>,
    pub icon: Option<String>,
    pub children: Vec<ResultItem>,
    pub lazy_children: Vec<ResultItem>,
    pub action: Option<ItemAction>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

impl ResultItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = non_empty(subtitle);
        self
    }

    /// Subtitle that stays visible even when the item is not selected
    pub fn with_pinned_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = non_empty(subtitle);
        self.always_shows_subtitle = self.subtitle.is_some();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = non_empty(label);
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = non_empty(badge);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = non_empty(icon);
        self
    }

    pub fn with_children(mut self, children: Vec<ResultItem>) -> Self {
        self.children = children;
        self
    }

    pub fn with_lazy_children(mut self, children: Vec<ResultItem>) -> Self {
        self.lazy_children = children;
        self
    }

    pub fn with_action(mut self, action: ItemAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.lazy_children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_named_fields() {
        let payload = json!([
            [["bonjour", "hello", null, null], [null, null, "bɔ̃ʒuʁ", "həˈləʊ"]],
            [["interjection", ["salut", "bonjour"], [["salut", ["hi", "hello"]]]]],
            "en",
            null, null, null, null, null, null, null, null,
            [["interjection", [[["hi", "hey"], "m_1"]]]],
            [["interjection", [["used as a greeting", "m_2", "hello there"]]]],
            [[["<b>hello</b> world", null, null, null, 3]]]
        ]);

        let response = TranslationResponse::from_value(&payload).unwrap();
        let translations = response.translations.unwrap();
        assert_eq!(translations.len(), 2);
        assert_eq!(translations[0].translated.as_deref(), Some("bonjour"));
        assert_eq!(translations[0].source.as_deref(), Some("hello"));
        assert_eq!(translations[1].translated, None);
        assert_eq!(translations[1].source_pronunciation.as_deref(), Some("həˈləʊ"));

        let related = response.related.unwrap();
        assert_eq!(related[0].kind, "interjection");
        assert_eq!(related[0].samples[0].forms, vec!["hi", "hello"]);

        assert_eq!(response.detected_source_lang.as_deref(), Some("en"));
        assert_eq!(response.synonyms.unwrap()[0].samples[0], vec!["hi", "hey"]);

        let usages = response.usages.unwrap();
        assert_eq!(usages[0].samples[0].form, "used as a greeting");
        assert_eq!(usages[0].samples[0].explanation.as_deref(), Some("hello there"));

        assert_eq!(response.examples.unwrap()[0], vec!["<b>hello</b> world"]);
    }

    #[test]
    fn test_short_payload_leaves_sections_absent() {
        let payload = json!([[["bonjour", null, null, null]], null, "en"]);
        let response = TranslationResponse::from_value(&payload).unwrap();

        assert!(response.translations.is_some());
        assert!(response.related.is_none());
        assert!(response.synonyms.is_none());
        assert!(response.usages.is_none());
        assert!(response.examples.is_none());
        assert!(!response.is_empty());
    }

    #[test]
    fn test_null_and_empty_payloads_are_empty() {
        assert!(TranslationResponse::from_value(&Value::Null).unwrap().is_empty());
        assert!(TranslationResponse::from_value(&json!([])).unwrap().is_empty());
        assert!(TranslationResponse::from_value(&json!([[], null, "en"]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let err = TranslationResponse::from_value(&json!({"sentences": []})).unwrap_err();
        assert!(matches!(err, TranslationError::MalformedResponse { ref field, .. } if field == "payload"));

        let mut fields = vec![Value::Null; 14];
        fields[SYNONYMS] = json!("not a list");
        let err = TranslationResponse::from_value(&Value::Array(fields)).unwrap_err();
        assert!(matches!(err, TranslationError::MalformedResponse { ref field, .. } if field == "synonyms"));
    }

    #[test]
    fn test_result_item_omits_empty_fields() {
        let item = ResultItem::new("cat")
            .with_subtitle("")
            .with_label("noun")
            .with_pinned_subtitle("");

        assert_eq!(item.subtitle, None);
        assert!(!item.always_shows_subtitle);
        assert_eq!(item.label.as_deref(), Some("noun"));
        assert!(item.is_leaf());
    }
}

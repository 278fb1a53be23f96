//! Target languages offered after every translation

use crate::core::models::{ItemAction, ResultItem};

/// A language the user can redirect the query to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub flag: &'static str,
}

const fn lang(name: &'static str, code: &'static str, flag: &'static str) -> LanguageEntry {
    LanguageEntry { name, code, flag }
}

/// Menu order; the first entry is what Enter picks
pub const LANGUAGES: &[LanguageEntry] = &[
    lang("中文（简体）", "zh-CN", "🇨🇳"),
    lang("英语", "en", "🇬🇧"),
    lang("俄语", "ru", "🇷🇺"),
    lang("法语", "fr", "🇫🇷"),
    lang("德语", "de", "🇩🇪"),
    lang("日语", "ja", "🇯🇵"),
    lang("世界语", "eo", "🌍"),
    lang("中文（繁体）", "zh-TW", "🇭🇰"),
    lang("爱尔兰语", "ga", "🇮🇪"),
    lang("意大利语", "it", "🇮🇹"),
    lang("韩语", "ko", "🇰🇷"),
    lang("荷兰语", "nl", "🇳🇱"),
    lang("丹麦语", "da", "🇩🇰"),
    lang("芬兰语", "fi", "🇫🇮"),
    lang("希腊语", "el", "🇬🇷"),
];

pub const ENTER_HINT: &str = "按回车翻译到此语言";

/// Look a language up by its code, ignoring case
pub fn find_language(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.code.eq_ignore_ascii_case(code))
}

/// One "translate to" item per supported language
pub fn build_menu(text: &str) -> Vec<ResultItem> {
    LANGUAGES
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let item = ResultItem::new(entry.name)
                .with_icon(entry.flag)
                .with_badge(entry.code.to_uppercase())
                .with_action(ItemAction::Translate {
                    text: text.to_string(),
                    to: entry.code.to_string(),
                });

            if index == 0 {
                item.with_label(ENTER_HINT)
            } else {
                item
            }
        })
        .collect()
}

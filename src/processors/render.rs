//! Serialization of result items into the launcher's JSON item format

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ItemAction, ResultItem};

/// Host action that simply returns the items it is given
pub const LIST_ITEMS_ACTION: &str = "listItems";
/// Host action that translates into the language in its argument
pub const TRANS_ACTION: &str = "trans";

fn is_false(value: &bool) -> bool {
    !*value
}

/// Item as the launcher expects it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HostItem {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    always_shows_subtitle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<HostItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_argument: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    action_returns_items: bool,
}

/// Argument of the `listItems` action
#[derive(Debug, Serialize, Deserialize)]
pub struct ListArgument {
    pub items: Vec<Value>,
}

/// Argument of the `trans` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransArgument {
    pub text: String,
    pub to: String,
}

impl HostItem {
    fn from_item(item: &ResultItem) -> Result<Self> {
        let mut host = HostItem {
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            always_shows_subtitle: item.always_shows_subtitle,
            label: item.label.clone(),
            badge: item.badge.clone(),
            icon: item.icon.clone(),
            children: item
                .children
                .iter()
                .map(HostItem::from_item)
                .collect::<Result<Vec<_>>>()?,
            action: None,
            action_argument: None,
            action_returns_items: false,
        };

        if !item.lazy_children.is_empty() {
            let argument = ListArgument {
                items: item
                    .lazy_children
                    .iter()
                    .map(|child| Ok(serde_json::to_value(HostItem::from_item(child)?)?))
                    .collect::<Result<Vec<_>>>()?,
            };
            host.action = Some(LIST_ITEMS_ACTION);
            host.action_argument = Some(serde_json::to_value(argument)?);
            host.action_returns_items = true;
        } else if let Some(ItemAction::Translate { text, to }) = &item.action {
            let argument = TransArgument {
                text: text.clone(),
                to: to.clone(),
            };
            host.action = Some(TRANS_ACTION);
            host.action_argument = Some(serde_json::to_value(argument)?);
            host.action_returns_items = true;
        }

        Ok(host)
    }
}

/// Render a result list for the launcher
pub fn render_items(items: &[ResultItem]) -> Result<Value> {
    let host = items
        .iter()
        .map(HostItem::from_item)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_value(host)?)
}

/// Expand a lazy group: return the items carried in a `listItems` argument
pub fn list_items(argument: &str) -> Result<Value> {
    let argument: ListArgument = serde_json::from_str(argument).map_err(|e| {
        TranslationError::malformed("items", e.to_string())
    })?;
    Ok(Value::Array(argument.items))
}

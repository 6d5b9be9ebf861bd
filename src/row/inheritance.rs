use serde::Serialize;
use std::fmt;

use crate::constants::locales::{CODE_FALLBACK_LOCALE, ROOT_LOCALE};
use crate::source::LocaleDataSource;
use crate::types::{LocaleId, Xpath};
use crate::value::CandidateValue;

/// Inherited ("Bailey") value of one data point and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InheritanceInfo {
    /// Value the data point has when nothing explicit wins.
    pub value: String,
    /// Supplying path, set only when it differs from the row's own path.
    pub from_path: Option<Xpath>,
    /// Supplying locale (root, the code-fallback pseudo-locale, or a parent).
    pub from_locale: Option<LocaleId>,
}

impl InheritanceInfo {
    /// Whether the value comes from a different path (sideways inheritance).
    pub fn is_sideways(&self) -> bool {
        self.from_path.is_some()
    }
}

/// Capture the fallback-chain result for `xpath`; `None` when nothing is inherited.
pub fn resolve(xpath: &str, source: &dyn LocaleDataSource) -> Option<InheritanceInfo> {
    let bailey = source.bailey_value(xpath)?;
    Some(InheritanceInfo {
        value: bailey.value,
        from_path: bailey.path_where_found.filter(|path| path != xpath),
        from_locale: bailey.locale_where_found,
    })
}

/// Display classification of a candidate item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    /// Holds the winning value.
    Winner,
    /// Any other explicit value.
    Loser,
    /// Inherited from a parent locale.
    Fallback,
    /// Inherited from the code fallback.
    FallbackCode,
    /// Inherited from root.
    FallbackRoot,
    /// Inherited sideways from another path.
    Alias,
}

impl ItemClass {
    /// Classify `value`; inheritance takes precedence over winning.
    pub fn classify(
        value: Option<&CandidateValue>,
        inherited: Option<&InheritanceInfo>,
        winning: Option<&CandidateValue>,
    ) -> Self {
        match value {
            Some(CandidateValue::Inherited) => {
                let Some(info) = inherited else {
                    return ItemClass::Fallback;
                };
                if info.is_sideways() {
                    ItemClass::Alias
                } else if info.from_locale.as_deref() == Some(CODE_FALLBACK_LOCALE) {
                    ItemClass::FallbackCode
                } else if info.from_locale.as_deref() == Some(ROOT_LOCALE) {
                    ItemClass::FallbackRoot
                } else {
                    ItemClass::Fallback
                }
            }
            Some(value) if winning == Some(value) => ItemClass::Winner,
            _ => ItemClass::Loser,
        }
    }

    /// Wire name of the class.
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemClass::Winner => "winner",
            ItemClass::Loser => "loser",
            ItemClass::Fallback => "fallback",
            ItemClass::FallbackCode => "fallback_code",
            ItemClass::FallbackRoot => "fallback_root",
            ItemClass::Alias => "alias",
        }
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale ids name the same locale after `-`/`_` normalisation.
///
/// Script and region variants stay distinct: `sr_Latn` is not `sr`.
pub fn same_locale(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .chars()
            .zip(b.chars())
            .all(|(x, y)| x == y || (matches!(x, '-' | '_') && matches!(y, '-' | '_')))
}

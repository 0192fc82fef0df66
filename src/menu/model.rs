use serde::{Deserialize, Serialize};

/// A single entry of the navbar menu as supplied by the site data layer.
///
/// An entry is either a leaf (`href`) or a group (`sub_links`). Entries with
/// neither are kept and rendered as inert labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_links: Option<Vec<MenuEntry>>,
}

/// How an entry should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    Leaf { href: &'a str },
    Group { links: &'a [MenuEntry] },
    /// Neither `href` nor `sub_links`: a non-interactive label.
    Inert,
}

impl MenuEntry {
    pub fn leaf(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            sub_links: None,
        }
    }

    pub fn group(title: impl Into<String>, links: Vec<MenuEntry>) -> Self {
        Self {
            title: title.into(),
            href: None,
            sub_links: Some(links),
        }
    }

    pub fn inert(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: None,
            sub_links: None,
        }
    }

    /// Classifies the entry. `sub_links` takes precedence over `href`.
    pub fn kind(&self) -> EntryKind<'_> {
        match (&self.sub_links, &self.href) {
            (Some(links), _) => EntryKind::Group { links },
            (None, Some(href)) => EntryKind::Leaf { href },
            (None, None) => EntryKind::Inert,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind(), EntryKind::Group { .. })
    }
}

/// Identity of a top-level group: its index in `menu_list`.
///
/// Stable across re-renders as long as the menu ordering is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub usize);

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether the call-to-action button list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaToggle {
    On,
    #[default]
    Off,
}

impl CtaToggle {
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Horizontal alignment of the desktop menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    #[default]
    Start,
    End,
    Center,
    Between,
    Around,
    Evenly,
}

/// A call-to-action button. Opaque to the menu core, forwarded to the
/// button-list widget as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub new_tab: bool,
}

/// Fully resolved navbar description. Read-only input to the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    /// Image reference for the logo.
    pub logo: String,
    #[serde(default)]
    pub menu_list: Vec<MenuEntry>,
    #[serde(default)]
    pub is_cta_button: CtaToggle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Justify>,
    #[serde(default)]
    pub buttons: Vec<ButtonSpec>,
}

impl NavbarConfig {
    pub fn new(logo: impl Into<String>, menu_list: Vec<MenuEntry>) -> Self {
        Self {
            logo: logo.into(),
            menu_list,
            is_cta_button: CtaToggle::Off,
            justify_content: None,
            buttons: Vec::new(),
        }
    }

    /// Alignment of the desktop row, `Start` when unset.
    pub fn justify(&self) -> Justify {
        self.justify_content.unwrap_or_default()
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self::new("/logo.svg", vec![MenuEntry::leaf("Home", "/")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_wins_over_href() {
        let entry = MenuEntry {
            title: "Both".into(),
            href: Some("/both".into()),
            sub_links: Some(vec![MenuEntry::leaf("A", "/a")]),
        };
        assert!(matches!(entry.kind(), EntryKind::Group { links } if links.len() == 1));
    }

    #[test]
    fn entry_without_href_or_links_is_inert() {
        assert_eq!(MenuEntry::inert("Label").kind(), EntryKind::Inert);
    }

    #[test]
    fn empty_sub_links_is_still_a_group() {
        let entry = MenuEntry::group("Empty", vec![]);
        assert!(entry.is_group());
    }

    #[test]
    fn justify_defaults_to_start() {
        let config = NavbarConfig::new("/logo.png", vec![]);
        assert_eq!(config.justify(), Justify::Start);
    }

    #[test]
    fn deserializes_camel_case_shape() {
        let json = r#"{
            "logo": "/logo.png",
            "menuList": [
                {"title": "Home", "href": "/"},
                {"title": "Products", "subLinks": [{"title": "A", "href": "/a"}]}
            ],
            "isCtaButton": "on",
            "justifyContent": "between",
            "buttons": [{"label": "Try", "href": "/try", "newTab": true}]
        }"#;
        let config: NavbarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.menu_list.len(), 2);
        assert!(config.menu_list[1].is_group());
        assert!(config.is_cta_button.is_on());
        assert_eq!(config.justify(), Justify::Between);
        assert!(config.buttons[0].new_tab);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let config: NavbarConfig = serde_json::from_str(r#"{"logo": "/l.png"}"#).unwrap();
        assert!(config.menu_list.is_empty());
        assert_eq!(config.is_cta_button, CtaToggle::Off);
        assert!(config.justify_content.is_none());
        assert!(config.buttons.is_empty());
    }
}

use std::collections::BTreeMap;

const BUILTIN_STYLES: &[(&str, &str)] = &[
    (
        "minimalist",
        "минималистичный логотип, чистый дизайн, простые геометрические формы",
    ),
    (
        "modern",
        "современный логотип, яркие цвета, динамичный дизайн",
    ),
    (
        "geometric",
        "геометрический логотип, четкие линии, абстрактные формы",
    ),
    (
        "vintage",
        "винтажный логотип, ретро стиль, классические элементы",
    ),
    (
        "tech",
        "технологичный логотип, футуристичный стиль, цифровой дизайн",
    ),
    (
        "corporate",
        "корпоративный логотип, профессиональный вид, строгий стиль",
    ),
    (
        "creative",
        "креативный логотип, художественный стиль, яркие цвета",
    ),
    (
        "elegant",
        "элегантный логотип, изысканный дизайн, утонченные формы",
    ),
];

/// Preset style key to descriptive phrase, in presentation order. Built
/// once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalog {
    styles: Vec<(String, String)>,
}

impl StyleCatalog {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_STYLES.iter().copied())
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut styles: Vec<(String, String)> = Vec::new();
        for (key, phrase) in pairs {
            let (key, phrase) = (key.into(), phrase.into());
            // A repeated key keeps its first position and takes the last phrase.
            match styles.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = phrase,
                None => styles.push((key, phrase)),
            }
        }
        Self { styles }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, phrase)| phrase.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn to_map(&self) -> BTreeMap<&str, &str> {
        self.iter().collect()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

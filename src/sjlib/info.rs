use itertools::Itertools;
use std::fmt;

/// A single INFO token. Bare flags (e.g. `PRECISE`) are kept distinct from
/// keys carrying an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoItem {
    Flag(String),
    KeyValue(String, String),
}

impl InfoItem {
    pub fn key(&self) -> &str {
        match self {
            InfoItem::Flag(k) | InfoItem::KeyValue(k, _) => k,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            InfoItem::Flag(_) => None,
            InfoItem::KeyValue(_, v) => Some(v),
        }
    }

    /// Same item with `prefix` prepended to its key
    pub fn prefixed(&self, prefix: &str) -> InfoItem {
        match self {
            InfoItem::Flag(k) => InfoItem::Flag(format!("{}{}", prefix, k)),
            InfoItem::KeyValue(k, v) => InfoItem::KeyValue(format!("{}{}", prefix, k), v.clone()),
        }
    }

    fn render(&self, kv_delim: char) -> String {
        match self {
            InfoItem::Flag(k) => k.clone(),
            InfoItem::KeyValue(k, v) => format!("{}{}{}", k, kv_delim, v),
        }
    }
}

/// Ordered INFO items of one record.
///
/// Items are split on `item_delim` and then on the *first* `kv_delim`, so a
/// value that itself holds the separator (`ANN=a=b`) is kept whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    items: Vec<InfoItem>,
    item_delim: char,
    kv_delim: char,
}

impl InfoField {
    pub fn parse(input: &str, item_delim: char, kv_delim: char) -> Self {
        let items = if input.is_empty() || input == "." {
            vec![]
        } else {
            input
                .split(item_delim)
                .filter(|item| !item.is_empty())
                .map(|item| match item.split_once(kv_delim) {
                    Some((k, v)) => InfoItem::KeyValue(k.to_string(), v.to_string()),
                    None => InfoItem::Flag(item.to_string()),
                })
                .collect()
        };

        Self {
            items,
            item_delim,
            kv_delim,
        }
    }

    /// Standard VCF delimiters
    pub fn from_vcf(input: &str) -> Self {
        Self::parse(input, ';', '=')
    }

    pub fn get(&self, key: &str) -> Option<&InfoItem> {
        self.items.iter().find(|i| i.key() == key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(InfoItem::value)
    }

    pub fn items(&self) -> &[InfoItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for InfoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('='))
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kv = self.kv_delim;
        let joined = self
            .items
            .iter()
            .map(|i| i.render(kv))
            .join(&self.item_delim.to_string());
        write!(f, "{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_pairs() {
        let info = InfoField::from_vcf("SVTYPE=DEL;PRECISE;SVLEN=-60");
        assert_eq!(info.value("SVTYPE"), Some("DEL"));
        assert_eq!(info.get("PRECISE"), Some(&InfoItem::Flag("PRECISE".into())));
        assert_eq!(info.value("PRECISE"), None);
        assert!(info.get("END").is_none());
    }

    #[test]
    fn empty_value_is_not_a_flag() {
        let info = InfoField::from_vcf("OMIM=;PRECISE");
        assert_eq!(info.get("OMIM"), Some(&InfoItem::KeyValue("OMIM".into(), "".into())));
        assert_eq!(info.to_string(), "OMIM=;PRECISE");
    }

    #[test]
    fn value_keeps_extra_separators() {
        let info = InfoField::from_vcf("ANN=T|a=b;AC=1");
        assert_eq!(info.value("ANN"), Some("T|a=b"));
        assert_eq!(info.to_string(), "ANN=T|a=b;AC=1");
    }

    #[test]
    fn round_trip_keeps_duplicates() {
        let raw = "AC=5;AN=10;AC=5;IDLIST=s1,c7";
        let info = InfoField::from_vcf(raw);
        assert_eq!(info.items().len(), 4);
        assert_eq!(info.to_string(), raw);
    }

    #[test]
    fn custom_delimiters() {
        let info = InfoField::parse("a:1,b:2,c", ',', ':');
        assert_eq!(info.value("b"), Some("2"));
        assert_eq!(info.to_string(), "a:1,b:2,c");
    }

    #[test]
    fn missing_info() {
        assert!(InfoField::from_vcf(".").is_empty());
        assert!(InfoField::from_vcf("").is_empty());
    }

    #[test]
    fn prefixing() {
        let item = InfoItem::KeyValue("AF".into(), "0.1".into());
        assert_eq!(
            item.prefixed("COLORS_"),
            InfoItem::KeyValue("COLORS_AF".into(), "0.1".into())
        );
        let flag = InfoItem::Flag("HiConf".into()).prefixed("UW1KG_");
        assert_eq!(flag.key(), "UW1KG_HiConf");
    }
}

use crate::sjlib::{InfoField, Result, SvjoinError};
use clap::ValueEnum;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Built-in reference SV sets
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefDb {
    #[value(name = "COLORS")]
    Colors,
    #[value(name = "UW1KG")]
    Uw1kg,
}

const COLORS_FIELDS: [&str; 10] = [
    "AC", "AN", "NS", "AF", "AC_Het", "AC_Hom", "AC_Hemi", "HWE", "ExcHet", "nhomalt",
];

const UW1KG_COUNTS: [&str; 3] = ["Allele_Freq_ALL", "Pop_Count_ALL", "Pop_Freq_ALL"];
const UW1KG_CONTEXT: [&str; 11] = [
    "OMIM",
    "Exonic",
    "Centromeric",
    "Pericentromeric",
    "Telomeric",
    "STR",
    "VNTR",
    "Segdup",
    "Repeat",
    "Gap",
    "HiConf",
];

/// Describes how one reference source is joined: the prefix put in front of
/// every key, which INFO fields are carried over (in output order) with their
/// no-match default, and which extra header definitions to keep.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReferenceProfile {
    pub name: String,
    pub prefix: String,
    pub fields: IndexMap<String, String>,
    #[serde(default)]
    pub header_only: Vec<String>,
}

impl ReferenceProfile {
    pub fn builtin(db: RefDb) -> Self {
        let (name, fields): (&str, Vec<(&str, &str)>) = match db {
            RefDb::Colors => ("COLORS", COLORS_FIELDS.iter().map(|f| (*f, "0")).collect()),
            RefDb::Uw1kg => (
                "UW1KG",
                UW1KG_COUNTS
                    .iter()
                    .map(|f| (*f, "0"))
                    .chain(UW1KG_CONTEXT.iter().map(|f| (*f, ".")))
                    .collect(),
            ),
        };

        Self {
            name: name.to_string(),
            prefix: format!("{}_", name),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            header_only: vec!["END".to_string()],
        }
    }

    /// Load a custom profile from json
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let profile: ReferenceProfile = serde_json::from_reader(reader)?;
        if profile.fields.is_empty() {
            return Err(SvjoinError::malformed(
                &path.display().to_string(),
                "profile has no fields",
            ));
        }
        Ok(profile)
    }

    /// Pick this profile's fields out of a reference record's INFO and
    /// render them as prefixed tokens. Every field must be present.
    pub fn annotate(&self, info: &InfoField, record: &str) -> Result<String> {
        self.fields
            .keys()
            .map(|key| match info.get(key) {
                Some(item) => Ok(item.prefixed(&self.prefix).to_string()),
                None => Err(SvjoinError::MissingInfoKey {
                    key: key.clone(),
                    record: record.to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()
            .map(|tokens| tokens.join(";"))
    }

    /// Annotation used when a record has no reference match. Mirrors the
    /// field set written by `annotate`.
    pub fn default_block(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}{}={}", self.prefix, k, v))
            .join(";")
    }

    /// Unprefixed IDs whose `##INFO` lines belong in the output header
    pub fn header_fields(&self) -> Vec<String> {
        self.fields
            .keys()
            .chain(self.header_only.iter())
            .cloned()
            .collect()
    }
}

use crate::sjlib::{Record, Result, SvjoinError};

/// Where a record's join identifier comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinKey {
    /// The ID column
    IdColumn,
    /// Value of an INFO key, e.g. truvari's `MatchId`
    InfoValue(String),
    /// One element of a comma separated INFO list, e.g. jasmine's `IDLIST`
    InfoListItem { key: String, index: usize },
    /// `chrom_pos_ref_alt`
    Positional,
}

impl JoinKey {
    pub fn match_id() -> Self {
        JoinKey::InfoValue("MatchId".to_string())
    }

    /// jasmine lists the sample's id first and the reference's second
    pub fn idlist_reference() -> Self {
        JoinKey::InfoListItem {
            key: "IDLIST".to_string(),
            index: 1,
        }
    }

    pub fn extract(&self, record: &Record) -> Result<String> {
        match self {
            JoinKey::IdColumn => Ok(record.id().to_string()),
            JoinKey::Positional => Ok(record.positional_key()),
            JoinKey::InfoValue(key) => record
                .info()
                .value(key)
                .map(String::from)
                .ok_or_else(|| missing(key, record)),
            JoinKey::InfoListItem { key, index } => {
                let info = record.info();
                let list = info.value(key).ok_or_else(|| missing(key, record))?;
                list.split(',').nth(*index).map(String::from).ok_or_else(|| {
                    SvjoinError::malformed(
                        &record.to_line(),
                        format!("{} has no element at index {}", key, index),
                    )
                })
            }
        }
    }
}

fn missing(key: &str, record: &Record) -> SvjoinError {
    SvjoinError::MissingInfoKey {
        key: key.to_string(),
        record: record.to_line(),
    }
}

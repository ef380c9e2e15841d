use crate::sjlib::{
    HeaderCollector, HeaderSelection, JoinKey, LineKind, Record, ReferenceProfile, Result,
    SvjoinError, VcfLines,
};
use std::collections::HashMap;
use std::io::BufRead;

/// Frozen reference annotations: join key to rendered annotation, plus the
/// header definitions and the no-match default for the same profile.
#[derive(Debug)]
pub struct AnnotationMap {
    annotations: HashMap<String, String>,
    header: Vec<String>,
    default_block: String,
}

impl AnnotationMap {
    pub fn new(
        annotations: HashMap<String, String>,
        header: Vec<String>,
        default_block: String,
    ) -> Self {
        Self {
            annotations,
            header,
            default_block,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Like `get`, but a missing key is an error
    pub fn lookup(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| SvjoinError::MissingJoinKey {
            key: key.to_string(),
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn default_block(&self) -> &str {
        &self.default_block
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Consumes a reference vcf into an `AnnotationMap`. Nothing can be looked up
/// until `build` hands over the finished map.
#[derive(Debug)]
pub struct AnnotationMapBuilder {
    profile: ReferenceProfile,
    key: JoinKey,
    selection: HeaderSelection,
    collector: HeaderCollector,
    annotations: HashMap<String, String>,
    replaced: u64,
}

impl AnnotationMapBuilder {
    /// Header definitions default to the profile's fields
    pub fn new(profile: ReferenceProfile, key: JoinKey) -> Self {
        let selection = HeaderSelection::AllowList(profile.header_fields());
        Self {
            profile,
            key,
            selection,
            collector: HeaderCollector::new(),
            annotations: HashMap::new(),
            replaced: 0,
        }
    }

    pub fn with_selection(mut self, selection: HeaderSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn add_line(&mut self, kind: LineKind, line: &str) -> Result<()> {
        match kind {
            LineKind::Meta => {
                self.collector.push(line, &self.profile.prefix);
            }
            LineKind::Columns => {}
            LineKind::Data => {
                let record = Record::parse(line)?;
                let key = self.key.extract(&record)?;
                let anno = self.profile.annotate(&record.info(), line)?;
                if self.annotations.insert(key, anno).is_some() {
                    self.replaced += 1;
                }
            }
        }
        Ok(())
    }

    /// Stream every line of `reader` into the builder
    pub fn read<R: BufRead>(mut self, reader: R) -> Result<Self> {
        for entry in VcfLines::new(reader) {
            let (kind, line) = entry?;
            self.add_line(kind, &line)?;
        }
        Ok(self)
    }

    pub fn build(self) -> AnnotationMap {
        if self.replaced != 0 {
            warn!(
                "{} reference records repeated a join key; the last one was kept",
                self.replaced
            );
        }
        let header = self.collector.finish(&self.selection);
        info!(
            "loaded {} {} annotations and {} header definitions",
            self.annotations.len(),
            self.profile.name,
            header.len()
        );
        AnnotationMap::new(self.annotations, header, self.profile.default_block())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sjlib::RefDb;

    const TP_BASE: &str = "##fileformat=VCFv4.2
##INFO=<ID=SVTYPE,Number=1,Type=String,Description=\"SV type\">
##INFO=<ID=END,Number=1,Type=Integer,Description=\"End\">
##INFO=<ID=AC,Number=A,Type=Integer,Description=\"Allele count\">
##INFO=<ID=AN,Number=1,Type=Integer,Description=\"Allele number\">
##INFO=<ID=MatchId,Number=.,Type=String,Description=\"Truvari match\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t100\tc1\tA\t<DEL>\t.\tPASS\tSVTYPE=DEL;END=200;AC=5;AN=10;MatchId=0.0
chr1\t900\tc2\tA\t<DEL>\t.\tPASS\tSVTYPE=DEL;END=950;AC=1;AN=10;MatchId=1.0
";

    fn two_field_profile() -> ReferenceProfile {
        ReferenceProfile {
            name: "COLORS".into(),
            prefix: "COLORS_".into(),
            fields: [("AC", "0"), ("AN", "0")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            header_only: vec!["END".into()],
        }
    }

    #[test]
    fn builds_by_match_id() {
        let map = AnnotationMapBuilder::new(two_field_profile(), JoinKey::match_id())
            .read(TP_BASE.as_bytes())
            .unwrap()
            .build();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("0.0"), Some("COLORS_AC=5;COLORS_AN=10"));
        assert_eq!(map.lookup("1.0").unwrap(), "COLORS_AC=1;COLORS_AN=10");
        assert!(matches!(
            map.lookup("7.0"),
            Err(SvjoinError::MissingJoinKey { .. })
        ));
        assert_eq!(map.default_block(), "COLORS_AC=0;COLORS_AN=0");
    }

    #[test]
    fn header_allow_list() {
        let map = AnnotationMapBuilder::new(two_field_profile(), JoinKey::IdColumn)
            .read(TP_BASE.as_bytes())
            .unwrap()
            .build();
        let ids: Vec<_> = map
            .header()
            .iter()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["##INFO=<ID=COLORS_END", "##INFO=<ID=COLORS_AC", "##INFO=<ID=COLORS_AN"]
        );
        assert!(map.get("c1").is_some());
    }

    #[test]
    fn header_window() {
        let map = AnnotationMapBuilder::new(two_field_profile(), JoinKey::IdColumn)
            .with_selection(HeaderSelection::Window {
                start: 0,
                end: Some(-1),
            })
            .read(TP_BASE.as_bytes())
            .unwrap()
            .build();
        assert_eq!(map.header().len(), 4);
        assert!(map.header()[0].contains("ID=COLORS_SVTYPE"));
    }

    #[test]
    fn reference_missing_kept_field() {
        let err = AnnotationMapBuilder::new(
            ReferenceProfile::builtin(RefDb::Colors),
            JoinKey::match_id(),
        )
        .read(TP_BASE.as_bytes())
        .unwrap_err();
        assert!(matches!(err, SvjoinError::MissingInfoKey { ref key, .. } if key == "NS"));
    }
}

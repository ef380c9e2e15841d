use crate::sjlib::{
    open_output, open_vcf, AnnotationMap, AnnotationMapBuilder, BenchArgs, JoinKey,
    OverlapPolicy, Result, RewriteStats, Rewriter,
};
use std::io::{BufRead, Write};

/// Annotate truvari bench calls. `tp_comp` records are matched to the base
/// by `MatchId` and supply the output header; `fp` records follow with the
/// defaults. Output is not re-sorted.
pub fn annotate_bench<R: BufRead, S: BufRead, W: Write + ?Sized>(
    map: &AnnotationMap,
    tp_comp: R,
    fp: S,
    writer: &mut W,
) -> Result<RewriteStats> {
    let mut tp = Rewriter::new(map, JoinKey::match_id(), OverlapPolicy::Always);
    tp.rewrite(tp_comp, writer)?;
    debug!("{} tp-comp records annotated", tp.stats.matched);

    let mut fp_rw = Rewriter::new(map, JoinKey::match_id(), OverlapPolicy::Never).data_only();
    fp_rw.rewrite(fp, writer)?;
    debug!("{} fp records defaulted", fp_rw.stats.defaulted);

    Ok(RewriteStats {
        matched: tp.stats.matched,
        defaulted: fp_rw.stats.defaulted,
        skipped: 0,
    })
}

pub fn bench_main(args: BenchArgs) -> Result<RewriteStats> {
    let profile = args.reference.load(None)?;
    let map = AnnotationMapBuilder::new(profile, JoinKey::match_id())
        .read(open_vcf(&args.tp_base())?)?
        .build();

    let mut writer = open_output(&args.output_vcf)?;
    let stats = annotate_bench(
        &map,
        open_vcf(&args.tp_comp())?,
        open_vcf(&args.fp())?,
        &mut writer,
    )?;
    writer.flush()?;

    info!("{} tp-comp, {} fp", stats.matched, stats.defaulted);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sjlib::{RefDb, ReferenceProfile, SvjoinError};

    const TP_BASE: &str = "##fileformat=VCFv4.2
##INFO=<ID=SVTYPE,Number=1,Type=String,Description=\"Type\">
##INFO=<ID=Allele_Freq_ALL,Number=1,Type=Float,Description=\"AF\">
##INFO=<ID=Pop_Count_ALL,Number=1,Type=Integer,Description=\"Count\">
##INFO=<ID=Pop_Freq_ALL,Number=1,Type=Float,Description=\"Freq\">
##INFO=<ID=OMIM,Number=1,Type=String,Description=\"OMIM\">
##INFO=<ID=Exonic,Number=1,Type=String,Description=\"Exonic\">
##INFO=<ID=Centromeric,Number=1,Type=String,Description=\"Cen\">
##INFO=<ID=Pericentromeric,Number=1,Type=String,Description=\"Peri\">
##INFO=<ID=Telomeric,Number=1,Type=String,Description=\"Tel\">
##INFO=<ID=STR,Number=1,Type=String,Description=\"STR\">
##INFO=<ID=VNTR,Number=1,Type=String,Description=\"VNTR\">
##INFO=<ID=Segdup,Number=1,Type=String,Description=\"Segdup\">
##INFO=<ID=Repeat,Number=1,Type=String,Description=\"Repeat\">
##INFO=<ID=Gap,Number=1,Type=String,Description=\"Gap\">
##INFO=<ID=HiConf,Number=1,Type=String,Description=\"HiConf\">
##INFO=<ID=MatchId,Number=.,Type=String,Description=\"Truvari\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t100\tb1\tA\t<DEL>\t.\tPASS\tSVTYPE=DEL;Allele_Freq_ALL=0.1;Pop_Count_ALL=3;Pop_Freq_ALL=0.2;OMIM=x;Exonic=no;Centromeric=no;Pericentromeric=no;Telomeric=no;STR=no;VNTR=no;Segdup=no;Repeat=LINE;Gap=no;HiConf=yes;MatchId=0.0
";

    const TP_COMP: &str = "##fileformat=VCFv4.2
##INFO=<ID=MatchId,Number=.,Type=String,Description=\"Truvari\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tHG002
chr1\t102\tc1\tA\t<DEL>\t.\tPASS\tSVTYPE=DEL;MatchId=0.0\tGT\t0/1
";

    const FP: &str = "##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tHG002
chr2\t500\tc2\tA\t<INS>\t.\tPASS\tSVTYPE=INS\tGT\t1/1
chr2\t900\tc3\tA\t<INS>\t.\tPASS\tSVTYPE=INS;MatchId=.\tGT\t1/1
";

    fn uw1kg_map() -> AnnotationMap {
        AnnotationMapBuilder::new(ReferenceProfile::builtin(RefDb::Uw1kg), JoinKey::match_id())
            .read(TP_BASE.as_bytes())
            .unwrap()
            .build()
    }

    #[test]
    fn tp_then_fp() {
        let map = uw1kg_map();
        // SVTYPE and MatchId are not profile fields
        assert_eq!(map.header().len(), 14);

        let mut out = Vec::new();
        let stats = annotate_bench(&map, TP_COMP.as_bytes(), FP.as_bytes(), &mut out).unwrap();
        assert_eq!((stats.matched, stats.defaulted), (1, 2));

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 14 + 1 + 1 + 2);
        assert_eq!(lines.iter().filter(|l| l.starts_with("#CHROM")).count(), 1);
        assert_eq!(lines.iter().filter(|l| l.starts_with("##fileformat")).count(), 1);

        assert!(lines[17].contains(
            "MatchId=0.0;UW1KG_Allele_Freq_ALL=0.1;UW1KG_Pop_Count_ALL=3;UW1KG_Pop_Freq_ALL=0.2;UW1KG_OMIM=x"
        ));
        assert!(lines[17].ends_with("UW1KG_HiConf=yes\tGT\t0/1"));
        assert!(lines[18].contains(
            "SVTYPE=INS;UW1KG_Allele_Freq_ALL=0;UW1KG_Pop_Count_ALL=0;UW1KG_Pop_Freq_ALL=0;UW1KG_OMIM=."
        ));
        assert!(lines[19].starts_with("chr2\t900"));
    }

    #[test]
    fn tp_comp_without_base_match() {
        let map = uw1kg_map();
        let tp = TP_COMP.replace("MatchId=0.0", "MatchId=5.0");
        let mut out = Vec::new();
        let err = annotate_bench(&map, tp.as_bytes(), FP.as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, SvjoinError::MissingJoinKey { ref key } if key == "5.0"));
    }
}

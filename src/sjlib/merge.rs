use crate::sjlib::{
    open_output, open_vcf, AnnotationMap, AnnotationMapBuilder, JoinKey, MergeArgs,
    OverlapPolicy, RefDb, Result, RewriteStats, Rewriter,
};
use std::io::{BufRead, Write};

/// Annotate a jasmine merge. Records supported by both inputs take the
/// annotation of the reference record named second in `IDLIST`; sample-only
/// records get the defaults.
pub fn annotate_merge<R: BufRead, W: Write + ?Sized>(
    map: &AnnotationMap,
    merged: R,
    writer: &mut W,
) -> Result<RewriteStats> {
    let mut rewriter = Rewriter::new(map, JoinKey::idlist_reference(), OverlapPolicy::supp_vec());
    rewriter.rewrite(merged, writer)?;
    Ok(rewriter.stats)
}

pub fn merge_main(args: MergeArgs) -> Result<RewriteStats> {
    let profile = args.reference.load(Some(RefDb::Colors))?;
    let map = AnnotationMapBuilder::new(profile, JoinKey::IdColumn)
        .read(open_vcf(&args.colorsdb_vcf)?)?
        .build();

    let mut writer = open_output(&args.output_vcf)?;
    let stats = annotate_merge(&map, open_vcf(&args.merged_vcf)?, &mut writer)?;
    writer.flush()?;

    if stats.skipped != 0 {
        warn!("{} reference-only records were not written", stats.skipped);
    }
    info!(
        "{} matched, {} without a match",
        stats.matched, stats.defaulted
    );
    Ok(stats)
}

#[macro_use]
extern crate log;

mod sjlib;
pub use self::{
    sjlib::add_sample_columns, sjlib::add_sample_main, sjlib::annotate_bench,
    sjlib::annotate_merge, sjlib::bench_main, sjlib::filter_known, sjlib::filter_main,
    sjlib::merge_main, sjlib::namespace_info_line, sjlib::open_output, sjlib::open_vcf,
    sjlib::AddSampleArgs, sjlib::AnnotationMap, sjlib::AnnotationMapBuilder, sjlib::BenchArgs,
    sjlib::Cli, sjlib::Commands, sjlib::FilterArgs, sjlib::FilterCounts, sjlib::HeaderSelection,
    sjlib::InfoField, sjlib::InfoItem, sjlib::JoinKey, sjlib::LineKind, sjlib::MergeArgs,
    sjlib::OverlapPolicy, sjlib::PositionalSet, sjlib::Record, sjlib::RefDb,
    sjlib::ReferenceParams, sjlib::ReferenceProfile, sjlib::Result, sjlib::RewriteStats,
    sjlib::Rewriter, sjlib::SvjoinError, sjlib::SvjoinParams, sjlib::VcfLines,
};

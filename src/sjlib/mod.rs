mod annomap;
pub use crate::sjlib::annomap::{AnnotationMap, AnnotationMapBuilder};

mod bench;
pub use crate::sjlib::bench::{annotate_bench, bench_main};

mod cli;
pub use crate::sjlib::cli::{
    AddSampleArgs, BenchArgs, Cli, Commands, FilterArgs, MergeArgs, ReferenceParams, SvjoinParams,
};

mod errors;
pub use crate::sjlib::errors::{Result, SvjoinError};

mod filter;
pub use crate::sjlib::filter::{filter_known, filter_main, FilterCounts, PositionalSet};

mod header;
pub use crate::sjlib::header::{namespace_info_line, HeaderCollector, HeaderSelection};

mod info;
pub use crate::sjlib::info::{InfoField, InfoItem};

mod joinkey;
pub use crate::sjlib::joinkey::JoinKey;

mod merge;
pub use crate::sjlib::merge::{annotate_merge, merge_main};

mod profile;
pub use crate::sjlib::profile::{RefDb, ReferenceProfile};

mod record;
pub use crate::sjlib::record::{LineKind, Record};

mod rewriter;
pub use crate::sjlib::rewriter::{OverlapPolicy, RewriteStats, Rewriter};

mod sample_columns;
pub use crate::sjlib::sample_columns::{add_sample_columns, add_sample_main};

mod vcfreader;
pub use crate::sjlib::vcfreader::{open_vcf, VcfLines};

mod vcfwriter;
pub use crate::sjlib::vcfwriter::{open_output, write_line};

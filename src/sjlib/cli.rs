use crate::sjlib::{RefDb, ReferenceProfile, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(name = "svjoin")]
#[command(about = "Join population reference annotations onto SV VCFs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

pub trait SvjoinParams: std::fmt::Debug {
    fn validate(&self) -> bool;
    fn debug(&self) -> bool;
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(about = "Annotate a jasmine merge of a sample and a reference VCF")]
    Merge(MergeArgs),

    #[command(about = "Annotate truvari bench output with its base VCF's annotations")]
    Bench(BenchArgs),

    #[command(about = "Add a FORMAT and blank SAMPLE column to a sites-only VCF")]
    AddSample(AddSampleArgs),

    #[command(about = "Remove variants present in a reference VCF")]
    Filter(FilterArgs),
}

/// Reference annotation set selection shared by the annotating subcommands
#[derive(clap::Args, Clone, Debug)]
pub struct ReferenceParams {
    /// Name of a built-in reference SV set
    #[arg(short = 'r', long, value_enum, help_heading = "Reference")]
    pub reference_db: Option<RefDb>,

    /// JSON reference profile (name, prefix, fields, header_only)
    #[arg(long, help_heading = "Reference")]
    pub profile: Option<PathBuf>,
}

impl ReferenceParams {
    fn validate(&self, fallback: Option<RefDb>) -> bool {
        match (&self.reference_db, &self.profile) {
            (Some(_), Some(_)) => {
                error!("--reference-db and --profile are mutually exclusive");
                false
            }
            (None, None) if fallback.is_none() => {
                error!("one of --reference-db or --profile is required");
                false
            }
            (_, Some(path)) => validate_file(path, "--profile"),
            _ => true,
        }
    }

    /// Resolve to a profile, using `fallback` when nothing was given
    pub fn load(&self, fallback: Option<RefDb>) -> Result<ReferenceProfile> {
        if let Some(path) = &self.profile {
            return ReferenceProfile::from_path(path);
        }
        let db = self.reference_db.or(fallback).unwrap_or(RefDb::Colors);
        Ok(ReferenceProfile::builtin(db))
    }
}

#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// jasmine merged VCF of the sample and the reference
    #[arg(short, long)]
    pub merged_vcf: PathBuf,

    /// Reference VCF used in the jasmine merge
    #[arg(short, long)]
    pub colorsdb_vcf: PathBuf,

    /// Output VCF (.gz for bgzf, default stdout)
    #[arg(short, long)]
    pub output_vcf: Option<PathBuf>,

    #[command(flatten)]
    pub reference: ReferenceParams,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl SvjoinParams for MergeArgs {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        let mut is_ok = true;
        is_ok &= validate_file(&self.merged_vcf, "--merged-vcf");
        is_ok &= validate_file(&self.colorsdb_vcf, "--colorsdb-vcf");
        is_ok &= self.reference.validate(Some(RefDb::Colors));
        is_ok
    }
}

pub const TP_BASE: &str = "tp-base.vcf.gz";
pub const TP_COMP: &str = "tp-comp.vcf.gz";
pub const FP: &str = "fp.vcf.gz";

#[derive(Parser, Debug, Clone)]
pub struct BenchArgs {
    /// truvari bench output directory
    #[arg(short, long)]
    pub indir: PathBuf,

    /// Output VCF (.gz for bgzf, default stdout)
    #[arg(short, long)]
    pub output_vcf: Option<PathBuf>,

    #[command(flatten)]
    pub reference: ReferenceParams,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl BenchArgs {
    pub fn tp_base(&self) -> PathBuf {
        self.indir.join(TP_BASE)
    }

    pub fn tp_comp(&self) -> PathBuf {
        self.indir.join(TP_COMP)
    }

    pub fn fp(&self) -> PathBuf {
        self.indir.join(FP)
    }
}

impl SvjoinParams for BenchArgs {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        if !self.indir.is_dir() {
            error!("--indir is not a directory");
            return false;
        }

        let mut is_ok = true;
        is_ok &= validate_file(&self.tp_base(), TP_BASE);
        is_ok &= validate_file(&self.tp_comp(), TP_COMP);
        is_ok &= validate_file(&self.fp(), FP);
        is_ok &= self.reference.validate(None);
        is_ok
    }
}

#[derive(Parser, Debug, Clone)]
pub struct AddSampleArgs {
    /// Input VCF without sample columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output VCF (.gz for bgzf, default stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the added sample column
    #[arg(long, default_value = "SAMPLE")]
    pub sample: String,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl SvjoinParams for AddSampleArgs {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        let mut is_ok = validate_file(&self.input, "--input");
        if self.sample.is_empty() || self.sample.contains(char::is_whitespace) {
            error!("--sample must be a non-empty name without whitespace");
            is_ok = false;
        }
        is_ok
    }
}

#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    /// VCF to filter
    #[arg(short, long)]
    pub input_vcf: PathBuf,

    /// Filtered VCF (.gz for bgzf, default stdout)
    #[arg(short, long)]
    pub output_vcf: Option<PathBuf>,

    /// Reference VCF whose variants are removed from --input-vcf
    #[arg(short, long)]
    pub colors: PathBuf,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl SvjoinParams for FilterArgs {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        let mut is_ok = true;
        is_ok &= validate_file(&self.input_vcf, "--input-vcf");
        is_ok &= validate_file(&self.colors, "--colors");
        is_ok
    }
}

/// Helper function to validate a file's existence and type
fn validate_file(path: &Path, label: &str) -> bool {
    if !path.exists() {
        error!("{} does not exist", label);
        return false;
    }
    if !path.is_file() {
        error!("{} is not a file", label);
        return false;
    }
    true
}

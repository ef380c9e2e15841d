extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use svjoin::{
    add_sample_main, bench_main, filter_main, merge_main, Cli, Commands, SvjoinError,
    SvjoinParams,
};

fn setup<T: SvjoinParams>(args: &T) {
    let level = if args.debug() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    info!("starting");
    info!("params: {:#?}", args);
    if !args.validate() {
        error!("please fix arguments");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), SvjoinError> {
    match command {
        Commands::Merge(args) => {
            setup(&args);
            merge_main(args)?;
        }
        Commands::Bench(args) => {
            setup(&args);
            bench_main(args)?;
        }
        Commands::AddSample(args) => {
            setup(&args);
            add_sample_main(args)?;
        }
        Commands::Filter(args) => {
            setup(&args);
            let to_stdout = args.output_vcf.is_none();
            let counts = filter_main(args)?;
            // Counts would interleave with records written to stdout
            if !to_stdout {
                println!("Kept variants: {}", counts.kept);
                println!("Filtered variants: {}", counts.filtered);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();
    if let Err(e) = run(args.command) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("finished");
}

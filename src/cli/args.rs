// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// mutoverlap - Mutation co-occurrence statistics for a chromosome and population
pub struct Args {
    /// chromosome to analyse (1-22)
    #[argh(option, short = 'c')]
    pub chromosome: Option<u8>,

    /// population membership file (one individual per line); its file name labels the outputs
    #[argh(option)]
    pub population: Option<String>,

    /// column-order file whose header lists individuals after 9 metadata columns (default: columns.txt)
    #[argh(option)]
    pub columns: Option<String>,

    /// filtered-variant file (default: sifted.SIFT.chr<chr>.txt)
    #[argh(option)]
    pub variants: Option<String>,

    /// directory of per-individual mutation files named chr<chr>.<individual> (default: chr<chr>n)
    #[argh(option)]
    pub individuals_dir: Option<String>,

    /// output directory for result files (default: output_no_sift)
    #[argh(option)]
    pub output_dir: Option<String>,

    /// analysis to run: overlap, frequency, all (default: all)
    #[argh(option)]
    pub analysis: Option<String>,

    /// number of Monte-Carlo runs (default: 1000)
    #[argh(option)]
    pub runs: Option<usize>,

    /// individuals drawn per Monte-Carlo run (default: 52)
    #[argh(option)]
    pub draw_budget: Option<usize>,

    /// number of random-pair overlap runs and mutation-count samples, 0 disables both (default: 1)
    #[argh(option)]
    pub pair_runs: Option<usize>,

    /// individuals picked for the random mutation-count sample (default: 26)
    #[argh(option)]
    pub sample_groups: Option<usize>,

    /// keep only variants whose SIFT score is at or below this value (default: no filter)
    #[argh(option)]
    pub sift_threshold: Option<f32>,

    /// seed for the random generator (default: operating-system entropy)
    #[argh(option)]
    pub seed: Option<u64>,

    /// number of threads for the pairwise matrix (default: 1)
    #[argh(option)]
    pub threads: Option<usize>,

    /// validate inputs and load the cohort without computing or writing results
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

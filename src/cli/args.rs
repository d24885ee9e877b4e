// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_SEP: &str = "\t";
pub const DEFAULT_QUOTE: &str = "\"";
pub const DEFAULT_METRIC: &str = "count";
pub const DEFAULT_LAYOUT: &str = "square";
pub const DEFAULT_ORDER: &str = "loaded";
pub const DEFAULT_FORMAT: &str = "phylip";

#[derive(FromArgs, Debug)]
/// mlstdist - pairwise distance matrix from an MLST allele-call table
pub struct Args {
    /// allelic profile table; first column holds sample identifiers
    #[argh(positional)]
    pub input: Option<String>,

    /// input field separator, "\t" or "tab" for tab (default: tab)
    #[argh(option, short = 's', default = "String::from(DEFAULT_SEP)")]
    pub sep: String,

    /// input quote character (default: ")
    #[argh(option, short = 'q', default = "String::from(DEFAULT_QUOTE)")]
    pub quote: String,

    /// comma-separated column labels to exclude, on top of ST and clonal_complex
    #[argh(option, short = 'e')]
    pub exclude: Option<String>,

    /// exclude loci whose name matches this regex pattern
    #[argh(option)]
    pub exclude_loci: Option<String>,

    /// distance metric: count (alias absolute), proportion (default: count)
    #[argh(option, short = 'm', default = "String::from(DEFAULT_METRIC)")]
    pub metric: String,

    /// matrix layout: square, triangular (default: square)
    #[argh(option, short = 'f', default = "String::from(DEFAULT_LAYOUT)")]
    pub layout: String,

    /// row order: loaded, sorted (default: loaded)
    #[argh(option, default = "String::from(DEFAULT_ORDER)")]
    pub order: String,

    /// output format: phylip, tsv (default: phylip)
    #[argh(option, default = "String::from(DEFAULT_FORMAT)")]
    pub output_format: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// show a progress bar on stderr while computing
    #[argh(switch)]
    pub progress: bool,

    /// log warnings and errors only
    #[argh(switch)]
    pub quiet: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{CategoryArg, DateRangeArg, OutputFormat, PriceArg, SortArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `carefind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "carefind",
	version,
	long_version = long_version(),
	about = "Search articles, services, helpers and marketplace listings",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CAREFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load searchable items from a JSON array (default: built-in sample catalog)"
	)]
	pub(crate) corpus: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search query; at least two characters after trimming (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 's',
		long,
		value_enum,
		help = "Result ordering (default: relevance)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(
		short = 'd',
		long = "date-range",
		value_enum,
		help = "Only include items created inside this window (default: all-time)"
	)]
	pub(crate) date_range: Option<DateRangeArg>,
	#[arg(
		short = 'p',
		long,
		value_enum,
		help = "Only include items of this price tier (default: all)"
	)]
	pub(crate) price: Option<PriceArg>,
	#[arg(
		short = 'C',
		long,
		value_enum,
		help = "Show a single category in full instead of previews (default: all)"
	)]
	pub(crate) category: Option<CategoryArg>,
	#[arg(
		long = "preview-limit",
		value_name = "NUM",
		help = "Results shown per category when every category is listed (default: 5)"
	)]
	pub(crate) preview_limit: Option<usize>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a query is evaluated (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long,
		help = "Record the query in the search history and select the top result (default: disabled)"
	)]
	pub(crate) commit: bool,
	#[arg(
		long = "history",
		help = "Print recent searches and suggestions, then exit (default: disabled)"
	)]
	pub(crate) show_history: bool,
	#[arg(
		long = "clear-history",
		help = "Forget every recorded search, then exit (default: disabled)"
	)]
	pub(crate) clear_history: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short,
		long,
		action = ArgAction::Count,
		help = "Increase log verbosity; repeat for more detail (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

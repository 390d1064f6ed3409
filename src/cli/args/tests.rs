use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::{CategoryArg, DateRangeArg, SortArg};
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["carefind"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.verbose, 0);
	assert!(parsed.query.is_none());
}

#[test]
fn facet_flags_use_wire_identifiers() {
	let parsed = CliArgs::parse_from([
		"carefind",
		"-q",
		"consultation",
		"--sort",
		"newest",
		"--date-range",
		"last-7-days",
		"--category",
		"marketplace",
		"-vv",
	]);
	assert_eq!(parsed.sort, Some(SortArg::Newest));
	assert_eq!(parsed.date_range, Some(DateRangeArg::Last7Days));
	assert_eq!(parsed.category, Some(CategoryArg::MarketplaceListing));
	assert_eq!(parsed.verbose, 2);
	assert_eq!(DateRangeArg::Last30Days.as_str(), "last-30-days");
}

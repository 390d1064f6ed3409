mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use carefind::logging;
use cli::{OutputFormat, parse_cli, print_history, print_json, print_plain};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let mut workflow = SearchWorkflow::from_config(resolved)?;

	if cli.clear_history {
		workflow.clear_history();
		return Ok(());
	}

	if cli.show_history {
		return print_history(
			workflow.history(),
			workflow.popular_searches(),
			cli.output == OutputFormat::Json,
		);
	}

	let report = workflow.run(cli.commit);
	match cli.output {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}

use log::info;

mod cli;
mod clock;
mod engine;
mod error;
mod protocol;
mod record;
mod runner;
mod side;
mod summary;
#[cfg(test)]
mod testutil;
mod tournament;

fn main() -> std::io::Result<()> {
    if let Ok(logger) = flexi_logger::Logger::try_with_env_or_str("warn") {
        logger.start().ok();
    }

    let Some(cli_options) = cli::parse() else {
        return Ok(());
    };
    info!("{:#?}", &cli_options);

    let engine_names = cli_options.engine_names();

    let mut tournament: Box<dyn tournament::Tournament> =
        Box::new(tournament::Alternating::new(cli_options.games));

    if let Some(records) = &cli_options.records {
        tournament = Box::new(tournament::RecordOutWrapper::new(
            tournament,
            records,
            engine_names.clone(),
        )?);
    }

    tournament = Box::new(tournament::ReporterWrapper::new(tournament, engine_names));

    let [candidate, baseline] = cli_options.engines;
    let adapter = engine::ProcessAdapter::new(candidate, baseline, cli_options.timeout);
    let mut r = runner::Runner::new(adapter, cli_options.protocol, cli_options.max_moves);
    let report = r.run(tournament.as_mut());

    if let Some(fault) = report.aborted {
        eprintln!(
            "Tournament stopped early by the {} engine: {fault}",
            fault.identity()
        );
    }
    if report.summary.is_err() {
        eprintln!("No games were completed.");
    }

    Ok(())
}

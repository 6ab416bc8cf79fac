use std::{error::Error, fs, path::Path};

use log::{info, warn};
use simple_logger::SimpleLogger;
use wealth::{
    batch::run_batch,
    config::RunConfig,
    report::*,
    sim::{Agent, Population, WealthModel},
    space::Located,
    Real,
};

const CONFIG_PATH: &str = "conf.toml";

fn read_config(path: &Path) -> Result<RunConfig, Box<dyn Error>> {
    if !path.exists() {
        info!("{} not found, using default parameters", path.display());
        return Ok(RunConfig::default());
    }
    let data = fs::read_to_string(path)?;
    Ok(RunConfig::from_toml_str(&data)?)
}

pub fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().init()?;

    let cfg = read_config(Path::new(CONFIG_PATH))?;
    if cfg.verbose() {
        println!("{:#?}", cfg);
    }

    let mut model = WealthModel::new(&cfg.model())?;
    model.run(cfg.steps());

    println!("Total Wealth Over Time:");
    let totals = total_wealth_by_step(model.records());
    for (step, total) in &totals {
        println!("{:>4}: {}", step, total);
    }

    let rich = agent_history(model.records(), model.rich());
    let series: Vec<Real> = rich.iter().map(|(_, w)| *w as Real).collect();
    println!("\nRich agent wealth:");
    print!("{}", plot_vbars(&series, 10));

    println!("\nFinal wealth distribution (R = rich agent):");
    print!("{}", render_ascii_map(model.grid(), model.agents()));
    println!(
        "rich agent: {} at {:?}, transfers: {}, gini: {:.3}",
        model.rich_agent().wealth(),
        model.rich_agent().pos(),
        model.transfers(),
        gini(&model.population().wealths())
    );

    if let Some(path) = cfg.records_csv() {
        to_file(path, |f| write_records(f, model.records()))?;
    }
    if let Some(path) = cfg.totals_csv() {
        to_file(path, |f| write_totals(f, model.records()))?;
    }
    if let Some(path) = cfg.distribution_csv() {
        to_file(path, |f| write_distribution(f, model.agents()))?;
    }

    if !cfg.replicates().is_empty() {
        let summaries = run_batch(&cfg.model(), cfg.replicates(), cfg.steps())?;
        println!("\nReplicates:");
        let rows: Vec<(u64, Real)> = summaries.iter().map(|s| (s.seed, s.gini)).collect();
        print!("{}", plot_hbars(&rows, 40));
        for s in &summaries {
            if s.total_wealth != model.config().initial_wealth() {
                warn!("replicate {} did not conserve wealth", s.seed);
            }
            println!(
                "seed {:>6}: rich = {:>3}, transfers = {:>4}, gini = {:.3}",
                s.seed, s.rich_wealth, s.transfers, s.gini
            );
        }
    }
    Ok(())
}

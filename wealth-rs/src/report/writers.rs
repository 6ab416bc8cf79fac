use super::{final_distribution, total_wealth_by_step};
use crate::{
    prelude::{Agent, Record},
    Time, Wealth,
};
use serde::Serialize;
use std::{fs::File, io, path::Path};

#[derive(Debug, Serialize)]
struct TotalRow {
    step: Time,
    total_wealth: Wealth,
}

/// Write serializable rows as CSV, header included.
pub fn write_rows<W, T>(out: W, rows: impl IntoIterator<Item = T>) -> csv::Result<()>
where
    W: io::Write,
    T: Serialize,
{
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One `step,agent,wealth` row per record.
pub fn write_records<W: io::Write>(out: W, records: &[Record]) -> csv::Result<()> {
    write_rows(out, records)
}

/// One `step,total_wealth` row per step.
pub fn write_totals<W: io::Write>(out: W, records: &[Record]) -> csv::Result<()> {
    let rows = total_wealth_by_step(records)
        .into_iter()
        .map(|(step, total_wealth)| TotalRow { step, total_wealth });
    write_rows(out, rows)
}

/// One `id,x,y,wealth,privileged` row per agent.
pub fn write_distribution<W: io::Write, A: Agent>(out: W, agents: &[A]) -> csv::Result<()> {
    write_rows(out, final_distribution(agents))
}

/// Create the file at path and pass it to one of the writers above.
pub fn to_file<P, F>(path: P, write: F) -> csv::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(File) -> csv::Result<()>,
{
    let file = File::create(path)?;
    write(file)
}

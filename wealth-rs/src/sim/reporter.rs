use super::Population;
use crate::Time;

/// Trait that implements a method that temporarily scans the population and
/// performs some action like collecting statistics, emitting signals, etc.
///
/// Reporters only receive shared references: they observe the model and must
/// never mutate it. Closures can be used as reporters by wrapping them in
/// [`FnReporter`].
pub trait Reporter<P> {
    /// Process the population at the start of step n.
    fn process(&mut self, n: Time, population: &P);
}

/// A GrowableReporter can include arbitrary reporters that execute during the
/// reporting phase.
pub trait GrowableReporter<P>: Reporter<P> {
    /// Register a reporter to be called every n_steps.
    fn register_reporter(&mut self, n_steps: usize, reporter: Box<dyn Reporter<P>>);
}

/// Wrapper that turns a `FnMut(Time, &P)` into a reporter.
pub struct FnReporter<F>(pub F);

/// A list of reporters, each one executed every n steps.
pub struct ReporterList<P> {
    reporters: Vec<(usize, Box<dyn Reporter<P>>)>,
}

impl<P> ReporterList<P> {
    pub fn new() -> Self {
        ReporterList { reporters: vec![] }
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl<P> Default for ReporterList<P> {
    fn default() -> Self {
        Self::new()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Reporter instances
/////////////////////////////////////////////////////////////////////////////

impl<P, F> Reporter<P> for FnReporter<F>
where
    P: Population,
    F: FnMut(Time, &P),
{
    fn process(&mut self, n: Time, population: &P) {
        (self.0)(n, population)
    }
}

impl<P> Reporter<P> for ()
where
    P: Population,
{
    fn process(&mut self, _n: Time, _population: &P) {}
}

impl<P, R1, R2> Reporter<P> for (R1, R2)
where
    P: Population,
    R1: Reporter<P>,
    R2: Reporter<P>,
{
    fn process(&mut self, n: Time, population: &P) {
        self.0.process(n, population);
        self.1.process(n, population);
    }
}

impl<P> Reporter<P> for ReporterList<P>
where
    P: Population,
{
    fn process(&mut self, n: Time, population: &P) {
        for (every, r) in self.reporters.iter_mut() {
            if *every != 0 && (n as usize) % *every == 0 {
                r.process(n, population);
            }
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Growable Reporter instances
/////////////////////////////////////////////////////////////////////////////

impl<P> GrowableReporter<P> for ReporterList<P>
where
    P: Population,
{
    fn register_reporter(&mut self, n_steps: usize, reporter: Box<dyn Reporter<P>>) {
        self.reporters.push((n_steps, reporter));
    }
}

impl<P, R1, R2> GrowableReporter<P> for (R1, R2)
where
    P: Population,
    R1: Reporter<P>,
    R2: GrowableReporter<P>,
{
    fn register_reporter(&mut self, n_steps: usize, reporter: Box<dyn Reporter<P>>) {
        self.1.register_reporter(n_steps, reporter);
    }
}

use std::{fmt::Display, io::Write};

use crate::{
    compute::Compute, particles::Particles, Error, ForceEvaluation, PairPotential, Simulation,
};

/// How often a run samples and reports
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    /// Record a snapshot and the observables every `every` steps
    pub every: usize,
    /// Log progress every `report_every` steps, on sampled steps only
    pub report_every: usize,
}
impl Output {
    pub fn new(every: usize, report_every: usize) -> Result<Self, Error> {
        if every == 0 || report_every == 0 {
            return Err(Error::ConfigError(format!(
                "Output intervals should be positive, found every = {} and report_every = {}",
                every, report_every
            )));
        }
        Ok(Self {
            every,
            report_every,
        })
    }
    pub fn should_sample(&self, step: usize) -> bool {
        step % self.every == 0
    }
    pub fn should_report(&self, step: usize) -> bool {
        self.should_sample(step) && step % self.report_every == 0
    }
}
impl Default for Output {
    fn default() -> Self {
        Self {
            every: 50,
            report_every: 2000,
        }
    }
}

/// Scalar observables at one sampled time
#[derive(Clone, Debug, PartialEq)]
pub struct Observables {
    pub time: f64,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub pressure: f64,
}
impl Observables {
    /// Observable columns, in record order after the time
    pub const COLUMNS: [Compute; 4] = [
        Compute::KineticEnergy,
        Compute::PotentialEnergy,
        Compute::TotalEnergy,
        Compute::Pressure,
    ];

    pub fn sample<A>(sim: &Simulation<A>, evaluation: &ForceEvaluation, time: f64) -> Self
    where
        A: PairPotential,
    {
        let [ke, pe, te, p] = Self::COLUMNS.map(|c| c.compute(sim, evaluation));
        Self {
            time,
            kinetic_energy: ke,
            potential_energy: pe,
            total_energy: te,
            pressure: p,
        }
    }

    /// Header line of an observable record, without the newline
    pub fn header() -> String {
        let mut header = String::from("time");
        for c in Self::COLUMNS {
            header.push(' ');
            header.push_str(c.name());
        }
        header
    }
}
impl Display for Observables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.8e} {:.8e} {:.8e} {:.8e} {:.8e}",
            self.time, self.kinetic_energy, self.potential_energy, self.total_energy, self.pressure
        )
    }
}

/// Write one snapshot line: the time, then `x y vx vy` for every particle
pub fn write_snapshot<W: Write>(out: &mut W, time: f64, particles: &Particles) -> Result<(), Error> {
    write!(out, "{:.6}", time)?;
    for p in particles {
        write!(
            out,
            " {:.6} {:.6} {:.6} {:.6}",
            p.position.x, p.position.y, p.velocity.x, p.velocity.y
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// Consumer of the records a run produces
pub trait Recorder {
    fn record_snapshot(&mut self, time: f64, particles: &Particles) -> Result<(), Error>;
    fn record_observables(&mut self, observables: &Observables) -> Result<(), Error>;
}

/// Writes snapshots and observables as whitespace-separated text
pub struct FileRecorder<S: Write, O: Write> {
    snapshots: S,
    observables: O,
}
impl<S: Write, O: Write> FileRecorder<S, O> {
    /// Wrap two writers; the observables header is written immediately
    pub fn new(snapshots: S, mut observables: O) -> Result<Self, Error> {
        writeln!(observables, "{}", Observables::header())?;
        Ok(Self {
            snapshots,
            observables,
        })
    }
    pub fn flush(&mut self) -> Result<(), Error> {
        self.snapshots.flush()?;
        self.observables.flush()?;
        Ok(())
    }
    pub fn into_inner(self) -> (S, O) {
        (self.snapshots, self.observables)
    }
}
impl<S: Write, O: Write> Recorder for FileRecorder<S, O> {
    fn record_snapshot(&mut self, time: f64, particles: &Particles) -> Result<(), Error> {
        write_snapshot(&mut self.snapshots, time, particles)
    }
    fn record_observables(&mut self, observables: &Observables) -> Result<(), Error> {
        writeln!(self.observables, "{}", observables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Vector2;

    #[test]
    fn snapshot_line_layout() {
        let mut particles = Particles::new();
        particles.add_particles(vec![Vector2::new(0.25, 0.5), Vector2::new(0.75, 0.125)], 1.0, 0.0);
        let mut buf: Vec<u8> = Vec::new();
        write_snapshot(&mut buf, 0.5, &particles).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(
            line,
            "0.500000 0.250000 0.500000 0.000000 0.000000 0.750000 0.125000 0.000000 0.000000\n"
        );
    }

    #[test]
    fn observables_header_and_fields() {
        assert_eq!(Observables::header(), "time E_kin E_pot E_tot pressure");
        let obs = Observables {
            time: 0.1,
            kinetic_energy: 2.0,
            potential_energy: -1.0,
            total_energy: 1.0,
            pressure: 3.5,
        };
        let mut recorder = FileRecorder::new(Vec::<u8>::new(), Vec::<u8>::new()).unwrap();
        recorder.record_observables(&obs).unwrap();
        let (_, observables) = recorder.into_inner();
        let text = String::from_utf8(observables).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let values: Vec<f64> = lines[1]
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values, vec![0.1, 2.0, -1.0, 1.0, 3.5]);
    }

    #[test]
    fn sampling_schedule() {
        let output = Output::new(50, 2000).unwrap();
        assert!(output.should_sample(0));
        assert!(!output.should_sample(49));
        assert!(output.should_sample(100));
        assert!(output.should_report(4000));
        assert!(!output.should_report(2050));
        assert!(Output::new(0, 10).is_err());
    }
}

//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use tonal::{Interval, Pitch};

fn read_pitch(text: &str) -> Result<Pitch> {
    Pitch::new(text).with_context(|| format!("Expected a pitch like C#4 or Bb, got '{}'", text))
}

fn read_interval(text: &str) -> Result<Interval> {
    Interval::new(text)
        .with_context(|| format!("Expected an interval like M3 or P5, got '{}'", text))
}

/// Print a report as text or pretty JSON
pub fn emit<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PitchReport {
    pub pitch: Pitch,
    pub step: i32,
    pub pitch_class: i32,
    pub index: usize,
    pub octave: Option<u8>,
}

impl fmt::Display for PitchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pitch:       {}", self.pitch)?;
        writeln!(f, "step:        {}", self.step)?;
        writeln!(f, "pitch class: {}", self.pitch_class)?;
        write!(f, "index:       {}", self.index)?;
        if let Some(octave) = self.octave {
            write!(f, "\noctave:      {}", octave)?;
        }
        Ok(())
    }
}

pub fn describe_pitch(text: &str) -> Result<PitchReport> {
    let pitch = read_pitch(text)?;
    Ok(PitchReport {
        pitch,
        step: pitch.step(),
        pitch_class: pitch.pitch_class(),
        index: pitch.index(),
        octave: pitch.octave(),
    })
}

#[derive(Debug, Serialize)]
pub struct IntervalReport {
    pub interval: Interval,
    pub step: i64,
    pub compound: bool,
    pub single_octave: Interval,
    pub inverted: Interval,
}

impl fmt::Display for IntervalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "interval:      {}", self.interval)?;
        writeln!(f, "step:          {}", self.step)?;
        writeln!(f, "compound:      {}", self.compound)?;
        writeln!(f, "single octave: {}", self.single_octave)?;
        write!(f, "inverted:      {}", self.inverted)
    }
}

pub fn describe_interval(text: &str) -> Result<IntervalReport> {
    let interval = read_interval(text)?;
    Ok(IntervalReport {
        interval,
        step: interval.step(),
        compound: interval.is_compound(),
        single_octave: interval.single_octave(),
        inverted: interval.inverted(),
    })
}

#[derive(Debug, Serialize)]
pub struct TransposeReport {
    pub from: Pitch,
    pub interval: Interval,
    pub direction: Direction,
    pub to: Pitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for TransposeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.direction {
            Direction::Up => '+',
            Direction::Down => '-',
        };
        write!(f, "{} {} {} = {}", self.from, sign, self.interval, self.to)
    }
}

pub fn transpose_up(pitch: &str, interval: &str) -> Result<TransposeReport> {
    let from = read_pitch(pitch)?;
    let interval = read_interval(interval)?;
    let to = from
        .add(&interval)
        .with_context(|| format!("Cannot transpose {} up by {}", from, interval))?;
    Ok(TransposeReport {
        from,
        interval,
        direction: Direction::Up,
        to,
    })
}

pub fn transpose_down(pitch: &str, interval: &str) -> Result<TransposeReport> {
    let from = read_pitch(pitch)?;
    let interval = read_interval(interval)?;
    let to = from
        .subtract(&interval)
        .with_context(|| format!("Cannot transpose {} down by {}", from, interval))?;
    Ok(TransposeReport {
        from,
        interval,
        direction: Direction::Down,
        to,
    })
}

#[derive(Debug, Serialize)]
pub struct BetweenReport {
    pub from: Pitch,
    pub to: Pitch,
    pub interval: Interval,
    pub step: i64,
}

impl fmt::Display for BetweenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} = {} ({} semitones)",
            self.from, self.to, self.interval, self.step
        )
    }
}

pub fn between(from: &str, to: &str) -> Result<BetweenReport> {
    let from = read_pitch(from)?;
    let to = read_pitch(to)?;
    let interval = from
        .interval_to(&to)
        .with_context(|| format!("Cannot name the interval from {} to {}", from, to))?;
    Ok(BetweenReport {
        from,
        to,
        interval,
        step: interval.step(),
    })
}

#[derive(Debug, Serialize)]
pub struct CombineReport {
    pub first: Interval,
    pub second: Interval,
    pub combined: Interval,
}

impl fmt::Display for CombineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.first, self.second, self.combined)
    }
}

pub fn combine(first: &str, second: &str) -> Result<CombineReport> {
    let first = read_interval(first)?;
    let second = read_interval(second)?;
    let combined = first
        .combine(&second)
        .with_context(|| format!("Cannot stack {} and {}", first, second))?;
    Ok(CombineReport {
        first,
        second,
        combined,
    })
}

#[derive(Debug, Serialize)]
pub struct SortReport {
    pub pitches: Vec<Pitch>,
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.pitches.iter().map(Pitch::to_string).collect();
        write!(f, "{}", names.join(" "))
    }
}

/// Stable sort, so enharmonic spellings keep their input order
pub fn sort(texts: &[String]) -> Result<SortReport> {
    let mut pitches = texts
        .iter()
        .map(|text| read_pitch(text))
        .collect::<Result<Vec<_>>>()?;
    pitches.sort_by(Pitch::compare);
    tracing::debug!(count = pitches.len(), "sorted pitches");
    Ok(SortReport { pitches })
}

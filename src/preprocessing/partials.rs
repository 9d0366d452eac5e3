use ndarray::{Array2, ArrayView2};

use crate::constants::{AMPLITUDE, FREQUENCY, TIME, VALUES_PER_SAMPLE};
use crate::postprocessing::helpers::ported::numpy::column_mean;

/// One point of a partial's trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub frequency: f64,
    pub amplitude: f64,
}

/// A partial: one or more samples, kept in the order they were read.
///
/// Samples are stored as an `n x 3` matrix with time, frequency and amplitude columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Partial {
    samples: Array2<f64>,
}

impl Partial {
    pub fn len(&self) -> usize {
        self.samples.nrows()
    }

    pub fn view(&self) -> ArrayView2<f64> {
        self.samples.view()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.samples.rows().into_iter().map(|row| Sample {
            time: row[TIME],
            frequency: row[FREQUENCY],
            amplitude: row[AMPLITUDE],
        })
    }

    pub fn start_time(&self) -> f64 {
        self.samples[[0, TIME]]
    }

    pub fn end_time(&self) -> f64 {
        self.samples[[self.len() - 1, TIME]]
    }

    pub fn mean_frequency(&self) -> f64 {
        column_mean(self.view(), FREQUENCY).unwrap_or(f64::NAN)
    }

    pub fn mean_amplitude(&self) -> f64 {
        column_mean(self.view(), AMPLITUDE).unwrap_or(f64::NAN)
    }
}

/// Parses a line of time, frequency and amplitude data output by SPEAR in the
/// "text - partials" format.
///
/// # Arguments
///
/// * `line` - Whitespace separated numbers, a flat list of `time frequency amplitude` triples.
///
/// # Returns
///
/// * The partial, or a description of why the line is not one.
pub fn parse_partial(line: &str) -> Result<Partial, String> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("`{token}` is not a number"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    if values.is_empty() || values.len() % VALUES_PER_SAMPLE != 0 {
        return Err(format!(
            "expected a positive multiple of {VALUES_PER_SAMPLE} values, found {}",
            values.len()
        ));
    }

    let n_samples = values.len() / VALUES_PER_SAMPLE;
    let samples = Array2::from_shape_vec((n_samples, VALUES_PER_SAMPLE), values)
        .map_err(|e| e.to_string())?;

    Ok(Partial { samples })
}

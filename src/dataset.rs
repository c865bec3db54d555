//! # Labeled Data Sets
//!
//! A [`LabeledDataSet`] pairs an input vector with an integer class label.
//! Bit inputs use [`BinaryDataSet`], real-valued inputs use [`RealDataSet`].
//!
//! The loaders accept one record per line of whitespace separated tokens:
//!
//! - bit data: a contiguous digit string, one character per bit, then the label
//!   (`0101 1`);
//! - real data: any number of reals followed by the label (`0.25 3.5 0`).
//!
//! ## Example
//!
//! ```rust
//! use rulegen::dataset::{read_binary_data_sets, split_alternating};
//!
//! let raw = "000 0\n001 1\n010 1\n011 0\n";
//! let records = read_binary_data_sets(raw.as_bytes()).unwrap();
//! let (training, testing) = split_alternating(records);
//!
//! assert_eq!(training.len(), 2);
//! assert_eq!(testing.len(), 2);
//! assert_eq!(training[1].input, vec![0, 1, 0]);
//! ```

use std::io::BufRead;

use crate::error::{GeneticError, Result, ResultExt};

/// An input vector paired with its class label.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataSet<T> {
    pub input: Vec<T>,
    pub output: u8,
}

/// A bit vector record.
pub type BinaryDataSet = LabeledDataSet<u8>;

/// A real vector record.
pub type RealDataSet = LabeledDataSet<f64>;

impl<T> LabeledDataSet<T> {
    pub fn new(input: Vec<T>, output: u8) -> Self {
        Self { input, output }
    }

    /// Number of input values.
    pub fn width(&self) -> usize {
        self.input.len()
    }
}

/// Checks that `records` is non-empty and that every record has the same
/// input width. Returns that width.
pub fn ensure_uniform_width<T>(records: &[LabeledDataSet<T>]) -> Result<usize> {
    let first = records
        .first()
        .ok_or_else(|| GeneticError::DataFormat("Data set contains no records".to_string()))?;
    let width = first.width();
    if width == 0 {
        return Err(GeneticError::DataFormat(
            "Records must contain at least one input value".to_string(),
        ));
    }
    if let Some((index, record)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.width() != width)
    {
        return Err(GeneticError::DataFormat(format!(
            "Record {} has {} inputs, expected {}",
            index + 1,
            record.width(),
            width
        )));
    }
    Ok(width)
}

/// Checks both sets with [`ensure_uniform_width`] and that an optional
/// testing set has the training width. Returns the training width.
pub fn ensure_matching_widths<T>(
    training: &[LabeledDataSet<T>],
    testing: Option<&[LabeledDataSet<T>]>,
) -> Result<usize> {
    let input_len = ensure_uniform_width(training)?;
    if let Some(testing) = testing {
        let testing_len = ensure_uniform_width(testing)?;
        if testing_len != input_len {
            return Err(GeneticError::DataFormat(format!(
                "Testing records have {} inputs, training records have {}",
                testing_len, input_len
            )));
        }
    }
    Ok(input_len)
}

/// Splits records so that even-indexed ones train and odd-indexed ones test.
pub fn split_alternating<T>(records: Vec<LabeledDataSet<T>>) -> (Vec<LabeledDataSet<T>>, Vec<LabeledDataSet<T>>) {
    let mut training = Vec::with_capacity(records.len().div_ceil(2));
    let mut testing = Vec::with_capacity(records.len() / 2);
    for (index, record) in records.into_iter().enumerate() {
        if index % 2 == 0 {
            training.push(record);
        } else {
            testing.push(record);
        }
    }
    (training, testing)
}

fn parse_label(token: &str, line_number: usize) -> Result<u8> {
    token.parse::<u8>().map_err(|_| {
        GeneticError::DataFormat(format!("Line {}: invalid label '{}'", line_number, token))
    })
}

/// Parses one bit record such as `0110 1`.
pub fn parse_binary_line(line: &str, line_number: usize) -> Result<BinaryDataSet> {
    let mut tokens = line.split_whitespace();
    let (bits, label) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(bits), Some(label), None) => (bits, label),
        _ => {
            return Err(GeneticError::DataFormat(format!(
                "Line {}: expected '<bits> <label>'",
                line_number
            )))
        }
    };

    let input = bits
        .chars()
        .map(|c| {
            c.to_digit(10).map(|digit| digit as u8).ok_or_else(|| {
                GeneticError::DataFormat(format!(
                    "Line {}: invalid bit '{}'",
                    line_number, c
                ))
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(BinaryDataSet::new(input, parse_label(label, line_number)?))
}

/// Parses one real record such as `0.5 1.25 0`.
pub fn parse_real_line(line: &str, line_number: usize) -> Result<RealDataSet> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (label, values) = match tokens.split_last() {
        Some((label, values)) if !values.is_empty() => (label, values),
        _ => {
            return Err(GeneticError::DataFormat(format!(
                "Line {}: expected '<value>... <label>'",
                line_number
            )))
        }
    };

    let input = values
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                GeneticError::DataFormat(format!(
                    "Line {}: invalid value '{}'",
                    line_number, token
                ))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(RealDataSet::new(input, parse_label(label, line_number)?))
}

fn read_records<R, T, F>(reader: R, parse: F) -> Result<Vec<LabeledDataSet<T>>>
where
    R: BufRead,
    F: Fn(&str, usize) -> Result<LabeledDataSet<T>>,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context(format!("Failed to read line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse(&line, index + 1)?);
    }
    ensure_uniform_width(&records)?;
    Ok(records)
}

/// Reads bit records, one per line. Blank lines are skipped.
pub fn read_binary_data_sets<R: BufRead>(reader: R) -> Result<Vec<BinaryDataSet>> {
    read_records(reader, parse_binary_line)
}

/// Reads real records, one per line. Blank lines are skipped.
pub fn read_real_data_sets<R: BufRead>(reader: R) -> Result<Vec<RealDataSet>> {
    read_records(reader, parse_real_line)
}

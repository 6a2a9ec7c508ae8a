use std::{io, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::error::ChartError;

/// The input file, relative to the working directory.
pub const INPUT_FILE: &str = "predictions.csv";

pub const DATE: &str = "Date";
pub const PREDICTIONS: &str = "Predictions";
pub const CLOSE: &str = "Close";

const REQUIRED_COLUMNS: [&str; 3] = [DATE, PREDICTIONS, CLOSE];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Row {
    date: String,
    predictions: Option<f64>,
    close: Option<f64>,
}

/// The three columns of interest, in file order.  An empty numeric cell
/// is kept as `None` and shows up as a gap in the chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub dates: Vec<String>,
    pub predictions: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}

impl Dataset {
    /// Read a csv file with a header row.  Other columns than `Date`,
    /// `Predictions` and `Close` are ignored.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Dataset, ChartError> {
        let path = path.as_ref().display().to_string();
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|source| ChartError::DataLoad {
                path: path.clone(),
                source,
            })?;
        let data = Dataset::read(rdr, &path)?;
        info!("Loaded {} rows from {}", data.len(), path);
        Ok(data)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Dataset, ChartError> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Dataset::read(rdr, "<reader>")
    }

    fn read<R: io::Read>(mut rdr: csv::Reader<R>, path: &str) -> Result<Dataset, ChartError> {
        let load_error = |source: csv::Error| ChartError::DataLoad {
            path: path.to_string(),
            source,
        };

        let headers = rdr.headers().map_err(load_error)?.clone();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| !headers.iter().any(|h| h == name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ChartError::Schema { missing });
        }
        debug!("Columns in {}: {:?}", path, headers);

        let mut out = Dataset::default();
        for result in rdr.deserialize::<Row>() {
            let row = result.map_err(load_error)?;
            out.dates.push(row.date);
            out.predictions.push(row.predictions);
            out.close.push(row.close);
        }
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The input file can't be found, opened or parsed as csv.
    #[error("failed to load {path}: {source}")]
    DataLoad {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Required columns are not in the header.
    #[error("missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },
}

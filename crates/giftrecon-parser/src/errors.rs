use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{loader} source is missing a header row")]
    MissingHeader { loader: &'static str },

    #[error("{loader} CSV error: {source}")]
    Csv {
        loader: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{loader} data row {line_index} has {found} columns, expected {expected}")]
    Row {
        loader: &'static str,
        line_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{loader} source did not contain any rows")]
    EmptyFile { loader: &'static str },
}

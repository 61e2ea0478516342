use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Error, Debug, PartialEq)]
pub enum PlotError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Time out of range: {what}")]
    TimeOutOfRange { what: &'static str },
}

use rusoto_core::RusotoError;
use rusoto_firehose::PutRecordError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("rusoto delivery error: {source}")]
    RusotoDelivery {
        #[from]
        source: RusotoError<PutRecordError>,
    },

    #[allow(clippy::upper_case_acronyms)]
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

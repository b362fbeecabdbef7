//! Classification of reqwest failures.

use crate::TransportError;

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(Box::new(error))
        } else {
            Self::Request(Box::new(error))
        }
    }
}

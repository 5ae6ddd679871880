use thiserror::Error;

use orderdesk_core::MemberId;

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The ordering member is not registered; no discount was evaluated.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),
}

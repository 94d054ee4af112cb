use {
    super::{
        AuctionId,
        AuctionStatus,
    },
    std::fmt,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuctionError {
    /// An auction with the same id already exists
    DuplicateKey(AuctionId),
    /// No auction with the given id exists
    NotFound(AuctionId),
    /// The auction payload failed validation
    InvalidAuction(String),
    /// The requested status change would reopen a completed auction
    InvalidStatusTransition {
        id:   AuctionId,
        from: AuctionStatus,
        to:   AuctionStatus,
    },
}

impl fmt::Display for AuctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionError::DuplicateKey(id) => write!(f, "Auction {} already exists", id),
            AuctionError::NotFound(id) => write!(f, "Auction {} was not found", id),
            AuctionError::InvalidAuction(reason) => write!(f, "Invalid auction: {}", reason),
            AuctionError::InvalidStatusTransition { id, from, to } => write!(
                f,
                "Auction {} cannot transition from {} to {}",
                id, from, to
            ),
        }
    }
}

impl std::error::Error for AuctionError {}

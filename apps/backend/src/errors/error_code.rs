//! Error codes for the Oh Hell backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

use super::domain::ValidationKind;

/// Centralized error codes for the Oh Hell backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses, so clients can branch on the reason without matching
/// on the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Player is not seated in the game
    InvalidPlayer,
    /// All players have already bid this round
    BiddingClosed,
    /// Player already bid this round
    AlreadyBid,
    /// Bid outside the valid range
    InvalidBid,
    /// Restricted bidder would make the bid total equal the hand size
    RestrictedBid,
    /// Closing bid would make the bid total equal the hand size
    TotalBidsEqualCardsDealt,
    /// Card not in hand
    CardNotInHand,
    /// Card id outside 0..52
    InvalidCard,
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// Hand size cannot be dealt
    InvalidHandSize,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,

    // Business Logic Conflicts
    /// Join code already exists
    JoinCodeConflict,

    // System Errors
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::BiddingClosed => "BIDDING_CLOSED",
            Self::AlreadyBid => "ALREADY_BID",
            Self::InvalidBid => "INVALID_BID",
            Self::RestrictedBid => "RESTRICTED_BID",
            Self::TotalBidsEqualCardsDealt => "TOTAL_BIDS_EQUAL_CARDS_DEALT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::InvalidCard => "INVALID_CARD",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidHandSize => "INVALID_HAND_SIZE",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",

            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidPlayer => ErrorCode::InvalidPlayer,
            ValidationKind::BiddingClosed => ErrorCode::BiddingClosed,
            ValidationKind::AlreadyBid => ErrorCode::AlreadyBid,
            ValidationKind::BidOutOfRange => ErrorCode::InvalidBid,
            ValidationKind::RestrictedBid => ErrorCode::RestrictedBid,
            ValidationKind::TotalBidsEqualCardsDealt => ErrorCode::TotalBidsEqualCardsDealt,
            ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
            ValidationKind::InvalidCard => ErrorCode::InvalidCard,
            ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
            ValidationKind::InvalidHandSize => ErrorCode::InvalidHandSize,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

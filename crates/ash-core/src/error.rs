/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by item containers and catalog parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// No item with this name (or index) exists in the container.
    #[error("item not found: \"{0}\"")]
    NotFound(String),

    /// A quantity or index was out of range or not a number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The container already holds an item with this name.
    #[error("an item named \"{0}\" is already held")]
    DuplicateName(String),

    /// The item exists but is not of the kind the operation needs.
    #[error("\"{name}\" is not a {expected}")]
    WrongKind {
        /// The item name.
        name: String,
        /// The kind the operation expected.
        expected: &'static str,
    },

    /// The item is equipped and must be unequipped before it can leave the inventory.
    #[error("\"{0}\" is equipped; unequip it first")]
    StillEquipped(String),

    /// A stat name could not be parsed.
    #[error("unknown stat: {0}")]
    UnknownStat(String),
}

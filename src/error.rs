//! Error types for the palette draft engine.

use thiserror::Error;

/// Which required input was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The name typed next to the color picker.
    ColorName,
    /// The value coming from the color picker.
    ColorValue,
    /// The name of the palette being saved.
    PaletteName,
}

impl InputField {
    /// Message shown when this field is blank.
    pub fn empty_message(&self) -> &'static str {
        match self {
            InputField::ColorName => "Enter a Color Name",
            InputField::ColorValue => "Pick a Color",
            InputField::PaletteName => "Enter Palette Name",
        }
    }
}

/// Error kinds, one per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blank required field.
    EmptyInput,
    /// Color name already in the draft.
    NameCollision,
    /// Color value already in the draft.
    ValueCollision,
    /// Palette name already saved.
    PaletteNameCollision,
    /// Add attempted while the draft is full.
    CapacityExceeded,
    /// Reorder index outside the sequence.
    IndexOutOfRange,
    /// Shade level missing from the table.
    UnknownLevel,
    /// Output format outside hex/rgb/rgba.
    UnknownFormat,
    /// Mutation attempted after commit or cancel.
    DraftClosed,
}

impl ErrorKind {
    /// Whether the error is a validation rejection meant for the user,
    /// as opposed to a caller bug.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ErrorKind::EmptyInput
                | ErrorKind::NameCollision
                | ErrorKind::ValueCollision
                | ErrorKind::PaletteNameCollision
                | ErrorKind::CapacityExceeded
        )
    }
}

/// Main error type for draft, reorder and projection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{}", field.empty_message())]
    EmptyInput { field: InputField },

    #[error("Color Name Must Be Unique")]
    NameCollision,

    #[error("This Color Already Exists")]
    ValueCollision,

    #[error("That Name Exists")]
    PaletteNameCollision,

    #[error("Palette is Full ({max} colors)")]
    CapacityExceeded { max: usize },

    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown shade level: {level}")]
    UnknownLevel { level: u16 },

    #[error("Unknown color format: '{format}'")]
    UnknownFormat { format: String },

    #[error("Draft is {state} and can no longer change")]
    DraftClosed { state: crate::draft::DraftState },
}

impl DraftError {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DraftError::EmptyInput { .. } => ErrorKind::EmptyInput,
            DraftError::NameCollision => ErrorKind::NameCollision,
            DraftError::ValueCollision => ErrorKind::ValueCollision,
            DraftError::PaletteNameCollision => ErrorKind::PaletteNameCollision,
            DraftError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            DraftError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            DraftError::UnknownLevel { .. } => ErrorKind::UnknownLevel,
            DraftError::UnknownFormat { .. } => ErrorKind::UnknownFormat,
            DraftError::DraftClosed { .. } => ErrorKind::DraftClosed,
        }
    }

    /// Shorthand for `self.kind().is_user_facing()`.
    pub fn is_user_facing(&self) -> bool {
        self.kind().is_user_facing()
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, DraftError>;

//! Canonical data type, data format and data access enumerations.

closed_enum! {
    /// Sardana data types (used by device pool controllers).
    pub enum DataType {
        Integer = 0,
        Double = 1,
        String = 2,
        Boolean = 3,
        Encoded = 4,
        Invalid = 5,
    }
}

closed_enum! {
    /// Nesting depth of a data value.
    pub enum DataFormat {
        /// Single value.
        Scalar = 0,
        /// 1-D sequence (spectrum).
        OneD = 1,
        /// 2-D sequence (image).
        TwoD = 2,
        Invalid = 3,
    }
}

impl Default for DataFormat {
    fn default() -> Self {
        Self::Scalar
    }
}

impl DataFormat {
    /// One dimension more. Nothing is deeper than `TwoD`, so bumping it
    /// (or `Invalid`) yields `Invalid`.
    #[inline]
    pub const fn bump(self) -> Self {
        match self {
            Self::Scalar => Self::OneD,
            Self::OneD => Self::TwoD,
            Self::TwoD | Self::Invalid => Self::Invalid,
        }
    }

    /// Number of dimensions, `None` for `Invalid`.
    #[inline]
    pub const fn ndim(&self) -> Option<u8> {
        match self {
            Self::Scalar => Some(0),
            Self::OneD => Some(1),
            Self::TwoD => Some(2),
            Self::Invalid => None,
        }
    }
}

closed_enum! {
    /// Sardana data access (used by device pool controllers).
    pub enum DataAccess {
        ReadOnly = 0,
        ReadWrite = 1,
        Invalid = 2,
    }
}

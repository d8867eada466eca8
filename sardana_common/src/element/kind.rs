//! Element type enumeration.

closed_enum! {
    /// Every kind of element a sardana system knows about.
    pub enum ElementType {
        Pool = 0,
        Controller = 1,
        Motor = 2,
        CTExpChannel = 3,
        ZeroDExpChannel = 4,
        OneDExpChannel = 5,
        TwoDExpChannel = 6,
        ComChannel = 7,
        IORegister = 8,
        PseudoMotor = 9,
        PseudoCounter = 10,
        Constraint = 11,
        MotorGroup = 12,
        MeasurementGroup = 13,
        Instrument = 14,
        ControllerClass = 15,
        ControllerLibrary = 16,
        MacroClass = 17,
        MacroLibrary = 18,
        External = 19,
        Unknown = 20,
    }
}

impl Default for ElementType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ElementType {
    /// Name of the interface this element type implements.
    ///
    /// Every element type except `Unknown` has an interface of the same name.
    pub const fn interface(&self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            _ => Some(self.name()),
        }
    }
}

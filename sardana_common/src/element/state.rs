//! Element state enumeration.

closed_enum! {
    /// State reported by a sardana element (and by the server itself).
    pub enum State {
        On = 0,
        Off = 1,
        Close = 2,
        Open = 3,
        Insert = 4,
        Extract = 5,
        Moving = 6,
        Standby = 7,
        Fault = 8,
        Init = 9,
        Running = 10,
        Alarm = 11,
        Disable = 12,
        Unknown = 13,
        Invalid = 14,
    }
}

impl Default for State {
    fn default() -> Self {
        Self::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_covers_all_states() {
        assert_eq!(State::COUNT, 15);
        assert_eq!(State::from_u8(6), Some(State::Moving));
        assert_eq!(State::from_u8(14), Some(State::Invalid));
        assert_eq!(State::from_u8(15), None);
    }

    #[test]
    fn parse_state_names() {
        assert_eq!("Moving".parse::<State>(), Ok(State::Moving));
        assert_eq!(State::Standby.to_string(), "Standby");
        assert!("MOVING".parse::<State>().is_err());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(State::default(), State::Invalid);
    }
}

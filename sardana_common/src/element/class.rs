//! Element classification sets.
//!
//! Each set is a fixed [`ElementTypeSet`] bitmask, listed member by member.
//! Bit `n` stands for the element type with discriminant `n`.

use bitflags::bitflags;
use static_assertions::const_assert;

use super::kind::ElementType;

// One bit per element type.
const_assert!(ElementType::COUNT <= 32);

bitflags! {
    /// Set of element types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ElementTypeSet: u32 {
        const POOL               = 1 << ElementType::Pool as u32;
        const CONTROLLER         = 1 << ElementType::Controller as u32;
        const MOTOR              = 1 << ElementType::Motor as u32;
        const CT_EXP_CHANNEL     = 1 << ElementType::CTExpChannel as u32;
        const ZEROD_EXP_CHANNEL  = 1 << ElementType::ZeroDExpChannel as u32;
        const ONED_EXP_CHANNEL   = 1 << ElementType::OneDExpChannel as u32;
        const TWOD_EXP_CHANNEL   = 1 << ElementType::TwoDExpChannel as u32;
        const COM_CHANNEL        = 1 << ElementType::ComChannel as u32;
        const IO_REGISTER        = 1 << ElementType::IORegister as u32;
        const PSEUDO_MOTOR       = 1 << ElementType::PseudoMotor as u32;
        const PSEUDO_COUNTER     = 1 << ElementType::PseudoCounter as u32;
        const CONSTRAINT         = 1 << ElementType::Constraint as u32;
        const MOTOR_GROUP        = 1 << ElementType::MotorGroup as u32;
        const MEASUREMENT_GROUP  = 1 << ElementType::MeasurementGroup as u32;
        const INSTRUMENT         = 1 << ElementType::Instrument as u32;
        const CONTROLLER_CLASS   = 1 << ElementType::ControllerClass as u32;
        const CONTROLLER_LIBRARY = 1 << ElementType::ControllerLibrary as u32;
        const MACRO_CLASS        = 1 << ElementType::MacroClass as u32;
        const MACRO_LIBRARY      = 1 << ElementType::MacroLibrary as u32;
        const EXTERNAL           = 1 << ElementType::External as u32;
        const UNKNOWN            = 1 << ElementType::Unknown as u32;
    }
}

impl Default for ElementTypeSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl ElementTypeSet {
    /// Elements owned by a controller (controllable elements).
    pub const CONTROLLABLE: Self = Self::from_bits_truncate(
        Self::MOTOR.bits()
            | Self::CT_EXP_CHANNEL.bits()
            | Self::ZEROD_EXP_CHANNEL.bits()
            | Self::ONED_EXP_CHANNEL.bits()
            | Self::TWOD_EXP_CHANNEL.bits()
            | Self::COM_CHANNEL.bits()
            | Self::IO_REGISTER.bits()
            | Self::PSEUDO_MOTOR.bits()
            | Self::PSEUDO_COUNTER.bits()
            | Self::CONSTRAINT.bits(),
    );

    /// Group elements.
    pub const GROUP: Self =
        Self::from_bits_truncate(Self::MOTOR_GROUP.bits() | Self::MEASUREMENT_GROUP.bits());

    /// Elements that can be moved.
    pub const MOVEABLE: Self = Self::from_bits_truncate(
        Self::MOTOR.bits() | Self::PSEUDO_MOTOR.bits() | Self::MOTOR_GROUP.bits(),
    );

    /// Elements backed directly by hardware.
    pub const PHYSICAL: Self = Self::from_bits_truncate(
        Self::MOTOR.bits()
            | Self::CT_EXP_CHANNEL.bits()
            | Self::ZEROD_EXP_CHANNEL.bits()
            | Self::ONED_EXP_CHANNEL.bits()
            | Self::TWOD_EXP_CHANNEL.bits()
            | Self::COM_CHANNEL.bits()
            | Self::IO_REGISTER.bits(),
    );

    /// Elements whose value can be acquired.
    pub const ACQUIRABLE: Self = Self::from_bits_truncate(
        Self::PHYSICAL.bits() | Self::PSEUDO_MOTOR.bits() | Self::PSEUDO_COUNTER.bits(),
    );

    /// Elements computed from other elements.
    pub const PSEUDO: Self =
        Self::from_bits_truncate(Self::PSEUDO_MOTOR.bits() | Self::PSEUDO_COUNTER.bits());

    /// Single-member set.
    #[inline]
    pub const fn of(element_type: ElementType) -> Self {
        Self::from_bits_truncate(1 << element_type as u32)
    }

    /// Membership test.
    #[inline]
    pub const fn has(&self, element_type: ElementType) -> bool {
        self.contains(Self::of(element_type))
    }

    /// Member element types, in declaration order.
    pub fn element_types(&self) -> impl Iterator<Item = ElementType> + '_ {
        ElementType::ALL.iter().copied().filter(|t| self.has(*t))
    }
}

impl FromIterator<ElementType> for ElementTypeSet {
    fn from_iter<I: IntoIterator<Item = ElementType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, t| set | Self::of(t))
    }
}

closed_enum! {
    /// Named classification sets.
    pub enum ElementClass {
        Controllable = 0,
        Group = 1,
        Moveable = 2,
        Physical = 3,
        Acquirable = 4,
        Pseudo = 5,
    }
}

impl ElementClass {
    /// The member set of this class.
    pub const fn members(&self) -> ElementTypeSet {
        match self {
            Self::Controllable => ElementTypeSet::CONTROLLABLE,
            Self::Group => ElementTypeSet::GROUP,
            Self::Moveable => ElementTypeSet::MOVEABLE,
            Self::Physical => ElementTypeSet::PHYSICAL,
            Self::Acquirable => ElementTypeSet::ACQUIRABLE,
            Self::Pseudo => ElementTypeSet::PSEUDO,
        }
    }

    /// Classes `element_type` belongs to, in declaration order.
    pub fn of(element_type: ElementType) -> impl Iterator<Item = ElementClass> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |class| class.members().has(element_type))
    }
}

impl ElementType {
    /// Owned by a controller.
    #[inline]
    pub const fn is_controllable(&self) -> bool {
        ElementTypeSet::CONTROLLABLE.has(*self)
    }

    /// Motor group or measurement group.
    #[inline]
    pub const fn is_group(&self) -> bool {
        ElementTypeSet::GROUP.has(*self)
    }

    #[inline]
    pub const fn is_moveable(&self) -> bool {
        ElementTypeSet::MOVEABLE.has(*self)
    }

    #[inline]
    pub const fn is_physical(&self) -> bool {
        ElementTypeSet::PHYSICAL.has(*self)
    }

    #[inline]
    pub const fn is_acquirable(&self) -> bool {
        ElementTypeSet::ACQUIRABLE.has(*self)
    }

    #[inline]
    pub const fn is_pseudo(&self) -> bool {
        ElementTypeSet::PSEUDO.has(*self)
    }
}

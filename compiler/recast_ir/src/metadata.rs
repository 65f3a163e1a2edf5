//! Expression metadata shared by every expression node.

use std::fmt;

use crate::QualType;

/// Value category of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ValueKind {
    /// Pure rvalue: a temporary with no identity.
    #[default]
    PRValue,
    /// Designates an object or function.
    LValue,
    /// Expiring value.
    XValue,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::PRValue => "prvalue",
            ValueKind::LValue => "lvalue",
            ValueKind::XValue => "xvalue",
        }
    }
}

/// Special object category of an lvalue.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ObjectKind {
    #[default]
    Ordinary,
    BitField,
    VectorComponent,
}

impl ObjectKind {
    pub const fn name(self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "ordinary",
            ObjectKind::BitField => "bitfield",
            ObjectKind::VectorComponent => "vectorcomponent",
        }
    }
}

/// Floating-point contraction mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FpContract {
    #[default]
    Off,
    On,
    Fast,
}

/// Floating-point options attached to binary operators.
///
/// Older generations only carried a single "contractable" flag; see
/// [`FpOptions::from_contractable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FpOptions {
    pub contract: FpContract,
}

impl FpOptions {
    pub const fn new(contract: FpContract) -> Self {
        FpOptions { contract }
    }

    /// Options equivalent to the legacy `fp_contractable` flag.
    pub const fn from_contractable(contractable: bool) -> Self {
        if contractable {
            FpOptions::new(FpContract::On)
        } else {
            FpOptions::new(FpContract::Off)
        }
    }

    pub const fn allows_contraction(self) -> bool {
        !matches!(self.contract, FpContract::Off)
    }
}

impl fmt::Display for FpOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contract {
            FpContract::Off => write!(f, "contract=off"),
            FpContract::On => write!(f, "contract=on"),
            FpContract::Fast => write!(f, "contract=fast"),
        }
    }
}

/// Type and categories of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExprMeta {
    pub ty: QualType,
    pub value_kind: ValueKind,
    pub object_kind: ObjectKind,
}

impl ExprMeta {
    pub const fn new(ty: QualType, value_kind: ValueKind, object_kind: ObjectKind) -> Self {
        ExprMeta {
            ty,
            value_kind,
            object_kind,
        }
    }

    /// Ordinary prvalue of the given type.
    pub const fn prvalue(ty: QualType) -> Self {
        ExprMeta::new(ty, ValueKind::PRValue, ObjectKind::Ordinary)
    }
}

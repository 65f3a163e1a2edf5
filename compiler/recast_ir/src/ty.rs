//! Qualified types.
//!
//! Types are interned per context as [`TypeId`] so equality is an integer
//! compare. Builtins are pre-interned at fixed indices, so their ids are
//! valid in every context.

use std::fmt;

use bitflags::bitflags;

/// Interned type identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned builtins (indices match `BuiltinType::ALL`)
    pub const VOID: TypeId = TypeId(0);
    pub const BOOL: TypeId = TypeId(1);
    pub const CHAR: TypeId = TypeId(2);
    pub const INT: TypeId = TypeId(3);
    pub const UINT: TypeId = TypeId(4);
    pub const LONG: TypeId = TypeId(5);
    pub const FLOAT: TypeId = TypeId(6);
    pub const DOUBLE: TypeId = TypeId(7);

    /// First ID for context-interned compound types.
    pub const FIRST_COMPOUND: u32 = 8;

    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_COMPOUND
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match BuiltinType::from_type_id(*self) {
            Some(builtin) => write!(f, "TypeId({})", builtin.name()),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

/// Builtin scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinType {
    Void,
    Bool,
    Char,
    Int,
    UInt,
    Long,
    Float,
    Double,
}

impl BuiltinType {
    /// All builtins in pre-interning order.
    pub const ALL: [BuiltinType; 8] = [
        BuiltinType::Void,
        BuiltinType::Bool,
        BuiltinType::Char,
        BuiltinType::Int,
        BuiltinType::UInt,
        BuiltinType::Long,
        BuiltinType::Float,
        BuiltinType::Double,
    ];

    /// C spelling.
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinType::Void => "void",
            BuiltinType::Bool => "_Bool",
            BuiltinType::Char => "char",
            BuiltinType::Int => "int",
            BuiltinType::UInt => "unsigned int",
            BuiltinType::Long => "long",
            BuiltinType::Float => "float",
            BuiltinType::Double => "double",
        }
    }

    pub const fn type_id(self) -> TypeId {
        match self {
            BuiltinType::Void => TypeId::VOID,
            BuiltinType::Bool => TypeId::BOOL,
            BuiltinType::Char => TypeId::CHAR,
            BuiltinType::Int => TypeId::INT,
            BuiltinType::UInt => TypeId::UINT,
            BuiltinType::Long => TypeId::LONG,
            BuiltinType::Float => TypeId::FLOAT,
            BuiltinType::Double => TypeId::DOUBLE,
        }
    }

    pub fn from_type_id(id: TypeId) -> Option<Self> {
        Self::ALL.get(id.index()).copied()
    }
}

bitflags! {
    /// CVR qualifiers carried alongside a [`TypeId`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

impl Qualifiers {
    /// C spelling in declaration order, without trailing space.
    pub fn spelling(self) -> String {
        let mut parts = Vec::with_capacity(3);
        if self.contains(Qualifiers::CONST) {
            parts.push("const");
        }
        if self.contains(Qualifiers::VOLATILE) {
            parts.push("volatile");
        }
        if self.contains(Qualifiers::RESTRICT) {
            parts.push("restrict");
        }
        parts.join(" ")
    }
}

/// A type plus its qualifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct QualType {
    pub ty: TypeId,
    pub quals: Qualifiers,
}

impl QualType {
    pub const VOID: QualType = QualType::unqualified(TypeId::VOID);
    pub const BOOL: QualType = QualType::unqualified(TypeId::BOOL);
    pub const CHAR: QualType = QualType::unqualified(TypeId::CHAR);
    pub const INT: QualType = QualType::unqualified(TypeId::INT);
    pub const UINT: QualType = QualType::unqualified(TypeId::UINT);
    pub const LONG: QualType = QualType::unqualified(TypeId::LONG);
    pub const FLOAT: QualType = QualType::unqualified(TypeId::FLOAT);
    pub const DOUBLE: QualType = QualType::unqualified(TypeId::DOUBLE);

    #[inline]
    pub const fn new(ty: TypeId, quals: Qualifiers) -> Self {
        QualType { ty, quals }
    }

    #[inline]
    pub const fn unqualified(ty: TypeId) -> Self {
        QualType {
            ty,
            quals: Qualifiers::empty(),
        }
    }

    #[must_use]
    pub fn with_const(self) -> Self {
        QualType {
            ty: self.ty,
            quals: self.quals | Qualifiers::CONST,
        }
    }

    #[must_use]
    pub fn unqualified_type(self) -> Self {
        QualType::unqualified(self.ty)
    }

    pub fn is_const(self) -> bool {
        self.quals.contains(Qualifiers::CONST)
    }
}

impl fmt::Debug for QualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quals.is_empty() {
            write!(f, "{:?}", self.ty)
        } else {
            write!(f, "{} {:?}", self.quals.spelling(), self.ty)
        }
    }
}

/// Structure of an interned type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Builtin(BuiltinType),
    Pointer(QualType),
    Function { ret: QualType, params: Vec<QualType> },
}

//! Unary and binary operator kinds of the C-like target language.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOpKind {
    // Multiplicative
    Mul,
    Div,
    Rem,

    // Additive
    Add,
    Sub,

    // Shift
    Shl,
    Shr,

    // Relational
    Lt,
    Gt,
    Le,
    Ge,

    // Equality
    Eq,
    Ne,

    // Bitwise
    And,
    Xor,
    Or,

    // Logical
    LAnd,
    LOr,

    // Assignment
    Assign,
    MulAssign,
    DivAssign,
    RemAssign,
    AddAssign,
    SubAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    XorAssign,
    OrAssign,

    Comma,
}

impl BinaryOpKind {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::And => "&",
            Self::Xor => "^",
            Self::Or => "|",
            Self::LAnd => "&&",
            Self::LOr => "||",
            Self::Assign => "=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::RemAssign => "%=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AndAssign => "&=",
            Self::XorAssign => "^=",
            Self::OrAssign => "|=",
            Self::Comma => ",",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 3: `*` `/` `%`
    /// - 4: `+` `-`
    /// - 5: `<<` `>>`
    /// - 6: `<` `>` `<=` `>=`
    /// - 7: `==` `!=`
    /// - 8: `&`
    /// - 9: `^`
    /// - 10: `|`
    /// - 11: `&&`
    /// - 12: `||`
    /// - 14: assignments
    /// - 15: `,`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Rem => 3,
            Self::Add | Self::Sub => 4,
            Self::Shl | Self::Shr => 5,
            Self::Lt | Self::Gt | Self::Le | Self::Ge => 6,
            Self::Eq | Self::Ne => 7,
            Self::And => 8,
            Self::Xor => 9,
            Self::Or => 10,
            Self::LAnd => 11,
            Self::LOr => 12,
            // 13 is the conditional operator, which is not a binary operator
            Self::Assign
            | Self::MulAssign
            | Self::DivAssign
            | Self::RemAssign
            | Self::AddAssign
            | Self::SubAssign
            | Self::ShlAssign
            | Self::ShrAssign
            | Self::AndAssign
            | Self::XorAssign
            | Self::OrAssign => 14,
            Self::Comma => 15,
        }
    }

    pub const fn is_assignment(self) -> bool {
        self.precedence() == 14
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Gt | Self::Le | Self::Ge | Self::Eq | Self::Ne
        )
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOpKind {
    PostInc,
    PostDec,
    PreInc,
    PreDec,
    AddrOf,
    Deref,
    Plus,
    Minus,
    Not,
    LNot,
    Real,
    Imag,
    Extension,
}

impl UnaryOpKind {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::PostInc | Self::PreInc => "++",
            Self::PostDec | Self::PreDec => "--",
            Self::AddrOf => "&",
            Self::Deref => "*",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "~",
            Self::LNot => "!",
            Self::Real => "__real",
            Self::Imag => "__imag",
            Self::Extension => "__extension__",
        }
    }

    pub const fn is_postfix(self) -> bool {
        matches!(self, Self::PostInc | Self::PostDec)
    }
}

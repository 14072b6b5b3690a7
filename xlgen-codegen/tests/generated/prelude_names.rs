// Code generated by xlgen. DO NOT EDIT.
// source: prelude_names.idl
// @generated

/// `bool` builtin.
pub type OkValue = bool;

/// `none` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NoneValue(pub i32);

impl NoneValue {
    /// `self`.
    pub const SELF: Self = Self(0);
    /// `some`.
    pub const SOME: Self = Self(1);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("self"),
            1 => Some("some"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "self" => Some(Self::SELF),
            "some" => Some(Self::SOME),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[NoneValue] = &[NoneValue::SELF, NoneValue::SOME];
        VALUES
    }
}

impl Default for NoneValue {
    fn default() -> Self {
        Self(0)
    }
}

impl From<i32> for NoneValue {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<NoneValue> for i32 {
    fn from(value: NoneValue) -> Self {
        value.0
    }
}

/// `into` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntoTarget {
    pub ok: OkValue,
}

/// `err` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrValue {
    pub kind: NoneValue,
    /// Payload selected by `kind`.
    pub kind_union: Option<ErrValueKindUnion>,
}

impl ErrValue {
    /// Returns true if `kind_union` is absent or selected by `kind`.
    #[must_use]
    pub fn kind_union_matches(&self) -> bool {
        match &self.kind_union {
            Some(payload) => payload.tag() == self.kind,
            None => true,
        }
    }
}

/// Payload of `ErrValue::kind`, selected by its [`NoneValue`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrValueKindUnion {
    /// Payload for [`NoneValue::SELF`].
    SelfRef(ErrValueKindUnionSelfRef),
    /// Payload for [`NoneValue::SOME`].
    SomeValue(ErrValueKindUnionSomeValue),
}

impl ErrValueKindUnion {
    /// Returns the discriminant value selecting this payload.
    #[must_use]
    pub const fn tag(&self) -> NoneValue {
        match self {
            Self::SelfRef(_) => NoneValue::SELF,
            Self::SomeValue(_) => NoneValue::SOME,
        }
    }
}

/// Implemented by every payload of [`ErrValueKindUnion`].
pub trait ErrValueKindUnionVariant: Into<ErrValueKindUnion> {
    /// Discriminant value selecting the implementor.
    const TAG: NoneValue;
}

/// `self` payload of [`ErrValueKindUnion`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrValueKindUnionSelfRef {
    pub value: IntoTarget,
}

impl ErrValueKindUnionVariant for ErrValueKindUnionSelfRef {
    const TAG: NoneValue = NoneValue::SELF;
}

impl From<ErrValueKindUnionSelfRef> for ErrValueKindUnion {
    fn from(variant: ErrValueKindUnionSelfRef) -> Self {
        Self::SelfRef(variant)
    }
}

/// `some` payload of [`ErrValueKindUnion`].
///
/// Fields of `into`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrValueKindUnionSomeValue {
    pub ok: OkValue,
}

impl ErrValueKindUnionVariant for ErrValueKindUnionSomeValue {
    const TAG: NoneValue = NoneValue::SOME;
}

impl From<ErrValueKindUnionSomeValue> for ErrValueKindUnion {
    fn from(variant: ErrValueKindUnionSomeValue) -> Self {
        Self::SomeValue(variant)
    }
}

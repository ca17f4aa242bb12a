use std::collections::BTreeMap;

/// A value stored in a patch's attribute table.
/// Attributes travel with a patch but the kernel never reads them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Int(i64),
    Real(f64),
    Str(String),
}

/// Named attributes attached to a patch
pub type Attributes = BTreeMap<String, Attribute>;

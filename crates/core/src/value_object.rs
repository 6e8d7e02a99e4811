//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by their attribute
/// values**; two with the same values are interchangeable. `Money` and the
/// menu items (buns, ingredients) are value objects. A burger under assembly
/// is not: it keeps its identity while its contents change, so it carries no
/// such marker.
///
/// To "modify" a value object, build a new one with the new values. The
/// bounds mirror that contract:
/// - **Clone**: values are copied around freely
/// - **PartialEq**: compared attribute by attribute
/// - **Debug**: printable in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

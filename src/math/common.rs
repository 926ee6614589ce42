use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::{Float, Num};

/// Generic scalar types that can be stored in the math containers
pub trait ValueType: Num + PartialOrd + ToPrimitive + FromPrimitive + Copy {}

// Impl for all matching types
impl<T> ValueType for T where T: Num + PartialOrd + ToPrimitive + FromPrimitive + Copy {}

/// Floating point scalar types
pub trait FloatValueType: ValueType + Float {}

impl<T> FloatValueType for T where T: ValueType + Float {}

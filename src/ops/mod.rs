//! Matrix arithmetic and structural operations, as inherent methods on
//! [`crate::Matrix`].

pub mod arithmetic;
pub mod structural;

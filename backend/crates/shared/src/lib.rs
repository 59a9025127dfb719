//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the expense backend:
//! - The unified error type rendered at the HTTP boundary
//! - Typed identifiers for profiles and expenses
//!
//! Only things whose meaning is identical across contexts belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

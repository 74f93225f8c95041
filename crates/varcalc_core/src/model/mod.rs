//! Request and result types for the VaR engine
//!
//! - `request` - raw `VarInput`, validated `VarRequest` and the `Method` enum
//! - `results` - the method-shaped `VarResult`

mod request;
mod results;

pub use request::{Method, VarInput, VarRequest};
pub use results::VarResult;

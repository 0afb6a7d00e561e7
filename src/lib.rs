//! Service results that say why they failed.
//!
//! A [`MessageContract<T>`] is what a service call hands back: either a payload
//! or an [`ErrorContract`] tree of reason-coded causes. Callers check it with
//! `is_success`, `has_result` or a guarded accessor instead of catching panics
//! or guessing what `None` meant.
#![no_std]

extern crate alloc;

mod basecontract;
mod defaultvalue;
mod errorcontract;
mod failedreason;
mod invalidresult;
mod messagecontract;
#[cfg(feature = "serde")]
mod wire;

pub use basecontract::{BaseContract, Contract};
pub use defaultvalue::DefaultValue;
pub use errorcontract::ErrorContract;
pub use failedreason::FailedReasonType;
pub use invalidresult::InvalidResultOfContract;
pub use messagecontract::{IntoMessageContract, ListMessageContract, MessageContract};

#[cfg(feature = "aliases")]
pub type MContract<T> = MessageContract<T>;
#[cfg(feature = "aliases")]
pub type LContract<T> = ListMessageContract<T>;
#[cfg(feature = "aliases")]
pub type BContract = BaseContract;

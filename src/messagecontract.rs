//! ```ignore
//! MessageContract<T>
//!
//! success(T)                              -> MessageContract<T>
//! from_value(T)                           -> MessageContract<T>
//! from_option(Option<T>)                  -> MessageContract<T> ?Empty
//! from_pair(Option<T>, S)                 -> MessageContract<T> ?Empty
//! failure(ErrorContract)                  -> MessageContract<T>
//! from_reason(FailedReasonType)           -> MessageContract<T>
//! from_reason_message(FailedReasonType, S) -> MessageContract<T>
//! from_fault(&E)                          -> MessageContract<T>
//! with_success_message(S)                 -> MessageContract<T>
//!
//! is_success() -> bool
//! is_failure() -> bool
//! where T: DefaultValue
//! has_result() -> bool
//!
//! result()            -> Option<&T>
//! error()             -> Option<&ErrorContract>
//! success_message()   -> Option<&str>
//!
//! get_checked_result()  -> Result<&T, InvalidResultOfContract>
//! into_checked_result() -> Result<T, InvalidResultOfContract>
//! unwrap()              -> T ?panic
//! where S: AsRef<str>
//! expect(S)             -> T ?panic
//! unwrap_or(T)          -> T ?Drops ErrorContract
//! unwrap_or_else(|ErrorContract| T) -> T
//! where T: Default
//! unwrap_or_default()   -> T ?Drops ErrorContract
//!
//! into_result() -> Result<T, ErrorContract> Drops message
//! as_result()   -> Result<&T, &ErrorContract>
//! into_option() -> Option<T> Drops ErrorContract
//!
//! to_base_contract()   -> BaseContract
//! into_base_contract() -> BaseContract Drops T
//!
//! for <U>: mapping T into U, never called on failure
//! into_map_contract     (|T| U)      -> MessageContract<U>
//! as_map_contract       (|&T| U)     -> MessageContract<U>
//! into_map_list_contract(|T| Vec<U>) -> ListMessageContract<U>
//! as_map_list_contract  (|&T| Vec<U>) -> ListMessageContract<U>
//!
//! where T = Vec<U>
//! collect_all(impl IntoIterator<Item = MessageContract<U>>) -> ListMessageContract<U>
//! ```
use crate::basecontract::{BaseContract, Contract};
use crate::defaultvalue::DefaultValue;
use crate::errorcontract::ErrorContract;
use crate::failedreason::FailedReasonType;
use crate::invalidresult::InvalidResultOfContract;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::error::Error;
use core::fmt;

pub(crate) const NULL_VALUE_MESSAGE: &str = "You sent null value to MessageContract result!";

/// Either a payload or the error tree explaining why there is none, plus an
/// optional note for the end user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageContract<T> {
    pub(crate) outcome: Result<T, ErrorContract>,
    pub(crate) success_message: Option<String>,
}

/// A contract whose payload is a list.
pub type ListMessageContract<T> = MessageContract<Vec<T>>;

pub trait IntoMessageContract<T> {
    fn into_message_contract(self) -> MessageContract<T>;
}

impl<T, E> IntoMessageContract<T> for Result<T, E>
where
    E: Error,
{
    fn into_message_contract(self) -> MessageContract<T> {
        match self {
            Ok(t) => MessageContract::success(t),
            Err(e) => MessageContract::from_fault(&e),
        }
    }
}

impl<T> MessageContract<T> {
    pub const fn success(value: T) -> Self {
        MessageContract {
            outcome: Ok(value),
            success_message: None,
        }
    }

    /// Same as [`success`](Self::success). Absent values go through
    /// [`from_option`](Self::from_option).
    pub const fn from_value(value: T) -> Self {
        MessageContract::success(value)
    }

    pub const fn failure(error: ErrorContract) -> Self {
        MessageContract {
            outcome: Err(error),
            success_message: None,
        }
    }

    /// `None` is never a valid payload: it becomes an `Empty` failure.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(t) => MessageContract::success(t),
            None => {
                tracing::trace!("absent value coerced into an empty contract");
                MessageContract::failure(ErrorContract::new(FailedReasonType::Empty, NULL_VALUE_MESSAGE))
            }
        }
    }

    pub fn from_pair(value: Option<T>, end_user_message: impl Into<String>) -> Self {
        MessageContract::from_option(value).with_success_message(end_user_message)
    }

    pub fn from_reason(failed_reason_type: FailedReasonType) -> Self {
        MessageContract::failure(ErrorContract::from_reason(failed_reason_type))
    }

    pub fn from_reason_message(failed_reason_type: FailedReasonType, message: impl Into<String>) -> Self {
        MessageContract::failure(ErrorContract::new(failed_reason_type, message))
    }

    pub fn from_fault<E>(fault: &E) -> Self
    where
        E: Error + ?Sized,
    {
        MessageContract::failure(ErrorContract::from_fault(fault))
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub const fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    /// Success with a payload that is not its type's default value.
    ///
    /// Stricter than [`is_success`](Self::is_success): `0`, `""` or an empty
    /// list count as no result.
    pub fn has_result(&self) -> bool
    where
        T: DefaultValue,
    {
        match self.outcome {
            Ok(ref t) => !t.is_default_value(),
            Err(_) => false,
        }
    }

    pub const fn result(&self) -> Option<&T> {
        match self.outcome {
            Ok(ref t) => Some(t),
            Err(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&ErrorContract> {
        match self.outcome {
            Ok(_) => None,
            Err(ref e) => Some(e),
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn get_checked_result(&self) -> Result<&T, InvalidResultOfContract> {
        match self.outcome {
            Ok(ref t) => Ok(t),
            Err(ref e) => Err(invalid_result(e.clone())),
        }
    }

    pub fn into_checked_result(self) -> Result<T, InvalidResultOfContract> {
        match self.outcome {
            Ok(t) => Ok(t),
            Err(e) => Err(invalid_result(e)),
        }
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.outcome {
            Ok(t) => t,
            Err(e) => unwrap_failed("called unwrap on a failed contract", &e),
        }
    }

    #[track_caller]
    pub fn expect<S: AsRef<str>>(self, message: S) -> T {
        match self.outcome {
            Ok(t) => t,
            Err(e) => unwrap_failed(message.as_ref(), &e),
        }
    }

    pub fn unwrap_or(self, default_eager: T) -> T {
        match self.outcome {
            Ok(t) => t,
            Err(_) => default_eager,
        }
    }

    pub fn unwrap_or_else(self, default_lazy: impl FnOnce(ErrorContract) -> T) -> T {
        match self.outcome {
            Ok(t) => t,
            Err(e) => default_lazy(e),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self.outcome {
            Ok(t) => t,
            Err(_) => T::default(),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorContract> {
        self.outcome
    }

    pub const fn as_result(&self) -> Result<&T, &ErrorContract> {
        match self.outcome {
            Ok(ref t) => Ok(t),
            Err(ref e) => Err(e),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.outcome.ok()
    }

    pub fn to_base_contract(&self) -> BaseContract {
        BaseContract {
            outcome: match self.outcome {
                Ok(_) => Ok(()),
                Err(ref e) => Err(e.to_children()),
            },
            success_message: self.success_message.clone(),
        }
    }

    pub fn into_base_contract(self) -> BaseContract {
        BaseContract {
            outcome: match self.outcome {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_children()),
            },
            success_message: self.success_message,
        }
    }

    /// Maps the payload into another contract type. `mapper` only runs on
    /// success; a failure carries its re-parented error and success message
    /// over unchanged.
    pub fn into_map_contract<U>(self, mapper: impl FnOnce(T) -> U) -> MessageContract<U> {
        MessageContract {
            outcome: match self.outcome {
                Ok(t) => Ok(mapper(t)),
                Err(e) => Err(e.to_children()),
            },
            success_message: self.success_message,
        }
    }

    pub fn as_map_contract<U>(&self, mapper: impl FnOnce(&T) -> U) -> MessageContract<U> {
        MessageContract {
            outcome: match self.outcome {
                Ok(ref t) => Ok(mapper(t)),
                Err(ref e) => Err(e.to_children()),
            },
            success_message: self.success_message.clone(),
        }
    }

    pub fn into_map_list_contract<U>(self, mapper: impl FnOnce(T) -> Vec<U>) -> ListMessageContract<U> {
        self.into_map_contract(mapper)
    }

    pub fn as_map_list_contract<U>(&self, mapper: impl FnOnce(&T) -> Vec<U>) -> ListMessageContract<U> {
        self.as_map_contract(mapper)
    }
}

impl<T> MessageContract<Vec<T>> {
    /// Succeeds with every payload when all items succeeded. Otherwise fails
    /// with an `OperationFailed` root whose children are the item errors, in
    /// order.
    pub fn collect_all<I>(contracts: I) -> Self
    where
        I: IntoIterator<Item = MessageContract<T>>,
    {
        let mut values = Vec::new();
        let mut failures = Vec::new();
        for contract in contracts {
            match contract.outcome {
                Ok(t) => values.push(t),
                Err(e) => failures.push(e),
            }
        }

        if failures.is_empty() {
            return MessageContract::success(values);
        }

        let message = format!("{} of {} items failed", failures.len(), failures.len() + values.len());
        MessageContract::failure(ErrorContract::compose(FailedReasonType::OperationFailed, message, failures))
    }
}

impl<T> FromIterator<T> for MessageContract<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MessageContract::success(iter.into_iter().collect())
    }
}

impl<T: Any> Contract for MessageContract<T> {
    fn is_success(&self) -> bool {
        MessageContract::is_success(self)
    }

    fn error(&self) -> Option<&ErrorContract> {
        MessageContract::error(self)
    }

    fn success_message(&self) -> Option<&str> {
        MessageContract::success_message(self)
    }

    fn untyped_result(&self) -> Option<&dyn Any> {
        match self.outcome {
            Ok(ref t) => Some(t as &dyn Any),
            Err(_) => None,
        }
    }
}

/// A nested contract is default when it has no usable result.
impl<T: DefaultValue> DefaultValue for MessageContract<T> {
    fn is_default_value(&self) -> bool {
        !self.has_result()
    }
}

impl<T> From<Option<T>> for MessageContract<T> {
    fn from(value: Option<T>) -> Self {
        MessageContract::from_option(value)
    }
}

impl<T, S: Into<String>> From<(Option<T>, S)> for MessageContract<T> {
    fn from((value, end_user_message): (Option<T>, S)) -> Self {
        MessageContract::from_pair(value, end_user_message)
    }
}

impl<T> From<ErrorContract> for MessageContract<T> {
    fn from(error: ErrorContract) -> Self {
        MessageContract::failure(error)
    }
}

impl<T> From<FailedReasonType> for MessageContract<T> {
    fn from(failed_reason_type: FailedReasonType) -> Self {
        MessageContract::from_reason(failed_reason_type)
    }
}

impl<T, S: Into<String>> From<(FailedReasonType, S)> for MessageContract<T> {
    fn from((failed_reason_type, message): (FailedReasonType, S)) -> Self {
        MessageContract::from_reason_message(failed_reason_type, message)
    }
}

impl<T> From<InvalidResultOfContract> for MessageContract<T> {
    fn from(invalid: InvalidResultOfContract) -> Self {
        MessageContract::failure(invalid.into_error())
    }
}

impl<T, E: Error> From<Result<T, E>> for MessageContract<T> {
    fn from(result: Result<T, E>) -> Self {
        result.into_message_contract()
    }
}

impl<T> From<&MessageContract<T>> for bool {
    fn from(contract: &MessageContract<T>) -> Self {
        contract.is_success()
    }
}

impl<T> From<MessageContract<T>> for bool {
    fn from(contract: MessageContract<T>) -> Self {
        contract.is_success()
    }
}

impl<T: fmt::Display> fmt::Display for MessageContract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Ok(ref t) => write!(f, "Success: {t}"),
            Err(ref e) => write!(f, "Failure: {e}"),
        }
    }
}

fn invalid_result(error: ErrorContract) -> InvalidResultOfContract {
    tracing::debug!(error = %error, "guarded access to a failed contract");
    InvalidResultOfContract::new(error)
}

#[track_caller]
#[inline(never)]
fn unwrap_failed(message: &str, error: &ErrorContract) -> ! {
    panic!("{message}: {error}");
}

#[cfg(test)]
mod tests {
    use super::{IntoMessageContract, ListMessageContract, MessageContract, NULL_VALUE_MESSAGE};
    use crate::basecontract::Contract;
    use crate::errorcontract::ErrorContract;
    use crate::failedreason::FailedReasonType;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use core::fmt;

    #[derive(Debug)]
    struct ConnectionReset;

    impl fmt::Display for ConnectionReset {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection reset by peer")
        }
    }

    impl core::error::Error for ConnectionReset {}

    fn find_user(id: u32) -> MessageContract<String> {
        if id == 1 {
            MessageContract::success("ada".to_string())
        } else {
            (FailedReasonType::NotFound, "user missing").into()
        }
    }

    #[test]
    fn value_builds_a_success() {
        let contract = MessageContract::from_value(42);
        assert!(contract.is_success(), "a value builds a success");
        assert_eq!(contract.get_checked_result(), Ok(&42), "the checked result is the value");
        assert!(contract.has_result(), "42 is a usable result");
        assert_eq!(contract.unwrap(), 42, "unwrap yields the value");
    }

    #[test]
    fn default_value_is_success_without_result() {
        let contract = MessageContract::from_value(0);
        assert!(contract.is_success(), "0 still builds a success");
        assert!(bool::from(&contract), "bool coercion only looks at the state");
        assert!(!contract.has_result(), "0 is the default i32, so there is no result");
        assert_eq!(contract.get_checked_result(), Ok(&0), "the checked result is still available");

        let empty: ListMessageContract<u8> = MessageContract::success(Vec::new());
        assert!(empty.is_success(), "an empty list is a success");
        assert!(!empty.has_result(), "an empty list is not a result");
    }

    #[test]
    fn none_builds_an_empty_failure() {
        let contract = MessageContract::<String>::from(None);
        assert!(contract.is_failure(), "None is never a payload");
        let error = contract.error().unwrap();
        assert_eq!(error.failed_reason_type(), FailedReasonType::Empty, "None maps to Empty");
        assert_eq!(error.message(), NULL_VALUE_MESSAGE, "None uses the fixed message");
        assert!(!contract.has_result(), "a failure has no result");
    }

    #[test]
    fn pair_sets_success_message_even_when_empty() {
        let found = MessageContract::from((Some(3_u8), "three found"));
        assert_eq!(found.success_message(), Some("three found"), "message is attached");
        assert_eq!(found.result(), Some(&3), "payload is kept");

        let missing = MessageContract::<u8>::from_pair(None, "nothing found");
        assert!(missing.is_failure(), "an absent payload still fails");
        assert_eq!(missing.success_message(), Some("nothing found"), "message is attached anyway");
    }

    #[test]
    fn reason_alone_uses_its_default_message() {
        let contract = MessageContract::<u8>::from(FailedReasonType::Duplicate);
        let error = contract.error().unwrap();
        assert_eq!(error.failed_reason_type(), FailedReasonType::Duplicate, "reason is kept");
        assert_eq!(error.message(), "The item already exists.", "default message is used");
    }

    #[test]
    fn fault_builds_an_internal_error() {
        let contract = MessageContract::<u8>::from_fault(&ConnectionReset);
        let error = contract.error().unwrap();
        assert_eq!(error.failed_reason_type(), FailedReasonType::InternalError, "faults are internal");
        assert_eq!(error.message(), "connection reset by peer", "fault message is kept");

        let from_result: MessageContract<u8> = Err::<u8, _>(ConnectionReset).into();
        assert_eq!(from_result, contract, "an Err converts like the fault itself");
        let from_ok = Ok::<u8, ConnectionReset>(5).into_message_contract();
        assert_eq!(from_ok.result(), Some(&5), "an Ok converts into a success");
    }

    #[test]
    fn checked_result_fails_on_failure() {
        let contract = find_user(2);
        assert!(!bool::from(&contract), "a failure coerces to false");
        let invalid = contract.get_checked_result().unwrap_err();
        assert_eq!(invalid.error().message(), "user missing", "the error tree is carried");
        assert_eq!(
            contract.into_checked_result().unwrap_err().to_string(),
            "invalid result of contract: NotFound: user missing",
            "the value coercion fails the same way"
        );
    }

    #[test]
    #[should_panic(expected = "called unwrap on a failed contract: NotFound: user missing")]
    fn unwrap_panics_on_failure() {
        let _ = find_user(2).unwrap();
    }

    #[test]
    fn not_found_projects_to_one_child() {
        let contract = MessageContract::<u32>::from((FailedReasonType::NotFound, "user missing"));
        assert!(!contract.is_success(), "a reason pair builds a failure");
        assert!(contract.get_checked_result().is_err(), "checked access fails");

        let base = contract.to_base_contract();
        let children = base.error().unwrap().children();
        assert_eq!(children.len(), 1, "one child after re-parenting");
        assert_eq!(children[0].failed_reason_type(), FailedReasonType::NotFound, "child keeps the reason");
        assert_eq!(children[0].message(), "user missing", "child keeps the message");
    }

    #[test]
    fn base_contract_preserves_state_and_message() {
        let success = MessageContract::success(7_u8).with_success_message("done");
        let base = success.to_base_contract();
        assert!(base.is_success(), "success survives projection");
        assert_eq!(base.success_message(), Some("done"), "message survives projection");

        let failure = find_user(9).with_success_message("looked up");
        let base = failure.clone().into_base_contract();
        assert!(base.is_failure(), "failure survives projection");
        assert_eq!(base.success_message(), Some("looked up"), "message survives projection");
        assert!(
            base.error().unwrap().flattens_like(failure.error().unwrap()),
            "the error flattens the same way"
        );
    }

    #[test]
    fn map_skips_the_mapper_on_failure() {
        let calls = Cell::new(0);
        let failure = find_user(3).with_success_message("kept");
        let mapped = failure.as_map_contract(|name| {
            calls.set(calls.get() + 1);
            name.len()
        });
        assert_eq!(calls.get(), 0, "the mapper must not run on failure");
        assert!(mapped.is_failure(), "failure is carried over");
        assert_eq!(mapped.success_message(), Some("kept"), "success message is carried over");
        assert!(
            mapped.error().unwrap().flattens_like(failure.error().unwrap()),
            "the error flattens the same way"
        );

        let consumed = failure.into_map_contract(|name| {
            calls.set(calls.get() + 1);
            name.len()
        });
        assert_eq!(calls.get(), 0, "the consuming mapper must not run either");
        assert_eq!(consumed, mapped, "both mappings agree");
    }

    #[test]
    fn map_applies_the_mapper_on_success() {
        let mapped = find_user(1).with_success_message("hello").into_map_contract(|name| name.len());
        assert_eq!(mapped.result(), Some(&3), "payload is mapped");
        assert_eq!(mapped.success_message(), Some("hello"), "message is kept");
    }

    #[test]
    fn map_into_list_contract() {
        let letters = find_user(1).as_map_list_contract(|name| name.chars().collect());
        assert_eq!(letters.result(), Some(&vec!['a', 'd', 'a']), "payload becomes a list");

        let failed: ListMessageContract<char> = find_user(4).into_map_list_contract(|name| name.chars().collect());
        assert!(failed.is_failure(), "failure is carried into the list variant");
    }

    #[test]
    fn repeated_mapping_keeps_the_same_causes() {
        let original = find_user(5);
        let mapped = original
            .as_map_contract(String::len)
            .into_map_contract(|len| len * 2)
            .into_map_list_contract(|len| vec![len]);
        assert_eq!(
            mapped.error().unwrap(),
            &original.error().unwrap().to_children(),
            "re-parenting more than once is the same as once"
        );
    }

    #[test]
    fn untyped_result_erases_the_payload() {
        let contract = MessageContract::success(11_u64);
        let erased: &dyn Contract = &contract;
        assert_eq!(
            erased.untyped_result().and_then(|value| value.downcast_ref::<u64>()),
            Some(&11),
            "the payload is reachable through Any"
        );
        assert!(erased.ensure_success().is_ok(), "guard passes on success");

        let failure = MessageContract::<u64>::from_reason(FailedReasonType::Timeout);
        let erased: &dyn Contract = &failure;
        assert!(erased.untyped_result().is_none(), "a failure has no payload");
        assert!(erased.ensure_success().is_err(), "guard fails on failure");
    }

    #[test]
    fn collect_all_gathers_every_failure() {
        let all_ok = ListMessageContract::collect_all([MessageContract::success(1), MessageContract::success(2)]);
        assert_eq!(all_ok.result(), Some(&vec![1, 2]), "all payloads are collected");

        let mixed = ListMessageContract::collect_all([
            MessageContract::success(1),
            MessageContract::from_reason_message(FailedReasonType::NotFound, "two"),
            MessageContract::from_reason_message(FailedReasonType::Timeout, "three"),
        ]);
        let error = mixed.error().unwrap();
        assert_eq!(error.failed_reason_type(), FailedReasonType::OperationFailed, "root is OperationFailed");
        assert_eq!(error.message(), "2 of 3 items failed", "root counts the failures");
        let messages: Vec<&str> = error.flatten().into_iter().map(ErrorContract::message).collect();
        assert_eq!(messages, ["two", "three"], "every item error is a child");
    }

    #[test]
    fn iterator_collects_into_a_list_contract() {
        let contract: ListMessageContract<u8> = (1..=3).collect();
        assert_eq!(contract.unwrap(), vec![1, 2, 3], "collected values become the payload");
    }

    #[test]
    fn nested_contract_default_follows_has_result() {
        let inner_zero = MessageContract::success(MessageContract::success(0_u8));
        assert!(!inner_zero.has_result(), "an inner contract without result counts as default");
        let inner_value = MessageContract::success(MessageContract::success(4_u8));
        assert!(inner_value.has_result(), "an inner contract with a result is a result");
    }

    #[test]
    fn display_shows_payload_or_error() {
        assert_eq!(find_user(1).to_string(), "Success: ada", "success shows the payload");
        assert_eq!(find_user(2).to_string(), "Failure: NotFound: user missing", "failure shows the error");
    }
}

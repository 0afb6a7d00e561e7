//! JSON-style wire shape shared by both contract types:
//! `{ "isSuccess": bool, "error": {..}, "success": "..", "result": .. }`.
//!
//! `error`, `success` and `result` are left out when absent. A failed
//! contract ignores any `result` it is sent.
use crate::basecontract::BaseContract;
use crate::errorcontract::ErrorContract;
use crate::messagecontract::MessageContract;
use alloc::string::String;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContractWireRef<'a, T> {
    is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a ErrorContract>,
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
struct ContractWire<T> {
    is_success: bool,
    #[serde(default)]
    error: Option<ErrorContract>,
    #[serde(default)]
    success: Option<String>,
    /// `None` only when the field is missing; a present `null` is handed to
    /// `T`, so `()` and `Option<_>` payloads survive.
    #[serde(default, deserialize_with = "deserialize_present")]
    result: Option<T>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> ContractWire<T> {
    fn into_outcome<E: serde::de::Error>(self) -> Result<(Result<T, ErrorContract>, Option<String>), E> {
        let outcome = match (self.is_success, self.result, self.error) {
            (true, Some(t), None) => Ok(t),
            (true, None, _) => return Err(E::custom("successful contract without result")),
            (true, Some(_), Some(_)) => return Err(E::custom("successful contract carries an error")),
            (false, _, Some(e)) => Err(e),
            (false, _, None) => return Err(E::custom("failed contract without error")),
        };
        Ok((outcome, self.success))
    }
}

impl<T: Serialize> Serialize for MessageContract<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ContractWireRef {
            is_success: self.is_success(),
            error: self.error(),
            success: self.success_message(),
            result: self.result(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MessageContract<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (outcome, success_message) = ContractWire::<T>::deserialize(deserializer)?.into_outcome()?;
        Ok(MessageContract {
            outcome,
            success_message,
        })
    }
}

impl Serialize for BaseContract {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ContractWireRef::<()> {
            is_success: self.is_success(),
            error: self.error(),
            success: self.success_message(),
            result: None,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BaseContract {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut wire = ContractWire::<IgnoredAny>::deserialize(deserializer)?;
        if wire.is_success && wire.result.is_none() {
            wire.result = Some(IgnoredAny);
        }
        let (outcome, success_message) = wire.into_outcome()?;
        Ok(BaseContract {
            outcome: outcome.map(|_| ()),
            success_message,
        })
    }
}

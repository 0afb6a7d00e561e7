//! The error tree carried by a failed contract.
//!
//! A node has a reason, a message and any number of child causes. When a tree
//! moves from one contract to another it is re-parented through
//! [`ErrorContract::to_children`], which keeps the set of causes
//! ([`ErrorContract::flatten`]) intact.
use crate::failedreason::FailedReasonType;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::any::type_name;
use core::error::Error;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{failed_reason_type}: {message}{}", ChildList(.children))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ErrorContract {
    failed_reason_type: FailedReasonType,
    message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    end_user_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    fault_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    details: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    children: Vec<ErrorContract>,
}

impl ErrorContract {
    pub fn new(failed_reason_type: FailedReasonType, message: impl Into<String>) -> Self {
        ErrorContract {
            failed_reason_type,
            message: message.into(),
            end_user_message: None,
            fault_type: None,
            details: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn from_reason(failed_reason_type: FailedReasonType) -> Self {
        ErrorContract::new(failed_reason_type, failed_reason_type.default_message())
    }

    /// Builds a node from a native fault, tagged `InternalError`.
    ///
    /// The fault's `source()` chain ends up in [`details`](Self::details),
    /// outermost cause first.
    pub fn from_fault<E>(fault: &E) -> Self
    where
        E: Error + ?Sized,
    {
        ErrorContract::from_fault_with_reason(FailedReasonType::InternalError, fault)
    }

    pub fn from_fault_with_reason<E>(failed_reason_type: FailedReasonType, fault: &E) -> Self
    where
        E: Error + ?Sized,
    {
        let mut details = Vec::new();
        let mut source = fault.source();
        while let Some(cause) = source {
            details.push(cause.to_string());
            source = cause.source();
        }

        tracing::debug!(
            reason = %failed_reason_type,
            fault = %fault,
            causes = details.len(),
            "converting fault into error contract"
        );

        ErrorContract {
            failed_reason_type,
            message: fault.to_string(),
            end_user_message: None,
            fault_type: Some(type_name::<E>().to_string()),
            details,
            children: Vec::new(),
        }
    }

    /// A root node whose children are the given errors.
    pub fn compose(
        failed_reason_type: FailedReasonType,
        message: impl Into<String>,
        children: impl IntoIterator<Item = ErrorContract>,
    ) -> Self {
        let mut root = ErrorContract::new(failed_reason_type, message);
        root.children.extend(children);
        root
    }

    pub fn with_child(mut self, child: ErrorContract) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: ErrorContract) {
        self.children.push(child);
    }

    pub fn with_end_user_message(mut self, message: impl Into<String>) -> Self {
        self.end_user_message = Some(message.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub const fn failed_reason_type(&self) -> FailedReasonType {
        self.failed_reason_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn end_user_message(&self) -> Option<&str> {
        self.end_user_message.as_deref()
    }

    pub fn fault_type(&self) -> Option<&str> {
        self.fault_type.as_deref()
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn children(&self) -> &[ErrorContract] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Re-parents this tree under a fresh root.
    ///
    /// The root keeps this node's reason, message and metadata. Its children
    /// are this node's children, or a childless copy of this node when it is a
    /// leaf, so applying it twice gives the same tree as applying it once.
    pub fn to_children(&self) -> ErrorContract {
        let children = if self.children.is_empty() {
            let mut leaf = self.clone();
            leaf.children = Vec::new();
            vec![leaf]
        } else {
            self.children.clone()
        };

        ErrorContract {
            failed_reason_type: self.failed_reason_type,
            message: self.message.clone(),
            end_user_message: self.end_user_message.clone(),
            fault_type: self.fault_type.clone(),
            details: self.details.clone(),
            children,
        }
    }

    /// Leaf causes, depth first.
    pub fn flatten(&self) -> Vec<&ErrorContract> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a ErrorContract>) {
        if self.children.is_empty() {
            leaves.push(self);
            return;
        }
        for child in &self.children {
            child.collect_leaves(leaves);
        }
    }

    /// Whether both trees have the same leaf causes in the same order.
    pub fn flattens_like(&self, other: &ErrorContract) -> bool {
        self.flatten() == other.flatten()
    }
}

/// Renders children as ` [a; b]`, or nothing for a leaf.
struct ChildList<'a>(&'a [ErrorContract]);

impl fmt::Display for ChildList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" [")?;
        for (index, child) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(child, f)?;
        }
        f.write_str("]")
    }
}

impl From<FailedReasonType> for ErrorContract {
    fn from(failed_reason_type: FailedReasonType) -> Self {
        ErrorContract::from_reason(failed_reason_type)
    }
}

impl<S: Into<String>> From<(FailedReasonType, S)> for ErrorContract {
    fn from((failed_reason_type, message): (FailedReasonType, S)) -> Self {
        ErrorContract::new(failed_reason_type, message)
    }
}

//! Serialization of group elements.
//!
//! Elements always serialize as members of SL(2,Z): every determinant-1 integer matrix
//! belongs to it, so the originating subgroup is dropped.

use crate::element::GroupElement;
use crate::errors::ArithGroupError;
use crate::matrix::IntoMatrix2;
use crate::preset::generators::SL2Z;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name used by the current legacy layout.
const LEGACY_FIELD: &str = "_ArithmeticSubgroupElement__x";
/// Field name used by older payloads written before the element type was renamed.
const LEGACY_FIELD_OLD: &str = "_CongruenceSubgroupElement__x";

/// The parent a [`Reduction`] is rebuilt in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupTag {
    #[serde(rename = "SL2Z")]
    Sl2z,
}

/// Everything needed to rebuild an element: the target group and the raw entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    pub group: GroupTag,
    pub entries: [BigInt; 4],
}

impl Reduction {
    /// Rebuilds the element, validating the determinant again.
    pub fn reconstruct(self) -> Result<GroupElement, ArithGroupError> {
        match self.group {
            GroupTag::Sl2z => GroupElement::try_with(SL2Z.clone(), self.entries),
        }
    }
}

impl From<GroupElement> for Reduction {
    fn from(element: GroupElement) -> Self {
        element.reduce()
    }
}

impl TryFrom<Reduction> for GroupElement {
    type Error = ArithGroupError;

    fn try_from(reduction: Reduction) -> Result<Self, Self::Error> {
        reduction.reconstruct()
    }
}

impl GroupElement {
    /// The constructor and arguments that rebuild this element in SL(2,Z).
    pub fn reduce(&self) -> Reduction {
        Reduction {
            group: GroupTag::Sl2z,
            entries: self.as_sequence(),
        }
    }

    pub fn to_json(&self) -> Result<String, ArithGroupError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ArithGroupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the legacy layout: either a state object, or a `[parent, state]` pair, whose
    /// state stores the matrix under one of two historical field names.
    ///
    /// The matrix may be flat or nested, with entries as JSON integers or decimal strings.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::UnreadablePayload` if neither field is present or the
    /// stored matrix cannot be read, and `ArithGroupError::TypeMismatch` if its determinant
    /// is not 1.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::element::GroupElement;
    /// let old = r#"{"_CongruenceSubgroupElement__x": [[1, 2], [15, 31]]}"#;
    /// let x = GroupElement::from_legacy_json(old).unwrap();
    /// assert_eq!(x.to_string(), "[ 1  2]\n[15 31]");
    ///
    /// assert!(GroupElement::from_legacy_json(r#"{"x": [1, 0, 0, 1]}"#).is_err());
    /// ```
    pub fn from_legacy_json(payload: &str) -> Result<Self, ArithGroupError> {
        let value: Value = serde_json::from_str(payload)?;

        let state = match &value {
            Value::Array(pair) if pair.len() == 2 => &pair[1],
            other => other,
        };

        let stored = if let Some(x) = state.get(LEGACY_FIELD) {
            x
        } else if let Some(x) = state.get(LEGACY_FIELD_OLD) {
            x
        } else {
            tracing::debug!(payload, "legacy payload has no known matrix field");
            return Err(ArithGroupError::UnreadablePayload(format!(
                "don't know how to read {}",
                payload
            )));
        };

        let entries = legacy_entries(stored)?;
        GroupElement::try_with(SL2Z.clone(), entries.into_matrix2().map_err(unreadable)?)
    }
}

fn unreadable(e: ArithGroupError) -> ArithGroupError {
    ArithGroupError::UnreadablePayload(e.to_string())
}

/// Flattens a stored matrix into its entries, row-major.
fn legacy_entries(stored: &Value) -> Result<Vec<BigInt>, ArithGroupError> {
    let Value::Array(items) = stored else {
        return Err(ArithGroupError::UnreadablePayload(format!(
            "expected a matrix, got {}",
            stored
        )));
    };

    let mut entries = Vec::with_capacity(4);
    for item in items {
        match item {
            Value::Array(_) => entries.extend(legacy_entries(item)?),
            _ => entries.push(legacy_integer(item)?),
        }
    }

    Ok(entries)
}

fn legacy_integer(item: &Value) -> Result<BigInt, ArithGroupError> {
    let parsed = match item {
        // numbers keep their source text, so wide integers survive and `1.5` or `1e3` fail
        Value::Number(n) => n.to_string().parse::<BigInt>().ok(),
        Value::String(s) => s.parse::<BigInt>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ArithGroupError::UnreadablePayload(format!("matrix entry {} is not an integer", item))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::arbitrary::Word;
    use crate::group::{ArithmeticSubgroup, Gamma0};
    use crate::matrix::Matrix2;

    use quickcheck::quickcheck;

    #[test]
    fn test_reduction_targets_universal_group() -> Result<(), ArithGroupError> {
        let x = Gamma0::try_with(7)?.element([1, 0, 7, 1])?;
        let reduction = x.reduce();
        assert_eq!(reduction.group, GroupTag::Sl2z);

        let y = reduction.reconstruct()?;
        assert_eq!(x, y);
        assert_eq!(y.group().to_string(), "Modular Group SL(2,Z)");
        Ok(())
    }

    #[test]
    fn test_reconstruct_rejects_bad_determinant() {
        let reduction = Reduction {
            group: GroupTag::Sl2z,
            entries: [2, 0, 0, 1].map(BigInt::from),
        };
        assert!(matches!(
            reduction.reconstruct(),
            Err(ArithGroupError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_json_round_trip() -> Result<(), ArithGroupError> {
        let big = "340282366920938463463374607431768211457".parse::<BigInt>().unwrap_or_default();
        // [[big, big - 1], [1, 1]]
        let x = GroupElement::try_with(
            SL2Z.clone(),
            Matrix2::new(big.clone(), &big - 1, 1, 1),
        )?;
        let json = x.to_json()?;
        assert!(json.contains("SL2Z"));
        assert_eq!(GroupElement::from_json(&json)?, x);
        Ok(())
    }

    #[test]
    fn test_json_rejects_bad_payload() {
        assert!(matches!(
            GroupElement::from_json("{\"group\": \"SL2Z\"}"),
            Err(ArithGroupError::SerializationError(_))
        ));
    }

    #[test]
    fn test_legacy_current_field_name() -> Result<(), ArithGroupError> {
        let x = GroupElement::from_legacy_json(
            r#"{"_ArithmeticSubgroupElement__x": [1, 2, 15, 31]}"#,
        )?;
        assert_eq!(x, Matrix2::new(1, 2, 15, 31));
        Ok(())
    }

    #[test]
    fn test_legacy_old_field_name_with_parent_pair() -> Result<(), ArithGroupError> {
        let payload = r#"["Congruence Subgroup Gamma0(5)", {"_CongruenceSubgroupElement__x": [["1", "0"], ["5", "1"]]}]"#;
        let x = GroupElement::from_legacy_json(payload)?;
        assert_eq!(x, Matrix2::new(1, 0, 5, 1));
        assert_eq!(x.group().to_string(), "Modular Group SL(2,Z)");
        Ok(())
    }

    #[test]
    fn test_legacy_prefers_current_field_name() -> Result<(), ArithGroupError> {
        let payload = r#"{"_CongruenceSubgroupElement__x": [1, 1, 0, 1], "_ArithmeticSubgroupElement__x": [1, 0, 1, 1]}"#;
        assert_eq!(GroupElement::from_legacy_json(payload)?, Matrix2::new(1, 0, 1, 1));
        Ok(())
    }

    #[test]
    fn test_legacy_entries_beyond_machine_width() -> Result<(), ArithGroupError> {
        let payload = r#"{"_ArithmeticSubgroupElement__x": [1, 0, 123456789012345678901234567890, 1]}"#;
        let x = GroupElement::from_legacy_json(payload)?;
        let c = "123456789012345678901234567890".parse::<BigInt>().unwrap_or_default();
        assert_eq!(x.c(), &c);
        assert_eq!(x, Matrix2::new(1, 0, c, 1));

        let negative = r#"{"_ArithmeticSubgroupElement__x": [1, -100000000000000000000000, 0, 1]}"#;
        let y = GroupElement::from_legacy_json(negative)?;
        assert_eq!(y.b().to_string(), "-100000000000000000000000");
        Ok(())
    }

    #[test]
    fn test_legacy_missing_field_is_unreadable() {
        let result = GroupElement::from_legacy_json(r#"{"_x": [1, 0, 0, 1]}"#);
        assert!(matches!(result, Err(ArithGroupError::UnreadablePayload(_))));
    }

    #[test]
    fn test_legacy_malformed_matrix_is_unreadable() {
        for payload in [
            r#"{"_ArithmeticSubgroupElement__x": [1, 0, 0]}"#,
            r#"{"_ArithmeticSubgroupElement__x": [1, 0, 0, 1.5]}"#,
            r#"{"_ArithmeticSubgroupElement__x": [1, 0, 0, 1.0]}"#,
            r#"{"_ArithmeticSubgroupElement__x": [1, 0, 0, 1e3]}"#,
            r#"{"_ArithmeticSubgroupElement__x": "I"}"#,
        ] {
            let result = GroupElement::from_legacy_json(payload);
            assert!(
                matches!(result, Err(ArithGroupError::UnreadablePayload(_))),
                "payload {} gave {:?}",
                payload,
                result
            );
        }
    }

    quickcheck! {
        fn prop_reduction_round_trip(x: Word) -> bool {
            matches!(x.0.reduce().reconstruct(), Ok(y) if y == x.0)
        }

        fn prop_json_round_trip(x: Word) -> bool {
            let json = match x.0.to_json() {
                Ok(json) => json,
                Err(_) => return false,
            };
            matches!(GroupElement::from_json(&json), Ok(y) if y == x.0)
        }
    }
}

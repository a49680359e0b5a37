use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidateLength;

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field not present in the payload
/// - `SetToNull` → explicitly `null`
/// - `SetToValue` → set to provided value
///
/// Containing structs must carry `#[serde(default)]` so that absent keys
/// resolve to `Unchanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

/// Serializes as the value when set, otherwise as `null`.
impl<T: Serialize> Serialize for OptionField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.flatten_ref().serialize(serializer)
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

// ---------------------- Core helpers ----------------------

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Borrowed flatten, what a bind parameter expects once the field is known to be touched.
    pub fn flatten_ref(&self) -> Option<&T> {
        match self {
            OptionField::SetToValue(v) => Some(v),
            _ => None
        }
    }

    /// Writes the patch onto an existing nullable value.
    pub fn apply_to(&self, target: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            OptionField::Unchanged => {}
            OptionField::SetToNull => *target = None,
            OptionField::SetToValue(v) => *target = Some(v.clone()),
        }
    }
}

impl OptionField<String> {
    pub fn flatten_str(&self) -> Option<&str> {
        self.flatten_ref().map(|s| s.as_str())
    }
}

pub type PatchString = OptionField<String>;

use serde::{
    Deserialize, Deserializer,
    de::{IntoDeserializer, value::StringDeserializer},
};

/// Optional free text as the matching code sees it: `None` for missing or empty strings.
///
/// Whitespace-only values stay present here; callers that need a trimmed check
/// use [`non_blank`].
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Optional free text with surrounding whitespace removed; `None` when nothing is left.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Length of the trimmed text in UTF-16 code units, 0 when missing.
///
/// Matches the length the profile form counts, so characters outside the BMP
/// (emoji) count twice.
pub fn trimmed_text_len(value: &Option<String>) -> usize {
    value.as_deref().map_or(0, |s| s.trim().encode_utf16().count())
}

/// Reads an explicit JSON `null` as the type's default.
///
/// Store exports write `null` for cleared arrays and counters, which plain
/// `#[serde(default)]` only covers when the key is missing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a string-valued enum where `null` and `""` both mean unset.
///
/// Any other string still has to name a variant.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => {
            let variant: StringDeserializer<D::Error> = raw.into_deserializer();
            T::deserialize(variant).map(Some)
        }
    }
}

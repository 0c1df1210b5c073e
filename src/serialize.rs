//! Contains custom deserialization functions. Inventory responses are loosely typed: numbers are
//! often sent as strings, booleans as `0`/`1`, and lists are sometimes sent as maps. Every
//! function here accepts `null` and falls back to a default rather than failing.

use std::str::FromStr;
use std::marker::PhantomData;
use std::fmt::{self, Display};
use serde::{Deserialize, Serializer};
use serde::de::{self, DeserializeOwned, MapAccess, Visitor, SeqAccess, Deserializer};

/// Deserializes a number sent either as a string or a number. `null` and empty strings become
/// the default value.
pub fn string_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + Default,
    T::Err: Display,
{
    Ok(option_string_or_number(deserializer)?.unwrap_or_default())
}

/// Deserializes an optional number sent either as a string or a number.
pub fn option_string_or_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    T::Err: Display,
{
    struct NumericVisitor<T> {
        marker: PhantomData<T>,
    }
    
    impl<'de, T> Visitor<'de> for NumericVisitor<T>
    where
        T: FromStr + TryFrom<u64>,
        T::Err: Display,
    {
        type Value = Option<T>;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string")
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            T::try_from(v)
                .map(Some)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }
        
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let v = u64::try_from(v)
                .map_err(|_e| de::Error::invalid_value(de::Unexpected::Signed(v), &self))?;
            
            self.visit_u64(v)
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v.trim() {
                "" => Ok(None),
                v => v.parse::<T>().map(Some).map_err(de::Error::custom),
            }
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }
    
    deserializer.deserialize_any(NumericVisitor { marker: PhantomData })
}

/// Deserializes a loosely typed boolean. `null` becomes `false`.
pub fn bool_ish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(option_bool_ish(deserializer)?.unwrap_or(false))
}

/// Deserializes a loosely typed optional boolean. Accepts booleans, numbers (zero is `false`) and
/// strings (`""` and `"0"` are `false`).
pub fn option_bool_ish<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;
    
    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = Option<bool>;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean, an integer or a string")
        }
        
        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v != 0))
        }
        
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v != 0))
        }
        
        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v != 0.0))
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(!matches!(v, "" | "0")))
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }
    
    deserializer.deserialize_any(BoolVisitor)
}

/// Deserializes a list that may be sent as a sequence or as a map of values. `null` becomes an
/// empty list. Anything other than a sequence, a map or an empty string is an error, but entries
/// that do not decode are skipped.
pub fn hashmap_or_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = deserializer.deserialize_any(ListVisitor { strict: true })?;
    
    Ok(values.map(decode_entries).unwrap_or_default())
}

/// Deserializes an optional list that may be sent as a sequence or as a map of values. An empty
/// string is treated as an empty list. Any other value becomes `None` and entries that do not
/// decode are skipped.
pub fn option_hashmap_or_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = deserializer.deserialize_any(ListVisitor { strict: false })?;
    
    Ok(values.map(decode_entries))
}

/// Decodes each entry on its own so one malformed entry does not fail the whole list.
fn decode_entries<T: DeserializeOwned>(values: Vec<serde_json::Value>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(entry) => Some(entry),
            Err(error) => {
                log::debug!("Skipping malformed entry: {error}");
                None
            },
        })
        .collect()
}

/// Collects the raw entries of a sequence or a map, keeping their order. When not `strict`,
/// values that are not lists become `None`.
struct ListVisitor {
    strict: bool,
}

impl ListVisitor {
    fn not_a_list<E>(self, unexpected: de::Unexpected) -> Result<Option<Vec<serde_json::Value>>, E>
    where
        E: de::Error,
    {
        if self.strict {
            Err(de::Error::invalid_type(unexpected, &self))
        } else {
            Ok(None)
        }
    }
}

impl<'de> Visitor<'de> for ListVisitor {
    type Value = Option<Vec<serde_json::Value>>;
    
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence or a map")
    }
    
    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(visitor.size_hint().unwrap_or(0));
        
        while let Some(value) = visitor.next_element::<serde_json::Value>()? {
            values.push(value);
        }
        
        Ok(Some(values))
    }
    
    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut values = Vec::new();
        
        while let Some((_key, value)) = access.next_entry::<String, serde_json::Value>()? {
            values.push(value);
        }
        
        Ok(Some(values))
    }
    
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match v {
            "" => Ok(Some(Vec::new())),
            other => self.not_a_list(de::Unexpected::Str(other)),
        }
    }
    
    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.not_a_list(de::Unexpected::Bool(v))
    }
    
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.not_a_list(de::Unexpected::Unsigned(v))
    }
    
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.not_a_list(de::Unexpected::Signed(v))
    }
    
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.not_a_list(de::Unexpected::Float(v))
    }
    
    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }
    
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }
}

/// Serializes a value as its string form e.g. a 64-bit ID as `"4706541372373567089"`.
pub fn as_string<S, T>(value: &T, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: ToString,
{
    s.serialize_str(&value.to_string())
}

/// Deserializes a string, treating `null` as an empty string and numbers as their decimal text.
pub fn option_string_lossy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

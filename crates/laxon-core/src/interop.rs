//! Serde bridge -- typed Rust data and strict JSON in and out of [`Value`].
//!
//! The codec itself is total over the closed value union; this module is
//! the boundary where arbitrary data enters and leaves it:
//!
//! - [`to_value`] / [`to_text`] serialize anything implementing
//!   `serde::Serialize` into a [`Value`] tree or laxon text. A map key
//!   that does not serialize to a string is rejected with
//!   [`Error::InvalidValue`] -- never coerced.
//! - [`from_text`] parses laxon text and deserializes into any
//!   `serde::Deserialize` type.
//! - `TryFrom<&Value> for serde_json::Value` converts to strict JSON,
//!   failing on the IEEE specials strict JSON cannot represent;
//!   `From<serde_json::Value> for Value` is total in the other direction.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::parser::parse;
use crate::serializer::stringify;
use crate::value::Value;

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidValue(msg.to_string())
    }
}

/// Serialize any `Serialize` data into a [`Value`] tree.
///
/// Scalars map onto the union the obvious way: every integer width and
/// `f32` widen to `f64`, chars and strings become [`Value::String`],
/// `None`, unit and unit structs become [`Value::Void`], byte slices
/// become arrays of numbers. Unit enum variants become their name;
/// newtype, tuple and struct variants become a single-member object keyed
/// by the variant name.
///
/// # Errors
///
/// [`Error::InvalidValue`] when a map key does not serialize to a string:
///
/// ```rust
/// use std::collections::HashMap;
/// use laxon_core::interop::to_value;
///
/// let by_id: HashMap<u32, &str> = HashMap::from([(7, "rye")]);
/// assert!(to_value(&by_id).is_err());
/// ```
pub fn to_value<T: Serialize>(data: &T) -> Result<Value> {
    data.serialize(ValueSerializer)
}

/// Serialize any `Serialize` data directly to laxon text.
///
/// ```rust
/// use serde::Serialize;
/// use laxon_core::interop::to_text;
///
/// #[derive(Serialize)]
/// struct Recipe {
///     title: String,
///     servings: u8,
/// }
///
/// let recipe = Recipe { title: "Rye bread".into(), servings: 4 };
/// let text = to_text(&recipe).unwrap();
/// assert!(text.contains("'title': 'Rye bread'"));
/// ```
pub fn to_text<T: Serialize>(data: &T) -> Result<String> {
    Ok(stringify(&to_value(data)?))
}

/// Parse laxon text and deserialize it into `T`.
///
/// Routed through strict JSON, so a document containing `NaN` or
/// `±Infinity` arrives as null on this path.
///
/// ```rust
/// use laxon_core::interop::from_text;
///
/// let servings: Vec<f64> = from_text("[2, 4, 6]").unwrap();
/// assert_eq!(servings, [2.0, 4.0, 6.0]);
/// ```
pub fn from_text<T: de::DeserializeOwned>(text: &str) -> Result<T> {
    let value = parse(text)?;
    let json = serde_json::to_value(&value).map_err(|e| Error::InvalidValue(e.to_string()))?;
    serde_json::from_value(json).map_err(|e| Error::InvalidValue(e.to_string()))
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Void => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(members) => serializer.collect_map(members),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any laxon value")
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Value, E> {
                Ok(Value::Number(v as f64))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Value, E> {
                Ok(Value::Number(v as f64))
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<Value, E> {
                Ok(Value::Number(v))
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Value, E> {
                Ok(Value::String(v))
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Void)
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Void)
            }

            fn visit_some<D: Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> std::result::Result<Value, D::Error> {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Value, A::Error> {
                let mut members = HashMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    members.insert(key, value);
                }
                Ok(Value::Object(members))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Strict-JSON conversion. Fails with [`Error::InvalidValue`] on `NaN`
/// and `±Infinity`, which strict JSON has no representation for; the
/// caller decides whether to pre-process those out.
impl TryFrom<&Value> for serde_json::Value {
    type Error = Error;

    fn try_from(value: &Value) -> Result<serde_json::Value> {
        Ok(match value {
            Value::Void => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| Error::InvalidValue(format!("{n} has no strict JSON form")))?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_>>()?,
            ),
            Value::Object(members) => serde_json::Value::Object(
                members
                    .iter()
                    .map(|(key, member)| Ok((key.clone(), member.try_into()?)))
                    .collect::<Result<_>>()?,
            ),
        })
    }
}

/// Total in this direction; integers widen to `f64`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Void,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, member)| (key, member.into()))
                    .collect(),
            ),
        }
    }
}

/// `serde::Serializer` producing a [`Value`] tree.
///
/// This is the dynamic front door of the codec: input shape is
/// unconstrained, content is checked. The one rule with teeth lives in
/// [`SerializeMap::serialize_key`]: keys must come out as strings.
struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(
            v.iter().map(|byte| Value::Number(f64::from(*byte))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Void)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Void)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Void)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        let inner = value.serialize(ValueSerializer)?;
        Ok(Value::Object(HashMap::from([(variant.to_string(), inner)])))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeVec {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeObject {
            members: HashMap::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(None)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            members: HashMap::new(),
        })
    }
}

struct SerializeVec {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

struct SerializeTupleVariant {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(HashMap::from([(
            self.variant.to_string(),
            Value::Array(self.items),
        )])))
    }
}

struct SerializeObject {
    members: HashMap<String, Value>,
    pending_key: Option<String>,
}

impl ser::SerializeMap for SerializeObject {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        match key.serialize(ValueSerializer)? {
            Value::String(key) => {
                self.pending_key = Some(key);
                Ok(())
            }
            _ => Err(Error::InvalidValue("map key is not a string".to_string())),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::InvalidValue("map value without a key".to_string()))?;
        self.members.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.members))
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.members
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.members))
    }
}

struct SerializeStructVariant {
    variant: &'static str,
    members: HashMap<String, Value>,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.members
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(HashMap::from([(
            self.variant.to_string(),
            Value::Object(self.members),
        )])))
    }
}

//! `serde::Serializer` implementations backing [`super::encode`].

use serde::Serialize;
use serde::ser::{self, Impossible};

use super::markers::{COMMA_SEPARATED, CREATE_ONLY, FILL_EMPTY, UPDATE_ONLY};
use super::{Operation, Values, ValuesError};

type Result<T> = std::result::Result<T, ValuesError>;

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    fill_empty: bool,
    comma_separated: bool,
}

fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Serializes one value under `key`, recursing into compound values.
pub(super) struct ValueSerializer<'v> {
    out: &'v mut Values,
    operation: Option<Operation>,
    key: String,
    flags: Flags,
}

impl<'v> ValueSerializer<'v> {
    pub(super) fn new(out: &'v mut Values, operation: Option<Operation>) -> Self {
        Self::keyed(out, operation, String::new())
    }

    fn keyed(out: &'v mut Values, operation: Option<Operation>, key: String) -> Self {
        Self {
            out,
            operation,
            key,
            flags: Flags::default(),
        }
    }

    fn emit(self, value: String) -> Result<()> {
        if self.key.is_empty() {
            return Err(ValuesError::Unkeyed);
        }
        self.out.add(self.key, value);
        Ok(())
    }

    fn unsupported(self, kind: &'static str) -> ValuesError {
        ValuesError::Unsupported {
            key: self.key,
            kind,
        }
    }

    fn selected(&self, marker: &str) -> bool {
        match (marker, self.operation) {
            (CREATE_ONLY, Some(Operation::Update)) => false,
            (UPDATE_ONLY, Some(Operation::Create)) => false,
            _ => true,
        }
    }
}

macro_rules! emit_display {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<()> {
                self.emit(v.to_string())
            }
        )*
    };
}

impl<'v> ser::Serializer for ValueSerializer<'v> {
    type Ok = ();
    type Error = ValuesError;
    type SerializeSeq = SeqEncoder<'v>;
    type SerializeTuple = SeqEncoder<'v>;
    type SerializeTupleStruct = SeqEncoder<'v>;
    type SerializeTupleVariant = Impossible<(), ValuesError>;
    type SerializeMap = MapEncoder<'v>;
    type SerializeStruct = StructEncoder<'v>;
    type SerializeStructVariant = Impossible<(), ValuesError>;

    emit_display! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(self.unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.emit(variant.to_string())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        mut self,
        name: &'static str,
        value: &T,
    ) -> Result<()> {
        match name {
            FILL_EMPTY => self.flags.fill_empty = true,
            COMMA_SEPARATED => self.flags.comma_separated = true,
            CREATE_ONLY | UPDATE_ONLY if !self.selected(name) => return Ok(()),
            _ => {}
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(self.unsupported("an enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqEncoder<'v>> {
        Ok(SeqEncoder {
            out: self.out,
            operation: self.operation,
            key: self.key,
            flags: self.flags,
            joined: Vec::new(),
            count: 0,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqEncoder<'v>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqEncoder<'v>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.unsupported("an enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapEncoder<'v>> {
        Ok(MapEncoder {
            out: self.out,
            operation: self.operation,
            prefix: self.key,
            pending: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<StructEncoder<'v>> {
        Ok(StructEncoder {
            out: self.out,
            operation: self.operation,
            prefix: self.key,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.unsupported("an enum variant with data"))
    }
}

/// Sequences: one pair per element, or a single comma-joined pair.
pub(super) struct SeqEncoder<'v> {
    out: &'v mut Values,
    operation: Option<Operation>,
    key: String,
    flags: Flags,
    joined: Vec<String>,
    count: usize,
}

impl SeqEncoder<'_> {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.count += 1;
        if self.flags.comma_separated {
            if let Some(item) = value.serialize(ScalarSerializer)? {
                self.joined.push(item);
            }
            return Ok(());
        }
        value.serialize(ValueSerializer::keyed(
            &mut *self.out,
            self.operation,
            self.key.clone(),
        ))
    }

    fn finish(self) -> Result<()> {
        if self.key.is_empty() {
            // Unkeyed elements already failed in `push` unless they were joined.
            if self.flags.comma_separated && self.count > 0 {
                return Err(ValuesError::Unkeyed);
            }
            return Ok(());
        }
        if self.flags.comma_separated {
            self.out.add(self.key, self.joined.join(","));
        } else if self.count == 0 && self.flags.fill_empty {
            self.out.add(self.key, String::new());
        }
        Ok(())
    }
}

impl ser::SerializeSeq for SeqEncoder<'_> {
    type Ok = ();
    type Error = ValuesError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqEncoder<'_> {
    type Ok = ();
    type Error = ValuesError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqEncoder<'_> {
    type Ok = ();
    type Error = ValuesError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Maps: each entry becomes `<prefix>.<key>`.
pub(super) struct MapEncoder<'v> {
    out: &'v mut Values,
    operation: Option<Operation>,
    prefix: String,
    pending: Option<String>,
}

impl ser::SerializeMap for MapEncoder<'_> {
    type Ok = ();
    type Error = ValuesError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        match key.serialize(ScalarSerializer)? {
            Some(name) if !name.is_empty() => {
                self.pending = Some(name);
                Ok(())
            }
            _ => Err(ValuesError::InvalidKey),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let name = self.pending.take().ok_or(ValuesError::InvalidKey)?;
        value.serialize(ValueSerializer::keyed(
            &mut *self.out,
            self.operation,
            join_key(&self.prefix, &name),
        ))
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Structs: each field becomes `<prefix>.<field>`.
pub(super) struct StructEncoder<'v> {
    out: &'v mut Values,
    operation: Option<Operation>,
    prefix: String,
}

impl ser::SerializeStruct for StructEncoder<'_> {
    type Ok = ();
    type Error = ValuesError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(ValueSerializer::keyed(
            &mut *self.out,
            self.operation,
            join_key(&self.prefix, name),
        ))
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Renders a scalar as a string; `None` and unit become `Ok(None)`.
///
/// Used for map keys and comma-joined sequence items.
struct ScalarSerializer;

macro_rules! scalar_display {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Option<String>> {
                Ok(Some(v.to_string()))
            }
        )*
    };
}

fn not_scalar(kind: &'static str) -> ValuesError {
    ValuesError::Unsupported {
        key: String::new(),
        kind,
    }
}

impl ser::Serializer for ScalarSerializer {
    type Ok = Option<String>;
    type Error = ValuesError;
    type SerializeSeq = Impossible<Option<String>, ValuesError>;
    type SerializeTuple = Impossible<Option<String>, ValuesError>;
    type SerializeTupleStruct = Impossible<Option<String>, ValuesError>;
    type SerializeTupleVariant = Impossible<Option<String>, ValuesError>;
    type SerializeMap = Impossible<Option<String>, ValuesError>;
    type SerializeStruct = Impossible<Option<String>, ValuesError>;
    type SerializeStructVariant = Impossible<Option<String>, ValuesError>;

    scalar_display! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Option<String>> {
        Err(not_scalar("bytes"))
    }

    fn serialize_none(self) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Option<String>> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Option<String>> {
        Ok(Some(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Option<String>> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Option<String>> {
        Err(not_scalar("an enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_scalar("a nested sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_scalar("a tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_scalar("a tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_scalar("an enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_scalar("a map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_scalar("a struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_scalar("an enum variant with data"))
    }
}

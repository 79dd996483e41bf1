//! Mapping between domain attributes and wire attributes

use groundlink_interface::Attribute;
use groundlink_proto::{attribute::Value, Attribute as WireAttribute, AttributeList};

pub(crate) fn to_wire(attribute: &Attribute) -> WireAttribute {
    let value = match attribute {
        Attribute::Boolean(v) => Value::BoolValue(*v),
        Attribute::Long(v) => Value::LongValue(*v),
        Attribute::ULong(v) => Value::UlongValue(*v),
        Attribute::Float(v) => Value::FloatValue(*v),
        Attribute::Double(v) => Value::DoubleValue(*v),
        Attribute::String(v) => Value::StringValue(v.clone()),
        Attribute::Blob(v) => Value::BlobValue(v.clone()),
        Attribute::List(items) => Value::ListValue(AttributeList {
            items: items.iter().map(to_wire).collect(),
        }),
    };

    WireAttribute { value: Some(value) }
}

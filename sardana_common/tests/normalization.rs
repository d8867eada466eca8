//! Descriptor normalization over the Tango type names device servers send.

use sardana_common::data::{
    AccessDescriptor, DataAccess, DataFormat, DataType, TypeDescriptor, normalize_access,
    normalize_type,
};

const TANGO_SCALARS: &[(&str, DataType)] = &[
    ("DevShort", DataType::Invalid),
    ("DevLong", DataType::Integer),
    ("DevDouble", DataType::Double),
    ("DevFloat", DataType::Double),
    ("DevString", DataType::String),
    ("DevBoolean", DataType::Boolean),
    ("PyTango.DevLong", DataType::Integer),
    ("int", DataType::Integer),
    ("Integer", DataType::Integer),
    ("FLOAT", DataType::Double),
    ("str", DataType::String),
    ("bool", DataType::Boolean),
];

#[test]
fn absent_is_scalar_double() {
    assert_eq!(
        normalize_type(&TypeDescriptor::Absent),
        (DataType::Double, DataFormat::Scalar)
    );
}

#[test]
fn scalar_names() {
    for (name, expected) in TANGO_SCALARS {
        assert_eq!(
            normalize_type(&(*name).into()),
            (*expected, DataFormat::Scalar),
            "{name}"
        );
    }
}

#[test]
fn array_suffix_adds_one_dimension() {
    for (name, _) in TANGO_SCALARS {
        let scalar = normalize_type(&(*name).into());
        let array = normalize_type(&format!("{name}Array").into());
        assert_eq!(array.0, scalar.0, "{name}Array type");
        assert_eq!(array.1, scalar.1.bump(), "{name}Array format");
    }
    assert_eq!(
        normalize_type(&"DevVarLongArray".into()),
        (DataType::Integer, DataFormat::OneD)
    );
    assert_eq!(
        normalize_type(&"DevVarLong".into()),
        (DataType::Integer, DataFormat::Scalar)
    );
}

#[test]
fn nested_sequences() {
    let image = TypeDescriptor::Seq(vec![TypeDescriptor::Seq(vec!["DevDouble".into()])]);
    assert_eq!(normalize_type(&image), (DataType::Double, DataFormat::TwoD));

    let spectrum_of_arrays = TypeDescriptor::Seq(vec!["DevVarStringArray".into()]);
    assert_eq!(
        normalize_type(&spectrum_of_arrays),
        (DataType::String, DataFormat::TwoD)
    );
}

#[test]
fn access_modes() {
    let cases = [
        ("READ", DataAccess::ReadOnly),
        ("PyTango.read", DataAccess::ReadOnly),
        ("READ_WRITE", DataAccess::ReadWrite),
        ("readwrite", DataAccess::ReadWrite),
        ("WRITE", DataAccess::ReadWrite),
        ("weird_token", DataAccess::ReadWrite),
    ];
    for (name, expected) in cases {
        assert_eq!(normalize_access(&name.into()), expected, "{name}");
    }
    assert_eq!(normalize_access(&AccessDescriptor::Absent), DataAccess::Invalid);
}

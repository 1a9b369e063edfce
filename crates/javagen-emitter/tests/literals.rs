use super::*;
use javagen_model::{ClassRef, Type};

fn render(value: &Literal) -> String {
    let names = NameRegistry::new();
    LiteralSerializer::new(&names).render(value).unwrap()
}

#[test]
fn test_scalars() {
    assert_eq!(render(&Literal::Bool(true)), "true");
    assert_eq!(render(&Literal::Int(-7)), "-7");
    assert_eq!(render(&Literal::Byte(3)), "3");
    assert_eq!(render(&Literal::Short(300)), "300");
    assert_eq!(render(&Literal::Long(10_000_000_000)), "10000000000L");
}

#[test]
fn test_floating_point() {
    assert_eq!(render(&Literal::Double(1.0)), "1.0");
    assert_eq!(render(&Literal::Double(0.25)), "0.25");
    assert_eq!(render(&Literal::Float(1.5)), "1.5f");
    assert_eq!(render(&Literal::Double(f64::NAN)), "Double.NaN");
    assert_eq!(render(&Literal::Float(f32::NEG_INFINITY)), "Float.NEGATIVE_INFINITY");
}

#[test]
fn test_arrays_recurse() {
    let value = Literal::Array(vec![
        Literal::Int(1),
        Literal::Array(vec![Literal::string("a"), Literal::string("b")]),
    ]);
    assert_eq!(render(&value), "{1, {\"a\", \"b\"}}");
    assert_eq!(render(&Literal::Array(Vec::new())), "{}");
}

#[test]
fn test_class_literal_follows_imports() {
    let mut names = NameRegistry::new();
    let ty = Type::named("java.io.IOException");
    {
        let serializer = LiteralSerializer::new(&names);
        assert_eq!(
            serializer.render(&Literal::class_of(ty.clone())).unwrap(),
            "java.io.IOException.class"
        );
    }
    names.register_class("java.io.IOException");
    let serializer = LiteralSerializer::new(&names);
    assert_eq!(serializer.render(&Literal::class_of(ty)).unwrap(), "IOException.class");
    assert_eq!(serializer.render(&Literal::class_of(Type::int())).unwrap(), "int.class");
}

#[test]
fn test_enum_constants_are_always_qualified() {
    let mut names = NameRegistry::new();
    names.register_package("java.lang.annotation");
    let value = Literal::enum_constant(
        ClassRef::parse("java.lang.annotation.RetentionPolicy"),
        "RUNTIME",
    );
    assert_eq!(
        LiteralSerializer::new(&names).render(&value).unwrap(),
        "java.lang.annotation.RetentionPolicy.RUNTIME"
    );
}

#[test]
fn test_string_escaping() {
    assert_eq!(render(&Literal::string("plain")), "\"plain\"");
    assert_eq!(
        render(&Literal::string("say \"hi\"\n\ttab\\")),
        "\"say \\\"hi\\\"\\n\\ttab\\\\\""
    );
    assert_eq!(render(&Literal::string("\u{1}")), "\"\\u0001\"");
    assert_eq!(render(&Literal::string("é")), "\"\\u00E9\"");
    assert_eq!(render(&Literal::string("😀")), "\"\\uD83D\\uDE00\"");
}

#[test]
fn test_forward_slashes_are_not_escaped() {
    assert_eq!(render(&Literal::string("http://example.com/a")), "\"http://example.com/a\"");
}

#[test]
fn test_escaped_slash_input_keeps_its_backslash() {
    // The value holds a backslash followed by a slash.
    assert_eq!(render(&Literal::string("a\\/b")), "\"a\\\\/b\"");
}

#[test]
fn test_escape_java_escapes_slash() {
    assert_eq!(escape_java("a/b"), "a\\/b");
}

#[test]
fn test_unsupported_shapes() {
    let names = NameRegistry::new();
    let serializer = LiteralSerializer::new(&names);

    let err = serializer.render(&Literal::Char('x')).unwrap_err();
    assert!(matches!(err, WriteError::UnsupportedLiteral(ref s) if s == "char 'x'"));

    let err = serializer.render(&Literal::Null).unwrap_err();
    assert_eq!(err.to_string(), "unsupported annotation value: null");

    // Nested inside an array the error still surfaces.
    let nested = Literal::Array(vec![Literal::Int(1), Literal::Null]);
    assert!(serializer.render(&nested).is_err());
}

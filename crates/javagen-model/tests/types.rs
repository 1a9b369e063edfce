use super::*;

#[test]
fn test_class_ref_parse() {
    let class = ClassRef::parse("com.example.codegen.Superclass");
    assert_eq!(class.package, "com.example.codegen");
    assert_eq!(class.name, "Superclass");

    let bare = ClassRef::parse("Local");
    assert_eq!(bare.package, "");
    assert_eq!(bare.name, "Local");
}

#[test]
fn test_full_name() {
    assert_eq!(Type::string().full_name(), "java.lang.String");
    assert_eq!(Type::int().full_name(), "int");
    assert_eq!(Type::class("", "Local").full_name(), "Local");
}

#[test]
fn test_render_primitives_ignore_registry() {
    let names = NameRegistry::qualified();
    assert_eq!(Type::void().render(true, &names), "void");
    assert_eq!(Type::long().render(false, &names), "long");
    assert_eq!(Type::array_of(Type::int()).render(true, &names), "int[]");
}

#[test]
fn test_render_generic_arguments() {
    let mut names = NameRegistry::new();
    let ty = Type::map(Type::string(), Type::list(Type::variable("T")));
    assert_eq!(
        ty.render(true, &names),
        "java.util.Map<String, java.util.List<T>>"
    );

    names.register_package("java.util");
    assert_eq!(ty.render(true, &names), "Map<String, List<T>>");
}

#[test]
fn test_render_wildcards() {
    let names = NameRegistry::new();
    let ty = Type::generic(
        "java.lang",
        "Class",
        vec![Type::extends(Type::class("java.lang", "Number"))],
    );
    assert_eq!(ty.render(true, &names), "Class<? extends Number>");

    let sup = Type::list(Type::super_of(Type::class("java.lang", "Integer")));
    assert_eq!(sup.render(true, &names), "java.util.List<? super Integer>");

    assert_eq!(Type::list(Type::wildcard()).render(true, &names), "java.util.List<?>");
}

#[test]
fn test_type_variable_position() {
    let names = NameRegistry::new();
    let var = Type::bounded_variable("T", Type::class("java.lang", "Number"));
    assert_eq!(var.render(true, &names), "T");
    assert_eq!(var.render(false, &names), "T extends Number");
}

#[test]
fn test_declaration_name_prints_bounds() {
    let names = NameRegistry::new();
    let ty = Type::generic(
        "com.example",
        "Box",
        vec![
            Type::bounded_variable("T", Type::class("java.lang", "Comparable")),
            Type::variable("U"),
        ],
    );
    assert_eq!(ty.declaration_name(&names), "Box<T extends Comparable, U>");
    assert_eq!(ty.render(true, &names), "com.example.Box<T, U>");
}

#[test]
fn test_display_is_fully_qualified() {
    assert_eq!(Type::list(Type::string()).to_string(), "java.util.List<java.lang.String>");
}

#[test]
fn test_type_deserializes_from_json() {
    let json = r#"{"class": {"package": "java.util", "name": "List", "arguments": [{"primitive": "int"}]}}"#;
    let ty: Type = serde_json::from_str(json).unwrap();
    assert_eq!(ty, Type::list(Type::int()));
}

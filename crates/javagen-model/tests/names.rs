use super::*;
use crate::types::Type;

#[test]
fn test_java_lang_is_implicit() {
    let names = NameRegistry::new();
    assert!(names.is_package_registered("java.lang"));
    assert_eq!(names.resolve(&Type::string()), "String");
    assert_eq!(names.resolve(&Type::object()), "Object");
}

#[test]
fn test_unregistered_type_is_qualified() {
    let names = NameRegistry::new();
    let ty = Type::named("java.io.IOException");
    assert_eq!(names.resolve(&ty), "java.io.IOException");
}

#[test]
fn test_registered_class_is_short() {
    let mut names = NameRegistry::new();
    names.register_class("java.io.IOException");
    assert_eq!(names.resolve(&Type::named("java.io.IOException")), "IOException");
    // Only the registered class, not its siblings.
    assert_eq!(names.resolve(&Type::named("java.io.File")), "java.io.File");
}

#[test]
fn test_registered_package_is_short() {
    let mut names = NameRegistry::new();
    names.register_package("java.util");
    assert_eq!(names.resolve(&Type::named("java.util.ArrayList")), "ArrayList");
    assert!(names.is_imported(&Type::named("java.util.HashMap")));
}

#[test]
fn test_double_registration_is_noop() {
    let mut names = NameRegistry::qualified();
    names.register_class("a.B");
    names.register_class("a.B");
    names.register_package("c");
    names.register_package("c");
    assert_eq!(names.imported_classes().count(), 1);
    assert_eq!(names.imported_packages().count(), 1);
}

#[test]
fn test_qualified_registry_has_no_implicit_package() {
    let names = NameRegistry::qualified();
    assert_eq!(names.resolve(&Type::string()), "java.lang.String");
    // Types without a package never need qualification.
    assert_eq!(names.resolve(&Type::int()), "int");
    assert_eq!(names.resolve(&Type::class("", "Local")), "Local");
}

#[test]
fn test_custom_implicit_packages() {
    let names = NameRegistry::with_implicit_packages(["kotlin", "java.lang"]);
    assert_eq!(names.resolve(&Type::named("kotlin.Unit")), "Unit");
    assert_eq!(names.resolve(&Type::string()), "String");
}

#[test]
fn test_simple_name_collisions_are_not_detected() {
    let mut names = NameRegistry::new();
    names.register_class("java.util.List");
    names.register_class("java.awt.List");
    assert_eq!(names.resolve(&Type::named("java.util.List")), "List");
    assert_eq!(names.resolve(&Type::named("java.awt.List")), "List");
}

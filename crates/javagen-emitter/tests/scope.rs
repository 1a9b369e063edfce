use super::*;

#[test]
fn test_pop_on_empty_stack_fails() {
    let mut stack = ScopeStack::new();
    assert!(matches!(stack.pop(), Err(WriteError::EmptyScope)));
    assert!(matches!(stack.peek(), Err(WriteError::EmptyScope)));
}

#[test]
fn test_member_without_type_fails() {
    let mut stack = ScopeStack::new();
    assert!(matches!(
        stack.push_member(MemberKind::Constructor),
        Err(WriteError::EmptyScope)
    ));
    assert!(stack.is_empty());
}

#[test]
fn test_enclosing_type_name_through_members() {
    let mut stack = ScopeStack::new();
    stack.push_type(TypeKind::Class, "Outer");
    stack.push_member(MemberKind::Method).unwrap();
    assert_eq!(stack.current_enclosing_type_name().unwrap(), "Outer");

    stack.push_member(MemberKind::Constructor).unwrap();
    assert_eq!(stack.current_enclosing_type_name().unwrap(), "Outer");
    assert_eq!(
        stack.peek().unwrap(),
        &Scope::Member(MemberScope {
            kind: MemberKind::Constructor,
            enclosing: 0,
        })
    );
}

#[test]
fn test_nested_types() {
    let mut stack = ScopeStack::new();
    stack.push_type(TypeKind::Class, "Outer");
    stack.push_type(TypeKind::Interface, "Inner");
    assert_eq!(stack.current_enclosing_type_name().unwrap(), "Inner");

    stack.pop().unwrap();
    assert_eq!(stack.current_enclosing_type_name().unwrap(), "Outer");
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_pop_returns_innermost() {
    let mut stack = ScopeStack::new();
    stack.push_type(TypeKind::Class, "A");
    stack.push_member(MemberKind::Method).unwrap();
    assert!(matches!(stack.pop().unwrap(), Scope::Member(_)));
    match stack.pop().unwrap() {
        Scope::Type(ty) => {
            assert_eq!(ty.kind, TypeKind::Class);
            assert_eq!(ty.simple_name, "A");
        }
        other => panic!("expected type scope, got {other:?}"),
    }
    assert!(stack.is_empty());
}

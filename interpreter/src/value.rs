// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use sprak::TypeDeclaration;

/// A runtime value. Scalars are copied on clone; structs and variants are
/// handles, so clones share the underlying object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Float(f32),
    Bool(bool),
    String(String),
    Struct(Rc<RefCell<StructObject>>),
    Variant(Rc<RefCell<VariantObject>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructObject {
    pub type_name: String,
    pub members: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantObject {
    pub type_name: String,
    pub member: String,
    pub value: Value,
}

impl Value {
    #[must_use]
    pub fn type_declaration(&self) -> TypeDeclaration {
        match self {
            Self::Integer(..) => TypeDeclaration::Int,
            Self::Float(..) => TypeDeclaration::Float,
            Self::Bool(..) => TypeDeclaration::Bool,
            Self::String(..) => TypeDeclaration::String,
            Self::Struct(object) => TypeDeclaration::Custom(object.borrow().type_name.clone()),
            Self::Variant(object) => TypeDeclaration::Custom(object.borrow().type_name.clone()),
        }
    }

    /// A structurally independent copy: nested structs and variants are
    /// duplicated all the way down.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        match self {
            Self::Struct(object) => {
                let object = object.borrow();
                let members = object
                    .members
                    .iter()
                    .map(|(name, value)| (name.clone(), value.deep_copy()))
                    .collect();

                Self::Struct(Rc::new(RefCell::new(StructObject {
                    type_name: object.type_name.clone(),
                    members,
                })))
            }

            Self::Variant(object) => {
                let object = object.borrow();

                Self::Variant(Rc::new(RefCell::new(VariantObject {
                    type_name: object.type_name.clone(),
                    member: object.member.clone(),
                    value: object.value.deep_copy(),
                })))
            }

            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn point(x: i32, y: i32) -> Value {
        let members = HashMap::from([
            (String::from("x"), Value::Integer(x)),
            (String::from("y"), Value::Integer(y)),
        ]);

        Value::Struct(Rc::new(RefCell::new(StructObject {
            type_name: String::from("Point"),
            members,
        })))
    }

    #[test]
    fn clone_shares_the_struct_object() {
        let original = point(4, 3);
        let alias = original.clone();

        let Value::Struct(object) = &alias else {
            panic!("expected a struct value");
        };
        object.borrow_mut().members.insert(String::from("x"), Value::Integer(9));

        let Value::Struct(object) = &original else {
            panic!("expected a struct value");
        };
        assert_eq!(object.borrow().members["x"], Value::Integer(9));
    }

    #[test]
    fn deep_copy_detaches_nested_objects() {
        let inner = point(1, 2);
        let outer = Value::Struct(Rc::new(RefCell::new(StructObject {
            type_name: String::from("Wrapper"),
            members: HashMap::from([(String::from("inner"), inner.clone())]),
        })));

        let copy = outer.deep_copy();

        let Value::Struct(object) = &inner else {
            panic!("expected a struct value");
        };
        object.borrow_mut().members.insert(String::from("x"), Value::Integer(9));

        let Value::Struct(object) = &copy else {
            panic!("expected a struct value");
        };
        let object = object.borrow();
        let Value::Struct(copied_inner) = &object.members["inner"] else {
            panic!("expected a nested struct value");
        };
        assert_eq!(copied_inner.borrow().members["x"], Value::Integer(1));
    }

    #[rstest]
    #[case(Value::Integer(1), TypeDeclaration::Int)]
    #[case(Value::Float(1.0), TypeDeclaration::Float)]
    #[case(Value::Bool(true), TypeDeclaration::Bool)]
    #[case(Value::String(String::new()), TypeDeclaration::String)]
    #[case(point(0, 0), TypeDeclaration::Custom(String::from("Point")))]
    fn type_declarations_follow_the_value(#[case] value: Value, #[case] expected: TypeDeclaration) {
        assert_eq!(value.type_declaration(), expected);
    }
}

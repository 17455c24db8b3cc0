// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, io::Write, rc::Rc};

use log::trace;
use sprak::{
    ArithmeticOperator, AssignmentStatement, BlockStatement, Builtin, BuiltinFunction, BuiltinKind,
    ComparisonOperator, DeclarationStatement, Expression, ExpressionKind, FunctionDefinition, IfStatement,
    LogicalOperator, MatchStatement, MemberAssignmentStatement, Program, ReturnStatement, SourceLocation, Statement,
    StatementKind, TypeDeclaration, TypeDefinition, WhileStatement, MAIN_FUNCTION_NAME, MAX_CALL_DEPTH,
};

use crate::{Context, RuntimeError, RuntimeResult, StructObject, Value, Variable, VariantObject};

const GLOBAL_CONTEXT_NAME: &str = "<global>";

/// Walks the program tree and evaluates it. `out` receives everything the
/// program prints, plus the final error report when a run fails.
pub struct Interpreter<'program, W> {
    program: &'program Program,
    out: W,
    functions: HashMap<&'program str, FunctionEntry<'program>>,
    global_context: Context,
    call_contexts: Vec<Context>,
}

#[derive(Debug, Clone, Copy)]
enum FunctionEntry<'program> {
    Builtin(&'static BuiltinFunction),
    User(&'program FunctionDefinition),
}

impl<'program, W: Write> Interpreter<'program, W> {
    pub fn new(program: &'program Program, out: W) -> Self {
        let mut functions = HashMap::new();

        for function in Builtin::FUNCTIONS {
            functions.insert(function.name, FunctionEntry::Builtin(function));
        }

        for (name, function) in &program.functions {
            functions.insert(name.as_str(), FunctionEntry::User(function));
        }

        Self {
            program,
            out,
            functions,
            global_context: Context::new(String::from(GLOBAL_CONTEXT_NAME), SourceLocation::START),
            call_contexts: Vec::new(),
        }
    }

    /// Runs the program and reports a failure on the output sink.
    pub fn run(&mut self) -> RuntimeResult<()> {
        let result = self.execute();

        if let Err(error) = &result {
            _ = writeln!(self.out, "Error while interpreting: {error}");
        }

        result
    }

    /// Registers the type definitions, binds the globals and calls the
    /// entry point.
    pub fn execute(&mut self) -> RuntimeResult<()> {
        self.validate_type_definitions()?;
        self.execute_global_declarations()?;
        _ = self.call_function(MAIN_FUNCTION_NAME, &[], SourceLocation::START)?;
        Ok(())
    }

    fn validate_type_definitions(&self) -> RuntimeResult<()> {
        for definition in self.program.type_definitions.values() {
            for member in definition.members() {
                if let TypeDeclaration::Custom(name) = &member.type_declaration {
                    if !self.program.type_definitions.contains_key(name) {
                        return Err(RuntimeError::TypeNotDefined { name: name.clone() });
                    }
                }
            }
        }

        Ok(())
    }

    fn execute_global_declarations(&mut self) -> RuntimeResult<()> {
        let program = self.program;
        for statement in &program.declarations {
            _ = self.execute_statement(statement)?;
        }

        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> RuntimeResult<StatementResult> {
        match &statement.kind {
            StatementKind::Declaration(declaration) => {
                self.execute_declaration(declaration, false)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::ConstDeclaration(declaration) => {
                self.execute_declaration(declaration, true)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::Assignment(assignment) => {
                self.execute_assignment(assignment, statement.position)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::MemberAssignment(assignment) => {
                self.execute_member_assignment(assignment, statement.position)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::Expression(expression) => {
                self.execute_expression_statement(expression)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::If(if_statement) => self.execute_if_statement(if_statement),
            StatementKind::While(while_statement) => self.execute_while_statement(while_statement),
            StatementKind::Match(match_statement) => self.execute_match_statement(match_statement, statement.position),
            StatementKind::Return(return_statement) => self.execute_return_statement(return_statement),
        }
    }

    fn execute_declaration(&mut self, declaration: &DeclarationStatement, constant: bool) -> RuntimeResult<()> {
        let parameter = &declaration.parameter;

        if let TypeDeclaration::Custom(name) = &parameter.type_declaration {
            if !self.program.type_definitions.contains_key(name) {
                return Err(RuntimeError::TypeNotDefined { name: name.clone() });
            }
        }

        let value = self.evaluate_initializer(&parameter.type_declaration, &declaration.initializer)?;
        Self::validate_type(&parameter.type_declaration, &value)?;

        self.current_context_mut().declare(
            parameter.name.clone(),
            Variable {
                type_declaration: parameter.type_declaration.clone(),
                value,
                constant,
            },
        )
    }

    /// An anonymous struct literal takes its type from the declaration it
    /// initializes; anywhere else it has no type to take.
    fn evaluate_initializer(&mut self, expected: &TypeDeclaration, initializer: &Expression) -> RuntimeResult<Value> {
        if let ExpressionKind::StructLiteral { type_name: None, values } = &initializer.kind {
            return match expected {
                TypeDeclaration::Custom(name) => self.instantiate_struct(name, values, initializer.position),
                _ => Err(RuntimeError::UnexpectedType {
                    position: initializer.position,
                }),
            };
        }

        self.evaluate_expression(initializer)
    }

    fn execute_assignment(&mut self, assignment: &AssignmentStatement, position: SourceLocation) -> RuntimeResult<()> {
        let Some(variable) = self.find_variable(&assignment.name) else {
            return Err(RuntimeError::NoVariable {
                name: assignment.name.clone(),
            });
        };

        if variable.constant {
            return Err(RuntimeError::ReassignConstVariable {
                name: assignment.name.clone(),
                position,
            });
        }

        let expected = variable.type_declaration.clone();
        let value = self.evaluate_expression(&assignment.value)?;
        Self::validate_type(&expected, &value)?;

        match self.find_variable_mut(&assignment.name) {
            Some(variable) => {
                variable.value = value;
                Ok(())
            }
            None => Err(RuntimeError::NoVariable {
                name: assignment.name.clone(),
            }),
        }
    }

    fn execute_member_assignment(
        &mut self,
        assignment: &MemberAssignmentStatement,
        position: SourceLocation,
    ) -> RuntimeResult<()> {
        let Some(variable) = self.find_variable(&assignment.subject) else {
            return Err(RuntimeError::NoVariable {
                name: assignment.subject.clone(),
            });
        };

        if variable.constant {
            return Err(RuntimeError::ReassignConstVariable {
                name: assignment.subject.clone(),
                position,
            });
        }

        let Value::Struct(object) = variable.value.clone() else {
            return Err(RuntimeError::NoStructMember);
        };

        let type_name = object.borrow().type_name.clone();
        let program = self.program;
        let member = program.type_definitions.get(&type_name).and_then(|definition| {
            definition
                .members()
                .iter()
                .find(|member| member.name == assignment.member)
        });
        let Some(member) = member else {
            return Err(RuntimeError::NoStructMember);
        };

        let value = self.evaluate_expression(&assignment.value)?;
        Self::validate_type(&member.type_declaration, &value)?;

        object.borrow_mut().members.insert(assignment.member.clone(), value);
        Ok(())
    }

    fn execute_expression_statement(&mut self, expression: &Expression) -> RuntimeResult<()> {
        // A void call is fine in statement position, so the call result is
        // not demanded here.
        if let ExpressionKind::FunctionCall { name, arguments } = &expression.kind {
            _ = self.call_function(name, arguments, expression.position)?;
            return Ok(());
        }

        _ = self.evaluate_expression(expression)?;
        Ok(())
    }

    fn execute_if_statement(&mut self, statement: &IfStatement) -> RuntimeResult<StatementResult> {
        for (condition, block) in statement.conditions.iter().zip(&statement.blocks) {
            if self.evaluate_condition(condition)? {
                return self.execute_block(block);
            }
        }

        match &statement.else_block {
            Some(block) => self.execute_block(block),
            None => Ok(StatementResult::Continue),
        }
    }

    fn execute_while_statement(&mut self, statement: &WhileStatement) -> RuntimeResult<StatementResult> {
        while self.evaluate_condition(&statement.condition)? {
            match self.execute_block(&statement.block)? {
                StatementResult::Continue => (),
                result @ StatementResult::Return(..) => return Ok(result),
            }
        }

        Ok(StatementResult::Continue)
    }

    fn evaluate_condition(&mut self, condition: &Expression) -> RuntimeResult<bool> {
        match self.evaluate_expression(condition)? {
            Value::Bool(value) => Ok(value),
            other => Err(RuntimeError::TypesDoNotMatch {
                provided: other.type_declaration(),
                expected: TypeDeclaration::Bool,
            }),
        }
    }

    fn execute_match_statement(
        &mut self,
        statement: &MatchStatement,
        position: SourceLocation,
    ) -> RuntimeResult<StatementResult> {
        let subject = self.evaluate_expression(&statement.subject)?;
        let Value::Variant(object) = subject else {
            return Err(RuntimeError::InvalidTypeForMatch {
                position: statement.subject.position,
            });
        };

        let (type_name, member, value) = {
            let object = object.borrow();
            (object.type_name.clone(), object.member.clone(), object.value.clone())
        };

        let Some(arm) = statement
            .arms
            .iter()
            .find(|arm| arm.type_name == type_name && arm.member == member)
        else {
            return Err(RuntimeError::NoMatchingArm {
                type_name,
                member,
                position,
            });
        };

        let member_type = self
            .program
            .type_definitions
            .get(&type_name)
            .and_then(|definition| definition.members().iter().find(|declared| declared.name == member))
            .map(|declared| declared.type_declaration.clone());
        let Some(member_type) = member_type else {
            return Err(RuntimeError::TypeNotDefined { name: type_name });
        };

        self.current_context_mut().push_scope();

        let declared = self.current_context_mut().declare(
            arm.binding.clone(),
            Variable {
                type_declaration: member_type,
                value,
                constant: false,
            },
        );
        let result = match declared {
            Ok(()) => self.execute_block(&arm.block),
            Err(error) => Err(error),
        };

        self.current_context_mut().pop_scope();
        result
    }

    fn execute_return_statement(&mut self, statement: &ReturnStatement) -> RuntimeResult<StatementResult> {
        let value = match &statement.value {
            Some(expression) => Some(self.evaluate_expression(expression)?),
            None => None,
        };

        Ok(StatementResult::Return(value))
    }

    fn execute_block(&mut self, block: &BlockStatement) -> RuntimeResult<StatementResult> {
        self.current_context_mut().push_scope();

        for statement in &block.statements {
            match self.execute_statement(statement) {
                Ok(StatementResult::Continue) => (),
                other => {
                    self.current_context_mut().pop_scope();
                    return other;
                }
            }
        }

        self.current_context_mut().pop_scope();
        Ok(StatementResult::Continue)
    }

    pub fn evaluate_expression(&mut self, expression: &Expression) -> RuntimeResult<Value> {
        match &expression.kind {
            ExpressionKind::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            ExpressionKind::FloatLiteral(value) => Ok(Value::Float(*value)),
            ExpressionKind::BooleanLiteral(value) => Ok(Value::Bool(*value)),
            ExpressionKind::StringLiteral(value) => Ok(Value::String(value.clone())),

            ExpressionKind::Identifier(name) => match self.find_variable(name) {
                Some(variable) => Ok(variable.value.clone()),
                None => Err(RuntimeError::NoVariable { name: name.clone() }),
            },

            ExpressionKind::Negate(operand) => {
                let value = self.evaluate_expression(operand)?;
                Self::evaluate_negate(value, expression.position)
            }

            ExpressionKind::LogicalNot(operand) => match self.evaluate_expression(operand)? {
                Value::Bool(value) => Ok(Value::Bool(!value)),
                other => Err(RuntimeError::TypesDoNotMatch {
                    provided: other.type_declaration(),
                    expected: TypeDeclaration::Bool,
                }),
            },

            ExpressionKind::Arithmetic { operator, lhs, rhs } => {
                let lhs = self.evaluate_expression(lhs)?;
                let rhs = self.evaluate_expression(rhs)?;
                Self::evaluate_arithmetic(*operator, lhs, rhs, expression.position)
            }

            ExpressionKind::Comparison { operator, lhs, rhs } => {
                let lhs = self.evaluate_expression(lhs)?;
                let rhs = self.evaluate_expression(rhs)?;
                Self::evaluate_comparison(*operator, &lhs, &rhs)
            }

            ExpressionKind::Logical { operator, lhs, rhs } => {
                let lhs = self.evaluate_expression(lhs)?;
                let rhs = self.evaluate_expression(rhs)?;
                Self::evaluate_logical(*operator, &lhs, &rhs)
            }

            ExpressionKind::FunctionCall { name, arguments } => {
                match self.call_function(name, arguments, expression.position)? {
                    Some(value) => Ok(value),
                    None => Err(RuntimeError::ExpressionDidNotEvaluate {
                        position: expression.position,
                    }),
                }
            }

            ExpressionKind::Cast { target, operand } => {
                let value = self.evaluate_expression(operand)?;
                Self::evaluate_cast(target, value, expression.position)
            }

            ExpressionKind::Copied(operand) => Ok(self.evaluate_expression(operand)?.deep_copy()),

            ExpressionKind::StructLiteral { type_name, values } => match type_name {
                Some(type_name) => self.instantiate_struct(type_name, values, expression.position),
                None => Err(RuntimeError::UnexpectedType {
                    position: expression.position,
                }),
            },

            ExpressionKind::Member { subject, member } => self.evaluate_member(subject, member),

            ExpressionKind::VariantLiteral { type_name, member, value } => {
                self.instantiate_variant(type_name, member, value, expression.position)
            }
        }
    }

    fn evaluate_member(&self, subject: &str, member: &str) -> RuntimeResult<Value> {
        let Some(variable) = self.find_variable(subject) else {
            return Err(RuntimeError::NoVariable {
                name: subject.to_string(),
            });
        };

        let Value::Struct(object) = &variable.value else {
            return Err(RuntimeError::NoStructMember);
        };

        let object = object.borrow();
        if let Some(value) = object.members.get(member) {
            return Ok(value.clone());
        }

        let declared = self
            .program
            .type_definitions
            .get(&object.type_name)
            .is_some_and(|definition| definition.members().iter().any(|declared| declared.name == member));
        if declared {
            return Err(RuntimeError::MemberNotInitialized);
        }

        Err(RuntimeError::NoStructMember)
    }

    fn instantiate_struct(
        &mut self,
        type_name: &str,
        values: &[Expression],
        position: SourceLocation,
    ) -> RuntimeResult<Value> {
        let program = self.program;
        let Some(definition) = program.type_definitions.get(type_name) else {
            return Err(RuntimeError::TypeNotDefined {
                name: type_name.to_string(),
            });
        };

        let TypeDefinition::Struct(definition) = definition else {
            return Err(RuntimeError::UnexpectedType { position });
        };

        if values.len() != definition.members.len() {
            return Err(RuntimeError::InvalidNumberOfArguments {
                name: definition.name.clone(),
                expected: definition.members.len(),
                found: values.len(),
                position,
            });
        }

        let mut members = HashMap::new();
        for (member, value) in definition.members.iter().zip(values) {
            let value = self.evaluate_expression(value)?;
            Self::validate_type(&member.type_declaration, &value)?;
            members.insert(member.name.clone(), value);
        }

        Ok(Value::Struct(Rc::new(RefCell::new(StructObject {
            type_name: definition.name.clone(),
            members,
        }))))
    }

    fn instantiate_variant(
        &mut self,
        type_name: &str,
        member: &str,
        value: &Expression,
        position: SourceLocation,
    ) -> RuntimeResult<Value> {
        let program = self.program;
        let Some(definition) = program.type_definitions.get(type_name) else {
            return Err(RuntimeError::TypeNotDefined {
                name: type_name.to_string(),
            });
        };

        let TypeDefinition::Variant(definition) = definition else {
            return Err(RuntimeError::NotAVariantType {
                name: type_name.to_string(),
                position,
            });
        };

        let Some(declared) = definition.members.iter().find(|declared| declared.name == member) else {
            return Err(RuntimeError::InvalidVariantMember {
                type_name: type_name.to_string(),
                member: member.to_string(),
            });
        };

        let value = self.evaluate_expression(value)?;
        Self::validate_type(&declared.type_declaration, &value)?;

        Ok(Value::Variant(Rc::new(RefCell::new(VariantObject {
            type_name: definition.name.clone(),
            member: declared.name.clone(),
            value,
        }))))
    }

    fn call_function(
        &mut self,
        name: &str,
        arguments: &[Expression],
        position: SourceLocation,
    ) -> RuntimeResult<Option<Value>> {
        let Some(entry) = self.functions.get(name).copied() else {
            return Err(RuntimeError::FunctionNotDefined {
                name: name.to_string(),
                position,
            });
        };

        match entry {
            FunctionEntry::Builtin(function) => self.call_builtin_function(function, arguments, position),
            FunctionEntry::User(function) => self.call_user_function(function, arguments, position),
        }
    }

    fn call_builtin_function(
        &mut self,
        function: &'static BuiltinFunction,
        arguments: &[Expression],
        position: SourceLocation,
    ) -> RuntimeResult<Option<Value>> {
        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::InvalidNumberOfArguments {
                name: function.name.to_string(),
                expected: function.parameters.len(),
                found: arguments.len(),
                position,
            });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            let value = self.evaluate_expression(argument)?;
            Self::validate_type(parameter, &value)?;
            values.push(value);
        }

        match function.kind {
            BuiltinKind::Print => {
                match values.first() {
                    Some(Value::String(message)) => {
                        _ = writeln!(self.out, "{message}");
                    }
                    _ => return Err(RuntimeError::UnexpectedType { position }),
                }

                Ok(None)
            }
        }
    }

    fn call_user_function(
        &mut self,
        function: &'program FunctionDefinition,
        arguments: &[Expression],
        position: SourceLocation,
    ) -> RuntimeResult<Option<Value>> {
        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::InvalidNumberOfArguments {
                name: function.name.clone(),
                expected: function.parameters.len(),
                found: arguments.len(),
                position,
            });
        }

        // Arguments are evaluated in the caller's context before the new
        // frame becomes current.
        let mut context = Context::new(function.name.clone(), position);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            let value = self.evaluate_expression(argument)?;
            Self::validate_type(&parameter.type_declaration, &value)?;

            context.declare(
                parameter.name.clone(),
                Variable {
                    type_declaration: parameter.type_declaration.clone(),
                    value,
                    constant: self.argument_is_const_reference(argument),
                },
            )?;
        }

        if self.call_contexts.len() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::StackLimitReached);
        }

        trace!("entering `{}` called at {}", context.function_name(), context.position());
        self.call_contexts.push(context);
        let result = self.execute_block(&function.body);
        _ = self.call_contexts.pop();

        let flow = result?;

        let Some(return_type) = &function.return_type else {
            return Ok(None);
        };

        match flow {
            StatementResult::Return(Some(value)) => {
                Self::validate_type(return_type, &value)?;
                Ok(Some(value))
            }
            StatementResult::Return(None) => Err(RuntimeError::FunctionDidNotReturnValue),
            StatementResult::Continue => Err(RuntimeError::FunctionDidNotReturn {
                function: function.name.clone(),
            }),
        }
    }

    /// A const variable passed as a bare identifier keeps its constness in
    /// the callee; every other argument expression binds mutable.
    fn argument_is_const_reference(&self, argument: &Expression) -> bool {
        match &argument.kind {
            ExpressionKind::Identifier(name) => self.find_variable(name).is_some_and(|variable| variable.constant),
            _ => false,
        }
    }

    fn evaluate_negate(value: Value, position: SourceLocation) -> RuntimeResult<Value> {
        match value {
            Value::Integer(value) => match value.checked_neg() {
                Some(value) => Ok(Value::Integer(value)),
                None => Err(RuntimeError::IntegerOverflow { operator: "-", position }),
            },
            Value::Float(value) => Ok(Value::Float(-value)),
            _ => Err(RuntimeError::ArithmeticNotSupported { operator: "-", position }),
        }
    }

    /// The left operand picks the rule, the right operand has to match it.
    fn evaluate_arithmetic(
        operator: ArithmeticOperator,
        lhs: Value,
        rhs: Value,
        position: SourceLocation,
    ) -> RuntimeResult<Value> {
        match (lhs, rhs) {
            (Value::Integer(lhs), Value::Integer(rhs)) => {
                Self::evaluate_integer_arithmetic(operator, lhs, rhs, position)
            }

            (Value::Float(lhs), Value::Float(rhs)) => Self::evaluate_float_arithmetic(operator, lhs, rhs, position),

            (Value::String(lhs), Value::String(rhs)) => match operator {
                ArithmeticOperator::Add => Ok(Value::String(format!("{lhs}{rhs}"))),
                _ => Err(RuntimeError::OperationNotSupported {
                    operator: operator.as_str(),
                    type_declaration: TypeDeclaration::String,
                    position,
                }),
            },

            (Value::Integer(..), rhs) => Err(RuntimeError::TypesDoNotMatch {
                provided: rhs.type_declaration(),
                expected: TypeDeclaration::Int,
            }),

            (Value::Float(..), rhs) => Err(RuntimeError::TypesDoNotMatch {
                provided: rhs.type_declaration(),
                expected: TypeDeclaration::Float,
            }),

            (Value::String(..), rhs) => Err(RuntimeError::TypesDoNotMatch {
                provided: rhs.type_declaration(),
                expected: TypeDeclaration::String,
            }),

            _ => Err(RuntimeError::ArithmeticNotSupported {
                operator: operator.as_str(),
                position,
            }),
        }
    }

    fn evaluate_integer_arithmetic(
        operator: ArithmeticOperator,
        lhs: i32,
        rhs: i32,
        position: SourceLocation,
    ) -> RuntimeResult<Value> {
        let result = match operator {
            ArithmeticOperator::Add => lhs.checked_add(rhs),
            ArithmeticOperator::Subtract => lhs.checked_sub(rhs),
            ArithmeticOperator::Multiply => lhs.checked_mul(rhs),
            ArithmeticOperator::Divide => {
                if rhs == 0 {
                    return Err(RuntimeError::ZeroDivision { position });
                }
                lhs.checked_div(rhs)
            }
            ArithmeticOperator::Modulo => {
                if rhs == 0 {
                    return Err(RuntimeError::ZeroDivision { position });
                }
                lhs.checked_rem(rhs)
            }
        };

        match result {
            Some(value) => Ok(Value::Integer(value)),
            None => Err(RuntimeError::IntegerOverflow {
                operator: operator.as_str(),
                position,
            }),
        }
    }

    fn evaluate_float_arithmetic(
        operator: ArithmeticOperator,
        lhs: f32,
        rhs: f32,
        position: SourceLocation,
    ) -> RuntimeResult<Value> {
        if rhs == 0.0 && matches!(operator, ArithmeticOperator::Divide | ArithmeticOperator::Modulo) {
            return Err(RuntimeError::ZeroDivision { position });
        }

        let value = match operator {
            ArithmeticOperator::Add => lhs + rhs,
            ArithmeticOperator::Subtract => lhs - rhs,
            ArithmeticOperator::Multiply => lhs * rhs,
            ArithmeticOperator::Divide => lhs / rhs,
            ArithmeticOperator::Modulo => lhs % rhs,
        };

        Ok(Value::Float(value))
    }

    fn evaluate_comparison(operator: ComparisonOperator, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        match lhs {
            Value::Integer(lhs) => {
                let Value::Integer(rhs) = rhs else {
                    return Err(RuntimeError::TypesDoNotMatch {
                        provided: rhs.type_declaration(),
                        expected: TypeDeclaration::Int,
                    });
                };

                Ok(Value::Bool(Self::compare(operator, lhs, rhs)))
            }

            Value::Float(lhs) => {
                let Value::Float(rhs) = rhs else {
                    return Err(RuntimeError::TypesDoNotMatch {
                        provided: rhs.type_declaration(),
                        expected: TypeDeclaration::Float,
                    });
                };

                Ok(Value::Bool(Self::compare(operator, lhs, rhs)))
            }

            Value::String(lhs) => {
                if !operator.is_equality() {
                    return Err(RuntimeError::CompareNotSupported);
                }

                let Value::String(rhs) = rhs else {
                    return Err(RuntimeError::TypesDoNotMatch {
                        provided: rhs.type_declaration(),
                        expected: TypeDeclaration::String,
                    });
                };

                Ok(Value::Bool(Self::compare(operator, lhs, rhs)))
            }

            _ => Err(RuntimeError::CompareNotSupported),
        }
    }

    fn compare<T: PartialOrd>(operator: ComparisonOperator, lhs: &T, rhs: &T) -> bool {
        match operator {
            ComparisonOperator::LessThan => lhs < rhs,
            ComparisonOperator::LessThanOrEqual => lhs <= rhs,
            ComparisonOperator::GreaterThan => lhs > rhs,
            ComparisonOperator::GreaterThanOrEqual => lhs >= rhs,
            ComparisonOperator::Equals => lhs == rhs,
            ComparisonOperator::NotEquals => lhs != rhs,
        }
    }

    fn evaluate_logical(operator: LogicalOperator, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        let Value::Bool(lhs) = lhs else {
            return Err(RuntimeError::TypesDoNotMatch {
                provided: lhs.type_declaration(),
                expected: TypeDeclaration::Bool,
            });
        };

        let Value::Bool(rhs) = rhs else {
            return Err(RuntimeError::TypesDoNotMatch {
                provided: rhs.type_declaration(),
                expected: TypeDeclaration::Bool,
            });
        };

        let value = match operator {
            LogicalOperator::And => *lhs && *rhs,
            LogicalOperator::Or => *lhs || *rhs,
        };

        Ok(Value::Bool(value))
    }

    fn evaluate_cast(target: &TypeDeclaration, value: Value, position: SourceLocation) -> RuntimeResult<Value> {
        match target {
            TypeDeclaration::Int => match value {
                Value::Integer(value) => Ok(Value::Integer(value)),
                Value::Float(value) => Ok(Value::Integer(value as i32)),
                Value::Bool(value) => Ok(Value::Integer(i32::from(value))),
                Value::String(value) => Ok(Value::Integer(i32::from(!value.is_empty()))),
                _ => Err(RuntimeError::UnsupportedCast { position }),
            },

            TypeDeclaration::Float => match value {
                Value::Integer(value) => Ok(Value::Float(value as f32)),
                Value::Float(value) => Ok(Value::Float(value)),
                Value::Bool(value) => Ok(Value::Float(if value { 1.0 } else { 0.0 })),
                Value::String(value) => Ok(Value::Float(if value.is_empty() { 0.0 } else { 1.0 })),
                _ => Err(RuntimeError::UnsupportedCast { position }),
            },

            TypeDeclaration::String => match value {
                Value::Integer(value) => Ok(Value::String(value.to_string())),
                Value::Float(value) => Ok(Value::String(format!("{value:?}"))),
                Value::Bool(value) => Ok(Value::String(value.to_string())),
                Value::String(value) => Ok(Value::String(value)),
                _ => Err(RuntimeError::UnsupportedCast { position }),
            },

            TypeDeclaration::Bool | TypeDeclaration::Custom(..) => Err(RuntimeError::UnsupportedCast { position }),
        }
    }

    fn validate_type(expected: &TypeDeclaration, value: &Value) -> RuntimeResult<()> {
        let provided = value.type_declaration();
        if provided == *expected {
            return Ok(());
        }

        Err(RuntimeError::TypesDoNotMatch {
            provided,
            expected: expected.clone(),
        })
    }

    fn find_variable(&self, name: &str) -> Option<&Variable> {
        if let Some(context) = self.call_contexts.last() {
            if let Some(variable) = context.find(name) {
                return Some(variable);
            }
        }

        self.global_context.find(name)
    }

    fn find_variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        if let Some(context) = self.call_contexts.last_mut() {
            if let Some(variable) = context.find_mut(name) {
                return Some(variable);
            }
        }

        self.global_context.find_mut(name)
    }

    fn current_context_mut(&mut self) -> &mut Context {
        self.call_contexts.last_mut().unwrap_or(&mut self.global_context)
    }
}

#[must_use]
enum StatementResult {
    Continue,
    Return(Option<Value>),
}

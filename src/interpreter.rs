use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Interrupt, Reporter, RuntimeError, RuntimeResult, Throw};
use crate::expr::*;
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::Object;
use crate::stmt::*;
use crate::token::{Token, Type};

/// Walks the resolved statements and evaluates them. The interpreter owns
/// the global frame, the frame it is currently executing in and the
/// resolution table filled in by the resolver.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<Token, usize>,
    pub reporter: Reporter<'a>,
}

impl<'a> Interpreter<'a> {
    pub fn new(reporter: Reporter<'a>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            reporter,
        }
    }

    /// Executes the statements, reporting the first runtime error.
    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(interrupt) = self.execute(statement) {
                match interrupt {
                    Interrupt::Error(error) => error.throw(&mut self.reporter),
                    Interrupt::Return(_) => unreachable!("top-level return is rejected during resolution"),
                }
                return;
            }
        }
    }

    /// Records how many frames separate a variable use from its definition.
    pub fn resolve(&mut self, name: &Token, depth: usize) {
        self.locals.insert(name.clone(), depth);
    }

    fn execute(&mut self, stmt: &Stmt) -> RuntimeResult<()> {
        stmt.accept(self)
    }

    /// Executes the statements inside the given environment and restores the
    /// previous one on every exit path, including a return or a runtime
    /// error unwinding through this block.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> RuntimeResult<()> {
        let previous = mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> RuntimeResult<Object> {
        expr.accept(self)
    }

    /// Reads a variable through its resolved distance, or from the globals
    /// when the resolver left no entry.
    fn look_up_variable(&self, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(name) {
            Some(distance) => self.environment.borrow().get_at(*distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    /// Orders two values for a comparison operator. Both operands must be
    /// numbers; NaN refuses every ordering, like the doubles underneath.
    fn compare(operator: &Token, left: &Object, right: &Object) -> Result<Option<Ordering>, RuntimeError> {
        match (left, right) {
            (Object::Literal(Literal::Number(_)), Object::Literal(Literal::Number(_))) => {
                Ok(left.partial_cmp(right))
            },
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers".to_string(),
            }),
        }
    }

    fn numbers_error(operator: &Token) -> Interrupt {
        RuntimeError {
            token: operator.clone(),
            message: "Operands must be numbers".to_string(),
        }.into()
    }
}

impl<'a> ExprVisitor<RuntimeResult<Object>> for Interpreter<'a> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> RuntimeResult<Object> {
        Ok(Object::from(literal.clone()))
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> RuntimeResult<Object> {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: unary.operator.clone(),
                message: "Operand must be a number".to_string(),
            }.into()),
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!(),
        }
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> RuntimeResult<Object> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        match operator.r#type {
            Type::Greater => {
                let ordering = Self::compare(operator, &left, &right)?;
                Ok(Object::from(ordering == Some(Ordering::Greater)))
            },
            Type::GreaterEqual => {
                let ordering = Self::compare(operator, &left, &right)?;
                Ok(Object::from(matches!(ordering, Some(Ordering::Greater | Ordering::Equal))))
            },
            Type::Less => {
                let ordering = Self::compare(operator, &left, &right)?;
                Ok(Object::from(ordering == Some(Ordering::Less)))
            },
            Type::LessEqual => {
                let ordering = Self::compare(operator, &left, &right)?;
                Ok(Object::from(matches!(ordering, Some(Ordering::Less | Ordering::Equal))))
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Minus => (left - right).ok_or_else(|| Self::numbers_error(operator)),
            Type::Star => (left * right).ok_or_else(|| Self::numbers_error(operator)),
            Type::Slash => {
                if let Object::Literal(Literal::Number(divisor)) = &right {
                    if *divisor == 0.0 {
                        return Err(RuntimeError {
                            token: operator.clone(),
                            message: "Value cannot be zero".to_string(),
                        }.into());
                    }
                }

                (left / right).ok_or_else(|| Self::numbers_error(operator))
            },
            Type::Plus => {
                let message = format!(
                    "Binary operation '+' is not supported between {} type and {} type",
                    left.type_str(),
                    right.type_str(),
                );

                (left + right).ok_or_else(|| RuntimeError {
                    token: operator.clone(),
                    message,
                }.into())
            },
            _ => unreachable!(),
        }
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> RuntimeResult<Object> {
        let left = self.evaluate(&logical.left)?;

        // Short-circuits yield the deciding operand itself, not a boolean.
        match logical.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> RuntimeResult<Object> {
        self.evaluate(&grouping.expr)
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> RuntimeResult<Object> {
        Ok(self.look_up_variable(&variable.name)?)
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> RuntimeResult<Object> {
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.name) {
            Some(distance) => {
                self.environment.borrow_mut().assign_at(*distance, &assign.name, value.clone());
            },
            None => {
                self.globals.borrow_mut().assign(&assign.name, value.clone())?;
            },
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> RuntimeResult<Object> {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let Some(function) = callee.as_callable() else {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes".to_string(),
            }.into());
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {} arguments but got {}", function.arity(), arguments.len()),
            }.into());
        }

        function.call(self, arguments)
    }

    fn visit_get_expr(&mut self, get: &GetData) -> RuntimeResult<Object> {
        let object = self.evaluate(&get.object)?;

        if let Object::Instance(instance) = &object {
            let value = instance.borrow().get(&get.name, &object)?;
            return Ok(value);
        }

        Err(RuntimeError {
            token: get.name.clone(),
            message: "Only instances have properties".to_string(),
        }.into())
    }

    fn visit_set_expr(&mut self, set: &SetData) -> RuntimeResult<Object> {
        let object = self.evaluate(&set.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields".to_string(),
            }.into());
        };

        let value = self.evaluate(&set.value)?;
        instance.borrow_mut().set(&set.name, value.clone());

        Ok(value)
    }

    fn visit_this_expr(&mut self, this: &ThisData) -> RuntimeResult<Object> {
        Ok(self.look_up_variable(&this.keyword)?)
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) -> RuntimeResult<Object> {
        let distance = *self.locals.get(&super_expr.keyword)
            .expect("'super' to be resolved");

        let superclass = self.environment.borrow().get_at(distance, &super_expr.keyword)?;
        let Object::Class(superclass) = superclass else { unreachable!() };

        // 'this' always lives in the frame right inside the one for 'super'.
        let instance = self.environment.borrow().get_at(distance - 1, &Token::from("this"))?;

        let method = superclass.borrow().find_method(&super_expr.method.lexeme);
        match method {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'", super_expr.method.lexeme),
            }.into()),
        }
    }

    fn visit_lambda_expr(&mut self, lambda: &LambdaData) -> RuntimeResult<Object> {
        let function = Function::new(
            None,
            &lambda.params,
            &lambda.body,
            Rc::clone(&self.environment),
            false,
        );

        Ok(Object::from(function))
    }
}

impl<'a> StmtVisitor<RuntimeResult<()>> for Interpreter<'a> {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> RuntimeResult<()> {
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> RuntimeResult<()> {
        let value = self.evaluate(&data.expr)?;
        self.reporter.print(&value);
        Ok(())
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> RuntimeResult<()> {
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> RuntimeResult<()> {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> RuntimeResult<()> {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> RuntimeResult<()> {
        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> RuntimeResult<()> {
        let function = Function::new(
            Some(&data.name),
            &data.params,
            &data.body,
            Rc::clone(&self.environment),
            false,
        );

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> RuntimeResult<()> {
        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        // Not an error: unwinds to the nearest enclosing call.
        Err(Interrupt::Return(value))
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> RuntimeResult<()> {
        let superclass = match &data.superclass {
            Some(superclass) => match self.look_up_variable(&superclass.name)? {
                Object::Class(class) => Some(class),
                _ => {
                    return Err(RuntimeError {
                        token: superclass.name.clone(),
                        message: "Superclass must be a class".to_string(),
                    }.into());
                },
            },
            None => None,
        };

        // The class is introduced before its methods are built so they can
        // refer to it by name.
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let enclosing = superclass.as_ref().map(|superclass| {
            let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
            environment.define("super", Object::Class(Rc::clone(superclass)));
            mem::replace(&mut self.environment, Rc::new(RefCell::new(environment)))
        });

        let mut methods = HashMap::new();
        for method in &data.methods {
            let function = Function::new(
                Some(&method.name),
                &method.params,
                &method.body,
                Rc::clone(&self.environment),
                method.name.lexeme == "init",
            );
            methods.insert(method.name.lexeme.clone(), function);
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);

        if let Some(enclosing) = enclosing {
            self.environment = enclosing;
        }

        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;
        Ok(())
    }
}

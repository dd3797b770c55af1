use crate::literal::Literal;
use crate::stmt::Stmt;
use crate::token::Token;

/// Represents a unary expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct UnaryData {
    pub operator: Token,
    pub expr: Box<Expr>,
}

/// Represents a binary expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct BinaryData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Represents a short-circuiting logical expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct LogicalData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Represents a grouping expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct GroupingData {
    pub expr: Box<Expr>,
}

/// Represents a variable expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct VariableData {
    pub name: Token,
}

/// Represents an assignment expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct AssignData {
    pub name: Token,
    pub value: Box<Expr>,
}

/// Represents a call expression's data in the language.
/// The closing parenthesis is kept around to report call errors against.
#[derive(Debug, PartialEq, Clone)]
pub struct CallData {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

/// Represents a property access expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct GetData {
    pub object: Box<Expr>,
    pub name: Token,
}

/// Represents a property assignment expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct SetData {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

/// Represents a this expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct ThisData {
    pub keyword: Token,
}

/// Represents a super expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct SuperData {
    pub keyword: Token,
    pub method: Token,
}

/// Represents an anonymous function expression's data in the language.
#[derive(Debug, PartialEq, Clone)]
pub struct LambdaData {
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// Represents an expression in the language.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Literal(Literal),
    Unary(UnaryData),
    Binary(BinaryData),
    Logical(LogicalData),
    Grouping(GroupingData),
    Variable(VariableData),
    Assign(AssignData),
    Call(CallData),
    Get(GetData),
    Set(SetData),
    This(ThisData),
    Super(SuperData),
    Lambda(LambdaData),
}

impl Expr {
    /// Accepts a visitor and returns the result of the visit.
    pub fn accept<T>(&self, visitor: &mut dyn ExprVisitor<T>) -> T {
        match self {
            Expr::Literal(literal) => visitor.visit_literal_expr(literal),
            Expr::Unary(data) => visitor.visit_unary_expr(data),
            Expr::Binary(data) => visitor.visit_binary_expr(data),
            Expr::Logical(data) => visitor.visit_logical_expr(data),
            Expr::Grouping(data) => visitor.visit_grouping_expr(data),
            Expr::Variable(data) => visitor.visit_variable_expr(data),
            Expr::Assign(data) => visitor.visit_assign_expr(data),
            Expr::Call(data) => visitor.visit_call_expr(data),
            Expr::Get(data) => visitor.visit_get_expr(data),
            Expr::Set(data) => visitor.visit_set_expr(data),
            Expr::This(data) => visitor.visit_this_expr(data),
            Expr::Super(data) => visitor.visit_super_expr(data),
            Expr::Lambda(data) => visitor.visit_lambda_expr(data),
        }
    }
}

pub trait ExprVisitor<T> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> T;
    fn visit_unary_expr(&mut self, unary: &UnaryData) -> T;
    fn visit_binary_expr(&mut self, binary: &BinaryData) -> T;
    fn visit_logical_expr(&mut self, logical: &LogicalData) -> T;
    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> T;
    fn visit_variable_expr(&mut self, variable: &VariableData) -> T;
    fn visit_assign_expr(&mut self, assign: &AssignData) -> T;
    fn visit_call_expr(&mut self, call: &CallData) -> T;
    fn visit_get_expr(&mut self, get: &GetData) -> T;
    fn visit_set_expr(&mut self, set: &SetData) -> T;
    fn visit_this_expr(&mut self, this: &ThisData) -> T;
    fn visit_super_expr(&mut self, super_expr: &SuperData) -> T;
    fn visit_lambda_expr(&mut self, lambda: &LambdaData) -> T;
}

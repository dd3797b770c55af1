use crate::expr::*;
use crate::literal::Literal;
use crate::stmt::*;
use crate::token::Token;

/// Returns a string representation of the expression in parenthesis.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$x.accept($self);
            )*
            string += ")";

            string
        }
    };
}

/// Renders the AST in a canonical parenthesized form. Two equivalent parse
/// trees always render to the same string, which is what the parser tests
/// lean on.
pub struct ASTPrinter;

impl ASTPrinter {
    /// Prints the expression using visitor pattern.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// Prints the statement using visitor pattern.
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    fn print_body(&mut self, params: &[Token], body: &[Stmt]) -> String {
        let mut string = String::new();
        string += "(";
        for param in params {
            string += &param.lexeme;
            string += " ";
        }
        string = string.trim_end().to_string();
        string += ") { ";
        string += &body.iter().map(|stmt| stmt.accept(self)).collect::<Vec<String>>().join(" ");
        string += " }";

        string
    }
}

impl ExprVisitor<String> for ASTPrinter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> String {
        literal.to_string() // Uses fmt::Display impl for Literal
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> String {
        parenthesize!(self, &logical.operator.lexeme, &logical.left, &logical.right)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> String {
        parenthesize!(self, &unary.operator.lexeme, &unary.expr)
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> String {
        parenthesize!(self, &binary.operator.lexeme, &binary.left, &binary.right)
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> String {
        parenthesize!(self, "group", grouping.expr)
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> String {
        variable.name.lexeme.clone()
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> String {
        parenthesize!(self, format!("= {}", &assign.name.lexeme).as_str(), assign.value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> String {
        let mut string = String::new();
        string += &call.callee.accept(self);
        string += "(";
        for argument in &call.arguments {
            string += &argument.accept(self);
            string += " ";
        }
        string = string.trim_end().to_string();
        string += ")";
        string
    }

    fn visit_get_expr(&mut self, get: &GetData) -> String {
        parenthesize!(self, format!(". {}", &get.name.lexeme).as_str(), get.object)
    }

    fn visit_set_expr(&mut self, set: &SetData) -> String {
        let target = parenthesize!(self, format!(". {}", &set.name.lexeme).as_str(), set.object);
        parenthesize!(self, format!("= {target}").as_str(), set.value)
    }

    fn visit_this_expr(&mut self, _this: &ThisData) -> String {
        String::from("this")
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) -> String {
        format!("(super {})", super_expr.method.lexeme)
    }

    fn visit_lambda_expr(&mut self, lambda: &LambdaData) -> String {
        let mut string = String::from("(fun ");
        string += &self.print_body(&lambda.params, &lambda.body);
        string += ")";

        string
    }
}

impl StmtVisitor<String> for ASTPrinter {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> String {
        parenthesize!(self, "expr", data.expr)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> String {
        parenthesize!(self, "print", data.expr)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> String {
        let mut string = String::new();
        string += "(var ";
        string += &data.name.lexeme;
        if let Some(initializer) = &data.initializer {
            string += " = ";
            string += &initializer.accept(self);
        }
        string += ")";

        string
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> String {
        let mut string = String::new();
        string += "{";
        for stmt in &data.statements {
            string += " ";
            string += &stmt.accept(self);
        }
        string += " }";

        string
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> String {
        let mut string = String::new();
        string += "(if ";
        string += &data.condition.accept(self);
        string += " ";
        string += &data.then_branch.accept(self);
        if let Some(else_branch) = &data.else_branch {
            string += " else ";
            string += &else_branch.accept(self);
        }
        string += ")";

        string
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> String {
        parenthesize!(self, "while", data.condition, data.body)
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> String {
        let mut string = String::new();
        string += "(fun ";
        string += &data.name.lexeme;
        string += &self.print_body(&data.params, &data.body);
        string += ")";

        string
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> String {
        match &data.value {
            Some(value) => parenthesize!(self, "return", value),
            None => String::from("(return)"),
        }
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> String {
        let mut string = String::new();
        string += "(class ";
        string += &data.name.lexeme;
        if let Some(superclass) = &data.superclass {
            string += " < ";
            string += &superclass.name.lexeme;
        }
        string += " {";
        for method in &data.methods {
            string += " (method ";
            string += &method.name.lexeme;
            string += &self.print_body(&method.params, &method.body);
            string += ")";
        }
        string += " })";

        string
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Reporter;
    use crate::parser::Parser;
    use crate::scanner::Scanner;

    fn print_program(source: &str) -> String {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut reporter = Reporter::new(&mut out, &mut err);
        let tokens = Scanner::new(source, &mut reporter).scan_tokens();
        let statements = Parser::new(tokens, &mut reporter).parse();
        assert!(!reporter.had_error(), "fixture programs must parse");

        let mut printer = ASTPrinter;
        statements.iter()
            .map(|stmt| printer.print_stmt(stmt))
            .collect::<Vec<String>>()
            .join(" ")
    }

    #[test]
    fn prints_a_bare_expression() {
        use crate::token::Type;

        let expr = Expr::Binary(BinaryData {
            left: Box::new(Expr::Literal(Literal::Number(1.0))),
            operator: Token::new(Type::Plus, String::from("+"), None, 1, 2),
            right: Box::new(Expr::Literal(Literal::Number(2.0))),
        });

        assert_eq!(ASTPrinter.print(&expr), "(+ 1 2)");
    }

    #[test]
    fn precedence_shows_in_the_rendering() {
        assert_eq!(print_program("2 + 3 * 4;"), "(expr (+ 2 (* 3 4)))");
        assert_eq!(print_program("(2 + 3) * 4;"), "(expr (* (group (+ 2 3)) 4))");
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        assert_eq!(print_program("-1 - -2;"), "(expr (- (- 1) (- 2)))");
    }

    #[test]
    fn logical_operators_nest_left() {
        assert_eq!(print_program("a or b and c;"), "(expr (or a (and b c)))");
    }

    #[test]
    fn assignment_and_property_forms() {
        assert_eq!(print_program("a = 1;"), "(expr (= a 1))");
        assert_eq!(print_program("point.x;"), "(expr (. x point))");
        assert_eq!(print_program("point.x = 1;"), "(expr (= (. x point) 1))");
    }

    #[test]
    fn call_forms() {
        assert_eq!(print_program("f();"), "(expr f())");
        assert_eq!(print_program("f(1, 2);"), "(expr f(1 2))");
    }

    #[test]
    fn statement_forms() {
        assert_eq!(print_program("print 1;"), "(print 1)");
        assert_eq!(print_program("var a = 1;"), "(var a = 1)");
        assert_eq!(print_program("var a;"), "(var a)");
        assert_eq!(print_program("{ print 1; }"), "{ (print 1) }");
        assert_eq!(print_program("if (a) print 1; else print 2;"), "(if a (print 1) else (print 2))");
        assert_eq!(print_program("while (a) print 1;"), "(while a (print 1))");
    }

    #[test]
    fn function_and_class_forms() {
        assert_eq!(
            print_program("fun add(a, b) { return a + b; }"),
            "(fun add(a b) { (return (+ a b)) })",
        );
        assert_eq!(
            print_program("class B < A { init() { this.x = 1; } }"),
            "(class B < A { (method init() { (expr (= (. x this) 1)) }) })",
        );
    }

    #[test]
    fn identical_programs_render_identically() {
        let first = print_program("fun f(n) { if (n < 1) return 0; return f(n - 1); }");
        let second = print_program("fun f(n) { if (n < 1) return 0; return f(n - 1); }");
        assert_eq!(first, second);
    }
}

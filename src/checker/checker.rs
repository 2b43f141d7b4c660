use lazy_static::lazy_static;

use crate::ast::ast::{FuncDecl, Program};
use crate::ast::expressions::{Call, Expr};
use crate::ast::statements::Stmt;
use crate::ast::types::BuiltinType;
use crate::errors::errors::{Error, ErrorImpl};
use crate::output::output::ScopePrinter;
use crate::symbols::function_table::FunctionTable;
use crate::symbols::symbol_table::SymbolTable;

use super::typed_ast::{
    TypedCall, TypedExpr, TypedFormal, TypedFuncDecl, TypedProgram, TypedStmt,
};

lazy_static! {
    /// Library functions callable without a declaration. They occupy their
    /// names like any user function and show up in the global scope trace.
    static ref BUILTIN_FUNCTIONS: Vec<(&'static str, BuiltinType, Vec<BuiltinType>)> = vec![
        ("print", BuiltinType::Void, vec![BuiltinType::String]),
        ("printi", BuiltinType::Void, vec![BuiltinType::Int]),
    ];
}

/// The result of a successful analysis: the annotated tree plus the
/// rendered scope trace.
#[derive(Debug)]
pub struct Analysis {
    pub program: TypedProgram,
    pub scope_trace: String,
}

/// Runs the semantic pass over a whole program.
///
/// Returns the annotated tree on success, or the first violation found in a
/// strict depth-first left-to-right walk. The checker owns its symbol and
/// function tables for the duration of the call, so the analysis is
/// re-entrant.
pub fn analyze(program: &Program) -> Result<Analysis, Error> {
    let mut checker = SemanticChecker::new();
    let typed = checker.check_program(program)?;
    Ok(Analysis {
        program: typed,
        scope_trace: checker.printer.to_string(),
    })
}

/// The recursive traversal and every piece of state it threads through:
/// the scope stack, the function table, the scope printer, the enclosing
/// function's return type and the current loop nesting depth.
#[derive(Debug)]
pub struct SemanticChecker {
    symbols: SymbolTable,
    functions: FunctionTable,
    printer: ScopePrinter,
    current_return_type: Option<BuiltinType>,
    loop_depth: u32,
}

impl Default for SemanticChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticChecker {
    pub fn new() -> Self {
        SemanticChecker {
            symbols: SymbolTable::new(),
            functions: FunctionTable::new(),
            printer: ScopePrinter::new(),
            current_return_type: None,
            loop_depth: 0,
        }
    }

    /// Checks a whole program in two passes: first every signature is
    /// recorded (so forward references and mutual recursion resolve), then
    /// every body is checked. The mandatory `void main()` is verified last.
    pub fn check_program(&mut self, program: &Program) -> Result<TypedProgram, Error> {
        for (name, return_type, params) in BUILTIN_FUNCTIONS.iter() {
            self.functions.insert(name, *return_type, params.clone());
            self.printer.emit_func(name, *return_type, params);
        }

        for func in &program.functions {
            let params: Vec<BuiltinType> = func.formals.iter().map(|formal| formal.ty).collect();
            if !self
                .functions
                .insert(&func.name, func.return_type, params.clone())
            {
                return Err(Error::new(
                    ErrorImpl::AlreadyDefined {
                        id: func.name.clone(),
                    },
                    func.line,
                ));
            }
            self.printer.emit_func(&func.name, func.return_type, &params);
        }

        let mut functions = Vec::with_capacity(program.functions.len());
        for func in &program.functions {
            functions.push(self.check_function(func)?);
        }

        match self.functions.lookup("main") {
            Some(main) if main.return_type == BuiltinType::Void && main.params.is_empty() => {}
            _ => return Err(Error::main_missing()),
        }

        Ok(TypedProgram { functions })
    }

    /// Checks one function: the formals go into a fresh scope, then the
    /// body runs with this function's return type as the return context.
    fn check_function(&mut self, func: &FuncDecl) -> Result<TypedFuncDecl, Error> {
        self.current_return_type = Some(func.return_type);
        self.enter_scope();
        let result = self.check_function_inner(func);
        self.leave_scope();
        self.current_return_type = None;
        result
    }

    fn check_function_inner(&mut self, func: &FuncDecl) -> Result<TypedFuncDecl, Error> {
        let mut params = Vec::with_capacity(func.formals.len());
        for formal in &func.formals {
            if self.symbols.lookup_current(&formal.name).is_some()
                || self.functions.contains(&formal.name)
            {
                return Err(Error::new(
                    ErrorImpl::AlreadyDefined {
                        id: formal.name.clone(),
                    },
                    formal.line,
                ));
            }
            let offset = self.symbols.add_param(&formal.name, formal.ty);
            self.printer.emit_var(&formal.name, formal.ty, offset);
            params.push(TypedFormal {
                name: formal.name.clone(),
                ty: formal.ty,
                offset,
            });
        }

        let body = self.check_block(&func.body)?;

        Ok(TypedFuncDecl {
            line: func.line,
            name: func.name.clone(),
            return_type: func.return_type,
            params,
            body,
        })
    }

    /// Checks a statement list inside its own scope. The scope is closed
    /// on every exit path, including error propagation, so offset counters
    /// never leak into sibling scopes.
    fn check_block(&mut self, body: &[Stmt]) -> Result<Vec<TypedStmt>, Error> {
        self.enter_scope();
        let result = body.iter().map(|stmt| self.check_stmt(stmt)).collect();
        self.leave_scope();
        result
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<TypedStmt, Error> {
        match stmt {
            Stmt::Block { line, body } => Ok(TypedStmt::Block {
                line: *line,
                body: self.check_block(body)?,
            }),
            Stmt::Call(call) => Ok(TypedStmt::Call(self.check_call(call)?)),
            Stmt::Break { line } => {
                if self.loop_depth == 0 {
                    return Err(Error::new(ErrorImpl::UnexpectedBreak, *line));
                }
                Ok(TypedStmt::Break { line: *line })
            }
            Stmt::Continue { line } => {
                if self.loop_depth == 0 {
                    return Err(Error::new(ErrorImpl::UnexpectedContinue, *line));
                }
                Ok(TypedStmt::Continue { line: *line })
            }
            Stmt::Return { line, value } => self.check_return(*line, value.as_ref()),
            Stmt::If {
                line,
                condition,
                then_body,
                else_body,
            } => {
                self.enter_scope();
                let result = self.check_condition_arm(condition, then_body);
                self.leave_scope();
                let (condition, then_body) = result?;

                // The else branch gets a scope of its own.
                let else_body = match else_body {
                    Some(stmt) => {
                        self.enter_scope();
                        let result = self.check_stmt(stmt);
                        self.leave_scope();
                        Some(Box::new(result?))
                    }
                    None => None,
                };

                Ok(TypedStmt::If {
                    line: *line,
                    condition,
                    then_body: Box::new(then_body),
                    else_body,
                })
            }
            Stmt::While {
                line,
                condition,
                body,
            } => {
                self.enter_scope();
                let result = self.check_while(condition, body);
                self.leave_scope();
                let (condition, body) = result?;

                Ok(TypedStmt::While {
                    line: *line,
                    condition,
                    body: Box::new(body),
                })
            }
            Stmt::VarDecl {
                line,
                name,
                ty,
                init,
            } => self.check_var_decl(*line, name, *ty, init.as_ref()),
            Stmt::Assign { line, name, value } => self.check_assign(*line, name, value),
        }
    }

    fn check_return(&mut self, line: u32, value: Option<&Expr>) -> Result<TypedStmt, Error> {
        let Some(expected) = self.current_return_type else {
            return Err(Error::new(ErrorImpl::TypeMismatch, line));
        };

        let value = match (expected, value) {
            (BuiltinType::Void, None) => None,
            (BuiltinType::Void, Some(_)) => {
                return Err(Error::new(ErrorImpl::TypeMismatch, line));
            }
            (_, None) => {
                return Err(Error::new(ErrorImpl::TypeMismatch, line));
            }
            (_, Some(expr)) => {
                let typed = self.check_expr(expr)?;
                if !typed.get_type().is_assignable_to(expected) {
                    return Err(Error::new(ErrorImpl::TypeMismatch, line));
                }
                Some(typed)
            }
        };

        Ok(TypedStmt::Return { line, value })
    }

    /// Condition plus body of an if or while, checked inside the already
    /// opened scope.
    fn check_condition_arm(
        &mut self,
        condition: &Expr,
        body: &Stmt,
    ) -> Result<(TypedExpr, TypedStmt), Error> {
        let condition = self.check_bool_condition(condition)?;
        let body = self.check_stmt(body)?;
        Ok((condition, body))
    }

    /// Like `check_condition_arm` but with the loop depth raised around
    /// the body so break and continue inside it are legal.
    fn check_while(
        &mut self,
        condition: &Expr,
        body: &Stmt,
    ) -> Result<(TypedExpr, TypedStmt), Error> {
        let condition = self.check_bool_condition(condition)?;
        self.loop_depth += 1;
        let body = self.check_stmt(body);
        self.loop_depth -= 1;
        Ok((condition, body?))
    }

    fn check_bool_condition(&mut self, condition: &Expr) -> Result<TypedExpr, Error> {
        let line = condition.line();
        let typed = self.check_expr(condition)?;
        if typed.get_type() != BuiltinType::Bool {
            return Err(Error::new(ErrorImpl::TypeMismatch, line));
        }
        Ok(typed)
    }

    fn check_var_decl(
        &mut self,
        line: u32,
        name: &str,
        ty: BuiltinType,
        init: Option<&Expr>,
    ) -> Result<TypedStmt, Error> {
        if self.symbols.lookup_current(name).is_some() || self.functions.contains(name) {
            return Err(Error::new(
                ErrorImpl::AlreadyDefined {
                    id: name.to_string(),
                },
                line,
            ));
        }

        // The initializer is checked before the symbol is registered, so
        // `int x = x;` resolves against the enclosing scopes only.
        let init = match init {
            Some(expr) => {
                let typed = self.check_expr(expr)?;
                if !typed.get_type().is_assignable_to(ty) {
                    return Err(Error::new(ErrorImpl::TypeMismatch, line));
                }
                Some(typed)
            }
            None => None,
        };

        let offset = self.symbols.add_variable(name, ty);
        self.printer.emit_var(name, ty, offset);

        Ok(TypedStmt::VarDecl {
            line,
            name: name.to_string(),
            ty,
            offset,
            init,
        })
    }

    fn check_assign(&mut self, line: u32, name: &str, value: &Expr) -> Result<TypedStmt, Error> {
        let Some((ty, offset)) = self
            .symbols
            .lookup(name)
            .map(|symbol| (symbol.ty, symbol.offset))
        else {
            if self.functions.contains(name) {
                return Err(Error::new(
                    ErrorImpl::DefinedAsFunction {
                        id: name.to_string(),
                    },
                    line,
                ));
            }
            return Err(Error::new(
                ErrorImpl::UndefinedVariable {
                    id: name.to_string(),
                },
                line,
            ));
        };

        let value = self.check_expr(value)?;
        if !value.get_type().is_assignable_to(ty) {
            return Err(Error::new(ErrorImpl::TypeMismatch, line));
        }

        Ok(TypedStmt::Assign {
            line,
            name: name.to_string(),
            offset,
            value,
        })
    }

    fn check_expr(&mut self, expr: &Expr) -> Result<TypedExpr, Error> {
        match expr {
            Expr::Num { line, value } => Ok(TypedExpr::Num {
                line: *line,
                value: *value,
            }),
            Expr::NumB { line, value } => {
                if !(0..=255).contains(value) {
                    return Err(Error::new(ErrorImpl::ByteOutOfRange { value: *value }, *line));
                }
                Ok(TypedExpr::NumB {
                    line: *line,
                    value: *value,
                })
            }
            Expr::Str { line, value } => Ok(TypedExpr::Str {
                line: *line,
                value: value.clone(),
            }),
            Expr::Bool { line, value } => Ok(TypedExpr::Bool {
                line: *line,
                value: *value,
            }),
            Expr::Id { line, name } => {
                if let Some(symbol) = self.symbols.lookup(name) {
                    return Ok(TypedExpr::Id {
                        line: *line,
                        name: name.clone(),
                        ty: symbol.ty,
                        offset: symbol.offset,
                    });
                }
                if self.functions.contains(name) {
                    return Err(Error::new(
                        ErrorImpl::DefinedAsFunction { id: name.clone() },
                        *line,
                    ));
                }
                Err(Error::new(
                    ErrorImpl::UndefinedVariable { id: name.clone() },
                    *line,
                ))
            }
            Expr::BinOp {
                line,
                op,
                left,
                right,
            } => {
                let left = self.check_expr(left)?;
                let right = self.check_expr(right)?;
                if !left.get_type().is_numeric() || !right.get_type().is_numeric() {
                    return Err(Error::new(ErrorImpl::TypeMismatch, *line));
                }
                let ty = if left.get_type() == BuiltinType::Byte
                    && right.get_type() == BuiltinType::Byte
                {
                    BuiltinType::Byte
                } else {
                    BuiltinType::Int
                };
                Ok(TypedExpr::BinOp {
                    line: *line,
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                    ty,
                })
            }
            Expr::RelOp {
                line,
                op,
                left,
                right,
            } => {
                let left = self.check_expr(left)?;
                let right = self.check_expr(right)?;
                if !left.get_type().is_numeric() || !right.get_type().is_numeric() {
                    return Err(Error::new(ErrorImpl::TypeMismatch, *line));
                }
                Ok(TypedExpr::RelOp {
                    line: *line,
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            Expr::Not { line, operand } => {
                let operand = self.check_expr(operand)?;
                if operand.get_type() != BuiltinType::Bool {
                    return Err(Error::new(ErrorImpl::TypeMismatch, *line));
                }
                Ok(TypedExpr::Not {
                    line: *line,
                    operand: Box::new(operand),
                })
            }
            Expr::And { line, left, right } => {
                let (left, right) = self.check_bool_operands(left, right, *line)?;
                Ok(TypedExpr::And {
                    line: *line,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            Expr::Or { line, left, right } => {
                let (left, right) = self.check_bool_operands(left, right, *line)?;
                Ok(TypedExpr::Or {
                    line: *line,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            Expr::Cast { line, expr, target } => {
                let typed = self.check_expr(expr)?;
                if !typed.get_type().is_castable_to(*target) {
                    return Err(Error::new(ErrorImpl::TypeMismatch, *line));
                }
                Ok(TypedExpr::Cast {
                    line: *line,
                    expr: Box::new(typed),
                    target: *target,
                })
            }
            Expr::Call(call) => Ok(TypedExpr::Call(self.check_call(call)?)),
        }
    }

    fn check_bool_operands(
        &mut self,
        left: &Expr,
        right: &Expr,
        line: u32,
    ) -> Result<(TypedExpr, TypedExpr), Error> {
        let left = self.check_expr(left)?;
        let right = self.check_expr(right)?;
        if left.get_type() != BuiltinType::Bool || right.get_type() != BuiltinType::Bool {
            return Err(Error::new(ErrorImpl::TypeMismatch, line));
        }
        Ok((left, right))
    }

    /// Checks a call in either expression or statement position. The
    /// argument list is evaluated inside a scope of its own, mirroring
    /// block semantics.
    fn check_call(&mut self, call: &Call) -> Result<TypedCall, Error> {
        if self.symbols.lookup(&call.callee).is_some() {
            return Err(Error::new(
                ErrorImpl::DefinedAsVariable {
                    id: call.callee.clone(),
                },
                call.line,
            ));
        }

        self.enter_scope();
        let result = call
            .args
            .iter()
            .map(|arg| self.check_expr(arg))
            .collect::<Result<Vec<_>, _>>();
        self.leave_scope();
        let args = result?;

        let arg_types: Vec<BuiltinType> = args.iter().map(TypedExpr::get_type).collect();
        let return_type = self
            .functions
            .validate_call(&call.callee, &arg_types, call.line)?;

        Ok(TypedCall {
            line: call.line,
            callee: call.callee.clone(),
            return_type,
            args,
        })
    }

    fn enter_scope(&mut self) {
        self.printer.begin_scope();
        self.symbols.begin_scope();
    }

    fn leave_scope(&mut self) {
        self.printer.end_scope();
        self.symbols.end_scope();
    }
}

use crate::ast::{Block, NType, Node};
use crate::frontend::token::Token;
use crate::semantic::visitor::AstVisitor;

/// The declarations section preceding the body of every block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declarations {
    pub vars: Vec<VarDecl>,
    pub proc_fns: Vec<ProcFnDecl>,
}

impl Declarations {
    pub fn new(vars: Vec<VarDecl>, proc_fns: Vec<ProcFnDecl>) -> Self {
        Self { vars, proc_fns }
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.proc_fns.is_empty()
    }
}

impl Node for Declarations {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_declarations(self)
    }
}

/// A single typed name. `a, b : integer` produces two of these.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Token,
    pub ty: NType,
}

impl VarDecl {
    pub fn new(name: Token, ty: NType) -> Self {
        Self { name, ty }
    }
}

impl Node for VarDecl {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_var_decl(self)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamList {
    pub params: Vec<VarDecl>,
}

impl ParamList {
    pub fn new(params: Vec<VarDecl>) -> Self {
        Self { params }
    }
}

impl Node for ParamList {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_param_list(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcDecl {
    pub name: Token,
    pub params: ParamList,
    pub block: Block,
}

impl ProcDecl {
    pub fn new(name: Token, params: ParamList, block: Block) -> Self {
        Self { name, params, block }
    }
}

impl Node for ProcDecl {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_proc_decl(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Token,
    pub params: ParamList,
    pub return_type: NType,
    pub block: Block,
}

impl FuncDecl {
    pub fn new(name: Token, params: ParamList, return_type: NType, block: Block) -> Self {
        Self {
            name,
            params,
            return_type,
            block,
        }
    }
}

impl Node for FuncDecl {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_func_decl(self)
    }
}

/// A procedure or function declaration, in source order within a block.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcFnDecl {
    Procedure(ProcDecl),
    Function(FuncDecl),
}

impl ProcFnDecl {
    pub fn name(&self) -> &Token {
        match self {
            ProcFnDecl::Procedure(proc) => &proc.name,
            ProcFnDecl::Function(func) => &func.name,
        }
    }

    pub fn block(&self) -> &Block {
        match self {
            ProcFnDecl::Procedure(proc) => &proc.block,
            ProcFnDecl::Function(func) => &func.block,
        }
    }
}

impl Node for ProcFnDecl {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            ProcFnDecl::Procedure(proc) => proc.accept(visitor),
            ProcFnDecl::Function(func) => func.accept(visitor),
        }
    }
}

use std::collections::HashMap;

use crate::ast::{Expr, ExprId, NType};
use crate::utils::errors::{PsiError, PsiResult};

/// Resolved expression types, kept beside the tree rather than inside it.
///
/// Owned by whichever analysis fills it. Each expression may be annotated once
/// per pass; `clear` starts a new pass.
#[derive(Debug, Default)]
pub struct TypeTable {
    types: HashMap<ExprId, NType>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self { types: HashMap::new() }
    }

    pub fn annotate(&mut self, id: ExprId, ty: NType) -> PsiResult<()> {
        if let Some(&existing) = self.types.get(&id) {
            return Err(PsiError::TypeAlreadyAnnotated { id, existing });
        }
        self.types.insert(id, ty);
        Ok(())
    }

    pub fn annotate_expr(&mut self, expr: &Expr, ty: NType) -> PsiResult<()> {
        self.annotate(expr.id(), ty)
    }

    pub fn type_of(&self, id: ExprId) -> Option<NType> {
        self.types.get(&id).copied()
    }

    pub fn type_of_expr(&self, expr: &Expr) -> Option<NType> {
        self.type_of(expr.id())
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/*
*                    psic -- Pascal front end.
*
* program      = "program" IDENT ";" block "." ;
* block        = declarations compound-stmt ;
* declarations = [ "var" (var-decl ";")+ ] (proc-decl | func-decl)* ;
* var-decl     = ident-list ":" type ;
* proc-decl    = "procedure" IDENT paramlist ";" block ";" ;
* func-decl    = "function" IDENT paramlist ":" type ";" block ";" ;
* statement    = write-stmt | read-stmt | assign-stmt | call-stmt
*              | if-stmt | while-stmt | repeat-stmt | for-stmt | compound-stmt ;
* expression   = equality ;
* equality     = comparison [ ("="|"<>") comparison ] ;
* comparison   = term [ ("<"|"<="|">"|">=") term ] ;
* term         = factor { ("+"|"-"|"or") factor } ;
* factor       = unary { ("*"|"/"|"and"|"mod") unary } ;
* unary        = ("+"|"-") unary | "not" primary | primary ;
* primary      = IDENT [arglist] | literal | "(" expression ")" ;
*/

use crate::semantic::visitor::AstVisitor;

/// Every tree element routes itself to exactly one `visit_*` method.
pub trait Node {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output;
}

use crate::{
    ast::Expr,
    interpreter::registry::{
        constant::lookup_constant,
        function::lookup_function,
        operator::{Associativity, OperatorDef, lookup_operator},
    },
};

/// Renders an expression tree as a LaTeX string.
///
/// Rendering never fails and never evaluates anything. Operators combine the
/// rendered strings of their operands; functions receive their raw argument
/// nodes and choose their own notation. An operand built from a looser
/// operator is wrapped in `\left( .. \right)`.
///
/// Calls to unknown functions, calls whose argument count does not match the
/// function's arity, functions registered without a renderer and unknown
/// operators all render as an empty string.
///
/// # Parameters
/// - `expr`: Root of the tree to render.
///
/// # Returns
/// The typeset form of the tree.
///
/// ## Example
/// ```
/// use mathtex::parse_and_render;
///
/// assert_eq!(parse_and_render("(1+2)/3").unwrap(), "\\frac{1 + 2}{3}");
/// assert_eq!(parse_and_render("2(1+$x)").unwrap(), "2 \\cdot \\left(1 + x\\right)");
/// assert_eq!(parse_and_render("sqrt(2pi)").unwrap(), "\\sqrt{2 \\cdot \\pi}");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Number { text, .. } => text.clone(),
        Expr::Constant { name, .. } => {
            lookup_constant(name).map_or_else(|| name.clone(), |constant| constant.display)
        },
        Expr::Variable { name } => name.trim_start_matches('#').to_string(),
        Expr::Operator { symbol,
                         left,
                         right, } => render_operator(*symbol, left, right),
        Expr::Call { name, args } => render_call(name, args),
    }
}

/// Renders `command` applied to a parenthesized, comma-separated argument
/// list, e.g. `\sin\left(x\right)`.
#[must_use]
pub fn render_applied(command: &str, args: &[Expr]) -> String {
    let args = args.iter().map(render).collect::<Vec<_>>().join(", ");
    format!("{command}\\left({args}\\right)")
}

fn render_operator(symbol: char, left: &Expr, right: &Expr) -> String {
    let Some(op) = lookup_operator(symbol) else {
        return String::new();
    };

    let left = render_operand(op, left, Associativity::Left);
    let right = render_operand(op, right, Associativity::Right);
    op.render(&left, &right)
}

/// Renders an operand of `parent` found on `side`, wrapping it when it would
/// otherwise regroup.
fn render_operand(parent: &OperatorDef, operand: &Expr, side: Associativity) -> String {
    let text = render(operand);
    if parent.delimits {
        return text;
    }

    let Expr::Operator { symbol, .. } = operand else {
        return text;
    };
    let Some(child) = lookup_operator(*symbol) else {
        return text;
    };

    let looser = child.precedence < parent.precedence
                 || (child.precedence == parent.precedence && side != parent.associativity);
    if looser {
        format!("\\left({text}\\right)")
    } else {
        text
    }
}

fn render_call(name: &str, args: &[Expr]) -> String {
    let Some(function) = lookup_function(name) else {
        log::trace!("no renderer for unknown function '{name}'");
        return String::new();
    };
    if !function.arity.check(args.len()) {
        return String::new();
    }

    function.render.map_or_else(String::new, |render| render(args))
}

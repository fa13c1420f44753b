use logikit::*;

fn main() -> Result<(), LogicError> {
    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "p ∧ (q → ¬r)".to_string());

    let expr: ValidatedExpression = source.parse()?;
    println!("Syntax tree:\n{}", efmt::TreeFormatted(expr.tree()));

    let table = TruthTable::new(&expr)?;
    println!("{}", table);
    println!("Classification: {}", table.classify());
    println!("DNF: {}", canonical_dnf(&table));
    println!("CNF: {}", canonical_cnf(&table));

    if let Some(assignment) = table.assignment(table.len() - 1) {
        let eval = expr.evaluate(&assignment, &EvalOptions::traced())?;
        println!("\nEvaluation with {}:", assignment);
        for step in &eval.substitution_steps {
            println!("  {}", step.state());
        }
        print_steps(&eval.steps, 1);
    }
    Ok(())
}

fn print_steps(steps: &[EvaluationStep], depth: usize) {
    for step in steps {
        println!("{}{}", "  ".repeat(depth), step.description);
        print_steps(&step.sub_steps, depth + 1);
    }
}

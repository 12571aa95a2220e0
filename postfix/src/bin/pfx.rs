use postfix::MathContext;

mod repl {
    use lexers::SpaceTokenizer;
    use postfix::MathContext;

    // one-shot mode: print the intermediate postfix form with the result
    pub fn evalexpr(input: &str) {
        match MathContext::new().process(input) {
            Err(e) => println!("Error: {}", e),
            Ok((postfix, result)) => println!("{} = {}", postfix, result),
        }
    }

    fn assignment_target(input: &str) -> Option<(String, String)> {
        let mut lex = SpaceTokenizer::from_str(input);
        let (var, assig) = (lex.next()?, lex.next()?);
        if assig != "=" || var.parse::<f64>().is_ok() {
            return None;
        }
        if !var.chars().all(|ch| ch.is_alphanumeric() || ch == '_') {
            return None;
        }
        Some((var, lex.collect::<Vec<String>>().join(" ")))
    }

    pub fn parse_statement(cx: &mut MathContext, input: &str) {
        if let Some((var, expr)) = assignment_target(input) {
            match cx.process(&expr) {
                Err(e) => println!("Error: {}", e),
                Ok((_, result)) => cx.setvar(&var, result),
            }
            return;
        }
        // wasn't an assignment, evaluate as an expression
        match cx.process(input) {
            Err(e) => println!("Error: {}", e),
            Ok((postfix, result)) => {
                println!("{}", postfix);
                println!("{}", result);
            }
        }
    }
}

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut cx = MathContext::new();
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                repl::parse_statement(&mut cx, &line);
            }
        }
    }
}

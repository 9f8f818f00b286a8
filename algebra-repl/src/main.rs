mod error;

use algebra_compute::numerical::{ctxt::Ctxt, eval::Eval};
use algebra_grade::{
    answer::{Answer, AnswerId},
    compare::{parse_expression, Outcome},
    options::GradingOptions,
    question::AlgebraQuestion,
    validate::validate_question,
};
use algebra_parser::parser::{ast::Expr, Parser};
use ariadne::{Color, Fmt};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};

const USAGE: &str = "usage: algebra-repl <answer>[@fraction] ...";

/// Parses an answer given on the command line, in the form `expr` or `expr@fraction`.
fn parse_answer(index: usize, arg: &str) -> Result<Answer, Error> {
    let (expression, fraction) = match arg.rsplit_once('@') {
        Some((expression, fraction)) => {
            let fraction = fraction.trim().parse::<f64>()
                .map_err(|_| Error::Usage(format!("invalid fraction `{}` in `{}`", fraction, arg)))?;
            (expression, fraction)
        },
        None => (arg, 1.0),
    };

    Answer::new(AnswerId(index as u64 + 1), expression, fraction)
        .map_err(|err| Error::Usage(format!("{} in `{}`", err.kind.message(), arg)))
}

/// Builds the question from the command line arguments, validating its answers.
///
/// Warnings are reported to stderr, but do not prevent the question from being built.
fn build_question(args: impl Iterator<Item = String>) -> Result<AlgebraQuestion, Error> {
    let answers = args.enumerate()
        .map(|(index, arg)| parse_answer(index, &arg))
        .collect::<Result<Vec<_>, _>>()?;
    if answers.is_empty() {
        return Err(Error::Usage(USAGE.to_string()));
    }

    let options = GradingOptions::default();
    let (warnings, errors) = validate_question(&answers, &options)
        .into_iter()
        .partition::<Vec<_>, _>(|err| err.is_warning());
    warnings.iter().for_each(|warning| warning.report_to_stderr());
    if !errors.is_empty() {
        return Err(errors.into());
    }

    Ok(AlgebraQuestion::new(answers, options))
}

/// Splits the arguments of `:eval` into the expression and its variable bindings.
///
/// The bindings are the trailing `name=value` words.
fn parse_eval_args(args: &str) -> Result<(&str, Ctxt), Error> {
    let split = match args.find('=') {
        Some(eq) => args[..eq].rfind(char::is_whitespace).unwrap_or(0),
        None => args.len(),
    };

    let mut ctxt = Ctxt::new();
    for binding in args[split..].split_whitespace() {
        let parsed = binding.split_once('=')
            .and_then(|(name, value)| Some((name, value.parse::<f64>().ok()?)));
        match parsed {
            Some((name, value)) if !name.is_empty() => ctxt.add_var(name, value),
            _ => return Err(Error::Usage(format!("invalid binding `{}`, expected `name=value`", binding))),
        }
    }

    Ok((args[..split].trim(), ctxt))
}

/// Evaluates an expression with the given bindings, printing the result.
fn eval_command(args: &str) {
    let (expr, ctxt) = match parse_eval_args(args) {
        Ok(parsed) => parsed,
        Err(err) => return err.report_to_stderr(args),
    };

    let res = Parser::new(expr)
        .with_variables(ctxt.var_names())
        .try_parse_full::<Expr>()
        .and_then(|ast| Ok((ast.eval(&ctxt)?, ast)));
    match res {
        Ok((value, ast)) if ctxt.is_empty() => println!("{} = {}", ast, value),
        Ok((value, ast)) => {
            let bindings = ctxt.sorted_vars()
                .map(|(name, value)| format!("{} = {}", name, value))
                .collect::<Vec<_>>()
                .join(", ");
            println!("{} = {}, where {}", ast, value, bindings);
        },
        Err(err) => Error::from(err).report_to_stderr(expr),
    }
}

/// Grades a response, printing the outcome and how the response was understood.
fn grade(input: &str, question: &AlgebraQuestion) {
    let result = question.grade_result(input);
    let outcome = match result.outcome {
        Outcome::Correct => result.outcome.fg(Color::Green),
        Outcome::Partial => result.outcome.fg(Color::Yellow),
        Outcome::Incorrect => result.outcome.fg(Color::Red),
    };

    match result.answer {
        Some(id) => println!("{} ({}), matched answer {}", outcome, result.fraction, id),
        None => println!("{} ({})", outcome, result.fraction),
    }

    if let Some(feedback) = &result.feedback {
        println!("  {}", feedback);
    }

    match parse_expression(input, question.options()) {
        Some(expr) => println!("  read as {}", expr),
        None => {
            // show why the response could not be read
            if let Err(err) = Parser::new(input)
                .with_variables(question.options().variable_names())
                .try_parse_full::<Expr>()
            {
                Error::from(err).report_to_stderr(input);
            }
        },
    }
}

/// Splits a line into its first word and the rest, both trimmed.
fn split_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (input, ""),
    }
}

/// Runs a single line of input: a command, or a response to grade.
fn run_line(input: &str, question: &mut AlgebraQuestion) {
    let input = input.trim();
    match split_command(input) {
        (":eval", args) => eval_command(args),
        (":seed", seed) => match seed.parse::<u64>() {
            Ok(seed) => *question = question.clone().with_seed(seed),
            Err(_) => Error::Usage(format!("invalid seed `{}`", seed)).report_to_stderr(input),
        },
        (":answers", _) => {
            for answer in question.answers() {
                println!("{} {} @ {}", answer.id(), answer.expression(), answer.fraction());
            }
        },
        _ => grade(input, question),
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    let mut question = match build_question(args) {
        Ok(question) => question,
        Err(err) => {
            err.report_to_stderr("");
            std::process::exit(1);
        },
    };

    if !io::stdin().is_terminal() {
        // grade each line from stdin
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => (),
                Ok(line) => run_line(&line, &mut question),
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, question: &mut AlgebraQuestion) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            run_line(&input, question);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut question) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn command_words() {
        assert_eq!(split_command(":eval 2x x=3"), (":eval", "2x x=3"));
        assert_eq!(split_command("  :seed   42 "), (":seed", "42"));
        assert_eq!(split_command(":answers"), (":answers", ""));
        assert_eq!(split_command(":evalx 2x"), (":evalx", "2x"));
        assert_eq!(split_command("x + x"), ("x", "+ x"));
    }

    #[test]
    fn eval_bindings() {
        let (expr, ctxt) = parse_eval_args("y * x^2 y=3 x=2").unwrap();
        assert_eq!(expr, "y * x^2");
        assert_eq!(ctxt.sorted_vars().collect::<Vec<_>>(), vec![("x", 2.0), ("y", 3.0)]);

        let (expr, ctxt) = parse_eval_args("2 pi").unwrap();
        assert_eq!(expr, "2 pi");
        assert!(ctxt.is_empty());

        assert!(matches!(parse_eval_args("x x=two"), Err(Error::Usage(_))));
        assert!(matches!(parse_eval_args("x =2"), Err(Error::Usage(_))));
    }
}

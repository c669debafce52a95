use colored::*;
use rustyline::{error::ReadlineError, Config, DefaultEditor};
use smartcalc::{calculate_formatted, evaluate, toggle_debug, ERROR_SENTINEL};

struct RGBValues {
    result: (u8, u8, u8),
    error: (u8, u8, u8),
    carat: (u8, u8, u8),
    message: (u8, u8, u8),
}

/// What the shell remembers between lines. The evaluator itself keeps nothing.
#[derive(Default)]
struct Session {
    x: Option<String>,
}

fn main() -> rustyline::Result<()> {
    let config = Config::builder().build();
    let mut rl = DefaultEditor::with_config(config)?;
    let mut session = Session::default();

    let colours = RGBValues {
        result: (0xB4, 0xB4, 0xB4),  // Light gray
        error: (0xDC, 0x64, 0x5A),   // Soft red
        carat: (0xFF, 0x14, 0x00),   // Bright red
        message: (0x78, 0xB4, 0x78), // Soft green
    };

    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                if line.is_empty() {
                    println!("Goodbye!");
                    break;
                }

                if let Some(command) = line.strip_prefix(':') {
                    match run_command(command, &mut session, &colours) {
                        Ok(msg) => println!(
                            "{}",
                            msg.truecolor(colours.message.0, colours.message.1, colours.message.2)
                        ),
                        Err(msg) => println!(
                            "{}",
                            msg.truecolor(colours.error.0, colours.error.1, colours.error.2)
                        ),
                    }
                    continue;
                }

                let expression = substitute_x(&line, &session);
                match calculate_formatted(&expression) {
                    Ok(result) => println!(
                        "{}",
                        result.truecolor(colours.result.0, colours.result.1, colours.result.2)
                    ),
                    Err(err) => {
                        // positions refer to the line as typed, so only show them when nothing was substituted
                        if let Some(pos) = err.position().filter(|_| expression == line) {
                            println!(
                                "  {}{}",
                                " ".repeat(pos),
                                "^".truecolor(colours.carat.0, colours.carat.1, colours.carat.2)
                            );
                        }
                        println!(
                            "{}",
                            ERROR_SENTINEL.truecolor(
                                colours.error.0,
                                colours.error.1,
                                colours.error.2
                            )
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Pressing enter with no input will exit as well.");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("{:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn substitute_x(line: &str, session: &Session) -> String {
    match &session.x {
        Some(value) if line.contains('x') => line.replace('x', &format!("({})", value)),
        _ => line.to_owned(),
    }
}

fn run_command(
    command: &str,
    session: &mut Session,
    colours: &RGBValues,
) -> Result<String, String> {
    let command = command.trim();
    match command {
        s if s.eq_ignore_ascii_case("test") => {
            let (passed, total) = run_tests(colours);
            Ok(format!("{}/{} tests passed.", passed, total))
        }
        s if s.eq_ignore_ascii_case("debug") => {
            let enabled = toggle_debug();
            Ok(format!("Debug {}", if enabled { "enabled" } else { "disabled" }))
        }
        s if s.starts_with('x') || s.starts_with('X') => {
            let value = s[1..].trim();
            if value.is_empty() {
                session.x = None;
                return Ok("x cleared.".to_owned());
            }
            let result = evaluate(value);
            if result == ERROR_SENTINEL {
                return Err(format!("Invalid value for x: {}", value));
            }
            let msg = format!("x set to {}.", result);
            session.x = Some(result);
            Ok(msg)
        }
        _ => Err("Unknown command!".to_owned()),
    }
}

fn run_tests(colours: &RGBValues) -> (usize, usize) {
    let tests = [
        ("1+2", "3"),
        ("10/2", "5"),
        ("10^2", "100"),
        ("(2+3)*(4-1)", "15"),
        ("2+3*4", "14"),
        ("2^3^2", "64"),
        ("-2*3+5", "-1"),
        ("+10", "10"),
        ("--1+2", "3"),
        ("-1-2-3-4-5-6-7-8-9-10", "-55"),
        ("--(1++2+-3-+4*5/6+7^8+9mod10)", "5764806.6666667"),
        ("7mod3", "1"),
        ("cos(-1.5)^2", "0.0050038"),
        ("cos(1.5)^2*sin(1.5)^2", "0.0049787"),
        ("acos(1)+asin(1)+atan(1)", "2.3561945"),
        ("ln(110)/log(16)", "3.9036644"),
        ("(-Pi*log(0.6))*ln(sin(0.5", "-0.5123806"),
        ("(1E5/10-1E(-3))", "9999.999"),
        ("10/0", "Error"),
        ("5mod0", "Error"),
        ("1 + 2", "Error"),
        ("3+", "Error"),
        ("2x+3", "Error"),
        ("2 + log(0)", "Error"),
        ("2 * (3 + 4))", "Error"),
        ("asin(sqrt(-1))", "Error"),
        ("sqrt(cos(Pi)+sin(Pi)+tan(Pi))", "Error"),
        ("si(1)", "Error"),
        ("1#2", "Error"),
        ("1/*2", "Error"),
    ];

    let mut passed = 0;
    let total = tests.len();

    for (input, expected) in tests {
        println!("> {}", input);
        let result = evaluate(input);
        println!(
            "{}",
            result.truecolor(colours.result.0, colours.result.1, colours.result.2)
        );

        if result == expected {
            println!("{}", "Pass!".green());
            passed += 1;
        } else {
            println!("{}", "fail!".red());
            println!("Expected: '{}'", expected);
            println!("Got     : '{}'", result);
        }

        println!();
    }

    (passed, total)
}

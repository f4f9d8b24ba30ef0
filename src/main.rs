//! Interactive menu over a single in-memory image.
use pgm_processor::{EdgeDetector, FilterKind, Operation, ProcessError, ScaleFactor, Session};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `prompt` and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_number(&mut self, prompt: &str) -> io::Result<Option<Result<i64, String>>> {
        Ok(self
            .ask(prompt)?
            .map(|line| line.parse::<i64>().map_err(|_| line)))
    }
}

fn run<R: BufRead, W: Write>(input: R, out: W) -> io::Result<()> {
    let mut console = Console { input, out };
    let mut session = Session::new();

    writeln!(console.out, "--- Welcome to the PGM Image Processor ---")?;
    loop {
        print_menu(&mut console.out)?;
        let choice = match console.ask_number("Enter your choice: ")? {
            None => break,
            Some(Ok(choice)) => choice,
            Some(Err(_)) => {
                writeln!(console.out, "Invalid input. Please enter a number.")?;
                continue;
            }
        };

        if (2..=6).contains(&choice) && !session.is_loaded() {
            report_error(&mut console.out, &ProcessError::NoImageLoaded)?;
            continue;
        }

        let outcome = match choice {
            0 => {
                writeln!(console.out, "Exiting program. Goodbye!")?;
                break;
            }
            1 => match console.ask("Enter input PGM file path: ")? {
                Some(path) => load(&mut console.out, &mut session, &path)?,
                None => break,
            },
            2 => match console.ask("Enter scaling factor (2, 3, 0.5 or 0.25): ")? {
                Some(token) => match token.parse::<ScaleFactor>() {
                    Ok(factor) => apply(&mut console.out, &mut session, Operation::Resize { factor })?,
                    Err(err) => Err(err),
                },
                None => break,
            },
            3 => {
                writeln!(console.out, "1 - Apply Average/Mean Filter (3x3)")?;
                writeln!(console.out, "2 - Apply Median Filter (3x3)")?;
                match console.ask_number("Enter filter choice: ")? {
                    Some(Ok(n)) => match FilterKind::from_choice(n) {
                        Ok(kind) => apply(&mut console.out, &mut session, Operation::Filter { kind })?,
                        Err(err) => Err(err),
                    },
                    Some(Err(_)) => Err(ProcessError::UnsupportedFactor("non-numeric filter choice".into())),
                    None => break,
                }
            }
            4 => {
                writeln!(console.out, "1 - Apply Sobel Edge Filter")?;
                writeln!(console.out, "2 - Apply Prewitt Edge Filter")?;
                writeln!(console.out, "3 - Apply Canny Edge Detector")?;
                match console.ask_number("Enter edge detection choice: ")? {
                    Some(Ok(n)) => match EdgeDetector::from_choice(n) {
                        Ok(detector) => {
                            apply(&mut console.out, &mut session, Operation::Edge { detector })?
                        }
                        Err(err) => Err(err),
                    },
                    Some(Err(_)) => Err(ProcessError::UnsupportedFactor("non-numeric edge choice".into())),
                    None => break,
                }
            }
            5 => apply(&mut console.out, &mut session, Operation::Lbp)?,
            6 => match console.ask("Enter output PGM file path: ")? {
                Some(path) => match session.save(Path::new(&path)) {
                    Ok(()) => {
                        writeln!(console.out, "SUCCESS: Image saved to '{path}'.")?;
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                None => break,
            },
            _ => {
                writeln!(console.out, "Invalid choice. Please select an option from 0 to 6.")?;
                Ok(())
            }
        };

        if let Err(err) = outcome {
            report_error(&mut console.out, &err)?;
        }
    }
    console.out.flush()
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Operation Menu ---")?;
    writeln!(out, "1 - Load PGM Image")?;
    writeln!(out, "2 - Zoom/Shrink Image")?;
    writeln!(out, "3 - Apply Filter (Average/Median)")?;
    writeln!(out, "4 - Edge Detection (Sobel/Prewitt/Canny)")?;
    writeln!(out, "5 - Compute Local Binary Pattern (LBP)")?;
    writeln!(out, "6 - Save Processed Image")?;
    writeln!(out, "0 - Exit")?;
    writeln!(out, "----------------------")
}

fn load<W: Write>(
    out: &mut W,
    session: &mut Session,
    path: &str,
) -> io::Result<Result<(), ProcessError>> {
    Ok(match session.load(Path::new(path)) {
        Ok(image) => {
            writeln!(
                out,
                "SUCCESS: Image '{path}' loaded. Dimensions: {} x {} (Max Val: {})",
                image.w, image.h, image.max_value
            )?;
            Ok(())
        }
        Err(err) => Err(err),
    })
}

fn apply<W: Write>(
    out: &mut W,
    session: &mut Session,
    op: Operation,
) -> io::Result<Result<(), ProcessError>> {
    Ok(match session.apply(op) {
        Ok(report) => {
            writeln!(
                out,
                "SUCCESS: {} applied ({} x {}, {:.2} ms).",
                report.operation, report.output.width, report.output.height, report.timing.total_ms
            )?;
            Ok(())
        }
        Err(err) => Err(err),
    })
}

fn report_error<W: Write>(out: &mut W, err: &ProcessError) -> io::Result<()> {
    writeln!(out, "ERROR: {err}")
}

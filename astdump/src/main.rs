use ast::{Printer, Program};
use parser::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use structopt::clap::ErrorKind;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct CliOpt {
    /// path to the source file to be parsed
    #[structopt(parse(from_os_str))]
    source: PathBuf,

    /// where to write the tree, "-" for stdout
    #[structopt(short = "o", default_value = "-", parse(from_os_str))]
    output: PathBuf,

    /// only print the parse result
    #[structopt(long = "no-tree")]
    no_tree: bool,

    /// spaces per indentation level
    #[structopt(long = "indent", default_value = "1")]
    indent: usize,
}

fn main() {
    env_logger::init();

    let opt = match CliOpt::from_args_safe() {
        Ok(opt) => opt,
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
            _ => {
                eprintln!("{}", err.message);
                std::process::exit(1);
            }
        },
    };
    log::info!("source: {:?}", opt.source);
    log::info!("output: {:?}", opt.output);

    let source = match std::fs::read_to_string(&opt.source) {
        Ok(source) => source,
        Err(err) => {
            log::debug!("{}", err);
            eprintln!("Cannot open source file: {}", opt.source.display());
            std::process::exit(1);
        }
    };

    let program = match report(&source, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("[error] {}", err);
            std::process::exit(1);
        }
    };

    if let Some(program) = program {
        if opt.no_tree {
            return;
        }
        if let Err(err) = write_tree(&program, Printer::new(opt.indent), &opt.output) {
            eprintln!("Cannot write tree to {}: {}", opt.output.display(), err);
            std::process::exit(1);
        }
    }
}

/// Parses `source`, writes the status line to `out` and any parse error to
/// `err`. Returns the tree on success.
fn report<O: Write, E: Write>(
    source: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<Option<Program>> {
    let result = parser::parse_program(source);
    let status = if result.is_ok() { 0 } else { 1 };
    writeln!(out, "Parse result: {}", status)?;

    match result {
        Ok(program) => {
            log::info!("{} nodes", ast::count_nodes(&program));
            Ok(Some(program))
        }
        Err(e) => {
            match e {
                Error::Lexical { .. } => writeln!(err, "Lexer error: {}", e)?,
                Error::Grammar { .. } => writeln!(err, "Parser error: {}", e)?,
                Error::LiteralRange { .. } => writeln!(err, "Unexpected exception: {}", e)?,
            }
            Ok(None)
        }
    }
}

fn write_tree(program: &Program, printer: Printer, output: &Path) -> io::Result<()> {
    let text = printer.dump(program);
    if output.to_str() == Some("-") {
        io::stdout().write_all(text.as_bytes())
    } else {
        std::fs::write(output, text)
    }
}

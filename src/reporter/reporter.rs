use std::io::Write;

use crate::{
    errors::errors::{Error, ErrorImpl},
    values::environment::Environment,
    Position,
};

use super::steps::Step;

/// Produces the output line for a step, without the trailing newline.
///
/// Declarations are applied to the environment and produce no line.
pub fn render_step(environment: &mut Environment, step: &Step) -> Result<Option<String>, Error> {
    match step {
        Step::Declare(binding) => {
            environment.declare_variable(binding.clone())?;
            Ok(None)
        }
        Step::Print { variable } => {
            let binding = environment.resolve(variable)?;
            Ok(Some(binding.value.to_string()))
        }
        Step::PrintType { variable, prefix } => {
            let binding = environment.resolve(variable)?;
            Ok(Some(format!("{}{} ", prefix, binding.get_type())))
        }
    }
}

/// Executes every step in order against a fresh environment, writing each
/// printed line to `out`. Returns the number of lines written.
pub fn run<W: Write>(steps: &[Step], out: &mut W) -> Result<usize, Error> {
    let mut environment = Environment::new();
    let mut lines_written = 0;

    for (index, step) in steps.iter().enumerate() {
        let position = Position(index + 1);

        let line = render_step(&mut environment, step).map_err(|e| e.at(position.clone()))?;

        if let Some(line) = line {
            writeln!(out, "{}", line)
                .map_err(|e| Error::new(ErrorImpl::from(e), position.clone()))?;
            lines_written += 1;
        }
    }

    out.flush()
        .map_err(|e| Error::new(ErrorImpl::from(e), Position(steps.len())))?;

    Ok(lines_written)
}

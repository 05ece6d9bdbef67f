use crate::cli::OutputTarget;
use crate::error::{CliError, Result};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Picks the file the result is saved to, asking at the terminal when the command line
/// names neither an output path nor `--in-place`.
pub fn resolve_output(input: &Path, target: &OutputTarget) -> Result<PathBuf> {
    if let Some(path) = &target.output {
        return Ok(path.clone());
    }
    if target.in_place {
        return Ok(input.to_path_buf());
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(CliError::Argument(
            "No --output given and stdin is not a terminal. Pass -o/--output or --in-place."
                .to_string(),
        ));
    }
    ask_save_name(&mut stdin.lock(), &mut io::stderr(), input)
}

/// Asks for a file name; an empty answer keeps `input`.
pub fn ask_save_name(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    input: &Path,
) -> Result<PathBuf> {
    write!(
        writer,
        "Save as (leave empty to overwrite {}): ",
        input.display()
    )?;
    writer.flush()?;

    let mut answer = String::new();
    if reader.read_line(&mut answer)? == 0 {
        return Err(CliError::Argument(
            "No file name given before end of input.".to_string(),
        ));
    }
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(input.to_path_buf())
    } else {
        Ok(PathBuf::from(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_output_wins() {
        let target = OutputTarget {
            output: Some(PathBuf::from("out.pdb")),
            in_place: false,
        };
        let path = resolve_output(Path::new("in.pdb"), &target).unwrap();
        assert_eq!(path, PathBuf::from("out.pdb"));
    }

    #[test]
    fn in_place_reuses_input() {
        let target = OutputTarget {
            output: None,
            in_place: true,
        };
        let path = resolve_output(Path::new("in.pdb"), &target).unwrap();
        assert_eq!(path, PathBuf::from("in.pdb"));
    }

    #[test]
    fn empty_answer_overwrites_input() {
        let mut prompt = Vec::new();
        let path = ask_save_name(&mut "\n".as_bytes(), &mut prompt, Path::new("in.pdb")).unwrap();
        assert_eq!(path, PathBuf::from("in.pdb"));
        assert!(String::from_utf8(prompt).unwrap().contains("overwrite in.pdb"));
    }

    #[test]
    fn answer_is_trimmed_into_path() {
        let path = ask_save_name(
            &mut "  fixed.pdb \r\n".as_bytes(),
            &mut io::sink(),
            Path::new("in.pdb"),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("fixed.pdb"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let result = ask_save_name(&mut "".as_bytes(), &mut io::sink(), Path::new("in.pdb"));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}

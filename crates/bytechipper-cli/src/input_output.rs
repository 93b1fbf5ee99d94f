use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// `None` selects stdin/stdout; as does `"-"`.
fn file_arg(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a line reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_arg(&self.input) {
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_arg(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_file_arg() {
        assert_eq!(file_arg(&None), None);
        assert_eq!(file_arg(&Some("-".to_string())), None);
        assert_eq!(file_arg(&Some("a.txt".to_string())), Some("a.txt"));
    }

    #[test]
    fn test_files() {
        let dir = TempDir::new("bchipper_io").unwrap();
        let path = dir.path().join("out.txt").to_string_lossy().into_owned();

        let output = OutputArgs {
            output: Some(path.clone()),
        };
        {
            let mut writer = output.open_writer().unwrap();
            writeln!(writer, "17 22").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "17 22\n");

        let input = InputArgs { input: Some(path) };
        let lines: Vec<String> = input
            .open_reader()
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["17 22".to_string()]);

        let missing = InputArgs {
            input: Some(dir.path().join("missing.txt").to_string_lossy().into_owned()),
        };
        assert!(missing.open_reader().is_err());
    }
}

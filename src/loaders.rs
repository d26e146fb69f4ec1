use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::trace;

/// One row of a batch file: the raw text of the three form fields.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Submission {
    /// Physical line of the file on which the record starts.
    #[serde(skip)]
    pub line: u64,
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Load submissions from a CSV file with a `title,description,people`
/// header.
pub fn load_file(path: &Path) -> Result<Vec<Submission>> {
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("cannot open batch file {}", path.display()))?;
    load(file).wrap_err_with(|| format!("cannot load batch file {}", path.display()))
}

pub fn load<R: Read>(reader: R) -> Result<Vec<Submission>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::None).from_reader(reader);
    let headers = reader.headers().wrap_err("cannot read header")?.clone();
    let mut submissions = Vec::new();
    for record in reader.records() {
        let record = record.wrap_err("cannot read record")?;
        let line = record.position().map_or(0, csv::Position::line);
        let mut submission: Submission = record
            .deserialize(Some(&headers))
            .wrap_err_with(|| format!("invalid record on line {line}"))?;
        submission.line = line;
        trace!(?submission, "loaded submission");
        submissions.push(submission);
    }
    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let data = "title,description,people\n\
                    Website,Build the website,3\n\
                    \"Move, office\",Pack everything,abc\n";
        let submissions = load(data.as_bytes()).unwrap();
        assert_eq!(
            submissions,
            vec![
                Submission {
                    line: 2,
                    title: "Website".into(),
                    description: "Build the website".into(),
                    people: "3".into(),
                },
                Submission {
                    line: 3,
                    title: "Move, office".into(),
                    description: "Pack everything".into(),
                    people: "abc".into(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let submissions = load("title,description,people\n,,\n".as_bytes()).unwrap();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].title.is_empty());
    }

    #[test]
    fn test_lines_follow_multiline_records() {
        let data = "title,description,people\n\"Multi\nline\",Build the website,3\nBad,Desc,9\n";
        let submissions = load(data.as_bytes()).unwrap();
        assert_eq!(
            submissions.iter().map(|s| s.line).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(submissions[0].title, "Multi\nline");
    }

    #[test]
    fn test_missing_column() {
        assert!(load("title,description\nA,B\n".as_bytes()).is_err());
    }
}

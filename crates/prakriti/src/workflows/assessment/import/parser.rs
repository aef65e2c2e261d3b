use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct AnswerRow {
    pub(crate) line: u64,
    pub(crate) question_id: u32,
    pub(crate) characteristic_index: usize,
    pub(crate) response: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<AnswerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        let row: RawRow = record.deserialize(Some(&headers))?;
        let Some(response) = row.response else {
            continue;
        };

        rows.push(AnswerRow {
            line,
            question_id: row.question_id,
            characteristic_index: row.characteristic_index,
            response,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    question_id: u32,
    characteristic_index: usize,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    response: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
